use core::fmt;

/// A structured error code identifying why a read was rejected.
///
/// The set is fixed and string-free so it stays usable without `std`. Each code also has a
/// stable negative integer form, see [`ErrorCode::raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// A decoded integer or length does not fit the destination, or a map's item count
    /// overflowed when doubled.
    Overflow,
    /// The item's major type does not match what the caller asked for.
    InvalidType,
    /// The read would run past the end of the buffer or of the current container.
    EndOfBuffer,
    /// Malformed header: reserved additional-info value, an indefinite marker where none is
    /// allowed, or a container left before it was fully consumed.
    Invalid,
    /// Generic skip ran out of its nesting budget.
    RecursionLimitExceeded,
    /// Semantic miss: key not present in a map, or tag mismatch for a derived type.
    NotFound,
    /// Text string is not valid UTF-8.
    Utf8Invalid,
    /// Input continues after the single item that was expected.
    TrailingBytes,
}

impl ErrorCode {
    /// Negative status code for callers that bridge to integer return conventions.
    ///
    /// `0` is reserved for success and is never returned.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::Overflow => -1,
            Self::InvalidType => -2,
            Self::EndOfBuffer => -3,
            Self::Invalid => -4,
            Self::RecursionLimitExceeded => -5,
            Self::NotFound => -6,
            Self::Utf8Invalid => -7,
            Self::TrailingBytes => -8,
        }
    }

    const fn message(self) -> &'static str {
        match self {
            Self::Overflow => "value does not fit the destination",
            Self::InvalidType => "unexpected major type",
            Self::EndOfBuffer => "unexpected end of buffer",
            Self::Invalid => "malformed item header",
            Self::RecursionLimitExceeded => "recursion limit exceeded",
            Self::NotFound => "not found",
            Self::Utf8Invalid => "text must be valid UTF-8",
            Self::TrailingBytes => "trailing bytes after single CBOR item",
        }
    }
}

/// A decode error with a stable code and the byte offset of the item that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CborError {
    /// The error code.
    pub code: ErrorCode,
    /// Byte offset into the source buffer where the error was detected.
    pub offset: usize,
}

impl CborError {
    /// Construct an error at `offset`.
    #[inline]
    #[must_use]
    pub const fn new(code: ErrorCode, offset: usize) -> Self {
        Self { code, offset }
    }

    /// Returns true iff this is the semantic "absent" outcome rather than a parse failure.
    #[inline]
    #[must_use]
    pub const fn is_not_found(self) -> bool {
        matches!(self.code, ErrorCode::NotFound)
    }
}

impl fmt::Display for CborError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cbor decode failed at {}: {}",
            self.offset,
            self.code.message()
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CborError {}
