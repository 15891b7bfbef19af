//! Header layout of the CBOR wire format.

/// Bit offset of the major type inside a header byte.
pub const MAJOR_SHIFT: u8 = 5;
/// Mask selecting the additional-info (selector) bits of a header byte.
pub const AI_MASK: u8 = 0x1f;

/// Selector: argument follows in 1 byte.
pub const AI_ONE_BYTE: u8 = 24;
/// Selector: argument follows in 8 bytes.
pub const AI_EIGHT_BYTES: u8 = 27;
/// Selector: indefinite length.
pub const AI_INDEFINITE: u8 = 31;

/// Simple value `false`.
pub const SIMPLE_FALSE: u8 = 20;
/// Simple value `true`.
pub const SIMPLE_TRUE: u8 = 21;
/// Simple value `null`.
pub const SIMPLE_NULL: u8 = 22;
/// Simple value `undefined`.
pub const SIMPLE_UNDEFINED: u8 = 23;

/// Stop code terminating an indefinite-length container.
pub const BREAK: u8 = 0xff;

/// Tag number of a decimal fraction `[exponent, mantissa]`.
pub const TAG_DECIMAL_FRACTION: u32 = 4;

/// The major type carried in the top three bits of every item header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MajorType {
    /// Major type 0: unsigned integer.
    Uint,
    /// Major type 1: negative integer, encoded as `-1 - n`.
    Nint,
    /// Major type 2: byte string.
    Bytes,
    /// Major type 3: text string.
    Text,
    /// Major type 4: array.
    Array,
    /// Major type 5: map.
    Map,
    /// Major type 6: tag.
    Tag,
    /// Major type 7: simple values and floats.
    Float,
}

impl MajorType {
    /// Major type of a header byte.
    #[inline]
    #[must_use]
    pub const fn from_header(ib: u8) -> Self {
        match ib >> MAJOR_SHIFT {
            0 => Self::Uint,
            1 => Self::Nint,
            2 => Self::Bytes,
            3 => Self::Text,
            4 => Self::Array,
            5 => Self::Map,
            6 => Self::Tag,
            _ => Self::Float,
        }
    }

    /// The numeric major type, `0..=7`.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Uint => 0,
            Self::Nint => 1,
            Self::Bytes => 2,
            Self::Text => 3,
            Self::Array => 4,
            Self::Map => 5,
            Self::Tag => 6,
            Self::Float => 7,
        }
    }

    /// Header byte with this major type and the given selector.
    #[inline]
    #[must_use]
    pub const fn header(self, ai: u8) -> u8 {
        (self.code() << MAJOR_SHIFT) | (ai & AI_MASK)
    }
}

/// Reorder a big-endian `u64` into host order.
#[inline]
#[must_use]
pub const fn be_to_host(v: u64) -> u64 {
    u64::from_be(v)
}

/// Widen 1, 2, 4, or 8 big-endian bytes into a host-order `u64`.
///
/// The bytes land in the least significant end of an 8-byte window, then pass through
/// [`be_to_host`].
#[inline]
pub(crate) fn read_be_arg(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= 8);
    let mut window = [0u8; 8];
    window[8 - bytes.len()..].copy_from_slice(bytes);
    be_to_host(u64::from_ne_bytes(window))
}
