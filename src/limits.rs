/// Default nesting budget for [`Decoder::skip`](crate::Decoder::skip) and the operations built
/// on it.
///
/// Every item visited while skipping spends one unit at its nesting level, scalars included.
/// So this many nested arrays still skip when the innermost one is empty, while the same
/// nesting around a scalar, or one more array, fails with
/// [`ErrorCode::RecursionLimitExceeded`](crate::ErrorCode::RecursionLimitExceeded).
/// Use [`Decoder::skip_limited`](crate::Decoder::skip_limited) to pick another budget.
pub const DEFAULT_MAX_DEPTH: u8 = 10;

/// Widest argument, in trailing bytes, accepted for an array/map length or a tag number.
///
/// Container item counts are tracked in a `u32`.
pub const MAX_CONTAINER_WIDTH: usize = 4;

/// Widest argument, in trailing bytes, accepted for a byte/text string length.
pub const MAX_STRING_WIDTH: usize = core::mem::size_of::<usize>();

/// Widest argument, in trailing bytes, that any header can carry.
pub const MAX_ARG_WIDTH: usize = 8;
