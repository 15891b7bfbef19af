use crate::raw::RawCbor;
use crate::tag::DecimalFraction;
use crate::{CborError, Decoder, ErrorCode};

/// Decode a value from a [`Decoder`].
pub trait CborDecode<'a>: Sized {
    /// Decode `Self` from the item at the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the item does not match the expected type or is malformed.
    /// Implementations must leave the cursor unchanged on error.
    fn decode(decoder: &mut Decoder<'a>) -> Result<Self, CborError>;
}

impl<'a> Decoder<'a> {
    /// Decode the item at the cursor as `T`.
    ///
    /// # Errors
    ///
    /// Returns whatever `T`'s [`CborDecode`] implementation reports.
    #[inline]
    pub fn decode<T: CborDecode<'a>>(&mut self) -> Result<T, CborError> {
        T::decode(self)
    }
}

/// Decode a buffer holding exactly one item.
///
/// # Errors
///
/// Returns the decode error for the item, or `TrailingBytes` if input is left over.
pub fn decode<'a, T: CborDecode<'a>>(bytes: &'a [u8]) -> Result<T, CborError> {
    let mut decoder = Decoder::new(bytes);
    let value = T::decode(&mut decoder)?;
    if decoder.remaining_bytes() != 0 {
        return Err(CborError::new(
            ErrorCode::TrailingBytes,
            decoder.position(),
        ));
    }
    Ok(value)
}

macro_rules! impl_decode_via {
    ($($t:ty => $get:ident),* $(,)?) => {$(
        impl<'a> CborDecode<'a> for $t {
            #[inline]
            fn decode(decoder: &mut Decoder<'a>) -> Result<Self, CborError> {
                decoder.$get()
            }
        }
    )*};
}

impl_decode_via!(
    u8 => get_u8,
    u16 => get_u16,
    u32 => get_u32,
    u64 => get_u64,
    i8 => get_i8,
    i16 => get_i16,
    i32 => get_i32,
    i64 => get_i64,
    bool => get_bool,
    DecimalFraction => get_decimal_frac,
);

impl<'a> CborDecode<'a> for &'a [u8] {
    fn decode(decoder: &mut Decoder<'a>) -> Result<Self, CborError> {
        decoder.get_bstr()
    }
}

impl<'a> CborDecode<'a> for &'a str {
    fn decode(decoder: &mut Decoder<'a>) -> Result<Self, CborError> {
        decoder.get_str()
    }
}

impl<'a> CborDecode<'a> for RawCbor<'a> {
    fn decode(decoder: &mut Decoder<'a>) -> Result<Self, CborError> {
        decoder.get_raw()
    }
}

impl<'a, T: CborDecode<'a>> CborDecode<'a> for Option<T> {
    fn decode(decoder: &mut Decoder<'a>) -> Result<Self, CborError> {
        if decoder.get_null().is_ok() {
            return Ok(None);
        }
        T::decode(decoder).map(Some)
    }
}
