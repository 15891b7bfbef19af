use crate::limits::MAX_CONTAINER_WIDTH;
use crate::wire::{MajorType, TAG_DECIMAL_FRACTION};
use crate::{CborError, Decoder, ErrorCode};

/// A decimal fraction `mantissa × 10^exponent` (tag 4 over `[exponent, mantissa]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalFraction {
    /// Base-10 exponent.
    pub exponent: i32,
    /// Integer mantissa.
    pub mantissa: i32,
}

impl<'a> Decoder<'a> {
    /// Read a tag number and move to the tagged item.
    ///
    /// The tag and the item it wraps count as one item of the enclosing container, so reading
    /// the tag does not use up a container slot.
    ///
    /// # Errors
    ///
    /// Returns `InvalidType` if the next item is not a tag, `Overflow` for tag numbers wider
    /// than 32 bits, and `EndOfBuffer` on truncated input.
    pub fn get_tag(&mut self) -> Result<u32, CborError> {
        let off = self.position();
        let (tag, n) = self.peek_uint(MajorType::Tag, MAX_CONTAINER_WIDTH)?;
        let tag = u32::try_from(tag).map_err(|_| CborError::new(ErrorCode::Overflow, off))?;
        self.skip_bytes(n);
        Ok(tag)
    }

    /// Read a decimal fraction.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the next item is not tag 4 wrapping an array. Errors while reading
    /// the exponent and mantissa, or an array with more than two items, are returned as-is.
    /// The cursor only moves on success.
    pub fn get_decimal_frac(&mut self) -> Result<DecimalFraction, CborError> {
        let off = self.position();
        let not_found = CborError::new(ErrorCode::NotFound, off);

        let mut probe = *self;
        match probe.get_tag() {
            Ok(TAG_DECIMAL_FRACTION) => {}
            _ => return Err(not_found),
        }
        let mut arr = probe.enter_array().map_err(|_| not_found)?;
        let exponent = arr.get_i32()?;
        let mantissa = arr.get_i32()?;
        probe.leave_container(arr)?;

        *self = probe;
        Ok(DecimalFraction { exponent, mantissa })
    }
}
