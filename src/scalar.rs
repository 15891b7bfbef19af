use crate::wire::{
    MajorType, AI_MASK, AI_ONE_BYTE, SIMPLE_FALSE, SIMPLE_NULL, SIMPLE_TRUE, SIMPLE_UNDEFINED,
};
use crate::{CborError, Decoder, ErrorCode};

impl<'a> Decoder<'a> {
    fn expect_simple(&mut self, value: u8) -> Result<(), CborError> {
        let off = self.position();
        if self.peek_header()? != MajorType::Float.header(value) {
            return Err(CborError::new(ErrorCode::InvalidType, off));
        }
        self.advance(1);
        Ok(())
    }

    /// Read a boolean.
    ///
    /// # Errors
    ///
    /// Returns `InvalidType` unless the next item is `true` or `false`.
    pub fn get_bool(&mut self) -> Result<bool, CborError> {
        let off = self.position();
        let ib = self.peek_header()?;
        let v = if ib == MajorType::Float.header(SIMPLE_TRUE) {
            true
        } else if ib == MajorType::Float.header(SIMPLE_FALSE) {
            false
        } else {
            return Err(CborError::new(ErrorCode::InvalidType, off));
        };
        self.advance(1);
        Ok(v)
    }

    /// Consume a `null`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidType` unless the next item is `null`.
    pub fn get_null(&mut self) -> Result<(), CborError> {
        self.expect_simple(SIMPLE_NULL)
    }

    /// Consume an `undefined`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidType` unless the next item is `undefined`.
    pub fn get_undefined(&mut self) -> Result<(), CborError> {
        self.expect_simple(SIMPLE_UNDEFINED)
    }

    /// Read a simple value (major type 7, `0..=23` inline or `32..=255` in one trailing byte).
    ///
    /// Floats are not simple values and are rejected with `InvalidType`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidType` for anything but a simple value, `Invalid` for the reserved
    /// two-byte forms `0..=31`, and `EndOfBuffer` on truncated input.
    pub fn get_simple(&mut self) -> Result<u8, CborError> {
        let off = self.position();
        let ib = self.peek_header()?;
        if MajorType::from_header(ib) != MajorType::Float || (ib & AI_MASK) > AI_ONE_BYTE {
            return Err(CborError::new(ErrorCode::InvalidType, off));
        }
        let (v, n) = self.peek_uint(MajorType::Float, 1)?;
        if n == 2 && v < 32 {
            return Err(CborError::new(ErrorCode::Invalid, off));
        }
        let v = u8::try_from(v).map_err(|_| CborError::new(ErrorCode::Overflow, off))?;
        self.advance(n);
        Ok(v)
    }
}
