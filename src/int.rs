use core::mem::size_of;
use core::ops::{Neg, Sub};

use crate::wire::MajorType;
use crate::{CborError, Decoder, ErrorCode};

impl<'a> Decoder<'a> {
    fn get_unsigned<T: TryFrom<u64>>(&mut self) -> Result<T, CborError> {
        let off = self.position();
        let (v, n) = self.peek_uint(MajorType::Uint, size_of::<T>())?;
        let v = T::try_from(v).map_err(|_| CborError::new(ErrorCode::Overflow, off))?;
        self.advance(n);
        Ok(v)
    }

    fn get_signed<T>(&mut self) -> Result<T, CborError>
    where
        T: TryFrom<u64> + Neg<Output = T> + Sub<Output = T> + From<i8>,
    {
        let off = self.position();
        let major = self.get_type()?;
        if !matches!(major, MajorType::Uint | MajorType::Nint) {
            return Err(CborError::new(ErrorCode::InvalidType, off));
        }
        let (mag, n) = self.peek_uint(major, size_of::<T>())?;
        let mag = T::try_from(mag).map_err(|_| CborError::new(ErrorCode::Overflow, off))?;
        let v = if major == MajorType::Nint {
            -mag - T::from(1)
        } else {
            mag
        };
        self.advance(n);
        Ok(v)
    }

    /// Read an unsigned integer that fits in a `u8`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidType` for any other major type, `Overflow` if the value needs more than
    /// 8 bits, and `EndOfBuffer` on truncated input.
    pub fn get_u8(&mut self) -> Result<u8, CborError> {
        self.get_unsigned()
    }

    /// Read an unsigned integer that fits in a `u16`.
    ///
    /// # Errors
    ///
    /// As [`Decoder::get_u8`], with a 16-bit range.
    pub fn get_u16(&mut self) -> Result<u16, CborError> {
        self.get_unsigned()
    }

    /// Read an unsigned integer that fits in a `u32`.
    ///
    /// # Errors
    ///
    /// As [`Decoder::get_u8`], with a 32-bit range.
    pub fn get_u32(&mut self) -> Result<u32, CborError> {
        self.get_unsigned()
    }

    /// Read any unsigned integer.
    ///
    /// # Errors
    ///
    /// Returns `InvalidType` for any other major type and `EndOfBuffer` on truncated input.
    pub fn get_u64(&mut self) -> Result<u64, CborError> {
        self.get_unsigned()
    }

    /// Read a signed integer (major type 0 or 1) that fits in an `i8`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidType` for non-integer items, `Overflow` if the encoded magnitude
    /// exceeds `i8::MAX`, and `EndOfBuffer` on truncated input.
    pub fn get_i8(&mut self) -> Result<i8, CborError> {
        self.get_signed()
    }

    /// Read a signed integer that fits in an `i16`.
    ///
    /// # Errors
    ///
    /// As [`Decoder::get_i8`], with a 16-bit range.
    pub fn get_i16(&mut self) -> Result<i16, CborError> {
        self.get_signed()
    }

    /// Read a signed integer that fits in an `i32`.
    ///
    /// # Errors
    ///
    /// As [`Decoder::get_i8`], with a 32-bit range.
    pub fn get_i32(&mut self) -> Result<i32, CborError> {
        self.get_signed()
    }

    /// Read a signed integer that fits in an `i64`.
    ///
    /// # Errors
    ///
    /// As [`Decoder::get_i8`], with a 64-bit range.
    pub fn get_i64(&mut self) -> Result<i64, CborError> {
        self.get_signed()
    }
}
