use crate::limits::MAX_STRING_WIDTH;
use crate::wire::MajorType;
use crate::{CborError, Decoder, ErrorCode};

#[cfg(feature = "simdutf8")]
fn text_from_bytes(bytes: &[u8]) -> Option<&str> {
    simdutf8::basic::from_utf8(bytes).ok()
}

#[cfg(not(feature = "simdutf8"))]
fn text_from_bytes(bytes: &[u8]) -> Option<&str> {
    core::str::from_utf8(bytes).ok()
}

impl<'a> Decoder<'a> {
    /// Read a definite-length string of `major` type and return its payload slice.
    pub(crate) fn get_string(&mut self, major: MajorType) -> Result<&'a [u8], CborError> {
        let off = self.position();
        let (len, hdr) = self.peek_uint(major, MAX_STRING_WIDTH)?;
        let len = usize::try_from(len).map_err(|_| CborError::new(ErrorCode::Overflow, off))?;
        let start = off + hdr;
        if self.data().len() - start < len {
            return Err(CborError::new(ErrorCode::EndOfBuffer, off));
        }
        let payload = &self.data()[start..start + len];
        self.advance(hdr + len);
        Ok(payload)
    }

    /// Read a byte string and return a view of its contents.
    ///
    /// The slice borrows from the source buffer; nothing is copied.
    ///
    /// # Errors
    ///
    /// Returns `InvalidType` if the next item is not a byte string, `EndOfBuffer` if the
    /// stated length runs past the buffer, and `Invalid` for indefinite-length strings.
    pub fn get_bstr(&mut self) -> Result<&'a [u8], CborError> {
        self.get_string(MajorType::Bytes)
    }

    /// Read a text string and return its raw UTF-8 bytes without validating them.
    ///
    /// # Errors
    ///
    /// As [`Decoder::get_bstr`], for major type 3.
    pub fn get_tstr(&mut self) -> Result<&'a [u8], CborError> {
        self.get_string(MajorType::Text)
    }

    /// Read a text string and validate it as UTF-8.
    ///
    /// # Errors
    ///
    /// As [`Decoder::get_tstr`], plus `Utf8Invalid`. The cursor does not move on any error.
    pub fn get_str(&mut self) -> Result<&'a str, CborError> {
        let mut probe = *self;
        let bytes = probe.get_tstr()?;
        let text = text_from_bytes(bytes)
            .ok_or_else(|| CborError::new(ErrorCode::Utf8Invalid, self.position()))?;
        *self = probe;
        Ok(text)
    }
}
