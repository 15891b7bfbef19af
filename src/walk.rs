use crate::limits::{DEFAULT_MAX_DEPTH, MAX_ARG_WIDTH};
use crate::raw::RawCbor;
use crate::wire::MajorType;
use crate::{CborError, Decoder, ErrorCode};

impl<'a> Decoder<'a> {
    /// Skip one item whose whole encoding is its header: an integer, a simple value, or a
    /// float.
    ///
    /// On a tag, only the tag header is consumed and the cursor lands on the tagged item. As
    /// with [`Decoder::get_tag`], no container slot is used until that item is read. Use
    /// [`Decoder::skip`] to skip a tag together with its content.
    ///
    /// # Errors
    ///
    /// Returns `EndOfBuffer` at the end of the current scope or on truncated input, and
    /// `Invalid` for reserved or indefinite headers.
    pub fn skip_simple(&mut self) -> Result<(), CborError> {
        let major = self.get_type()?;
        let (_, n) = self.peek_uint(major, MAX_ARG_WIDTH)?;
        if major == MajorType::Tag {
            self.skip_bytes(n);
        } else {
            self.advance(n);
        }
        Ok(())
    }

    /// Skip exactly one item of any type, including everything nested inside it.
    ///
    /// Uses [`DEFAULT_MAX_DEPTH`] as the nesting budget.
    ///
    /// # Errors
    ///
    /// See [`Decoder::skip_limited`].
    pub fn skip(&mut self) -> Result<(), CborError> {
        self.skip_limited(DEFAULT_MAX_DEPTH)
    }

    /// Skip exactly one item, allowing at most `limit` nested arrays, maps, and tags.
    ///
    /// # Errors
    ///
    /// Returns `RecursionLimitExceeded` once the budget runs out, otherwise the first
    /// structural error met inside the item. The cursor does not move on error.
    pub fn skip_limited(&mut self, limit: u8) -> Result<(), CborError> {
        if limit == 0 {
            return Err(CborError::new(
                ErrorCode::RecursionLimitExceeded,
                self.position(),
            ));
        }
        match self.get_type()? {
            major @ (MajorType::Bytes | MajorType::Text) => {
                self.get_string(major)?;
            }
            major @ (MajorType::Array | MajorType::Map) => {
                let mut inner = if major == MajorType::Map {
                    self.enter_map()?
                } else {
                    self.enter_array()?
                };
                while !inner.at_end() {
                    inner.skip_limited(limit - 1)?;
                }
                self.leave_container(inner)?;
            }
            MajorType::Tag => {
                let mut probe = *self;
                probe.get_tag()?;
                probe.skip_limited(limit - 1)?;
                *self = probe;
            }
            MajorType::Uint | MajorType::Nint | MajorType::Float => self.skip_simple()?,
        }
        Ok(())
    }

    /// Skip one item and return its exact encoded bytes.
    ///
    /// # Errors
    ///
    /// As [`Decoder::skip`].
    pub fn get_raw(&mut self) -> Result<RawCbor<'a>, CborError> {
        let start = self.position();
        self.skip()?;
        Ok(RawCbor::new(&self.data()[start..self.position()], start))
    }
}
