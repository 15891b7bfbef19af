use crate::wire::{self, MajorType, AI_EIGHT_BYTES, AI_MASK, AI_ONE_BYTE, BREAK};
use crate::{CborError, ErrorCode};

/// What kind of scope a [`Decoder`] reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    /// Not inside any container.
    TopLevel,
    /// Inside an array or map with a stated item count.
    Definite,
    /// Inside an array or map terminated by a break byte.
    Indefinite,
}

/// Forward-only read cursor over a borrowed CBOR buffer.
///
/// A `Decoder` never allocates and never copies payload bytes: strings come back as slices of
/// the source buffer. Every read takes `&mut self` and either advances past exactly the item
/// it decoded or, on error, leaves the cursor where it was.
///
/// Entering an array or map hands out a child decoder scoped to that container; give it back
/// with [`Decoder::leave_container`] once [`Decoder::at_end`] reports the container is done.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
    pub(crate) remaining: u32,
    pub(crate) scope: Scope,
}

impl<'a> Decoder<'a> {
    /// Construct a top-level decoder over `data`.
    #[inline]
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            remaining: 0,
            scope: Scope::TopLevel,
        }
    }

    #[inline]
    pub(crate) const fn child(&self, pos: usize, remaining: u32, scope: Scope) -> Self {
        Self {
            data: self.data,
            pos,
            remaining,
            scope,
        }
    }

    /// Return the current byte offset in the buffer.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Return the whole source buffer this decoder reads from.
    #[inline]
    #[must_use]
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Bytes left between the cursor and the end of the buffer.
    #[inline]
    #[must_use]
    pub const fn remaining_bytes(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns `true` when nothing more can be read from this scope.
    ///
    /// That is the case at the end of the buffer, in a definite container once all of its
    /// items were read, and in an indefinite container when the next byte is the break code.
    /// The cursor is not moved, so repeated calls agree.
    #[must_use]
    pub fn at_end(&self) -> bool {
        if self.pos >= self.data.len() {
            return true;
        }
        match self.scope {
            Scope::TopLevel => false,
            Scope::Definite => self.remaining == 0,
            Scope::Indefinite => self.data[self.pos] == BREAK,
        }
    }

    /// Return the major type of the next item.
    ///
    /// # Errors
    ///
    /// Returns `EndOfBuffer` if [`Decoder::at_end`] is true.
    pub fn get_type(&self) -> Result<MajorType, CborError> {
        self.peek_header().map(MajorType::from_header)
    }

    #[inline]
    pub(crate) fn peek_header(&self) -> Result<u8, CborError> {
        if self.at_end() {
            return Err(CborError::new(ErrorCode::EndOfBuffer, self.pos));
        }
        Ok(self.data[self.pos])
    }

    /// Move past one item of `n` bytes.
    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining_bytes());
        self.pos += n;
        if self.scope == Scope::Definite {
            self.remaining = self.remaining.saturating_sub(1);
        }
    }

    /// Move past `n` bytes that do not form an item of their own (a tag header).
    #[inline]
    pub(crate) fn skip_bytes(&mut self, n: usize) {
        debug_assert!(n <= self.remaining_bytes());
        self.pos += n;
    }

    #[inline]
    pub(crate) fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Decode the header argument of the next item without moving the cursor.
    ///
    /// The item must have major type `major`, and an argument carried in trailing bytes may be
    /// at most `max_width` bytes wide (1, 2, 4 or 8). Returns the argument and the number of
    /// bytes the header occupies, which the caller commits with [`Decoder::advance`].
    pub(crate) fn peek_uint(
        &self,
        major: MajorType,
        max_width: usize,
    ) -> Result<(u64, usize), CborError> {
        let off = self.pos;
        let ib = self.peek_header()?;
        if MajorType::from_header(ib) != major {
            return Err(CborError::new(ErrorCode::InvalidType, off));
        }
        let ai = ib & AI_MASK;
        if ai < AI_ONE_BYTE {
            return Ok((u64::from(ai), 1));
        }
        if ai > AI_EIGHT_BYTES {
            return Err(CborError::new(ErrorCode::Invalid, off));
        }
        let width = 1usize << (ai - AI_ONE_BYTE);
        if width > max_width {
            return Err(CborError::new(ErrorCode::Overflow, off));
        }
        let trailing = self
            .data
            .get(off + 1..off + 1 + width)
            .ok_or_else(|| CborError::new(ErrorCode::EndOfBuffer, off))?;
        Ok((wire::read_be_arg(trailing), 1 + width))
    }
}
