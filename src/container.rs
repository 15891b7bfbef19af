use crate::decoder::Scope;
use crate::limits::MAX_CONTAINER_WIDTH;
use crate::wire::{MajorType, AI_INDEFINITE, BREAK};
use crate::{CborError, Decoder, ErrorCode};

impl<'a> Decoder<'a> {
    fn enter_container(&self, major: MajorType) -> Result<Decoder<'a>, CborError> {
        let off = self.position();
        if self.peek_header()? == major.header(AI_INDEFINITE) {
            return Ok(self.child(off + 1, 0, Scope::Indefinite));
        }
        let (len, hdr) = self.peek_uint(major, MAX_CONTAINER_WIDTH)?;
        let mut items =
            u32::try_from(len).map_err(|_| CborError::new(ErrorCode::Overflow, off))?;
        if major == MajorType::Map {
            items = items
                .checked_mul(2)
                .ok_or_else(|| CborError::new(ErrorCode::Overflow, off))?;
        }
        Ok(self.child(off + hdr, items, Scope::Definite))
    }

    /// Enter the array at the cursor and return a decoder over its items.
    ///
    /// This decoder stays on the array header until the child is handed back through
    /// [`Decoder::leave_container`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidType` if the next item is not an array, `Overflow` if its length needs
    /// more than 32 bits, and `EndOfBuffer` on truncated input.
    pub fn enter_array(&self) -> Result<Decoder<'a>, CborError> {
        self.enter_container(MajorType::Array)
    }

    /// Enter the map at the cursor and return a decoder over its keys and values.
    ///
    /// Keys and values are read alternately from the child.
    ///
    /// # Errors
    ///
    /// As [`Decoder::enter_array`]; `Overflow` also covers pair counts whose doubled item
    /// count does not fit in 32 bits.
    pub fn enter_map(&self) -> Result<Decoder<'a>, CborError> {
        self.enter_container(MajorType::Map)
    }

    /// Finish a container entered from this decoder and move past it.
    ///
    /// The container counts as a single item of this decoder's own scope.
    ///
    /// # Errors
    ///
    /// Returns `EndOfBuffer` if the buffer ended before the container did (items missing, or
    /// no break code), and `Invalid` if `container` still has items left to read or ends
    /// before this decoder's cursor. This decoder is left unchanged on error.
    pub fn leave_container(&mut self, container: Decoder<'a>) -> Result<(), CborError> {
        let off = container.position();
        let truncated = container.remaining_bytes() == 0;
        let end = match container.scope {
            Scope::Definite if container.remaining == 0 => off,
            Scope::Indefinite if !truncated && container.data()[off] == BREAK => off + 1,
            Scope::TopLevel if truncated => off,
            _ if truncated => return Err(CborError::new(ErrorCode::EndOfBuffer, off)),
            _ => return Err(CborError::new(ErrorCode::Invalid, off)),
        };
        if end < self.position() {
            return Err(CborError::new(ErrorCode::Invalid, off));
        }
        self.set_position(end);
        if self.scope == Scope::Definite {
            self.remaining = self.remaining.saturating_sub(1);
        }
        Ok(())
    }

    /// Returns `true` if this decoder reads the items of an array or map.
    #[inline]
    #[must_use]
    pub fn in_container(&self) -> bool {
        self.scope != Scope::TopLevel
    }

    /// Returns `true` if this decoder reads an indefinite-length container.
    #[inline]
    #[must_use]
    pub fn is_indefinite(&self) -> bool {
        self.scope == Scope::Indefinite
    }

    /// Items left in a definite-length array (keys and values both count in a map).
    ///
    /// Returns `None` outside a container and for indefinite-length containers.
    #[inline]
    #[must_use]
    pub fn array_items_remaining(&self) -> Option<u32> {
        match self.scope {
            Scope::Definite => Some(self.remaining),
            Scope::TopLevel | Scope::Indefinite => None,
        }
    }

    /// Key/value pairs left in a definite-length map.
    ///
    /// A pair whose key was already read but whose value was not still counts.
    #[inline]
    #[must_use]
    pub fn map_items_remaining(&self) -> Option<u32> {
        self.array_items_remaining()
            .map(|items| items / 2 + items % 2)
    }
}
