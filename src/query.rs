//! Key lookup inside maps.
//!
//! Lookups scan entries in order and skip the values of keys that do not match, so a lookup
//! costs time linear in the size of the map and needs no index or allocation.

use crate::{CborError, Decoder, ErrorCode};

impl<'a> Decoder<'a> {
    /// Find the value stored under text key `key` in the map this decoder was entered into.
    ///
    /// Scanning starts at the cursor and works on a copy, so `self` is never moved. On success
    /// the returned decoder sits on the value, ready for whichever typed reader fits it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the map ends without a match. Any error reading a key (including
    /// `InvalidType` for a non-text key) or skipping a value is returned as-is.
    pub fn get_key_tstr(&self, key: &str) -> Result<Decoder<'a>, CborError> {
        let mut it = *self;
        loop {
            if it.at_end() {
                return Err(CborError::new(ErrorCode::NotFound, it.position()));
            }
            let candidate = it.get_tstr()?;
            if candidate == key.as_bytes() {
                return Ok(it);
            }
            it.skip()?;
        }
    }
}
