use crate::Decoder;

/// The exact encoded bytes of one CBOR item, captured with [`Decoder::get_raw`].
///
/// Nothing inside is interpreted. Decode it later with [`RawCbor::decoder`], hash it, or
/// forward it unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawCbor<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> RawCbor<'a> {
    #[inline]
    pub(crate) const fn new(bytes: &'a [u8], offset: usize) -> Self {
        Self { bytes, offset }
    }

    /// Return the encoded item.
    #[inline]
    #[must_use]
    pub const fn as_bytes(self) -> &'a [u8] {
        self.bytes
    }

    /// Offset of the item's first byte in the buffer it was captured from.
    #[inline]
    #[must_use]
    pub const fn offset(self) -> usize {
        self.offset
    }

    /// Length of the encoded item in bytes.
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` iff no bytes were captured (never the case for a skipped item).
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bytes.is_empty()
    }

    /// A top-level decoder over just this item.
    ///
    /// Error offsets reported by that decoder are relative to the item's first byte.
    #[inline]
    #[must_use]
    pub const fn decoder(self) -> Decoder<'a> {
        Decoder::new(self.bytes)
    }

    /// Compute the SHA-256 digest of the encoded item.
    #[cfg(feature = "sha2")]
    #[cfg_attr(docsrs, doc(cfg(feature = "sha2")))]
    #[must_use]
    pub fn sha256(self) -> [u8; 32] {
        use sha2::{Digest, Sha256};
        let mut h = Sha256::new();
        h.update(self.bytes);
        h.finalize().into()
    }
}

impl AsRef<[u8]> for RawCbor<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}
