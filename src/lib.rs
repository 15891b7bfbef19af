//! # slim-cbor
//!
//! An allocation-free, forward-only CBOR decoder for memory-constrained targets.
//!
//! ## Design principles
//!
//! - **Borrow, never copy.**
//!   Byte and text strings come back as slices of the caller's buffer, so the borrow checker
//!   guarantees no view outlives the bytes it points into.
//! - **One cursor, moving forward.**
//!   A [`Decoder`] is a small `Copy` value. Every read takes `&mut self` and either advances
//!   past exactly the item it decoded or leaves the cursor untouched and returns an error.
//! - **Bounded on hostile input.**
//!   Every read checks its span against the buffer end before touching it, integers are
//!   checked against the destination width, and [`Decoder::skip`] spends a fixed nesting
//!   budget ([`DEFAULT_MAX_DEPTH`]) instead of recursing as deep as the input asks.
//!
//! ## Supported data model
//!
//! - Unsigned and negative integers up to 64 bits, read into 8/16/32/64-bit destinations.
//! - Definite-length byte and text strings.
//! - Arrays and maps, definite or indefinite length.
//! - Tags, including decimal fractions (tag 4).
//! - Simple values: `false`, `true`, `null`, `undefined`, and other simple numbers.
//!   Floats can be skipped but are not decoded.
//!
//! ## Example
//!
//! ```
//! use slim_cbor::{Decoder, ErrorCode};
//!
//! // {"a": 1, "b": [true, null]}
//! let bytes = [0xa2, 0x61, b'a', 0x01, 0x61, b'b', 0x82, 0xf5, 0xf6];
//! let dec = Decoder::new(&bytes);
//! let map = dec.enter_map().unwrap();
//!
//! let mut a = map.get_key_tstr("a").unwrap();
//! assert_eq!(a.get_u8().unwrap(), 1);
//!
//! let b = map.get_key_tstr("b").unwrap();
//! let mut arr = b.enter_array().unwrap();
//! assert!(arr.get_bool().unwrap());
//! arr.get_null().unwrap();
//! assert!(arr.at_end());
//!
//! let err = map.get_key_tstr("c").unwrap_err();
//! assert_eq!(err.code, ErrorCode::NotFound);
//! ```
//!
//! ## Feature flags
//!
//! - `std` *(default)*: implements `std::error::Error` for [`CborError`].
//! - `sha2` *(default)*: enables [`RawCbor::sha256`].
//! - `simdutf8`: enables SIMD-accelerated UTF-8 validation in [`Decoder::get_str`].
//!
//! ## `no_std`
//!
//! The crate is `no_std` compatible and never allocates.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod codec;
mod container;
mod decoder;
mod error;
mod int;
mod limits;
mod query;
mod raw;
mod scalar;
mod string;
mod tag;
mod walk;
pub mod wire;

pub use crate::codec::{decode, CborDecode};
pub use crate::decoder::Decoder;
pub use crate::error::{CborError, ErrorCode};
pub use crate::limits::{
    DEFAULT_MAX_DEPTH, MAX_ARG_WIDTH, MAX_CONTAINER_WIDTH, MAX_STRING_WIDTH,
};
pub use crate::raw::RawCbor;
pub use crate::tag::DecimalFraction;
pub use crate::wire::MajorType;
