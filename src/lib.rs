//! Fixed-width Crockford Base32 encoding of UUIDs
//!
//! ```rust
//! let encoded = uuid32::encode("49ceabcf-5e02-4449-be28-a9b341df4b08")?;
//! assert_eq!(encoded.as_str(), "29STNWYQG28H4VWA59PD0XYJR8");
//!
//! let decoded = uuid32::decode("29STNWYQG28H4VWA59PD0XYJR8")?;
//! assert_eq!(decoded.as_str(), "49ceabcf-5e02-4449-be28-a9b341df4b08");
//!
//! # #[cfg(feature = "global_gen")]
//! # {
//! let id = uuid32::generate_base32();
//! println!("{}", id); // e.g., "1ASJ5CWV0K83AFSKSQT8H85VVF"
//! # }
//! # Ok::<(), uuid32::Error>(())
//! ```
//!
//! # Encoding
//!
//! A UUID is treated as an opaque unsigned 128-bit integer, written as a base-32 numeral with the
//! most significant digit first and left-padded with `0` to exactly 26 characters. The digits are
//! taken from Crockford's alphabet:
//!
//! ```text
//! 0123456789ABCDEFGHJKMNPQRSTVWXYZ
//! ```
//!
//! The letters `I`, `L`, `O` and `U` are excluded. Because the width is fixed and the alphabet is
//! in ascending ASCII order, encoded strings sort in the same order as the UUIDs they represent.
//!
//! # Accepted input
//!
//! - UUID strings are 32 hex digits in either case, with hyphens at all four positions of the
//!   8-4-4-4-12 layout or at none. Decoding always produces the lowercase hyphenated form.
//! - Base32 strings must use the uppercase alphabet; lowercase input is rejected rather than
//!   folded. Any length is accepted as long as the value fits in 128 bits, so
//!   `"80000000000000000000000000"` (2^128) is rejected even though it has 26 characters.
//!
//! # Crate features
//!
//! - `std` enables conversions to and from `String` and the [`std::error::Error`] impl.
//! - `global_gen` (default) enables [`uuid4()`] and [`generate_base32()`] backed by a
//!   process-wide random number generator.
//! - `serde` enables serialization of [`Uuid`] as its canonical string (or 16 bytes in compact
//!   formats).
//! - `uuid` enables conversions with [`uuid::Uuid`](https://docs.rs/uuid).

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod codec;
mod error;
mod id;
mod text;

pub use codec::{decode, encode, ENCODED_LEN};
pub use error::Error;
pub use id::Uuid;
pub use text::{format_uuid, is_valid_base32, is_valid_uuid, ALPHABET};

#[cfg(feature = "std")]
pub use text::normalize_uuid;

pub mod generator;
#[doc(inline)]
pub use generator::V4Generator;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{generate_base32, uuid4};
