#[cfg(not(feature = "std"))]
use core as std;

use std::fmt;

/// Error rejecting the input to one of the conversions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// The input is not 32 hex digits in the hyphenated or plain form.
    InvalidUuidFormat,

    /// The input is empty or contains a character outside the uppercase Crockford alphabet.
    InvalidBase32Format,

    /// A character passed validation but has no value in the decode table.
    InvalidBase32Character,

    /// The input is well-formed Base32 but its value does not fit in 128 bits.
    ValueOutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidUuidFormat => "invalid UUID format",
            Self::InvalidBase32Format => "invalid Base32 format",
            Self::InvalidBase32Character => "invalid Base32 character",
            Self::ValueOutOfRange => "Base32 value too large for UUID",
        })
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {}
