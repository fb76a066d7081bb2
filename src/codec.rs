//! Conversion between UUIDs and fixed-width Crockford Base32 strings.
//!
//! A UUID is read as an unsigned 128-bit integer and written as a base-32 numeral, most
//! significant digit first, left-padded with `0` to 26 digits. Since `32^25 < 2^128 < 32^26`,
//! 26 digits fit every value; the leading digit of an encoded UUID never exceeds `7`.

use fstr::FStr;

use crate::text::{alphabet_index, is_valid_base32, ALPHABET};
use crate::{Error, Uuid};

/// Number of Base32 digits in an encoded UUID.
pub const ENCODED_LEN: usize = 26;

impl Uuid {
    /// Returns the 26-digit Crockford Base32 representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid32::Uuid;
    ///
    /// let x = Uuid::from(0x49ceabcf_5e02_4449_be28_a9b341df4b08);
    /// assert_eq!(x.to_base32().as_str(), "29STNWYQG28H4VWA59PD0XYJR8");
    /// assert_eq!(Uuid::NIL.to_base32().as_str(), "00000000000000000000000000");
    /// ```
    pub fn to_base32(&self) -> FStr<ENCODED_LEN> {
        let mut value = self.as_u128();
        let mut buffer = [ALPHABET[0]; ENCODED_LEN];
        for e in buffer.iter_mut().rev() {
            if value == 0 {
                break;
            }
            *e = ALPHABET[(value & 0x1f) as usize];
            value >>= 5;
        }
        debug_assert_eq!(value, 0);
        debug_assert!(buffer.is_ascii());
        // SAFETY: the buffer holds alphabet symbols only, all of which are ASCII
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }

    /// Creates an object from a Crockford Base32 string.
    ///
    /// The string may have any length as long as its value fits in 128 bits; shorter strings
    /// are read as if left-padded with `0` and longer ones must start with enough `0` digits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBase32Format`] if `src` is empty or contains a character outside
    /// the uppercase alphabet, and [`Error::ValueOutOfRange`] if its value exceeds `2^128 - 1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid32::{Error, Uuid};
    ///
    /// let x = Uuid::from_base32("29STNWYQG28H4VWA59PD0XYJR8")?;
    /// assert_eq!(x.to_string(), "49ceabcf-5e02-4449-be28-a9b341df4b08");
    ///
    /// assert_eq!(Uuid::from_base32("123ABC")?.as_u128(), 0x221a96c);
    /// assert_eq!(
    ///     Uuid::from_base32("80000000000000000000000000"),
    ///     Err(Error::ValueOutOfRange)
    /// );
    /// # Ok::<(), uuid32::Error>(())
    /// ```
    pub fn from_base32(src: &str) -> Result<Self, Error> {
        if !is_valid_base32(src) {
            return Err(Error::InvalidBase32Format);
        }

        let mut value = 0u128;
        for c in src.bytes() {
            let digit = alphabet_index(c).ok_or(Error::InvalidBase32Character)?;
            value = value
                .checked_mul(32)
                .and_then(|v| v.checked_add(digit as u128))
                .ok_or(Error::ValueOutOfRange)?;
        }
        Ok(Self::from(value))
    }
}

/// Encodes a UUID string into a 26-character Crockford Base32 string.
///
/// Accepts 32 hex digits in either case, with all four hyphens of the 8-4-4-4-12 form or none.
/// The output always uses the uppercase alphabet.
///
/// # Errors
///
/// Returns [`Error::InvalidUuidFormat`] if `uuid` is not a valid UUID string.
///
/// # Examples
///
/// ```rust
/// let encoded = uuid32::encode("49ceabcf-5e02-4449-be28-a9b341df4b08")?;
/// assert_eq!(encoded.as_str(), "29STNWYQG28H4VWA59PD0XYJR8");
///
/// let encoded = uuid32::encode("49CEABCF5E024449BE28A9B341DF4B08")?;
/// assert_eq!(encoded.as_str(), "29STNWYQG28H4VWA59PD0XYJR8");
/// # Ok::<(), uuid32::Error>(())
/// ```
pub fn encode(uuid: &str) -> Result<FStr<ENCODED_LEN>, Error> {
    uuid.parse::<Uuid>().map(|e| e.to_base32())
}

/// Decodes a Crockford Base32 string into the lowercase 8-4-4-4-12 UUID string.
///
/// # Errors
///
/// See [`Uuid::from_base32`].
///
/// # Examples
///
/// ```rust
/// let decoded = uuid32::decode("29STNWYQG28H4VWA59PD0XYJR8")?;
/// assert_eq!(decoded.as_str(), "49ceabcf-5e02-4449-be28-a9b341df4b08");
/// # Ok::<(), uuid32::Error>(())
/// ```
pub fn decode(base32: &str) -> Result<FStr<36>, Error> {
    Uuid::from_base32(base32).map(|e| e.hyphenated())
}
