//! Text grammars for UUID and Crockford Base32 strings.
//!
//! UUID text is matched case-insensitively, whereas Base32 text accepts the uppercase alphabet
//! only. Keep the two rules apart: lowercase Base32 input is rejected on purpose so that every
//! accepted string is already in its canonical spelling.

use fstr::FStr;

use crate::Uuid;

/// Crockford's Base32 alphabet: digits followed by the uppercase letters except `I`, `L`, `O`
/// and `U`.
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Marks bytes that do not belong to [`ALPHABET`] in [`DECODE_MAP`].
const NO_INDEX: u8 = 0xff;

/// Maps each byte to its index in [`ALPHABET`], built from the alphabet itself so that
/// validation and decoding cannot disagree.
const DECODE_MAP: [u8; 256] = {
    let mut map = [NO_INDEX; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
};

/// Returns the value of a Base32 symbol, or `None` if `c` is not in [`ALPHABET`].
pub(crate) const fn alphabet_index(c: u8) -> Option<u8> {
    match DECODE_MAP[c as usize] {
        NO_INDEX => None,
        index => Some(index),
    }
}

/// Returns true if a hyphen follows the `i`-th byte in the 8-4-4-4-12 layout.
pub(crate) const fn ends_group(i: usize) -> bool {
    matches!(i, 3 | 5 | 7 | 9)
}

const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parses 32 hex digits, either hyphenated 8-4-4-4-12 or without any hyphen, into bytes.
pub(crate) fn parse_hex(src: &str) -> Option<[u8; 16]> {
    let hyphenated = match src.len() {
        36 => true,
        32 => false,
        _ => return None,
    };

    let mut dst = [0u8; 16];
    let mut iter = src.bytes();
    for (i, e) in dst.iter_mut().enumerate() {
        let hi = hex_value(iter.next()?)?;
        let lo = hex_value(iter.next()?)?;
        *e = (hi << 4) | lo;
        if hyphenated && ends_group(i) && iter.next()? != b'-' {
            return None;
        }
    }
    iter.next().is_none().then_some(dst)
}

/// Returns true if `src` is a UUID string: 32 hex digits in either case, with hyphens at all
/// four 8-4-4-4-12 group boundaries or at none of them.
///
/// # Examples
///
/// ```rust
/// use uuid32::is_valid_uuid;
///
/// assert!(is_valid_uuid("49ceabcf-5e02-4449-be28-a9b341df4b08"));
/// assert!(is_valid_uuid("49CEABCF5E024449BE28A9B341DF4B08"));
/// assert!(!is_valid_uuid("49ceabcf-5e024449-be28-a9b341df4b08"));
/// ```
pub fn is_valid_uuid(src: &str) -> bool {
    parse_hex(src).is_some()
}

/// Returns true if `src` is a non-empty string of uppercase Crockford Base32 symbols.
///
/// The length is not constrained; whether the value fits in 128 bits is checked by
/// [`decode`](crate::decode).
///
/// # Examples
///
/// ```rust
/// use uuid32::is_valid_base32;
///
/// assert!(is_valid_base32("29STNWYQG28H4VWA59PD0XYJR8"));
/// assert!(!is_valid_base32("29stnwyqg28h4vwa59pd0xyjr8"));
/// assert!(!is_valid_base32("INVALID"));
/// assert!(!is_valid_base32(""));
/// ```
pub fn is_valid_base32(src: &str) -> bool {
    !src.is_empty() && src.bytes().all(|c| alphabet_index(c).is_some())
}

/// Removes every hyphen from `src` without validating the rest.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn normalize_uuid(src: &str) -> String {
    src.replace('-', "")
}

/// Inserts hyphens into 32 hex digits, producing the lowercase 8-4-4-4-12 form.
///
/// Returns `None` unless `hex` consists of exactly 32 hex digits.
///
/// # Examples
///
/// ```rust
/// let text = uuid32::format_uuid("49ceabcf5e024449be28a9b341df4b08");
/// assert_eq!(text.as_deref(), Some("49ceabcf-5e02-4449-be28-a9b341df4b08"));
/// ```
pub fn format_uuid(hex: &str) -> Option<FStr<36>> {
    if hex.len() != 32 {
        return None;
    }
    parse_hex(hex).map(|bytes| Uuid::from(bytes).hyphenated())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Validator and decode table agree on every byte
    #[test]
    fn validator_and_decode_table_agree_on_every_byte() {
        for c in 0..=255u8 {
            let in_alphabet = ALPHABET.contains(&c);
            assert_eq!(alphabet_index(c).is_some(), in_alphabet, "byte {:#04x}", c);
            if let Some(index) = alphabet_index(c) {
                assert_eq!(ALPHABET[index as usize], c);
            }
            if c.is_ascii() {
                let s = [c];
                let s = std::str::from_utf8(&s).unwrap();
                assert_eq!(is_valid_base32(s), in_alphabet, "byte {:#04x}", c);
            }
        }
    }

    /// Excludes confusable letters from the alphabet
    #[test]
    fn excludes_confusable_letters_from_the_alphabet() {
        for c in [b'I', b'L', b'O', b'U', b'i', b'l', b'o', b'u'] {
            assert!(!ALPHABET.contains(&c));
        }
        let mut sorted = *ALPHABET;
        sorted.sort_unstable();
        assert_eq!(&sorted, ALPHABET, "alphabet must be in ascending byte order");
    }

    /// Accepts UUID strings with all or no hyphens in either case
    #[test]
    fn accepts_uuid_strings_with_all_or_no_hyphens_in_either_case() {
        let cases = [
            "49ceabcf-5e02-4449-be28-a9b341df4b08",
            "49CEABCF-5E02-4449-BE28-A9B341DF4B08",
            "49ceabcf5e024449be28a9b341df4b08",
            "49CeAbCf5E024449bE28a9B341dF4b08",
            "00000000-0000-0000-0000-000000000000",
            "ffffffffffffffffffffffffffffffff",
        ];

        for e in cases {
            assert!(is_valid_uuid(e), "{}", e);
        }
    }

    /// Rejects malformed UUID strings
    #[test]
    fn rejects_malformed_uuid_strings() {
        let cases = [
            "",
            "invalid-uuid",
            " 49ceabcf-5e02-4449-be28-a9b341df4b08",
            "49ceabcf-5e02-4449-be28-a9b341df4b08 ",
            "49ceabcf-5e02-4449-be28-a9b341df4b0",
            "49ceabcf-5e02-4449-be28-a9b341df4b088",
            "49ceabcf5e024449be28a9b341df4b0",
            "49ceabcf5e024449be28a9b341df4b088",
            "49ceabcf-5e024449-be28-a9b341df4b08",
            "49ceabcf-5e02-4449be28a9b341df4b08",
            "49ceabcf5e02-4449-be28-a9b341df4b08",
            "49ceabc-f5e02-4449-be28-a9b341df4b08",
            "49ceabcf-5e02-4449-be28_a9b341df4b08",
            "{49ceabcf-5e02-4449-be28-a9b341df4b08}",
            "49ceabcg-5e02-4449-be28-a9b341df4b08",
            "49ceabcf-5e02-4449-be28-a9b341df4b0\u{e9}",
            "+9ceabcf5e024449be28a9b341df4b08",
            "-49ceabcf5e024449be28a9b341df4b0",
        ];

        for e in cases {
            assert!(!is_valid_uuid(e), "{}", e);
        }
    }

    /// Validates Base32 strings
    #[test]
    fn validates_base32_strings() {
        assert!(is_valid_base32("29STNWYQG28H4VWA59PD0XYJR8"));
        assert!(is_valid_base32("123ABC"));
        assert!(is_valid_base32("0"));
        assert!(is_valid_base32("0123456789ABCDEFGHJKMNPQRSTVWXYZ"));
        assert!(is_valid_base32(
            "0000000000000000000000000000000000000000000000000000000000000000"
        ));

        assert!(!is_valid_base32(""));
        assert!(!is_valid_base32("invalid@base32!"));
        assert!(!is_valid_base32("INVALID"));
        assert!(!is_valid_base32("test-with-hyphen"));
        assert!(!is_valid_base32("29STNWYQG-28H4VWA59PD0XYJR8"));
        assert!(!is_valid_base32("29stnwyqg28h4vwa59pd0xyjr8"));
        assert!(!is_valid_base32("29STNWYQG28H4VWA59PD0XYJR8 "));
        assert!(!is_valid_base32("\u{ff10}"));
        for c in ["I", "L", "O", "U", "i", "l", "o", "u"] {
            assert!(!is_valid_base32(c), "{}", c);
            assert!(!is_valid_base32(&format!("ABC{}", c)), "{}", c);
        }
    }

    /// Strips hyphens without validating
    #[cfg(feature = "std")]
    #[test]
    fn strips_hyphens_without_validating() {
        assert_eq!(
            normalize_uuid("49ceabcf-5e02-4449-be28-a9b341df4b08"),
            "49ceabcf5e024449be28a9b341df4b08"
        );
        assert_eq!(
            normalize_uuid("49CEABCF5E024449BE28A9B341DF4B08"),
            "49CEABCF5E024449BE28A9B341DF4B08"
        );
        assert_eq!(normalize_uuid("--x-y--"), "xy");
        assert_eq!(normalize_uuid(""), "");
    }

    /// Inserts hyphens into 32 hex digits
    #[test]
    fn inserts_hyphens_into_32_hex_digits() {
        let cases = [
            (
                "49ceabcf5e024449be28a9b341df4b08",
                "49ceabcf-5e02-4449-be28-a9b341df4b08",
            ),
            (
                "49CEABCF5E024449BE28A9B341DF4B08",
                "49ceabcf-5e02-4449-be28-a9b341df4b08",
            ),
            (
                "00000000000000000000000000000000",
                "00000000-0000-0000-0000-000000000000",
            ),
        ];

        for (hex, text) in cases {
            assert_eq!(format_uuid(hex).as_deref(), Some(text));
        }

        assert_eq!(format_uuid("49ceabcf-5e02-4449-be28-a9b341df4b08"), None);
        assert_eq!(format_uuid("49ceabcf5e024449be28a9b341df4b0"), None);
        assert_eq!(format_uuid("49ceabcf5e024449be28a9b341df4b0z"), None);
    }
}
