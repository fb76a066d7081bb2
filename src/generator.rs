//! UUIDv4 generator and related types.

use fstr::FStr;

use crate::{codec::ENCODED_LEN, Uuid};

pub mod with_rand08;

/// A trait that defines the minimum random number generator interface for [`V4Generator`].
pub trait RandSource {
    /// Returns the next random `u64`.
    fn next_u64(&mut self) -> u64;
}

/// Represents a UUIDv4 generator that draws its random bits from a caller-supplied source.
///
/// The free functions [`uuid4`](crate::uuid4) and [`generate_base32`](crate::generate_base32)
/// use a process-wide generator seeded from the operating system. This type is for callers that
/// need their own random number generator, e.g. a seeded one in tests.
///
/// # Examples
///
/// ```rust
/// use uuid32::V4Generator;
///
/// let mut g = V4Generator::with_rand08(rand::rngs::OsRng);
/// println!("{}", g.generate()); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{}", g.generate_base32()); // e.g., "1ASJ5CWV0K83AFSKSQT8H85VVF"
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V4Generator<R> {
    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RandSource> V4Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object.
    ///
    /// The version nibble is set at `0100` and the variant bits at `10`; the remaining 122 bits
    /// come from the random number generator.
    pub fn generate(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.rng.next_u64().to_be_bytes());
        bytes[8..].copy_from_slice(&self.rng.next_u64().to_be_bytes());
        bytes[6] = 0x40 | (bytes[6] >> 4);
        bytes[8] = 0x80 | (bytes[8] >> 2);
        Uuid::from(bytes)
    }

    /// Generates a new UUIDv4 and returns its 26-character Base32 representation.
    pub fn generate_base32(&mut self) -> FStr<ENCODED_LEN> {
        self.generate().to_base32()
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv4 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uuid32::V4Generator;
///
/// V4Generator::with_rand08(rand::thread_rng())
///     .map(|e| e.to_base32())
///     .take(4)
///     .for_each(|e| println!("{}", e));
/// ```
impl<R: RandSource> Iterator for V4Generator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource> core::iter::FusedIterator for V4Generator<R> {}
