//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use fstr::FStr;

use crate::{codec::ENCODED_LEN, Uuid};
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .expect("uuid32: could not lock global generator")
}

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid32::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// ```
pub fn uuid4() -> Uuid {
    lock_global_gen().get_mut().generate()
}

/// Generates a UUIDv4 and returns its 26-character Crockford Base32 representation.
///
/// # Examples
///
/// ```rust
/// let id = uuid32::generate_base32();
/// println!("{}", id); // e.g., "1ASJ5CWV0K83AFSKSQT8H85VVF"
///
/// let uuid = uuid32::decode(&id)?;
/// assert_eq!(uuid.as_bytes()[14], b'4');
/// # Ok::<(), uuid32::Error>(())
/// ```
pub fn generate_base32() -> FStr<ENCODED_LEN> {
    uuid4().to_base32()
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha12Core;

    use crate::generator::{RandSource, V4Generator};

    /// The random number generator of the global generator.
    ///
    /// The global generator currently employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to
    /// emulate the strategy used by [`rand::rngs::ThreadRng`].
    pub struct GlobalGenRng(ReseedingRng<ChaCha12Core, OsRng>);

    impl RandSource for GlobalGenRng {
        fn next_u64(&mut self) -> u64 {
            self.0.next_u64()
        }
    }

    impl Default for GlobalGenRng {
        fn default() -> Self {
            let core = ChaCha12Core::from_rng(OsRng)
                .expect("uuid32: could not initialize global generator");
            Self(ReseedingRng::new(core, 1024 * 64, OsRng))
        }
    }

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: V4Generator<GlobalGenRng>,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: V4Generator::new(GlobalGenRng::default()),
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner [`V4Generator`] instance, reseting the
        /// generator state on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut V4Generator<GlobalGenRng> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                *self = Default::default();
            }
            &mut self.generator
        }
    }
}
