//! Identifier generator and related types.

#[cfg(not(feature = "std"))]
use core as std;

use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::Xid;

pub mod host;

/// Maximum value of the 24-bit counter field.
const MAX_COUNTER: u32 = (1 << 24) - 1;

/// A trait that defines the minimum system clock interface for [`Generator`].
///
/// Implement this trait to substitute a fixed or mocked clock, for example in tests.
///
/// # Examples
///
/// ```rust
/// use xid::{Generator, TimeSource};
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn unix_ts(&self) -> u64 {
///         1_000
///     }
/// }
///
/// let g = Generator::with_parts([1, 2, 3], 4, 0, FixedTime);
/// assert_eq!(g.generate().timestamp(), 1_000);
/// ```
pub trait TimeSource {
    /// Returns the current Unix timestamp in seconds.
    fn unix_ts(&self) -> u64;
}

/// The default [`TimeSource`] that reads the current time from [`std::time::SystemTime`].
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

#[cfg(feature = "std")]
impl TimeSource for StdSystemTime {
    fn unix_ts(&self) -> u64 {
        unix_ts_from_system_time(std::time::SystemTime::now())
    }
}

/// Converts a [`SystemTime`](std::time::SystemTime) into whole seconds since the Unix epoch,
/// rounding toward negative infinity. Times before the epoch wrap around modulo 2^64.
#[cfg(feature = "std")]
fn unix_ts_from_system_time(time: std::time::SystemTime) -> u64 {
    match time.duration_since(std::time::UNIX_EPOCH) {
        Ok(d) => d.as_secs(),
        Err(err) => {
            let d = err.duration();
            let secs = d.as_secs() + u64::from(d.subsec_nanos() > 0);
            secs.wrapping_neg()
        }
    }
}

/// Represents an identifier generator that packs a timestamp, a machine identifier, a process
/// identifier, and a shared counter into each [`Xid`].
///
/// The generator is designed to be shared. Every method takes `&self` and the counter is
/// advanced by a single atomic fetch-and-add, so one instance can be put behind an `Arc` or a
/// `static` and used from many threads without further locking. Identifiers generated
/// concurrently by the same instance are always distinct (until the 24-bit counter wraps around
/// within a single second), though identifiers generated in the same second are not necessarily
/// ordered by call order.
///
/// # Examples
///
/// ```rust
/// use std::{sync, thread};
/// use xid::Generator;
///
/// let g = sync::Arc::new(Generator::new());
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.generate(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
///
/// # Generator functions
///
/// | Method                   | Timestamp            |
/// | ------------------------ | -------------------- |
/// | [`generate`]             | Now                  |
/// | [`generate_with_time`]   | `SystemTime` passed  |
/// | [`generate_core`]        | Unix seconds passed  |
///
/// None of them validates the timestamp range: values outside of the 32-bit range wrap around
/// modulo 2^32 seconds.
///
/// [`generate`]: Generator::generate
/// [`generate_with_time`]: Generator::generate_with_time
/// [`generate_core`]: Generator::generate_core
#[derive(Debug)]
pub struct Generator<T> {
    counter: AtomicU32,
    machine_id: [u8; 3],
    pid: u16,

    /// The system clock used by the generator.
    time: T,
}

#[cfg(feature = "global_gen")]
impl Generator<StdSystemTime> {
    /// Creates a generator instance for the current host and process.
    ///
    /// The machine identifier is derived from the host name, the process identifier is taken
    /// from the operating system, and the counter is seeded from the operating system's random
    /// number generator.
    #[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
    pub fn new() -> Self {
        use rand::RngCore;

        let machine_id = host::machine_id();
        let pid = host::pid();
        let seed = rand::rngs::OsRng.next_u32() & MAX_COUNTER;

        #[cfg(feature = "tracing")]
        tracing::debug!(?machine_id, pid, "initialized identifier generator");

        Self::with_parts(machine_id, pid, seed, StdSystemTime)
    }
}

#[cfg(feature = "global_gen")]
impl Default for Generator<StdSystemTime> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeSource> Generator<T> {
    /// Creates a generator instance from explicit parts.
    ///
    /// `counter_seed` is the counter value immediately preceding the first identifier to be
    /// generated. Only its lower 24 bits are used.
    pub const fn with_parts(machine_id: [u8; 3], pid: u16, counter_seed: u32, time: T) -> Self {
        Self {
            counter: AtomicU32::new(counter_seed & MAX_COUNTER),
            machine_id,
            pid,
            time,
        }
    }

    /// Returns the machine identifier embedded in every identifier this generator produces.
    pub const fn machine_id(&self) -> [u8; 3] {
        self.machine_id
    }

    /// Returns the process identifier embedded in every identifier this generator produces.
    pub const fn pid(&self) -> u16 {
        self.pid
    }

    /// Generates a new identifier from the current timestamp.
    pub fn generate(&self) -> Xid {
        self.generate_core(self.time.unix_ts())
    }

    /// Generates a new identifier from the `time` passed.
    ///
    /// Times before the Unix epoch or beyond the 32-bit range wrap around modulo 2^32 seconds.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn generate_with_time(&self, time: std::time::SystemTime) -> Xid {
        self.generate_core(unix_ts_from_system_time(time))
    }

    /// Generates a new identifier from the `unix_ts` (in seconds) passed.
    ///
    /// Only the lower 32 bits of `unix_ts` are used.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate_core(&self, unix_ts: u64) -> Xid {
        Xid::from_fields(unix_ts as u32, self.machine_id, self.pid, self.next_counter())
    }

    /// Advances the counter by one modulo 2^24 and returns the new value.
    fn next_counter(&self) -> u32 {
        // 2^32 is a multiple of 2^24, so masking after wrapping_add keeps the sequence exact
        self.counter.fetch_add(1, Ordering::Relaxed).wrapping_add(1) & MAX_COUNTER
    }
}

/// Supports operations as an infinite iterator that produces a new identifier for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use xid::Generator;
///
/// Generator::new()
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{i}] {e}"));
/// ```
impl<T: TimeSource> Iterator for Generator<T> {
    type Item = Xid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T: TimeSource> std::iter::FusedIterator for Generator<T> {}
