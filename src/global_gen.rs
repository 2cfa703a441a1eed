//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::{sync, time::SystemTime};

use crate::{Generator, StdSystemTime, Xid};

/// Returns the process-wide default generator, creating one if none exists.
fn global_gen() -> &'static Generator<StdSystemTime> {
    static G: sync::OnceLock<Generator<StdSystemTime>> = sync::OnceLock::new();
    G.get_or_init(Generator::new)
}

/// Generates a new identifier from the current timestamp.
///
/// This function employs a process-wide generator that is initialized on first use with the
/// machine identifier of the host, the process identifier, and a random counter seed.
/// Identifiers generated by this function within the same process are distinct (until the
/// 24-bit counter wraps around within a single second).
///
/// # Examples
///
/// ```rust
/// let x = xid::xid();
/// println!("{}", x); // e.g., "d0fmcb8ndc0a6f0ab3kg"
/// println!("{:?}", x.as_bytes()); // as 12-byte big-endian array
///
/// let x_string: String = xid::xid().to_string();
/// ```
pub fn xid() -> Xid {
    global_gen().generate()
}

/// Generates a new identifier from the `time` passed, using the process-wide generator.
///
/// Times before the Unix epoch or beyond the 32-bit range wrap around modulo 2^32 seconds.
///
/// # Examples
///
/// ```rust
/// use std::time::{Duration, UNIX_EPOCH};
///
/// let x = xid::xid_with_time(UNIX_EPOCH + Duration::from_secs(1_000));
/// assert_eq!(x.timestamp(), 1_000);
/// ```
pub fn xid_with_time(time: SystemTime) -> Xid {
    global_gen().generate_with_time(time)
}

impl Xid {
    /// Generates a new identifier from the current timestamp.
    ///
    /// Equivalent to [`xid()`].
    pub fn now() -> Self {
        xid()
    }

    /// Generates a new identifier from the `time` passed.
    ///
    /// Equivalent to [`xid_with_time()`].
    pub fn from_time(time: SystemTime) -> Self {
        xid_with_time(time)
    }
}
