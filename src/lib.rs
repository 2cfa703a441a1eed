//! Globally unique, time-sortable 12-byte identifiers
//!
//! ```rust
//! use xid::xid;
//!
//! let x = xid();
//! println!("{}", x); // e.g. "d0fmcb8ndc0a6f0ab3kg"
//! println!("{:?}", x.as_bytes()); // as 12-byte big-endian array
//! ```
//!
//! An identifier is generated without coordination with any external service from the current
//! time, the host, the process, and a per-process counter, and it can be converted to and from a
//! 12-byte binary form and a 20-character textual form.
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            unix_ts                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                  machine_id                   |      pid      |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |      pid      |                    counter                    |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 32-bit `unix_ts` field is dedicated to the Unix timestamp in seconds.
//! - The 24-bit `machine_id` field holds the three most significant bytes of a 32-bit hash of
//!   the host name, computed once per process.
//! - The 16-bit `pid` field holds the lower 16 bits of the process identifier.
//! - The 24-bit `counter` field is randomly initialized once per process and incremented by one
//!   for each new identifier. It silently wraps around to zero after reaching its maximum.
//!
//! All fields are big-endian, so identifiers sort by `unix_ts` first, and then by `machine_id`,
//! `pid`, and `counter`. Identifiers generated by different processes in the same second are not
//! ordered by generation time.
//!
//! # Textual representation
//!
//! The textual representation is a 20-digit base32 string consisting of the digits `0-9` and the
//! lowercase letters except `i`, `l`, `o`, and `u`. The 96 bits are encoded five bits at a time
//! from the most significant bit, and the last digit carries the single remaining bit followed by
//! four zero bits. Parsing is case-insensitive. The textual representation sorts in the same
//! order as the binary representation.
//!
//! ```rust
//! use xid::Xid;
//!
//! let x = "00007t01081h4d00000g".parse::<Xid>()?;
//! assert_eq!(x.timestamp(), 1_000);
//! assert_eq!(x.machine_id(), [1, 2, 3]);
//! assert_eq!(x.pid(), 0x1234);
//! assert_eq!(x.counter(), 1);
//! # Ok::<(), xid::Error>(())
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen`: enables the process-wide default generator behind [`xid()`]. This feature
//!   implies `std`.
//! - `std`: integrates the library with, among others, the system clock and heap-allocated
//!   strings.
//!
//! Optional features:
//!
//! - `serde`: enables serialization/deserialization of [`Xid`] via serde.
//! - `tracing`: emits diagnostic events through the `tracing` crate when a generator is
//!   initialized.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod base32;

mod error;
pub use error::Error;

mod id;
pub use id::Xid;

pub mod generator;
pub use generator::host::machine_id_from_hostname;
pub use generator::{Generator, TimeSource};

#[cfg(feature = "std")]
pub use generator::StdSystemTime;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{xid, xid_with_time};
