//! Host identity sources: machine identifier and process identifier.

/// Derives the 3-byte machine identifier from a host name.
///
/// The host name is hashed with the 32-bit multiplicative hash `h = h * 33 + byte` seeded with
/// 5381, and the three most significant bytes of the result are returned. The hash is not
/// collision resistant; two hosts may share a machine identifier.
///
/// # Examples
///
/// ```rust
/// use xid::machine_id_from_hostname;
///
/// // the empty input hashes to the seed itself (0x0000_1505)
/// assert_eq!(machine_id_from_hostname(b""), [0x00, 0x00, 0x15]);
/// ```
pub const fn machine_id_from_hostname(hostname: &[u8]) -> [u8; 3] {
    let mut hash = 5381u32;
    let mut i = 0;
    while i < hostname.len() {
        hash = hash.wrapping_mul(33).wrapping_add(hostname[i] as u32);
        i += 1;
    }
    let bytes = hash.to_be_bytes();
    [bytes[0], bytes[1], bytes[2]]
}

/// Returns the machine identifier of the current host.
#[cfg(feature = "global_gen")]
pub(crate) fn machine_id() -> [u8; 3] {
    machine_id_from_lookup(hostname::get())
}

/// Derives the machine identifier from the result of a host name lookup.
///
/// Falls back to the hash of the empty input if the lookup failed.
#[cfg(feature = "global_gen")]
fn machine_id_from_lookup(lookup: std::io::Result<std::ffi::OsString>) -> [u8; 3] {
    match lookup {
        Ok(name) => machine_id_from_hostname(name.to_string_lossy().as_bytes()),
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_err, "could not read host name; using fallback machine id");
            machine_id_from_hostname(&[])
        }
    }
}

/// Returns the lower 16 bits of the current process identifier.
#[cfg(feature = "global_gen")]
pub(crate) fn pid() -> u16 {
    std::process::id() as u16
}

#[cfg(test)]
mod tests {
    use super::machine_id_from_hostname;

    /// Hashes prepared host names correctly
    #[test]
    fn hashes_prepared_host_names_correctly() {
        // 5381 * 33 + 'a' = 177670 = 0x0002_b606
        assert_eq!(machine_id_from_hostname(b"a"), [0x00, 0x02, 0xb6]);
        assert_eq!(machine_id_from_hostname(b""), [0x00, 0x00, 0x15]);
        assert_eq!(machine_id_from_hostname(b"localhost"), [0x36, 0x0e, 0xad]);
        assert_ne!(
            machine_id_from_hostname(b"alpha"),
            machine_id_from_hostname(b"beta")
        );
    }

    /// Wraps hash around in 32 bits
    #[test]
    fn wraps_hash_around_in_32_bits() {
        let long = [b'z'; 4096];
        let mut hash = 5381u64;
        for &e in &long {
            hash = (hash * 33 + u64::from(e)) & 0xffff_ffff;
        }
        let expected = (hash as u32).to_be_bytes();
        assert_eq!(
            machine_id_from_hostname(&long),
            [expected[0], expected[1], expected[2]]
        );
    }

    /// Reads lower bits of process identifier
    #[cfg(feature = "global_gen")]
    #[test]
    fn reads_lower_bits_of_process_identifier() {
        assert_eq!(u32::from(super::pid()), std::process::id() & 0xffff);
    }

    /// Derives the same machine identifier on every call
    #[cfg(feature = "global_gen")]
    #[test]
    fn derives_the_same_machine_identifier_on_every_call() {
        assert_eq!(super::machine_id(), super::machine_id());
    }

    /// Falls back to hash of empty input if host name lookup fails
    #[cfg(feature = "global_gen")]
    #[test]
    fn falls_back_to_hash_of_empty_input_if_host_name_lookup_fails() {
        use super::machine_id_from_lookup;
        use std::{ffi::OsString, io};

        let err = io::Error::new(io::ErrorKind::NotFound, "no host name");
        assert_eq!(machine_id_from_lookup(Err(err)), [0x00, 0x00, 0x15]);
        assert_eq!(
            machine_id_from_lookup(Ok(OsString::from("localhost"))),
            machine_id_from_hostname(b"localhost")
        );
    }

    /// Emits warning event on host name fallback
    #[cfg(all(feature = "global_gen", feature = "tracing"))]
    #[test]
    fn emits_warning_event_on_host_name_fallback() {
        use super::machine_id_from_lookup;
        use std::io;

        let (subscriber, logs) = crate::generator::tests::capturing_subscriber();
        tracing::subscriber::with_default(subscriber, || {
            let err = io::Error::new(io::ErrorKind::NotFound, "no host name");
            machine_id_from_lookup(Err(err));
        });

        let logs = logs.contents();
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("could not read host name"), "{logs}");
        assert!(logs.contains("no host name"), "{logs}");
    }
}
