#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, str};

use crate::{base32, Error};
use fstr::FStr;

/// Represents a 12-byte globally unique, time-sortable identifier.
///
/// The ordering, equality, and hashing of `Xid` values are all derived from the underlying byte
/// array, so identifiers compare byte by byte. Because the timestamp occupies the leading four
/// bytes in big-endian order, this order follows the generation time at one-second resolution.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Xid([u8; 12]);

impl Xid {
    /// Nil identifier (00000000000000000000)
    pub const NIL: Self = Self([0x00; 12]);

    /// Max identifier (zzzzzzzzzzzzzzzzzzzg)
    pub const MAX: Self = Self([0xff; 12]);

    /// Creates an identifier from field values.
    ///
    /// # Panics
    ///
    /// Panics if `counter` is not a 24-bit unsigned integer.
    pub const fn from_fields(timestamp: u32, machine_id: [u8; 3], pid: u16, counter: u32) -> Self {
        if counter >= 1 << 24 {
            panic!("invalid field value");
        }

        Self([
            (timestamp >> 24) as u8,
            (timestamp >> 16) as u8,
            (timestamp >> 8) as u8,
            timestamp as u8,
            machine_id[0],
            machine_id[1],
            machine_id[2],
            (pid >> 8) as u8,
            pid as u8,
            (counter >> 16) as u8,
            (counter >> 8) as u8,
            counter as u8,
        ])
    }

    /// Creates an identifier from a byte slice, failing unless the slice is exactly 12 bytes long.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xid::{Error, Xid};
    ///
    /// let x = Xid::from_slice(&[0u8; 12])?;
    /// assert_eq!(x, Xid::NIL);
    /// assert_eq!(Xid::from_slice(&[0u8; 3]), Err(Error::InvalidLength { len: 3 }));
    /// # Ok::<(), xid::Error>(())
    /// ```
    pub fn from_slice(src: &[u8]) -> Result<Self, Error> {
        <[u8; 12]>::try_from(src)
            .map(Self)
            .map_err(|_| Error::InvalidLength { len: src.len() })
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }

    /// Returns the Unix timestamp in seconds.
    pub const fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Returns the 3-byte machine identifier.
    pub const fn machine_id(&self) -> [u8; 3] {
        [self.0[4], self.0[5], self.0[6]]
    }

    /// Returns the 16-bit process identifier.
    pub const fn pid(&self) -> u16 {
        u16::from_be_bytes([self.0[7], self.0[8]])
    }

    /// Returns the 24-bit counter.
    pub const fn counter(&self) -> u32 {
        u32::from_be_bytes([0, self.0[9], self.0[10], self.0[11]])
    }

    /// Returns `true` if this is the nil identifier.
    pub const fn is_nil(&self) -> bool {
        let mut i = 0;
        while i < self.0.len() {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Returns the 20-digit base32 string representation stored in a stack-allocated string type
    /// that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// This method is primarily for `no_std` environments where heap-allocated string types are
    /// not readily available. Use the [`fmt::Display`] trait usually to get the textual
    /// representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xid::Xid;
    ///
    /// let x = "9p4e2pv0yj3e8a215q4g".parse::<Xid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "9p4e2pv0yj3e8a215q4g");
    /// assert_eq!(format!("{}", y), "9p4e2pv0yj3e8a215q4g");
    /// # Ok::<(), xid::Error>(())
    /// ```
    pub fn encode(&self) -> FStr<20> {
        FStr::from_inner(base32::encode(&self.0)).expect("base32 digits must be ASCII")
    }
}

impl fmt::Display for Xid {
    /// Returns the 20-digit base32 string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Xid {
    type Err = Error;

    /// Creates an object from the 20-digit base32 string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        base32::decode(src).map(Self)
    }
}

impl From<Xid> for [u8; 12] {
    fn from(src: Xid) -> Self {
        src.0
    }
}

impl From<[u8; 12]> for Xid {
    fn from(src: [u8; 12]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Xid {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl AsRef<[u8]> for Xid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{Error, Xid};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    impl Xid {
        /// Returns the timestamp as a [`SystemTime`].
        pub fn time(&self) -> SystemTime {
            UNIX_EPOCH + Duration::from_secs(u64::from(self.timestamp()))
        }
    }

    impl From<Xid> for String {
        fn from(src: Xid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Xid {
        type Error = Error;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Xid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Xid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Xid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Xid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a 20-digit base32 identifier string")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::from_slice(value).map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Xid;
        use serde_test::{assert_de_tokens_error, assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000000000000000", &[0u8; 12]),
                (
                    "9p4e2pv0yj3e8a215q4g",
                    &[77, 136, 225, 91, 96, 244, 134, 228, 40, 65, 45, 201],
                ),
                (
                    "00007t01081h4d00000g",
                    &[0, 0, 3, 232, 1, 2, 3, 18, 52, 0, 0, 1],
                ),
                ("zzzzzzzzzzzzzzzzzzzg", &[0xff; 12]),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Xid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }

        /// Surfaces invalid input as deserialization error
        #[test]
        fn surfaces_invalid_input_as_deserialization_error() {
            assert_de_tokens_error::<serde_test::Readable<Xid>>(
                &[Token::Str("short")],
                "invalid string representation",
            );
            assert_de_tokens_error::<serde_test::Readable<Xid>>(
                &[Token::Str("000000000u0000000000")],
                "invalid string representation",
            );
            assert_de_tokens_error::<serde_test::Compact<Xid>>(
                &[Token::Bytes(&[0u8; 3])],
                "invalid length: expected 12 bytes, got 3",
            );
        }

        /// Serializes as a quoted string in JSON
        #[test]
        fn serializes_as_a_quoted_string_in_json() {
            let e: Xid = "00007t01081h4d00000g".parse().unwrap();
            let json = serde_json::to_string(&e).unwrap();
            assert_eq!(json, r#""00007t01081h4d00000g""#);
            assert_eq!(serde_json::from_str::<Xid>(&json).unwrap(), e);
            assert!(serde_json::from_str::<Xid>(r#""00007t01081h4d0000""#).is_err());
            assert!(serde_json::from_str::<Xid>("12").is_err());
        }
    }
}
