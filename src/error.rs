#[cfg(not(feature = "std"))]
use core as std;

use std::fmt;

/// Error constructing an [`Xid`](crate::Xid) from an invalid binary or textual representation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The byte sequence passed was not exactly 12 bytes long.
    InvalidLength {
        /// Length of the rejected byte sequence.
        len: usize,
    },

    /// The string passed was not 20 characters long or contained a character outside the
    /// base32 alphabet.
    InvalidString,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { len } => write!(f, "invalid length: expected 12 bytes, got {len}"),
            Self::InvalidString => write!(f, "invalid string representation"),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;

    /// Describes the rejected length in the message
    #[test]
    fn describes_the_rejected_length_in_the_message() {
        let e = Error::InvalidLength { len: 3 };
        assert_eq!(format!("{e}"), "invalid length: expected 12 bytes, got 3");
        assert_eq!(
            format!("{}", Error::InvalidString),
            "invalid string representation"
        );
    }
}
