//! Base32 codec translating the 12-byte binary form into the 20-digit textual form and back.
//!
//! The alphabet consists of the ten digits followed by the lowercase letters except `i`, `l`,
//! `o`, and `u`. Since the digits are arranged in ASCII order, the textual form sorts in the same
//! order as the binary form.

use crate::Error;

/// Digit characters used in the base32 notation.
const ALPHABET: &[u8; 32] = b"0123456789abcdefghjkmnpqrstvwxyz";

const NO_VALUE: u8 = 0xff;
const BITS_PER_CHAR: u32 = 5;

/// Number of bytes in the binary form.
pub(crate) const BYTE_LEN: usize = 12;

/// Number of characters in the textual form.
pub(crate) const TEXT_LEN: usize = 20;

/// O(1) map from ASCII code points to base32 digit values. Uppercase letters are accepted.
const DECODE_MAP: [u8; 256] = {
    let mut map = [NO_VALUE; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        let c = ALPHABET[i];
        map[c as usize] = i as u8;
        if c.is_ascii_lowercase() {
            map[c.to_ascii_uppercase() as usize] = i as u8;
        }
        i += 1;
    }
    map
};

/// Encodes 12 bytes into 20 ASCII base32 digits.
///
/// The bytes are consumed as a big-endian bit stream, five bits per digit. The last digit carries
/// the single remaining bit followed by four zero bits.
pub(crate) fn encode(src: &[u8; BYTE_LEN]) -> [u8; TEXT_LEN] {
    let mut dst = [0u8; TEXT_LEN];
    let mut out = dst.iter_mut();
    let mut acc = 0u16;
    let mut bits = 0u32;
    for &e in src {
        acc = (acc << 8) | u16::from(e);
        bits += 8;
        while bits >= BITS_PER_CHAR {
            bits -= BITS_PER_CHAR;
            if let Some(d) = out.next() {
                *d = ALPHABET[usize::from((acc >> bits) & 0x1f)];
            }
        }
    }
    if bits > 0 {
        // pad the leftover bits with zeros up to a full digit
        if let Some(d) = out.next() {
            *d = ALPHABET[usize::from((acc << (BITS_PER_CHAR - bits)) & 0x1f)];
        }
    }
    debug_assert!(out.next().is_none());
    debug_assert!(dst.is_ascii());
    dst
}

/// Decodes 20 base32 digits into 12 bytes.
///
/// Letters are matched case-insensitively. The four trailing padding bits of the last digit are
/// discarded without being checked.
pub(crate) fn decode(src: &str) -> Result<[u8; BYTE_LEN], Error> {
    if src.len() != TEXT_LEN {
        return Err(Error::InvalidString);
    }

    let mut dst = [0u8; BYTE_LEN];
    let mut out = dst.iter_mut();
    let mut acc = 0u16;
    let mut bits = 0u32;
    for e in src.bytes() {
        let n = DECODE_MAP[usize::from(e)];
        if n == NO_VALUE {
            return Err(Error::InvalidString);
        }
        acc = (acc << BITS_PER_CHAR) | u16::from(n);
        bits += BITS_PER_CHAR;
        if bits >= 8 {
            bits -= 8;
            if let Some(d) = out.next() {
                *d = (acc >> bits) as u8;
            }
        }
    }
    debug_assert!(out.next().is_none());
    Ok(dst)
}
