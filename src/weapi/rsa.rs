// Textbook RSA Encoder
// Raw `m^e mod n` over the reversed secret key, rendered as fixed-width hex.
//
// This is intentionally non-standard: no PKCS#1 or OAEP padding. The weapi
// server decrypts exactly this construction, so the output must not change.

use super::bigint::{from_bytes, from_hex, mod_pow, to_hex, RsaBigInt};
use super::error::{CodecError, Result};
use num_traits::Zero;

/// Width of the `encSecKey` field in hex digits
pub const ENC_SEC_KEY_LEN: usize = 256;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq)]
pub struct RsaPublicKey {
    pub n: RsaBigInt, // Modulus
    pub e: RsaBigInt, // Public exponent
}

impl RsaPublicKey {
    /// Build a key from a modulus and exponent, rejecting a zero modulus
    pub fn new(n: RsaBigInt, e: RsaBigInt) -> Result<Self> {
        if n.is_zero() {
            return Err(CodecError::InvalidModulus("modulus must be positive".to_string()));
        }
        Ok(Self { n, e })
    }

    /// Build a key from hex literals such as `"00e0b5..."` and `"010001"`
    pub fn from_hex(modulus: &str, exponent: &str) -> Result<Self> {
        Self::new(from_hex(modulus)?, from_hex(exponent)?)
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }
}

/// Encrypt `text` for the `encSecKey` field.
///
/// 1. reverse the characters of `text`
/// 2. read the reversed bytes as one big-endian integer
/// 3. raise it to `e` mod `n`
/// 4. render as lowercase hex, fixed to [`ENC_SEC_KEY_LEN`] digits
pub fn rsa_encode(text: &str, public_key: &RsaPublicKey) -> String {
    let reversed: String = text.chars().rev().collect();
    let m = from_bytes(reversed.as_bytes());

    let c = mod_pow(&m, &public_key.e, &public_key.n);

    render_fixed_width(&to_hex(&c), ENC_SEC_KEY_LEN)
}

/// Left-pad `digits` with '0' up to `width`, or keep only the rightmost
/// `width` characters when it is longer. The truncation drops high-order
/// digits and is what the server expects.
pub fn render_fixed_width(digits: &str, width: usize) -> String {
    if digits.len() < width {
        format!("{digits:0>width$}")
    } else {
        digits[digits.len() - width..].to_string()
    }
}
