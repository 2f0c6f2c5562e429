// Weapi Big Integer Operations
// Wrapper around num-bigint for the RSA stage of request sealing

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use super::error::{CodecError, Result};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
#[cfg(test)]
pub(crate) fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Create a big integer from bytes (big-endian)
pub fn from_bytes(bytes: &[u8]) -> RsaBigInt {
    RsaBigInt::from_bytes_be(bytes)
}

/// Parse a base-16 string (no `0x` prefix, either case) into a big integer.
/// Leading zero digits are accepted and ignored.
pub fn from_hex(digits: &str) -> Result<RsaBigInt> {
    if digits.is_empty() {
        return Err(CodecError::InvalidModulus("empty hex string".to_string()));
    }
    RsaBigInt::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| CodecError::InvalidModulus(format!("not a hex number: {digits}")))
}

/// Render as lowercase hex with no prefix and no leading zeros ("0" for zero)
pub fn to_hex(n: &RsaBigInt) -> String {
    n.to_str_radix(16)
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply algorithm
///
/// `modulus` must be non-zero; callers validate it when the key is built.
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_one() {
        return RsaBigInt::zero();
    }

    let mut result = RsaBigInt::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod_pow() {
        // 3^5 mod 7 = 243 mod 7 = 5
        let base = from_u64(3);
        let exp = from_u64(5);
        let modulus = from_u64(7);
        let result = mod_pow(&base, &exp, &modulus);
        assert_eq!(result, from_u64(5));
    }

    #[test]
    fn test_mod_pow_edge_cases() {
        // anything mod 1 is 0
        assert_eq!(mod_pow(&from_u64(9), &from_u64(3), &from_u64(1)), from_u64(0));
        // x^0 = 1
        assert_eq!(mod_pow(&from_u64(9), &from_u64(0), &from_u64(7)), from_u64(1));
        // base larger than modulus is reduced first
        assert_eq!(mod_pow(&from_u64(10), &from_u64(1), &from_u64(7)), from_u64(3));
    }

    #[test]
    fn test_mod_pow_matches_num_bigint_at_2048_bits() {
        let modulus = (from_u64(1) << 2047u32) + from_u64(12345);
        let base = (from_u64(1) << 2000u32) + from_u64(7);
        let exp = from_u64(65537);

        assert_eq!(mod_pow(&base, &exp, &modulus), base.modpow(&exp, &modulus));
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(from_hex("010001").unwrap(), from_u64(65537));
        assert_eq!(from_hex("00FF").unwrap(), from_u64(255));
        assert!(from_hex("").is_err());
        assert!(from_hex("xyz").is_err());
    }

    #[test]
    fn test_to_hex_is_lowercase_unprefixed() {
        assert_eq!(to_hex(&from_u64(0xABCDEF)), "abcdef");
        assert_eq!(to_hex(&from_u64(0)), "0");
        assert_eq!(to_hex(&from_bytes(&[0x00, 0x0a])), "a");
    }
}
