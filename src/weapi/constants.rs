// Weapi Protocol Constants
// Fixed key material shared with the music.163.com web client

use std::sync::OnceLock;

use super::cipher::{BLOCK_SIZE, KEY_SIZE};
use super::error::{CodecError, Result};
use super::rsa::RsaPublicKey;

/// RSA modulus (1024 bits) as published by the web client
pub const MODULUS_HEX: &str = "00e0b509f6259df8642dbc35662901477df22677ec152b5ff68ace615bb7b725152b3ab17a876aea8a5aa76d2e417629ec4ee341f56135fccf695280104e0312ecbda92557c93870114af6c9d05c4f7f0c3685b7a46bee255932575cce10b424d813cfe4875d3e82047b97ddef52741d546b8e289dc6935b3ece0462db0a22b8e7";

/// RSA public exponent (65537)
pub const PUBLIC_EXPONENT_HEX: &str = "010001";

/// First-stage AES key
pub const NONCE_KEY: &[u8; 16] = b"0CoJUm6Qyw8W8jud";

/// IV shared by both AES stages
pub const IV: &[u8; 16] = b"0102030405060708";

static WEAPI: OnceLock<ProtocolConstants> = OnceLock::new();

/// Immutable parameters of the sealing scheme
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolConstants {
    pub public_key: RsaPublicKey,
    pub nonce_key: [u8; KEY_SIZE],
    pub iv: [u8; BLOCK_SIZE],
}

impl ProtocolConstants {
    /// Build a custom parameter set
    pub fn new(modulus_hex: &str, exponent_hex: &str, nonce_key: &[u8], iv: &[u8]) -> Result<Self> {
        let nonce_key: [u8; KEY_SIZE] = nonce_key.try_into().map_err(|_| CodecError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: nonce_key.len(),
        })?;
        let iv: [u8; BLOCK_SIZE] = iv.try_into().map_err(|_| CodecError::InvalidIvLength {
            expected: BLOCK_SIZE,
            actual: iv.len(),
        })?;

        Ok(Self {
            public_key: RsaPublicKey::from_hex(modulus_hex, exponent_hex)?,
            nonce_key,
            iv,
        })
    }

    /// The process-wide weapi constants, parsed on first use
    pub fn weapi() -> &'static ProtocolConstants {
        WEAPI.get_or_init(|| {
            Self::new(MODULUS_HEX, PUBLIC_EXPONENT_HEX, NONCE_KEY, IV)
                .expect("built-in weapi constants are well-formed")
        })
    }
}
