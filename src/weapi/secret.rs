// Secret Key Generation
// Fresh 16-character alphanumeric key for the second AES stage

use std::fmt;

use rand::{thread_rng, Rng};

use super::cipher::KEY_SIZE;
use super::error::{CodecError, Result};

/// Symbols a secret key is drawn from
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of characters in a secret key (one AES-128 key)
pub const SECRET_KEY_LEN: usize = KEY_SIZE;

/// Ephemeral per-request AES key.
///
/// Always exactly [`SECRET_KEY_LEN`] ASCII alphanumerics, so its bytes are
/// directly usable as an AES-128 key.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    /// Generate a key from the calling thread's RNG
    pub fn generate() -> Self {
        Self::generate_with(&mut thread_rng())
    }

    /// Generate a key from a caller-supplied RNG
    pub fn generate_with<R: Rng>(rng: &mut R) -> Self {
        let key = (0..SECRET_KEY_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        SecretKey(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl TryFrom<&str> for SecretKey {
    type Error = CodecError;

    fn try_from(value: &str) -> Result<Self> {
        if value.len() != SECRET_KEY_LEN {
            return Err(CodecError::InvalidSecretKey(format!(
                "expected {} characters, got {}",
                SECRET_KEY_LEN,
                value.len()
            )));
        }
        if !value.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(CodecError::InvalidSecretKey(
                "only 0-9, a-z and A-Z are allowed".to_string(),
            ));
        }
        Ok(SecretKey(value.to_string()))
    }
}

// Keys never show up in logs or panic messages.
impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}
