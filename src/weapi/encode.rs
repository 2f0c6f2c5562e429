// Weapi Request Sealing
// Two AES-128-CBC passes over the JSON parameters plus an RSA-wrapped session key

use std::io;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;
use tracing::{debug, trace};

use super::cipher;
use super::constants::ProtocolConstants;
use super::error::{CodecError, Result};
use super::rsa::rsa_encode;
use super::secret::SecretKey;

/// The two form fields posted to a weapi endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedPayload {
    /// Base64 output of the second AES stage
    pub params: String,
    /// 256 lowercase hex digits
    #[serde(rename = "encSecKey")]
    pub enc_sec_key: String,
}

impl EncryptedPayload {
    /// `application/x-www-form-urlencoded` body: `params=...&encSecKey=...`
    pub fn to_form_body(&self) -> String {
        format!(
            "params={}&encSecKey={}",
            urlencoding::encode(&self.params),
            urlencoding::encode(&self.enc_sec_key)
        )
    }
}

/// Compact JSON formatter that writes everything outside printable ASCII
/// as lowercase `\uXXXX` (surrogate pairs above the BMP). The web client's
/// serializer does the same, and the server decrypts those exact bytes.
struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Serialize `params` to compact, ASCII-only JSON text
pub fn to_json<T: Serialize + ?Sized>(params: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter);
    params.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

/// Seal request parameters with a fresh secret key and the weapi constants.
///
/// `params` is serialized with [`to_json`]; anything `serde_json` rejects
/// (e.g. a map with non-string keys) fails with `CodecError::Serialization`.
pub fn encode<T: Serialize + ?Sized>(params: &T) -> Result<EncryptedPayload> {
    let raw = to_json(params)?;
    let secret_key = SecretKey::generate();
    seal(&raw, &secret_key, ProtocolConstants::weapi())
}

/// Same as [`encode`] with an explicit key and constants
pub fn encode_with_key<T: Serialize + ?Sized>(
    params: &T,
    secret_key: &SecretKey,
    constants: &ProtocolConstants,
) -> Result<EncryptedPayload> {
    let raw = to_json(params)?;
    seal(&raw, secret_key, constants)
}

/// Seal already-serialized JSON text
pub fn seal(raw: &str, secret_key: &SecretKey, constants: &ProtocolConstants) -> Result<EncryptedPayload> {
    let first = cipher::encrypt(&constants.nonce_key, &constants.iv, raw.as_bytes())
        .map_err(|e| CodecError::at_stage("nonce-key AES", e))?;
    let first = STANDARD.encode(first);
    trace!(len = first.len(), "first AES stage done");

    let second = cipher::encrypt(secret_key.as_bytes(), &constants.iv, first.as_bytes())
        .map_err(|e| CodecError::at_stage("secret-key AES", e))?;
    let params = STANDARD.encode(second);

    let enc_sec_key = rsa_encode(secret_key.as_str(), &constants.public_key);

    debug!(
        plaintext_len = raw.len(),
        params_len = params.len(),
        "sealed weapi request"
    );

    Ok(EncryptedPayload {
        params,
        enc_sec_key,
    })
}

/// Undo both AES stages of `params` given the secret key that sealed it.
///
/// The RSA half cannot be reversed without the server's private key, so the
/// caller must already know `secret_key`.
pub fn decode(params: &str, secret_key: &SecretKey, constants: &ProtocolConstants) -> Result<String> {
    let second = STANDARD.decode(params)?;
    let first = cipher::decrypt(secret_key.as_bytes(), &constants.iv, &second)?;

    let first = STANDARD.decode(first)?;
    let raw = cipher::decrypt(&constants.nonce_key, &constants.iv, &first)?;

    Ok(String::from_utf8(raw)?)
}
