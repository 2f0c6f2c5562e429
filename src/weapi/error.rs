// Weapi Codec Errors

use thiserror::Error;

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors that can occur while sealing a request
///
/// `InvalidKeyLength`, `InvalidIvLength` and `InvalidPadding` indicate cipher
/// misuse; with the fixed protocol constants they only surface through the
/// test-facing `decrypt` path or a caller-supplied key.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid AES key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("invalid AES IV length: expected {expected} bytes, got {actual}")]
    InvalidIvLength { expected: usize, actual: usize },

    #[error("invalid PKCS#7 padding")]
    InvalidPadding,

    #[error("invalid secret key: {0}")]
    InvalidSecretKey(String),

    #[error("invalid RSA modulus: {0}")]
    InvalidModulus(String),

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decrypted payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("request parameters are not serializable: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{stage} stage failed: {source}")]
    Encoding {
        stage: &'static str,
        #[source]
        source: Box<CodecError>,
    },
}

impl CodecError {
    /// Wrap a primitive failure with the orchestrator stage it came from
    pub fn at_stage(stage: &'static str, source: CodecError) -> Self {
        CodecError::Encoding {
            stage,
            source: Box::new(source),
        }
    }
}
