// Weapi Module - Main module file
// Exports the request sealing codec

pub mod bigint;
pub mod cipher;
pub mod constants;
pub mod encode;
pub mod error;
pub mod rsa;
pub mod secret;

pub use constants::ProtocolConstants;
pub use encode::{decode, encode, encode_with_key, seal, to_json, EncryptedPayload};
pub use error::{CodecError, Result};
pub use rsa::{rsa_encode, RsaPublicKey, ENC_SEC_KEY_LEN};
pub use secret::SecretKey;
