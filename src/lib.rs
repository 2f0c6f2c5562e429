//! Request sealing for the music.163.com "weapi" endpoints.
//!
//! Request parameters are serialized to JSON, encrypted twice with
//! AES-128-CBC (a fixed nonce key, then a fresh per-request key), and the
//! per-request key is wrapped with textbook RSA. The RSA step has no
//! padding on purpose; the server only accepts that exact construction.
//!
//! ```no_run
//! use serde_json::json;
//!
//! let payload = weapi_codec::encode(&json!({"id": "347230", "lv": -1})).unwrap();
//! let body = payload.to_form_body();
//! ```

pub mod transport;
pub mod weapi;

pub use weapi::{encode, CodecError, EncryptedPayload, Result};
