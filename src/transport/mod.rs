// Transport Module - Main module file
// Helpers for the HTTP layer that posts sealed requests; no network I/O here

pub mod config;
pub mod endpoints;
pub mod response;

pub use config::TransportConfig;
pub use endpoints::{
    album_params, lyric_params, playlist_params, search_params, song_detail_params, Endpoint,
};
pub use response::{check_response, ResponseStatus, TransportError};

use crate::weapi::{encode, EncryptedPayload, Result};
use serde::Serialize;

/// A ready-to-send POST: target URL, headers and form body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

/// Seal `params` for `endpoint` and assemble the POST the transport sends
pub fn build_request<T: Serialize + ?Sized>(
    endpoint: Endpoint,
    params: &T,
    config: &TransportConfig,
) -> Result<SealedRequest> {
    let payload: EncryptedPayload = encode(params)?;
    Ok(SealedRequest {
        url: endpoint.url(),
        headers: config.headers(),
        body: payload.to_form_body(),
    })
}
