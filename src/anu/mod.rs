//! Remote randomness service
//! Fetches quantum random bytes from the ANU JSON API and decodes the response

use std::time::Duration;

use serde::Deserialize;
use ureq::Agent;

use crate::error::{QError, QrnError, Result};

/// Default endpoint of the ANU quantum random number API
pub const DEFAULT_ENDPOINT: &str = "https://qrng.anu.edu.au/API/jsonI.php";

/// Largest `length` the service accepts in a single request
pub const MAX_REQUEST_LEN: usize = 1024;

/// Largest number of bytes a single fetch may ask for
pub const MAX_FETCH_LEN: usize = 1 << 20;

/// Anything that can hand out fresh random bytes
pub trait QrnSource {
    /// Produce exactly `count` bytes; `count` never exceeds [`MAX_FETCH_LEN`]
    fn request(&self, count: usize) -> Result<Vec<u8>>;

    /// Fetch exactly `count` bytes, refusing counts above [`MAX_FETCH_LEN`]
    fn fetch(&self, count: usize) -> Result<Vec<u8>> {
        if count > MAX_FETCH_LEN {
            return Err(QrnError::RequestTooLarge {
                requested: count,
                max: MAX_FETCH_LEN,
            });
        }
        self.request(count)
    }
}

/// HTTP client for the ANU service
pub struct AnuClient {
    agent: Agent,
    endpoint: String,
}

impl AnuClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            endpoint: endpoint.into(),
        }
    }

    fn request_chunk(&self, count: usize) -> Result<Vec<u8>> {
        log::debug!("requesting {count} bytes from {}", self.endpoint);
        let body = self
            .agent
            .get(&self.endpoint)
            .query("length", &count.to_string())
            .query("type", "uint8")
            .call()
            .map_err(|e| QrnError::Transport(e.to_string()))?
            .into_string()?;
        let bytes = parse_response(&body)?;
        if bytes.len() != count {
            return Err(QError::ParseResponseError(format!(
                "asked for {count} bytes but received {}",
                bytes.len()
            ))
            .into());
        }
        Ok(bytes)
    }
}

impl QrnSource for AnuClient {
    fn request(&self, count: usize) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let mut remaining = count;
        while remaining > 0 {
            let chunk = remaining.min(MAX_REQUEST_LEN);
            bytes.extend(self.request_chunk(chunk)?);
            remaining -= chunk;
        }
        Ok(bytes)
    }
}

#[derive(Debug, Deserialize)]
struct AnuResponse {
    #[serde(rename = "type")]
    kind: Option<String>,
    length: Option<usize>,
    data: Option<Vec<serde_json::Value>>,
    success: bool,
}

/// Decode a JSON body of the form `{"type":"uint8","length":N,"data":[..],"success":true}`
pub fn parse_response(body: &str) -> std::result::Result<Vec<u8>, QError> {
    let response: AnuResponse =
        serde_json::from_str(body).map_err(|e| QError::ParseResponseError(e.to_string()))?;

    if !response.success {
        return Err(QError::ParseResponseError(
            "service reported an unsuccessful request".to_string(),
        ));
    }
    if let Some(kind) = response.kind.as_deref() {
        if kind != "uint8" {
            return Err(QError::ParseResponseError(format!(
                "unexpected data type: {kind}"
            )));
        }
    }
    let data = response
        .data
        .ok_or_else(|| QError::ParseResponseError("response has no data".to_string()))?;

    let bytes = data
        .iter()
        .map(|value| {
            value
                .as_u64()
                .and_then(|n| u8::try_from(n).ok())
                .ok_or_else(|| QError::ParseResponseError(format!("not a byte: {value}")))
        })
        .collect::<std::result::Result<Vec<u8>, QError>>()?;

    if let Some(length) = response.length {
        if length != bytes.len() {
            return Err(QError::ParseResponseError(format!(
                "declared length {length} but data holds {}",
                bytes.len()
            )));
        }
    }
    Ok(bytes)
}
