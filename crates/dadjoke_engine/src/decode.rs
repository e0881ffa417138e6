use serde::de::DeserializeOwned;

use crate::{FailureKind, FetchError, JokeResponse};

/// A JSON body the engine knows how to decode and sanity-check.
pub trait JsonPayload: DeserializeOwned + Send + 'static {
    /// Rejects bodies that parse but do not match the expected shape.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl JsonPayload for JokeResponse {
    fn validate(&self) -> Result<(), String> {
        if self.status != 200 {
            return Err(format!("unexpected status field {}", self.status));
        }
        Ok(())
    }
}

impl JsonPayload for serde_json::Value {}

pub fn decode_json<T: JsonPayload>(bytes: &[u8]) -> Result<T, FetchError> {
    let payload: T = serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
    payload
        .validate()
        .map_err(|message| FetchError::new(FailureKind::Decode, message))?;
    Ok(payload)
}
