//! Dadjoke engine: HTTP retrieval, JSON decoding and request execution.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::{decode_json, JsonPayload};
pub use engine::{EngineError, EngineHandle};
pub use fetch::{fetch_json, FetchSettings, Fetcher, ReqwestFetcher};
pub use types::{
    EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, JokeResponse, RequestId,
};
