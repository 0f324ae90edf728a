// Error taxonomy for the client pipeline.
//
// Transport and parse failures are recoverable by the caller (the build
// resolver falls through its tiers, the applier aborts the current apply);
// only bootstrap failure blocks progress, and it blocks by polling.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("websocket transport error: {0}")]
  Socket(#[from] tokio_tungstenite::tungstenite::Error),

  #[error("tls setup error: {0}")]
  Tls(#[from] native_tls::Error),

  #[error("http transport error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("LCU request {endpoint} failed with status {status}")]
  LcuStatus {
    endpoint: String,
    status: reqwest::StatusCode,
  },

  #[error("malformed payload: {0}")]
  Payload(String),

  #[error("provider {provider} could not supply a build: {reason}")]
  Provider { provider: String, reason: String },

  #[error("timed out waiting for event {0}")]
  WaitTimeout(String),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
