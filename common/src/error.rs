use thiserror::Error;

/// Why a fetch against the leads API did not produce a usable body.
///
/// Every variant is handled the same way by the dashboard: log it, show one
/// notification, keep the previous state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },
    #[error("malformed response: {0}")]
    Decode(String),
}
