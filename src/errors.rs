use thiserror::Error;

/// Failures talking to the explorer. All of them abort the lookup.
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("failed to fetch data from {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response: {0}")]
    Body(#[source] reqwest::Error),

    #[error("failed to parse JSON (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures rescaling a single balance. The affected row is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("invalid decimals: {0:?}")]
    InvalidDecimals(String),

    #[error("negative decimals")]
    NegativeDecimals,

    #[error("invalid value: {0:?}")]
    InvalidValue(String),
}
