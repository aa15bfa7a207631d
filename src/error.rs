use reqwest::StatusCode;

/// Errors raised while talking to the validator API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid validator url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },
    #[error("unable to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unable to write export: {0}")]
    Io(#[from] std::io::Error),
}
