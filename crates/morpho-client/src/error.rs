use thiserror::Error;

#[derive(Error, Debug)]
pub enum MorphoError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GraphQL endpoint answered with HTTP status {status}")]
    HttpStatus { status: u16 },

    #[error("Invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}
