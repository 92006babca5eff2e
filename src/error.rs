use thiserror::Error;

/// Failures of the AI fallback. The heuristic cascade never errors.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("No API key configured for the extraction service")]
    MissingApiKey,

    #[error("Extraction service is not reachable at {0}")]
    Connection(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Extraction service returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Extraction service returned no content")]
    EmptyResponse,

    #[error("Malformed extraction reply: {0}")]
    MalformedResponse(String),

    #[error("JSON parsing error: {0}")]
    JsonParsing(String),
}
