#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to read secrets file {path}: {message}")]
    Secrets { path: String, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse completion: {0}")]
    InvalidResponse(String),

    #[error(transparent)]
    Convert(#[from] pd2st_core::convert::ConvertError),
}
