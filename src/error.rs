use actix_web::http::StatusCode;
use actix_web::ResponseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CspError {
    #[error("Invalid directive name: {0}")]
    InvalidDirectiveName(String),

    #[error("Invalid hash algorithm: {0}")]
    InvalidHashAlgorithm(String),

    #[error("Crypto error: {0}")]
    CryptoError(String),

    #[error("Header processing error: {0}")]
    HeaderError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for CspError {
    fn from(err: serde_json::Error) -> Self {
        CspError::ConfigError(err.to_string())
    }
}

impl ResponseError for CspError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidDirectiveName(_)
            | Self::InvalidHashAlgorithm(_)
            | Self::ConfigError(_) => StatusCode::BAD_REQUEST,

            Self::CryptoError(_) | Self::HeaderError(_) | Self::IoError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
