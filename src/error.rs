use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a submission was not accepted. Neither case changes session state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("message is empty")]
    EmptyInput,
    #[error("a reply is already pending")]
    ReplyPending,
}

impl ResponseError for SubmitError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubmitError::EmptyInput => StatusCode::UNPROCESSABLE_ENTITY,
            SubmitError::ReplyPending => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": self.to_string() }))
    }
}
