// errors.rs
use crate::domain::InputError;
use crate::pricing::PredictError;
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad input, etc.) or the pricing pipeline.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// The model failed to load at startup. Carries the load error text.
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Prediction failed: {0}")]
    Prediction(#[from] PredictError),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::ModelUnavailable(_) => 503,
            ServerError::Prediction(_) | ServerError::InternalError => 500,
        }
    }
}

impl From<InputError> for ServerError {
    fn from(err: InputError) -> Self {
        ServerError::BadRequest(err.to_string())
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
