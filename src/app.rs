use crate::errors::ServerError;
use crate::pricing::{ModelError, PriceModel};
use std::path::Path;
use std::sync::Arc;

/// The model as loaded at startup, shared read-only by every worker.
#[derive(Debug, Clone)]
pub enum ModelState {
    Ready(Arc<PriceModel>),
    /// Load failed; the message is shown instead of the form.
    Unavailable(String),
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub model: ModelState,
}

impl AppState {
    pub fn new(model: PriceModel) -> Self {
        Self {
            model: ModelState::Ready(Arc::new(model)),
        }
    }

    pub fn unavailable(err: &ModelError) -> Self {
        Self {
            model: ModelState::Unavailable(err.to_string()),
        }
    }

    /// Load the artifact once. A failure is logged and kept, so every
    /// request afterwards gets the blocking message and nothing is scored.
    pub fn load(model_path: &Path) -> Self {
        match PriceModel::load(model_path) {
            Ok(model) => Self::new(model),
            Err(err) => {
                tracing::error!(error = %err, "model failed to load; predictions disabled");
                Self::unavailable(&err)
            }
        }
    }

    pub fn model(&self) -> Result<&PriceModel, ServerError> {
        match &self.model {
            ModelState::Ready(model) => Ok(model.as_ref()),
            ModelState::Unavailable(msg) => Err(ServerError::ModelUnavailable(msg.clone())),
        }
    }
}
