use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading the model artifact. All of them are fatal:
/// without a model no prediction is attempted.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model file '{}' not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read model file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid model artifact: {0}")]
    Invalid(String),
}

/// The encoded features do not line up with what the model declares.
#[derive(Debug, Error, PartialEq)]
pub enum FeatureMismatchError {
    #[error("model expects features that could not be assembled: {}", .missing.join(", "))]
    Missing { missing: Vec<String> },

    #[error("feature vector is out of line with the model (expected {expected:?}, got {actual:?})")]
    Misaligned {
        expected: Vec<String>,
        actual: Vec<String>,
    },
}

/// The scoring call itself failed.
#[derive(Debug, Error, PartialEq)]
pub enum InferenceError {
    #[error("tree {tree} walked to node {node}, outside its {len} nodes")]
    NodeOutOfRange { tree: usize, node: i64, len: usize },

    #[error("tree {tree} did not reach a leaf")]
    Unterminated { tree: usize },

    #[error("model produced a non-finite output ({0})")]
    NonFinite(f64),
}

/// Anything that can go wrong between an encoded vector and a price.
#[derive(Debug, Error, PartialEq)]
pub enum PredictError {
    #[error(transparent)]
    FeatureMismatch(#[from] FeatureMismatchError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}
