pub mod encoder;
pub mod error;
pub mod model;
pub mod predictor;

#[cfg(test)]
pub mod testing;

pub use encoder::{encode, EncodedFeatureVector};
pub use error::{FeatureMismatchError, InferenceError, ModelError, PredictError};
pub use model::PriceModel;
pub use predictor::{format_price, predict};
