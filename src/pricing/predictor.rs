// src/pricing/predictor.rs

use crate::domain::RawListingInput;
use crate::pricing::encoder::{encode, EncodedFeatureVector};
use crate::pricing::error::{FeatureMismatchError, PredictError};
use crate::pricing::model::PriceModel;

/// Score one encoded row. The vector must carry exactly the model's
/// feature names in the model's order; anything else is refused rather
/// than scored against misaligned columns. No retries.
pub fn predict(model: &PriceModel, features: &EncodedFeatureVector) -> Result<f64, PredictError> {
    if features.names() != model.feature_order() {
        return Err(FeatureMismatchError::Misaligned {
            expected: model.feature_order().to_vec(),
            actual: features.names().to_vec(),
        }
        .into());
    }

    let price = model.score_row(features.values())?;
    Ok(price)
}

impl PriceModel {
    /// Encode `raw` against this model's feature order and score it.
    pub fn quote(&self, raw: &RawListingInput) -> Result<f64, PredictError> {
        let features = encode(raw, self.feature_order())?;
        let price = predict(self, &features)?;

        tracing::debug!(
            room_type = %raw.room_type,
            neighbourhood_group = %raw.neighbourhood_group,
            price,
            "quoted listing"
        );

        Ok(price)
    }
}

/// `$123.45`, the way prices are shown to the user.
pub fn format_price(price: f64) -> String {
    let amount = format!("{:.2}", price.abs());
    // Sign goes before the symbol; anything that rounds to zero has none.
    if price < 0.0 && amount != "0.00" {
        format!("-${amount}")
    } else {
        format!("${amount}")
    }
}
