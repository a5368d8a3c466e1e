// src/pricing/encoder.rs

use crate::domain::{NeighbourhoodGroup, RawListingInput, RoomType};
use crate::pricing::error::FeatureMismatchError;

/// Hosts with more listings than this count as popular.
pub const POPULAR_HOST_THRESHOLD: u32 = 10;

/// Room type implicitly encoded as all-zero indicators.
pub const BASELINE_ROOM_TYPE: RoomType = RoomType::EntireHome;

/// Neighbourhood group implicitly encoded as all-zero indicators.
pub const BASELINE_NEIGHBOURHOOD_GROUP: NeighbourhoodGroup = NeighbourhoodGroup::Bronx;

/// Numeric features in the model's column order, one row.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedFeatureVector {
    names: Vec<String>,
    values: Vec<f64>,
}

impl EncodedFeatureVector {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

pub fn is_popular_host(calculated_host_listings_count: u32) -> bool {
    calculated_host_listings_count > POPULAR_HOST_THRESHOLD
}

/// Column name used for a room type indicator, e.g. `room_type_Private room`.
pub fn room_type_column(room: RoomType) -> String {
    format!("room_type_{}", room.as_str())
}

pub fn neighbourhood_group_column(group: NeighbourhoodGroup) -> String {
    format!("neighbourhood_group_{}", group.as_str())
}

fn indicator(on: bool) -> f64 {
    if on {
        1.0
    } else {
        0.0
    }
}

/// Every feature this encoder knows how to produce, in no particular order.
fn assemble(raw: &RawListingInput) -> Vec<(String, f64)> {
    let mut features = vec![
        ("latitude".to_string(), raw.latitude),
        ("longitude".to_string(), raw.longitude),
        ("minimum_nights".to_string(), f64::from(raw.minimum_nights)),
        ("number_of_reviews".to_string(), f64::from(raw.number_of_reviews)),
        ("reviews_per_month".to_string(), raw.reviews_per_month),
        (
            "calculated_host_listings_count".to_string(),
            f64::from(raw.calculated_host_listings_count),
        ),
        ("availability_365".to_string(), f64::from(raw.availability_365)),
        (
            "days_since_last_review".to_string(),
            f64::from(raw.days_since_last_review),
        ),
        (
            "is_popular_host".to_string(),
            indicator(is_popular_host(raw.calculated_host_listings_count)),
        ),
    ];

    for room in RoomType::ALL
        .into_iter()
        .filter(|r| *r != BASELINE_ROOM_TYPE)
    {
        features.push((room_type_column(room), indicator(raw.room_type == room)));
    }

    for group in NeighbourhoodGroup::ALL
        .into_iter()
        .filter(|g| *g != BASELINE_NEIGHBOURHOOD_GROUP)
    {
        features.push((
            neighbourhood_group_column(group),
            indicator(raw.neighbourhood_group == group),
        ));
    }

    features
}

/// Map a listing to the row the model expects.
///
/// Columns are selected strictly by `feature_order`. A name the encoder
/// cannot produce is an error, never a silent zero. Assembled features
/// the model does not declare are left out.
pub fn encode(
    raw: &RawListingInput,
    feature_order: &[String],
) -> Result<EncodedFeatureVector, FeatureMismatchError> {
    let assembled = assemble(raw);

    let mut values = Vec::with_capacity(feature_order.len());
    let mut missing = Vec::new();

    for name in feature_order {
        match assembled.iter().find(|(n, _)| n == name) {
            Some((_, v)) => values.push(*v),
            None => missing.push(name.clone()),
        }
    }

    if !missing.is_empty() {
        return Err(FeatureMismatchError::Missing { missing });
    }

    Ok(EncodedFeatureVector {
        names: feature_order.to_vec(),
        values,
    })
}
