// src/domain/listing.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Problems with user-supplied listing attributes.
/// These are caught before anything reaches the encoder.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("missing field `{0}`")]
    Missing(&'static str),

    #[error("field `{field}` has invalid value `{value}`")]
    Invalid { field: &'static str, value: String },

    #[error("unknown {field} `{value}`")]
    UnknownCategory { field: &'static str, value: String },

    #[error("field `{field}` {reason}")]
    OutOfRange {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    #[serde(rename = "Entire home/apt")]
    EntireHome,
    #[serde(rename = "Private room")]
    PrivateRoom,
    #[serde(rename = "Shared room")]
    SharedRoom,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [
        RoomType::EntireHome,
        RoomType::PrivateRoom,
        RoomType::SharedRoom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::EntireHome => "Entire home/apt",
            RoomType::PrivateRoom => "Private room",
            RoomType::SharedRoom => "Shared room",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomType::ALL
            .into_iter()
            .find(|r| r.as_str() == s.trim())
            .ok_or_else(|| InputError::UnknownCategory {
                field: "room_type",
                value: s.to_string(),
            })
    }
}

/// NYC borough, as used by the listing dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeighbourhoodGroup {
    Manhattan,
    Brooklyn,
    Queens,
    Bronx,
    #[serde(rename = "Staten Island")]
    StatenIsland,
}

impl NeighbourhoodGroup {
    /// Form order, Manhattan first.
    pub const ALL: [NeighbourhoodGroup; 5] = [
        NeighbourhoodGroup::Manhattan,
        NeighbourhoodGroup::Brooklyn,
        NeighbourhoodGroup::Queens,
        NeighbourhoodGroup::Bronx,
        NeighbourhoodGroup::StatenIsland,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NeighbourhoodGroup::Manhattan => "Manhattan",
            NeighbourhoodGroup::Brooklyn => "Brooklyn",
            NeighbourhoodGroup::Queens => "Queens",
            NeighbourhoodGroup::Bronx => "Bronx",
            NeighbourhoodGroup::StatenIsland => "Staten Island",
        }
    }
}

impl fmt::Display for NeighbourhoodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NeighbourhoodGroup {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NeighbourhoodGroup::ALL
            .into_iter()
            .find(|g| g.as_str() == s.trim())
            .ok_or_else(|| InputError::UnknownCategory {
                field: "neighbourhood_group",
                value: s.to_string(),
            })
    }
}

/// Attributes of a hypothetical listing, as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawListingInput {
    pub latitude: f64,
    pub longitude: f64,
    pub room_type: RoomType,
    pub neighbourhood_group: NeighbourhoodGroup,
    pub minimum_nights: u32,
    pub number_of_reviews: u32,
    pub reviews_per_month: f64,
    pub calculated_host_listings_count: u32,
    pub availability_365: u32,
    pub days_since_last_review: u32,
}

impl Default for RawListingInput {
    fn default() -> Self {
        Self {
            latitude: 40.7,
            longitude: -74.0,
            room_type: RoomType::EntireHome,
            neighbourhood_group: NeighbourhoodGroup::Manhattan,
            minimum_nights: 2,
            number_of_reviews: 25,
            reviews_per_month: 0.8,
            calculated_host_listings_count: 3,
            availability_365: 180,
            days_since_last_review: 90,
        }
    }
}

impl RawListingInput {
    /// Build from decoded `application/x-www-form-urlencoded` pairs.
    /// The result is validated before it is returned.
    pub fn from_form(form: &HashMap<String, String>) -> Result<Self, InputError> {
        let input = Self {
            latitude: field(form, "latitude")?,
            longitude: field(form, "longitude")?,
            room_type: raw(form, "room_type")?.parse()?,
            neighbourhood_group: raw(form, "neighbourhood_group")?.parse()?,
            minimum_nights: field(form, "minimum_nights")?,
            number_of_reviews: field(form, "number_of_reviews")?,
            reviews_per_month: field(form, "reviews_per_month")?,
            calculated_host_listings_count: field(form, "calculated_host_listings_count")?,
            availability_365: field(form, "availability_365")?,
            days_since_last_review: field(form, "days_since_last_review")?,
        };

        input.validate()?;
        Ok(input)
    }

    /// Check every attribute against its domain.
    /// Categorical fields are already constrained by their types.
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(InputError::OutOfRange {
                field: "latitude",
                reason: "must be between -90 and 90",
            });
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(InputError::OutOfRange {
                field: "longitude",
                reason: "must be between -180 and 180",
            });
        }
        if self.minimum_nights < 1 {
            return Err(InputError::OutOfRange {
                field: "minimum_nights",
                reason: "must be at least 1",
            });
        }
        if !self.reviews_per_month.is_finite() || self.reviews_per_month < 0.0 {
            return Err(InputError::OutOfRange {
                field: "reviews_per_month",
                reason: "must be zero or more",
            });
        }
        if self.calculated_host_listings_count < 1 {
            return Err(InputError::OutOfRange {
                field: "calculated_host_listings_count",
                reason: "must be at least 1",
            });
        }
        if self.availability_365 > 365 {
            return Err(InputError::OutOfRange {
                field: "availability_365",
                reason: "must be between 0 and 365",
            });
        }
        Ok(())
    }
}

fn raw<'a>(form: &'a HashMap<String, String>, name: &'static str) -> Result<&'a str, InputError> {
    form.get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or(InputError::Missing(name))
}

fn field<T: FromStr>(form: &HashMap<String, String>, name: &'static str) -> Result<T, InputError> {
    let value = raw(form, name)?;
    value.parse().map_err(|_| InputError::Invalid {
        field: name,
        value: value.to_string(),
    })
}
