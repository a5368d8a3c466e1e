//! Model fixtures shared by unit and router tests.

use std::fs;
use std::path::PathBuf;

/// Column order of the exported NYC model: numeric fields, the popular-host
/// flag, then drop-first dummies for neighbourhood group and room type.
pub fn feature_order() -> Vec<String> {
    [
        "latitude",
        "longitude",
        "minimum_nights",
        "number_of_reviews",
        "reviews_per_month",
        "calculated_host_listings_count",
        "availability_365",
        "days_since_last_review",
        "is_popular_host",
        "neighbourhood_group_Brooklyn",
        "neighbourhood_group_Manhattan",
        "neighbourhood_group_Queens",
        "neighbourhood_group_Staten Island",
        "room_type_Private room",
        "room_type_Shared room",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Linear model; the Private room / Manhattan scenario scores 102.2.
pub fn linear_model_json() -> String {
    serde_json::json!({
        "feature_names_in": feature_order(),
        "output_transform": "identity",
        "regressor": {
            "kind": "linear",
            "intercept": 100.0,
            "coefficients": [
                0.0, 0.0, -0.5, -0.1, 2.0, 0.2, 0.1, -0.05, 5.0,
                20.0, 60.0, 5.0, -10.0, -70.0, -90.0
            ]
        }
    })
    .to_string()
}

/// Two stumps over base 100: Manhattan +50 (else -20), then
/// Private room -35, Shared room -40, Entire home +30.
pub fn tree_model_json() -> String {
    serde_json::json!({
        "feature_names_in": feature_order(),
        "regressor": {
            "kind": "tree_ensemble",
            "base_score": 100.0,
            "trees": [
                {
                    "children_left":  [1, -1, -1],
                    "children_right": [2, -1, -1],
                    "feature":        [10, -2, -2],
                    "threshold":      [0.5, -2.0, -2.0],
                    "value":          [0.0, -20.0, 50.0]
                },
                {
                    "children_left":  [1, 3, -1, -1, -1],
                    "children_right": [2, 4, -1, -1, -1],
                    "feature":        [13, 14, -2, -2, -2],
                    "threshold":      [0.5, 0.5, -2.0, -2.0, -2.0],
                    "value":          [0.0, 0.0, -35.0, 30.0, -40.0]
                }
            ]
        }
    })
    .to_string()
}

/// Write `contents` to a per-process file under the temp dir.
pub fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("listing_price_{}_{name}", std::process::id()));
    fs::write(&path, contents).unwrap_or_else(|e| panic!("write {}: {e}", path.display()));
    path
}
