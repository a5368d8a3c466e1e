use crate::router::handle;
use crate::tests::utils::{body_string, linear_app, missing_model_app, post_json};

const SCENARIO: &str = r#"{
    "latitude": 40.75,
    "longitude": -73.98,
    "room_type": "Private room",
    "neighbourhood_group": "Manhattan",
    "minimum_nights": 2,
    "number_of_reviews": 25,
    "reviews_per_month": 0.8,
    "calculated_host_listings_count": 3,
    "availability_365": 180,
    "days_since_last_review": 90
}"#;

#[test]
fn api_returns_price_json() {
    let app = linear_app();

    let resp = handle(post_json("/api/predict", SCENARIO), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert!((json["price"].as_f64().unwrap() - 102.2).abs() < 1e-9);
    assert_eq!(json["formatted"], "$102.20");
}

#[test]
fn api_rejects_unknown_room_type_as_json_error() {
    let app = linear_app();
    let body = SCENARIO.replace("Private room", "Hotel room");

    let resp = handle(post_json("/api/predict", &body), &app).unwrap();
    assert_eq!(resp.status(), 400);

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert!(json["error"].as_str().unwrap().contains("Hotel room"));
}

#[test]
fn api_validates_ranges() {
    let app = linear_app();
    let body = SCENARIO.replace(r#""minimum_nights": 2"#, r#""minimum_nights": 0"#);

    let resp = handle(post_json("/api/predict", &body), &app).unwrap();
    assert_eq!(resp.status(), 400);

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert!(json["error"].as_str().unwrap().contains("minimum_nights"));
}

#[test]
fn api_without_model_is_unavailable() {
    let app = missing_model_app();

    let resp = handle(post_json("/api/predict", SCENARIO), &app).unwrap();
    assert_eq!(resp.status(), 503);
}
