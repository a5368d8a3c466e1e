use crate::app::AppState;
use crate::errors::{ResultResp, ServerError};
use crate::pricing::testing::{linear_model_json, tree_model_json};
use crate::pricing::PriceModel;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

/// App backed by the linear fixture model.
pub fn linear_app() -> AppState {
    AppState::new(PriceModel::from_slice(linear_model_json().as_bytes()).unwrap())
}

/// App backed by the two-stump tree fixture model.
pub fn tree_app() -> AppState {
    AppState::new(PriceModel::from_slice(tree_model_json().as_bytes()).unwrap())
}

/// App whose model file does not exist.
pub fn missing_model_app() -> AppState {
    let path = std::env::temp_dir().join("listing_price_missing_model.json");
    let _ = std::fs::remove_file(&path);
    AppState::load(&path)
}

/// The Private room / Manhattan listing, urlencoded.
pub fn scenario_form() -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("latitude", "40.75")
        .append_pair("longitude", "-73.98")
        .append_pair("room_type", "Private room")
        .append_pair("neighbourhood_group", "Manhattan")
        .append_pair("minimum_nights", "2")
        .append_pair("number_of_reviews", "25")
        .append_pair("reviews_per_month", "0.8")
        .append_pair("calculated_host_listings_count", "3")
        .append_pair("availability_365", "180")
        .append_pair("days_since_last_review", "90")
        .finish()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str, partial: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if partial {
        builder = builder.header("HX-Request", "true");
    }
    builder.body(Body::from(form.as_bytes().to_vec())).unwrap()
}

pub fn post_json(uri: &str, json: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(json.as_bytes().to_vec()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// The error a handler returned; panics with the status if it succeeded.
pub fn expect_err(result: ResultResp) -> ServerError {
    match result {
        Ok(resp) => panic!("expected an error, got status {}", resp.status()),
        Err(err) => err,
    }
}
