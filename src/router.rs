use crate::app::{AppState, ModelState};
use crate::domain::RawListingInput;
use crate::errors::{ResultResp, ServerError};
use crate::pricing::format_price;
use crate::responses::{
    css_response, html_response, js_response, json_error_response, json_response,
};
use crate::templates::{self, prediction_error, price_result};
use astra::{Request, Response};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;

/// Request bodies larger than this are rejected.
const MAX_BODY_BYTES: u64 = 16 * 1024;

const STYLESHEET: &str = include_str!("../static/main.css");
const FORM_SCRIPT: &str = include_str!("../static/predict.js");

/// Entry point for the server loop: route, render any error as a page,
/// and log the outcome.
pub fn respond(req: Request, app: &AppState) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let resp = match handle(req, app) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(%method, %path, error = %err, "request failed");
            templates::html_error_response(err)
        }
    };

    tracing::info!(%method, %path, status = resp.status().as_u16(), "handled request");
    resp
}

pub fn handle(req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            app.model()?;
            html_response(templates::pages::home_page(
                &RawListingInput::default(),
                None,
            ))
        }
        ("POST", "/predict") => predict_form(req, app),
        ("POST", "/api/predict") => predict_json(req, app).or_else(|e| json_error_response(&e)),
        ("GET", "/health") => health(app),
        ("GET", "/static/main.css") => css_response(STYLESHEET),
        ("GET", "/static/predict.js") => js_response(FORM_SCRIPT),
        _ => Err(ServerError::NotFound),
    }
}

/// Form submit. Script-driven requests (`HX-Request` header) get only the
/// result partial, errors included, so the page can swap it in place.
fn predict_form(req: Request, app: &AppState) -> ResultResp {
    let model = app.model()?;
    let wants_partial = req.headers().contains_key("HX-Request");

    let form = parse_form(&read_body(req)?);
    let input = RawListingInput::from_form(&form);

    if wants_partial {
        let partial = match input
            .map_err(ServerError::from)
            .and_then(|input| model.quote(&input).map_err(ServerError::from))
        {
            Ok(price) => price_result(price),
            Err(err) => {
                tracing::warn!(error = %err, "prediction rejected");
                prediction_error(&err.to_string())
            }
        };
        return html_response(partial);
    }

    let input = input?;
    let price = model.quote(&input)?;
    html_response(templates::pages::home_page(
        &input,
        Some(price_result(price)),
    ))
}

#[derive(Serialize)]
struct PriceBody {
    price: f64,
    formatted: String,
}

fn predict_json(req: Request, app: &AppState) -> ResultResp {
    let model = app.model()?;

    let body = read_body(req)?;
    let input: RawListingInput = serde_json::from_str(&body)
        .map_err(|e| ServerError::BadRequest(format!("invalid listing JSON: {e}")))?;
    input.validate()?;

    let price = model.quote(&input)?;
    json_response(
        200,
        &PriceBody {
            price,
            formatted: format_price(price),
        },
    )
}

#[derive(Serialize)]
struct HealthBody<'a> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    features: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fingerprint: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

fn health(app: &AppState) -> ResultResp {
    match &app.model {
        ModelState::Ready(model) => json_response(
            200,
            &HealthBody {
                status: "ok",
                kind: Some(model.kind()),
                features: Some(model.feature_order()),
                fingerprint: Some(model.fingerprint()),
                error: None,
            },
        ),
        ModelState::Unavailable(msg) => json_response(
            503,
            &HealthBody {
                status: "unavailable",
                kind: None,
                features: None,
                fingerprint: None,
                error: Some(msg.as_str()),
            },
        ),
    }
}

fn read_body(req: Request) -> Result<String, ServerError> {
    let mut body = req.into_body();
    let mut text = String::new();

    body.reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_string(&mut text)
        .map_err(|e| ServerError::BadRequest(format!("unreadable request body: {e}")))?;

    if text.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::BadRequest("request body too large".into()));
    }
    Ok(text)
}

fn parse_form(body: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect()
}
