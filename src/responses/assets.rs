use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

pub fn css_response(stylesheet: &'static str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/css; charset=utf-8")
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(stylesheet))
        .map_err(|_| ServerError::InternalError)
}

pub fn js_response(script: &'static str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/javascript; charset=utf-8")
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(script))
        .map_err(|_| ServerError::InternalError)
}
