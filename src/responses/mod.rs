pub mod assets;
pub mod html;
pub mod json;

pub use crate::errors::ResultResp;

// Normal HTML response
pub use html::html_response;
pub use assets::{css_response, js_response};
pub use json::{json_error_response, json_response};
