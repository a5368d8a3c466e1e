use crate::errors::ServerError;
use crate::templates::desktop_layout;
use astra::{Body, Response, ResponseBuilder};
use maud::html;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();

    let message = match &err {
        ServerError::NotFound => "Not Found".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        ServerError::ModelUnavailable(msg) => {
            format!("{msg}. Please ensure the model file is in place and restart the app.")
        }
        ServerError::Prediction(e) => format!("Prediction failed: {e}"),
        ServerError::InternalError => "Internal Server Error".to_string(),
    };

    render_error(status, &message, !matches!(err, ServerError::ModelUnavailable(_)))
}

/// Build a basic HTML error page. The model-unavailable page has no way back:
/// nothing else on the site works without a model.
fn render_error(status: u16, message: &str, back_link: bool) -> Response {
    let page = desktop_layout(
        &format!("Error {status}"),
        html! {
            main class="container narrow" {
                h1 { "Error " (status) }
                p class="alert error" { (message) }
                @if back_link {
                    p { a href="/" { "← Back to the form" } }
                }
            }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
