use maud::{html, Markup};

pub mod error;
pub mod listing_form;
pub mod result;

pub use error::html_error_response;
pub use listing_form::listing_form;
pub use result::{prediction_error, price_result};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
