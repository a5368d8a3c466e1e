// templates/pages/home.rs

use crate::domain::RawListingInput;
use crate::templates::{desktop_layout, listing_form};
use maud::{html, Markup};

/// Full page: form plus an optional result from a plain form post.
pub fn home_page(input: &RawListingInput, outcome: Option<Markup>) -> Markup {
    desktop_layout(
        "NYC Airbnb Price Predictor",
        html! {
            main class="container" {
                h1 { "🏡 NYC Airbnb Price Predictor" }
                p class="lead" {
                    "Enter the details of a hypothetical listing to get a price prediction."
                }
                hr;

                (listing_form(input))

                div id="prediction-result" {
                    @if let Some(outcome) = outcome {
                        (outcome)
                    }
                }
            }
        },
    )
}
