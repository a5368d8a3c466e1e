use crate::pricing::format_price;
use maud::{html, Markup};

/// Partial swapped into `#prediction-result`.
pub fn price_result(price: f64) -> Markup {
    html! {
        div class="alert success" role="status" {
            "The predicted price is: " strong { (format_price(price)) }
        }
    }
}

pub fn prediction_error(message: &str) -> Markup {
    html! {
        div class="alert error" role="alert" {
            (message)
        }
    }
}
