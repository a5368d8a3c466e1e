use crate::domain::{NeighbourhoodGroup, RawListingInput, RoomType};
use crate::templates::card;
use maud::{html, Markup};

/// The prediction form, pre-filled from `input`.
///
/// Posts normally to `/predict`; with `predict.js` loaded it swaps only
/// the result into `#prediction-result`.
pub fn listing_form(input: &RawListingInput) -> Markup {
    html! {
        form
            method="post"
            action="/predict"
            data-swap-target="#prediction-result"
            class="listing-form"
        {
            div class="columns" {
                (card("Listing Details", html! {
                    label for="room_type" { "Room Type" }
                    select id="room_type" name="room_type" {
                        @for room in RoomType::ALL {
                            option value=(room.as_str()) selected[input.room_type == room] { (room.as_str()) }
                        }
                    }

                    label for="neighbourhood_group" { "Neighbourhood Group" }
                    select id="neighbourhood_group" name="neighbourhood_group" {
                        @for group in NeighbourhoodGroup::ALL {
                            option value=(group.as_str()) selected[input.neighbourhood_group == group] { (group.as_str()) }
                        }
                    }

                    label for="latitude" { "Latitude" }
                    input type="number" id="latitude" name="latitude" step="0.00001"
                        min="-90" max="90" value=(format!("{:.5}", input.latitude)) required;

                    label for="longitude" { "Longitude" }
                    input type="number" id="longitude" name="longitude" step="0.00001"
                        min="-180" max="180" value=(format!("{:.5}", input.longitude)) required;

                    label for="minimum_nights" { "Minimum Nights" }
                    input type="number" id="minimum_nights" name="minimum_nights"
                        min="1" step="1" value=(input.minimum_nights) required;

                    label for="availability_365" { "Availability (out of 365 days)" }
                    input type="range" id="availability_365" name="availability_365"
                        min="0" max="365" step="1" value=(input.availability_365);
                }))

                (card("Host & Review Details", html! {
                    label for="number_of_reviews" { "Number of Reviews" }
                    input type="number" id="number_of_reviews" name="number_of_reviews"
                        min="0" step="1" value=(input.number_of_reviews) required;

                    label for="reviews_per_month" { "Reviews Per Month" }
                    input type="number" id="reviews_per_month" name="reviews_per_month"
                        min="0" step="0.01" value=(format!("{:.2}", input.reviews_per_month)) required;

                    label for="calculated_host_listings_count" { "Host Listings Count" }
                    input type="number" id="calculated_host_listings_count" name="calculated_host_listings_count"
                        min="1" step="1" value=(input.calculated_host_listings_count) required;

                    label for="days_since_last_review" { "Days Since Last Review" }
                    input type="number" id="days_since_last_review" name="days_since_last_review"
                        min="0" step="1" value=(input.days_since_last_review) required;
                }))
            }

            button type="submit" class="primary" {
                span class="btn-text" { "Predict Price" }
                span class="spinner" aria-hidden="true" {}
            }
        }
    }
}
