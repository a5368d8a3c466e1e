use crate::router::handle;
use crate::tests::utils::{
    body_string, expect_err, linear_app, missing_model_app, post_form, scenario_form, tree_app,
};

#[test]
fn background_submit_returns_price_partial() {
    let app = linear_app();

    let resp = handle(post_form("/predict", &scenario_form(), true), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("The predicted price is:"));
    assert!(body.contains("$102.20"));

    // Partial only, so the form script can swap it into #prediction-result
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<form"));
}

#[test]
fn plain_submit_returns_full_page_with_price() {
    let app = tree_app();

    let resp = handle(post_form("/predict", &scenario_form(), false), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("$115.00"));
    // Form keeps what the user entered
    assert!(body.contains(r#"<option value="Private room" selected>"#));
    assert!(body.contains(r#"value="40.75000""#));
}

#[test]
fn plain_submit_with_unknown_category_is_bad_request() {
    let app = linear_app();
    let form = scenario_form().replace("Manhattan", "Hoboken");

    let err = expect_err(handle(post_form("/predict", &form, false), &app));
    assert_eq!(err.status(), 400);
    assert!(err.to_string().contains("Hoboken"));
}

#[test]
fn background_submit_with_bad_input_renders_inline_error() {
    let app = linear_app();
    let form = scenario_form().replace("availability_365=180", "availability_365=400");

    let resp = handle(post_form("/predict", &form, true), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("availability_365"));
    assert!(body.contains(r#"role="alert""#));
    assert!(!body.contains("The predicted price is:"));
}

#[test]
fn submit_without_model_is_refused() {
    let app = missing_model_app();

    let err = expect_err(handle(post_form("/predict", &scenario_form(), true), &app));
    assert_eq!(err.status(), 503);
}

#[test]
fn popular_host_raises_linear_price() {
    let app = linear_app();
    let form = scenario_form().replace(
        "calculated_host_listings_count=3",
        "calculated_host_listings_count=15",
    );

    // 102.2 + 12 * 0.2 for the count + 5.0 for the popular flag
    let body = body_string(handle(post_form("/predict", &form, true), &app).unwrap());
    assert!(body.contains("$109.60"), "{body}");
}
