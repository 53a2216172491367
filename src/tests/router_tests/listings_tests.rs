use crate::router::handle;
use crate::tests::utils::{sample_property, test_app, FakeApi};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::sync::Arc;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

fn three_listings() -> Arc<FakeApi> {
    Arc::new(FakeApi::with(vec![
        sample_property("1", "House", "Maple Cottage", "Portland", "Quiet street"),
        sample_property("2", "Condo", "Harbor View", "Seattle", "Waterfront"),
        sample_property("3", "House", "Pine Lodge", "Bend", "Mountain cabin"),
    ]))
}

#[test]
fn home_lists_every_property() {
    let api = three_listings();
    let app = test_app(&api);

    let resp = handle(get("/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Property Listings"));
    assert!(body.contains("3 properties found"));
    assert!(body.contains("Maple Cottage"));
    assert!(body.contains("Harbor View"));
    assert!(body.contains("Pine Lodge"));
    assert_eq!(api.list_calls(), 1);
}

#[test]
fn type_options_come_from_loaded_list() {
    let api = three_listings();
    let app = test_app(&api);

    let body = body_string(handle(get("/"), &app).unwrap());

    assert!(body.contains(r#"<option value="" selected>All Property Types</option>"#));
    assert_eq!(body.matches(r#"<option value="House""#).count(), 1);
    assert_eq!(body.matches(r#"<option value="Condo""#).count(), 1);
}

#[test]
fn type_filter_narrows_results() {
    let api = three_listings();
    let app = test_app(&api);

    let body = body_string(handle(get("/?type=house"), &app).unwrap());

    assert!(body.contains("2 properties found"));
    assert!(body.contains("Maple Cottage"));
    assert!(!body.contains("Harbor View"));
}

#[test]
fn type_dropdown_follows_case_insensitive_filter() {
    let api = three_listings();
    let app = test_app(&api);

    let body = body_string(handle(get("/?type=house"), &app).unwrap());

    assert!(body.contains(r#"<option value="House" selected>"#));
    assert!(body.contains(r#"<option value="">All Property Types</option>"#));
}

#[test]
fn untyped_listing_adds_no_blank_option() {
    let api = Arc::new(FakeApi::with(vec![
        sample_property("1", "", "Mystery Plot", "Nowhere", "No type given"),
        sample_property("2", "Condo", "Harbor View", "Seattle", "Waterfront"),
    ]));
    let app = test_app(&api);

    let body = body_string(handle(get("/"), &app).unwrap());

    assert!(body.contains("Mystery Plot"));
    assert_eq!(body.matches(r#"<option value="""#).count(), 1);
    assert_eq!(body.matches(" selected>").count(), 1);
}

#[test]
fn search_matches_location() {
    let api = three_listings();
    let app = test_app(&api);

    let body = body_string(handle(get("/?search=SEATTLE"), &app).unwrap());

    assert!(body.contains("1 property found"));
    assert!(body.contains("Harbor View"));
    assert!(body.contains(r#"value="SEATTLE""#));
}

#[test]
fn no_match_offers_to_clear_filters() {
    let api = three_listings();
    let app = test_app(&api);

    let body = body_string(handle(get("/?type=Villa"), &app).unwrap());

    assert!(body.contains("No properties found"));
    assert!(body.contains("Try adjusting your search or filter"));
    assert!(body.contains("Clear filters"));
}

#[test]
fn empty_backend_says_nothing_listed() {
    let api = Arc::new(FakeApi::with(Vec::new()));
    let app = test_app(&api);

    let body = body_string(handle(get("/"), &app).unwrap());

    assert!(body.contains("There are currently no properties listed"));
    assert!(!body.contains("Clear filters<"));
}

#[test]
fn view_param_opens_modal() {
    let api = three_listings();
    let app = test_app(&api);

    let body = body_string(handle(get("/?search=lodge&view=3"), &app).unwrap());

    assert!(body.contains(r#"id="property-modal""#));
    assert!(body.contains("Contact Agent"));
    // closing keeps the search
    assert!(body.contains(r#"href="/?search=lodge""#));
}

#[test]
fn without_view_modal_is_closed() {
    let api = three_listings();
    let app = test_app(&api);

    let body = body_string(handle(get("/"), &app).unwrap());

    assert!(!body.contains(r#"id="property-modal""#));
    assert!(body.contains(r#"href="/?view=2""#));
}

#[test]
fn backend_failure_shows_banner() {
    let api = three_listings();
    api.fail_list(true);
    let app = test_app(&api);

    let resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Failed to load properties. Please try again later."));
    assert!(!body.contains("animate-spin"));
}

#[test]
fn failed_refresh_keeps_last_good_list() {
    let api = three_listings();
    let app = test_app(&api);
    handle(get("/"), &app).unwrap();

    api.fail_list(true);
    let body = body_string(handle(get("/"), &app).unwrap());

    assert!(body.contains("Failed to load properties"));
    assert!(body.contains("Maple Cottage"));
}

#[test]
fn form_param_shows_add_form() {
    let api = three_listings();
    let app = test_app(&api);

    let closed = body_string(handle(get("/"), &app).unwrap());
    assert!(!closed.contains("Add New Property"));
    assert!(closed.contains(r#"href="/?form=1""#));

    let open = body_string(handle(get("/?form=1"), &app).unwrap());
    assert!(open.contains("Add New Property"));
    assert!(open.contains("Cancel"));
    assert!(open.contains(r#"action="/properties""#));
}

#[test]
fn health_check() {
    let api = three_listings();
    let app = test_app(&api);

    let resp = handle(get("/health"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "ok");
    assert_eq!(api.list_calls(), 0);
}

#[test]
fn unknown_route_is_not_found() {
    let api = three_listings();
    let app = test_app(&api);

    let err = match handle(get("/nope"), &app) {
        Ok(_) => panic!("expected an error for an unknown route"),
        Err(err) => err,
    };
    assert!(matches!(err, crate::errors::ServerError::NotFound));

    let resp = crate::responses::error_to_response(err);
    assert_eq!(resp.status(), 404);
}
