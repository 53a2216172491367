use crate::router::handle;
use crate::tests::utils::{sample_property, test_app, FakeApi};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::sync::Arc;

const FILLED_FORM: &str = "name=Garden+Flat&type=Condo&price=500000&location=Leeds\
&description=Ground+floor&image=https%3A%2F%2Fexample.com%2Fflat.jpg\
&bedrooms=3&bathrooms=&area=1500&lat=53.8&lng=-1.55";

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.as_bytes().to_vec()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn location(resp: &Response) -> String {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

fn one_listing() -> Arc<FakeApi> {
    Arc::new(FakeApi::with(vec![sample_property(
        "1",
        "House",
        "Maple Cottage",
        "Portland",
        "Quiet street",
    )]))
}

#[test]
fn create_sends_coerced_payload() {
    let api = one_listing();
    let app = test_app(&api);

    let resp = handle(post_form("/properties", FILLED_FORM), &app).expect("Handler failed");
    assert_eq!(resp.status(), 303);

    let sent = api.last_created().expect("nothing was created");
    assert_eq!(sent.name, "Garden Flat");
    assert_eq!(sent.property_type, "Condo");
    assert_eq!(sent.price, 500000.0);
    assert_eq!(sent.bedrooms, 3);
    assert_eq!(sent.bathrooms, 0);
    assert_eq!(sent.area, 1500);
    assert_eq!(sent.image, "https://example.com/flat.jpg");
    assert_eq!(sent.coordinates.lat, 53.8);
}

#[test]
fn successful_create_redirects_and_refetches_once() {
    let api = one_listing();
    let app = test_app(&api);

    let resp = handle(post_form("/properties", FILLED_FORM), &app).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/");
    assert_eq!(api.list_calls(), 0, "the post itself does not fetch");

    let body = body_string(handle(get(&location(&resp)), &app).unwrap());

    assert_eq!(api.list_calls(), 1, "exactly one refetch after creating");
    assert!(body.contains("2 properties found"));
    assert!(body.contains("Garden Flat"));
    assert!(!body.contains("Add New Property"));
    assert!(!body.contains("Failed to add property"));
}

#[test]
fn create_keeps_search_and_type_from_action() {
    let api = one_listing();
    let app = test_app(&api);

    let resp = handle(
        post_form("/properties?type=Condo&view=1&form=1", FILLED_FORM),
        &app,
    )
    .unwrap();
    assert_eq!(location(&resp), "/?type=Condo");

    let body = body_string(handle(get(&location(&resp)), &app).unwrap());
    assert!(body.contains("1 property found"));
    assert!(body.contains("Garden Flat"));
    assert!(!body.contains("Maple Cottage"));
}

#[test]
fn failed_create_keeps_form_open_with_input() {
    let api = one_listing();
    api.fail_create(true);
    let app = test_app(&api);
    // mount fetch so the cache has something to show
    handle(get("/"), &app).unwrap();

    let body = body_string(handle(post_form("/properties", FILLED_FORM), &app).unwrap());

    assert!(body.contains("Failed to add property. Please try again."));
    assert!(body.contains("Add New Property"));
    assert!(body.contains(r#"value="Garden Flat""#));
    assert!(body.contains(r#"<option value="Condo" selected>"#));
    assert!(body.contains("Maple Cottage"), "previous list still shown");
    assert_eq!(api.list_calls(), 1, "no refetch after a failed create");
}

#[test]
fn unparseable_price_is_sent_as_nan() {
    let api = one_listing();
    let app = test_app(&api);

    handle(
        post_form("/properties", "name=Plot&type=Land&price=&location=Nowhere"),
        &app,
    )
    .unwrap();

    let sent = api.last_created().unwrap();
    assert!(sent.price.is_nan());
    assert!(sent.coordinates.lat.is_nan());
    assert_eq!(sent.bedrooms, 0);
}

#[test]
fn get_on_properties_is_not_found() {
    let api = one_listing();
    let app = test_app(&api);

    assert!(matches!(
        handle(get("/properties"), &app),
        Err(crate::errors::ServerError::NotFound)
    ));
}
