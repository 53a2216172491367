use crate::api::PropertyApi;
use crate::errors::ServerError;
use crate::listings::{ListingCache, ListingQuery, ListingsPage};
use crate::responses::{html_response, redirect_response, text_response, ResultResp};
use crate::domain::PropertyForm;
use crate::templates;
use astra::Request;
use std::io::Read;
use std::sync::Arc;
use tracing::debug;
use url::form_urlencoded;

/// Shared by every worker thread.
pub struct App {
    api: Arc<dyn PropertyApi>,
    cache: ListingCache,
}

impl App {
    pub fn new(api: Arc<dyn PropertyApi>, cache: ListingCache) -> Self {
        Self { api, cache }
    }
}

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = ListingQuery::parse(req.uri().query());

    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let mut page = ListingsPage::from_query(&query);
            page.load(app.api.as_ref(), &app.cache);
            html_response(templates::pages::listings_page(&page))
        }

        ("POST", "/properties") => {
            let body = read_body(&mut req)?;

            let mut page = ListingsPage::from_query(&query);
            page.form = PropertyForm::from_pairs(form_urlencoded::parse(body.as_bytes()));
            page.close_modal();

            match page.add_property(app.api.as_ref()) {
                // the redirected GET does the one refetch
                Ok(_) => redirect_response(&page.query().href()),
                // failures are already on the page as a banner
                Err(_) => {
                    page.load_cached(&app.cache);
                    html_response(templates::pages::listings_page(&page))
                }
            }
        }

        ("GET", "/health") => text_response("ok"),

        _ => Err(ServerError::NotFound),
    }
}

fn read_body(req: &mut Request) -> Result<String, ServerError> {
    let mut body = String::new();
    req.body_mut()
        .reader()
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable form body: {e}")))?;
    Ok(body)
}
