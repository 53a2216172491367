// client.rs
use crate::api::ApiError;
use crate::domain::{NewProperty, Property, RawProperty};
use reqwest::blocking::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// The two calls the listings page needs from the backend.
pub trait PropertyApi: Send + Sync {
    fn list_properties(&self) -> Result<Vec<Property>, ApiError>;
    fn create_property(&self, data: &NewProperty) -> Result<Property, ApiError>;
}

pub struct HttpPropertyApi {
    base_url: String,
    client: Client,
}

impl HttpPropertyApi {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn properties_url(&self) -> String {
        format!("{}/properties", self.base_url)
    }
}

impl PropertyApi for HttpPropertyApi {
    fn list_properties(&self) -> Result<Vec<Property>, ApiError> {
        let url = self.properties_url();
        debug!(%url, "listing properties");

        let resp = check_status(self.client.get(&url).send()?)?;
        // decoded record by record so one malformed entry cannot sink the list
        let records: Vec<Value> = resp.json()?;

        Ok(normalize_all(records))
    }

    fn create_property(&self, data: &NewProperty) -> Result<Property, ApiError> {
        let url = self.properties_url();
        debug!(%url, name = %data.name, "creating property");

        let resp = check_status(self.client.post(&url).json(data).send()?)?;
        let raw: RawProperty = resp.json()?;

        Property::from_raw(raw).map_err(|_| ApiError::MissingId)
    }
}

fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().unwrap_or_else(|_| "<unreadable body>".to_string());
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Records that cannot be decoded or normalized are skipped, not fatal for
/// the list.
pub fn normalize_all(records: Vec<Value>) -> Vec<Property> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let normalized = serde_json::from_value::<RawProperty>(record)
                .map_err(|e| e.to_string())
                .and_then(Property::from_raw);

            match normalized {
                Ok(p) => Some(p),
                Err(reason) => {
                    warn!(index, %reason, "skipping property from backend");
                    None
                }
            }
        })
        .collect()
}
