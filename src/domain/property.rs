// src/domain/property.rs

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque identifier assigned by the backend.
/// Numbers and strings are both accepted and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyId(String);

impl PropertyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(Self(s.clone())),
            Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A property exactly as the backend sends it. Every field is optional here;
/// `Property::from_raw` decides what the rest of the app can rely on.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProperty {
    pub id: Option<Value>,
    // Mongo-style backends send `_id`, sometimes next to a virtual `id`
    #[serde(rename = "_id")]
    pub mongo_id: Option<Value>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price_per_sqft: Option<f64>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub bedrooms: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub bathrooms: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub area: Option<f64>,
    pub coordinates: Option<RawCoordinates>,
    pub amenities: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCoordinates {
    #[serde(default, deserialize_with = "lenient_number")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub lng: Option<f64>,
}

/// Accepts `450000` and `"450000"` alike. Anything else reads as absent.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    })
}

/// A listing the rest of the app can render and filter without
/// second-guessing the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    pub property_type: String,
    pub price: f64,
    pub price_per_sqft: Option<f64>,
    pub location: String,
    pub description: String,
    pub image: Option<String>,
    pub bedrooms: Option<f64>,
    pub bathrooms: Option<f64>,
    pub area: Option<f64>,
    pub coordinates: Option<Coordinates>,
    pub amenities: Vec<String>,
}

impl Property {
    /// Normalizes a backend record. Text fields the filter and templates read
    /// default to "" and a missing price to 0. A record without an id is
    /// rejected since nothing could select or key it.
    pub fn from_raw(raw: RawProperty) -> Result<Self, String> {
        let id = raw
            .id
            .as_ref()
            .and_then(PropertyId::from_value)
            .or_else(|| raw.mongo_id.as_ref().and_then(PropertyId::from_value))
            .ok_or("Missing or empty property id")?;

        let coordinates = raw.coordinates.and_then(|c| match (c.lat, c.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        });

        Ok(Property {
            id,
            name: raw.name.unwrap_or_default(),
            property_type: raw.property_type.unwrap_or_default(),
            price: raw.price.unwrap_or(0.0),
            price_per_sqft: raw.price_per_sqft,
            location: raw.location.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            image: raw.image.filter(|s| !s.trim().is_empty()),
            bedrooms: raw.bedrooms,
            bathrooms: raw.bathrooms,
            area: raw.area,
            coordinates,
            amenities: raw.amenities.unwrap_or_default(),
        })
    }
}

/// Body of `POST /properties`. No id: the backend assigns one.
///
/// Non-finite numbers (a price that failed to parse) go out as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub price: f64,
    pub location: String,
    pub description: String,
    pub image: String,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub area: i64,
    pub coordinates: Coordinates,
}
