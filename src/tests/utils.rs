use crate::api::{ApiError, PropertyApi};
use crate::domain::{NewProperty, Property, PropertyId};
use crate::listings::ListingCache;
use crate::router::App;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn sample_property(
    id: &str,
    property_type: &str,
    name: &str,
    location: &str,
    description: &str,
) -> Property {
    Property {
        id: PropertyId::new(id),
        name: name.to_string(),
        property_type: property_type.to_string(),
        price: 350_000.0,
        price_per_sqft: None,
        location: location.to_string(),
        description: description.to_string(),
        image: None,
        bedrooms: Some(3.0),
        bathrooms: Some(2.0),
        area: Some(1200.0),
        coordinates: None,
        amenities: Vec::new(),
    }
}

/// In-memory stand-in for the listings backend.
pub struct FakeApi {
    properties: Mutex<Vec<Property>>,
    created: Mutex<Vec<NewProperty>>,
    list_calls: AtomicUsize,
    fail_list: AtomicBool,
    fail_create: AtomicBool,
}

impl FakeApi {
    pub fn with(properties: Vec<Property>) -> Self {
        Self {
            properties: Mutex::new(properties),
            created: Mutex::new(Vec::new()),
            list_calls: AtomicUsize::new(0),
            fail_list: AtomicBool::new(false),
            fail_create: AtomicBool::new(false),
        }
    }

    pub fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn last_created(&self) -> Option<NewProperty> {
        self.created.lock().unwrap().last().cloned()
    }
}

impl PropertyApi for FakeApi {
    fn list_properties(&self) -> Result<Vec<Property>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(ApiError::Network("connection refused".into()));
        }
        Ok(self.properties.lock().unwrap().clone())
    }

    fn create_property(&self, data: &NewProperty) -> Result<Property, ApiError> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: 500,
                body: "boom".into(),
            });
        }

        self.created.lock().unwrap().push(data.clone());

        let mut properties = self.properties.lock().unwrap();
        let property = Property {
            id: PropertyId::new(format!("new-{}", properties.len() + 1)),
            name: data.name.clone(),
            property_type: data.property_type.clone(),
            price: data.price,
            price_per_sqft: None,
            location: data.location.clone(),
            description: data.description.clone(),
            image: Some(data.image.clone()),
            bedrooms: Some(data.bedrooms as f64),
            bathrooms: Some(data.bathrooms as f64),
            area: Some(data.area as f64),
            coordinates: Some(data.coordinates),
            amenities: Vec::new(),
        };
        properties.push(property.clone());

        Ok(property)
    }
}

pub fn test_app(api: &Arc<FakeApi>) -> App {
    App::new(api.clone(), ListingCache::new())
}
