// src/domain/filter.rs

use crate::domain::Property;

/// Search text and type constraint applied to the loaded listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub search: String,
    /// Empty means "All Property Types".
    pub property_type: String,
}

impl ListingFilter {
    pub fn new(search: impl Into<String>, property_type: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            property_type: property_type.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.property_type.is_empty()
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.property_type.clear();
    }

    /// Whether `property_type` is the type this filter selects. Case is ignored.
    pub fn selects_type(&self, property_type: &str) -> bool {
        property_type.to_lowercase() == self.property_type.to_lowercase()
    }

    /// Type must match case-insensitively (when set) AND the search text must
    /// appear in the name, location or description (when set).
    pub fn matches(&self, property: &Property) -> bool {
        let type_ok = self.property_type.is_empty() || self.selects_type(&property.property_type);

        if !type_ok {
            return false;
        }

        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        [&property.name, &property.location, &property.description]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn apply<'a>(&self, properties: &'a [Property]) -> Vec<&'a Property> {
        properties.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Distinct, non-empty property types in first-seen order.
pub fn property_types(properties: &[Property]) -> Vec<&str> {
    let mut types: Vec<&str> = Vec::new();
    for p in properties {
        if p.property_type.is_empty() {
            continue;
        }
        if !types.contains(&p.property_type.as_str()) {
            types.push(&p.property_type);
        }
    }
    types
}
