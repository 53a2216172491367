// src/domain/form.rs

use crate::domain::{Coordinates, NewProperty};

pub const DEFAULT_PROPERTY_TYPE: &str = "Apartment";

/// Choices offered by the add-property form.
pub const PROPERTY_TYPES: &[&str] = &[
    "Apartment",
    "House",
    "Villa",
    "Condo",
    "Townhouse",
    "Land",
    "Commercial",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinateInput {
    pub lat: String,
    pub lng: String,
}

/// Raw text of every input, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyFormData {
    pub name: String,
    pub property_type: String,
    pub price: String,
    pub location: String,
    pub description: String,
    pub image: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub area: String,
    pub coordinates: CoordinateInput,
}

impl Default for PropertyFormData {
    fn default() -> Self {
        Self {
            name: String::new(),
            property_type: DEFAULT_PROPERTY_TYPE.to_string(),
            price: String::new(),
            location: String::new(),
            description: String::new(),
            image: String::new(),
            bedrooms: String::new(),
            bathrooms: String::new(),
            area: String::new(),
            coordinates: CoordinateInput::default(),
        }
    }
}

impl PropertyFormData {
    /// Returns a copy with one field replaced. `lat` and `lng` land in the
    /// nested coordinates; unknown names leave the data unchanged.
    pub fn with_field(&self, name: &str, value: &str) -> Self {
        let mut next = self.clone();
        let value = value.to_string();

        match name {
            "name" => next.name = value,
            "type" => next.property_type = value,
            "price" => next.price = value,
            "location" => next.location = value,
            "description" => next.description = value,
            "image" => next.image = value,
            "bedrooms" => next.bedrooms = value,
            "bathrooms" => next.bathrooms = value,
            "area" => next.area = value,
            "lat" => next.coordinates.lat = value,
            "lng" => next.coordinates.lng = value,
            _ => {}
        }

        next
    }

    /// Price and coordinates are never defaulted: unparseable input becomes
    /// NaN. Counts fall back to 0.
    pub fn to_new_property(&self) -> NewProperty {
        NewProperty {
            name: self.name.clone(),
            property_type: self.property_type.clone(),
            price: parse_float(&self.price),
            location: self.location.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            bedrooms: parse_int(&self.bedrooms).unwrap_or(0),
            bathrooms: parse_int(&self.bathrooms).unwrap_or(0),
            area: parse_int(&self.area).unwrap_or(0),
            coordinates: Coordinates {
                lat: parse_float(&self.coordinates.lat),
                lng: parse_float(&self.coordinates.lng),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitting,
}

#[derive(Debug, Clone)]
pub struct PropertyForm {
    data: PropertyFormData,
    state: FormState,
}

impl Default for PropertyForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyForm {
    pub fn new() -> Self {
        Self {
            data: PropertyFormData::default(),
            state: FormState::Editing,
        }
    }

    /// Rebuilds a form from submitted name/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut form = Self::new();
        for (name, value) in pairs {
            form.set_field(name.as_ref(), value.as_ref());
        }
        form
    }

    pub fn data(&self) -> &PropertyFormData {
        &self.data
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    pub fn set_field(&mut self, name: &str, value: &str) {
        self.data = self.data.with_field(name, value);
    }

    /// Coerces the input, hands it to `on_add` and returns to editing.
    /// The input is cleared only when `on_add` succeeds.
    pub fn submit<T, E, F>(&mut self, on_add: F) -> Result<T, E>
    where
        F: FnOnce(NewProperty) -> Result<T, E>,
    {
        self.state = FormState::Submitting;
        let payload = self.data.to_new_property();

        let result = on_add(payload);
        if result.is_ok() {
            self.data = PropertyFormData::default();
        }

        self.state = FormState::Editing;
        result
    }
}

/// Leading-prefix float parse: "12.5abc" is 12.5, "abc" is NaN.
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    // optional exponent, only taken when it has digits
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Leading-digits integer parse: "2.5" is 2, "" and "abc" are None.
/// Values beyond the i64 range saturate.
pub fn parse_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    if end == digits_start {
        return None;
    }

    match s[..end].parse() {
        Ok(n) => Some(n),
        // only digits reach here, so the sole failure is overflow
        Err(_) if bytes[0] == b'-' => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}
