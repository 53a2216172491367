pub mod filter;
pub mod form;
pub mod property;

pub use filter::{property_types, ListingFilter};
pub use form::{PropertyForm, PROPERTY_TYPES};
pub use property::{Coordinates, NewProperty, Property, PropertyId, RawProperty};
