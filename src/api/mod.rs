mod api_error;
mod client;

pub use api_error::ApiError;
pub use client::{HttpPropertyApi, PropertyApi};
