pub mod error;
pub mod format;
pub mod icons;
pub mod property_card;
pub mod property_form;
pub mod property_modal;

pub use error::{error_banner, error_page};
pub use property_card::property_card;
pub use property_form::property_form;
pub use property_modal::property_modal;
