use crate::domain::PropertyId;
use url::form_urlencoded;

/// View state carried in the page URL:
/// `?search=..&type=..&view=<id>&form=1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub search: String,
    pub property_type: String,
    pub view: Option<PropertyId>,
    pub show_form: bool,
}

impl ListingQuery {
    pub fn parse(query: Option<&str>) -> Self {
        let mut q = Self::default();

        let Some(query) = query else {
            return q;
        };

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "search" => q.search = value.into_owned(),
                "type" => q.property_type = value.into_owned(),
                "view" if !value.is_empty() => q.view = Some(PropertyId::new(value)),
                "form" => q.show_form = value == "1",
                _ => {}
            }
        }

        q
    }

    pub fn href(&self) -> String {
        self.href_for("/")
    }

    /// `path` plus whatever part of the view state is set.
    pub fn href_for(&self, path: &str) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        if !self.search.is_empty() {
            ser.append_pair("search", &self.search);
        }
        if !self.property_type.is_empty() {
            ser.append_pair("type", &self.property_type);
        }
        if let Some(id) = &self.view {
            ser.append_pair("view", id.as_str());
        }
        if self.show_form {
            ser.append_pair("form", "1");
        }

        let qs = ser.finish();
        if qs.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{qs}")
        }
    }
}
