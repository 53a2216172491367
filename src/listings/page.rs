use crate::api::{ApiError, PropertyApi};
use crate::domain::{property_types, ListingFilter, Property, PropertyForm, PropertyId};
use crate::listings::{ListingCache, ListingQuery};
use tracing::{error, info};

pub const FETCH_ERROR: &str = "Failed to load properties. Please try again later.";
pub const CREATE_ERROR: &str = "Failed to add property. Please try again.";

/// Everything the listings page shows: the loaded list, fetch status,
/// view state, and the add-property form.
#[derive(Debug)]
pub struct ListingsPage {
    properties: Vec<Property>,
    loading: bool,
    error: Option<String>,
    pub filter: ListingFilter,
    selected: Option<PropertyId>,
    show_form: bool,
    pub form: PropertyForm,
}

impl Default for ListingsPage {
    fn default() -> Self {
        Self {
            properties: Vec::new(),
            // a freshly mounted page has not loaded yet
            loading: true,
            error: None,
            filter: ListingFilter::default(),
            selected: None,
            show_form: false,
            form: PropertyForm::new(),
        }
    }
}

impl ListingsPage {
    /// Page state as described by the URL. Still needs `load`.
    pub fn from_query(query: &ListingQuery) -> Self {
        let mut page = Self {
            filter: ListingFilter::new(query.search.clone(), query.property_type.clone()),
            show_form: query.show_form,
            ..Self::default()
        };
        if let Some(id) = &query.view {
            page.select(id.clone());
        }
        page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn show_form(&self) -> bool {
        self.show_form
    }

    /// Fetches the list. On failure the previously cached list stays and a
    /// generic message is shown; `loading` is cleared either way.
    pub fn load(&mut self, api: &dyn PropertyApi, cache: &ListingCache) {
        self.loading = true;
        self.error = None;

        let ticket = cache.begin_fetch();
        match api.list_properties() {
            Ok(list) => {
                cache.complete(ticket, list);
            }
            Err(e) => {
                error!(error = %e, generation = ticket.generation(), "Error fetching properties");
                self.error = Some(FETCH_ERROR.to_string());
            }
        }

        self.properties = cache.snapshot();
        self.loading = false;
    }

    /// Shows whatever the cache holds without asking the backend.
    pub fn load_cached(&mut self, cache: &ListingCache) {
        self.properties = cache.snapshot();
        self.loading = false;
    }

    /// Submits the form. Success closes the panel and leaves the refetch to
    /// the page the caller shows next; failure keeps the panel open with the
    /// input intact.
    pub fn add_property(&mut self, api: &dyn PropertyApi) -> Result<Property, ApiError> {
        match self.form.submit(|data| api.create_property(&data)) {
            Ok(created) => {
                info!(id = %created.id, name = %created.name, "property added");
                self.show_form = false;
                Ok(created)
            }
            Err(e) => {
                error!(error = %e, "Error adding property");
                self.error = Some(CREATE_ERROR.to_string());
                self.show_form = true;
                Err(e)
            }
        }
    }

    /// Recomputed on every call from the list and the current filter.
    pub fn filtered(&self) -> Vec<&Property> {
        self.filter.apply(&self.properties)
    }

    pub fn property_types(&self) -> Vec<&str> {
        property_types(&self.properties)
    }

    pub fn select(&mut self, id: PropertyId) {
        self.selected = Some(id);
    }

    pub fn close_modal(&mut self) {
        self.selected = None;
    }

    /// The selected property, if it is in the loaded list.
    pub fn selected_property(&self) -> Option<&Property> {
        let id = self.selected.as_ref()?;
        self.properties.iter().find(|p| &p.id == id)
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    pub fn toggle_form(&mut self) {
        self.show_form = !self.show_form;
    }

    /// URL that reproduces this page's view state.
    pub fn query(&self) -> ListingQuery {
        ListingQuery {
            search: self.filter.search.clone(),
            property_type: self.filter.property_type.clone(),
            view: self.selected.clone(),
            show_form: self.show_form,
        }
    }

    /// This page's view state with no list and a blank form; links are
    /// built by applying an action to it.
    fn view_state(&self) -> Self {
        Self {
            filter: self.filter.clone(),
            selected: self.selected.clone(),
            show_form: self.show_form,
            ..Self::default()
        }
    }

    fn href_after(&self, action: impl FnOnce(&mut Self)) -> String {
        let mut next = self.view_state();
        action(&mut next);
        next.query().href()
    }

    pub fn select_href(&self, id: &PropertyId) -> String {
        self.href_after(|p| p.select(id.clone()))
    }

    pub fn close_modal_href(&self) -> String {
        self.href_after(Self::close_modal)
    }

    pub fn clear_filters_href(&self) -> String {
        self.href_after(Self::clear_filters)
    }

    pub fn toggle_form_href(&self) -> String {
        self.href_after(Self::toggle_form)
    }

    /// Where the add form posts. Search and type ride along; the modal and
    /// the panel are closed once the property is added.
    pub fn form_action(&self) -> String {
        let mut next = self.view_state();
        next.close_modal();
        next.show_form = false;
        next.query().href_for("/properties")
    }
}
