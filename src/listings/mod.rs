mod cache;
mod page;
mod query;

pub use cache::ListingCache;
pub use page::ListingsPage;
pub use query::ListingQuery;
