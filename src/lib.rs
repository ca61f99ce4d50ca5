//! Exchange Listing - catalog card listing service
//!
//! Serves pages of catalog cards from a static data file, filtered by tag,
//! sorted by a named criterion and paginated.

pub mod error;
pub mod filter;
pub mod listing;
pub mod models;
pub mod pagination;
pub mod query;
pub mod sort;
pub mod store;
pub mod web;

pub use error::{ListingError, Result};
pub use listing::{handle, ListingResponse};
pub use models::Card;
pub use query::ListingQuery;
pub use sort::SortCriterion;
pub use store::CardStore;
