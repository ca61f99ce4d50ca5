//! Listing pipeline: filter, sort and paginate the card store for one query

use crate::error::Result;
use crate::filter::filter_by_tags;
use crate::models::Card;
use crate::pagination::{paginate, total_pages};
use crate::query::ListingQuery;
use crate::store::CardStore;
use serde::Serialize;
use std::collections::BTreeMap;

/// Response body for one listing page
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse<'a> {
    pub page: i64,
    pub total_pages: usize,
    /// Matching cards before pagination
    pub total_results: usize,
    pub sort: String,
    pub cards: Vec<&'a Card>,
    /// Reserved for per-tag counts; always empty
    pub tags: BTreeMap<String, usize>,
}

/// Run `query` against `store` and build the response page.
///
/// The store is only borrowed; the returned cards point into it.
pub fn handle<'a>(store: &'a CardStore, query: &ListingQuery) -> Result<ListingResponse<'a>> {
    log::debug!("Listing query: {:?}", query);

    let mut matching = filter_by_tags(store.cards(), &query.tags);
    if let Some(price) = query.price {
        matching = price.apply(matching);
    }

    let total_results = matching.len();
    let total_pages = total_pages(total_results, query.page_size)?;

    let sorted = query.criterion.sort(matching);
    let cards = paginate(sorted, query.page_size, query.page_number);

    Ok(ListingResponse {
        page: query.page_number,
        total_pages,
        total_results,
        sort: query.sort.clone(),
        cards,
        tags: BTreeMap::new(),
    })
}
