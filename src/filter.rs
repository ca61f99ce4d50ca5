//! Card filtering by tag and price class

use crate::error::{ListingError, Result};
use crate::models::Card;

/// Keep the cards that have at least one tag containing `tag_id`.
///
/// Matching is a case-insensitive substring test, so `"tron"` matches a card
/// tagged `"Electronics"`.
pub fn filter_by_tag<'a, I>(cards: I, tag_id: &str) -> Vec<&'a Card>
where
    I: IntoIterator<Item = &'a Card>,
{
    let needle = tag_id.to_lowercase();

    cards
        .into_iter()
        .filter(|card| {
            card.tags()
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Apply each tag filter in turn; a card must match every tag.
pub fn filter_by_tags<'a, I, S>(cards: I, tag_ids: &[S]) -> Vec<&'a Card>
where
    I: IntoIterator<Item = &'a Card>,
    S: AsRef<str>,
{
    tag_ids
        .iter()
        .fold(cards.into_iter().collect(), |remaining: Vec<&'a Card>, tag| {
            filter_by_tag(remaining, tag.as_ref())
        })
}

/// Price class filter selected with `?price=free` or `?price=paid`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceFilter {
    Free,
    Paid,
}

impl PriceFilter {
    /// Parse a query-string value (case-insensitive)
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "free" => Ok(PriceFilter::Free),
            "paid" => Ok(PriceFilter::Paid),
            _ => Err(ListingError::InvalidPriceFilter(value.to_string())),
        }
    }

    pub fn apply<'a>(self, cards: Vec<&'a Card>) -> Vec<&'a Card> {
        cards
            .into_iter()
            .filter(|card| card.is_free() == (self == PriceFilter::Free))
            .collect()
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
