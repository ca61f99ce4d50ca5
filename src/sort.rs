//! Sort strategies for the card listing
//!
//! Every strategy takes an owned vector of card references and returns a
//! reordered vector, so the card store itself is never reordered.

use crate::models::Card;
use icu_collator::{Collator, CollatorOptions};
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;

/// Named sort strategy requested in the listing path (`sort-{criterion}`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    /// Highest rating first
    Rating,
    /// Reverse of the stored order (the data file is oldest first)
    Recent,
    /// Fresh random permutation on every call
    Popular,
    /// Alphabetical by title, ignoring case
    Title,
    /// Integer price, lowest first
    PriceDesc,
    /// Integer price, highest first
    PriceAsc,
    /// Unrecognized criterion; order is left untouched
    Unsorted,
}

impl SortCriterion {
    /// Parse a criterion name. Unknown names map to `Unsorted`.
    pub fn parse(name: &str) -> Self {
        match name {
            "rating" => SortCriterion::Rating,
            "recent" => SortCriterion::Recent,
            "popular" => SortCriterion::Popular,
            "title" => SortCriterion::Title,
            "priceDesc" => SortCriterion::PriceDesc,
            "priceAsc" => SortCriterion::PriceAsc,
            _ => SortCriterion::Unsorted,
        }
    }

    /// Reorder `cards`, shuffling with the thread-local RNG for `Popular`
    pub fn sort<'a>(self, cards: Vec<&'a Card>) -> Vec<&'a Card> {
        self.sort_with_rng(cards, &mut rand::thread_rng())
    }

    pub fn sort_with_rng<'a, R: Rng + ?Sized>(
        self,
        mut cards: Vec<&'a Card>,
        rng: &mut R,
    ) -> Vec<&'a Card> {
        match self {
            SortCriterion::Rating => cards.sort_by(|a, b| b.rating().total_cmp(&a.rating())),
            SortCriterion::Recent => cards.reverse(),
            SortCriterion::Popular => cards.shuffle(rng),
            SortCriterion::Title => {
                let order = TitleOrder::new();
                cards.sort_by(|a, b| order.compare(a.title(), b.title()))
            }
            // Kept for compatibility with existing clients: "priceDesc" has
            // always listed the cheapest cards first and "priceAsc" the most
            // expensive.
            SortCriterion::PriceDesc => cards.sort_by_key(|card| card.price_value()),
            SortCriterion::PriceAsc => {
                cards.sort_by(|a, b| b.price_value().cmp(&a.price_value()))
            }
            SortCriterion::Unsorted => {}
        }
        cards
    }
}

/// Locale-aware title ordering using the root Unicode collation.
///
/// `"apple"` sorts before `"Banana"` and `"éclair"` before `"fig"`; titles
/// that differ only in case put the lowercase form first.
pub struct TitleOrder {
    collator: Option<Collator>,
}

impl TitleOrder {
    pub fn new() -> Self {
        let collator = match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                log::warn!("Title collation unavailable, comparing case-folded text: {}", e);
                None
            }
        };
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => compare_folded(a, b),
        }
    }
}

impl Default for TitleOrder {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two titles with a one-off [`TitleOrder`]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    TitleOrder::new().compare(a, b)
}

fn compare_folded(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);

    folded_a.cmp(folded_b).then_with(|| b.cmp(a))
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
