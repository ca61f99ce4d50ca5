//! In-memory card store loaded once at startup

use crate::error::Result;
use crate::models::Card;
use serde::Deserialize;
use std::path::Path;

/// Exchange data file structure
#[derive(Debug, Deserialize)]
struct CardFile {
    cards: Vec<Card>,
}

/// Read-only, ordered collection of every card served by the listing.
///
/// The store hands out shared slices only; filtering, sorting and paging
/// always produce new vectors, so the loaded order is never disturbed.
#[derive(Debug, Default)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Load the store from an exchange data file (`{"cards": [...]}`)
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("Loading cards from {}", path.display());

        let contents = std::fs::read_to_string(path)?;
        let store = Self::from_json(&contents)?;

        log::info!("Loaded {} cards", store.len());
        Ok(store)
    }

    /// Parse the store from the JSON contents of a data file
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CardFile = serde_json::from_str(json)?;
        Ok(Self::new(file.cards))
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
