//! Favorites owned by the app shell. The dashboard only ever adds to it
//! through its add-to-watchlist intent.

use serde::{Deserialize, Serialize};
use shared::domain::{Champion, ChampionId};

pub const WATCHLIST_STORAGE_KEY: &str = "champdex.watchlist";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Watchlist {
    entries: Vec<Champion>,
}

impl Watchlist {
    /// Appends the champion unless one with the same id is already listed.
    /// Returns whether it was added.
    pub fn add(&mut self, champion: Champion) -> bool {
        if self.contains(champion.id) {
            return false;
        }
        self.entries.push(champion);
        true
    }

    pub fn remove(&mut self, id: ChampionId) -> Option<Champion> {
        let index = self.entries.iter().position(|c| c.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn contains(&self, id: ChampionId) -> bool {
        self.entries.iter().any(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Champion> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
