//! Landing-page game catalog
//!
//! The landing page lists the games from a static JSON file; this module
//! owns the schema and the embedded copy of that data.

use serde::{Deserialize, Serialize};

/// One entry in the landing-page grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameInfo {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// The full game list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub games: Vec<GameInfo>,
}

/// Embedded copy of the landing page's game list
const GAMES_JSON: &str = include_str!("../data/games.json");

impl Catalog {
    /// Parse the built-in game list. Malformed data yields an empty catalog
    /// rather than an error; the landing page renders a placeholder card.
    pub fn builtin() -> Self {
        serde_json::from_str(GAMES_JSON).unwrap_or_else(|e| {
            log::warn!("embedded games.json is invalid: {e}");
            Self::default()
        })
    }

    pub fn get(&self, id: &str) -> Option<&GameInfo> {
        self.games.iter().find(|g| g.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_lists_all_four_games() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.games.len(), 4);
        assert!(catalog.get("maze-runner").is_some());
        assert!(catalog.get("no-such-game").is_none());
    }
}
