use rand::Rng;
use rand::RngCore;
use thiserror::Error;

const FIRST_NAMES: &[&str] = &[
    "Alaric", "Brenna", "Cedric", "Diana", "Elara", "Finn", "Gwendolyn",
    "Harald", "Isla", "Joren", "Kira", "Leif", "Mira", "Nolan", "Olara",
    "Pike", "Quinn", "Renna", "Soren", "Tara",
];

const LAST_NAMES: &[&str] = &[
    "Ironforge", "Goldleaf", "Stormwind", "Brightblade", "Shadowmere",
    "Fireborn", "Frostwald", "Thornfield", "Riverstone", "Blackwood",
];

/// Compose an NPC name from independent first-name and last-name draws.
pub fn generate_npc_name(rng: &mut dyn RngCore) -> String {
    let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
    format!("{first} {last}")
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("syllable table needs at least one start and one end syllable")]
    MissingSyllables,
}

/// Syllable pools for phonetic name composition, grouped by position.
///
/// A name is one start syllable, optionally one middle syllable (50%
/// chance when any are defined), and one end syllable.
#[derive(Debug, Clone, Default)]
pub struct SyllableTable {
    pub starts: Vec<String>,
    pub middles: Vec<String>,
    pub ends: Vec<String>,
}

impl SyllableTable {
    pub fn compose(&self, rng: &mut dyn RngCore) -> Result<String, ComposeError> {
        if self.starts.is_empty() || self.ends.is_empty() {
            return Err(ComposeError::MissingSyllables);
        }

        let mut name = self.starts[rng.random_range(0..self.starts.len())].clone();
        if !self.middles.is_empty() && rng.random_bool(0.5) {
            name.push_str(&self.middles[rng.random_range(0..self.middles.len())]);
        }
        name.push_str(&self.ends[rng.random_range(0..self.ends.len())]);
        Ok(name)
    }
}
