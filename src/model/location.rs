use serde::{Deserialize, Serialize};

use super::WorldId;

/// A district or rural area that NPCs can be assigned to.
///
/// Created once per world from the fixed archetype catalog and never
/// mutated by the generator afterwards. The store assigns `id` on insert;
/// `0` means not yet persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub id: i64,
    pub world_id: WorldId,
    pub name: String,
    pub description: String,
    /// Category tag: "district" or "rural".
    pub kind: String,
    /// Nominal head count for flavor; independent of generated NPCs.
    pub population: i32,
    /// Wealth tier: "wealthy", "middle", or "poor".
    pub wealth: String,
}
