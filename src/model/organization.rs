use serde::{Deserialize, Serialize};

use super::WorldId;

/// A guild, order, or other power bloc operating inside one world.
///
/// Owns an ordered rank ladder. Store reads preload `ranks` sorted by
/// `sort_order` (highest authority first, matching catalog order).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Organization {
    pub id: i64,
    pub world_id: WorldId,
    pub name: String,
    /// Category tag: "military", "guild", "criminal", "religious".
    pub category: String,
    pub description: String,
    /// Influence on a 1–10 scale.
    pub power_level: i32,
    pub is_active: bool,
    #[serde(default)]
    pub ranks: Vec<Rank>,
}

/// One step of an organization's rank ladder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rank {
    pub id: i64,
    pub organization_id: i64,
    pub title: String,
    /// Authority on a 1–10 scale; higher outranks lower.
    pub authority: i32,
    /// 1-based position in the ladder, 1 = highest rank.
    pub sort_order: i32,
}
