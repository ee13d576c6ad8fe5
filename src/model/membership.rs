use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An NPC's affiliation with one organization at one rank.
///
/// At most one per NPC is created by the generator. `rank_id` always
/// references a rank belonging to `organization_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Membership {
    pub id: i64,
    pub npc_id: i64,
    pub organization_id: i64,
    pub rank_id: i64,
    pub status: String,
    /// Backdated by a whole number of years at generation time.
    pub joined_at: DateTime<Utc>,
}
