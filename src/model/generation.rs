use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::WorldId;

/// Audit record written once at the end of a successful generation run.
///
/// Replaying the stored seed and counts against the same catalog version
/// reproduces the run's output exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationRecord {
    pub id: i64,
    pub world_id: WorldId,
    pub seed: u64,
    pub population_size: u32,
    pub organization_count: u32,
    pub family_density: f64,
    pub generated_at: DateTime<Utc>,
}
