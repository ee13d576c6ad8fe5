use chrono::{DateTime, Months, Utc};
use rand::Rng;
use rand::rngs::SmallRng;

use crate::model::{Membership, WorldId};
use crate::store::{PopulationStore, StoreError};

/// Fraction of NPCs that roll an organization membership.
pub const MEMBERSHIP_CHANCE: f64 = 0.6;

/// Stage 4: roll memberships for every NPC in the world.
///
/// A member's rank is weighted toward the bottom of the ladder: 70%
/// lowest, 20% middle, 10% highest. NPCs whose chosen organization has
/// no ranks get no membership; the join date is backdated by a uniform
/// whole number of years in [0, 9].
pub async fn assign_memberships<S: PopulationStore>(
    store: &mut S,
    world_id: WorldId,
    now: DateTime<Utc>,
    rng: &mut SmallRng,
) -> Result<usize, StoreError> {
    let npcs = store.npcs(world_id).await?;
    let organizations = store.organizations(world_id).await?;
    if organizations.is_empty() {
        return Ok(0);
    }

    let mut created = 0;
    for npc in &npcs {
        if !rng.random_bool(MEMBERSHIP_CHANCE) {
            continue;
        }

        let org = &organizations[rng.random_range(0..organizations.len())];
        if org.ranks.is_empty() {
            continue;
        }

        let roll: f64 = rng.random();
        let rank_index = if roll < 0.7 {
            org.ranks.len() - 1
        } else if roll < 0.9 {
            org.ranks.len() / 2
        } else {
            0
        };
        let rank = &org.ranks[rank_index];

        let years_back = rng.random_range(0..=9u32);
        let joined_at = now
            .checked_sub_months(Months::new(12 * years_back))
            .unwrap_or(now);

        store
            .create_membership(Membership {
                id: 0,
                npc_id: npc.id,
                organization_id: org.id,
                rank_id: rank.id,
                status: "active".to_string(),
                joined_at,
            })
            .await?;
        created += 1;
    }

    Ok(created)
}
