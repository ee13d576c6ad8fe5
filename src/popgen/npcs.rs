use rand::Rng;
use rand::rngs::SmallRng;

use crate::model::{Gender, Npc, WorldId};
use crate::store::{PopulationStore, StoreError};

use super::names::generate_npc_name;
use super::tables::{PERSONALITIES, PROFESSIONS, SOCIAL_CLASSES};

const GENDERS: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Nonbinary];

/// Stage 3: generate the population roster.
///
/// Per NPC the draw order is fixed: location, first name, last name, age,
/// gender, profession, social class, personality. Reordering these would
/// silently break seed reproducibility.
pub async fn create_npcs<S: PopulationStore>(
    store: &mut S,
    world_id: WorldId,
    count: u32,
    rng: &mut SmallRng,
) -> Result<usize, StoreError> {
    let locations = store.locations(world_id).await?;

    for _ in 0..count {
        let location_id = if locations.is_empty() {
            None
        } else {
            Some(locations[rng.random_range(0..locations.len())].id)
        };
        let name = generate_npc_name(rng);
        let age = rng.random_range(18..=77);
        let gender = GENDERS[rng.random_range(0..GENDERS.len())];
        let profession = PROFESSIONS[rng.random_range(0..PROFESSIONS.len())];
        let social_class = SOCIAL_CLASSES[rng.random_range(0..SOCIAL_CLASSES.len())];
        let personality = PERSONALITIES[rng.random_range(0..PERSONALITIES.len())];

        store
            .create_npc(Npc {
                id: 0,
                world_id,
                location_id,
                name,
                age,
                gender,
                profession: profession.to_string(),
                social_class: social_class.to_string(),
                personality: personality.to_string(),
                is_alive: true,
            })
            .await?;
    }

    Ok(count as usize)
}
