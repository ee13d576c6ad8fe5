use crate::model::{Location, WorldId};
use crate::store::{PopulationStore, StoreError};

use super::tables::LOCATION_ARCHETYPES;

/// Stage 1: stamp out the fixed location catalog for this world.
/// No randomness; every world gets the same four districts.
pub async fn create_locations<S: PopulationStore>(
    store: &mut S,
    world_id: WorldId,
) -> Result<usize, StoreError> {
    let locations: Vec<Location> = LOCATION_ARCHETYPES
        .iter()
        .map(|archetype| Location {
            id: 0,
            world_id,
            name: archetype.name.to_string(),
            description: archetype.description.to_string(),
            kind: archetype.kind.to_string(),
            population: archetype.population,
            wealth: archetype.wealth.to_string(),
        })
        .collect();

    let stored = store.create_locations(locations).await?;
    Ok(stored.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MemoryStore;

    #[tokio::test]
    async fn inserts_full_catalog() {
        let mut store = MemoryStore::new();
        let count = create_locations(&mut store, 7).await.unwrap();
        assert_eq!(count, LOCATION_ARCHETYPES.len());

        let stored = store.locations(7).await.unwrap();
        assert_eq!(stored.len(), 4);
        assert!(stored.iter().all(|l| l.world_id == 7));
        assert!(stored.iter().all(|l| l.id > 0));
        assert_eq!(stored[0].name, "Noble Quarter");
    }

    #[tokio::test]
    async fn other_worlds_unaffected() {
        let mut store = MemoryStore::new();
        create_locations(&mut store, 1).await.unwrap();
        create_locations(&mut store, 2).await.unwrap();

        assert_eq!(store.locations(1).await.unwrap().len(), 4);
        assert_eq!(store.locations(2).await.unwrap().len(), 4);
        assert!(store.locations(3).await.unwrap().is_empty());
    }
}
