use crate::model::{Organization, Rank, WorldId};
use crate::store::{PopulationStore, StoreError};

use super::tables::ORGANIZATION_ARCHETYPES;

/// Stage 2: insert a prefix of the organization catalog with full rank
/// ladders. Requesting more than the catalog holds caps silently.
///
/// Returns the number of organizations and ranks created.
pub async fn create_organizations<S: PopulationStore>(
    store: &mut S,
    world_id: WorldId,
    requested: u32,
) -> Result<(usize, usize), StoreError> {
    let count = (requested as usize).min(ORGANIZATION_ARCHETYPES.len());
    let mut ranks_created = 0;

    for archetype in &ORGANIZATION_ARCHETYPES[..count] {
        let org = store
            .create_organization(Organization {
                id: 0,
                world_id,
                name: archetype.name.to_string(),
                category: archetype.category.to_string(),
                description: archetype.description.to_string(),
                power_level: archetype.power_level,
                is_active: true,
                ranks: Vec::new(),
            })
            .await?;

        for (position, rank) in archetype.ranks.iter().enumerate() {
            store
                .create_rank(Rank {
                    id: 0,
                    organization_id: org.id,
                    title: rank.title.to_string(),
                    authority: rank.authority,
                    sort_order: position as i32 + 1,
                })
                .await?;
            ranks_created += 1;
        }
    }

    Ok((count, ranks_created))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MemoryStore;

    #[tokio::test]
    async fn caps_at_catalog_size() {
        let mut store = MemoryStore::new();
        let (orgs, _) = create_organizations(&mut store, 7, 100).await.unwrap();
        assert_eq!(orgs, ORGANIZATION_ARCHETYPES.len());
        assert_eq!(store.organizations(7).await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn prefix_order_matches_catalog() {
        let mut store = MemoryStore::new();
        create_organizations(&mut store, 7, 2).await.unwrap();

        let orgs = store.organizations(7).await.unwrap();
        assert_eq!(orgs.len(), 2);
        assert_eq!(orgs[0].name, "Royal Guard");
        assert_eq!(orgs[1].name, "Merchants Guild");
    }

    #[tokio::test]
    async fn ladders_are_complete_and_ordered() {
        let mut store = MemoryStore::new();
        let (_, ranks) = create_organizations(&mut store, 7, 4).await.unwrap();
        assert_eq!(
            ranks,
            ORGANIZATION_ARCHETYPES.iter().map(|o| o.ranks.len()).sum::<usize>()
        );

        for org in store.organizations(7).await.unwrap() {
            assert!(!org.ranks.is_empty());
            for (i, rank) in org.ranks.iter().enumerate() {
                assert_eq!(rank.sort_order, i as i32 + 1);
                assert_eq!(rank.organization_id, org.id);
            }
            // Ladder runs highest authority to lowest.
            assert!(org.ranks.first().unwrap().authority > org.ranks.last().unwrap().authority);
        }
    }

    #[tokio::test]
    async fn zero_requested_creates_nothing() {
        let mut store = MemoryStore::new();
        let (orgs, ranks) = create_organizations(&mut store, 7, 0).await.unwrap();
        assert_eq!((orgs, ranks), (0, 0));
    }
}
