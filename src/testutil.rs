use async_trait::async_trait;

use crate::model::{
    GenerationRecord, Location, Membership, Npc, Organization, Rank, Relationship, WorldId,
};
use crate::store::{PopulationStore, StoreError};

/// Vec-backed store with sequential id assignment.
///
/// Backs the unit and integration tests so pipeline behavior can be
/// asserted without a database. Ids are globally sequential across record
/// types, so no two stored records share an id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    next_id: i64,
    pub locations: Vec<Location>,
    pub organizations: Vec<Organization>,
    pub npcs: Vec<Npc>,
    pub memberships: Vec<Membership>,
    pub relationships: Vec<Relationship>,
    pub generation_records: Vec<GenerationRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[async_trait]
impl PopulationStore for MemoryStore {
    async fn create_locations(
        &mut self,
        locations: Vec<Location>,
    ) -> Result<Vec<Location>, StoreError> {
        let mut stored = Vec::with_capacity(locations.len());
        for mut location in locations {
            location.id = self.next_id();
            self.locations.push(location.clone());
            stored.push(location);
        }
        Ok(stored)
    }

    async fn create_organization(
        &mut self,
        mut organization: Organization,
    ) -> Result<Organization, StoreError> {
        organization.id = self.next_id();
        self.organizations.push(organization.clone());
        Ok(organization)
    }

    async fn create_rank(&mut self, mut rank: Rank) -> Result<Rank, StoreError> {
        rank.id = self.next_id();
        let org = self
            .organizations
            .iter_mut()
            .find(|o| o.id == rank.organization_id)
            .ok_or_else(|| {
                StoreError::Backend(format!("unknown organization {}", rank.organization_id))
            })?;
        org.ranks.push(rank.clone());
        org.ranks.sort_by_key(|r| r.sort_order);
        Ok(rank)
    }

    async fn create_npc(&mut self, mut npc: Npc) -> Result<Npc, StoreError> {
        npc.id = self.next_id();
        self.npcs.push(npc.clone());
        Ok(npc)
    }

    async fn create_membership(
        &mut self,
        mut membership: Membership,
    ) -> Result<Membership, StoreError> {
        membership.id = self.next_id();
        self.memberships.push(membership.clone());
        Ok(membership)
    }

    async fn create_relationship(
        &mut self,
        mut relationship: Relationship,
    ) -> Result<Relationship, StoreError> {
        relationship.id = self.next_id();
        self.relationships.push(relationship.clone());
        Ok(relationship)
    }

    async fn create_generation_record(
        &mut self,
        mut record: GenerationRecord,
    ) -> Result<GenerationRecord, StoreError> {
        record.id = self.next_id();
        self.generation_records.push(record.clone());
        Ok(record)
    }

    async fn locations(&self, world_id: WorldId) -> Result<Vec<Location>, StoreError> {
        Ok(self
            .locations
            .iter()
            .filter(|l| l.world_id == world_id)
            .cloned()
            .collect())
    }

    async fn organizations(&self, world_id: WorldId) -> Result<Vec<Organization>, StoreError> {
        Ok(self
            .organizations
            .iter()
            .filter(|o| o.world_id == world_id)
            .cloned()
            .collect())
    }

    async fn npcs(&self, world_id: WorldId) -> Result<Vec<Npc>, StoreError> {
        Ok(self
            .npcs
            .iter()
            .filter(|n| n.world_id == world_id)
            .cloned()
            .collect())
    }

    async fn memberships(&self, world_id: WorldId) -> Result<Vec<Membership>, StoreError> {
        let npc_ids: Vec<i64> = self
            .npcs
            .iter()
            .filter(|n| n.world_id == world_id)
            .map(|n| n.id)
            .collect();
        Ok(self
            .memberships
            .iter()
            .filter(|m| npc_ids.contains(&m.npc_id))
            .cloned()
            .collect())
    }

    async fn relationships(&self, world_id: WorldId) -> Result<Vec<Relationship>, StoreError> {
        Ok(self
            .relationships
            .iter()
            .filter(|r| r.world_id == world_id)
            .cloned()
            .collect())
    }

    async fn generation_records(
        &self,
        world_id: WorldId,
    ) -> Result<Vec<GenerationRecord>, StoreError> {
        Ok(self
            .generation_records
            .iter()
            .filter(|g| g.world_id == world_id)
            .cloned()
            .collect())
    }

    async fn relationship_exists(&self, a: i64, b: i64) -> Result<bool, StoreError> {
        Ok(self.relationships.iter().any(|r| r.links(a, b)))
    }
}

/// Store wrapper that fails every write after a budget of successes.
/// Used to pin stage-error attribution in the pipeline tests.
#[derive(Debug)]
pub struct FailAfter {
    pub inner: MemoryStore,
    pub writes_left: usize,
}

impl FailAfter {
    pub fn new(writes_left: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            writes_left,
        }
    }

    fn spend(&mut self) -> Result<(), StoreError> {
        if self.writes_left == 0 {
            return Err(StoreError::Backend("write budget exhausted".to_string()));
        }
        self.writes_left -= 1;
        Ok(())
    }
}

#[async_trait]
impl PopulationStore for FailAfter {
    async fn create_locations(
        &mut self,
        locations: Vec<Location>,
    ) -> Result<Vec<Location>, StoreError> {
        self.spend()?;
        self.inner.create_locations(locations).await
    }

    async fn create_organization(
        &mut self,
        organization: Organization,
    ) -> Result<Organization, StoreError> {
        self.spend()?;
        self.inner.create_organization(organization).await
    }

    async fn create_rank(&mut self, rank: Rank) -> Result<Rank, StoreError> {
        self.spend()?;
        self.inner.create_rank(rank).await
    }

    async fn create_npc(&mut self, npc: Npc) -> Result<Npc, StoreError> {
        self.spend()?;
        self.inner.create_npc(npc).await
    }

    async fn create_membership(
        &mut self,
        membership: Membership,
    ) -> Result<Membership, StoreError> {
        self.spend()?;
        self.inner.create_membership(membership).await
    }

    async fn create_relationship(
        &mut self,
        relationship: Relationship,
    ) -> Result<Relationship, StoreError> {
        self.spend()?;
        self.inner.create_relationship(relationship).await
    }

    async fn create_generation_record(
        &mut self,
        record: GenerationRecord,
    ) -> Result<GenerationRecord, StoreError> {
        self.spend()?;
        self.inner.create_generation_record(record).await
    }

    async fn locations(&self, world_id: WorldId) -> Result<Vec<Location>, StoreError> {
        self.inner.locations(world_id).await
    }

    async fn organizations(&self, world_id: WorldId) -> Result<Vec<Organization>, StoreError> {
        self.inner.organizations(world_id).await
    }

    async fn npcs(&self, world_id: WorldId) -> Result<Vec<Npc>, StoreError> {
        self.inner.npcs(world_id).await
    }

    async fn memberships(&self, world_id: WorldId) -> Result<Vec<Membership>, StoreError> {
        self.inner.memberships(world_id).await
    }

    async fn relationships(&self, world_id: WorldId) -> Result<Vec<Relationship>, StoreError> {
        self.inner.relationships(world_id).await
    }

    async fn generation_records(
        &self,
        world_id: WorldId,
    ) -> Result<Vec<GenerationRecord>, StoreError> {
        self.inner.generation_records(world_id).await
    }

    async fn relationship_exists(&self, a: i64, b: i64) -> Result<bool, StoreError> {
        self.inner.relationship_exists(a, b).await
    }
}
