use async_trait::async_trait;
use thiserror::Error;

use crate::model::{
    GenerationRecord, Location, Membership, Npc, Organization, Rank, Relationship, WorldId,
};

/// Failure surfaced from a persistence backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("{0}")]
    Backend(String),
}

/// Typed insert/find surface the generator runs against.
///
/// `create_*` methods assign the record's id and return the stored copy.
/// Finds are world-scoped and return rows in insertion (id) order, which
/// the generator relies on for reproducible draws. `organizations`
/// preloads each rank ladder sorted by `sort_order`.
#[async_trait]
pub trait PopulationStore {
    async fn create_locations(
        &mut self,
        locations: Vec<Location>,
    ) -> Result<Vec<Location>, StoreError>;
    async fn create_organization(
        &mut self,
        organization: Organization,
    ) -> Result<Organization, StoreError>;
    async fn create_rank(&mut self, rank: Rank) -> Result<Rank, StoreError>;
    async fn create_npc(&mut self, npc: Npc) -> Result<Npc, StoreError>;
    async fn create_membership(&mut self, membership: Membership)
    -> Result<Membership, StoreError>;
    async fn create_relationship(
        &mut self,
        relationship: Relationship,
    ) -> Result<Relationship, StoreError>;
    async fn create_generation_record(
        &mut self,
        record: GenerationRecord,
    ) -> Result<GenerationRecord, StoreError>;

    async fn locations(&self, world_id: WorldId) -> Result<Vec<Location>, StoreError>;
    async fn organizations(&self, world_id: WorldId) -> Result<Vec<Organization>, StoreError>;
    async fn npcs(&self, world_id: WorldId) -> Result<Vec<Npc>, StoreError>;
    async fn memberships(&self, world_id: WorldId) -> Result<Vec<Membership>, StoreError>;
    async fn relationships(&self, world_id: WorldId) -> Result<Vec<Relationship>, StoreError>;
    async fn generation_records(
        &self,
        world_id: WorldId,
    ) -> Result<Vec<GenerationRecord>, StoreError>;

    /// Whether any relationship links the unordered NPC pair, in either direction.
    async fn relationship_exists(&self, a: i64, b: i64) -> Result<bool, StoreError>;
}
