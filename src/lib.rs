pub mod db;
pub mod flush;
pub mod model;
pub mod popgen;
pub mod store;
pub mod testutil;

pub use model::{
    Gender, GenerationRecord, Location, Membership, Npc, Organization, Rank, Relationship,
    RelationshipKind, WorldId,
};
pub use popgen::{GenerateError, GenerationConfig, GenerationReport, generate_population};
pub use store::{PopulationStore, StoreError};
