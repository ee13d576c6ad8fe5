pub mod generation;
pub mod location;
pub mod membership;
pub mod npc;
pub mod organization;
pub mod relationship;

pub use generation::GenerationRecord;
pub use location::Location;
pub use membership::Membership;
pub use npc::{Gender, Npc};
pub use organization::{Organization, Rank};
pub use relationship::{Relationship, RelationshipKind};

/// Identifier of the world that scopes all generated records.
pub type WorldId = i64;
