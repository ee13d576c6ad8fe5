use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::WorldId;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    Family,
    Custom(String),
}

impl RelationshipKind {
    pub fn as_str(&self) -> &str {
        match self {
            RelationshipKind::Family => "family",
            RelationshipKind::Custom(s) => s.as_str(),
        }
    }
}

impl Serialize for RelationshipKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RelationshipKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "family" => Ok(RelationshipKind::Family),
            "" => Err(de::Error::custom("relationship kind cannot be empty")),
            _ => Ok(RelationshipKind::Custom(s)),
        }
    }
}

/// A link between two distinct NPCs, undirected in effect.
///
/// The generator only emits `family` relationships; `Custom` covers kinds
/// written later by ordinary CRUD handlers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Relationship {
    pub id: i64,
    pub world_id: WorldId,
    pub from_npc_id: i64,
    pub to_npc_id: i64,
    pub kind: RelationshipKind,
    /// For family: "sibling", "parent", "cousin", or "spouse".
    pub subtype: String,
    /// Bond strength on a 1–10 scale; family links land in [4, 10].
    pub strength: i32,
    pub is_public: bool,
}

impl Relationship {
    /// True if this record links the given unordered NPC pair.
    pub fn links(&self, a: i64, b: i64) -> bool {
        (self.from_npc_id == a && self.to_npc_id == b)
            || (self.from_npc_id == b && self.to_npc_id == a)
    }
}
