use serde::{Deserialize, Serialize};

use super::WorldId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Nonbinary,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Nonbinary => "nonbinary",
        }
    }

    pub fn parse(s: &str) -> Option<Gender> {
        match s {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "nonbinary" => Some(Gender::Nonbinary),
            _ => None,
        }
    }
}

/// A generated inhabitant of one world.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Npc {
    pub id: i64,
    pub world_id: WorldId,
    /// Home location, chosen uniformly from the world's locations.
    pub location_id: Option<i64>,
    pub name: String,
    /// Whole years, in [18, 77] for generated NPCs.
    pub age: i32,
    pub gender: Gender,
    pub profession: String,
    pub social_class: String,
    pub personality: String,
    pub is_alive: bool,
}
