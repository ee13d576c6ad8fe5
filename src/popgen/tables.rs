/// Location archetype stamped out once per world.
pub struct LocationArchetype {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: &'static str,
    pub population: i32,
    pub wealth: &'static str,
}

/// Fixed four-district catalog; stage 1 inserts all of them, unrandomized.
pub const LOCATION_ARCHETYPES: &[LocationArchetype] = &[
    LocationArchetype {
        name: "Noble Quarter",
        description: "Where the wealthy and powerful reside",
        kind: "district",
        population: 500,
        wealth: "wealthy",
    },
    LocationArchetype {
        name: "Market District",
        description: "Bustling center of commerce",
        kind: "district",
        population: 1200,
        wealth: "middle",
    },
    LocationArchetype {
        name: "Common Quarter",
        description: "Where most citizens live and work",
        kind: "district",
        population: 2000,
        wealth: "poor",
    },
    LocationArchetype {
        name: "Outskirts",
        description: "Rural areas and farmland",
        kind: "rural",
        population: 800,
        wealth: "poor",
    },
];

pub struct RankArchetype {
    pub title: &'static str,
    pub authority: i32,
}

/// Organization archetype with its rank ladder, highest authority first.
pub struct OrganizationArchetype {
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub power_level: i32,
    pub ranks: &'static [RankArchetype],
}

/// Ordered catalog; stage 2 takes a prefix of it. Requests beyond the
/// catalog size silently cap here.
pub const ORGANIZATION_ARCHETYPES: &[OrganizationArchetype] = &[
    OrganizationArchetype {
        name: "Royal Guard",
        category: "military",
        description: "Elite soldiers protecting the realm",
        power_level: 9,
        ranks: &[
            RankArchetype { title: "Captain", authority: 10 },
            RankArchetype { title: "Lieutenant", authority: 7 },
            RankArchetype { title: "Sergeant", authority: 5 },
            RankArchetype { title: "Guard", authority: 3 },
            RankArchetype { title: "Recruit", authority: 1 },
        ],
    },
    OrganizationArchetype {
        name: "Merchants Guild",
        category: "guild",
        description: "Powerful trading organization",
        power_level: 7,
        ranks: &[
            RankArchetype { title: "Guildmaster", authority: 10 },
            RankArchetype { title: "Senior Merchant", authority: 7 },
            RankArchetype { title: "Merchant", authority: 5 },
            RankArchetype { title: "Apprentice", authority: 2 },
        ],
    },
    OrganizationArchetype {
        name: "Thieves Guild",
        category: "criminal",
        description: "Underground criminal network",
        power_level: 6,
        ranks: &[
            RankArchetype { title: "Shadowmaster", authority: 10 },
            RankArchetype { title: "Lieutenant", authority: 7 },
            RankArchetype { title: "Cutpurse", authority: 4 },
            RankArchetype { title: "Pickpocket", authority: 2 },
        ],
    },
    OrganizationArchetype {
        name: "Temple of Light",
        category: "religious",
        description: "Primary religious institution",
        power_level: 8,
        ranks: &[
            RankArchetype { title: "High Priest", authority: 10 },
            RankArchetype { title: "Priest", authority: 7 },
            RankArchetype { title: "Acolyte", authority: 4 },
            RankArchetype { title: "Initiate", authority: 1 },
        ],
    },
];

pub const PROFESSIONS: &[&str] = &[
    "Blacksmith", "Baker", "Guard", "Merchant", "Farmer",
    "Scribe", "Innkeeper", "Craftsman", "Laborer", "Artisan",
];

pub const SOCIAL_CLASSES: &[&str] = &[
    "peasant", "commoner", "merchant", "minor_noble", "noble",
];

pub const PERSONALITIES: &[&str] = &[
    "Kind and generous", "Stern but fair", "Ambitious", "Cautious", "Gregarious",
    "Suspicious", "Loyal", "Cunning", "Hot-tempered", "Wise",
];

pub const FAMILY_SUBTYPES: &[&str] = &["sibling", "parent", "cousin", "spouse"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_location_archetypes() {
        assert_eq!(LOCATION_ARCHETYPES.len(), 4);
        assert!(LOCATION_ARCHETYPES.iter().any(|l| l.kind == "rural"));
    }

    #[test]
    fn every_organization_has_a_ladder() {
        for org in ORGANIZATION_ARCHETYPES {
            assert!(!org.ranks.is_empty(), "{} has no ranks", org.name);
            assert!((1..=10).contains(&org.power_level));
        }
    }

    #[test]
    fn rank_ladders_descend_by_authority() {
        for org in ORGANIZATION_ARCHETYPES {
            for pair in org.ranks.windows(2) {
                assert!(
                    pair[0].authority > pair[1].authority,
                    "{} ladder not strictly descending",
                    org.name
                );
            }
        }
    }

    #[test]
    fn authority_within_bounds() {
        for org in ORGANIZATION_ARCHETYPES {
            for rank in org.ranks {
                assert!((1..=10).contains(&rank.authority), "{}", rank.title);
            }
        }
    }
}
