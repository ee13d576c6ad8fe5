use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::model::{
    Gender, GenerationRecord, Location, Membership, Npc, Organization, Rank, Relationship,
    RelationshipKind, WorldId,
};
use crate::store::{PopulationStore, StoreError};

/// Postgres-backed `PopulationStore`. Ids come from `BIGSERIAL` columns
/// via `RETURNING id`; finds are ordered by id so the generator sees rows
/// in insertion order.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn location_from_row(row: &PgRow) -> Location {
    Location {
        id: row.get("id"),
        world_id: row.get("world_id"),
        name: row.get("name"),
        description: row.get("description"),
        kind: row.get("kind"),
        population: row.get("population"),
        wealth: row.get("wealth"),
    }
}

fn npc_from_row(row: &PgRow) -> Result<Npc, StoreError> {
    let gender: String = row.get("gender");
    let gender = Gender::parse(&gender)
        .ok_or_else(|| StoreError::Backend(format!("unknown gender value: {gender}")))?;
    Ok(Npc {
        id: row.get("id"),
        world_id: row.get("world_id"),
        location_id: row.get("location_id"),
        name: row.get("name"),
        age: row.get("age"),
        gender,
        profession: row.get("profession"),
        social_class: row.get("social_class"),
        personality: row.get("personality"),
        is_alive: row.get("is_alive"),
    })
}

fn relationship_from_row(row: &PgRow) -> Relationship {
    let kind: String = row.get("kind");
    let kind = match kind.as_str() {
        "family" => RelationshipKind::Family,
        _ => RelationshipKind::Custom(kind),
    };
    Relationship {
        id: row.get("id"),
        world_id: row.get("world_id"),
        from_npc_id: row.get("from_npc_id"),
        to_npc_id: row.get("to_npc_id"),
        kind,
        subtype: row.get("subtype"),
        strength: row.get("strength"),
        is_public: row.get("is_public"),
    }
}

#[async_trait]
impl PopulationStore for PgStore {
    async fn create_locations(
        &mut self,
        locations: Vec<Location>,
    ) -> Result<Vec<Location>, StoreError> {
        let mut stored = Vec::with_capacity(locations.len());
        for mut location in locations {
            let id: i64 = sqlx::query_scalar(
                "INSERT INTO npc_locations \
                 (world_id, name, description, kind, population, wealth) \
                 VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
            )
            .bind(location.world_id)
            .bind(&location.name)
            .bind(&location.description)
            .bind(&location.kind)
            .bind(location.population)
            .bind(&location.wealth)
            .fetch_one(&self.pool)
            .await?;
            location.id = id;
            stored.push(location);
        }
        Ok(stored)
    }

    async fn create_organization(
        &mut self,
        mut organization: Organization,
    ) -> Result<Organization, StoreError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO organizations \
             (world_id, name, category, description, power_level, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
        )
        .bind(organization.world_id)
        .bind(&organization.name)
        .bind(&organization.category)
        .bind(&organization.description)
        .bind(organization.power_level)
        .bind(organization.is_active)
        .fetch_one(&self.pool)
        .await?;
        organization.id = id;
        Ok(organization)
    }

    async fn create_rank(&mut self, mut rank: Rank) -> Result<Rank, StoreError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO organization_ranks \
             (organization_id, title, authority, sort_order) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(rank.organization_id)
        .bind(&rank.title)
        .bind(rank.authority)
        .bind(rank.sort_order)
        .fetch_one(&self.pool)
        .await?;
        rank.id = id;
        Ok(rank)
    }

    async fn create_npc(&mut self, mut npc: Npc) -> Result<Npc, StoreError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO npcs \
             (world_id, location_id, name, age, gender, profession, social_class, personality, is_alive) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING id",
        )
        .bind(npc.world_id)
        .bind(npc.location_id)
        .bind(&npc.name)
        .bind(npc.age)
        .bind(npc.gender.as_str())
        .bind(&npc.profession)
        .bind(&npc.social_class)
        .bind(&npc.personality)
        .bind(npc.is_alive)
        .fetch_one(&self.pool)
        .await?;
        npc.id = id;
        Ok(npc)
    }

    async fn create_membership(
        &mut self,
        mut membership: Membership,
    ) -> Result<Membership, StoreError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO organization_memberships \
             (npc_id, organization_id, rank_id, status, joined_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(membership.npc_id)
        .bind(membership.organization_id)
        .bind(membership.rank_id)
        .bind(&membership.status)
        .bind(membership.joined_at)
        .fetch_one(&self.pool)
        .await?;
        membership.id = id;
        Ok(membership)
    }

    async fn create_relationship(
        &mut self,
        mut relationship: Relationship,
    ) -> Result<Relationship, StoreError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO npc_relationships \
             (world_id, from_npc_id, to_npc_id, kind, subtype, strength, is_public) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id",
        )
        .bind(relationship.world_id)
        .bind(relationship.from_npc_id)
        .bind(relationship.to_npc_id)
        .bind(relationship.kind.as_str())
        .bind(&relationship.subtype)
        .bind(relationship.strength)
        .bind(relationship.is_public)
        .fetch_one(&self.pool)
        .await?;
        relationship.id = id;
        Ok(relationship)
    }

    async fn create_generation_record(
        &mut self,
        mut record: GenerationRecord,
    ) -> Result<GenerationRecord, StoreError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO npc_generation_configs \
             (world_id, seed, population_size, organization_count, family_density, generated_at) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
        )
        .bind(record.world_id)
        .bind(record.seed as i64)
        .bind(record.population_size as i32)
        .bind(record.organization_count as i32)
        .bind(record.family_density)
        .bind(record.generated_at)
        .fetch_one(&self.pool)
        .await?;
        record.id = id;
        Ok(record)
    }

    async fn locations(&self, world_id: WorldId) -> Result<Vec<Location>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, world_id, name, description, kind, population, wealth \
             FROM npc_locations WHERE world_id = $1 ORDER BY id",
        )
        .bind(world_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(location_from_row).collect())
    }

    async fn organizations(&self, world_id: WorldId) -> Result<Vec<Organization>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, world_id, name, category, description, power_level, is_active \
             FROM organizations WHERE world_id = $1 ORDER BY id",
        )
        .bind(world_id)
        .fetch_all(&self.pool)
        .await?;

        let mut organizations: Vec<Organization> = rows
            .iter()
            .map(|row| Organization {
                id: row.get("id"),
                world_id: row.get("world_id"),
                name: row.get("name"),
                category: row.get("category"),
                description: row.get("description"),
                power_level: row.get("power_level"),
                is_active: row.get("is_active"),
                ranks: Vec::new(),
            })
            .collect();

        let rank_rows = sqlx::query(
            "SELECT r.id, r.organization_id, r.title, r.authority, r.sort_order \
             FROM organization_ranks r \
             JOIN organizations o ON o.id = r.organization_id \
             WHERE o.world_id = $1 ORDER BY r.organization_id, r.sort_order",
        )
        .bind(world_id)
        .fetch_all(&self.pool)
        .await?;

        for row in &rank_rows {
            let rank = Rank {
                id: row.get("id"),
                organization_id: row.get("organization_id"),
                title: row.get("title"),
                authority: row.get("authority"),
                sort_order: row.get("sort_order"),
            };
            if let Some(org) = organizations
                .iter_mut()
                .find(|o| o.id == rank.organization_id)
            {
                org.ranks.push(rank);
            }
        }

        Ok(organizations)
    }

    async fn npcs(&self, world_id: WorldId) -> Result<Vec<Npc>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, world_id, location_id, name, age, gender, profession, \
                    social_class, personality, is_alive \
             FROM npcs WHERE world_id = $1 ORDER BY id",
        )
        .bind(world_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(npc_from_row).collect()
    }

    async fn memberships(&self, world_id: WorldId) -> Result<Vec<Membership>, StoreError> {
        let rows = sqlx::query(
            "SELECT m.id, m.npc_id, m.organization_id, m.rank_id, m.status, m.joined_at \
             FROM organization_memberships m \
             JOIN npcs n ON n.id = m.npc_id \
             WHERE n.world_id = $1 ORDER BY m.id",
        )
        .bind(world_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .iter()
            .map(|row| Membership {
                id: row.get("id"),
                npc_id: row.get("npc_id"),
                organization_id: row.get("organization_id"),
                rank_id: row.get("rank_id"),
                status: row.get("status"),
                joined_at: row.get("joined_at"),
            })
            .collect())
    }

    async fn relationships(&self, world_id: WorldId) -> Result<Vec<Relationship>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, world_id, from_npc_id, to_npc_id, kind, subtype, strength, is_public \
             FROM npc_relationships WHERE world_id = $1 ORDER BY id",
        )
        .bind(world_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(relationship_from_row).collect())
    }

    async fn generation_records(
        &self,
        world_id: WorldId,
    ) -> Result<Vec<GenerationRecord>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, world_id, seed, population_size, organization_count, \
                    family_density, generated_at \
             FROM npc_generation_configs WHERE world_id = $1 ORDER BY id",
        )
        .bind(world_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .iter()
            .map(|row| GenerationRecord {
                id: row.get("id"),
                world_id: row.get("world_id"),
                seed: row.get::<i64, _>("seed") as u64,
                population_size: row.get::<i32, _>("population_size") as u32,
                organization_count: row.get::<i32, _>("organization_count") as u32,
                family_density: row.get("family_density"),
                generated_at: row.get("generated_at"),
            })
            .collect())
    }

    async fn relationship_exists(&self, a: i64, b: i64) -> Result<bool, StoreError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(\
                SELECT 1 FROM npc_relationships \
                WHERE (from_npc_id = $1 AND to_npc_id = $2) \
                   OR (from_npc_id = $2 AND to_npc_id = $1))",
        )
        .bind(a)
        .bind(b)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}
