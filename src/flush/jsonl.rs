use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::model::WorldId;
use crate::store::{PopulationStore, StoreError};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Dump one world's generated records to JSONL files in `output_dir`.
///
/// Creates the output directory if it does not exist. Writes 6 files:
/// `locations.jsonl`, `organizations.jsonl` (ranks inline), `npcs.jsonl`,
/// `memberships.jsonl`, `relationships.jsonl`, `generation_records.jsonl`.
pub async fn export_population<S: PopulationStore>(
    store: &S,
    world_id: WorldId,
    output_dir: &Path,
) -> Result<(), ExportError> {
    fs::create_dir_all(output_dir)?;

    write_jsonl(
        &output_dir.join("locations.jsonl"),
        store.locations(world_id).await?.into_iter(),
    )?;
    write_jsonl(
        &output_dir.join("organizations.jsonl"),
        store.organizations(world_id).await?.into_iter(),
    )?;
    write_jsonl(
        &output_dir.join("npcs.jsonl"),
        store.npcs(world_id).await?.into_iter(),
    )?;
    write_jsonl(
        &output_dir.join("memberships.jsonl"),
        store.memberships(world_id).await?.into_iter(),
    )?;
    write_jsonl(
        &output_dir.join("relationships.jsonl"),
        store.relationships(world_id).await?.into_iter(),
    )?;
    write_jsonl(
        &output_dir.join("generation_records.jsonl"),
        store.generation_records(world_id).await?.into_iter(),
    )?;

    Ok(())
}
