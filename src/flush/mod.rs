pub mod jsonl;

pub use jsonl::{ExportError, export_population};
