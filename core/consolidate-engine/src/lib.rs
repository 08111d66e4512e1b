//! FILENAME: core/consolidate-engine/src/lib.rs
//! Workbook consolidation subsystem.
//!
//! This crate turns workbooks full of repeated, irregularly placed
//! sub-tables ("blocks") into one normalized wide table: entities as rows
//! in first-seen order, metrics as deduplicated sorted columns, missing
//! values kept explicit. It depends on `engine` only for the shared data
//! model (CellValue, Grid, Workbook).
//!
//! Layers:
//! - `definition`: Serializable configuration (markers, merge policy)
//! - `scanner`:    Locates block header rows in a grid
//! - `extract`:    Pulls entities and metric values out of one block
//! - `aggregate`:  Folds all blocks into one global value space
//! - `pivot`:      Renders the fold result as a dense wide table
//! - `engine`:     The pipeline driver tying the layers together

pub mod aggregate;
pub mod definition;
pub mod engine;
pub mod error;
pub mod extract;
pub mod pivot;
pub mod scanner;

pub use aggregate::{Aggregate, EntityId, MetricId};
pub use definition::{is_divider_label, ConsolidateOptions, MergePolicy, DIVIDER_PREFIXES};
pub use crate::engine::consolidate;
pub use error::ConsolidateError;
pub use extract::{extract_block, BlockData, MetricRow};
pub use pivot::{build_table, ConsolidatedTable};
pub use scanner::find_block_starts;
