//! FILENAME: core/consolidate-engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsolidateError {
    #[error("conflicting values for entity '{entity}', metric '{metric}'")]
    MergeConflict { entity: String, metric: String },

    #[error("cannot sum non-numeric values for entity '{entity}', metric '{metric}'")]
    NonNumericSum { entity: String, metric: String },
}
