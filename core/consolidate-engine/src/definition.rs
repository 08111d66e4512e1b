//! FILENAME: core/consolidate-engine/src/definition.rs
//! Consolidation Definition - The serializable configuration.
//!
//! This module contains the types needed to DESCRIBE a consolidation run.
//! These structures are designed to be:
//! - Serializable (for saving/loading run configurations)
//! - Immutable snapshots of caller intent

use serde::{Deserialize, Serialize};

// ============================================================================
// DIVIDER PREFIXES
// ============================================================================

/// The closed set of category-divider prefixes. A data row whose label
/// starts with one of these is a section heading ("一、基本情况" etc.),
/// not a metric, and is excluded from extraction.
///
/// This is an enumerated constant set checked with exact prefix
/// comparison — deliberately not a pattern language.
pub const DIVIDER_PREFIXES: [&str; 8] = [
    "一、", "二、", "三、", "四、", "五、", "六、", "七、", "八、",
];

/// Whether a trimmed row label is a category divider rather than a metric.
pub fn is_divider_label(label: &str) -> bool {
    DIVIDER_PREFIXES
        .iter()
        .any(|prefix| label.starts_with(prefix))
}

// ============================================================================
// MERGE POLICY
// ============================================================================

/// How to resolve an `(entity, metric)` pair emitted by more than one block.
///
/// Blocks are folded in sheet order, then block order within a sheet, so
/// "first" and "last" are defined relative to that total processing order.
/// Duplicate metric labels *within* a single block are always resolved
/// last-row-wins by the extractor, before any policy applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergePolicy {
    /// The value from the last block processed wins (the historical
    /// behavior of sequential folding).
    LastWins,
    /// The value from the first block that set the pair is kept.
    FirstWins,
    /// Any re-emission of an already-set pair fails the run, even when
    /// the values are equal.
    Error,
    /// Numeric values add up; a non-numeric operand on either side fails
    /// the run.
    Sum,
}

impl Default for MergePolicy {
    fn default() -> Self {
        MergePolicy::LastWins
    }
}

// ============================================================================
// OPTIONS
// ============================================================================

/// The complete, serializable configuration of a consolidation run.
///
/// The defaults match the county-statistics workbooks this engine was
/// built for: a block header row carries `指标` in column A and `单位`
/// in column B, and the output table labels its entity column `县域`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidateOptions {
    /// Exact token expected in column 0 of a block header row.
    pub header_marker: String,

    /// Exact token expected in column 1 of a block header row.
    pub unit_marker: String,

    /// Column label for the leading entity column of the output table.
    pub entity_column_label: String,

    /// Conflict resolution for `(entity, metric)` pairs set by more than
    /// one block.
    #[serde(default)]
    pub merge_policy: MergePolicy,
}

impl Default for ConsolidateOptions {
    fn default() -> Self {
        ConsolidateOptions {
            header_marker: "指标".to_string(),
            unit_marker: "单位".to_string(),
            entity_column_label: "县域".to_string(),
            merge_policy: MergePolicy::LastWins,
        }
    }
}

impl ConsolidateOptions {
    pub fn with_merge_policy(mut self, policy: MergePolicy) -> Self {
        self.merge_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divider_detection_is_prefix_based() {
        assert!(is_divider_label("一、基本情况"));
        assert!(is_divider_label("八、其他"));
        // The bare ordinal without the enumeration comma is a metric.
        assert!(!is_divider_label("一"));
        // Dividers only match at the start of the label.
        assert!(!is_divider_label("人口（一、二类）"));
        assert!(!is_divider_label("GDP"));
    }

    #[test]
    fn options_default_to_last_wins() {
        let options = ConsolidateOptions::default();
        assert_eq!(options.merge_policy, MergePolicy::LastWins);
        assert_eq!(options.header_marker, "指标");
        assert_eq!(options.unit_marker, "单位");
    }
}
