//! FILENAME: core/consolidate-engine/src/extract.rs
//! Block Extractor - pulls entity names and metric values out of one block.
//!
//! A block spans the row range `[start, end)` where `start` is the header
//! row located by the scanner and `end` is the next header (or the grid's
//! row count). Entity names come from header columns 2.., metric rows from
//! the rows below, minus category dividers.

use engine::{CellValue, Grid};
use rustc_hash::FxHashMap;
use smallvec::{smallvec, SmallVec};
use tracing::debug;

use crate::definition::is_divider_label;

/// One metric row within a block: a label and one slot per block entity.
/// `values[j]` corresponds to `entities[j]`; `None` means the cell was
/// empty in the source and stays missing.
#[derive(Debug, Clone)]
pub struct MetricRow {
    pub label: String,
    pub values: SmallVec<[Option<CellValue>; 8]>,
}

/// The extraction result of a single block.
#[derive(Debug, Clone, Default)]
pub struct BlockData {
    /// Entity names in column order (block-local order).
    pub entities: Vec<String>,
    /// Metric rows in first-appearance order. Duplicate labels within the
    /// block have already been folded last-row-wins.
    pub rows: Vec<MetricRow>,
}

/// Extracts entities and metric values from the block `[start, end)`.
///
/// A block with zero entity columns or zero metric rows is valid and
/// produces an accordingly empty `BlockData`.
pub fn extract_block(grid: &Grid, start: u32, end: u32) -> BlockData {
    // 1. Entity names: header row, columns 2..last, trimmed, non-empty.
    let mut entities = Vec::new();
    for col in 2..grid.cols() {
        if let Some(name) = grid.trimmed_label(start, col) {
            entities.push(name);
        }
    }

    // 2. Data rows. Duplicate metric labels within the block overwrite the
    //    earlier values they touch, so rows are keyed by label.
    let mut rows: Vec<MetricRow> = Vec::new();
    let mut row_index: FxHashMap<String, usize> = FxHashMap::default();

    for row in (start + 1)..end {
        let Some(label) = grid.trimmed_label(row, 0) else {
            continue;
        };
        if is_divider_label(&label) {
            continue;
        }

        let index = *row_index.entry(label.clone()).or_insert_with(|| {
            rows.push(MetricRow {
                label,
                values: smallvec![None; entities.len()],
            });
            rows.len() - 1
        });

        // 3. Entity j reads grid column 2 + j. Empty cells record nothing
        //    and, on a duplicate label, leave the earlier value in place.
        for (j, slot) in rows[index].values.iter_mut().enumerate() {
            let value = grid.value(row, 2 + j as u32);
            if !value.is_empty() {
                *slot = Some(value.clone());
            }
        }
    }

    debug!(
        start,
        end,
        entities = entities.len(),
        metrics = rows.len(),
        "extracted block"
    );

    BlockData { entities, rows }
}
