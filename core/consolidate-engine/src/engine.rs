//! FILENAME: core/consolidate-engine/src/engine.rs
//! Pipeline driver - scan, extract, fold, pivot.
//!
//! The run is a linear pipeline with no suspended states: for each sheet
//! the scanner yields block starts, each block is extracted, every
//! extraction is folded into one Aggregate, and the pivoter renders the
//! final table once. Sheets fold strictly in workbook order and blocks in
//! row order, which pins down the "first seen" and "last wins" semantics.

use engine::Workbook;
use tracing::{debug, info};

use crate::aggregate::Aggregate;
use crate::definition::ConsolidateOptions;
use crate::error::ConsolidateError;
use crate::extract::extract_block;
use crate::pivot::{build_table, ConsolidatedTable};
use crate::scanner::find_block_starts;

/// Runs the whole consolidation pipeline over a workbook.
///
/// Sheets without qualifying block headers contribute nothing and are not
/// an error. The only failure surfaces are the merge policies that reject
/// conflicts (`Error`, `Sum` on non-numbers).
pub fn consolidate(
    workbook: &Workbook,
    options: &ConsolidateOptions,
) -> Result<ConsolidatedTable, ConsolidateError> {
    let mut aggregate = Aggregate::new();
    let mut total_blocks = 0usize;

    for sheet in &workbook.sheets {
        let starts = find_block_starts(&sheet.grid, options);
        debug!(sheet = %sheet.name, blocks = starts.len(), "scanned sheet");
        total_blocks += starts.len();

        for (i, &start) in starts.iter().enumerate() {
            let end = starts
                .get(i + 1)
                .copied()
                .unwrap_or_else(|| sheet.grid.rows());
            let block = extract_block(&sheet.grid, start, end);
            aggregate.fold_block(&block, options.merge_policy)?;
        }
    }

    info!(
        blocks = total_blocks,
        entities = aggregate.entities().len(),
        metrics = aggregate.metrics().len(),
        values = aggregate.value_count(),
        "consolidation complete"
    );

    Ok(build_table(&aggregate, options))
}
