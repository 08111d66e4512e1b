//! FILENAME: core/consolidate-engine/src/scanner.rs
//! Grid Scanner - locates block header rows inside one sheet's grid.
//!
//! A row qualifies as a block header iff column 0, trimmed, exactly equals
//! the header marker AND column 1, trimmed, exactly equals the unit marker.
//! Both columns must exist: grids narrower than two columns contain no
//! blocks. A sheet with zero qualifying rows is not an error — it simply
//! contributes nothing to the run.

use engine::Grid;

use crate::definition::ConsolidateOptions;

/// Returns the ordered row indices of every valid block header in `grid`.
/// Single linear pass, O(rows).
pub fn find_block_starts(grid: &Grid, options: &ConsolidateOptions) -> Vec<u32> {
    if grid.cols() < 2 {
        return Vec::new();
    }

    let mut starts = Vec::new();
    for row in 0..grid.rows() {
        let is_header = grid
            .trimmed_label(row, 0)
            .is_some_and(|label| label == options.header_marker)
            && grid
                .trimmed_label(row, 1)
                .is_some_and(|unit| unit == options.unit_marker);
        if is_header {
            starts.push(row);
        }
    }
    starts
}
