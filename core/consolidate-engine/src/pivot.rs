//! FILENAME: core/consolidate-engine/src/pivot.rs
//! Pivoter - renders the aggregated sparse map into a dense wide table.
//!
//! Output shape: one fixed leading entity-label column, then metric
//! columns sorted ascending by code point; one row per entity in global
//! first-seen order. Missing `(entity, metric)` pairs render as
//! `CellValue::Empty` — the explicit missing marker — never as 0 or "".
//! This step is pure and total: it cannot fail on valid aggregator state.

use engine::CellValue;

use crate::aggregate::{Aggregate, EntityId, MetricId};
use crate::definition::ConsolidateOptions;

/// The final wide table: a header row plus row-major data cells.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsolidatedTable {
    /// Column labels: entity-label column first, then sorted metric names.
    pub columns: Vec<String>,
    /// One row per entity. `rows[i][0]` is the entity name as Text; the
    /// remaining cells line up with `columns[1..]`.
    pub rows: Vec<Vec<CellValue>>,
}

impl ConsolidatedTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// Pivots the aggregate into a `ConsolidatedTable`.
pub fn build_table(aggregate: &Aggregate, options: &ConsolidateOptions) -> ConsolidatedTable {
    // Metric columns: deduplicated set, sorted by code point. The sort is
    // over (name, first-seen id) pairs so value lookups keep their ids.
    let mut metric_columns: Vec<(&String, MetricId)> = aggregate
        .metrics()
        .iter()
        .enumerate()
        .map(|(id, name)| (name, id as MetricId))
        .collect();
    metric_columns.sort_by(|a, b| a.0.cmp(b.0));

    let mut columns = Vec::with_capacity(1 + metric_columns.len());
    columns.push(options.entity_column_label.clone());
    columns.extend(metric_columns.iter().map(|(name, _)| (*name).clone()));

    let mut rows = Vec::with_capacity(aggregate.entities().len());
    for (entity_id, entity) in aggregate.entities().iter().enumerate() {
        let mut row = Vec::with_capacity(columns.len());
        row.push(CellValue::Text(entity.clone()));
        for &(_, metric_id) in &metric_columns {
            let cell = aggregate
                .value(entity_id as EntityId, metric_id)
                .cloned()
                .unwrap_or(CellValue::Empty);
            row.push(cell);
        }
        rows.push(row);
    }

    ConsolidatedTable { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::MergePolicy;
    use crate::extract::{BlockData, MetricRow};

    fn num(n: f64) -> CellValue {
        CellValue::Number(n)
    }

    fn aggregate_of(blocks: Vec<BlockData>) -> Aggregate {
        let mut agg = Aggregate::new();
        for b in &blocks {
            agg.fold_block(b, MergePolicy::LastWins).unwrap();
        }
        agg
    }

    fn block(entities: &[&str], rows: Vec<(&str, Vec<Option<CellValue>>)>) -> BlockData {
        BlockData {
            entities: entities.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|(label, values)| MetricRow {
                    label: label.to_string(),
                    values: values.into_iter().collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn columns_are_entity_label_then_sorted_metrics() {
        let agg = aggregate_of(vec![block(
            &["E1"],
            vec![
                ("zeta", vec![Some(num(1.0))]),
                ("alpha", vec![Some(num(2.0))]),
                ("beta", vec![Some(num(3.0))]),
            ],
        )]);
        let table = build_table(&agg, &ConsolidateOptions::default());

        assert_eq!(table.columns, vec!["县域", "alpha", "beta", "zeta"]);
        assert_eq!(table.rows[0][1], num(2.0));
        assert_eq!(table.rows[0][2], num(3.0));
        assert_eq!(table.rows[0][3], num(1.0));
    }

    #[test]
    fn missing_cells_render_as_empty_not_zero() {
        let agg = aggregate_of(vec![block(
            &["E1", "E2"],
            vec![("m1", vec![Some(num(10.0)), None])],
        )]);
        let table = build_table(&agg, &ConsolidateOptions::default());

        assert_eq!(table.rows[1][0], CellValue::Text("E2".to_string()));
        assert_eq!(table.rows[1][1], CellValue::Empty);
    }

    #[test]
    fn shape_matches_entity_and_metric_counts() {
        let agg = aggregate_of(vec![
            block(&["E1", "E2"], vec![("a", vec![Some(num(1.0)), None])]),
            block(&["E3"], vec![("b", vec![Some(num(2.0))])]),
        ]);
        let table = build_table(&agg, &ConsolidateOptions::default());

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 1 + 2);
    }

    #[test]
    fn empty_aggregate_produces_header_only() {
        let table = build_table(&Aggregate::new(), &ConsolidateOptions::default());

        assert_eq!(table.columns, vec!["县域"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn code_point_sort_handles_cjk_labels() {
        let agg = aggregate_of(vec![block(
            &["E1"],
            vec![
                ("地区生产总值", vec![Some(num(1.0))]),
                ("GDP", vec![Some(num(2.0))]),
                ("人口", vec![Some(num(3.0))]),
            ],
        )]);
        let table = build_table(&agg, &ConsolidateOptions::default());

        // ASCII sorts before CJK; 人 (U+4EBA) before 地 (U+5730).
        assert_eq!(table.columns[1..], ["GDP", "人口", "地区生产总值"]);
    }
}
