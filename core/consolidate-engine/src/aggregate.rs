//! FILENAME: core/consolidate-engine/src/aggregate.rs
//! Aggregator - folds per-block extractions into one global value space.
//!
//! Entity and metric names are interned to u32 ids once and referenced by
//! index afterwards, so the value map keys stay small no matter how long
//! the Chinese metric labels get. The fold order (sheets top to bottom,
//! blocks top to bottom within a sheet) is the total order that "first"
//! and "last" in the merge policy refer to.

use engine::CellValue;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::definition::MergePolicy;
use crate::error::ConsolidateError;
use crate::extract::BlockData;

/// Index into the global entity order (0-based, first-seen).
pub type EntityId = u32;

/// Index into the global metric store (0-based, first-seen).
pub type MetricId = u32;

/// The accumulated state of a consolidation run.
///
/// Built fresh per run, consumed by the pivoter, then discarded — there is
/// deliberately no process-wide state anywhere in this crate.
#[derive(Debug, Default)]
pub struct Aggregate {
    entities: Vec<String>,
    entity_ids: FxHashMap<String, EntityId>,
    metrics: Vec<String>,
    metric_ids: FxHashMap<String, MetricId>,
    values: FxHashMap<(EntityId, MetricId), CellValue>,
}

impl Aggregate {
    pub fn new() -> Self {
        Aggregate::default()
    }

    /// Global entity names in first-seen order.
    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    /// Global metric names in first-seen order (the pivoter sorts them).
    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    /// Number of recorded `(entity, metric)` values.
    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    /// Looks up the recorded value for an `(entity, metric)` pair.
    pub fn value(&self, entity: EntityId, metric: MetricId) -> Option<&CellValue> {
        self.values.get(&(entity, metric))
    }

    /// Interns an entity name. The first block that introduces a name fixes
    /// its global position; later blocks reuse it without moving it.
    fn entity_id(&mut self, name: &str) -> EntityId {
        if let Some(&id) = self.entity_ids.get(name) {
            return id;
        }
        let id = self.entities.len() as EntityId;
        self.entities.push(name.to_string());
        self.entity_ids.insert(name.to_string(), id);
        id
    }

    /// Interns a metric name. Deduplication is by exact match — case and
    /// whitespace sensitive.
    fn metric_id(&mut self, name: &str) -> MetricId {
        if let Some(&id) = self.metric_ids.get(name) {
            return id;
        }
        let id = self.metrics.len() as MetricId;
        self.metrics.push(name.to_string());
        self.metric_ids.insert(name.to_string(), id);
        id
    }

    /// Folds one block's extraction into the global state, resolving
    /// repeated `(entity, metric)` pairs per `policy`.
    pub fn fold_block(
        &mut self,
        block: &BlockData,
        policy: MergePolicy,
    ) -> Result<(), ConsolidateError> {
        let entity_ids: SmallVec<[EntityId; 8]> = block
            .entities
            .iter()
            .map(|name| self.entity_id(name))
            .collect();

        for row in &block.rows {
            let metric_id = self.metric_id(&row.label);
            for (j, slot) in row.values.iter().enumerate() {
                let Some(value) = slot else { continue };
                self.merge(entity_ids[j], metric_id, value.clone(), policy)?;
            }
        }
        Ok(())
    }

    fn merge(
        &mut self,
        entity: EntityId,
        metric: MetricId,
        value: CellValue,
        policy: MergePolicy,
    ) -> Result<(), ConsolidateError> {
        use std::collections::hash_map::Entry;

        match self.values.entry((entity, metric)) {
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            }
            Entry::Occupied(mut slot) => match policy {
                MergePolicy::LastWins => {
                    slot.insert(value);
                    Ok(())
                }
                MergePolicy::FirstWins => Ok(()),
                MergePolicy::Error => Err(ConsolidateError::MergeConflict {
                    entity: self.entities[entity as usize].clone(),
                    metric: self.metrics[metric as usize].clone(),
                }),
                MergePolicy::Sum => {
                    match (slot.get().as_number(), value.as_number()) {
                        (Some(a), Some(b)) => {
                            slot.insert(CellValue::Number(a + b));
                            Ok(())
                        }
                        _ => Err(ConsolidateError::NonNumericSum {
                            entity: self.entities[entity as usize].clone(),
                            metric: self.metrics[metric as usize].clone(),
                        }),
                    }
                }
            },
        }
    }
}
