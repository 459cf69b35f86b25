use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

/// The three record categories flowing through the pipeline, in the fixed
/// order they are processed and reported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Entity {
    Customers,
    Products,
    Sales,
}

impl Entity {
    pub const ALL: [Entity; 3] = [Entity::Customers, Entity::Products, Entity::Sales];
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Customers => write!(f, "customers"),
            Entity::Products => write!(f, "products"),
            Entity::Sales => write!(f, "sales"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Processed,
    Duplicates,
    Missing,
    Loaded,
}

/// Per-entity data-quality counters. Mutated monotonically through a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityStats {
    pub processed: usize,
    pub duplicates: usize,
    pub missing: usize,
    pub loaded: usize,
}

/// Accumulates quality counters across the run. One instance is threaded
/// through transformer and loader calls; no ambient state.
#[derive(Debug)]
pub struct QualityTracker {
    stats: BTreeMap<Entity, QualityStats>,
}

impl QualityTracker {
    pub fn new() -> Self {
        let stats = Entity::ALL
            .iter()
            .map(|e| (*e, QualityStats::default()))
            .collect();
        QualityTracker { stats }
    }

    pub fn record(&mut self, entity: Entity, counter: Counter, delta: usize) {
        let stats = self.stats.entry(entity).or_default();
        match counter {
            Counter::Processed => stats.processed += delta,
            Counter::Duplicates => stats.duplicates += delta,
            Counter::Missing => stats.missing += delta,
            Counter::Loaded => stats.loaded += delta,
        }
    }

    /// Immutable view of the counters, in report order.
    pub fn snapshot(&self) -> QualityReport {
        QualityReport {
            entries: self.stats.iter().map(|(e, s)| (*e, *s)).collect(),
        }
    }
}

impl Default for QualityTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    entries: Vec<(Entity, QualityStats)>,
}

impl QualityReport {
    pub fn entries(&self) -> &[(Entity, QualityStats)] {
        &self.entries
    }

    pub fn stats(&self, entity: Entity) -> Option<&QualityStats> {
        self.entries.iter().find(|(e, _)| *e == entity).map(|(_, s)| s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut tracker = QualityTracker::new();
        tracker.record(Entity::Customers, Counter::Processed, 4);
        tracker.record(Entity::Customers, Counter::Duplicates, 1);
        tracker.record(Entity::Customers, Counter::Loaded, 2);
        tracker.record(Entity::Customers, Counter::Loaded, 1);

        let report = tracker.snapshot();
        let stats = report.stats(Entity::Customers).unwrap();
        assert_eq!(stats.processed, 4);
        assert_eq!(stats.duplicates, 1);
        assert_eq!(stats.missing, 0);
        assert_eq!(stats.loaded, 3);
    }

    #[test]
    fn snapshot_preserves_entity_order() {
        let tracker = QualityTracker::new();
        let report = tracker.snapshot();
        let order: Vec<Entity> = report.entries().iter().map(|(e, _)| *e).collect();
        assert_eq!(
            order,
            vec![Entity::Customers, Entity::Products, Entity::Sales]
        );
    }
}
