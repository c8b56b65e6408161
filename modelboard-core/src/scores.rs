//! Score records and the keyed table that accumulates them.

use crate::dataset::DatasetTag;
use crate::error::Result;
use crate::metrics::Metric;
use serde::{Deserialize, Serialize};

/// One `(model, dataset, metric, value)` observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub model: String,
    pub dataset: DatasetTag,
    pub metric: Metric,
    pub value: f64,
}

impl ScoreRecord {
    pub fn new(model: &str, dataset: DatasetTag, metric: Metric, value: f64) -> Self {
        Self {
            model: model.to_string(),
            dataset,
            metric,
            value,
        }
    }

    fn same_key(&self, other: &ScoreRecord) -> bool {
        self.metric == other.metric && self.dataset == other.dataset && self.model == other.model
    }
}

/// Ordered table of score records, unique per `(model, dataset, metric)`.
///
/// Re-inserting an existing key replaces its value in place, so re-running
/// a scoring pass never produces duplicate rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreTable {
    records: Vec<ScoreRecord>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn upsert(&mut self, record: ScoreRecord) {
        match self.records.iter_mut().find(|r| r.same_key(&record)) {
            Some(existing) => existing.value = record.value,
            None => self.records.push(record),
        }
    }

    pub fn extend<I: IntoIterator<Item = ScoreRecord>>(&mut self, records: I) {
        for record in records {
            self.upsert(record);
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoreRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn get(&self, model: &str, dataset: DatasetTag, metric: Metric) -> Option<f64> {
        self.records
            .iter()
            .find(|r| r.model == model && r.dataset == dataset && r.metric == metric)
            .map(|r| r.value)
    }

    pub fn filter_metric(&self, metric: Metric) -> ScoreTable {
        self.filtered(|r| r.metric == metric)
    }

    pub fn filter_dataset(&self, dataset: DatasetTag) -> ScoreTable {
        self.filtered(|r| r.dataset == dataset)
    }

    pub fn filter_model(&self, model: &str) -> ScoreTable {
        self.filtered(|r| r.model == model)
    }

    /// Drop every record for `dataset`.
    pub fn remove_dataset(&mut self, dataset: DatasetTag) {
        self.records.retain(|r| r.dataset != dataset);
    }

    /// Metrics present in the table, in canonical order.
    pub fn metrics(&self) -> Vec<Metric> {
        Metric::ALL
            .into_iter()
            .filter(|m| self.records.iter().any(|r| r.metric == *m))
            .collect()
    }

    /// Model with the highest `metric` on `dataset`. Ties keep the earliest row.
    pub fn best_by(&self, metric: Metric, dataset: DatasetTag) -> Option<&ScoreRecord> {
        self.records
            .iter()
            .filter(|r| r.metric == metric && r.dataset == dataset)
            .fold(None, |best: Option<&ScoreRecord>, r| match best {
                Some(b) if b.value >= r.value => Some(b),
                _ => Some(r),
            })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn filtered(&self, keep: impl Fn(&ScoreRecord) -> bool) -> ScoreTable {
        ScoreTable {
            records: self.records.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }
}

impl IntoIterator for ScoreTable {
    type Item = ScoreRecord;
    type IntoIter = std::vec::IntoIter<ScoreRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ScoreTable {
    type Item = &'a ScoreRecord;
    type IntoIter = std::slice::Iter<'a, ScoreRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<ScoreRecord> for ScoreTable {
    fn from_iter<I: IntoIterator<Item = ScoreRecord>>(iter: I) -> Self {
        let mut table = ScoreTable::new();
        table.extend(iter);
        table
    }
}
