//! A trained estimator bundled with its data partitions and scores.

use crate::config::check_zero_division;
use crate::dataset::{DatasetTag, Partitions, Split};
use crate::error::Result;
use crate::estimator::{Estimator, checked_predict, checked_scores};
use crate::figure::{ConfusionPanel, RocSeries};
use crate::metrics::{self, ConfusionMatrix, Normalize};
use crate::scores::{ScoreRecord, ScoreTable};
use serde::Serialize;

/// Wraps one estimator together with the splits it is scored on.
#[derive(Debug)]
pub struct ScoredModel {
    name: String,
    estimator: Box<dyn Estimator>,
    partitions: Partitions,
    scores: ScoreTable,
    /// Explicit per-model policy; `None` defers to the registry's config.
    zero_division: Option<f64>,
}

impl ScoredModel {
    pub fn new(name: &str, estimator: Box<dyn Estimator>, partitions: Partitions) -> Self {
        Self {
            name: name.to_string(),
            estimator,
            partitions,
            scores: ScoreTable::new(),
            zero_division: None,
        }
    }

    /// Value reported for precision/recall/F1 when their denominator is zero.
    ///
    /// # Errors
    ///
    /// `Config` unless `zero_division` lies within [0, 1].
    pub fn with_zero_division(mut self, zero_division: f64) -> Result<Self> {
        check_zero_division(zero_division)?;
        self.zero_division = Some(zero_division);
        Ok(self)
    }

    /// Zero-division value used when scoring; 0.0 unless set.
    pub fn zero_division(&self) -> f64 {
        self.zero_division.unwrap_or(0.0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scores recorded so far; empty until a scoring pass runs.
    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    pub fn partitions(&self) -> &Partitions {
        &self.partitions
    }

    pub fn estimator(&self) -> &dyn Estimator {
        self.estimator.as_ref()
    }

    /// Adopt the registry's policy unless the model carries its own.
    pub(crate) fn inherit_zero_division(&mut self, zero_division: f64) {
        self.zero_division.get_or_insert(zero_division);
    }

    /// Fit on the train split, then score predictions on train and test.
    pub fn fit_train_test(&mut self) -> Result<()> {
        let train = &self.partitions.train;
        self.estimator.fit(train.inputs(), train.labels())?;

        let train_pred = checked_predict(self.estimator.as_ref(), train.inputs())?;
        let test = &self.partitions.test;
        let test_pred = checked_predict(self.estimator.as_ref(), test.inputs())?;

        // Compute both before recording so a failure leaves the table untouched.
        let zero_division = self.zero_division();
        let train_scores = metrics::score_all(train.labels(), &train_pred, zero_division)?;
        let test_scores = metrics::score_all(test.labels(), &test_pred, zero_division)?;

        self.record(DatasetTag::Train, train_scores);
        self.record(DatasetTag::Test, test_scores);
        tracing::debug!(model = %self.name, "Scored train and test splits");
        Ok(())
    }

    /// Refit on the full pre-validation data and score the validation split.
    pub fn fit_validate(&mut self) -> Result<()> {
        let full = &self.partitions.full;
        self.estimator.fit(full.inputs(), full.labels())?;

        let validate = &self.partitions.validate;
        let predicted = checked_predict(self.estimator.as_ref(), validate.inputs())?;
        let scores = metrics::score_all(validate.labels(), &predicted, self.zero_division())?;

        self.record(DatasetTag::Validate, scores);
        tracing::debug!(model = %self.name, "Scored validation split");
        Ok(())
    }

    /// Inputs and labels for a dataset tag given by name.
    ///
    /// # Errors
    ///
    /// `InvalidDatasetTag` unless `tag` is `train`, `test` or `validate`.
    pub fn get_split(&self, tag: &str) -> Result<(&[Vec<f64>], &[bool])> {
        let split = self.split(tag.parse()?);
        Ok((split.inputs(), split.labels()))
    }

    pub fn split(&self, tag: DatasetTag) -> &Split {
        self.partitions.get(tag)
    }

    /// ROC curve of the current estimator on a split.
    pub fn roc_curve_data(&self, tag: DatasetTag) -> Result<RocSeries> {
        let split = self.split(tag);
        let scores = checked_scores(self.estimator.as_ref(), split.inputs())?;
        let roc = metrics::roc_curve(&scores, split.labels())?;
        Ok(RocSeries {
            model: self.name.clone(),
            fpr: roc.fpr,
            tpr: roc.tpr,
            auc: roc.auc,
        })
    }

    /// Confusion matrix of the current estimator on a split.
    pub fn confusion_matrix_data(
        &self,
        tag: DatasetTag,
        normalize: Normalize,
    ) -> Result<ConfusionPanel> {
        let split = self.split(tag);
        let predicted = checked_predict(self.estimator.as_ref(), split.inputs())?;
        let cm = ConfusionMatrix::from_labels(split.labels(), &predicted)?;
        let clim = match normalize {
            Normalize::None => (0.0, cm.counts.iter().flatten().copied().max().unwrap_or(0) as f64),
            _ => (0.0, 1.0),
        };
        Ok(ConfusionPanel {
            model: self.name.clone(),
            counts: cm.counts,
            normalized: cm.normalized(normalize),
            normalize,
            clim,
        })
    }

    pub fn info(&self) -> ModelInfo {
        ModelInfo {
            name: self.name.clone(),
            estimator: self.estimator.describe(),
            scored_datasets: DatasetTag::ALL
                .into_iter()
                .filter(|t| self.scores.iter().any(|r| r.dataset == *t))
                .collect(),
        }
    }

    fn record(&mut self, dataset: DatasetTag, scores: Vec<(metrics::Metric, f64)>) {
        for (metric, value) in scores {
            self.scores
                .upsert(ScoreRecord::new(&self.name, dataset, metric, value));
        }
    }
}

/// Summary of a scored model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    pub name: String,
    pub estimator: String,
    pub scored_datasets: Vec<DatasetTag>,
}

impl std::fmt::Display for ModelInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "-------{} Information-------", self.name)?;
        write!(f, "Model: {}", self.estimator)
    }
}
