//! Model registry: named scored models and their aggregated scores.

use crate::config::BoardConfig;
use crate::dataset::DatasetTag;
use crate::error::{BoardError, Result};
use crate::figure::{Bar, BarPanel, ConfusionGrid, GridLayout, MetricBarFigure, RocFigure};
use crate::metrics::Metric;
use crate::model::ScoredModel;
use crate::scores::{ScoreRecord, ScoreTable};

/// Registry of every model being compared, kept in insertion order.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: Vec<ScoredModel>,
    config: BoardConfig,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self {
            models: Vec::new(),
            config: BoardConfig::default(),
        }
    }

    pub fn with_config(config: BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            models: Vec::new(),
            config,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Register a model. A model with the same name is replaced in place,
    /// keeping its original position. Models without their own
    /// zero-division value take the registry's `metrics.zero_division`.
    pub fn add(&mut self, mut model: ScoredModel) {
        model.inherit_zero_division(self.config.metrics.zero_division);
        match self.models.iter_mut().find(|m| m.name() == model.name()) {
            Some(existing) => {
                tracing::warn!(model = %model.name(), "Replacing registered model");
                *existing = model;
            }
            None => {
                tracing::info!(model = %model.name(), scores = model.scores().len(), "Registered model");
                self.models.push(model);
            }
        }
    }

    /// Remove and return a model by name.
    pub fn remove(&mut self, name: &str) -> Result<ScoredModel> {
        let idx = self
            .models
            .iter()
            .position(|m| m.name() == name)
            .ok_or_else(|| BoardError::not_found(format!("model '{name}'")))?;
        tracing::info!(model = name, "Removed model");
        Ok(self.models.remove(idx))
    }

    pub fn clear(&mut self) {
        tracing::info!(count = self.models.len(), "Cleared model registry");
        self.models.clear();
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.name()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&ScoredModel> {
        self.models.iter().find(|m| m.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ScoredModel> {
        self.models.iter_mut().find(|m| m.name() == name)
    }

    pub fn models(&self) -> &[ScoredModel] {
        &self.models
    }

    /// Run the train/test scoring pass on every model. Stops at the first error.
    pub fn fit_all_train_test(&mut self) -> Result<()> {
        for model in &mut self.models {
            model.fit_train_test()?;
        }
        tracing::info!(count = self.models.len(), "Scored train and test splits");
        Ok(())
    }

    /// Refit every model on its full data and score its validation split.
    /// Stops at the first error; models validated before it keep their scores.
    pub fn validate_all(&mut self) -> Result<()> {
        for model in &mut self.models {
            model.fit_validate()?;
        }
        tracing::info!(count = self.models.len(), "Validated models");
        Ok(())
    }

    /// Aggregate score table across all registered models, optionally
    /// restricted to one metric.
    ///
    /// The table is rebuilt from the models on every call, so it always
    /// reflects exactly the registered models and their latest scores.
    pub fn scores(&self, metric: Option<Metric>) -> ScoreTable {
        self.models
            .iter()
            .flat_map(|m| m.scores().iter())
            .filter(|r| metric.is_none_or(|wanted| r.metric == wanted))
            .cloned()
            .collect()
    }

    /// Like [`scores`](Self::scores) with the metric given by name.
    pub fn scores_by_name(&self, metric: &str) -> Result<ScoreTable> {
        Ok(self.scores(Some(metric.parse()?)))
    }

    /// Best scoring model for a metric on a dataset.
    pub fn best_model(&self, metric: Metric, dataset: DatasetTag) -> Option<ScoreRecord> {
        self.scores(Some(metric)).best_by(metric, dataset).cloned()
    }

    /// ROC curves of every model on one dataset, overlaid.
    pub fn roc_figure(&self, dataset: DatasetTag) -> Result<RocFigure> {
        let series = self
            .models
            .iter()
            .map(|m| m.roc_curve_data(dataset))
            .collect::<Result<Vec<_>>>()?;
        Ok(RocFigure {
            title: format!("Model ROC Curves for {} Data", dataset.title()),
            dataset,
            series,
        })
    }

    /// One bar panel per metric scored on `dataset`, bars in insertion order.
    pub fn metric_bar_figure(&self, dataset: DatasetTag) -> MetricBarFigure {
        let table = self.scores(None).filter_dataset(dataset);
        let panels = table
            .metrics()
            .into_iter()
            .map(|metric| BarPanel {
                metric,
                bars: self
                    .models
                    .iter()
                    .map(|m| Bar {
                        model: m.name().to_string(),
                        value: table.get(m.name(), dataset, metric),
                    })
                    .collect(),
            })
            .collect();
        MetricBarFigure {
            title: format!("Model Metrics for {} Data", dataset.title()),
            dataset,
            col_wrap: self.config.plots.bar_columns,
            panels,
        }
    }

    /// Dataset used by the `default_*` figure helpers (`plots.default_dataset`).
    pub fn default_dataset(&self) -> DatasetTag {
        self.config.plots.default_dataset
    }

    /// [`roc_figure`](Self::roc_figure) on the configured default dataset.
    pub fn default_roc_figure(&self) -> Result<RocFigure> {
        self.roc_figure(self.default_dataset())
    }

    /// [`metric_bar_figure`](Self::metric_bar_figure) on the configured default dataset.
    pub fn default_metric_bar_figure(&self) -> MetricBarFigure {
        self.metric_bar_figure(self.default_dataset())
    }

    /// [`confusion_grid`](Self::confusion_grid) on the configured default dataset.
    pub fn default_confusion_grid(&self) -> Result<ConfusionGrid> {
        self.confusion_grid(self.default_dataset())
    }

    /// Confusion matrices of every model laid out in a fixed number of rows.
    pub fn confusion_grid(&self, dataset: DatasetTag) -> Result<ConfusionGrid> {
        let plots = &self.config.plots;
        let layout = GridLayout::for_panels(self.models.len(), plots.grid_rows, plots.panel_size);
        let mut cells = vec![None; layout.cells()];
        for (cell, model) in cells.iter_mut().zip(&self.models) {
            *cell = Some(model.confusion_matrix_data(dataset, plots.normalize)?);
        }
        Ok(ConfusionGrid {
            title: format!("Model Confusion Matrices for {} Data", dataset.title()),
            dataset,
            layout,
            cells,
        })
    }
}
