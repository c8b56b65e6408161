//! # modelboard-core — side-by-side comparison of binary classifiers
//!
//! Wrap each trained estimator with its data splits in a [`ScoredModel`],
//! register it with a [`ModelRegistry`], run the scoring passes, and pull out
//! the aggregated [`ScoreTable`] or plot-ready figures (ROC overlays, metric
//! bar panels, confusion matrix grids).
//!
//! ```
//! use modelboard_core::{Estimator, ModelRegistry, Partitions, ScoredModel, Split};
//! use modelboard_core::error::Result;
//!
//! #[derive(Debug)]
//! struct Sign;
//!
//! impl Estimator for Sign {
//!     fn fit(&mut self, _inputs: &[Vec<f64>], _labels: &[bool]) -> Result<()> {
//!         Ok(())
//!     }
//!     fn predict(&self, inputs: &[Vec<f64>]) -> Result<Vec<bool>> {
//!         Ok(inputs.iter().map(|row| row[0] > 0.0).collect())
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let split = Split::new(vec![vec![-1.0], vec![1.0]], vec![false, true])?;
//! let parts = Partitions::new(split.clone(), split.clone(), split.clone(), split);
//!
//! let mut model = ScoredModel::new("sign", Box::new(Sign), parts);
//! model.fit_train_test()?;
//!
//! let mut registry = ModelRegistry::new();
//! registry.add(model);
//! registry.validate_all()?;
//! assert_eq!(registry.scores(None).len(), 12);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod estimator;
pub mod figure;
pub mod metrics;
pub mod model;
pub mod registry;
pub mod scores;

pub use config::{BoardConfig, load_config};
pub use dataset::{DatasetTag, Partitions, Split};
pub use error::BoardError;
pub use estimator::Estimator;
pub use figure::{ConfusionGrid, MetricBarFigure, RocFigure};
pub use metrics::{Metric, Normalize};
pub use model::{ModelInfo, ScoredModel};
pub use registry::ModelRegistry;
pub use scores::{ScoreRecord, ScoreTable};
