//! Plot-ready figure data.
//!
//! Nothing here draws. Each figure is a plain serializable structure that a
//! renderer (see the `modelboard-render` crate) or an external plotting tool
//! turns into pixels or text.

use crate::dataset::DatasetTag;
use crate::metrics::{Metric, Normalize};
use serde::{Deserialize, Serialize};

/// One model's ROC curve on a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocSeries {
    pub model: String,
    pub fpr: Vec<f64>,
    pub tpr: Vec<f64>,
    pub auc: f64,
}

/// ROC curves of every registered model overlaid on one set of axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocFigure {
    pub title: String,
    pub dataset: DatasetTag,
    pub series: Vec<RocSeries>,
}

/// A model's bar within a metric panel. `value` is `None` when the model has
/// not been scored on the figure's dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub model: String,
    pub value: Option<f64>,
}

/// One metric's panel of horizontal bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPanel {
    pub metric: Metric,
    pub bars: Vec<Bar>,
}

/// Grouped bar chart: one panel per metric, wrapped into `col_wrap` columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricBarFigure {
    pub title: String,
    pub dataset: DatasetTag,
    pub col_wrap: usize,
    pub panels: Vec<BarPanel>,
}

impl MetricBarFigure {
    /// `(row, col)` of the panel at `index` under the column wrap.
    pub fn panel_position(&self, index: usize) -> (usize, usize) {
        let cols = self.col_wrap.max(1);
        (index / cols, index % cols)
    }
}

/// A single model's confusion matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfusionPanel {
    pub model: String,
    pub counts: [[usize; 2]; 2],
    pub normalized: [[f64; 2]; 2],
    pub normalize: Normalize,
    /// Colour scale limits; fixed to `(0, 1)` for normalized matrices.
    pub clim: (f64, f64),
}

/// Row/column arrangement and overall size (inches) of a panel grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub nrows: usize,
    pub ncols: usize,
    pub width: f64,
    pub height: f64,
}

impl GridLayout {
    /// Lay out `panels` panels in `nrows` rows, filling row by row.
    pub fn for_panels(panels: usize, nrows: usize, panel_size: f64) -> Self {
        let nrows = nrows.max(1);
        let ncols = panels.div_ceil(nrows).max(1);
        Self {
            nrows,
            ncols,
            width: ncols as f64 * panel_size,
            height: nrows as f64 * panel_size,
        }
    }

    pub fn cells(&self) -> usize {
        self.nrows * self.ncols
    }

    /// `(row, col)` of the cell at `index`.
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.ncols, index % self.ncols)
    }
}

/// Confusion matrices for every model, arranged in a grid. Unused cells are
/// `None` and should be drawn with their axes switched off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfusionGrid {
    pub title: String,
    pub dataset: DatasetTag,
    pub layout: GridLayout,
    pub cells: Vec<Option<ConfusionPanel>>,
}

impl ConfusionGrid {
    pub fn get(&self, row: usize, col: usize) -> Option<&ConfusionPanel> {
        if row >= self.layout.nrows || col >= self.layout.ncols {
            return None;
        }
        self.cells
            .get(row * self.layout.ncols + col)
            .and_then(Option::as_ref)
    }
}
