//! # modelboard-render — drawing modelboard figures
//!
//! `modelboard-core` only produces figure data. This crate turns that data
//! into output through the [`FigureRenderer`] trait; [`TextRenderer`] draws
//! into plain strings suitable for a terminal. Nothing is written to disk.

pub mod layout;
pub mod text;

pub use text::TextRenderer;

use modelboard_core::{ConfusionGrid, MetricBarFigure, RocFigure, ScoreTable};

/// A backend that can draw every figure modelboard produces.
pub trait FigureRenderer {
    type Output;

    /// ROC curves of several models overlaid, with an AUC legend.
    fn render_roc(&self, figure: &RocFigure) -> Self::Output;

    /// One bar panel per metric, wrapped into the figure's column count.
    fn render_bars(&self, figure: &MetricBarFigure) -> Self::Output;

    /// Confusion matrices arranged on the figure's grid.
    fn render_confusion(&self, figure: &ConfusionGrid) -> Self::Output;

    /// The score table itself.
    fn render_scores(&self, table: &ScoreTable) -> Self::Output;
}
