//! Plain-text rendering for terminals and logs.

use crate::FigureRenderer;
use crate::layout::{block_width, hstack, pad_left, pad_right};
use modelboard_core::figure::{BarPanel, ConfusionPanel, RocSeries};
use modelboard_core::{ConfusionGrid, Metric, MetricBarFigure, RocFigure, ScoreTable};
use unicode_width::UnicodeWidthStr;

const MARKERS: [char; 6] = ['*', '+', 'o', 'x', '#', '@'];

/// Renders figures as monospaced text.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    /// Plot area width in columns (ROC and bar charts).
    width: usize,
    /// Plot area height in rows (ROC chart).
    height: usize,
    /// Decimal places for printed values.
    precision: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            width: 40,
            height: 16,
            precision: 3,
        }
    }
}

impl TextRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.max(2),
            height: height.max(2),
            ..Self::default()
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Scores for one metric, the quick look most comparisons start with.
    pub fn render_metric_scores(&self, table: &ScoreTable, metric: Metric) -> String {
        self.render_scores(&table.filter_metric(metric))
    }

    fn fmt_value(&self, v: f64) -> String {
        format!("{v:.prec$}", prec = self.precision)
    }

    fn plot_series(&self, grid: &mut [Vec<char>], series: &RocSeries, marker: char) {
        let (w, h) = (self.width - 1, self.height - 1);
        let cell = |x: f64, y: f64| {
            let col = (x.clamp(0.0, 1.0) * w as f64).round() as usize;
            let row = h - (y.clamp(0.0, 1.0) * h as f64).round() as usize;
            (row, col)
        };
        let points: Vec<(f64, f64)> = series.fpr.iter().copied().zip(series.tpr.iter().copied()).collect();
        for pair in points.windows(2) {
            let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
            // Enough samples to leave no gaps between neighbouring cells.
            let steps = ((x1 - x0).abs() * w as f64)
                .max((y1 - y0).abs() * h as f64)
                .ceil()
                .max(1.0) as usize;
            for s in 0..=steps {
                let t = s as f64 / steps as f64;
                let (row, col) = cell(x0 + (x1 - x0) * t, y0 + (y1 - y0) * t);
                grid[row][col] = marker;
            }
        }
        if let [(x, y)] = points.as_slice() {
            let (row, col) = cell(*x, *y);
            grid[row][col] = marker;
        }
    }

    fn bar_panel(&self, panel: &BarPanel) -> Vec<String> {
        let name_width = panel
            .bars
            .iter()
            .map(|b| unicode_width::UnicodeWidthStr::width(b.model.as_str()))
            .max()
            .unwrap_or(0);
        let mut lines = vec![format!("[{}]", panel.metric)];
        for bar in &panel.bars {
            let body = match bar.value {
                Some(v) => {
                    let len = (v.clamp(0.0, 1.0) * self.width as f64).round() as usize;
                    format!(
                        "{}{} {}",
                        "█".repeat(len),
                        " ".repeat(self.width - len),
                        self.fmt_value(v)
                    )
                }
                None => format!("{} n/a", " ".repeat(self.width)),
            };
            lines.push(format!("{} |{}", pad_right(&bar.model, name_width), body));
        }
        lines
    }

    fn confusion_block(&self, panel: &ConfusionPanel) -> Vec<String> {
        let cells: Vec<Vec<String>> = (0..2)
            .map(|i| (0..2).map(|j| self.fmt_value(panel.normalized[i][j])).collect())
            .collect();
        let col = cells
            .iter()
            .flatten()
            .map(|c| UnicodeWidthStr::width(c.as_str()))
            .max()
            .unwrap_or(0)
            .max(UnicodeWidthStr::width("pred +"));
        vec![
            panel.model.clone(),
            format!("{}  {}  {}", " ".repeat(6), pad_left("pred -", col), pad_left("pred +", col)),
            format!("true -  {}  {}", pad_left(&cells[0][0], col), pad_left(&cells[0][1], col)),
            format!("true +  {}  {}", pad_left(&cells[1][0], col), pad_left(&cells[1][1], col)),
        ]
    }
}

impl FigureRenderer for TextRenderer {
    type Output = String;

    fn render_roc(&self, figure: &RocFigure) -> String {
        let mut grid = vec![vec![' '; self.width]; self.height];
        for (i, series) in figure.series.iter().enumerate() {
            self.plot_series(&mut grid, series, MARKERS[i % MARKERS.len()]);
        }

        let mut lines = vec![figure.title.clone()];
        for (i, row) in grid.iter().enumerate() {
            let label = match i {
                0 => "1.0",
                _ if i == self.height - 1 => "0.0",
                _ => "",
            };
            lines.push(format!("{} |{}", pad_left(label, 3), row.iter().collect::<String>().trim_end()));
        }
        lines.push(format!("    +{}", "-".repeat(self.width)));
        lines.push(format!(
            "    0.0{}1.0  (false positive rate)",
            " ".repeat(self.width.saturating_sub(5))
        ));
        for (i, series) in figure.series.iter().enumerate() {
            lines.push(format!(
                "  {} {} (AUC = {})",
                MARKERS[i % MARKERS.len()],
                series.model,
                self.fmt_value(series.auc)
            ));
        }
        lines.join("\n")
    }

    fn render_bars(&self, figure: &MetricBarFigure) -> String {
        let blocks: Vec<Vec<String>> = figure.panels.iter().map(|p| self.bar_panel(p)).collect();
        let mut lines = vec![figure.title.clone()];
        for row in blocks.chunks(figure.col_wrap.max(1)) {
            lines.push(String::new());
            lines.extend(hstack(row, 4));
        }
        lines.join("\n")
    }

    fn render_confusion(&self, figure: &ConfusionGrid) -> String {
        let blocks: Vec<Vec<String>> = figure
            .cells
            .iter()
            .map(|cell| cell.as_ref().map(|p| self.confusion_block(p)).unwrap_or_default())
            .collect();
        // Empty cells keep the width of a drawn one so columns line up.
        let cell_width = blocks.iter().map(|b| block_width(b)).max().unwrap_or(0);
        let blocks: Vec<Vec<String>> = blocks
            .into_iter()
            .map(|b| if b.is_empty() { vec![" ".repeat(cell_width)] } else { b })
            .collect();

        let mut lines = vec![figure.title.clone()];
        for row in blocks.chunks(figure.layout.ncols.max(1)) {
            lines.push(String::new());
            lines.extend(hstack(row, 4));
        }
        lines.join("\n")
    }

    fn render_scores(&self, table: &ScoreTable) -> String {
        let header = ["model", "dataset", "metric", "value"];
        let rows: Vec<[String; 4]> = table
            .iter()
            .map(|r| {
                [
                    r.model.clone(),
                    r.dataset.to_string(),
                    r.metric.to_string(),
                    self.fmt_value(r.value),
                ]
            })
            .collect();

        let mut widths = header.map(UnicodeWidthStr::width);
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(UnicodeWidthStr::width(cell.as_str()));
            }
        }

        let line = |cells: [&str; 4]| {
            format!(
                "{}  {}  {}  {}",
                pad_right(cells[0], widths[0]),
                pad_right(cells[1], widths[1]),
                pad_right(cells[2], widths[2]),
                pad_left(cells[3], widths[3])
            )
        };
        let mut lines = vec![line(header)];
        for row in &rows {
            lines.push(line([&row[0], &row[1], &row[2], &row[3]]));
        }
        lines.join("\n")
    }
}
