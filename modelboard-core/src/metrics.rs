//! Binary classification metrics.
//!
//! Provides the four comparison scores (accuracy, recall, precision, F1),
//! the 2×2 confusion matrix with its normalizations, and ROC curves with a
//! trapezoidal AUC.

use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};

/// The metrics every scored model is evaluated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "accuracy_score", alias = "accuracy")]
    Accuracy,
    #[serde(rename = "recall_score", alias = "recall")]
    Recall,
    #[serde(rename = "precision_score", alias = "precision")]
    Precision,
    #[serde(rename = "f1_score", alias = "f1")]
    F1,
}

impl Metric {
    /// Canonical order used for score records and figure panels.
    pub const ALL: [Metric; 4] = [Self::Accuracy, Self::Recall, Self::Precision, Self::F1];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Accuracy => "accuracy_score",
            Self::Recall => "recall_score",
            Self::Precision => "precision_score",
            Self::F1 => "f1_score",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Metric {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "accuracy_score" | "accuracy" => Ok(Self::Accuracy),
            "recall_score" | "recall" => Ok(Self::Recall),
            "precision_score" | "precision" => Ok(Self::Precision),
            "f1_score" | "f1" => Ok(Self::F1),
            other => Err(BoardError::invalid_input(format!("unknown metric: {other}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Confusion counts
// ---------------------------------------------------------------------------

/// Outcome counts for a binary prediction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryConfusion {
    pub tp: usize,
    pub fp: usize,
    pub tn: usize,
    #[serde(rename = "fn")]
    pub fn_: usize,
}

impl BinaryConfusion {
    /// Count outcomes of `y_pred` against `y_true`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the slices are empty or differ in length.
    pub fn from_labels(y_true: &[bool], y_pred: &[bool]) -> Result<Self> {
        check_lengths(y_true.len(), y_pred.len())?;
        let mut counts = Self::default();
        for (&actual, &predicted) in y_true.iter().zip(y_pred) {
            match (actual, predicted) {
                (true, true) => counts.tp += 1,
                (false, true) => counts.fp += 1,
                (false, false) => counts.tn += 1,
                (true, false) => counts.fn_ += 1,
            }
        }
        Ok(counts)
    }

    pub fn total(&self) -> usize {
        self.tp + self.fp + self.tn + self.fn_
    }

    pub fn accuracy(&self) -> f64 {
        ratio(self.tp + self.tn, self.total(), 0.0)
    }

    pub fn precision(&self, zero_division: f64) -> f64 {
        ratio(self.tp, self.tp + self.fp, zero_division)
    }

    pub fn recall(&self, zero_division: f64) -> f64 {
        ratio(self.tp, self.tp + self.fn_, zero_division)
    }

    pub fn f1(&self, zero_division: f64) -> f64 {
        // 2TP / (2TP + FP + FN), which equals the harmonic mean when defined.
        ratio(2 * self.tp, 2 * self.tp + self.fp + self.fn_, zero_division)
    }

    pub fn metric(&self, metric: Metric, zero_division: f64) -> f64 {
        match metric {
            Metric::Accuracy => self.accuracy(),
            Metric::Recall => self.recall(zero_division),
            Metric::Precision => self.precision(zero_division),
            Metric::F1 => self.f1(zero_division),
        }
    }
}

fn ratio(num: usize, den: usize, zero_division: f64) -> f64 {
    if den == 0 {
        zero_division
    } else {
        num as f64 / den as f64
    }
}

fn check_lengths(actual: usize, other: usize) -> Result<()> {
    if actual == 0 {
        return Err(BoardError::invalid_input("empty label vectors"));
    }
    if actual != other {
        return Err(BoardError::invalid_input(format!(
            "labels length {actual} != predictions length {other}"
        )));
    }
    Ok(())
}

/// Fail when the ground truth holds only one class.
fn check_both_classes(y_true: &[bool]) -> Result<()> {
    let positives = y_true.iter().filter(|&&l| l).count();
    if positives == 0 {
        return Err(BoardError::undefined_metric(
            "labels contain only the negative class",
        ));
    }
    if positives == y_true.len() {
        return Err(BoardError::undefined_metric(
            "labels contain only the positive class",
        ));
    }
    Ok(())
}

/// Compute a single metric.
///
/// # Errors
///
/// `InvalidInput` on empty or mismatched slices, `UndefinedMetric` when
/// `y_true` contains a single class.
pub fn score(metric: Metric, y_true: &[bool], y_pred: &[bool], zero_division: f64) -> Result<f64> {
    let counts = BinaryConfusion::from_labels(y_true, y_pred)?;
    check_both_classes(y_true)?;
    Ok(counts.metric(metric, zero_division))
}

/// Compute every [`Metric`] in canonical order.
pub fn score_all(y_true: &[bool], y_pred: &[bool], zero_division: f64) -> Result<Vec<(Metric, f64)>> {
    let counts = BinaryConfusion::from_labels(y_true, y_pred)?;
    check_both_classes(y_true)?;
    Ok(Metric::ALL
        .iter()
        .map(|&m| (m, counts.metric(m, zero_division)))
        .collect())
}

// ---------------------------------------------------------------------------
// Confusion matrix
// ---------------------------------------------------------------------------

/// How a confusion matrix is normalized for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalize {
    /// Each actual-class row sums to 1.
    #[default]
    True,
    /// Each predicted-class column sums to 1.
    Pred,
    /// The whole matrix sums to 1.
    All,
    /// Raw counts.
    None,
}

/// 2×2 confusion matrix. Rows are the actual class (negative, positive),
/// columns the predicted class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub counts: [[usize; 2]; 2],
}

impl ConfusionMatrix {
    pub fn from_labels(y_true: &[bool], y_pred: &[bool]) -> Result<Self> {
        Ok(Self::from(BinaryConfusion::from_labels(y_true, y_pred)?))
    }

    /// Normalized cell values. Rows or columns with no samples become 0.
    pub fn normalized(&self, mode: Normalize) -> [[f64; 2]; 2] {
        let c = self.counts;
        let mut out = [[0.0; 2]; 2];
        for (i, row) in c.iter().enumerate() {
            for (j, &count) in row.iter().enumerate() {
                let den = match mode {
                    Normalize::True => c[i][0] + c[i][1],
                    Normalize::Pred => c[0][j] + c[1][j],
                    Normalize::All => c[0][0] + c[0][1] + c[1][0] + c[1][1],
                    Normalize::None => 1,
                };
                out[i][j] = ratio(count, den, 0.0);
            }
        }
        out
    }
}

impl From<BinaryConfusion> for ConfusionMatrix {
    fn from(b: BinaryConfusion) -> Self {
        Self {
            counts: [[b.tn, b.fp], [b.fn_, b.tp]],
        }
    }
}

// ---------------------------------------------------------------------------
// ROC curve
// ---------------------------------------------------------------------------

/// Receiver operating characteristic curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocCurve {
    pub fpr: Vec<f64>,
    pub tpr: Vec<f64>,
    /// Score threshold of each point; the first is `+inf` (nothing positive).
    pub thresholds: Vec<f64>,
    pub auc: f64,
}

/// Compute the ROC curve from decision scores and binary labels.
///
/// Walks the distinct scores in descending order, emitting one point per
/// threshold, starting at (0, 0) and ending at (1, 1).
///
/// # Errors
///
/// `InvalidInput` on empty or mismatched slices, `UndefinedMetric` when the
/// labels contain a single class.
pub fn roc_curve(scores: &[f64], labels: &[bool]) -> Result<RocCurve> {
    check_lengths(labels.len(), scores.len())?;
    check_both_classes(labels)?;
    if scores.iter().any(|s| s.is_nan()) {
        return Err(BoardError::invalid_input("decision scores contain NaN"));
    }

    let total_pos = labels.iter().filter(|&&l| l).count() as f64;
    let total_neg = labels.len() as f64 - total_pos;

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut fpr = vec![0.0];
    let mut tpr = vec![0.0];
    let mut thresholds = vec![f64::INFINITY];

    let (mut tp, mut fp) = (0usize, 0usize);
    let mut i = 0;
    while i < order.len() {
        let current = scores[order[i]];
        while i < order.len() && scores[order[i]] == current {
            if labels[order[i]] {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }
        fpr.push(fp as f64 / total_neg);
        tpr.push(tp as f64 / total_pos);
        thresholds.push(current);
    }

    let auc = trapezoidal_auc(&fpr, &tpr);
    Ok(RocCurve {
        fpr,
        tpr,
        thresholds,
        auc,
    })
}

fn trapezoidal_auc(x: &[f64], y: &[f64]) -> f64 {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]).abs() * (ys[0] + ys[1]) / 2.0)
        .sum()
}
