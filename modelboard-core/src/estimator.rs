//! The capability contract a classifier must satisfy to be scored.

use crate::error::{BoardError, Result};

/// A binary classifier that can be fit and queried.
///
/// Implementors wrap whatever model library the caller uses; modelboard never
/// trains anything itself.
pub trait Estimator: std::fmt::Debug {
    /// Fit on `inputs` (one feature row per sample) and their labels.
    fn fit(&mut self, inputs: &[Vec<f64>], labels: &[bool]) -> Result<()>;

    /// Predict a label for every input row.
    fn predict(&self, inputs: &[Vec<f64>]) -> Result<Vec<bool>>;

    /// Continuous confidence that each row is positive, used for ROC curves.
    ///
    /// Estimators without a probability or decision function fall back to
    /// their hard predictions, which yields a single-threshold curve.
    fn decision_scores(&self, inputs: &[Vec<f64>]) -> Result<Vec<f64>> {
        Ok(self
            .predict(inputs)?
            .into_iter()
            .map(|p| if p { 1.0 } else { 0.0 })
            .collect())
    }

    /// Human-readable description shown by `ScoredModel::info`.
    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

/// Predict and check that the estimator returned one label per row.
pub(crate) fn checked_predict(
    estimator: &dyn Estimator,
    inputs: &[Vec<f64>],
) -> Result<Vec<bool>> {
    let predicted = estimator.predict(inputs)?;
    if predicted.len() != inputs.len() {
        return Err(BoardError::estimator(format!(
            "predict returned {} labels for {} rows",
            predicted.len(),
            inputs.len()
        )));
    }
    Ok(predicted)
}

/// Score and check that the estimator returned one value per row.
pub(crate) fn checked_scores(estimator: &dyn Estimator, inputs: &[Vec<f64>]) -> Result<Vec<f64>> {
    let scores = estimator.decision_scores(inputs)?;
    if scores.len() != inputs.len() {
        return Err(BoardError::estimator(format!(
            "decision_scores returned {} values for {} rows",
            scores.len(),
            inputs.len()
        )));
    }
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Positive;

    impl Estimator for Positive {
        fn fit(&mut self, _inputs: &[Vec<f64>], _labels: &[bool]) -> Result<()> {
            Ok(())
        }

        fn predict(&self, inputs: &[Vec<f64>]) -> Result<Vec<bool>> {
            Ok(inputs.iter().map(|row| row[0] > 0.0).collect())
        }
    }

    #[derive(Debug)]
    struct Truncating;

    impl Estimator for Truncating {
        fn fit(&mut self, _inputs: &[Vec<f64>], _labels: &[bool]) -> Result<()> {
            Ok(())
        }

        fn predict(&self, _inputs: &[Vec<f64>]) -> Result<Vec<bool>> {
            Ok(vec![true])
        }
    }

    #[test]
    fn test_default_decision_scores() {
        let scores = Positive
            .decision_scores(&[vec![1.0], vec![-1.0], vec![0.5]])
            .unwrap();
        assert_eq!(scores, vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_default_describe_uses_debug() {
        assert_eq!(Positive.describe(), "Positive");
    }

    #[test]
    fn test_checked_predict_rejects_short_output() {
        let err = checked_predict(&Truncating, &[vec![1.0], vec![2.0]]).unwrap_err();
        assert!(matches!(err, BoardError::Estimator(_)));
        let err = checked_scores(&Truncating, &[vec![1.0], vec![2.0]]).unwrap_err();
        assert!(matches!(err, BoardError::Estimator(_)));
    }
}
