//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use modelboard_core::error::{BoardError, Result};
use modelboard_core::{Estimator, Partitions, ScoredModel, Split};

/// Nearest-centroid classifier over all features.
#[derive(Debug, Default)]
pub struct NearestCentroid {
    centroids: Option<(Vec<f64>, Vec<f64>)>,
}

fn centroid(rows: &[&Vec<f64>]) -> Vec<f64> {
    let dims = rows.first().map(|r| r.len()).unwrap_or(0);
    let mut c = vec![0.0; dims];
    for row in rows {
        for (acc, v) in c.iter_mut().zip(row.iter()) {
            *acc += v;
        }
    }
    c.iter_mut().for_each(|v| *v /= rows.len() as f64);
    c
}

fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum::<f64>().sqrt()
}

impl Estimator for NearestCentroid {
    fn fit(&mut self, inputs: &[Vec<f64>], labels: &[bool]) -> Result<()> {
        let pos: Vec<_> = inputs.iter().zip(labels).filter(|(_, l)| **l).map(|(x, _)| x).collect();
        let neg: Vec<_> = inputs.iter().zip(labels).filter(|(_, l)| !**l).map(|(x, _)| x).collect();
        if pos.is_empty() || neg.is_empty() {
            return Err(BoardError::estimator("need both classes to fit"));
        }
        self.centroids = Some((centroid(&neg), centroid(&pos)));
        Ok(())
    }

    fn predict(&self, inputs: &[Vec<f64>]) -> Result<Vec<bool>> {
        Ok(self.decision_scores(inputs)?.into_iter().map(|s| s > 0.0).collect())
    }

    fn decision_scores(&self, inputs: &[Vec<f64>]) -> Result<Vec<f64>> {
        let (neg, pos) = self
            .centroids
            .as_ref()
            .ok_or_else(|| BoardError::estimator("not fitted"))?;
        Ok(inputs
            .iter()
            .map(|x| distance(x, neg) - distance(x, pos))
            .collect())
    }
}

/// Always predicts one class.
#[derive(Debug)]
pub struct Constant(pub bool);

impl Estimator for Constant {
    fn fit(&mut self, _inputs: &[Vec<f64>], _labels: &[bool]) -> Result<()> {
        Ok(())
    }

    fn predict(&self, inputs: &[Vec<f64>]) -> Result<Vec<bool>> {
        Ok(vec![self.0; inputs.len()])
    }
}

/// Two noisy clusters: negatives around (0, 0), positives around (2, 2).
pub fn split(n: usize, offset: usize) -> Split {
    let mut inputs = Vec::with_capacity(n);
    let mut labels = Vec::with_capacity(n);
    for i in 0..n {
        let positive = i % 2 == 1;
        let jitter = ((i + offset) % 7) as f64 * 0.25 - 0.75;
        let base = if positive { 2.0 } else { 0.0 };
        inputs.push(vec![base + jitter, base - jitter * 0.5]);
        labels.push(positive);
    }
    Split::new(inputs, labels).expect("matched lengths")
}

pub fn partitions() -> Partitions {
    Partitions::new(split(40, 0), split(20, 3), split(60, 1), split(20, 5))
}

pub fn centroid_model(name: &str) -> ScoredModel {
    ScoredModel::new(name, Box::new(NearestCentroid::default()), partitions())
}
