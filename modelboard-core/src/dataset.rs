//! Dataset tags and the paired input/label partitions a model is scored on.

use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};

/// Which partition a score or figure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetTag {
    Train,
    Test,
    Validate,
}

impl DatasetTag {
    pub const ALL: [DatasetTag; 3] = [Self::Train, Self::Test, Self::Validate];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Test => "test",
            Self::Validate => "validate",
        }
    }

    /// Capitalized form used in figure titles.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Train => "Train",
            Self::Test => "Test",
            Self::Validate => "Validate",
        }
    }
}

impl std::fmt::Display for DatasetTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DatasetTag {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "train" => Ok(Self::Train),
            "test" => Ok(Self::Test),
            "validate" => Ok(Self::Validate),
            other => Err(BoardError::invalid_dataset_tag(other)),
        }
    }
}

/// Feature rows paired with binary labels (`true` is the positive class).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Split {
    inputs: Vec<Vec<f64>>,
    labels: Vec<bool>,
}

impl Split {
    pub fn new(inputs: Vec<Vec<f64>>, labels: Vec<bool>) -> Result<Self> {
        if inputs.len() != labels.len() {
            return Err(BoardError::invalid_input(format!(
                "inputs length {} != labels length {}",
                inputs.len(),
                labels.len()
            )));
        }
        Ok(Self { inputs, labels })
    }

    pub fn inputs(&self) -> &[Vec<f64>] {
        &self.inputs
    }

    pub fn labels(&self) -> &[bool] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// The data a [`ScoredModel`](crate::model::ScoredModel) is scored against.
///
/// `train`/`test` drive the first scoring pass. `full` is the combined
/// pre-validation data the estimator is refit on before it is scored on
/// `validate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Partitions {
    pub train: Split,
    pub test: Split,
    pub full: Split,
    pub validate: Split,
}

impl Partitions {
    pub fn new(train: Split, test: Split, full: Split, validate: Split) -> Self {
        Self {
            train,
            test,
            full,
            validate,
        }
    }

    /// The split a dataset tag refers to. `full` has no tag of its own.
    pub fn get(&self, tag: DatasetTag) -> &Split {
        match tag {
            DatasetTag::Train => &self.train,
            DatasetTag::Test => &self.test,
            DatasetTag::Validate => &self.validate,
        }
    }
}
