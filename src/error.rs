use std::error::Error;
use std::fmt;

/// Custom error type for ensemble fitting failures
#[derive(Debug)]
pub enum FitError {
    /// The declared unlabelled value never appears in the response column.
    InvalidTrainingSet(i32),
    /// The unlabelled value is the only distinct response value (K == 0).
    DegenerateProblem(usize), // Number of distinct response values found
    /// Pre-trained classifier count does not match the codec's class count.
    ClassifierCountMismatch { classifiers: usize, k: usize },
    /// The trainer failed for one of the binary sub-problems.
    Training {
        class: usize,
        source: anyhow::Error,
    },
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FitError::InvalidTrainingSet(unlabelled) => write!(
                f,
                "There is no unlabelled data (value {}) in the training set",
                unlabelled
            ),
            FitError::DegenerateProblem(distinct) => write!(
                f,
                "Only {} positive classes ({} distinct response values)",
                distinct.saturating_sub(1),
                distinct
            ),
            FitError::ClassifierCountMismatch { classifiers, k } => write!(
                f,
                "Got {} classifiers for {} positive classes",
                classifiers, k
            ),
            FitError::Training { class, source } => write!(
                f,
                "Training the binary classifier for positive class {} failed: {}",
                class, source
            ),
        }
    }
}

impl Error for FitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FitError::Training { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
