//! One-vs-rest ensemble for multi-class positive-unlabelled learning.
//!
//! One binary soft classifier is trained per positive class, with the
//! samples of that class as positives and all other samples (other
//! positive classes and unlabelled points) as negatives. At prediction
//! time all classifiers are applied to an unseen sample and the predicted
//! label is the one with the highest confidence if it exceeds 0.5, or the
//! unlabelled/negative class otherwise.
use std::fmt;

use ndarray::ArrayView1;
use rayon::prelude::*;

use crate::data_handling::PuDataset;
use crate::error::FitError;
use crate::labels::LabelCodec;
use crate::models::classifier_trait::{BinaryTrainer, SoftClassifier};

/// The per-class probability gate: a class is only eligible when its
/// classifier reports strictly more than this.
const REJECTION_THRESHOLD: f32 = 0.5;

/// A fitted multi-class PU ensemble: K binary classifiers (index i
/// corresponds to dense class code i+1) plus the label codec. Immutable
/// once constructed; prediction takes `&self` and keeps no state between
/// calls.
pub struct PositiveUnlabelled {
    classifiers: Vec<Box<dyn SoftClassifier>>,
    codec: LabelCodec,
}

// Boxed classifiers carry no Debug bound, so report the ensemble shape
// instead of deriving.
impl fmt::Debug for PositiveUnlabelled {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PositiveUnlabelled")
            .field("k", &self.k())
            .field(
                "classifiers",
                &self
                    .classifiers
                    .iter()
                    .map(|c| c.name())
                    .collect::<Vec<_>>(),
            )
            .field("labels", &self.labels())
            .finish()
    }
}

impl PositiveUnlabelled {
    /// Assemble an ensemble from pre-trained binary classifiers and a
    /// fitted codec. `classifiers[i]` must score dense class code `i + 1`.
    pub fn from_classifiers(
        classifiers: Vec<Box<dyn SoftClassifier>>,
        codec: LabelCodec,
    ) -> Result<Self, FitError> {
        if classifiers.len() != codec.k() {
            return Err(FitError::ClassifierCountMismatch {
                classifiers: classifiers.len(),
                k: codec.k(),
            });
        }
        Ok(PositiveUnlabelled { classifiers, codec })
    }

    /// Fit one binary model per positive class, using `+1` and `-1` as the
    /// positive and negative response values handed to the trainer.
    ///
    /// # Arguments
    ///
    /// * `data` - The training set. One raw response value marks
    ///   unlabelled rows; every other distinct value is a positive class.
    /// * `unlabelled` - The raw response value of unlabelled rows.
    /// * `trainer` - Trains a soft binary classifier from a relabeled
    ///   dataset. Closures work directly.
    pub fn fit<T>(data: &PuDataset, unlabelled: i32, trainer: &T) -> Result<Self, FitError>
    where
        T: BinaryTrainer + ?Sized,
    {
        Self::fit_with_labels(data, unlabelled, 1, -1, trainer)
    }

    /// Fit one binary model per positive class with caller-chosen response
    /// values for the synthesized binary datasets.
    ///
    /// The K sub-problems are independent and trained in parallel. If any
    /// sub-training fails the whole fit fails; no partial ensemble is ever
    /// returned.
    pub fn fit_with_labels<T>(
        data: &PuDataset,
        unlabelled: i32,
        pos: i32,
        neg: i32,
        trainer: &T,
    ) -> Result<Self, FitError>
    where
        T: BinaryTrainer + ?Sized,
    {
        let codec = LabelCodec::fit(&data.y.to_vec(), unlabelled)?;
        let k = codec.k();

        data.log_summary(unlabelled);
        log::info!("Fitting {} one-vs-rest binary classifiers", k);

        let classifiers = (1..=k)
            .into_par_iter()
            .map(|class| {
                let binary = data
                    .synthesize_binary(&codec, class, pos, neg)
                    .map_err(|source| FitError::Training { class, source })?;
                log::trace!(
                    "Training classifier for positive class {} ({} positive rows)",
                    class,
                    binary.y.iter().filter(|&&v| v == pos).count()
                );
                trainer
                    .train(&binary)
                    .map_err(|source| FitError::Training { class, source })
            })
            .collect::<Result<Vec<_>, FitError>>()?;

        Ok(PositiveUnlabelled { classifiers, codec })
    }

    /// Predict the raw class label for one feature row.
    ///
    /// Returns the label of the class with the highest probability when it
    /// strictly exceeds 0.5, or the unlabelled/negative label otherwise.
    /// Never fails under the ensemble's own logic; a sub-classifier
    /// prediction error is propagated as-is.
    pub fn predict(&self, row: ArrayView1<'_, f32>) -> anyhow::Result<i32> {
        let (label, _) = self.predict_with_confidence(row)?;
        Ok(label)
    }

    /// Predict the raw class label together with the K-vector of
    /// positive-class probabilities (index i = dense class code i + 1).
    pub fn predict_with_confidence(
        &self,
        row: ArrayView1<'_, f32>,
    ) -> anyhow::Result<(i32, Vec<f32>)> {
        let mut best_code = 0;
        let mut best_prob = 0.0f32;
        let mut confidences = vec![0.0f32; self.classifiers.len()];

        for (i, classifier) in self.classifiers.iter().enumerate() {
            let proba = classifier.probabilities(row)?;
            let p = proba[1];
            confidences[i] = p;
            // Strict comparisons: ties keep the lowest class index, and a
            // probability at or below the threshold never wins.
            if p > best_prob && p > REJECTION_THRESHOLD {
                best_code = i + 1;
                best_prob = p;
            }
        }

        Ok((self.codec.decode(best_code), confidences))
    }

    /// The number of positive classes.
    pub fn k(&self) -> usize {
        self.classifiers.len()
    }

    /// All K+1 raw label values seen during fitting, sorted ascending.
    pub fn labels(&self) -> Vec<i32> {
        self.codec.labels()
    }

    /// The fitted label codec, for callers that need to translate between
    /// raw labels and dense class codes themselves.
    pub fn codec(&self) -> &LabelCodec {
        &self.codec
    }
}
