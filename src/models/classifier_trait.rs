use ndarray::ArrayView1;

use crate::data_handling::PuDataset;

/// A trained binary classifier producing calibrated class-conditional
/// probabilities. Index 1 of the returned pair is the probability of
/// membership in the positive class; the two entries sum to 1.
///
/// A prediction failure is surfaced as an error, never silently treated
/// as a negative vote, since a masked failure would corrupt the
/// max-probability comparison in the ensemble.
pub trait SoftClassifier: Send + Sync {
    fn probabilities(&self, row: ArrayView1<'_, f32>) -> anyhow::Result<[f32; 2]>;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}

/// A trainer capability: given a binary-labeled dataset, produce a fitted
/// [`SoftClassifier`]. The ensemble places no constraint on the training
/// algorithm; reproducibility of fits is the trainer's concern.
///
/// `Sync` is required so the K independent sub-problems can be trained on
/// worker threads.
pub trait BinaryTrainer: Sync {
    fn train(&self, data: &PuDataset) -> anyhow::Result<Box<dyn SoftClassifier>>;
}

/// Closures work as trainers directly.
impl<F> BinaryTrainer for F
where
    F: Fn(&PuDataset) -> anyhow::Result<Box<dyn SoftClassifier>> + Sync,
{
    fn train(&self, data: &PuDataset) -> anyhow::Result<Box<dyn SoftClassifier>> {
        self(data)
    }
}
