//! Label codec mapping raw integer class labels to dense codes `0..=K`.
//!
//! Code `0` is reserved for the unlabelled/negative value; codes `1..=K`
//! are assigned to the remaining distinct raw values in ascending order so
//! repeated fits over the same data are reproducible. K is small and fixed
//! after fitting, so decoding is a plain array lookup and encoding a small
//! map lookup.
use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::FitError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelCodec {
    /// `values[0]` is the unlabelled value; `values[1..]` the positive
    /// classes in ascending raw order.
    values: Vec<i32>,
    codes: HashMap<i32, usize>,
}

impl LabelCodec {
    /// Fit a codec over a raw response column.
    ///
    /// Fails with [`FitError::InvalidTrainingSet`] when `unlabelled` never
    /// appears in `y` (a PU problem needs at least one unlabelled row) and
    /// with [`FitError::DegenerateProblem`] when no positive class remains
    /// after removing the unlabelled value. A single positive class (K = 1)
    /// is accepted.
    pub fn fit(y: &[i32], unlabelled: i32) -> Result<LabelCodec, FitError> {
        let distinct: BTreeSet<i32> = y.iter().copied().collect();

        if !distinct.contains(&unlabelled) {
            return Err(FitError::InvalidTrainingSet(unlabelled));
        }
        if distinct.len() < 2 {
            return Err(FitError::DegenerateProblem(distinct.len()));
        }

        let mut values = Vec::with_capacity(distinct.len());
        values.push(unlabelled);
        values.extend(distinct.into_iter().filter(|&v| v != unlabelled));

        let codes = values
            .iter()
            .enumerate()
            .map(|(code, &raw)| (raw, code))
            .collect();

        log::debug!(
            "Fitted label codec: {} positive classes, unlabelled value {}",
            values.len() - 1,
            unlabelled
        );

        Ok(LabelCodec { values, codes })
    }

    /// The number of positive classes.
    pub fn k(&self) -> usize {
        self.values.len() - 1
    }

    /// The raw value reserved for unlabelled rows.
    pub fn unlabelled(&self) -> i32 {
        self.values[0]
    }

    /// Dense code for a raw label, or `None` if the value was not seen
    /// during fitting.
    pub fn encode(&self, raw: i32) -> Option<usize> {
        self.codes.get(&raw).copied()
    }

    /// Raw label for a dense code.
    ///
    /// Panics if `code > K`; dense codes only come from this codec, so an
    /// out-of-range code is a caller bug.
    pub fn decode(&self, code: usize) -> i32 {
        self.values[code]
    }

    /// All K+1 raw label values seen during fitting, sorted ascending.
    pub fn labels(&self) -> Vec<i32> {
        let mut labels = self.values.clone();
        labels.sort_unstable();
        labels
    }
}
