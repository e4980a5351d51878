//! Data structures and helpers for PU training sets.
//!
//! This module defines `PuDataset`, a feature matrix paired with a raw
//! integer response column, and the one-vs-rest relabeling used to carve
//! one binary training set per positive class out of the full dataset.
use ndarray::{Array1, Array2, ArrayView1};

use crate::labels::LabelCodec;

/// A feature matrix with one raw integer response label per row.
///
/// The feature portion is opaque to the ensemble; only the response column
/// is interpreted. One designated raw value marks unlabelled rows, every
/// other distinct value a positive class.
#[derive(Debug, Clone)]
pub struct PuDataset {
    pub x: Array2<f32>,
    pub y: Array1<i32>,
}

impl PuDataset {
    pub fn new(x: Array2<f32>, y: Array1<i32>) -> anyhow::Result<Self> {
        if x.nrows() != y.len() {
            anyhow::bail!(
                "Feature matrix has {} rows but response column has {} values",
                x.nrows(),
                y.len()
            );
        }
        Ok(PuDataset { x, y })
    }

    pub fn nrows(&self) -> usize {
        self.x.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.x.ncols()
    }

    pub fn row(&self, i: usize) -> ArrayView1<'_, f32> {
        self.x.row(i)
    }

    /// Derived copy with the response column replaced. Features are shared
    /// by value; the source dataset is untouched.
    pub fn with_response(&self, y: Array1<i32>) -> anyhow::Result<PuDataset> {
        PuDataset::new(self.x.clone(), y)
    }

    /// Build the binary training set for positive class `class_index`
    /// (dense code in `1..=K`): rows of that class become `pos`, every
    /// other row (other positive classes and unlabelled points) becomes
    /// `neg`. No rows are dropped and no features are touched.
    pub fn synthesize_binary(
        &self,
        codec: &LabelCodec,
        class_index: usize,
        pos: i32,
        neg: i32,
    ) -> anyhow::Result<PuDataset> {
        if class_index == 0 || class_index > codec.k() {
            anyhow::bail!(
                "Positive class index {} out of range 1..={}",
                class_index,
                codec.k()
            );
        }

        let mut binary_y = Vec::with_capacity(self.y.len());
        for &raw in self.y.iter() {
            let code = codec.encode(raw).ok_or_else(|| {
                anyhow::anyhow!("Response value {} was not seen when fitting the label codec", raw)
            })?;
            binary_y.push(if code == class_index { pos } else { neg });
        }

        self.with_response(Array1::from_vec(binary_y))
    }

    /// Log per-class row counts of the response column.
    pub fn log_summary(&self, unlabelled: i32) {
        let n_unlabelled = self.y.iter().filter(|&&v| v == unlabelled).count();
        log::info!(
            "Input data: {} rows, {} feature columns, {} labelled and {} unlabelled",
            self.nrows(),
            self.ncols(),
            self.nrows() - n_unlabelled,
            n_unlabelled
        );
    }
}
