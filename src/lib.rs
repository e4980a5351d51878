//! pu-ensemble: multi-class positive-unlabelled (PU) learning.
//!
//! This crate reduces a K-class PU problem (each row carries one of K
//! positive labels, or a reserved "unlabelled" value hiding a mixture of
//! positives and negatives) to K independent binary classification
//! sub-problems: one soft classifier per positive class, with that class
//! as positives and everything else (other positive classes and unlabelled
//! rows) as negatives. At prediction time all K classifiers are queried
//! and the class with the highest probability above 0.5 wins; below the
//! threshold the row is assigned the unlabelled/negative class.
//!
//! The base classifiers must produce real-valued probabilities rather than
//! hard labels; discrete labels alone lead to ambiguities where several
//! classes claim the same sample. Any trainer can be plugged in through
//! the [`models::classifier_trait::BinaryTrainer`] seam; a GBDT-backed
//! default is provided.
pub mod config;
pub mod data_handling;
pub mod ensemble;
pub mod error;
pub mod labels;
pub mod models;
