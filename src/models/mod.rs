pub mod gbdt;

pub mod classifier_trait;
pub mod factory;
