use crate::config::ModelConfig;
use crate::models::classifier_trait::BinaryTrainer;

/// Build a boxed binary trainer from a `ModelConfig`.
/// Currently this is a thin factory implemented as a single function.
pub fn build_trainer(params: ModelConfig) -> Box<dyn BinaryTrainer> {
    match params.model_type {
        crate::config::ModelType::GBDT { .. } => {
            Box::new(crate::models::gbdt::GbdtTrainer::new(params))
        }
    }
}
