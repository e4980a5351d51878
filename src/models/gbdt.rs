use gbdt::config::Config;
use gbdt::decision_tree::{Data, DataVec};
use gbdt::gradient_boost::GBDT;
use ndarray::ArrayView1;

use crate::config::{ModelConfig, ModelType};
use crate::data_handling::PuDataset;
use crate::models::classifier_trait::{BinaryTrainer, SoftClassifier};

/// Gradient Boosting Decision Tree (GBDT) trainer for the binary
/// one-vs-rest sub-problems.
///
/// The `LogLikelyhood` loss expects ±1 responses internally; rows whose
/// response equals `pos_label` are fed as `1.0`, everything else as `-1.0`.
pub struct GbdtTrainer {
    params: ModelConfig,
    pos_label: i32,
}

impl GbdtTrainer {
    pub fn new(params: ModelConfig) -> Self {
        GbdtTrainer {
            params,
            pos_label: 1,
        }
    }

    /// Override the response value the trainer treats as positive
    /// (defaults to `+1`).
    pub fn with_pos_label(mut self, pos_label: i32) -> Self {
        self.pos_label = pos_label;
        self
    }
}

impl BinaryTrainer for GbdtTrainer {
    fn train(&self, data: &PuDataset) -> anyhow::Result<Box<dyn SoftClassifier>> {
        let feature_size = data.ncols();

        let ModelType::GBDT {
            max_depth,
            num_boost_round,
            debug,
            training_optimization_level,
            loss_type,
        } = &self.params.model_type;

        let mut config = Config::new();
        config.set_feature_size(feature_size);
        config.set_shrinkage(self.params.learning_rate);
        config.set_max_depth(*max_depth);
        config.set_iterations(*num_boost_round as usize);
        config.set_debug(*debug);
        config.set_training_optimization_level(*training_optimization_level);
        config.set_loss(loss_type);

        let mut gbdt = GBDT::new(&config);

        let mut train_x = DataVec::new();
        for i in 0..data.nrows() {
            let train_row = data.row(i).to_vec();
            let label = if data.y[i] == self.pos_label { 1.0 } else { -1.0 };
            train_x.push(Data::new_training_data(train_row, 1.0, label, None));
        }

        gbdt.fit(&mut train_x);

        Ok(Box::new(GbdtClassifier { model: gbdt }))
    }
}

/// A fitted GBDT wrapped as a soft binary classifier.
pub struct GbdtClassifier {
    model: GBDT,
}

impl SoftClassifier for GbdtClassifier {
    fn probabilities(&self, row: ArrayView1<'_, f32>) -> anyhow::Result<[f32; 2]> {
        let mut test_x = DataVec::new();
        test_x.push(Data::new_test_data(row.to_vec(), None));

        // With the LogLikelyhood loss, predict yields the positive-class
        // probability directly.
        let predictions = self.model.predict(&test_x);
        let p = *predictions
            .first()
            .ok_or_else(|| anyhow::anyhow!("GBDT returned no prediction"))?;
        if !p.is_finite() {
            anyhow::bail!("GBDT returned a non-finite probability: {}", p);
        }
        Ok([1.0 - p, p])
    }

    fn name(&self) -> &str {
        "gbdt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2};

    #[test]
    fn test_gbdt_trainer_separable() {
        // Two well-separated clusters along the first feature.
        let x = Array2::from_shape_vec(
            (10, 2),
            vec![
                0.1, 0.2, 0.2, -0.1, 0.3, 0.1, 0.15, 0.05, 0.25, 0.0, //
                5.0, 0.1, 5.2, -0.2, 5.1, 0.0, 4.9, 0.1, 5.3, 0.2,
            ],
        )
        .unwrap();
        let y = Array1::from_vec(vec![-1, -1, -1, -1, -1, 1, 1, 1, 1, 1]);
        let data = PuDataset::new(x, y).unwrap();

        let trainer = GbdtTrainer::new(ModelConfig::default());
        let model = trainer.train(&data).unwrap();

        let proba = model.probabilities(data.row(7)).unwrap();
        assert!(proba[1] >= 0.0 && proba[1] <= 1.0);
        assert!((proba[0] + proba[1] - 1.0).abs() < 1e-6);

        let neg_proba = model.probabilities(data.row(0)).unwrap();
        assert!(
            proba[1] > neg_proba[1],
            "positive cluster should score higher: {} vs {}",
            proba[1],
            neg_proba[1]
        );
    }
}
