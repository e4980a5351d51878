//! End-to-end demo: multi-class PU learning with the GBDT backend.
//!
//! Generates three Gaussian-ish clusters, labels only a fraction of each
//! cluster's rows with its class and leaves the rest unlabelled, then fits
//! the one-vs-rest ensemble and reports per-row decisions.
//!
//! Run with: `RUST_LOG=info cargo run --example gbdt_pu_learning`

use anyhow::Result;
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pu_ensemble::config::ModelConfig;
use pu_ensemble::data_handling::PuDataset;
use pu_ensemble::ensemble::PositiveUnlabelled;
use pu_ensemble::models::factory::build_trainer;

const UNLABELLED: i32 = -1;

fn make_dataset(rng: &mut StdRng) -> Result<PuDataset> {
    let centers: [(f32, f32, i32); 3] = [(0.0, 0.0, 1), (6.0, 0.0, 2), (3.0, 6.0, 3)];
    let per_cluster = 60;
    let labelled_fraction = 0.4;

    let mut features = Vec::new();
    let mut labels = Vec::new();
    for &(cx, cy, class) in &centers {
        for _ in 0..per_cluster {
            features.push(cx + rng.gen_range(-1.0..1.0));
            features.push(cy + rng.gen_range(-1.0..1.0));
            labels.push(if rng.gen::<f64>() < labelled_fraction {
                class
            } else {
                UNLABELLED
            });
        }
    }

    let n = labels.len();
    let x = Array2::from_shape_vec((n, 2), features)?;
    let y = Array1::from_vec(labels);
    PuDataset::new(x, y)
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(42);
    let data = make_dataset(&mut rng)?;

    let trainer = build_trainer(ModelConfig::default());
    let pu = PositiveUnlabelled::fit(&data, UNLABELLED, trainer.as_ref())?;

    println!("Fitted ensemble with K = {} positive classes", pu.k());
    println!("Label space: {:?}", pu.labels());

    let mut agree = 0;
    let mut labelled = 0;
    for i in 0..data.nrows() {
        let (label, confidences) = pu.predict_with_confidence(data.row(i))?;
        if data.y[i] != UNLABELLED {
            labelled += 1;
            if label == data.y[i] {
                agree += 1;
            }
        }
        if i < 5 {
            println!(
                "row {:3}: raw label {:2} -> predicted {:2} (confidences {:?})",
                i, data.y[i], label, confidences
            );
        }
    }

    println!(
        "Agreement on the {} labelled rows: {}/{}",
        labelled, agree, labelled
    );
    Ok(())
}
