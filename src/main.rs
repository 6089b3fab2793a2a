//! Two-cluster classification demo
//!
//! Generates a synthetic dataset, trains the logistic neuron with the
//! default hyperparameters, reports classification metrics, and writes
//! the decision-boundary and loss-curve SVGs to the working directory.

use std::process::ExitCode;

use clasificar::metrics::{Accuracy, F1Score, Metric, Precision, Recall};
use clasificar::plot::{decision_boundary, loss_curve, sparkline};
use clasificar::{Blobs, LogisticNeuron, Result};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let data = Blobs::new(200)
        .with_centers(vec![[-5.0, -5.0], [5.0, 5.0]])
        .with_cluster_std(2.0)
        .with_seed(42)
        .generate()?;
    println!(
        "Generated {} samples in two clusters (std 2.0, seed 42)",
        data.len()
    );

    let mut model = LogisticNeuron::with_seed(2, 42);
    println!(
        "Training logistic neuron: learning rate {}, {} epochs",
        model.learning_rate(),
        model.epochs()
    );
    let report = model.train(data.features(), data.labels())?;
    println!(
        "Training finished in {:.2}s, final loss {:.4}",
        report.elapsed_secs, report.final_loss
    );
    println!("Loss {}", sparkline(model.loss_history(), 40));

    let probs = model.predict_proba(data.features());
    let accuracy = Accuracy::default();
    let precision = Precision::default();
    let recall = Recall::default();
    let f1 = F1Score::default();
    for metric in [&accuracy as &dyn Metric, &precision, &recall, &f1] {
        println!(
            "{}: {:.4}",
            metric.name(),
            metric.compute(&probs, data.labels())
        );
    }

    decision_boundary(&model, &data, "decision_boundary.svg")?;
    println!("✓ decision_boundary.svg");
    loss_curve(&model, "loss_curve.svg")?;
    println!("✓ loss_curve.svg");

    Ok(())
}
