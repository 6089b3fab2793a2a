//! clasificar: a single logistic neuron, trained from scratch
//!
//! Binary classification with the smallest possible model: a weight
//! vector, a bias, and the sigmoid. Training is full-batch gradient
//! descent on mean binary cross-entropy, with the loss computed in logit
//! space so saturated predictions never produce infinities.
//!
//! The crate ships its own two-cluster Gaussian data generator and SVG
//! renderers for the decision boundary and the loss curve, so the whole
//! train-evaluate-visualize loop runs without external data.
//!
//! # Example
//!
//! ```
//! use clasificar::{Blobs, LogisticNeuron};
//!
//! let data = Blobs::new(80)
//!     .with_centers(vec![[-5.0, -5.0], [5.0, 5.0]])
//!     .with_cluster_std(1.0)
//!     .with_seed(42)
//!     .generate()?;
//!
//! let mut model = LogisticNeuron::with_seed(2, 42)
//!     .with_learning_rate(0.5)
//!     .with_epochs(200)
//!     .with_log_interval(0);
//! model.train(data.features(), data.labels())?;
//!
//! assert!(model.score(data.features(), data.labels()) >= 0.95);
//! # Ok::<(), clasificar::Error>(())
//! ```

pub mod data;
pub mod error;
pub mod loss;
pub mod metrics;
pub mod neuron;
pub mod plot;

pub use data::{Blobs, Dataset};
pub use error::{Error, Result};
pub use neuron::{LogisticNeuron, TrainReport};
