//! Single logistic neuron trained by full-batch gradient descent
//!
//! The model holds a weight vector and a scalar bias, produces probabilities
//! through the sigmoid of a weighted sum, and learns by repeating the
//! closed-form gradient of the mean binary cross-entropy over the whole
//! dataset for a fixed number of epochs. One loss value is recorded per
//! epoch so the loss curve always has data to draw.

use std::time::Instant;

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::standard_normal;
use crate::error::{Error, Result};
use crate::loss::{mean_bce, sigmoid_array};
use crate::metrics::{Accuracy, Metric};

/// Scale applied to the standard-normal weight initialization.
const INIT_SCALE: f32 = 0.01;

/// Summary of a completed training run.
#[derive(Debug, Clone)]
pub struct TrainReport {
    /// Number of epochs executed (always the configured count)
    pub epochs_run: usize,
    /// Mean binary cross-entropy recorded at the last epoch
    pub final_loss: f32,
    /// Wall-clock training time in seconds
    pub elapsed_secs: f64,
}

/// Binary logistic regression model: `σ(x · w + b)`.
///
/// Weights start as small random values (standard normal draws scaled by
/// 0.01), the bias starts at zero, and both change only inside [`train`].
/// Hyperparameters are fixed at construction through the `with_*` builders.
///
/// # Example
///
/// ```
/// use clasificar::LogisticNeuron;
/// use ndarray::{arr1, arr2};
///
/// let x = arr2(&[[-4.0f32, -4.0], [-5.0, -3.0], [4.0, 4.0], [5.0, 3.0]]);
/// let y = arr1(&[0.0f32, 0.0, 1.0, 1.0]);
///
/// let mut model = LogisticNeuron::with_seed(2, 42)
///     .with_learning_rate(0.5)
///     .with_epochs(200)
///     .with_log_interval(0);
///
/// let report = model.train(&x, &y).unwrap();
/// assert_eq!(report.epochs_run, 200);
/// assert_eq!(model.score(&x, &y), 1.0);
/// ```
///
/// [`train`]: LogisticNeuron::train
#[derive(Debug, Clone)]
pub struct LogisticNeuron {
    weights: Array1<f32>,
    bias: f32,
    learning_rate: f32,
    epochs: usize,
    log_interval: usize,
    loss_history: Vec<f32>,
}

impl LogisticNeuron {
    /// Create a model for `input_dim` features with OS-seeded
    /// weight initialization.
    #[must_use]
    pub fn new(input_dim: usize) -> Self {
        let mut rng = StdRng::from_os_rng();
        Self::from_rng(input_dim, &mut rng)
    }

    /// Create a model with deterministic weight initialization.
    #[must_use]
    pub fn with_seed(input_dim: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::from_rng(input_dim, &mut rng)
    }

    /// Create a model drawing its initial weights from the given source.
    #[must_use]
    pub fn from_rng<R: Rng>(input_dim: usize, rng: &mut R) -> Self {
        let weights = Array1::from_iter((0..input_dim).map(|_| INIT_SCALE * standard_normal(rng)));
        Self {
            weights,
            bias: 0.0,
            learning_rate: 0.1,
            epochs: 1000,
            log_interval: 100,
            loss_history: Vec::new(),
        }
    }

    /// Gradient descent step size (default 0.1).
    #[must_use]
    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Number of full-batch iterations [`train`] runs (default 1000).
    ///
    /// [`train`]: LogisticNeuron::train
    #[must_use]
    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    /// Print a progress line every `log_interval` epochs (default 100).
    /// Zero disables progress output.
    #[must_use]
    pub fn with_log_interval(mut self, log_interval: usize) -> Self {
        self.log_interval = log_interval;
        self
    }

    /// Raw logits `x · w + b`, one per row of `x`.
    ///
    /// # Panics
    ///
    /// Panics when the column count of `x` differs from the model's input
    /// dimension (ndarray shape failure).
    #[must_use]
    pub fn decision_function(&self, x: &Array2<f32>) -> Array1<f32> {
        x.dot(&self.weights) + self.bias
    }

    /// Predicted probability of class 1 for each row of `x`.
    ///
    /// # Panics
    ///
    /// Panics when the column count of `x` differs from the model's input
    /// dimension (ndarray shape failure).
    #[must_use]
    pub fn predict_proba(&self, x: &Array2<f32>) -> Array1<f32> {
        sigmoid_array(&self.decision_function(x))
    }

    /// Predicted class labels, thresholding probabilities at 0.5 inclusive.
    ///
    /// # Panics
    ///
    /// Panics when the column count of `x` differs from the model's input
    /// dimension (ndarray shape failure).
    #[must_use]
    pub fn predict(&self, x: &Array2<f32>) -> Array1<u8> {
        self.predict_proba(x).mapv(|p| u8::from(p >= 0.5))
    }

    /// Train by full-batch gradient descent for exactly the configured
    /// number of epochs.
    ///
    /// Each epoch computes predictions over the whole dataset, the mean-BCE
    /// gradient `dw = Xᵗ(p − y) / m`, `db = Σ(p − y) / m`, and applies
    /// `w ← w − lr·dw`, `b ← b − lr·db`. The loss of the pre-update
    /// predictions is appended to [`loss_history`], and every
    /// `log_interval`-th epoch prints `Epoch <k>/<epochs>, Loss: <value>`.
    /// There is no early stopping and label values are not validated.
    /// Repeated calls continue from the current parameters and keep
    /// appending to the history.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyDataset`] when `x` has no rows;
    /// [`Error::DimensionMismatch`] when `y.len() != x.nrows()`.
    ///
    /// [`loss_history`]: LogisticNeuron::loss_history
    pub fn train(&mut self, x: &Array2<f32>, y: &Array1<f32>) -> Result<TrainReport> {
        let m = x.nrows();
        if m == 0 {
            return Err(Error::EmptyDataset);
        }
        if y.len() != m {
            return Err(Error::DimensionMismatch {
                expected: m,
                actual: y.len(),
            });
        }

        let start = Instant::now();
        let m_f = m as f32;
        let mut final_loss = 0.0;

        for epoch in 1..=self.epochs {
            let logits = self.decision_function(x);
            let predictions = sigmoid_array(&logits);
            // Loss of the pre-update predictions, same ordering the
            // periodic diagnostic reports
            let loss = mean_bce(&logits, y);

            let residual = &predictions - y;
            let dw = x.t().dot(&residual) / m_f;
            let db = residual.sum() / m_f;

            self.weights.scaled_add(-self.learning_rate, &dw);
            self.bias -= self.learning_rate * db;

            self.loss_history.push(loss);
            final_loss = loss;

            if self.log_interval > 0 && epoch % self.log_interval == 0 {
                println!("Epoch {epoch}/{}, Loss: {loss:.4}", self.epochs);
            }
        }

        Ok(TrainReport {
            epochs_run: self.epochs,
            final_loss,
            elapsed_secs: start.elapsed().as_secs_f64(),
        })
    }

    /// Classification accuracy of the model on a labeled set.
    #[must_use]
    pub fn score(&self, x: &Array2<f32>, y: &Array1<f32>) -> f32 {
        Accuracy::default().compute(&self.predict_proba(x), y)
    }

    /// Current weight vector.
    #[must_use]
    pub fn weights(&self) -> &Array1<f32> {
        &self.weights
    }

    /// Current bias term.
    #[must_use]
    pub fn bias(&self) -> f32 {
        self.bias
    }

    /// Configured step size.
    #[must_use]
    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    /// Configured epoch count.
    #[must_use]
    pub fn epochs(&self) -> usize {
        self.epochs
    }

    /// Expected feature dimension of inputs.
    #[must_use]
    pub fn input_dim(&self) -> usize {
        self.weights.len()
    }

    /// Mean-BCE value recorded at every completed epoch.
    #[must_use]
    pub fn loss_history(&self) -> &[f32] {
        &self.loss_history
    }
}
