//! Binary classification metrics
//!
//! Metrics consume predicted probabilities together with ground-truth
//! labels and apply their own decision threshold, so a single
//! `predict_proba` pass can feed every metric. All metrics return 0.0 on
//! empty input and when their denominator is zero.
//!
//! # Example
//!
//! ```
//! use clasificar::metrics::{Accuracy, Metric};
//! use ndarray::arr1;
//!
//! let predictions = arr1(&[0.9f32, 0.8, 0.3, 0.1]);
//! let targets = arr1(&[1.0f32, 1.0, 0.0, 1.0]);
//!
//! let accuracy = Accuracy::default().compute(&predictions, &targets);
//! assert_eq!(accuracy, 0.75);
//! ```

use ndarray::Array1;

/// A scalar quality measure over probability predictions.
pub trait Metric {
    /// Evaluate the metric; `predictions` are probabilities in [0, 1] and
    /// `targets` are 0.0/1.0 labels.
    ///
    /// # Panics
    ///
    /// Implementations panic when `predictions` and `targets` differ in
    /// length.
    fn compute(&self, predictions: &Array1<f32>, targets: &Array1<f32>) -> f32;

    /// Human-readable metric name for report output.
    fn name(&self) -> &'static str;
}

/// Binarize probabilities and targets at `threshold` (inclusive for
/// predictions, targets compare against 0.5).
fn threshold_to_labels(
    predictions: &Array1<f32>,
    targets: &Array1<f32>,
    threshold: f32,
) -> (Vec<usize>, Vec<usize>) {
    assert_eq!(
        predictions.len(),
        targets.len(),
        "Predictions and targets must have same length"
    );

    let predicted = predictions
        .iter()
        .map(|&p| usize::from(p >= threshold))
        .collect();
    let actual = targets.iter().map(|&t| usize::from(t >= 0.5)).collect();
    (predicted, actual)
}

/// Counts of the four confusion-matrix cells at a threshold.
fn confusion_counts(
    predictions: &Array1<f32>,
    targets: &Array1<f32>,
    threshold: f32,
) -> (usize, usize, usize, usize) {
    let (predicted, actual) = threshold_to_labels(predictions, targets, threshold);
    let mut tp = 0;
    let mut fp = 0;
    let mut tn = 0;
    let mut fn_ = 0;
    for (&p, &a) in predicted.iter().zip(actual.iter()) {
        match (p, a) {
            (1, 1) => tp += 1,
            (1, 0) => fp += 1,
            (0, 0) => tn += 1,
            _ => fn_ += 1,
        }
    }
    (tp, fp, tn, fn_)
}

/// Fraction of predictions matching the target label.
#[derive(Debug, Clone)]
pub struct Accuracy {
    /// Decision threshold on probabilities (inclusive)
    pub threshold: f32,
}

impl Default for Accuracy {
    fn default() -> Self {
        Self { threshold: 0.5 }
    }
}

impl Metric for Accuracy {
    fn compute(&self, predictions: &Array1<f32>, targets: &Array1<f32>) -> f32 {
        let (tp, fp, tn, fn_) = confusion_counts(predictions, targets, self.threshold);
        let total = tp + fp + tn + fn_;
        if total == 0 {
            return 0.0;
        }
        (tp + tn) as f32 / total as f32
    }

    fn name(&self) -> &'static str {
        "Accuracy"
    }
}

/// Fraction of predicted positives that are actual positives.
#[derive(Debug, Clone)]
pub struct Precision {
    /// Decision threshold on probabilities (inclusive)
    pub threshold: f32,
}

impl Default for Precision {
    fn default() -> Self {
        Self { threshold: 0.5 }
    }
}

impl Metric for Precision {
    fn compute(&self, predictions: &Array1<f32>, targets: &Array1<f32>) -> f32 {
        let (tp, fp, _, _) = confusion_counts(predictions, targets, self.threshold);
        if tp + fp == 0 {
            return 0.0;
        }
        tp as f32 / (tp + fp) as f32
    }

    fn name(&self) -> &'static str {
        "Precision"
    }
}

/// Fraction of actual positives that were predicted positive.
#[derive(Debug, Clone)]
pub struct Recall {
    /// Decision threshold on probabilities (inclusive)
    pub threshold: f32,
}

impl Default for Recall {
    fn default() -> Self {
        Self { threshold: 0.5 }
    }
}

impl Metric for Recall {
    fn compute(&self, predictions: &Array1<f32>, targets: &Array1<f32>) -> f32 {
        let (tp, _, _, fn_) = confusion_counts(predictions, targets, self.threshold);
        if tp + fn_ == 0 {
            return 0.0;
        }
        tp as f32 / (tp + fn_) as f32
    }

    fn name(&self) -> &'static str {
        "Recall"
    }
}

/// Harmonic mean of precision and recall.
#[derive(Debug, Clone, Default)]
pub struct F1Score {
    precision: Precision,
    recall: Recall,
}

impl F1Score {
    /// F1 with the same threshold applied to both components.
    #[must_use]
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            precision: Precision { threshold },
            recall: Recall { threshold },
        }
    }
}

impl Metric for F1Score {
    fn compute(&self, predictions: &Array1<f32>, targets: &Array1<f32>) -> f32 {
        let p = self.precision.compute(predictions, targets);
        let r = self.recall.compute(predictions, targets);
        if p + r == 0.0 {
            return 0.0;
        }
        2.0 * p * r / (p + r)
    }

    fn name(&self) -> &'static str {
        "F1 Score"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::arr1;

    fn sample() -> (Array1<f32>, Array1<f32>) {
        // predicted labels at 0.5: [1, 1, 0, 0] vs actual [1, 0, 0, 1]
        // tp=1 fp=1 tn=1 fn=1
        (
            arr1(&[0.9f32, 0.7, 0.2, 0.4]),
            arr1(&[1.0f32, 0.0, 0.0, 1.0]),
        )
    }

    #[test]
    fn test_accuracy_mixed() {
        let (p, t) = sample();
        assert_eq!(Accuracy::default().compute(&p, &t), 0.5);
    }

    #[test]
    fn test_accuracy_perfect() {
        let p = arr1(&[0.9f32, 0.1, 0.8]);
        let t = arr1(&[1.0f32, 0.0, 1.0]);
        assert_eq!(Accuracy::default().compute(&p, &t), 1.0);
    }

    #[test]
    fn test_accuracy_empty_is_zero() {
        let empty = Array1::<f32>::from(Vec::new());
        assert_eq!(Accuracy::default().compute(&empty, &empty), 0.0);
    }

    #[test]
    #[should_panic(expected = "must have same length")]
    fn test_metric_mismatched_lengths() {
        let p = arr1(&[0.9f32, 0.1]);
        let t = arr1(&[1.0f32]);
        Accuracy::default().compute(&p, &t);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let p = arr1(&[0.5f32]);
        let t = arr1(&[1.0f32]);
        assert_eq!(Accuracy::default().compute(&p, &t), 1.0);
    }

    #[test]
    fn test_custom_threshold() {
        let p = arr1(&[0.7f32, 0.7]);
        let t = arr1(&[1.0f32, 1.0]);
        let strict = Accuracy { threshold: 0.8 };
        assert_eq!(strict.compute(&p, &t), 0.0);
    }

    #[test]
    fn test_precision_mixed() {
        let (p, t) = sample();
        assert_eq!(Precision::default().compute(&p, &t), 0.5);
    }

    #[test]
    fn test_precision_no_predicted_positives() {
        let p = arr1(&[0.1f32, 0.2]);
        let t = arr1(&[1.0f32, 1.0]);
        assert_eq!(Precision::default().compute(&p, &t), 0.0);
    }

    #[test]
    fn test_recall_mixed() {
        let (p, t) = sample();
        assert_eq!(Recall::default().compute(&p, &t), 0.5);
    }

    #[test]
    fn test_recall_no_actual_positives() {
        let p = arr1(&[0.9f32, 0.8]);
        let t = arr1(&[0.0f32, 0.0]);
        assert_eq!(Recall::default().compute(&p, &t), 0.0);
    }

    #[test]
    fn test_f1_balances_precision_and_recall() {
        // precision 1.0, recall 0.5 -> f1 = 2/3
        let p = arr1(&[0.9f32, 0.1, 0.2]);
        let t = arr1(&[1.0f32, 1.0, 0.0]);
        let f1 = F1Score::default().compute(&p, &t);
        assert_relative_eq!(f1, 2.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_f1_zero_when_nothing_positive() {
        let p = arr1(&[0.1f32, 0.2]);
        let t = arr1(&[0.0f32, 0.0]);
        assert_eq!(F1Score::default().compute(&p, &t), 0.0);
    }

    #[test]
    fn test_metric_names() {
        assert_eq!(Accuracy::default().name(), "Accuracy");
        assert_eq!(Precision::default().name(), "Precision");
        assert_eq!(Recall::default().name(), "Recall");
        assert_eq!(F1Score::default().name(), "F1 Score");
    }
}
