//! Labeled 2-D datasets and synthetic cluster generation
//!
//! A [`Dataset`] pairs an `m × d` feature matrix with `m` binary labels and
//! is immutable once built. [`Blobs`] synthesizes the two-cluster teaching
//! dataset the demo trains on.

mod blobs;

pub use blobs::Blobs;

pub(crate) use blobs::standard_normal;

use ndarray::{Array1, Array2};

use crate::error::{Error, Result};

/// An ordered collection of feature vectors with class labels.
///
/// Labels travel as `f32` cluster indices (0.0 and 1.0 in the two-cluster
/// case) so the gradient arithmetic can consume them directly. Label
/// values are not validated.
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Array2<f32>,
    labels: Array1<f32>,
}

impl Dataset {
    /// Pair features with labels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] when the label count differs
    /// from the number of feature rows.
    pub fn new(features: Array2<f32>, labels: Array1<f32>) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(Error::DimensionMismatch {
                expected: features.nrows(),
                actual: labels.len(),
            });
        }
        Ok(Self { features, labels })
    }

    /// The `m × d` feature matrix.
    #[must_use]
    pub fn features(&self) -> &Array2<f32> {
        &self.features
    }

    /// The `m` labels, 0.0 or 1.0 per sample.
    #[must_use]
    pub fn labels(&self) -> &Array1<f32> {
        &self.labels
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.nrows()
    }

    /// Whether the dataset holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Feature dimension per sample.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.features.ncols()
    }

    /// Per-axis `(min, max)` extent of the first two feature columns,
    /// returned as `((x_min, x_max), (y_min, y_max))`.
    ///
    /// An empty dataset yields infinite sentinel bounds; the renderers
    /// reject empty datasets before consulting the box.
    ///
    /// # Panics
    ///
    /// Panics if the feature dimension is less than 2.
    #[must_use]
    pub fn bounding_box(&self) -> ((f32, f32), (f32, f32)) {
        let axis_extent = |col: usize| {
            let values = self.features.column(col);
            let min = values.iter().copied().fold(f32::INFINITY, f32::min);
            let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            (min, max)
        };
        (axis_extent(0), axis_extent(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_dataset_new() {
        let features = arr2(&[[1.0f32, 2.0], [3.0, 4.0]]);
        let labels = Array1::from(vec![0.0f32, 1.0]);

        let data = Dataset::new(features, labels).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.dim(), 2);
        assert!(!data.is_empty());
    }

    #[test]
    fn test_dataset_label_count_mismatch() {
        let features = arr2(&[[1.0f32, 2.0], [3.0, 4.0]]);
        let labels = Array1::from(vec![0.0f32]);

        let err = Dataset::new(features, labels).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_dataset_empty() {
        let features = Array2::<f32>::zeros((0, 2));
        let labels = Array1::<f32>::from(Vec::new());

        let data = Dataset::new(features, labels).unwrap();
        assert!(data.is_empty());
        assert_eq!(data.len(), 0);
    }

    #[test]
    fn test_bounding_box() {
        let features = arr2(&[[-3.0f32, 1.0], [2.0, -4.0], [0.5, 5.0]]);
        let labels = Array1::from(vec![0.0f32, 1.0, 0.0]);
        let data = Dataset::new(features, labels).unwrap();

        let ((x_min, x_max), (y_min, y_max)) = data.bounding_box();
        assert_eq!(x_min, -3.0);
        assert_eq!(x_max, 2.0);
        assert_eq!(y_min, -4.0);
        assert_eq!(y_max, 5.0);
    }
}
