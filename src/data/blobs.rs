//! Synthetic isotropic Gaussian clusters
//!
//! Generates `m` two-dimensional points spread across `k` clusters: each
//! cluster center is either supplied or sampled uniformly from a center box,
//! samples are split evenly across clusters (remainder to the leading ones),
//! and every point is its center plus `N(0, std²)` noise per axis. Labels
//! are the cluster indices; rows are shuffled so no label ordering survives.

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::Dataset;
use crate::error::{Error, Result};

/// Sample the standard normal distribution using the Box-Muller transform.
pub(crate) fn standard_normal<R: Rng>(rng: &mut R) -> f32 {
    let u1: f64 = rng.random::<f64>().max(1e-10);
    let u2: f64 = rng.random::<f64>();
    ((-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()) as f32
}

/// Builder for two-dimensional Gaussian cluster datasets.
///
/// Defaults: 2 clusters, cluster standard deviation 1.0, centers sampled
/// from (−10, 10) per axis, OS-seeded randomness.
///
/// # Example
///
/// ```
/// use clasificar::Blobs;
///
/// let data = Blobs::new(100)
///     .with_centers(vec![[-5.0, -5.0], [5.0, 5.0]])
///     .with_cluster_std(2.0)
///     .with_seed(42)
///     .generate()
///     .unwrap();
///
/// assert_eq!(data.len(), 100);
/// assert_eq!(data.dim(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Blobs {
    n_samples: usize,
    n_clusters: usize,
    cluster_std: f32,
    center_box: (f32, f32),
    centers: Option<Vec<[f32; 2]>>,
    seed: Option<u64>,
}

impl Blobs {
    /// Create a generator for `n_samples` points with the defaults above.
    #[must_use]
    pub fn new(n_samples: usize) -> Self {
        Self {
            n_samples,
            n_clusters: 2,
            cluster_std: 1.0,
            center_box: (-10.0, 10.0),
            centers: None,
            seed: None,
        }
    }

    /// Number of clusters to sample centers for. Must agree with the
    /// center count when explicit centers are set.
    #[must_use]
    pub fn with_clusters(mut self, n_clusters: usize) -> Self {
        self.n_clusters = n_clusters;
        self
    }

    /// Per-axis standard deviation of the cluster noise.
    #[must_use]
    pub fn with_cluster_std(mut self, cluster_std: f32) -> Self {
        self.cluster_std = cluster_std;
        self
    }

    /// Uniform sampling range for cluster centers on both axes.
    #[must_use]
    pub fn with_center_box(mut self, low: f32, high: f32) -> Self {
        self.center_box = (low, high);
        self
    }

    /// Pin the cluster centers explicitly. Overrides the cluster count.
    #[must_use]
    pub fn with_centers(mut self, centers: Vec<[f32; 2]>) -> Self {
        self.n_clusters = centers.len();
        self.centers = Some(centers);
        self
    }

    /// Seed the generator for reproducible datasets.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate the dataset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBlobs`] for zero samples, zero clusters, or
    /// an explicit center list whose length differs from the cluster count.
    pub fn generate(&self) -> Result<Dataset> {
        if self.n_samples == 0 {
            return Err(Error::InvalidBlobs(
                "at least one sample is required".to_string(),
            ));
        }
        if self.n_clusters == 0 {
            return Err(Error::InvalidBlobs(
                "at least one cluster is required".to_string(),
            ));
        }
        if let Some(centers) = &self.centers {
            if centers.len() != self.n_clusters {
                return Err(Error::InvalidBlobs(format!(
                    "center count {} does not match cluster count {}",
                    centers.len(),
                    self.n_clusters
                )));
            }
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let centers: Vec<[f32; 2]> = match &self.centers {
            Some(centers) => centers.clone(),
            None => {
                let (low, high) = self.center_box;
                (0..self.n_clusters)
                    .map(|_| {
                        [
                            low + (high - low) * rng.random::<f32>(),
                            low + (high - low) * rng.random::<f32>(),
                        ]
                    })
                    .collect()
            }
        };

        // Even split, remainder spread over the leading clusters
        let base = self.n_samples / self.n_clusters;
        let remainder = self.n_samples % self.n_clusters;

        let mut rows: Vec<([f32; 2], f32)> = Vec::with_capacity(self.n_samples);
        for (idx, center) in centers.iter().enumerate() {
            let count = base + usize::from(idx < remainder);
            for _ in 0..count {
                let point = [
                    center[0] + self.cluster_std * standard_normal(&mut rng),
                    center[1] + self.cluster_std * standard_normal(&mut rng),
                ];
                rows.push((point, idx as f32));
            }
        }
        rows.shuffle(&mut rng);

        let mut features = Array2::zeros((self.n_samples, 2));
        let mut labels = Array1::zeros(self.n_samples);
        for (i, (point, label)) in rows.iter().enumerate() {
            features[[i, 0]] = point[0];
            features[[i, 1]] = point[1];
            labels[i] = *label;
        }
        Dataset::new(features, labels)
    }
}
