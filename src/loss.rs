//! Sigmoid activation and binary cross-entropy in logit space
//!
//! # Formula
//!
//! The recorded loss is the mean binary cross-entropy
//! `−mean(y·ln p + (1−y)·ln(1−p))` with `p = σ(z)`, computed through the
//! numerically stable logit-space form:
//!
//! ```text
//! L_i = max(z_i, 0) − z_i·y_i + ln(1 + exp(−|z_i|))
//! L = mean(L_i)
//! ```
//!
//! The two expressions are equal for every finite logit, but the stable form
//! never evaluates `ln` near zero, so a saturated probability yields a large
//! finite loss instead of infinity.

use ndarray::Array1;

/// Logistic function `σ(z) = 1 / (1 + exp(−z))`.
///
/// Evaluated branch-wise so that neither `exp` call can overflow:
/// `σ(0) == 0.5` exactly, the output is monotone in `z`, and saturation at
/// the extremes stays finite (it rounds to exactly 0.0 or 1.0 once the
/// distance from the true value drops below f32 resolution).
///
/// # Example
///
/// ```
/// use clasificar::loss::sigmoid;
///
/// assert_eq!(sigmoid(0.0), 0.5);
/// assert!(sigmoid(4.0) > 0.5);
/// assert!(sigmoid(-4.0) < 0.5);
/// ```
#[must_use]
pub fn sigmoid(z: f32) -> f32 {
    if z >= 0.0 {
        let exp_neg = (-z).exp();
        1.0 / (1.0 + exp_neg)
    } else {
        let exp_z = z.exp();
        exp_z / (1.0 + exp_z)
    }
}

/// Elementwise [`sigmoid`] over a vector of logits.
#[must_use]
pub fn sigmoid_array(z: &Array1<f32>) -> Array1<f32> {
    z.mapv(sigmoid)
}

/// Stable per-element BCE: `max(z, 0) − z·y + ln(1 + exp(−|z|))`
fn stable_bce(logit: f32, target: f32) -> f32 {
    let relu = logit.max(0.0);
    let abs_z = logit.abs();
    relu - logit * target + (1.0 + (-abs_z).exp()).ln()
}

/// Mean binary cross-entropy of a batch of logits against 0/1 targets.
///
/// Callers guard against empty input (`train` rejects empty datasets before
/// any loss is computed); an empty pair of vectors divides zero by zero.
///
/// # Panics
///
/// Panics if `logits` and `targets` differ in length.
#[must_use]
pub fn mean_bce(logits: &Array1<f32>, targets: &Array1<f32>) -> f32 {
    assert_eq!(
        logits.len(),
        targets.len(),
        "Logits and targets must have same length"
    );

    logits
        .iter()
        .zip(targets.iter())
        .map(|(&z, &y)| stable_bce(z, y))
        .sum::<f32>()
        / logits.len() as f32
}
