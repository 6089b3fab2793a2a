//! Training visualization
//!
//! Two SVG renderers built on plotters: a decision-boundary heatmap with
//! the dataset scattered on top, and the loss curve over training
//! iterations. A terminal sparkline covers the case where writing files
//! is not wanted.

mod boundary;
mod loss_curve;

pub use boundary::decision_boundary;
pub use loss_curve::loss_curve;

/// Unicode block characters from lowest to highest.
pub const SPARK_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render a compact sparkline of `values`, at most `width` characters.
///
/// Values are subsampled evenly when there are more than `width` of them
/// and normalized to the eight block heights. A constant series renders
/// at mid height.
///
/// # Example
///
/// ```
/// use clasificar::plot::sparkline;
///
/// let line = sparkline(&[3.0, 2.0, 1.0, 0.5], 4);
/// assert_eq!(line.chars().count(), 4);
/// ```
#[must_use]
pub fn sparkline(values: &[f32], width: usize) -> String {
    if values.is_empty() || width == 0 {
        return String::new();
    }

    let step = if values.len() > width {
        values.len() as f32 / width as f32
    } else {
        1.0
    };

    let last = values.len() - 1;
    let sampled: Vec<f32> = (0..values.len().min(width))
        .map(|i| values[((i as f32 * step) as usize).min(last)])
        .collect();

    let min = sampled.iter().fold(f32::INFINITY, |a, &b| a.min(b));
    let max = sampled.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));

    if (max - min).abs() < f32::EPSILON {
        return SPARK_CHARS[4].to_string().repeat(sampled.len());
    }

    sampled
        .iter()
        .map(|&v| {
            let normalized = (v - min) / (max - min);
            let idx = (normalized * 7.0).round() as usize;
            SPARK_CHARS[idx.min(7)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkline_empty() {
        assert_eq!(sparkline(&[], 10), "");
    }

    #[test]
    fn test_sparkline_zero_width() {
        assert_eq!(sparkline(&[1.0, 2.0], 0), "");
    }

    #[test]
    fn test_sparkline_constant_renders_mid_blocks() {
        let line = sparkline(&[2.0, 2.0, 2.0], 10);
        assert_eq!(line, SPARK_CHARS[4].to_string().repeat(3));
    }

    #[test]
    fn test_sparkline_spans_full_range() {
        let line = sparkline(&[0.0, 1.0], 2);
        let chars: Vec<char> = line.chars().collect();
        assert_eq!(chars[0], SPARK_CHARS[0]);
        assert_eq!(chars[1], SPARK_CHARS[7]);
    }

    #[test]
    fn test_sparkline_subsamples_long_input() {
        let values: Vec<f32> = (0..1000).map(|i| i as f32).collect();
        let line = sparkline(&values, 40);
        assert_eq!(line.chars().count(), 40);
    }

    #[test]
    fn test_sparkline_fractional_step_subsample() {
        // len 7 over width 5: step 1.4 samples indices 0,1,2,4,5
        let values: Vec<f32> = (0..7).map(|i| i as f32).collect();
        let line = sparkline(&values, 5);
        let chars: Vec<char> = line.chars().collect();

        assert_eq!(chars.len(), 5);
        assert_eq!(chars[0], SPARK_CHARS[0]);
        assert_eq!(chars[4], SPARK_CHARS[7]);
    }

    #[test]
    fn test_sparkline_descending_loss_shape() {
        let line = sparkline(&[8.0, 4.0, 2.0, 1.0], 4);
        let chars: Vec<char> = line.chars().collect();
        assert_eq!(chars[0], SPARK_CHARS[7]);
        assert_eq!(chars[3], SPARK_CHARS[0]);
    }
}
