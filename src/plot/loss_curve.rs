//! Loss-curve rendering
//!
//! Plots the per-epoch training loss recorded by the model as a line over
//! iteration count, starting the y axis at zero so runs of different
//! magnitude stay comparable.

use std::path::Path;

use plotters::prelude::*;

use crate::error::{Error, Result};
use crate::neuron::LogisticNeuron;

/// Render the model's recorded loss history to an SVG at `path`.
///
/// # Errors
///
/// [`Error::EmptyLossHistory`] when the model has not been trained;
/// [`Error::Render`] when the backend fails.
pub fn loss_curve<P: AsRef<Path>>(model: &LogisticNeuron, path: P) -> Result<()> {
    let history = model.loss_history();
    if history.is_empty() {
        return Err(Error::EmptyLossHistory);
    }
    render(history, path.as_ref()).map_err(|e| Error::Render(e.to_string()))
}

fn render(history: &[f32], path: &Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let max = history.iter().fold(0.0f32, |a, &b| a.max(b));
    let y_max = if max > 0.0 { max * 1.05 } else { 1.0 };

    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Loss over Training Iterations", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0..history.len(), 0.0f32..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("Iterations")
        .y_desc("Loss")
        .draw()?;

    chart.draw_series(LineSeries::new(
        history.iter().enumerate().map(|(i, &loss)| (i, loss)),
        &BLUE,
    ))?;

    root.present()?;
    Ok(())
}
