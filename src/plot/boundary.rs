//! Decision-boundary heatmap
//!
//! Shades a 100x100 grid over the padded bounding box of the dataset by
//! the model's predicted probability (blue for class 0, white at 0.5, red
//! for class 1), scatters the labeled samples on top, and attaches a 0 to 1
//! probability colorbar at the right edge. The grid is scored in a single
//! batched forward pass.

use std::path::Path;

use ndarray::Array2;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::FontTransform;

use crate::data::Dataset;
use crate::error::{Error, Result};
use crate::neuron::LogisticNeuron;

/// Cells per axis of the probability grid.
const GRID_STEPS: usize = 100;
/// Distinct probability shades; keeps the SVG palette small.
const SHADE_LEVELS: f32 = 20.0;
/// Padding around the data bounding box, in data units.
const BOX_MARGIN: f32 = 1.0;
/// Horizontal pixels reserved for the probability colorbar.
const COLORBAR_WIDTH: u32 = 100;

/// Render the model's decision boundary over `data` to an SVG at `path`.
///
/// The plot covers the dataset's bounding box padded by one unit on every
/// side, with a colorbar mapping the cell shades back to probabilities.
/// Both the dataset and the model must be two-dimensional.
///
/// # Errors
///
/// [`Error::EmptyDataset`] when `data` has no samples;
/// [`Error::DimensionMismatch`] when the dataset or the model is not
/// two-dimensional; [`Error::Render`] when the backend fails.
pub fn decision_boundary<P: AsRef<Path>>(
    model: &LogisticNeuron,
    data: &Dataset,
    path: P,
) -> Result<()> {
    if data.is_empty() {
        return Err(Error::EmptyDataset);
    }
    if data.dim() != 2 {
        return Err(Error::DimensionMismatch {
            expected: 2,
            actual: data.dim(),
        });
    }
    if model.input_dim() != 2 {
        return Err(Error::DimensionMismatch {
            expected: 2,
            actual: model.input_dim(),
        });
    }
    render(model, data, path.as_ref()).map_err(|e| Error::Render(e.to_string()))
}

fn render(
    model: &LogisticNeuron,
    data: &Dataset,
    path: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let ((x_min, x_max), (y_min, y_max)) = data.bounding_box();
    let (x_lo, x_hi) = (x_min - BOX_MARGIN, x_max + BOX_MARGIN);
    let (y_lo, y_hi) = (y_min - BOX_MARGIN, y_max + BOX_MARGIN);

    let dx = (x_hi - x_lo) / GRID_STEPS as f32;
    let dy = (y_hi - y_lo) / GRID_STEPS as f32;

    // Score every cell center in one batched pass
    let mut grid = Array2::<f32>::zeros((GRID_STEPS * GRID_STEPS, 2));
    for i in 0..GRID_STEPS {
        for j in 0..GRID_STEPS {
            let row = i * GRID_STEPS + j;
            grid[[row, 0]] = x_lo + (i as f32 + 0.5) * dx;
            grid[[row, 1]] = y_lo + (j as f32 + 0.5) * dy;
        }
    }
    let probs = model.predict_proba(&grid);

    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let (plot_area, bar_area) = root.split_horizontally(800 - COLORBAR_WIDTH);

    let mut chart = ChartBuilder::on(&plot_area)
        .caption("Logistic Regression Decision Boundary", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("Feature 1")
        .y_desc("Feature 2")
        .draw()?;

    chart.draw_series((0..GRID_STEPS * GRID_STEPS).map(|row| {
        let i = row / GRID_STEPS;
        let j = row % GRID_STEPS;
        let x = x_lo + i as f32 * dx;
        let y = y_lo + j as f32 * dy;
        let shade = (probs[row] * SHADE_LEVELS).floor() / SHADE_LEVELS;
        Rectangle::new(
            [(x, y), (x + dx, y + dy)],
            probability_color(shade).mix(0.7).filled(),
        )
    }))?;

    let mut class0 = Vec::new();
    let mut class1 = Vec::new();
    for (row, &label) in data.features().rows().into_iter().zip(data.labels()) {
        let point = (row[0], row[1]);
        if label >= 0.5 {
            class1.push(point);
        } else {
            class0.push(point);
        }
    }

    chart.draw_series(
        class0
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
    )?;
    chart.draw_series(
        class1
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, RED.filled())),
    )?;
    chart.draw_series(
        class0
            .iter()
            .chain(class1.iter())
            .map(|&(x, y)| Circle::new((x, y), 3, BLACK.stroke_width(1))),
    )?;

    draw_colorbar(&bar_area)?;

    root.present()?;
    Ok(())
}

/// Vertical 0 to 1 probability strip in the same quantized palette as the
/// grid cells, with tick labels and the output-axis caption.
fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let (x0, y0) = (10i32, 60i32);
    let bar_w = 28i32;
    let levels = SHADE_LEVELS as i32;
    let seg = 24i32;
    let bar_h = seg * levels;

    for i in 0..levels {
        let p = i as f32 / SHADE_LEVELS;
        let y_top = y0 + bar_h - (i + 1) * seg;
        area.draw(&Rectangle::new(
            [(x0, y_top), (x0 + bar_w, y_top + seg)],
            probability_color(p).mix(0.7).filled(),
        ))?;
    }
    area.draw(&Rectangle::new(
        [(x0, y0), (x0 + bar_w, y0 + bar_h)],
        BLACK.stroke_width(1),
    ))?;

    for (label, p) in [("0.0", 0.0f32), ("0.5", 0.5), ("1.0", 1.0)] {
        let y = y0 + bar_h - (bar_h as f32 * p) as i32;
        area.draw(&Text::new(
            label,
            (x0 + bar_w + 6, y - 7),
            ("sans-serif", 15).into_font(),
        ))?;
    }

    area.draw(&Text::new(
        "Logistic Regression Output",
        (x0 + bar_w + 44, y0 + bar_h - 140),
        ("sans-serif", 15)
            .into_font()
            .transform(FontTransform::Rotate270),
    ))?;

    Ok(())
}

/// Blue at 0.0 through white at 0.5 to red at 1.0.
fn probability_color(p: f32) -> RGBColor {
    let p = f64::from(p.clamp(0.0, 1.0));
    let (r, g, b) = if p < 0.5 {
        let t = p * 2.0;
        (255.0 * t, 255.0 * t, 255.0)
    } else {
        let t = (p - 0.5) * 2.0;
        (255.0, 255.0 * (1.0 - t), 255.0 * (1.0 - t))
    };
    RGBColor(r as u8, g as u8, b as u8)
}
