//! Exponential growth chart
//!
//! Bars of F(n) on a logarithmic axis with the Binet curve φⁿ/√5 overlaid.

use plotters::prelude::*;

use super::{render_svg, ChartDocument, FONT};
use crate::common::{Error, Result};
use crate::sequence::{binet, to_f64_saturating, Sequence, GOLDEN_RATIO};

pub const TITLE: &str = "Exponential Growth of Fibonacci Sequence";

/// F(1437) is the last term below 1e300; beyond it the log axis span is
/// no longer representable
pub const MAX_PLOTTABLE_TERMS: usize = 1438;

/// Upper bound of the log axis
const Y_CEILING: f64 = 1e303;

/// Samples along the trend curve
const TREND_SAMPLES: usize = 100;

/// Bottom of the log axis, below the smallest drawn value 1/√5
const Y_FLOOR: f64 = 0.1;

const BAR_WIDTH: f64 = 0.8;

/// Render the growth chart for `sequence`
pub fn render(sequence: &Sequence, size: (u32, u32)) -> Result<ChartDocument> {
    if sequence.len() > MAX_PLOTTABLE_TERMS {
        tracing::warn!(
            terms = sequence.len(),
            drawn = MAX_PLOTTABLE_TERMS,
            "growth chart truncated to its largest drawable prefix"
        );
    }

    let values: Vec<(f64, f64)> = sequence
        .rows()
        .take(MAX_PLOTTABLE_TERMS)
        .map(|(n, term)| (n as f64, to_f64_saturating(term)))
        .collect();
    tracing::debug!(points = values.len(), "rendering growth chart");

    let x_max = values.last().map_or(0.0, |&(x, _)| x);
    let peak = values.last().map_or(1.0, |&(_, y)| y).max(binet(x_max));
    let y_top = (peak * 2.0).clamp(10.0, Y_CEILING);

    let svg = render_svg(size, |root| {
        let mut chart = ChartBuilder::on(root)
            .caption(TITLE, (FONT, 24).into_font())
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(80)
            .build_cartesian_2d(-0.5f64..(x_max + 0.5), (Y_FLOOR..y_top).log_scale())
            .map_err(Error::render)?;

        chart
            .configure_mesh()
            .x_desc("Index (n)")
            .y_desc("Fibonacci Number F(n)")
            .x_label_formatter(&|x| format!("{x:.0}"))
            .y_label_formatter(&|y| format!("{y:.0e}"))
            .draw()
            .map_err(Error::render)?;

        // F(0) = 0 has no place on a log axis
        let bar_color = RGBColor(55, 83, 109).mix(0.7);
        let half = BAR_WIDTH / 2.0;
        chart
            .draw_series(values.iter().filter(|&&(_, y)| y > 0.0).map(|&(x, y)| {
                Rectangle::new([(x - half, Y_FLOOR), (x + half, y)], bar_color.filled())
            }))
            .map_err(Error::render)?
            .label("Fibonacci Numbers")
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], bar_color.filled()));

        let trend = (0..TREND_SAMPLES).map(|i| {
            let x = x_max * i as f64 / (TREND_SAMPLES - 1) as f64;
            (x, binet(x).min(y_top))
        });
        chart
            .draw_series(LineSeries::new(trend, RED.stroke_width(2)))
            .map_err(Error::render)?
            .label(trend_label())
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

        let note_x = x_max * 0.5;
        let note_y = (peak * 0.5).max(Y_FLOOR * 10.0);
        chart
            .draw_series(std::iter::once(Text::new(
                "The Fibonacci sequence grows exponentially",
                (note_x, note_y),
                (FONT, 16).into_font(),
            )))
            .map_err(Error::render)?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.7))
            .border_style(BLACK.mix(0.5))
            .draw()
            .map_err(Error::render)?;

        Ok(())
    })?;

    Ok(ChartDocument { title: TITLE, svg })
}

/// Legend label for the Binet curve
pub fn trend_label() -> String {
    format!("φⁿ/√5 ≈ {GOLDEN_RATIO:.4}ⁿ/√5")
}
