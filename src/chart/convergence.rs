//! Golden ratio convergence chart

use plotters::prelude::*;

use super::{render_svg, ChartDocument, FONT};
use crate::common::{Error, Result};
use crate::sequence::{convergence_points, ratios, Sequence, GOLDEN_RATIO};

pub const TITLE: &str = "Convergence to the Golden Ratio";

/// Fixed y range; every defined ratio lies in [1, 2]
const Y_RANGE: std::ops::Range<f64> = 1.0..2.2;

const MARKER_SIZE: i32 = 4;

/// Render the convergence chart for `sequence`
pub fn render(sequence: &Sequence, size: (u32, u32)) -> Result<ChartDocument> {
    let points = convergence_points(&ratios(sequence));
    tracing::debug!(points = points.len(), "rendering convergence chart");

    let x_end = sequence.len().max(1) as f64;
    let ratio_color = RGBColor(55, 126, 184).mix(0.8);
    let gold = RGBColor(255, 215, 0);

    let svg = render_svg(size, |root| {
        let mut chart = ChartBuilder::on(root)
            .caption(TITLE, (FONT, 24).into_font())
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(60)
            .build_cartesian_2d(0f64..(x_end + 0.5), Y_RANGE)
            .map_err(Error::render)?;

        chart
            .configure_mesh()
            .x_desc("Index (n)")
            .y_desc("Ratio F(n)/F(n-1)")
            .x_label_formatter(&|x| format!("{x:.0}"))
            .y_label_formatter(&|y| format!("{y:.1}"))
            .draw()
            .map_err(Error::render)?;

        chart
            .draw_series(LineSeries::new(
                points.iter().map(|&(n, r)| (n as f64, r)),
                ratio_color.stroke_width(2),
            ))
            .map_err(Error::render)?
            .label("F(n)/F(n-1)")
            .legend(move |(x, y)| Circle::new((x + 8, y), MARKER_SIZE, ratio_color.filled()));

        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(n, r)| Circle::new((n as f64, r), MARKER_SIZE, ratio_color.filled())),
            )
            .map_err(Error::render)?;

        chart
            .draw_series(LineSeries::new(
                [(1.0, GOLDEN_RATIO), (x_end, GOLDEN_RATIO)],
                gold.stroke_width(2),
            ))
            .map_err(Error::render)?
            .label(reference_label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], gold.stroke_width(2)));

        let note_x = 10f64.min(x_end / 2.0);
        for (line, offset) in [
            ("Consecutive ratios converge", 0.28),
            ("to the Golden Ratio φ ≈ 1.618...", 0.2),
        ] {
            chart
                .draw_series(std::iter::once(Text::new(
                    line,
                    (note_x, GOLDEN_RATIO + offset),
                    (FONT, 16).into_font(),
                )))
                .map_err(Error::render)?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.7))
            .border_style(BLACK.mix(0.5))
            .draw()
            .map_err(Error::render)?;

        Ok(())
    })?;

    Ok(ChartDocument { title: TITLE, svg })
}

/// Legend label for the φ reference line
pub fn reference_label() -> String {
    format!("Golden Ratio (φ ≈ {GOLDEN_RATIO:.8})")
}
