//! Chart rendering
//!
//! Both charts are drawn with the plotters SVG backend into a string and
//! wrapped in a standalone HTML document, so the written files open in any
//! browser without network access or external assets.

pub mod convergence;
pub mod growth;

use std::borrow::Cow;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::common::config::ChartConfig;
use crate::common::{Error, Result};
use crate::sequence::{self, Sequence};

/// Caption and annotation font family
pub(crate) const FONT: &str = "sans-serif";

/// A rendered chart ready to be written as HTML
#[derive(Debug, Clone)]
pub struct ChartDocument {
    pub title: &'static str,
    pub svg: String,
}

impl ChartDocument {
    /// The chart as a self-contained HTML page
    pub fn to_html(&self) -> String {
        format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <title>{title}</title>\n\
             <style>body {{ margin: 0; background: #ffffff; display: flex; justify-content: center; }}</style>\n\
             </head>\n\
             <body>\n\
             {svg}\n\
             </body>\n\
             </html>\n",
            title = self.title,
            svg = self.svg,
        )
    }

    /// Write the HTML page, creating the parent directory if needed
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| Error::file_write(parent, &e))?;
            }
        }
        std::fs::write(path, self.to_html()).map_err(|e| Error::file_write(path, &e))?;
        tracing::info!("Wrote {} to {}", self.title, path.display());
        Ok(())
    }
}

/// The sequence the charts are drawn from
///
/// Sequences shorter than `min_terms` say little about growth, so the charts
/// fall back to a freshly generated `fallback_terms` prefix instead. An empty
/// sequence always falls back.
pub fn chart_window<'a>(sequence: &'a Sequence, config: &ChartConfig) -> Cow<'a, Sequence> {
    if sequence.is_empty() || sequence.len() < config.min_terms {
        tracing::debug!(
            terms = sequence.len(),
            fallback = config.fallback_terms,
            "sequence too short to chart, using fallback window"
        );
        let fallback = i64::try_from(config.fallback_terms).unwrap_or(i64::MAX);
        Cow::Owned(sequence::generate(fallback))
    } else {
        Cow::Borrowed(sequence)
    }
}

/// Render both charts from the same window
pub fn render_all(
    sequence: &Sequence,
    config: &ChartConfig,
) -> Result<(ChartDocument, ChartDocument)> {
    let window = chart_window(sequence, config);
    let size = (config.width, config.height);
    Ok((
        growth::render(&window, size)?,
        convergence::render(&window, size)?,
    ))
}

/// Draw onto an SVG canvas of the given size and return the markup
pub(crate) fn render_svg<F>(size: (u32, u32), draw: F) -> Result<String>
where
    F: FnOnce(&DrawingArea<SVGBackend<'_>, Shift>) -> Result<()>,
{
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE).map_err(Error::render)?;
        draw(&root)?;
        root.present().map_err(Error::render)?;
    }
    Ok(svg)
}
