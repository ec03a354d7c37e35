//! ROC plot rendering (PNG)
//!
//! Text is rasterised with `ab_glyph` from a bundled DejaVu Sans, so no
//! system font stack is needed. The font is registered as `sans-serif` on
//! first use.

use std::path::Path;
use std::sync::OnceLock;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use tracing::info;

use crate::metrics::RocCurve;
use crate::{Error, Result};

/// Output image size in pixels.
pub const PLOT_SIZE: (u32, u32) = (640, 480);

const FONT_FAMILY: &str = "sans-serif";
const FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

static FONT_REGISTERED: OnceLock<bool> = OnceLock::new();

/// Register the bundled font under `sans-serif`. Safe to call repeatedly.
///
/// # Errors
///
/// Returns `Error::Plot` if the bundled font cannot be parsed.
pub fn ensure_font() -> Result<()> {
    let ok = *FONT_REGISTERED.get_or_init(|| {
        plotters::style::register_font(FONT_FAMILY, FontStyle::Normal, FONT_BYTES).is_ok()
    });
    if ok {
        Ok(())
    } else {
        Err(Error::Plot(format!("bundled {FONT_FAMILY} font is invalid")))
    }
}

/// Render an ROC curve with its AUC in the legend and write it as a PNG.
///
/// The dashed reference line runs from `(1, 0)` to `(0, 1)`; the curve
/// crosses it at the equal error rate.
///
/// # Errors
///
/// Returns `Error::Plot` if drawing or PNG encoding fails.
pub fn render_roc(path: impl AsRef<Path>, roc: &RocCurve, auc: f64) -> Result<()> {
    ensure_font()?;
    let path = path.as_ref();
    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Receiver operating characteristic", (FONT_FAMILY, 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0_f64..1.0_f64, 0.0_f64..1.05_f64)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("False Positive Rate")
        .y_desc("True Positive Rate")
        .draw()
        .map_err(plot_err)?;

    let points: Vec<(f64, f64)> = roc
        .fpr()
        .iter()
        .copied()
        .zip(roc.tpr().iter().copied())
        .collect();
    chart
        .draw_series(LineSeries::new(points, &BLUE))
        .map_err(plot_err)?
        .label(format!("ROC curve (area = {auc:.2})"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(DashedLineSeries::new(
            vec![(1.0, 0.0), (0.0, 1.0)],
            6,
            4,
            BLACK.into(),
        ))
        .map_err(plot_err)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    info!(path = %path.display(), "rendered ROC plot");
    Ok(())
}

fn plot_err(err: impl std::fmt::Display) -> Error {
    Error::Plot(err.to_string())
}
