use std::path::Path;

use anyhow::{anyhow, Result};
use plotters::coord::ranged1d::{AsRangedCoord, ValueFormatter};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::color::series_palette;
use crate::data::model::{PlotSeries, ViewOptions};

// ---------------------------------------------------------------------------
// Headless figure rendering (--outfile)
// ---------------------------------------------------------------------------

const FIGURE_SIZE: (u32, u32) = (1024, 768);

/// Write the figure to `path`.
///
/// The backend follows the extension: `.svg` renders as vector graphics,
/// anything else goes through the bitmap backend (PNG and friends).
/// Variants are drawn first with palette colours; the reference goes on top
/// in black.
pub fn save_figure(
    path: &Path,
    variants: &[PlotSeries],
    reference: &PlotSeries,
    view: &ViewOptions,
) -> Result<()> {
    let svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

    if svg {
        let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
        render_on(&root, variants, reference, view)
    } else {
        let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
        render_on(&root, variants, reference, view)
    }
}

fn render_on<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    variants: &[PlotSeries],
    reference: &PlotSeries,
    view: &ViewOptions,
) -> Result<()> {
    root.fill(&WHITE).map_err(|e| anyhow!("filling figure: {e}"))?;

    let (x_range, y_range) = axis_ranges(variants, reference, view);

    match (view.xlog, view.ylog) {
        (false, false) => draw_chart(
            root,
            x_range.0..x_range.1,
            y_range.0..y_range.1,
            variants,
            reference,
            view,
        )?,
        (true, false) => draw_chart(
            root,
            (x_range.0..x_range.1).log_scale(),
            y_range.0..y_range.1,
            variants,
            reference,
            view,
        )?,
        (false, true) => draw_chart(
            root,
            x_range.0..x_range.1,
            (y_range.0..y_range.1).log_scale(),
            variants,
            reference,
            view,
        )?,
        (true, true) => draw_chart(
            root,
            (x_range.0..x_range.1).log_scale(),
            (y_range.0..y_range.1).log_scale(),
            variants,
            reference,
            view,
        )?,
    }

    root.present()
        .map_err(|e| anyhow!("writing figure: {e}"))?;
    Ok(())
}

fn draw_chart<DB, XR, YR>(
    root: &DrawingArea<DB, Shift>,
    x_range: XR,
    y_range: YR,
    variants: &[PlotSeries],
    reference: &PlotSeries,
    view: &ViewOptions,
) -> Result<()>
where
    DB: DrawingBackend,
    XR: AsRangedCoord<Value = f64>,
    YR: AsRangedCoord<Value = f64>,
    XR::CoordDescType: ValueFormatter<f64>,
    YR::CoordDescType: ValueFormatter<f64>,
{
    let caption_size = view.font_size.unwrap_or(20.0);

    let mut chart = ChartBuilder::on(root)
        .caption(&view.title, ("sans-serif", caption_size))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| anyhow!("building chart: {e}"))?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(view.x_label()).y_desc(view.y_label());
    if let Some(fs) = view.font_size {
        mesh.axis_desc_style(("sans-serif", fs))
            .label_style(("sans-serif", fs * 0.8));
    }
    mesh.draw().map_err(|e| anyhow!("drawing mesh: {e}"))?;

    let stroke = view
        .line_width
        .map(|w| w.round().max(1.0) as u32)
        .unwrap_or(1);
    let colors = series_palette(variants.len());

    for (series, (r, g, b)) in variants.iter().zip(colors) {
        chart
            .draw_series(LineSeries::new(
                points(series),
                RGBColor(r, g, b).stroke_width(stroke),
            ))
            .map_err(|e| anyhow!("drawing series {}: {e}", series.label))?;
    }

    // Reference on top, in black, so it stands out against the variants.
    chart
        .draw_series(LineSeries::new(
            points(reference),
            BLACK.stroke_width(stroke),
        ))
        .map_err(|e| anyhow!("drawing reference series: {e}"))?;

    Ok(())
}

fn points(series: &PlotSeries) -> impl Iterator<Item = (f64, f64)> + '_ {
    series.x.iter().zip(&series.y).map(|(&x, &y)| (x, y))
}

// ---------------------------------------------------------------------------
// Axis ranges
// ---------------------------------------------------------------------------

/// Data-driven axis ranges with explicit flag overrides applied on top.
///
/// Log axes only consider positive values when scanning the data, and both
/// ends are nudged apart when the scan collapses to a point (a single-bin
/// ARF, say) so chart construction never sees an empty range.
fn axis_ranges(
    variants: &[PlotSeries],
    reference: &PlotSeries,
    view: &ViewOptions,
) -> ((f64, f64), (f64, f64)) {
    let all = || variants.iter().chain(std::iter::once(reference));

    let (mut x0, mut x1) = span(all().flat_map(|s| s.x.iter().copied()), view.xlog)
        .unwrap_or(if view.xlog { (0.1, 10.0) } else { (0.0, 1.0) });
    let (mut y0, mut y1) = span(all().flat_map(|s| s.y.iter().copied()), view.ylog)
        .unwrap_or(if view.ylog { (0.1, 10.0) } else { (0.0, 1.0) });

    if let Some(v) = view.xmin {
        x0 = v;
    }
    if let Some(v) = view.xmax {
        x1 = v;
    }
    if let Some(v) = view.ymin {
        y0 = v;
    }
    if let Some(v) = view.ymax {
        y1 = v;
    }

    widen(&mut x0, &mut x1, view.xlog);
    widen(&mut y0, &mut y1, view.ylog);

    ((x0, x1), (y0, y1))
}

/// Min/max over the finite values, restricted to positives for log axes.
fn span(values: impl Iterator<Item = f64>, positive_only: bool) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values {
        if !v.is_finite() || (positive_only && v <= 0.0) {
            continue;
        }
        lo = lo.min(v);
        hi = hi.max(v);
    }
    (lo <= hi).then_some((lo, hi))
}

fn widen(lo: &mut f64, hi: &mut f64, log: bool) {
    if *lo < *hi {
        return;
    }
    if log {
        *hi = *lo * 10.0;
    } else {
        *hi = *lo + 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::XAxis;

    fn series(x: Vec<f64>, y: Vec<f64>) -> PlotSeries {
        PlotSeries {
            label: "s".into(),
            x,
            y,
        }
    }

    fn view() -> ViewOptions {
        ViewOptions {
            title: "t".into(),
            x_axis: XAxis::Energy,
            ratio: false,
            xlog: false,
            ylog: false,
            xmin: None,
            xmax: None,
            ymin: None,
            ymax: None,
            line_width: None,
            font_size: None,
        }
    }

    #[test]
    fn span_skips_non_finite() {
        assert_eq!(
            span([1.0, f64::NAN, 3.0, f64::INFINITY].into_iter(), false),
            Some((1.0, 3.0))
        );
        assert_eq!(span(std::iter::empty(), false), None);
    }

    #[test]
    fn span_positive_only_for_log() {
        assert_eq!(span([-5.0, 0.0, 2.0, 8.0].into_iter(), true), Some((2.0, 8.0)));
    }

    #[test]
    fn limits_override_data() {
        let reference = series(vec![1.0, 10.0], vec![100.0, 200.0]);
        let mut v = view();
        v.xmin = Some(2.0);
        v.ymax = Some(500.0);
        let ((x0, x1), (y0, y1)) = axis_ranges(&[], &reference, &v);
        assert_eq!((x0, x1), (2.0, 10.0));
        assert_eq!((y0, y1), (100.0, 500.0));
    }

    #[test]
    fn degenerate_range_is_widened() {
        let reference = series(vec![5.0], vec![7.0]);
        let ((x0, x1), (y0, y1)) = axis_ranges(&[], &reference, &view());
        assert!(x0 < x1);
        assert!(y0 < y1);
        assert_eq!(x0, 5.0);
        assert_eq!(y0, 7.0);
    }
}
