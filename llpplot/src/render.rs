//! Drawing of the sensitivity curves.

use super::data::SeriesMap;
use super::decoration::{self, Decoration, LegendPosition};
use super::error::{Error, Result};
use super::label;
use super::style::LineStyle;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fs;
use std::path::Path;
use svg2pdf::{ConversionOptions, PageOptions, usvg};

/// Size of the figure in pixels, corresponding to 5 x 4 inches at [`DPI`].
pub const FIGURE_PIXELS: (u32, u32) = (500, 400);

/// Resolution used when converting the figure to PDF.
pub const DPI: f32 = 100.0;

const FONT: &str = "serif";

// dash pattern of the reference line
const REFERENCE_DASH: (u32, u32) = (8, 4);

/// Draws all series in `data`, in the order of their names, and decorates the plot according to
/// `selector`. If `selector` doesn't name a scenario only the curves and the grid are drawn: the
/// axes span the data, and there are no labels, title or legend.
///
/// # Errors
///
/// Returns [`Error::Drawing`] if the plotting backend fails.
pub fn render_svg(data: &SeriesMap, selector: &str) -> Result<String> {
    let decoration = decoration::decoration(selector);

    if decoration.is_some() {
        log::debug!("decorating with plot style {selector}");
    } else {
        log::warn!("unknown plot style `{selector}`, drawing the curves without decoration");
    }

    let mut svg = String::new();

    {
        let root = SVGBackend::with_string(&mut svg, FIGURE_PIXELS).into_drawing_area();
        draw(&root, data, decoration.as_ref()).map_err(|err| Error::Drawing(err.to_string()))?;
        root.present()
            .map_err(|err| Error::Drawing(err.to_string()))?;
    }

    Ok(svg)
}

/// Same as [`render_svg`], but converts the result into a single-page PDF.
///
/// # Errors
///
/// Fails if drawing fails or if the conversion to PDF fails.
pub fn render_pdf(data: &SeriesMap, selector: &str) -> Result<Vec<u8>> {
    svg_to_pdf(&render_svg(data, selector)?)
}

/// Renders the plot and writes it to `path`, creating missing parent directories. The plot is
/// written as SVG if the extension of `path` is `svg` and as PDF otherwise.
///
/// # Errors
///
/// Fails if rendering fails or if the file can't be written.
pub fn save(data: &SeriesMap, selector: &str, path: &Path) -> Result<()> {
    let bytes = if is_svg(path) {
        render_svg(data, selector)?.into_bytes()
    } else {
        render_pdf(data, selector)?
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| Error::io(parent, err))?;
    }

    fs::write(path, bytes).map_err(|err| Error::io(path, err))?;
    log::info!("wrote `{}`", path.display());

    Ok(())
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

fn svg_to_pdf(svg: &str) -> Result<Vec<u8>> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)?;

    svg2pdf::to_pdf(&tree, ConversionOptions::default(), PageOptions { dpi: DPI })
        .map_err(|err| Error::Pdf(format!("{err:?}")))
}

// log axes can't show non-positive or infinite values
fn drawable(&(x, y): &(f64, f64)) -> bool {
    x > 0.0 && y > 0.0 && x.is_finite() && y.is_finite()
}

fn log_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
        (min.min(value), max.max(value))
    });

    if !min.is_finite() || !max.is_finite() {
        (1.0, 10.0)
    } else if min >= max {
        (min / 10.0, max * 10.0)
    } else {
        (min, max)
    }
}

/// Ranges of both axes spanning all drawable points of `data`.
fn data_bounds(data: &SeriesMap) -> ((f64, f64), (f64, f64)) {
    let points = || {
        data.values()
            .flat_map(|series| series.points().iter().copied())
            .filter(drawable)
    };

    (
        log_bounds(points().map(|(x, _)| x)),
        log_bounds(points().map(|(_, y)| y)),
    )
}

/// Liang-Barsky clipping of the segment from `p0` to `p1` against the rectangle spanned by
/// `x_range` and `y_range`. Returns the parameters of the visible part, if any.
fn clip_segment(
    (x0, y0): (f64, f64),
    (x1, y1): (f64, f64),
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Option<(f64, f64)> {
    let (dx, dy) = (x1 - x0, y1 - y0);
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    for (p, q) in [
        (-dx, x0 - x_range.0),
        (dx, x_range.1 - x0),
        (-dy, y0 - y_range.0),
        (dy, y_range.1 - y0),
    ] {
        if p < 0.0 {
            let r = q / p;
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else if p > 0.0 {
            let r = q / p;
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        } else if q < 0.0 {
            // parallel to and outside of this edge
            return None;
        }
    }

    Some((t0, t1))
}

/// Splits the polyline through `points` into the parts inside the axes. Segments crossing the
/// border are cut where they cross it, with straight lines in log-log space, so that each
/// returned run can be drawn as a polyline of its own.
fn visible_runs(
    points: &[(f64, f64)],
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Vec<Vec<(f64, f64)>> {
    let log = |(x, y): (f64, f64)| (x.log10(), y.log10());
    let (x_min, x_max) = log((x_range.0, x_range.1));
    let (y_min, y_max) = log((y_range.0, y_range.1));

    let mut runs = Vec::new();
    let mut run = Vec::new();

    for pair in points.windows(2) {
        let (p0, p1) = (log(pair[0]), log(pair[1]));
        let at = |t: f64| {
            (
                10_f64.powf((p1.0 - p0.0).mul_add(t, p0.0)),
                10_f64.powf((p1.1 - p0.1).mul_add(t, p0.1)),
            )
        };

        let Some((t0, t1)) = clip_segment(p0, p1, (x_min, x_max), (y_min, y_max)) else {
            if !run.is_empty() {
                runs.push(std::mem::take(&mut run));
            }
            continue;
        };

        if t0 > 0.0 && !run.is_empty() {
            runs.push(std::mem::take(&mut run));
        }

        if run.is_empty() {
            run.push(if t0 > 0.0 { at(t0) } else { pair[0] });
        }

        if t1 < 1.0 {
            run.push(at(t1));
            runs.push(std::mem::take(&mut run));
        } else {
            run.push(pair[1]);
        }
    }

    if !run.is_empty() {
        runs.push(run);
    }

    runs
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn stroke_width(points: f64) -> u32 {
    // one point is 1/72 inch
    (points * f64::from(DPI) / 72.0).round().max(1.0) as u32
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &SeriesMap,
    decoration: Option<&Decoration>,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let (x_range, y_range) = decoration.map_or_else(
        || data_bounds(data),
        |decoration| (decoration.x_range, decoration.y_range),
    );

    let mut builder = ChartBuilder::on(root);
    builder.margin(12).x_label_area_size(40).y_label_area_size(60);

    if let Some(decoration) = decoration {
        builder.caption(label::to_plain(decoration.title), (FONT, 18));
    }

    let mut chart = builder.build_cartesian_2d(
        (x_range.0..x_range.1).log_scale(),
        (y_range.0..y_range.1).log_scale(),
    )?;

    let tick_formatter = |value: &f64| label::power_of_ten(*value);

    {
        let mut mesh = chart.configure_mesh();
        mesh.light_line_style(TRANSPARENT)
            .bold_line_style(BLACK.mix(0.5))
            .label_style((FONT, 12))
            .x_label_formatter(&tick_formatter)
            .y_label_formatter(&tick_formatter);

        if let Some(decoration) = decoration {
            mesh.x_desc(label::to_plain(decoration.x_label))
                .y_desc(label::to_plain(decoration.y_label))
                .axis_desc_style((FONT, 14));
        }

        mesh.draw()?;
    }

    for (name, series) in data {
        log::info!("plotting {name}");

        let style = series.style();
        let line = style.line_style();
        let color = match style.rgb() {
            Some(rgb) if line != LineStyle::Hidden => rgb.to_rgba(),
            _ => TRANSPARENT,
        };
        let shape = ShapeStyle {
            color,
            filled: false,
            stroke_width: 1,
        };
        let points: Vec<_> = series.points().iter().copied().filter(drawable).collect();

        for run in visible_runs(&points, x_range, y_range) {
            if let Some((dash, gap)) = line.dash_pattern() {
                chart.draw_series(DashedLineSeries::new(run, dash, gap, shape))?;
            } else {
                chart.draw_series(LineSeries::new(run, shape))?;
            }
        }

        let segments = line.legend_segments();

        // the legend entry is carried by an empty series, so it appears once per detector
        chart
            .draw_series(std::iter::empty::<PathElement<(f64, f64)>>())?
            .label(label::to_plain(style.label))
            .legend(move |(x, y)| {
                let [(a0, a1), (b0, b1), (c0, c1)] = segments;

                EmptyElement::at((x, y))
                    + PathElement::new(vec![(a0, 0), (a1, 0)], shape)
                    + PathElement::new(vec![(b0, 0), (b1, 0)], shape)
                    + PathElement::new(vec![(c0, 0), (c1, 0)], shape)
            });
    }

    let Some(decoration) = decoration else {
        return Ok(());
    };

    if let Some(reference) = decoration.reference {
        let shape = ShapeStyle {
            color: BLACK.to_rgba(),
            filled: false,
            stroke_width: stroke_width(reference.width),
        };

        chart.draw_series(DashedLineSeries::new(
            vec![(x_range.0, reference.y), (x_range.1, reference.y)],
            REFERENCE_DASH.0,
            REFERENCE_DASH.1,
            shape,
        ))?;
    }

    if !data.is_empty() {
        chart
            .configure_series_labels()
            .position(match decoration.legend {
                LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
                LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
            })
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.3))
            .label_font((FONT, 10))
            .draw()?;
    }

    Ok(())
}
