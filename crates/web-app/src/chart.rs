use std::borrow::BorrowMut;

use fitdash_domain::{ProgressMetric, ProgressPoint, series_points};
use gloo_utils::window;
use plotters::{
    chart::ChartBuilder,
    coord::ranged1d::{IntoSegmentedCoord, SegmentValue},
    prelude::{Circle, IntoDrawingArea, SVGBackend},
    series::LineSeries,
    style::{Color, IntoFont, Palette, Palette99, RGBColor, TextStyle, WHITE},
};
use wasm_bindgen::JsValue;

use crate::Theme;

pub const COLOR_REPS: usize = 4;
pub const COLOR_WEIGHT: usize = 8;

pub const OPACITY_LINE: f64 = 0.9;
pub const OPACITY_POINT: f64 = 0.9;

pub const WIDTH_LINE: u32 = 2;
pub const SIZE_POINT: u32 = 3;

pub const FONT: (&str, u32) = ("Roboto", 11);

#[derive(Debug, Clone, PartialEq)]
pub enum PlotType {
    Circle(usize, f64, u32),
    Line(usize, f64, u32),
}

#[must_use]
pub fn plot_line(color: usize) -> Vec<PlotType> {
    vec![PlotType::Line(color, OPACITY_LINE, WIDTH_LINE)]
}

#[must_use]
pub fn plot_line_with_points(color: usize) -> Vec<PlotType> {
    vec![
        PlotType::Line(color, OPACITY_LINE, WIDTH_LINE),
        PlotType::Circle(color, OPACITY_POINT, SIZE_POINT),
    ]
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PlotParams {
    pub y_min_opt: Option<f32>,
    pub y_max_opt: Option<f32>,
    pub secondary: bool,
}

impl PlotParams {
    #[must_use]
    pub fn primary_range(min: f32, max: f32) -> Self {
        Self {
            y_min_opt: Some(min),
            y_max_opt: Some(max),
            secondary: false,
        }
    }

    pub const SECONDARY: Self = Self {
        y_max_opt: None,
        y_min_opt: None,
        secondary: true,
    };
}

/// One series of labeled values. The position of a value in `values`
/// determines its position on the x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    pub values: Vec<(String, f32)>,
    pub plots: Vec<PlotType>,
    pub params: PlotParams,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Bounds {
    min: f32,
    max: f32,
}

impl Bounds {
    fn min_with_margin(self) -> f32 {
        if self.min <= f32::EPSILON {
            return self.min;
        }
        f32::max(self.min - self.margin(), 0.)
    }

    fn max_with_margin(self) -> f32 {
        self.max + self.margin()
    }

    fn margin(self) -> f32 {
        if (self.max - self.min).abs() > f32::EPSILON {
            return (self.max - self.min) * 0.1;
        }
        0.1
    }
}

/// Plot labeled series onto a chart.
///
/// The x axis is categorical. Its labels are taken from the longest series,
/// and every value is drawn at the position of its index. The `plots`
/// element of `PlotData` lists the plots to perform on a series:
///
///   - Circle: plot a circle with the given color and size for each value
///   - Line: plot the series as a line with the given color and thickness
///
/// The `params` element configures the y domain and whether the series is
/// plotted against the primary or the secondary axis. If `data` contains no
/// series for the secondary axis, the secondary axis is omitted.
///
/// Returns `None` if there is nothing to plot.
#[allow(clippy::missing_errors_doc)]
pub fn plot(data: &[PlotData], theme: Theme) -> Result<Option<String>, Box<dyn std::error::Error>> {
    if all_zeros(data) {
        return Ok(None);
    }

    let (Some(primary_bounds), secondary_bounds) = determine_y_bounds(data) else {
        return Ok(None);
    };

    let labels = x_labels(data);
    let Ok(num_labels) = i32::try_from(labels.len()) else {
        return Ok(None);
    };

    let mut result = String::new();

    {
        let root = SVGBackend::with_string(&mut result, (chart_width(), 200)).into_drawing_area();
        let (color, background_color) = colors(theme);

        root.fill(&background_color)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(10f32)
            .x_label_area_size(30f32)
            .y_label_area_size(40f32)
            .right_y_label_area_size(secondary_bounds.map_or_else(|| 0f32, |_| 40f32))
            .build_cartesian_2d(
                (0..num_labels).into_segmented(),
                primary_bounds.min_with_margin()..primary_bounds.max_with_margin(),
            )?
            .set_secondary_coord(
                (0..num_labels).into_segmented(),
                secondary_bounds
                    .as_ref()
                    .map_or(0.0..0.0, |b| b.min_with_margin()..b.max_with_margin()),
            );

        let format_label = |x: &SegmentValue<i32>| match x {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => usize::try_from(*i)
                .ok()
                .and_then(|i| labels.get(i))
                .cloned()
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .set_all_tick_mark_size(3u32)
            .axis_style(color.mix(0.3))
            .bold_line_style(color.mix(0.05))
            .light_line_style(color.mix(0.0))
            .label_style(TextStyle::from(FONT.into_font()).color(&color))
            .x_labels(labels.len())
            .x_label_formatter(&format_label)
            .y_labels(6)
            .draw()?;

        if secondary_bounds.is_some() {
            chart
                .configure_secondary_axes()
                .set_all_tick_mark_size(3u32)
                .axis_style(color.mix(0.3))
                .label_style(TextStyle::from(FONT.into_font()).color(&color))
                .draw()?;
        }

        for plot_data in data {
            let points = plot_data
                .values
                .iter()
                .zip(0..)
                .map(|((_, y), x)| (SegmentValue::CenterOf(x), *y))
                .collect::<Vec<_>>();

            for plot in &plot_data.plots {
                match *plot {
                    PlotType::Circle(color, opacity, size) => {
                        let data = points.iter().map(|(x, y)| {
                            Circle::new(
                                (x.clone(), *y),
                                size,
                                Palette99::pick(color).mix(opacity).filled(),
                            )
                        });
                        if plot_data.params.secondary {
                            chart.draw_secondary_series(data)?;
                        } else {
                            chart.draw_series(data)?;
                        }
                    }
                    PlotType::Line(color, opacity, size) => {
                        let data = LineSeries::new(
                            points.iter().cloned(),
                            Palette99::pick(color).mix(opacity).stroke_width(size),
                        );
                        if plot_data.params.secondary {
                            chart.draw_secondary_series(data)?;
                        } else {
                            chart.draw_series(data)?;
                        }
                    }
                }
            }
        }

        root.present()?;
    }

    Ok(Some(result))
}

/// Reps on the primary axis and, if requested, weight on the secondary axis.
#[must_use]
pub fn progress_plot_data(points: &[ProgressPoint], show_weight: bool) -> Vec<PlotData> {
    let mut data = vec![PlotData {
        values: series_points(points, ProgressMetric::Reps),
        plots: plot_line_with_points(COLOR_REPS),
        params: PlotParams::primary_range(0., 10.),
    }];
    if show_weight {
        data.push(PlotData {
            values: series_points(points, ProgressMetric::Weight),
            plots: plot_line_with_points(COLOR_WEIGHT),
            params: PlotParams::SECONDARY,
        });
    }
    data
}

#[allow(clippy::missing_errors_doc)]
pub fn plot_progress(
    points: &[ProgressPoint],
    show_weight: bool,
    theme: Theme,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    plot(&progress_plot_data(points, show_weight), theme)
}

/// CSS color of a palette entry, to match legends with plotted series.
#[must_use]
pub fn color_hex(color: usize) -> String {
    let (r, g, b) = Palette99::pick(color).rgb();
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn all_zeros(data: &[PlotData]) -> bool {
    data.iter()
        .all(|plot_data| plot_data.values.iter().all(|(_, v)| *v == 0.0))
}

fn x_labels(data: &[PlotData]) -> Vec<String> {
    data.iter()
        .map(|plot_data| &plot_data.values)
        .max_by_key(|values| values.len())
        .map(|values| values.iter().map(|(label, _)| label.clone()).collect())
        .unwrap_or_default()
}

fn colors(theme: Theme) -> (RGBColor, RGBColor) {
    let dark = RGBColor(20, 22, 26);
    match theme {
        Theme::System | Theme::Light => (dark, WHITE),
        Theme::Dark => (WHITE, dark),
    }
}

fn determine_y_bounds(data: &[PlotData]) -> (Option<Bounds>, Option<Bounds>) {
    let mut primary_bounds: Option<Bounds> = None;
    let mut secondary_bounds: Option<Bounds> = None;

    for plot in data.iter().filter(|plot| !plot.values.is_empty()) {
        let min = plot
            .values
            .iter()
            .map(|(_, v)| *v)
            .fold(plot.params.y_min_opt.unwrap_or(f32::MAX), f32::min);
        let max = plot
            .values
            .iter()
            .map(|(_, v)| *v)
            .fold(plot.params.y_max_opt.unwrap_or(0.), f32::max);

        let b = if plot.params.secondary {
            secondary_bounds.borrow_mut()
        } else {
            primary_bounds.borrow_mut()
        }
        .get_or_insert(Bounds { min, max });

        b.min = f32::min(b.min, min);
        b.max = f32::max(b.max, max);
    }

    (primary_bounds, secondary_bounds)
}

fn chart_width() -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    u32::min(
        u32::max(
            window()
                .inner_width()
                .unwrap_or(JsValue::UNDEFINED)
                .as_f64()
                .unwrap_or(420.) as u32
                - 20,
            300,
        ),
        960,
    )
}
