// SPDX-License-Identifier: MIT OR Apache-2.0

//! Small inline-SVG charts: line, grouped bar, donut and scatter.

use std::f64::consts::{FRAC_PI_2, TAU};

use yew::prelude::*;

// Chart data series configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: &'static str,
    pub color: &'static str,
    pub data_points: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub title: &'static str,
    pub y_axis_label: &'static str,
    /// One label per data point, left to right.
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartConfig {
    fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.series.iter().all(|s| s.data_points.is_empty())
    }

    fn max_value(&self) -> f64 {
        let max = self
            .series
            .iter()
            .flat_map(|s| s.data_points.iter().copied())
            .fold(0.0, f64::max);
        nice_max(max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub label: &'static str,
    pub x: f64,
    pub y: f64,
    pub highlight: bool,
}

/// Rounds `max` up to 1, 2 or 5 times a power of ten so axis ticks land on
/// readable values.
pub fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let fraction = max / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Start and end angle of every slice, clockwise from twelve o'clock.
/// Non-positive values get an empty slice; an all-zero input yields nothing.
pub fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = -FRAC_PI_2;
    values
        .iter()
        .map(|value| {
            let sweep = value.max(0.0) / total * TAU;
            let span = (start, start + sweep);
            start += sweep;
            span
        })
        .collect()
}

/// SVG path of a ring segment between `inner` and `outer` radii.
pub fn arc_path(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    // A full turn would start and end on the same point and draw nothing.
    let end = start + (end - start).min(TAU - 1e-4);
    let large_arc = u8::from(end - start > std::f64::consts::PI);
    let point = |r: f64, angle: f64| (cx + r * angle.cos(), cy + r * angle.sin());

    let (x0, y0) = point(outer, start);
    let (x1, y1) = point(outer, end);
    let (x2, y2) = point(inner, end);
    let (x3, y3) = point(inner, start);
    format!(
        "M{x0:.1},{y0:.1} A{outer:.1},{outer:.1} 0 {large_arc} 1 {x1:.1},{y1:.1} \
         L{x2:.1},{y2:.1} A{inner:.1},{inner:.1} 0 {large_arc} 0 {x3:.1},{y3:.1} Z"
    )
}

/// Plot area inside the axes.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Plot {
    width: f64,
    height: f64,
}

impl Plot {
    const LEFT: f64 = 56.0;
    const RIGHT: f64 = 16.0;
    const TOP: f64 = 24.0;
    const BOTTOM: f64 = 36.0;

    fn new(width: u32, height: u32) -> Self {
        Self {
            width: f64::from(width),
            height: f64::from(height),
        }
    }

    fn inner_width(&self) -> f64 {
        self.width - Self::LEFT - Self::RIGHT
    }

    fn inner_height(&self) -> f64 {
        self.height - Self::TOP - Self::BOTTOM
    }

    fn baseline(&self) -> f64 {
        Self::TOP + self.inner_height()
    }

    /// Evenly spaced x positions from the left axis to the right edge.
    fn point_x(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return Self::LEFT + self.inner_width() / 2.0;
        }
        Self::LEFT + index as f64 / (count - 1) as f64 * self.inner_width()
    }

    /// Left edge and width of band `index` out of `count`.
    fn band(&self, index: usize, count: usize) -> (f64, f64) {
        let width = self.inner_width() / count.max(1) as f64;
        (Self::LEFT + index as f64 * width, width)
    }

    fn value_y(&self, value: f64, max: f64) -> f64 {
        let y = self.baseline() - value.max(0.0) / max * self.inner_height();
        if y.is_finite() {
            y
        } else {
            self.baseline()
        }
    }

    fn axes(&self, max: f64, y_axis_label: &str) -> Html {
        let left = Self::LEFT;
        let right = self.width - Self::RIGHT;
        let ticks = [0.0, max / 2.0, max];
        let mid = Self::TOP + self.inner_height() / 2.0;
        html! {
            <g class="chart-axes">
                { for ticks.iter().map(|tick| {
                    let y = self.value_y(*tick, max);
                    html! {
                        <>
                            <line class="chart-grid" x1={left.to_string()} y1={y.to_string()} x2={right.to_string()} y2={y.to_string()} />
                            <text x={(left - 8.0).to_string()} y={(y + 4.0).to_string()} text-anchor="end" font-size="11">{ format_tick(*tick) }</text>
                        </>
                    }
                }) }
                <line class="chart-axis" x1={left.to_string()} y1={Self::TOP.to_string()} x2={left.to_string()} y2={self.baseline().to_string()} />
                <text x="12" y={mid.to_string()} font-size="11" transform={format!("rotate(-90, 12, {mid})")} text-anchor="middle">{ y_axis_label.to_string() }</text>
            </g>
        }
    }

    fn x_label(&self, x: f64, label: &str) -> Html {
        html! {
            <text x={x.to_string()} y={(self.height - 12.0).to_string()} text-anchor="middle" font-size="11">{ label.to_string() }</text>
        }
    }
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn legend<'a>(entries: impl Iterator<Item = (&'a str, &'a str)>) -> Html {
    html! {
        <ul class="chart-legend">
            { for entries.map(|(label, color)| html! {
                <li>
                    <span class="legend-swatch" style={format!("background-color: {color}")}></span>
                    { label.to_string() }
                </li>
            }) }
        </ul>
    }
}

fn no_data(title: &'static str) -> Html {
    html! {
        <div class="chart">
            <div class="chart-title">{ title }</div>
            <div class="no-data">{ "暂无数据" }</div>
        </div>
    }
}

#[derive(Properties, Debug, PartialEq)]
pub struct ChartProps {
    pub config: ChartConfig,
    #[prop_or(480)]
    pub width: u32,
    #[prop_or(280)]
    pub height: u32,
}

#[function_component(LineChart)]
pub fn line_chart(props: &ChartProps) -> Html {
    let ChartProps {
        config,
        width,
        height,
    } = props;
    if config.is_empty() {
        return no_data(config.title);
    }

    let plot = Plot::new(*width, *height);
    let max = config.max_value();
    let count = config.labels.len();

    let lines = config.series.iter().map(|series| {
        let points = series
            .data_points
            .iter()
            .take(count)
            .enumerate()
            .map(|(i, value)| {
                format!(
                    "{:.1},{:.1}",
                    plot.point_x(i, count),
                    plot.value_y(*value, max)
                )
            })
            .collect::<Vec<_>>()
            .join(" ");
        html! {
            <polyline class="chart-line" points={points} fill="none" stroke={series.color} stroke-width="2" />
        }
    });

    html! {
        <div class="chart line-chart">
            <div class="chart-title">{ config.title }</div>
            <svg viewBox={format!("0 0 {width} {height}")} role="img" aria-label={config.title}>
                { plot.axes(max, config.y_axis_label) }
                { for lines }
                { for config.labels.iter().enumerate().map(|(i, label)| plot.x_label(plot.point_x(i, count), label)) }
            </svg>
            { legend(config.series.iter().map(|s| (s.label, s.color))) }
        </div>
    }
}

#[function_component(BarChart)]
pub fn bar_chart(props: &ChartProps) -> Html {
    let ChartProps {
        config,
        width,
        height,
    } = props;
    if config.is_empty() {
        return no_data(config.title);
    }

    let plot = Plot::new(*width, *height);
    let max = config.max_value();
    let count = config.labels.len();
    let groups = config.series.len().max(1);

    let bars = config.labels.iter().enumerate().map(|(i, label)| {
        let (band_x, band_width) = plot.band(i, count);
        let bar_width = band_width * 0.7 / groups as f64;
        let group_x = band_x + band_width * 0.15;
        html! {
            <g class="chart-band">
                { for config.series.iter().enumerate().filter_map(|(s, series)| {
                    let value = *series.data_points.get(i)?;
                    let y = plot.value_y(value, max);
                    Some(html! {
                        <rect
                            class="chart-bar"
                            x={format!("{:.1}", group_x + s as f64 * bar_width)}
                            y={format!("{y:.1}")}
                            width={format!("{:.1}", bar_width.max(1.0) - 1.0)}
                            height={format!("{:.1}", plot.baseline() - y)}
                            fill={series.color}
                        >
                            <title>{ format!("{}: {}", series.label, format_tick(value)) }</title>
                        </rect>
                    })
                }) }
                { plot.x_label(band_x + band_width / 2.0, label) }
            </g>
        }
    });

    html! {
        <div class="chart bar-chart">
            <div class="chart-title">{ config.title }</div>
            <svg viewBox={format!("0 0 {width} {height}")} role="img" aria-label={config.title}>
                { plot.axes(max, config.y_axis_label) }
                { for bars }
            </svg>
            { legend(config.series.iter().map(|s| (s.label, s.color))) }
        </div>
    }
}

#[derive(Properties, Debug, PartialEq)]
pub struct DonutChartProps {
    pub title: &'static str,
    pub slices: Vec<Slice>,
    #[prop_or(240)]
    pub size: u32,
    /// Zero gives a filled pie.
    #[prop_or(0.6)]
    pub hole: f64,
    #[prop_or_default]
    pub center_label: Option<AttrValue>,
}

#[function_component(DonutChart)]
pub fn donut_chart(props: &DonutChartProps) -> Html {
    let values: Vec<f64> = props.slices.iter().map(|s| s.value).collect();
    let angles = slice_angles(&values);
    if angles.is_empty() {
        return no_data(props.title);
    }

    let size = f64::from(props.size);
    let center = size / 2.0;
    let outer = center - 4.0;
    let inner = outer * props.hole.clamp(0.0, 0.95);

    html! {
        <div class="chart donut-chart">
            <div class="chart-title">{ props.title }</div>
            <svg viewBox={format!("0 0 {size} {size}")} role="img" aria-label={props.title}>
                { for props.slices.iter().zip(angles).filter(|(_, (start, end))| end > start).map(|(slice, (start, end))| html! {
                    <path class="chart-slice" d={arc_path(center, center, outer, inner, start, end)} fill={slice.color}>
                        <title>{ format!("{}: {}", slice.label, format_tick(slice.value)) }</title>
                    </path>
                }) }
                if let Some(label) = &props.center_label {
                    <text x={center.to_string()} y={(center + 5.0).to_string()} text-anchor="middle" font-size="16" font-weight="bold">{ label.to_string() }</text>
                }
            </svg>
            { legend(props.slices.iter().map(|s| (s.label, s.color))) }
        </div>
    }
}

#[derive(Properties, Debug, PartialEq)]
pub struct ScatterChartProps {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub points: Vec<ScatterPoint>,
    /// Both axes run from zero to this value.
    #[prop_or(10.0)]
    pub max: f64,
    #[prop_or(480)]
    pub width: u32,
    #[prop_or(360)]
    pub height: u32,
}

#[function_component(ScatterChart)]
pub fn scatter_chart(props: &ScatterChartProps) -> Html {
    if props.points.is_empty() {
        return no_data(props.title);
    }

    let plot = Plot::new(props.width, props.height);
    let max = if props.max > 0.0 { props.max } else { 1.0 };
    let x_of = |x: f64| Plot::LEFT + x.clamp(0.0, max) / max * plot.inner_width();
    let mid_x = x_of(max / 2.0);
    let mid_y = plot.value_y(max / 2.0, max);

    html! {
        <div class="chart scatter-chart">
            <div class="chart-title">{ props.title }</div>
            <svg viewBox={format!("0 0 {} {}", props.width, props.height)} role="img" aria-label={props.title}>
                { plot.axes(max, props.y_label) }
                <line class="chart-quadrant" x1={mid_x.to_string()} y1={Plot::TOP.to_string()} x2={mid_x.to_string()} y2={plot.baseline().to_string()} />
                <line class="chart-quadrant" x1={Plot::LEFT.to_string()} y1={mid_y.to_string()} x2={(props.width as f64 - Plot::RIGHT).to_string()} y2={mid_y.to_string()} />
                { for props.points.iter().map(|point| {
                    let cx = x_of(point.x);
                    let cy = plot.value_y(point.y.min(max), max);
                    let (radius, class) = if point.highlight {
                        (12.0, "chart-point highlight")
                    } else {
                        (8.0, "chart-point")
                    };
                    html! {
                        <g class={class}>
                            <circle cx={format!("{cx:.1}")} cy={format!("{cy:.1}")} r={radius.to_string()} />
                            <text x={format!("{cx:.1}")} y={format!("{:.1}", cy - radius - 4.0)} text-anchor="middle" font-size="11">{ point.label }</text>
                        </g>
                    }
                }) }
                { plot.x_label(Plot::LEFT + plot.inner_width() / 2.0, props.x_label) }
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_max_rounds_up_to_readable_steps() {
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(-3.0), 1.0);
        assert_eq!(nice_max(100.0), 100.0);
        assert_eq!(nice_max(130.0), 200.0);
        assert_eq!(nice_max(850.0), 1000.0);
        assert_eq!(nice_max(2920.0), 5000.0);
    }

    #[test]
    fn slices_cover_the_full_turn() {
        let angles = slice_angles(&[85.0, 25.0, 60.0, 0.0]);
        assert_eq!(angles.len(), 4);
        assert!((angles[0].0 + FRAC_PI_2).abs() < 1e-9);
        assert!((angles[2].1 - (TAU - FRAC_PI_2)).abs() < 1e-9);
        assert_eq!(angles[3].0, angles[3].1);
    }

    #[test]
    fn all_zero_values_have_no_slices() {
        assert!(slice_angles(&[0.0, 0.0]).is_empty());
        assert!(slice_angles(&[]).is_empty());
    }

    #[test]
    fn quarter_arc_path() {
        let path = arc_path(100.0, 100.0, 50.0, 30.0, -FRAC_PI_2, 0.0);
        assert!(path.starts_with("M100.0,50.0 "), "{path}");
        assert!(path.contains("A50.0,50.0 0 0 1 150.0,100.0"), "{path}");
        assert!(path.ends_with(" Z"), "{path}");
    }

    #[test]
    fn plot_positions() {
        let plot = Plot::new(472, 260);
        assert_eq!(plot.inner_width(), 400.0);
        assert_eq!(plot.inner_height(), 200.0);
        assert_eq!(plot.point_x(0, 5), Plot::LEFT);
        assert_eq!(plot.point_x(4, 5), Plot::LEFT + 400.0);
        assert_eq!(plot.value_y(50.0, 100.0), Plot::TOP + 100.0);
        assert_eq!(plot.value_y(-5.0, 100.0), plot.baseline());
        assert_eq!(plot.band(1, 4), (Plot::LEFT + 100.0, 100.0));
    }
}
