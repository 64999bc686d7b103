//! SVG usage charts.
//!
//! A canvas registers its target on mount and stays a placeholder until
//! `ChartService::initialize_charts` creates the instance; repeated
//! initialisation never replaces an existing chart.

use contracts::shared::charts::{
    area_polygon, bar_rects, line_points, polyline, slot_centers, tick_label, y_axis, ChartKind,
    ChartRegistry, ChartSpec, ChartTarget, Plot,
};
use leptos::prelude::*;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 280.0;
const TICKS: usize = 5;

#[derive(Clone, Copy)]
pub struct ChartService {
    registry: RwSignal<ChartRegistry>,
}

impl ChartService {
    pub fn new() -> Self {
        Self {
            registry: RwSignal::new(ChartRegistry::new()),
        }
    }

    /// Nothing renders from the mount list, so no subscriber is notified
    pub fn mount(&self, target: ChartTarget) {
        self.registry.update_untracked(|r| r.mount(target));
    }

    pub fn initialize_charts(&self) {
        self.registry.maybe_update(|r| r.initialize_charts() > 0);
    }

    fn spec(&self, target: ChartTarget) -> Option<ChartSpec> {
        self.registry
            .with(|r| r.instance(target).map(|i| i.spec.clone()))
    }
}

pub fn use_charts() -> ChartService {
    use_context::<ChartService>().expect("ChartService not provided in context")
}

fn num(v: f64) -> String {
    format!("{:.1}", v)
}

#[component]
pub fn ChartCanvas(target: ChartTarget) -> impl IntoView {
    let charts = use_charts();
    charts.mount(target);

    view! {
        <div id=target.element_id() class="chart-container">
            {move || match charts.spec(target) {
                Some(spec) => render_chart(&spec),
                None => view! { <div class="chart-placeholder"></div> }.into_any(),
            }}
        </div>
    }
}

fn render_chart(spec: &ChartSpec) -> AnyView {
    let plot = Plot::new(WIDTH, HEIGHT);
    let (axis_max, ticks) = y_axis(spec.max_value(), TICKS);

    let grid = ticks
        .into_iter()
        .map(|t| {
            let y = plot.y_for(t, axis_max);
            let label = tick_label(t, spec.unit.as_deref());
            view! {
                <line
                    class="chart-grid"
                    x1=num(plot.left)
                    x2=num(plot.width - plot.right)
                    y1=num(y)
                    y2=num(y)
                />
                <text class="chart-tick" x=num(plot.left - 8.0) y=num(y + 4.0) text-anchor="end">
                    {label}
                </text>
            }
        })
        .collect_view();

    let x_labels = slot_centers(spec.labels.len(), &plot)
        .into_iter()
        .zip(spec.labels.clone())
        .map(|(x, label)| {
            view! {
                <text class="chart-label" x=num(x) y=num(plot.height - 8.0) text-anchor="middle">
                    {label}
                </text>
            }
        })
        .collect_view();

    let body = match spec.kind {
        ChartKind::Line => render_lines(spec, &plot, axis_max),
        ChartKind::Bar => render_bars(spec, &plot, axis_max),
    };

    let legend = spec.show_legend.then(|| {
        spec.series
            .iter()
            .map(|s| {
                let swatch = format!("background: {};", s.color);
                view! {
                    <span class="chart-legend__item">
                        <span class="chart-legend__swatch" style=swatch></span>
                        {s.label.clone()}
                    </span>
                }
            })
            .collect_view()
    });

    view! {
        <div class="chart-legend">{legend}</div>
        <svg
            class="chart"
            viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
            preserveAspectRatio="none"
            role="img"
        >
            {grid}
            {body}
            {x_labels}
        </svg>
    }
    .into_any()
}

fn render_lines(spec: &ChartSpec, plot: &Plot, axis_max: f64) -> AnyView {
    spec.series
        .iter()
        .map(|s| {
            let points = line_points(&s.values, plot, axis_max);
            let dots = points
                .iter()
                .map(|(x, y)| {
                    view! {
                        <circle
                            class="chart-point"
                            cx=num(*x)
                            cy=num(*y)
                            r="6"
                            fill=s.color.clone()
                            stroke="#fff"
                            stroke-width="2"
                        />
                    }
                })
                .collect_view();
            view! {
                <polygon points=area_polygon(&points, plot) fill=s.fill.clone() stroke="none" />
                <polyline points=polyline(&points) fill="none" stroke=s.color.clone() stroke-width="3" />
                {dots}
            }
        })
        .collect_view()
        .into_any()
}

fn render_bars(spec: &ChartSpec, plot: &Plot, axis_max: f64) -> AnyView {
    bar_rects(spec, plot, axis_max)
        .into_iter()
        .map(|r| {
            let series = &spec.series[r.series];
            view! {
                <rect
                    class="chart-bar"
                    x=num(r.x)
                    y=num(r.y)
                    width=num(r.width)
                    height=num(r.height)
                    rx="4"
                    fill=series.fill.clone()
                    stroke=series.color.clone()
                    stroke-width="2"
                />
            }
        })
        .collect_view()
        .into_any()
}
