//! Usage charts: static datasets, an idempotent instance registry and the
//! plot geometry used by the SVG renderer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChartTarget {
    Electricity,
    Water,
    AnnualUsage,
}

impl ChartTarget {
    /// Render target id in the document
    pub fn element_id(&self) -> &'static str {
        match self {
            ChartTarget::Electricity => "electricityChart",
            ChartTarget::Water => "waterChart",
            ChartTarget::AnnualUsage => "annualUsageChart",
        }
    }

    pub fn all() -> [ChartTarget; 3] {
        [
            ChartTarget::Electricity,
            ChartTarget::Water,
            ChartTarget::AnnualUsage,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Line,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub color: String,
    pub fill: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub target: ChartTarget,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    /// Suffix for y-axis tick labels
    pub unit: Option<String>,
    pub show_legend: bool,
}

fn series(label: &str, color: &str, fill: &str, values: &[f64]) -> Series {
    Series {
        label: label.to_string(),
        color: color.to_string(),
        fill: fill.to_string(),
        values: values.to_vec(),
    }
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl ChartSpec {
    pub fn for_target(target: ChartTarget) -> Self {
        const WEEKS: [&str; 4] = ["Week 1", "Week 2", "Week 3", "Week 4"];
        match target {
            ChartTarget::Electricity => Self {
                target,
                kind: ChartKind::Line,
                labels: labels(&WEEKS),
                series: vec![series(
                    "kWh Consumed",
                    "#FFB020",
                    "rgba(255, 176, 32, 0.1)",
                    &[105.0, 125.0, 110.0, 118.0],
                )],
                unit: Some("kWh".to_string()),
                show_legend: false,
            },
            ChartTarget::Water => Self {
                target,
                kind: ChartKind::Line,
                labels: labels(&WEEKS),
                series: vec![series(
                    "m³ Consumed",
                    "#00A8E8",
                    "rgba(0, 168, 232, 0.1)",
                    &[3.2, 2.9, 3.1, 3.3],
                )],
                unit: Some("m³".to_string()),
                show_legend: false,
            },
            ChartTarget::AnnualUsage => Self {
                target,
                kind: ChartKind::Bar,
                labels: labels(&[
                    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
                    "Dec",
                ]),
                series: vec![
                    series(
                        "Electricity (kWh)",
                        "#FFB020",
                        "rgba(255, 176, 32, 0.8)",
                        &[
                            450.0, 420.0, 480.0, 510.0, 580.0, 620.0, 650.0, 640.0, 590.0, 520.0,
                            470.0, 458.0,
                        ],
                    ),
                    series(
                        "Water (m³)",
                        "#00A8E8",
                        "rgba(0, 168, 232, 0.8)",
                        &[
                            12.0, 11.0, 13.0, 14.0, 15.0, 16.0, 17.0, 16.0, 15.0, 13.0, 12.0, 12.5,
                        ],
                    ),
                ],
                unit: None,
                show_legend: true,
            },
        }
    }

    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    pub spec: ChartSpec,
}

/// Chart instances keyed by render target.
///
/// Targets are mounted when their canvas enters the document; only mounted
/// targets without an instance get one on `initialize_charts`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartRegistry {
    mounted: Vec<ChartTarget>,
    instances: BTreeMap<ChartTarget, ChartInstance>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, target: ChartTarget) {
        if !self.mounted.contains(&target) {
            self.mounted.push(target);
        }
    }

    /// Returns how many instances were created
    pub fn initialize_charts(&mut self) -> usize {
        let mut created = 0;
        for target in &self.mounted {
            if self.instances.contains_key(target) {
                continue;
            }
            self.instances.insert(
                *target,
                ChartInstance {
                    spec: ChartSpec::for_target(*target),
                },
            );
            created += 1;
        }
        if created > 0 {
            log::debug!("initialized {} chart(s)", created);
        }
        created
    }

    pub fn instance(&self, target: ChartTarget) -> Option<&ChartInstance> {
        self.instances.get(&target)
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartPeriod {
    #[default]
    ThisMonth,
    LastMonth,
    LastThreeMonths,
}

impl ChartPeriod {
    pub fn code(&self) -> &'static str {
        match self {
            ChartPeriod::ThisMonth => "month",
            ChartPeriod::LastMonth => "last-month",
            ChartPeriod::LastThreeMonths => "quarter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartPeriod::ThisMonth => "This Month",
            ChartPeriod::LastMonth => "Last Month",
            ChartPeriod::LastThreeMonths => "Last 3 Months",
        }
    }

    pub fn all() -> [ChartPeriod; 3] {
        [
            ChartPeriod::ThisMonth,
            ChartPeriod::LastMonth,
            ChartPeriod::LastThreeMonths,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.code() == code)
    }
}

/// Drawing area of a chart in SVG user units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Plot {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            left: 64.0,
            right: 16.0,
            top: 16.0,
            bottom: 32.0,
        }
    }

    pub fn inner_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(0.0)
    }

    /// Baseline of the y axis (value zero)
    pub fn baseline(&self) -> f64 {
        self.top + self.inner_height()
    }

    pub fn y_for(&self, value: f64, axis_max: f64) -> f64 {
        if axis_max <= 0.0 {
            return self.baseline();
        }
        self.baseline() - value / axis_max * self.inner_height()
    }
}

fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Y axis starting at zero: (axis max, tick values)
pub fn y_axis(max_value: f64, tick_count: usize) -> (f64, Vec<f64>) {
    let tick_count = tick_count.max(1);
    let step = nice_step(max_value / tick_count as f64);
    let steps = (max_value / step).ceil().max(1.0) as usize;
    let axis_max = step * steps as f64;
    let ticks = (0..=steps).map(|i| step * i as f64).collect();
    (axis_max, ticks)
}

/// Example: (120.0, Some("kWh")) -> "120 kWh"
pub fn tick_label(value: f64, unit: Option<&str>) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    match unit {
        Some(unit) => format!("{} {}", rounded, unit),
        None => format!("{}", rounded),
    }
}

/// Evenly spaced x positions, centred in their slot
pub fn slot_centers(count: usize, plot: &Plot) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let slot = plot.inner_width() / count as f64;
    (0..count)
        .map(|i| plot.left + slot * (i as f64 + 0.5))
        .collect()
}

pub fn line_points(values: &[f64], plot: &Plot, axis_max: f64) -> Vec<(f64, f64)> {
    slot_centers(values.len(), plot)
        .into_iter()
        .zip(values)
        .map(|(x, v)| (x, plot.y_for(*v, axis_max)))
        .collect()
}

/// SVG `points` attribute for a polyline
pub fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed polygon from the line down to the baseline, for the area fill
pub fn area_polygon(points: &[(f64, f64)], plot: &Plot) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let mut all = Vec::with_capacity(points.len() + 2);
    all.push((first.0, plot.baseline()));
    all.extend_from_slice(points);
    all.push((last.0, plot.baseline()));
    polyline(&all)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub series: usize,
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Grouped bars: one group per label, one bar per series inside the group
pub fn bar_rects(spec: &ChartSpec, plot: &Plot, axis_max: f64) -> Vec<BarRect> {
    let groups = spec.labels.len();
    let per_group = spec.series.len();
    if groups == 0 || per_group == 0 {
        return Vec::new();
    }
    let slot = plot.inner_width() / groups as f64;
    let group_width = slot * 0.8;
    let bar_width = group_width / per_group as f64;

    let mut rects = Vec::with_capacity(groups * per_group);
    for (s, series) in spec.series.iter().enumerate() {
        for (i, value) in series.values.iter().enumerate().take(groups) {
            let x = plot.left + slot * i as f64 + (slot - group_width) / 2.0 + bar_width * s as f64;
            let y = plot.y_for(*value, axis_max);
            rects.push(BarRect {
                series: s,
                index: i,
                x,
                y,
                width: bar_width,
                height: plot.baseline() - y,
            });
        }
    }
    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_is_idempotent() {
        let mut registry = ChartRegistry::new();
        for target in ChartTarget::all() {
            registry.mount(target);
        }
        assert_eq!(registry.initialize_charts(), 3);
        let before = registry.clone();
        assert_eq!(registry.initialize_charts(), 0);
        assert_eq!(registry.instance_count(), 3);
        assert_eq!(registry, before);
    }

    #[test]
    fn unmounted_targets_are_skipped() {
        let mut registry = ChartRegistry::new();
        registry.mount(ChartTarget::Water);
        assert_eq!(registry.initialize_charts(), 1);
        assert!(registry.instance(ChartTarget::Electricity).is_none());

        registry.mount(ChartTarget::Electricity);
        registry.mount(ChartTarget::Electricity);
        assert_eq!(registry.initialize_charts(), 1);
        assert_eq!(registry.instance_count(), 2);
    }

    #[test]
    fn y_axis_starts_at_zero() {
        let (max, ticks) = y_axis(125.0, 5);
        assert_eq!(max, 150.0);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&150.0));

        let (max, _) = y_axis(0.0, 5);
        assert_eq!(max, 1.0);
    }

    #[test]
    fn tick_labels_carry_unit() {
        assert_eq!(tick_label(120.0, Some("kWh")), "120 kWh");
        assert_eq!(tick_label(0.5, Some("m³")), "0.5 m³");
        assert_eq!(tick_label(200.0, None), "200");
    }

    #[test]
    fn line_geometry() {
        let plot = Plot::new(400.0, 200.0);
        let points = line_points(&[0.0, 50.0], &plot, 100.0);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].1, plot.baseline());
        assert!((points[1].1 - (plot.baseline() - plot.inner_height() / 2.0)).abs() < 1e-9);
        assert!(points[0].0 < points[1].0);
    }

    #[test]
    fn bars_are_grouped_per_label() {
        let spec = ChartSpec::for_target(ChartTarget::AnnualUsage);
        let plot = Plot::new(800.0, 300.0);
        let (max, _) = y_axis(spec.max_value(), 5);
        let rects = bar_rects(&spec, &plot, max);
        assert_eq!(rects.len(), 24);
        let jan_elec = rects.iter().find(|r| r.series == 0 && r.index == 0).unwrap();
        let jan_water = rects.iter().find(|r| r.series == 1 && r.index == 0).unwrap();
        assert!(jan_water.x > jan_elec.x);
        assert!(jan_elec.height > jan_water.height);
        assert!(rects.iter().all(|r| r.y + r.height <= plot.baseline() + 1e-9));
    }

    #[test]
    fn period_codes() {
        for p in ChartPeriod::all() {
            assert_eq!(ChartPeriod::from_code(p.code()), Some(p));
        }
        assert_eq!(ChartPeriod::from_code("year"), None);
    }
}
