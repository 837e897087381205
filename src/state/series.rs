//! Chart Data Model
//!
//! A `Series` is the labeled numeric dataset driving one chart render.

use rand::Rng;
use std::collections::BTreeMap;

/// Month labels for the synthesized monthly series.
const MONTH_LABELS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Category labels for the synthesized sample series.
const SAMPLE_LABELS: [&str; 5] = [
    "Web Development",
    "Data Science",
    "Mobile Apps",
    "DevOps",
    "Security",
];

/// Available chart render types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Doughnut,
    Radar,
    PolarArea,
}

impl ChartKind {
    pub const ALL: [ChartKind; 6] = [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Pie,
        ChartKind::Doughnut,
        ChartKind::Radar,
        ChartKind::PolarArea,
    ];

    /// Stable identifier used as the `<select>` option value.
    pub fn id(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
            ChartKind::Radar => "radar",
            ChartKind::PolarArea => "polar",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar Chart",
            ChartKind::Line => "Line Chart",
            ChartKind::Pie => "Pie Chart",
            ChartKind::Doughnut => "Doughnut Chart",
            ChartKind::Radar => "Radar Chart",
            ChartKind::PolarArea => "Polar Area Chart",
        }
    }

    pub fn parse(id: &str) -> ChartKind {
        Self::ALL
            .into_iter()
            .find(|k| k.id() == id)
            .unwrap_or(ChartKind::Bar)
    }

    /// Pie and doughnut charts color each slice from the categorical
    /// palette; every other kind renders in the single primary color.
    pub fn is_categorical(&self) -> bool {
        matches!(self, ChartKind::Pie | ChartKind::Doughnut)
    }
}

/// Display options applied to the live chart without recreating it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartOptions {
    pub legend: bool,
    pub tooltip: bool,
    pub animation: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            legend: true,
            tooltip: true,
            animation: true,
        }
    }
}

/// Where the current series comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    Categories,
    Monthly,
    Sample,
}

impl DataSource {
    pub const ALL: [DataSource; 3] = [
        DataSource::Categories,
        DataSource::Monthly,
        DataSource::Sample,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            DataSource::Categories => "categories",
            DataSource::Monthly => "monthly",
            DataSource::Sample => "sample",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DataSource::Categories => "Form Categories",
            DataSource::Monthly => "Monthly Data",
            DataSource::Sample => "Sample Data",
        }
    }

    pub fn parse(id: &str) -> DataSource {
        Self::ALL
            .into_iter()
            .find(|s| s.id() == id)
            .unwrap_or(DataSource::Categories)
    }
}

/// Labeled numeric dataset. Invariant: `labels.len() == values.len()`.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub title: String,
}

/// Summary statistics recomputed on every data refresh.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub total: f64,
    pub average: f64,
    pub top_label: String,
    pub top_value: f64,
}

impl Summary {
    /// Caption shown next to the top category, e.g. `"7 entries"`.
    pub fn top_caption(&self) -> String {
        format!("{:.0} entries", self.top_value)
    }
}

impl Series {
    /// Build a series, replacing an empty dataset with the placeholder pair.
    pub fn new(labels: Vec<String>, values: Vec<f64>, title: &str) -> Series {
        debug_assert_eq!(labels.len(), values.len());
        if labels.is_empty() {
            return Series {
                labels: vec!["No Data".to_string()],
                values: vec![0.0],
                title: title.to_string(),
            };
        }
        Series {
            labels,
            values,
            title: title.to_string(),
        }
    }

    /// Derive labels and values from the stats endpoint's category mapping.
    /// The map is ordered by category name so renders are deterministic.
    pub fn from_stats(categories: &BTreeMap<String, f64>) -> Series {
        let labels = categories.keys().cloned().collect();
        let values = categories.values().copied().collect();
        Series::new(labels, values, "Form Submissions by Category")
    }

    /// Six months of synthesized counts, stand-in for a real time series.
    pub fn monthly(rng: &mut impl Rng) -> Series {
        let labels = MONTH_LABELS.iter().map(|m| m.to_string()).collect();
        let values = MONTH_LABELS.iter().map(|_| roll(rng, 10, 60)).collect();
        Series::new(labels, values, "Monthly Submissions")
    }

    /// Five synthesized technology-area counts, the deterministic fallback
    /// when the stats endpoint is unreachable.
    pub fn sample(rng: &mut impl Rng) -> Series {
        let labels = SAMPLE_LABELS.iter().map(|c| c.to_string()).collect();
        let values = SAMPLE_LABELS.iter().map(|_| roll(rng, 10, 110)).collect();
        Series::new(labels, values, "Sample Technology Areas")
    }

    /// Re-roll every value in place, keeping labels and title.
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        for value in &mut self.values {
            *value = roll(rng, 10, 110);
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// Total, rounded average, and the first entry achieving the maximum.
    pub fn summarize(&self) -> Summary {
        let total: f64 = self.values.iter().sum();
        let average = if self.values.is_empty() {
            0.0
        } else {
            (total / self.values.len() as f64).round()
        };

        let top_index = self
            .values
            .iter()
            .enumerate()
            .fold(None::<(usize, f64)>, |best, (i, &v)| match best {
                Some((_, max)) if v <= max => best,
                _ => Some((i, v)),
            });

        let (top_label, top_value) = match top_index {
            Some((i, v)) => (self.labels[i].clone(), v),
            None => ("No Data".to_string(), 0.0),
        };

        Summary {
            total,
            average,
            top_label,
            top_value,
        }
    }
}

fn roll(rng: &mut impl Rng, min: u32, max: u32) -> f64 {
    rng.gen_range(min..max) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn summarize_basic() {
        let series = Series::new(
            vec!["A".to_string(), "B".to_string()],
            vec![3.0, 7.0],
            "Form Submissions by Category",
        );
        let summary = series.summarize();
        assert_eq!(summary.total, 10.0);
        assert_eq!(summary.average, 5.0);
        assert_eq!(summary.top_label, "B");
        assert_eq!(summary.top_value, 7.0);
        assert_eq!(summary.top_caption(), "7 entries");
    }

    #[test]
    fn summarize_ties_break_to_first_occurrence() {
        let series = Series::new(
            vec!["x".to_string(), "y".to_string(), "z".to_string()],
            vec![4.0, 9.0, 9.0],
            "t",
        );
        assert_eq!(series.summarize().top_label, "y");
    }

    #[test]
    fn summarize_rounds_average() {
        let series = Series::new(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec![1.0, 1.0, 2.0],
            "t",
        );
        // 4/3 rounds to 1
        assert_eq!(series.summarize().average, 1.0);
    }

    #[test]
    fn empty_dataset_becomes_placeholder() {
        let series = Series::new(Vec::new(), Vec::new(), "t");
        assert_eq!(series.labels, vec!["No Data"]);
        assert_eq!(series.values, vec![0.0]);
    }

    #[test]
    fn from_stats_empty_mapping_is_placeholder() {
        let series = Series::from_stats(&BTreeMap::new());
        assert_eq!(series.labels, vec!["No Data"]);
        assert_eq!(series.values, vec![0.0]);
    }

    #[test]
    fn from_stats_orders_by_category_name() {
        let mut categories = BTreeMap::new();
        categories.insert("B".to_string(), 7.0);
        categories.insert("A".to_string(), 3.0);
        let series = Series::from_stats(&categories);
        assert_eq!(series.labels, vec!["A", "B"]);
        assert_eq!(series.values, vec![3.0, 7.0]);
    }

    #[test]
    fn monthly_series_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let series = Series::monthly(&mut rng);
        assert_eq!(series.labels, MONTH_LABELS);
        assert_eq!(series.len(), 6);
        assert!(series.values.iter().all(|&v| (10.0..60.0).contains(&v)));
    }

    #[test]
    fn sample_series_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let series = Series::sample(&mut rng);
        assert_eq!(series.labels, SAMPLE_LABELS);
        assert!(series.values.iter().all(|&v| (10.0..110.0).contains(&v)));
    }

    #[test]
    fn randomize_keeps_labels() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut series = Series::sample(&mut rng);
        let labels = series.labels.clone();
        series.randomize(&mut rng);
        assert_eq!(series.labels, labels);
        assert!(series.values.iter().all(|&v| (10.0..110.0).contains(&v)));
    }

    #[test]
    fn chart_kind_ids_round_trip() {
        for kind in ChartKind::ALL {
            assert_eq!(ChartKind::parse(kind.id()), kind);
        }
        assert_eq!(ChartKind::parse("bogus"), ChartKind::Bar);
    }

    #[test]
    fn only_pie_family_is_categorical() {
        assert!(ChartKind::Pie.is_categorical());
        assert!(ChartKind::Doughnut.is_categorical());
        assert!(!ChartKind::Bar.is_categorical());
        assert!(!ChartKind::PolarArea.is_categorical());
    }

    #[test]
    fn data_source_ids_round_trip() {
        for source in DataSource::ALL {
            assert_eq!(DataSource::parse(source.id()), source);
        }
        assert_eq!(DataSource::parse(""), DataSource::Categories);
    }
}
