//! Reporting statistics for the study charts
//!
//! Computes what the two charts display from a finalized dataset: the age
//! versus TUG-time scatter with its least-squares trend and Pearson
//! correlation, and the per-village box-and-whisker distributions. Drawing
//! the charts is left to whatever plotting tool consumes these numbers.

pub mod dataset;
pub mod distribution;
pub mod trend;

use std::fmt;

use itertools::Itertools;
use serde::Serialize;

pub use dataset::{Observation, load_observations, observations_from_participants};
pub use distribution::{BoxSummary, TUKEY_FENCE, quantile, summarize_distribution};
pub use trend::{LinearTrend, fit_linear_trend};

/// Everything the two charts show
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyReport {
    /// Observations the report was built from
    pub n: usize,
    /// Scatter trend; absent when the data cannot support a fit
    pub trend: Option<LinearTrend>,
    /// One summary per village with data, in reporting order
    pub distributions: Vec<BoxSummary>,
}

impl StudyReport {
    /// Build the report
    ///
    /// `groups` fixes the village order; villages absent from it are appended
    /// in order of first appearance.
    #[must_use]
    pub fn build(observations: &[Observation], groups: &[String]) -> Self {
        let points: Vec<(f64, f64)> = observations.iter().map(|o| (o.age, o.tug_time)).collect();

        let order: Vec<&str> = groups
            .iter()
            .map(String::as_str)
            .chain(observations.iter().map(|o| o.group.as_str()))
            .unique()
            .collect();

        let distributions = order
            .into_iter()
            .filter_map(|group| {
                let values: Vec<f64> = observations
                    .iter()
                    .filter(|o| o.group == group)
                    .map(|o| o.tug_time)
                    .collect();
                summarize_distribution(group, &values)
            })
            .collect();

        Self {
            n: observations.len(),
            trend: fit_linear_trend(&points),
            distributions,
        }
    }

    /// Summary of one village
    #[must_use]
    pub fn distribution(&self, group: &str) -> Option<&BoxSummary> {
        self.distributions.iter().find(|d| d.group == group)
    }
}

impl fmt::Display for StudyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Age vs. Timed Up and Go (N={})", self.n)?;
        match &self.trend {
            Some(trend) => writeln!(f, "{trend}")?,
            None => writeln!(f, "Not enough varied data for a trend line")?,
        }

        writeln!(f, "\nSummary Statistics:")?;
        writeln!(
            f,
            "{:<8} {:<3} {:<7} {:<8} {:<12}",
            "Village", "n", "Median", "IQR", "Mean±SD"
        )?;
        writeln!(f, "{}", "-".repeat(45))?;
        for d in &self.distributions {
            let spread = d
                .std_dev
                .map_or_else(|| format!("{:.1}", d.mean), |sd| format!("{:.1}±{sd:.1}", d.mean));
            writeln!(
                f,
                "{:<8} {:<3} {:<7.1} {:<8.1} {:<12}",
                d.group, d.n, d.median, d.iqr, spread
            )?;
        }

        writeln!(f, "\nOutlier Analysis:")?;
        for d in &self.distributions {
            if d.outliers.is_empty() {
                writeln!(f, "{}: No outliers detected", d.group)?;
            } else {
                writeln!(
                    f,
                    "{}: {} outlier(s) - [{}]",
                    d.group,
                    d.outliers.len(),
                    d.outliers.iter().map(|v| format!("{v:.1}")).join(", ")
                )?;
            }
        }
        Ok(())
    }
}
