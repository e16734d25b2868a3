//! Per-village measurement distributions
//!
//! Five-number summaries with Tukey fences, matching what the box-and-whisker
//! chart draws for each village.

use serde::Serialize;

/// Multiplier of the interquartile range that places the outlier fences
pub const TUKEY_FENCE: f64 = 1.5;

/// Box-and-whisker summary of one village's measurements
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSummary {
    pub group: String,
    pub n: usize,
    pub median: f64,
    pub mean: f64,
    /// Sample standard deviation; undefined for a single value
    pub std_dev: Option<f64>,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub min: f64,
    pub max: f64,
    /// `q1 - 1.5 * iqr`
    pub lower_fence: f64,
    /// `q3 + 1.5 * iqr`
    pub upper_fence: f64,
    /// Smallest value inside the fences
    pub whisker_low: f64,
    /// Largest value inside the fences
    pub whisker_high: f64,
    /// Values beyond either fence, ascending
    pub outliers: Vec<f64>,
}

/// Quantile of sorted data by linear interpolation between closest ranks
///
/// `sorted` must be non-empty and ascending.
#[must_use]
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    sorted[lower] + (sorted[upper] - sorted[lower]) * (position - lower as f64)
}

/// Summarize a village's measurements
///
/// NaN values are ignored; returns `None` when nothing remains.
#[must_use]
pub fn summarize_distribution(group: &str, values: &[f64]) -> Option<BoxSummary> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let std_dev = (n > 1).then(|| {
        let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (n - 1) as f64).sqrt()
    });

    let q1 = quantile(&sorted, 0.25);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    let lower_fence = q1 - TUKEY_FENCE * iqr;
    let upper_fence = q3 + TUKEY_FENCE * iqr;

    let (inside, outliers): (Vec<f64>, Vec<f64>) = sorted
        .iter()
        .partition(|&&v| v >= lower_fence && v <= upper_fence);

    // The quartiles always lie inside the fences, so `inside` is never empty
    let whisker_low = inside.first().copied().unwrap_or(q1);
    let whisker_high = inside.last().copied().unwrap_or(q3);

    Some(BoxSummary {
        group: group.to_string(),
        n,
        median: quantile(&sorted, 0.5),
        mean,
        std_dev,
        q1,
        q3,
        iqr,
        min: sorted[0],
        max: sorted[n - 1],
        lower_fence,
        upper_fence,
        whisker_low,
        whisker_high,
        outliers,
    })
}
