// Peak utilization reduction + display formatting

use crate::models::{NO_DATA, TrendSample};

/// Top samples kept for the peak mean. Averaging the busiest 5-min
/// buckets characterizes sustained-high load rather than a single spike.
pub const PEAK_SAMPLE_COUNT: usize = 3;

/// Reduces one series to its peak utilization: bucket averages (an absent
/// bucket counts as the -1 sentinel) sorted descending, mean of the top
/// 3 or fewer. An empty series reduces to the sentinel alone.
pub fn reduce_to_peak(samples: &[TrendSample]) -> f64 {
    let mut values: Vec<f64> = samples
        .iter()
        .map(|s| s.average.unwrap_or(NO_DATA))
        .collect();
    if values.is_empty() {
        values.push(NO_DATA);
    }
    values.sort_by(|a, b| b.total_cmp(a));
    let top = &values[..values.len().min(PEAK_SAMPLE_COUNT)];
    top.iter().sum::<f64>() / top.len() as f64
}

/// "N/A" for the sentinel, otherwise two decimals with a percent unit.
pub fn format_percent(value: f64) -> String {
    if value == NO_DATA {
        return "N/A".to_string();
    }
    format!("{value:.2} %")
}
