//! Aggregation model: fleet-wide totals plus one row per channel.

use crate::model::{ScoreTier, Snapshot};

#[derive(Debug, Clone)]
pub struct ChannelRow {
    pub name: String,
    pub enabled: bool,
    pub score: f64,
    pub tier: ScoreTier,
    pub success_rate: f64,
    pub avg_response_time: f64,
    pub valid_configs: u64,
    pub total_configs: u64,
    pub last_success: String,
}

#[derive(Debug, Clone)]
pub struct TotalsView {
    pub total_channels: usize,
    pub active_channels: usize,
    pub total_valid_configs: u64,
    /// Mean of per-channel success rates (percent).
    pub avg_success_rate: f64,
    /// Mean of per-channel response times (seconds).
    pub avg_response_time: f64,
}

#[derive(Debug, Clone)]
pub struct ReportData {
    pub timestamp: String,
    pub totals: TotalsView,
    /// Sorted by score, highest first.
    pub rows: Vec<ChannelRow>,
}

/// Build report data. Totals are taken over every channel; averages are 0
/// for an empty snapshot.
pub fn build_report_data(snapshot: &Snapshot) -> ReportData {
    let channels = &snapshot.channels;

    let totals = TotalsView {
        total_channels: channels.len(),
        active_channels: channels.iter().filter(|c| c.enabled).count(),
        total_valid_configs: channels.iter().map(|c| c.metrics.valid_configs).sum(),
        avg_success_rate: mean(channels.iter().map(|c| c.success_rate()), channels.len()),
        avg_response_time: mean(
            channels.iter().map(|c| c.metrics.avg_response_time),
            channels.len(),
        ),
    };

    let rows = snapshot
        .sorted_by_score()
        .into_iter()
        .map(|c| ChannelRow {
            name: c.display_name().to_string(),
            enabled: c.enabled,
            score: c.score(),
            tier: c.tier(),
            success_rate: c.success_rate(),
            avg_response_time: c.metrics.avg_response_time,
            valid_configs: c.metrics.valid_configs,
            total_configs: c.metrics.total_configs,
            last_success: c.metrics.last_success.clone(),
        })
        .collect();

    ReportData {
        timestamp: snapshot.timestamp.clone(),
        totals,
        rows,
    }
}

/// Mean over `count` values, 0.0 (positive zero) when there are none.
fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    // `Sum for f64` starts from -0.0, which would render as "-0.0".
    values.fold(0.0, |acc, v| acc + v) / count.max(1) as f64
}
