//! Report Renderer: the HTML dashboard page.

use crate::model::{ScoreTier, Snapshot};
use crate::render::{escape, Document};
use crate::view::{build_report_data, ChannelRow, ReportData, TotalsView};

/// Tailwind color family for a score badge.
fn tier_color(tier: ScoreTier) -> &'static str {
    match tier {
        ScoreTier::Good => "green",
        ScoreTier::Warning => "yellow",
        ScoreTier::Critical => "red",
    }
}

fn status_badge(enabled: bool) -> (&'static str, &'static str) {
    if enabled {
        ("green", "Active")
    } else {
        ("red", "Inactive")
    }
}

/// Render the dashboard page for a snapshot.
pub fn render_html_report(snapshot: &Snapshot) -> String {
    render_report_data(&build_report_data(snapshot))
}

pub fn render_report_data(data: &ReportData) -> String {
    let mut doc = Document::new();
    doc.push(HEAD);
    doc.push(render_header(&data.timestamp));
    doc.push(render_summary(&data.totals));
    doc.push(TABLE_OPEN);
    for row in &data.rows {
        doc.push(render_row(row));
    }
    doc.push(TABLE_CLOSE);
    doc.finish()
}

fn render_header(timestamp: &str) -> String {
    format!(
        r#"<header class="bg-white rounded-lg shadow-lg p-6 mb-8">
  <h1 class="text-3xl font-bold text-gray-900 text-center">Proxy Channel Performance Dashboard</h1>
  <p class="text-center text-gray-600 mt-2">Last Updated: {timestamp}</p>
{links}</header>
"#,
        timestamp = escape(timestamp),
        links = DEVELOPER_LINKS,
    )
}

fn summary_tile(title: &str, color: &str, value: &str) -> String {
    format!(
        r#"  <div class="bg-white rounded-lg shadow-lg p-6">
    <h3 class="text-lg font-semibold text-gray-700 mb-4">{title}</h3>
    <div class="text-3xl font-bold text-{color}-600">{value}</div>
  </div>
"#
    )
}

fn render_summary(totals: &TotalsView) -> String {
    let mut doc = Document::new();
    doc.push(r#"<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4 mb-8">
"#);
    doc.push(summary_tile(
        "Active Channels",
        "blue",
        &format!(
            r#"{} <span class="text-sm font-normal text-gray-500">/ {}</span>"#,
            totals.active_channels, totals.total_channels
        ),
    ));
    doc.push(summary_tile(
        "Total Valid Configs",
        "green",
        &totals.total_valid_configs.to_string(),
    ));
    doc.push(summary_tile(
        "Average Success Rate",
        "yellow",
        &format!("{:.1}%", totals.avg_success_rate),
    ));
    doc.push(summary_tile(
        "Average Response Time",
        "purple",
        &format!("{:.2}s", totals.avg_response_time),
    ));
    doc.push("</div>\n");
    doc.finish()
}

fn render_row(row: &ChannelRow) -> String {
    let (status_color, status_label) = status_badge(row.enabled);
    let score_color = tier_color(row.tier);
    format!(
        r#"        <tr>
          <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">{name}</td>
          <td class="px-6 py-4 whitespace-nowrap"><span class="px-2 inline-flex text-xs leading-5 font-semibold rounded-full bg-{status_color}-100 text-{status_color}-800">{status_label}</span></td>
          <td class="px-6 py-4 whitespace-nowrap"><span class="px-2 inline-flex text-xs leading-5 font-semibold rounded-full bg-{score_color}-100 text-{score_color}-800">{score:.1}%</span></td>
          <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{success:.1}%</td>
          <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{response:.2}s</td>
          <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{valid}/{total}</td>
          <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{last_success}</td>
        </tr>
"#,
        name = escape(&row.name),
        score = row.score,
        success = row.success_rate,
        response = row.avg_response_time,
        valid = row.valid_configs,
        total = row.total_configs,
        last_success = escape(&row.last_success),
    )
}

const HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Channel Performance Report</title>
<link href="https://cdnjs.cloudflare.com/ajax/libs/tailwindcss/2.2.19/tailwind.min.css" rel="stylesheet">
</head>
<body class="bg-gradient-to-br from-gray-50 to-gray-100 min-h-screen">
<div class="max-w-7xl mx-auto p-4 sm:p-6 lg:p-8">
"#;

/// Static attribution block shown under the page title.
const DEVELOPER_LINKS: &str = r#"  <div class="mt-6 bg-blue-50 rounded-lg p-4 flex flex-col items-center justify-center">
    <h2 class="text-lg font-semibold text-blue-800">Developer Information</h2>
    <div class="flex items-center space-x-6 mt-2">
      <a href="https://github.com/nyeinkokoaung404" target="_blank" class="flex items-center text-gray-700 hover:text-blue-600">GitHub Profile</a>
      <a href="https://github.com/nyeinkokoaung404/multi-proxy-config-fetcher" target="_blank" class="flex items-center text-gray-700 hover:text-blue-600">Project Repository</a>
      <a href="https://x.com/nyeinkokoaung404" target="_blank" class="flex items-center text-gray-700 hover:text-blue-600">X (Twitter)</a>
    </div>
  </div>
"#;

const TABLE_OPEN: &str = r#"<div class="bg-white rounded-lg shadow-lg p-6 mb-8">
  <h3 class="text-xl font-semibold text-gray-800 mb-6">Detailed Channel Statistics</h3>
  <div class="overflow-x-auto">
    <table class="min-w-full divide-y divide-gray-200">
      <thead class="bg-gray-50">
        <tr>
          <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">Channel</th>
          <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">Status</th>
          <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">Score</th>
          <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">Success Rate</th>
          <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">Response Time</th>
          <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">Valid/Total</th>
          <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">Last Success</th>
        </tr>
      </thead>
      <tbody class="bg-white divide-y divide-gray-200">
"#;

const TABLE_CLOSE: &str = r#"      </tbody>
    </table>
  </div>
</div>
</div>
</body>
</html>
"#;
