//! Chart Renderer: the SVG bar chart ranking channels by score.

use crate::model::{ScoreTier, Snapshot};
use crate::render::{escape, Document};

const WIDTH: u32 = 800;
const BASE_HEIGHT: u32 = 100;
const ROW_HEIGHT: u32 = 50;
const FIRST_ROW_Y: u32 = 80;

const BAR_X: u32 = 150;
const BAR_HEIGHT: u32 = 30;
const TRACK_WIDTH: f64 = 500.0;
/// Pixels per score point.
const BAR_SCALE: f64 = 5.0;

fn gradient_id(tier: ScoreTier) -> &'static str {
    match tier {
        ScoreTier::Good => "grad-green",
        ScoreTier::Warning => "grad-yellow",
        ScoreTier::Critical => "grad-red",
    }
}

/// Width of the score bar, capped to the track. Negative scores draw nothing.
pub fn bar_width(score: f64) -> f64 {
    (BAR_SCALE * score).clamp(0.0, TRACK_WIDTH)
}

pub fn chart_height(channel_count: usize) -> usize {
    BASE_HEIGHT as usize + ROW_HEIGHT as usize * channel_count
}

/// Render a standalone SVG bar chart ranking channels by score.
pub fn render_svg_chart(snapshot: &Snapshot) -> String {
    let sorted = snapshot.sorted_by_score();
    let height = chart_height(sorted.len());

    let mut doc = Document::new();
    doc.push(format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{WIDTH}" height="{height}" version="1.1" xmlns="http://www.w3.org/2000/svg">
"#
    ));
    doc.push(DEFS);
    doc.push(format!(
        r#"<rect width="100%" height="100%" class="bg-rect"/>
<text x="{}" y="45" text-anchor="middle" class="title">Channel Performance Overview</text>
"#,
        WIDTH / 2
    ));

    for (idx, channel) in sorted.iter().enumerate() {
        let y = FIRST_ROW_Y + idx as u32 * ROW_HEIGHT;
        let text_y = y + 20;
        let width = bar_width(channel.score());
        let fill = gradient_id(channel.tier());
        let name = escape(channel.display_name());
        let label_x = BAR_X - 15;
        let score_x = BAR_X + TRACK_WIDTH as u32 + 15;

        doc.push(format!(
            r##"<rect x="{BAR_X}" y="{y}" width="{TRACK_WIDTH}" height="{BAR_HEIGHT}" fill="#1e293b" rx="6"/>
<clipPath id="clip-{idx}">
  <rect x="{BAR_X}" y="{y}" width="{width:.1}" height="{BAR_HEIGHT}" rx="6"/>
</clipPath>
<rect x="{BAR_X}" y="{y}" width="{width:.1}" height="{BAR_HEIGHT}" fill="url(#{fill})" rx="6"/>
<g clip-path="url(#clip-{idx})">
  <rect x="{BAR_X}" y="{y}" width="100%" height="{BAR_HEIGHT}" fill="url(#shimmer)" class="shimmer-rect"/>
</g>
<text x="{label_x}" y="{text_y}" text-anchor="end" class="row">{name}</text>
<text x="{score_x}" y="{text_y}" text-anchor="start" class="score">{score:.1}% (S:{success:.0}%)</text>
"##,
            score = channel.score(),
            success = channel.success_rate(),
        ));
    }

    doc.push("</svg>\n");
    doc.finish()
}

const DEFS: &str = r##"<defs>
  <linearGradient id="grad-green" x1="0%" y1="0%" x2="100%" y2="0%">
    <stop offset="0%" stop-color="#16a34a"/>
    <stop offset="100%" stop-color="#4ade80"/>
  </linearGradient>
  <linearGradient id="grad-yellow" x1="0%" y1="0%" x2="100%" y2="0%">
    <stop offset="0%" stop-color="#ca8a04"/>
    <stop offset="100%" stop-color="#fde047"/>
  </linearGradient>
  <linearGradient id="grad-red" x1="0%" y1="0%" x2="100%" y2="0%">
    <stop offset="0%" stop-color="#dc2626"/>
    <stop offset="100%" stop-color="#f87171"/>
  </linearGradient>
  <linearGradient id="shimmer" x1="0%" y1="0%" x2="100%" y2="0%">
    <stop offset="0%" stop-color="rgba(255,255,255,0)"/>
    <stop offset="50%" stop-color="rgba(255,255,255,0.4)"/>
    <stop offset="100%" stop-color="rgba(255,255,255,0)"/>
  </linearGradient>
  <filter id="glow" x="-20%" y="-20%" width="140%" height="140%">
    <feGaussianBlur stdDeviation="1.5" result="blur"/>
    <feComposite in="SourceGraphic" in2="blur" operator="over"/>
  </filter>
</defs>
<style>
  .bg-rect { fill: #0f172a; }
  .title { font: bold 22px 'Segoe UI', Arial, sans-serif; fill: #f8fafc; }
  .row { font: bold 15px 'Segoe UI', Arial, sans-serif; fill: #38bdf8; filter: url(#glow); }
  .score { font: bold 14px 'Segoe UI', Arial, sans-serif; fill: #f1f5f9; }
  @keyframes shimmer-anim {
    0% { transform: translateX(-100%); }
    100% { transform: translateX(200%); }
  }
  .shimmer-rect { animation: shimmer-anim 2.5s infinite linear; }
</style>
"##;
