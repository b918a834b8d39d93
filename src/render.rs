//! Report rendering (SVG chart and HTML dashboard).

pub mod html;
pub mod svg;

pub use html::render_html_report;
pub use svg::render_svg_chart;

/// Ordered text segments joined once when the document is complete.
#[derive(Debug, Default)]
pub struct Document {
    parts: Vec<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    pub fn finish(self) -> String {
        self.parts.concat()
    }
}

/// Escape text for HTML/XML element content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
