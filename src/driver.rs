//! Load the snapshot, render both artifacts and write them out.

use crate::model::Snapshot;
use crate::render;
use crate::Result;

use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "configs/channel_stats.json";
pub const DEFAULT_OUT_DIR: &str = "assets";
pub const DEFAULT_CHART: &str = "assets/channel_stats_chart.svg";
pub const DEFAULT_REPORT: &str = "assets/performance_report.html";

/// Input and output locations for one run.
#[derive(Debug, Clone)]
pub struct Paths {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub chart: PathBuf,
    pub report: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Generated,
    InputMissing(PathBuf),
    Failed(String),
}

impl Outcome {
    pub fn message(&self) -> String {
        match self {
            Outcome::Generated => "Successfully generated chart and report!".to_string(),
            Outcome::InputMissing(path) => format!(
                "Error: {} not found. Skipping chart generation.",
                path.display()
            ),
            Outcome::Failed(e) => format!("Error generating outputs: {}", e),
        }
    }
}

/// Run load -> render -> write. Every failure is folded into the outcome.
pub fn run(paths: &Paths, verbose: bool) -> Outcome {
    let text = match fs::read_to_string(&paths.input) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Outcome::InputMissing(paths.input.clone())
        }
        Err(e) => {
            return Outcome::Failed(format!("read {}: {}", paths.input.display(), e));
        }
    };

    match generate(&text, paths, verbose) {
        Ok(()) => Outcome::Generated,
        Err(e) => Outcome::Failed(format!("{:#}", e)),
    }
}

fn generate(text: &str, paths: &Paths, verbose: bool) -> Result<()> {
    let snapshot = Snapshot::from_json_str(text)
        .with_context(|| format!("load {}", paths.input.display()))?;

    fs::create_dir_all(&paths.out_dir)
        .with_context(|| format!("create output dir {}", paths.out_dir.display()))?;

    write_artifact(&paths.chart, &render::render_svg_chart(&snapshot), verbose)?;
    write_artifact(&paths.report, &render::render_html_report(&snapshot), verbose)?;
    Ok(())
}

fn write_artifact(path: &Path, contents: &str, verbose: bool) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))?;
    if verbose {
        crate::diagnostics::note(format!("Wrote {}", path.display()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths_in(dir: &Path) -> Paths {
        let out_dir = dir.join("assets");
        Paths {
            input: dir.join("configs").join("channel_stats.json"),
            chart: out_dir.join("channel_stats_chart.svg"),
            report: out_dir.join("performance_report.html"),
            out_dir,
        }
    }

    fn write_input(paths: &Paths, text: &str) {
        fs::create_dir_all(paths.input.parent().unwrap()).unwrap();
        fs::write(&paths.input, text).unwrap();
    }

    const TWO_CHANNELS: &str = r#"{
        "timestamp": "2024-01-02T03:04:05",
        "channels": [
            { "url": "https://example.com/feeds/B", "enabled": false, "metrics": {
                "overall_score": 40, "success_count": 2, "fail_count": 8,
                "avg_response_time": 2.0, "valid_configs": 2, "total_configs": 10,
                "last_success": "N/A" } },
            { "url": "https://example.com/feeds/A", "enabled": true, "metrics": {
                "overall_score": 80, "success_count": 8, "fail_count": 2,
                "avg_response_time": 0.5, "valid_configs": 8, "total_configs": 10,
                "last_success": "2024-01-01" } }
        ]
    }"#;

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let paths = paths_in(dir.path());

        let outcome = run(&paths, false);
        assert_eq!(outcome, Outcome::InputMissing(paths.input.clone()));
        assert!(outcome.message().contains("not found. Skipping chart generation."));
        assert!(!paths.out_dir.exists());
        assert!(!paths.chart.exists());
        assert!(!paths.report.exists());
    }

    #[test]
    fn test_end_to_end_two_channels() {
        let dir = TempDir::new().unwrap();
        let paths = paths_in(dir.path());
        write_input(&paths, TWO_CHANNELS);

        let outcome = run(&paths, false);
        assert_eq!(outcome, Outcome::Generated);
        assert_eq!(outcome.message(), "Successfully generated chart and report!");

        let svg = fs::read_to_string(&paths.chart).unwrap();
        assert!(svg.find(">A</text>").unwrap() < svg.find(">B</text>").unwrap());

        let html = fs::read_to_string(&paths.report).unwrap();
        assert!(html.contains(">50.0%</div>"));
        assert!(html.contains(">1.25s</div>"));
        assert!(html.find(">A</td>").unwrap() < html.find(">B</td>").unwrap());
    }

    #[test]
    fn test_existing_out_dir_and_overwrite() {
        let dir = TempDir::new().unwrap();
        let paths = paths_in(dir.path());
        write_input(&paths, TWO_CHANNELS);
        fs::create_dir_all(&paths.out_dir).unwrap();
        fs::write(&paths.chart, "stale").unwrap();

        assert_eq!(run(&paths, false), Outcome::Generated);
        let svg = fs::read_to_string(&paths.chart).unwrap();
        assert!(svg.starts_with("<?xml"));
    }

    #[test]
    fn test_empty_document_renders_default_snapshot() {
        let dir = TempDir::new().unwrap();
        let paths = paths_in(dir.path());
        write_input(&paths, "{}");

        assert_eq!(run(&paths, false), Outcome::Generated);
        let html = fs::read_to_string(&paths.report).unwrap();
        assert!(!html.contains("Last Updated: N/A"));
        assert!(html.contains(">0.0%</div>"));
        assert!(html.contains(">0.00s</div>"));
        assert!(!html.contains("-0.0"));
    }

    #[test]
    fn test_null_display_fields_still_render() {
        let dir = TempDir::new().unwrap();
        let paths = paths_in(dir.path());
        write_input(
            &paths,
            r#"{ "timestamp": null, "channels": [ { "url": "https://x/feeds/C", "enabled": true,
                "metrics": { "overall_score": 55, "success_count": 1, "fail_count": 1,
                    "avg_response_time": 1.5, "valid_configs": 1, "total_configs": 2,
                    "last_success": null } } ] }"#,
        );

        assert_eq!(run(&paths, false), Outcome::Generated);
        let html = fs::read_to_string(&paths.report).unwrap();
        assert!(html.contains("Last Updated: N/A"));
        assert!(html.contains(">N/A</td>"));
        assert!(html.contains(">C</td>"));
    }

    #[test]
    fn test_malformed_input_is_reported() {
        let dir = TempDir::new().unwrap();
        let paths = paths_in(dir.path());
        write_input(&paths, "{ \"channels\": [ { \"url\": \"a/b\" } ] }");

        let outcome = run(&paths, false);
        match &outcome {
            Outcome::Failed(msg) => assert!(msg.contains("load")),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(outcome.message().starts_with("Error generating outputs: "));
        assert!(!paths.chart.exists());
    }

    #[test]
    fn test_report_failure_keeps_chart() {
        let dir = TempDir::new().unwrap();
        let mut paths = paths_in(dir.path());
        write_input(&paths, TWO_CHANNELS);
        // A directory in place of the report file makes the second write fail.
        paths.report = dir.path().join("blocked");
        fs::create_dir_all(&paths.report).unwrap();

        let outcome = run(&paths, false);
        assert!(matches!(outcome, Outcome::Failed(_)));
        assert!(paths.chart.exists());
    }
}
