//! `talent-map [INPUT] --company <NAME>` — build the talent map page from a people export.

use crate::cli::output::{self, Styled};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use talent_map::aggregate::build_talent_map;
use talent_map::render::render_html;
use talent_map::roster::{normalize_rows, parse_table, read_input, CompanyFilter};
use talent_map::Summary;
use tracing::info;

/// Default output path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "dist/index.html";

/// Title used when no company filter is given.
pub const DEFAULT_COMPANY_NAME: &str = "Company";

/// Options for one run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Input export; standard input when `None`.
    pub input: Option<PathBuf>,
    /// Case-insensitive company filter, also used as the page title.
    pub company: Option<String>,
    pub output: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            input: None,
            company: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// What a run produced.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub rows: usize,
    pub summary: Summary,
    pub elapsed: Duration,
}

/// Read, classify, aggregate, render and write. Nothing is written unless every
/// earlier step succeeds.
pub fn generate(opts: &GenerateOptions) -> Result<GenerateReport> {
    let start = Instant::now();

    let text = read_input(opts.input.as_deref()).context("failed to read people export")?;
    let rows = parse_table(&text);
    let filter = CompanyFilter::new(opts.company.as_deref());
    let people = normalize_rows(&rows, &filter);
    info!(rows = rows.len(), people = people.len(), "loaded roster");

    let company_name = opts
        .company
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_COMPANY_NAME);
    let map = build_talent_map(company_name, &people);
    let html = render_html(&map).context("failed to render talent map")?;

    write_output(&opts.output, &html)?;
    info!(
        path = %opts.output.display(),
        people = map.total_employees,
        locations = map.locations.len(),
        "wrote talent map"
    );

    Ok(GenerateReport {
        output: opts.output.clone(),
        rows: rows.len(),
        summary: map.summary(),
        elapsed: start.elapsed(),
    })
}

fn write_output(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))
}

/// Run the generate command and report the result.
pub fn run(opts: &GenerateOptions) -> Result<()> {
    let report = generate(opts)?;

    if output::is_json() {
        output::print_json(&report_json(&report));
        return Ok(());
    }
    if !output::is_quiet() {
        print_report(&Styled::new(), &report, output::is_verbose());
    }
    Ok(())
}

/// One-line failure report for stderr: the failure symbol, then the whole error chain.
pub fn failure_message(s: &Styled, err: &anyhow::Error) -> String {
    format!("  {} {err:#}", s.fail_sym())
}

/// Machine-readable run summary.
pub fn report_json(report: &GenerateReport) -> serde_json::Value {
    serde_json::json!({
        "output": report.output.display().to_string(),
        "rows": report.rows,
        "employees": report.summary.total,
        "locations": report.summary.locations,
        "duration_ms": report.elapsed.as_millis(),
    })
}

fn print_report(s: &Styled, report: &GenerateReport, verbose: bool) {
    let summary = &report.summary;
    output::print_header(s);
    eprintln!(
        "  {} Wrote {} ({} employees, {} locations) in {:.1}s",
        s.ok_sym(),
        s.cyan(&report.output.display().to_string()),
        summary.total,
        summary.locations.len(),
        report.elapsed.as_secs_f64()
    );

    let dropped = report.rows.saturating_sub(summary.total);
    if dropped > 0 {
        eprintln!("  {}", s.dim(&format!("{dropped} rows filtered out or missing a name")));
    }

    if summary.locations.is_empty() {
        return;
    }
    let shown = if verbose { summary.locations.len() } else { 5 };
    eprintln!();
    eprintln!("  {}", s.bold("Top locations:"));
    for loc in summary.locations.iter().take(shown) {
        eprintln!(
            "    {:<28} {:>6}  {}",
            truncate(&loc.label, 28),
            loc.count,
            output::share_bar(loc.count, summary.total, 20)
        );
    }
    if summary.locations.len() > shown {
        eprintln!(
            "    {}",
            s.dim(&format!("... {} more (use --verbose)", summary.locations.len() - shown))
        );
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let head: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{head}...")
}
