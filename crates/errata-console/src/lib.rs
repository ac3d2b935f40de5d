//! Colorful console output for classification events.
//!
//! Provides a custom `tracing` layer that formats errata events with colors.
//! Output goes to stderr so that results printed on stdout stay machine
//! readable.
//!
//! ## Log Levels
//!
//! - **INFO**: Batch start and end
//! - **DEBUG**: One line per classification with the rule that fired
//! - **TRACE**: Similarity scores behind the robot checks

use errata_core::ErrorLabel;
use errata_engine::BatchSummary;
use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static BATCH_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "errata_engine=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing with `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ClassifierConsoleLayer)
            .try_init();
    });
}

// Marks the start of a batch for elapsed time tracking.
fn mark_batch_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    BATCH_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since batch start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = BATCH_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
  ___ _ __ _ __ __ _| |_ __ _
 / _ \ '__| '__/ _` | __/ _` |
|  __/ |  | | | (_| | || (_| |
 \___|_|  |_|  \__,_|\__\__,_|
"#;

    let version_line = format!("     v{} - Answer Error Classifier\n", VERSION);

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", banner.bright_cyan());
    let _ = writeln!(stderr, "{}", version_line.bright_white().bold());
    let _ = stderr.flush();
}

/// A tracing layer that formats classifier events with colors.
pub struct ClassifierConsoleLayer;

impl<S: Subscriber> Layer<S> for ClassifierConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        if !metadata.target().starts_with("errata_") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    taxonomy: Option<String>,
    label: Option<String>,
    rule: Option<String>,
    start: Option<String>,
    end: Option<String>,
    variation: Option<String>,
    record_count: Option<u64>,
    classified: Option<u64>,
    skipped: Option<u64>,
    failed: Option<u64>,
    duration_ms: Option<u64>,
}

impl EventVisitor {
    fn set_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "taxonomy" => self.taxonomy = Some(value),
            "label" => self.label = Some(value),
            "rule" => self.rule = Some(value),
            "start" => self.start = Some(value),
            "end" => self.end = Some(value),
            "variation" => self.variation = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field, s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "record_count" => self.record_count = Some(value),
            "classified" => self.classified = Some(value),
            "skipped" => self.skipped = Some(value),
            "failed" => self.failed = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field, value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "batch_start" => format_batch_start(v),
        "batch_end" => format_batch_end(v),
        "classify" => format_classify(v),
        "similarity" => format_similarity(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_batch_start(v: &EventVisitor) -> String {
    mark_batch_start();
    let records = v.record_count.unwrap_or(0);
    let taxonomy = v.taxonomy.as_deref().unwrap_or("unknown");

    format!(
        "{} {} Classifying │ {} records │ taxonomy {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        records.to_formatted_string(&Locale::en).bright_yellow(),
        taxonomy.bright_magenta()
    )
}

fn format_batch_end(v: &EventVisitor) -> String {
    let classified = v.classified.unwrap_or(0);
    let skipped = v.skipped.unwrap_or(0);
    let failed = v.failed.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    let mut output = format!(
        "{} {} Batch complete │ {} │ {} classified │ {} skipped",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(duration).yellow(),
        classified.to_formatted_string(&Locale::en).white(),
        skipped.to_formatted_string(&Locale::en).white(),
    );

    if failed > 0 {
        output.push_str(&format!(
            " │ {} failed",
            failed.to_formatted_string(&Locale::en).bright_red().bold()
        ));
    }

    output
}

fn format_classify(v: &EventVisitor) -> String {
    let label = v.label.as_deref().unwrap_or("unknown");
    let rule = v.rule.as_deref().unwrap_or("unknown");
    let taxonomy = v.taxonomy.as_deref().unwrap_or("unknown");

    format!(
        "{} {} {:<20} │ rule {} │ {}",
        format_elapsed(),
        "•".bright_blue(),
        format_label(label),
        rule.white(),
        taxonomy.bright_black()
    )
}

fn format_similarity(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{}   similarity │ start {} │ end {} │ variation {}",
        format_elapsed(),
        v.start.as_deref().unwrap_or("-").bright_black(),
        v.end.as_deref().unwrap_or("-").bright_black(),
        v.variation.as_deref().unwrap_or("none").bright_black()
    )
}

fn format_label(label: &str) -> String {
    match label.parse::<ErrorLabel>() {
        Ok(ErrorLabel::NoError) => label.bright_green().to_string(),
        Ok(l) if l.is_unclassified() => label.yellow().to_string(),
        Ok(_) => label.bright_magenta().bold().to_string(),
        Err(_) => label.white().to_string(),
    }
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

/// Renders a label-count table for a finished batch.
pub fn render_summary(summary: &BatchSummary) -> String {
    let rule = "═".repeat(40);
    let mut output = String::new();

    output.push_str(&format!("╔{}╗", rule).bright_cyan().to_string());
    output.push('\n');

    for (label, count) in &summary.labels {
        let styled = format_label(label.as_str());
        output.push_str(&summary_row(&styled, label.as_str(), *count));
    }
    if summary.skipped > 0 {
        output.push_str(&summary_row("skipped", "skipped", summary.skipped));
    }
    if summary.failed > 0 {
        let failed = "failed".bright_red().to_string();
        output.push_str(&summary_row(&failed, "failed", summary.failed));
    }

    output.push_str(&format!("╠{}╣", rule).bright_cyan().to_string());
    output.push('\n');
    output.push_str(&summary_row("total", "total", summary.total()));
    output.push_str(&format!("╚{}╝", rule).bright_cyan().to_string());
    output.push('\n');
    output
}

// Pads on the plain text width; `styled` may carry color codes.
fn summary_row(styled: &str, plain: &str, count: usize) -> String {
    let count = count.to_formatted_string(&Locale::en);
    let pad = 36usize.saturating_sub(plain.len() + count.len());
    format!(
        "{}  {}{}{}  {}\n",
        "║".bright_cyan(),
        styled,
        " ".repeat(pad),
        count,
        "║".bright_cyan()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_render_summary() {
        let mut summary = BatchSummary::default();
        summary.labels.insert(ErrorLabel::Robot, 1200);
        summary.labels.insert(ErrorLabel::NoClassification, 3);
        summary.failed = 1;

        let output = render_summary(&summary);
        assert!(output.contains("robot"));
        assert!(output.contains("1,200"));
        assert!(output.contains("no_classification"));
        assert!(output.contains("failed"));
        assert!(output.contains("1,204"));
        assert!(!output.contains("skipped"));
    }

    #[test]
    fn test_unknown_events_are_ignored() {
        let visitor = EventVisitor {
            event: Some("unrelated".into()),
            ..Default::default()
        };
        assert!(format_event(&visitor, Level::INFO).is_empty());
    }

    #[test]
    fn test_similarity_only_at_trace() {
        let visitor = EventVisitor {
            event: Some("similarity".into()),
            start: Some("1/1".into()),
            ..Default::default()
        };
        assert!(format_event(&visitor, Level::DEBUG).is_empty());
        assert!(format_event(&visitor, Level::TRACE).contains("1/1"));
    }
}
