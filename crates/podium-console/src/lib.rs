//! Colorful console output for scheduler events.
//!
//! Provides a custom `tracing` layer that formats search events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (search start/end)
//! - **DEBUG**: Dead ends and rejected schedules
//! - **TRACE**: Individual placements

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SEARCH_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the scheduler console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the Podium banner and sets up tracing. `RUST_LOG` overrides the
/// default `podium_solver=info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let directive: Directive = "podium_solver=info"
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into());
        let filter = EnvFilter::builder()
            .with_default_directive(directive)
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PodiumConsoleLayer)
            .try_init();
    });
}

// Marks the start of a search for elapsed time tracking.
fn mark_search_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SEARCH_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since search start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SEARCH_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 ____           _ _
|  _ \ ___   __| (_)_   _ _ __ ___
| |_) / _ \ / _` | | | | | '_ ` _ \
|  __/ (_) | (_| | | |_| | | | | | |
|_|   \___/ \__,_|_|\__,_|_| |_| |_|
"#;

    let version_line = format!("        v{} - Contest Slot Scheduler\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats scheduler events with colors.
pub struct PodiumConsoleLayer;

impl<S: Subscriber> Layer<S> for PodiumConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        // Accept events from scheduler modules
        if !target.starts_with("podium_solver") && !target.starts_with("podium::") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let level = *metadata.level();
        let output = format_event(&visitor, level);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    contest: Option<String>,
    outcome: Option<String>,
    category: Option<String>,
    judge: Option<String>,
    slot: Option<String>,
    categories: Option<u64>,
    judges: Option<u64>,
    slots: Option<u64>,
    max_attempts: Option<u64>,
    duration_ms: Option<u64>,
    nodes: Option<u64>,
    dead_ends: Option<u64>,
    speed: Option<u64>,
    depth: Option<u64>,
    categories_left: Option<u64>,
    judges_left: Option<u64>,
    short_slots: Option<u64>,
}

impl EventVisitor {
    fn set_text(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "contest" => self.contest = Some(value),
            "outcome" => self.outcome = Some(value),
            "category" => self.category = Some(value),
            "judge" => self.judge = Some(value),
            "slot" => self.slot = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field.name(), s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "categories" => self.categories = Some(value),
            "judges" => self.judges = Some(value),
            "slots" => self.slots = Some(value),
            "max_attempts" => self.max_attempts = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "nodes" => self.nodes = Some(value),
            "dead_ends" => self.dead_ends = Some(value),
            "speed" => self.speed = Some(value),
            "depth" => self.depth = Some(value),
            "categories_left" => self.categories_left = Some(value),
            "judges_left" => self.judges_left = Some(value),
            "short_slots" => self.short_slots = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "search_start" => format_search_start(v),
        "search_end" => format_search_end(v),
        "dead_end" => format_dead_end(v),
        "validation_rejected" => format_rejected(v),
        "place_category" | "place_judge" => format_placement(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_search_start(v: &EventVisitor) -> String {
    mark_search_start();
    let contest = v.contest.as_deref().unwrap_or("contest");

    format!(
        "{} {} Scheduling {} │ {} categories │ {} judges │ {} slots │ {} attempts max",
        format_elapsed(),
        "▶".bright_green().bold(),
        contest.white().bold(),
        count(v.categories).bright_yellow(),
        count(v.judges).bright_yellow(),
        count(v.slots).bright_yellow(),
        count(v.max_attempts).bright_yellow(),
    )
}

fn format_search_end(v: &EventVisitor) -> String {
    let outcome = v.outcome.as_deref().unwrap_or("unknown");
    let status = match outcome {
        "found" => "SCHEDULE FOUND".bright_green().bold().to_string(),
        "exhausted" => "ATTEMPTS EXHAUSTED".bright_red().bold().to_string(),
        _ => "NO SCHEDULE".bright_red().bold().to_string(),
    };

    format!(
        "{} {} Search complete │ {} │ {} nodes │ {} dead ends │ {} nodes/s │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.nodes).white(),
        count(v.dead_ends).white(),
        count(v.speed).bright_magenta().bold(),
        status
    )
}

fn format_dead_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Dead end at depth {} │ {} categories, {} judges left",
        format_elapsed(),
        "↩".yellow(),
        count(v.depth).white(),
        count(v.categories_left),
        count(v.judges_left),
    )
}

fn format_rejected(v: &EventVisitor) -> String {
    format!(
        "{} {} Rejected schedule │ {} of {} slots short of judges",
        format_elapsed(),
        "✗".bright_red(),
        count(v.short_slots).bright_red(),
        count(v.slots),
    )
}

fn format_placement(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    let (kind, item) = match (&v.category, &v.judge) {
        (Some(category), _) => ("category", category.as_str()),
        (None, Some(judge)) => ("judge", judge.as_str()),
        (None, None) => ("item", "?"),
    };
    let slot = v.slot.as_deref().unwrap_or("?");

    format!(
        "{} {} Depth {:>4} │ {} {} → {}",
        format_elapsed(),
        "·".bright_black(),
        count(v.depth).bright_black(),
        kind,
        item.bright_black(),
        slot.bright_black()
    )
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_formatting() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_events_are_silent() {
        let v = EventVisitor {
            event: Some("something_else".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&v, Level::INFO).is_empty());
    }

    #[test]
    fn test_search_end_reports_outcome() {
        let v = EventVisitor {
            event: Some("search_end".to_string()),
            outcome: Some("exhausted".to_string()),
            nodes: Some(12_345),
            ..EventVisitor::default()
        };
        let out = format_event(&v, Level::INFO);
        assert!(out.contains("Search complete"));
        assert!(out.contains("ATTEMPTS EXHAUSTED"));
        assert!(out.contains("12,345"));
    }

    #[test]
    fn test_placements_only_at_trace() {
        let v = EventVisitor {
            event: Some("place_judge".to_string()),
            judge: Some("#4".to_string()),
            slot: Some("P0/R1".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&v, Level::DEBUG).is_empty());
        let out = format_event(&v, Level::TRACE);
        assert!(out.contains("judge"));
        assert!(out.contains("P0/R1"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
