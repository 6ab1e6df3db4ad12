//! Output formatting for solver results

use crate::check::{DayReport, Verdict};
use chrono::TimeDelta;

const PASS: &str = "✅";
const FAIL: &str = "❌";
const UNRECORDED: &str = "⬜️";

/// Output formatter for the launcher
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Underlined answer block for one part
    pub fn solution(&self, day: u8, part: u8, answer: &str) -> String {
        let title = format!("Solution to Day {}, {} Part", day, part_name(part));
        let rule = "-".repeat(title.chars().count());
        format!("{title}\n{rule}\n{answer}\n{rule}")
    }

    pub fn no_solution(&self, day: u8, part: u8) -> String {
        format!("No Solution to Day {}, {} Part {}", day, part_name(part), FAIL)
    }

    /// Timing line, or None in quiet mode
    pub fn timing(&self, parse: Option<TimeDelta>, solve: TimeDelta) -> Option<String> {
        if self.quiet {
            return None;
        }
        Some(match parse {
            Some(parse) => format!(
                "(parse: {}, solve: {})",
                format_duration(parse),
                format_duration(solve)
            ),
            None => format!("(solve: {})", format_duration(solve)),
        })
    }

    /// One line per part, or a single line when the day could not run
    pub fn day_report(&self, report: &DayReport) -> Vec<String> {
        let parts = match &report.outcome {
            Ok(parts) => parts,
            Err(reason) => return vec![format!("Day {:02}       {} {}", report.day, FAIL, reason)],
        };

        parts
            .iter()
            .map(|p| {
                let prefix = format!("Day {:02} Part {}", report.day, p.part);
                let line = match &p.verdict {
                    Verdict::Pass => format!("{prefix} {PASS}"),
                    Verdict::Fail { expected, actual } => {
                        format!("{prefix} {FAIL} got {actual}, expected {expected}")
                    }
                    Verdict::Unrecorded { actual } => format!("{prefix} {UNRECORDED} {actual}"),
                    Verdict::NoSolution { recorded: true } => {
                        format!("{prefix} {FAIL} no solution")
                    }
                    Verdict::NoSolution { recorded: false } => {
                        format!("{prefix} {UNRECORDED} no solution")
                    }
                    Verdict::Error(e) => format!("{prefix} {FAIL} {e}"),
                };
                match p.duration {
                    Some(d) if !self.quiet => format!("{line} ({})", format_duration(d)),
                    _ => line,
                }
            })
            .collect()
    }

    pub fn check_summary(&self, reports: &[DayReport]) -> String {
        let mut passed = 0;
        let mut unrecorded = 0;
        for parts in reports.iter().filter_map(|r| r.outcome.as_ref().ok()) {
            for p in parts {
                match p.verdict {
                    Verdict::Pass => passed += 1,
                    Verdict::Unrecorded { .. } | Verdict::NoSolution { recorded: false } => {
                        unrecorded += 1
                    }
                    _ => {}
                }
            }
        }
        let failed: usize = reports.iter().map(DayReport::failures).sum();
        format!(
            "--- {} day(s): {} passed, {} failed, {} unrecorded ---",
            reports.len(),
            passed,
            failed,
            unrecorded
        )
    }
}

fn part_name(part: u8) -> String {
    match part {
        1 => "First".to_string(),
        2 => "Second".to_string(),
        n => format!("#{}", n),
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
