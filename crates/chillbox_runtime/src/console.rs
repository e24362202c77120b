//! Console collaborators.
//!
//! On the appliance these roles belong to text-to-speech and the e-paper
//! grid; at a terminal they print.

use std::fmt::Write as _;

use chillbox_engine::{ApplyResult, DisplaySink, FeedbackSink};
use chillbox_storage::{HistoryEntry, Snapshot};

/// Prints each result's message, green when applied, yellow when rejected.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleFeedback;

impl FeedbackSink for ConsoleFeedback {
    fn announce(&mut self, result: &ApplyResult) {
        let colour = if result.is_applied() { "32" } else { "33" };
        println!("\x1b[{colour}m{}\x1b[0m", result.message());
    }
}

/// Prints the in-stock grid after every transcript.
#[derive(Clone, Copy, Debug)]
pub struct ConsoleDisplay {
    low_stock_threshold: u32,
}

impl ConsoleDisplay {
    /// Creates a display flagging items at or below `low_stock_threshold`.
    #[must_use]
    pub const fn new(low_stock_threshold: u32) -> Self {
        Self {
            low_stock_threshold,
        }
    }
}

impl DisplaySink for ConsoleDisplay {
    fn render(&mut self, snapshot: &Snapshot) {
        print!("{}", render_grid(snapshot, self.low_stock_threshold));
    }
}

/// Formats in-stock items, one per line, with low stock marked.
#[must_use]
pub fn render_grid(snapshot: &Snapshot, low_stock_threshold: u32) -> String {
    let mut out = String::from("Freezer\n");
    let mut any = false;
    for record in snapshot.in_stock() {
        any = true;
        let name = record.item.display_name();
        let flag = if record.quantity <= low_stock_threshold {
            "  low"
        } else {
            ""
        };
        let _ = writeln!(out, "  {name:<20} {:>4}{flag}", record.quantity);
    }
    if !any {
        out.push_str("  (empty)\n");
    }
    out
}

/// Formats the undoable history, newest last.
#[must_use]
pub fn render_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No history\n".to_string();
    }
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "#{:<4} {} {:<6} {} {} -> {}",
            entry.id,
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.kind.as_str(),
            entry.item.display_name(),
            entry.previous_quantity,
            entry.new_quantity,
        );
    }
    out
}
