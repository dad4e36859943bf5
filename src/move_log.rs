use crate::direction::Direction;
use crate::error::Result;
use crate::grid::Cell;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Something the agent did through its sensor
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Probed the edge leaving `from` in `direction`
    Probe { from: Cell, direction: Direction, open: bool },
    /// Crossed from `from` to `to`
    Move { from: Cell, to: Cell, direction: Direction },
}

/// Logged event with timestamp
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Milliseconds since the log was created
    pub timestamp_ms: u64,
    pub event: Event,
}

/// Chronological record of probes and moves
pub struct MoveLog {
    start_time: Instant,
    events: Vec<LoggedEvent>,
}

impl Default for MoveLog {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveLog {
    pub fn new() -> Self {
        MoveLog {
            start_time: Instant::now(),
            events: Vec::new(),
        }
    }

    pub fn record(&mut self, event: Event) {
        let timestamp_ms = self.start_time.elapsed().as_millis() as u64;
        self.events.push(LoggedEvent { timestamp_ms, event });
    }

    pub fn events(&self) -> &[LoggedEvent] {
        &self.events
    }

    pub fn move_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e.event, Event::Move { .. }))
            .count()
    }

    pub fn probe_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e.event, Event::Probe { .. }))
            .count()
    }

    /// Cells visited in order, starting with the cell of the first move
    pub fn trail(&self) -> Vec<Cell> {
        let mut trail = Vec::new();
        for logged in &self.events {
            if let Event::Move { from, to, .. } = logged.event {
                if trail.is_empty() {
                    trail.push(from);
                }
                trail.push(to);
            }
        }
        trail
    }

    /// Save log to JSON file
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.events)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Print log to console
    pub fn print(&self) {
        println!("\n=== Move Log ({} events) ===", self.events.len());
        for (i, logged) in self.events.iter().enumerate() {
            match &logged.event {
                Event::Probe { from, direction, open } => println!(
                    "[{:6}ms] #{:3} PROBE {:>2} {:<5} {}",
                    logged.timestamp_ms,
                    i + 1,
                    from,
                    direction.to_string(),
                    if *open { "open" } else { "closed" }
                ),
                Event::Move { from, to, direction } => println!(
                    "[{:6}ms] #{:3} MOVE  {:>2} -> {:>2} ({})",
                    logged.timestamp_ms,
                    i + 1,
                    from,
                    to,
                    direction
                ),
            }
        }
        println!("=== End of Log ===\n");
    }

    pub fn summary(&self) -> String {
        let closed = self
            .events
            .iter()
            .filter(|e| matches!(e.event, Event::Probe { open: false, .. }))
            .count();

        let duration = self.events.last().map(|e| e.timestamp_ms).unwrap_or(0);

        format!(
            "Duration: {}ms\n\
             Total Events: {}\n\
             Moves: {}\n\
             Probes: {} ({} closed)",
            duration,
            self.events.len(),
            self.move_count(),
            self.probe_count(),
            closed
        )
    }
}
