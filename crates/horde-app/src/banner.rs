//! Startup banner typed into the output after launch.

use horde_core::Schedule;
use horde_types::Timestamp;

/// Instruction lines, typed one at a time.
pub const INSTRUCTIONS: [&str; 10] = [
    "HORDE KEYBOARD ACTIVE",
    "",
    "LEFT HIVE: primary letters",
    "RIGHT HIVE: extended chars",
    "",
    "TAP: single character",
    "LONG PRESS: seed tile",
    "DRAG: select word",
    "",
    "WATCH THE SWARM",
];

/// The input prompt.
pub const PROMPT: &str = "\n> ";

/// Delay from launch to the first line.
pub const FIRST_LINE_DELAY_MS: u64 = 1000;
/// Delay between consecutive lines.
pub const LINE_INTERVAL_MS: u64 = 200;
/// Extra delay before the prompt, counted from where the next line would go.
pub const PROMPT_DELAY_MS: u64 = 500;

/// Schedule the banner relative to `start`. Each payload is appended raw.
pub fn schedule(timers: &mut Schedule<String>, start: Timestamp) {
    let first = start.plus_millis(FIRST_LINE_DELAY_MS);
    let mut offset = 0;
    for line in INSTRUCTIONS {
        let _ = timers.schedule(first.plus_millis(offset), format!("{line}\n"));
        offset += LINE_INTERVAL_MS;
    }
    let _ = timers.schedule(first.plus_millis(offset + PROMPT_DELAY_MS), PROMPT.to_owned());
}

/// When the prompt appears for a banner scheduled at `start`.
pub const fn prompt_at(start: Timestamp) -> Timestamp {
    start.plus_millis(FIRST_LINE_DELAY_MS + LINE_INTERVAL_MS * INSTRUCTIONS.len() as u64 + PROMPT_DELAY_MS)
}
