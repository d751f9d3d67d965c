//! Session scripts.
//!
//! A script is a plain text file with one step per line. Blank lines and
//! lines starting with `#` are skipped.
//!
//! ```text
//! wait 1200            # let time pass, rendering frames on the way
//! down 120.5 40        # pointer down on the hive canvas
//! move 160 40
//! up                   # release at the last pointer position
//! key ctrl+c           # any key accepted by `KeyPress::from_str`
//! text hello there     # append raw text to the output
//! resize hive 300 200
//! ```
//!
//! Pointer and key steps happen at the current script time. Only `wait`
//! moves time forward.

use core::fmt::Display;
use core::str::FromStr;

use horde_app::{AppContext, Command, KeyPress};
use horde_core::VibrationDriver;
use horde_types::{PointerEvent, Timestamp, Vec2, Viewport};
use tracing::debug;

/// Errors that can occur while loading a script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// Failed to read the script.
    #[error("failed to read script: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// A line could not be understood.
    #[error("line {line}: {message}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// What was wrong with it.
        message: String,
    },
}

/// Which canvas a resize applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Canvas {
    /// The hex input grid.
    Hive,
    /// The swarm display.
    Horde,
}

/// One scripted action.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Let this many milliseconds pass.
    Wait(u64),
    /// Pointer down at a position.
    Down(Vec2),
    /// Pointer moved to a position.
    Move(Vec2),
    /// Pointer released where it last was.
    Up,
    /// A key press.
    Key(KeyPress),
    /// Raw text for the output.
    Text(String),
    /// A canvas changed size.
    Resize(Canvas, Viewport),
}

/// Parse a whole script.
///
/// # Errors
///
/// Returns [`ScriptError::Parse`] for the first line that is not a valid
/// step.
pub fn parse(source: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = raw.split_once('#').map_or(raw, |(code, _)| code).trim();
        if line.is_empty() {
            continue;
        }
        let step = parse_step(line).map_err(|message| ScriptError::Parse {
            line: index.saturating_add(1),
            message,
        })?;
        steps.push(step);
    }
    Ok(steps)
}

fn parse_step(line: &str) -> Result<Step, String> {
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    match verb {
        "wait" => number::<u64>(rest, "duration").map(Step::Wait),
        "down" => point(rest).map(Step::Down),
        "move" => point(rest).map(Step::Move),
        "up" => Ok(Step::Up),
        "key" => KeyPress::from_str(rest).map(Step::Key).map_err(|e| e.to_string()),
        "text" => Ok(Step::Text(rest.to_owned())),
        "resize" => {
            let (canvas, size) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let canvas = match canvas {
                "hive" => Canvas::Hive,
                "horde" => Canvas::Horde,
                other => return Err(format!("unknown canvas {other:?}")),
            };
            let Vec2 { x, y } = point(size)?;
            Ok(Step::Resize(canvas, Viewport::new(x, y)))
        }
        other => Err(format!("unknown step {other:?}")),
    }
}

fn point(args: &str) -> Result<Vec2, String> {
    let mut parts = args.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), None) => Ok(Vec2::new(number(x, "x")?, number(y, "y")?)),
        _ => Err(format!("expected two numbers, got {args:?}")),
    }
}

fn number<T>(text: &str, what: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    text.parse().map_err(|e| format!("invalid {what} {text:?}: {e}"))
}

/// Replays steps against an [`AppContext`], rendering a frame every
/// `frame_interval_ms` of script time.
#[derive(Debug)]
pub struct Driver<D> {
    app: AppContext<D>,
    frame_interval_ms: u64,
    now: Timestamp,
    next_frame: Timestamp,
    pointer: Vec2,
    frames: u64,
}

impl<D: VibrationDriver> Driver<D> {
    /// Wrap a context whose clock starts at [`Timestamp::ZERO`]. An interval
    /// of zero is treated as one millisecond.
    pub fn new(app: AppContext<D>, frame_interval_ms: u64) -> Self {
        Self {
            app,
            frame_interval_ms: frame_interval_ms.max(1),
            now: Timestamp::ZERO,
            next_frame: Timestamp::ZERO,
            pointer: Vec2::ZERO,
            frames: 0,
        }
    }

    /// Play every step in order.
    pub fn run(&mut self, steps: &[Step]) {
        for step in steps {
            self.step(step);
        }
    }

    /// Play one step.
    pub fn step(&mut self, step: &Step) {
        debug!(?step, at_ms = self.now.as_millis(), "step");
        match step {
            Step::Wait(ms) => self.advance(*ms),
            Step::Down(pos) => {
                self.pointer = *pos;
                self.app.pointer(PointerEvent::down(*pos, self.now));
            }
            Step::Move(pos) => {
                self.pointer = *pos;
                self.app.pointer(PointerEvent::moved(*pos, self.now));
            }
            Step::Up => self.app.pointer(PointerEvent::up(self.pointer, self.now)),
            Step::Key(press) => {
                let _ = self.app.key(*press);
            }
            Step::Text(text) => self.app.execute(Command::AddText(text.clone())),
            Step::Resize(Canvas::Hive, viewport) => self.app.resize_hive(*viewport),
            Step::Resize(Canvas::Horde, viewport) => self.app.resize_horde(*viewport),
        }
    }

    fn advance(&mut self, ms: u64) {
        let target = self.now.plus_millis(ms);
        while self.next_frame <= target {
            let _ = self.app.frame(self.next_frame);
            self.frames = self.frames.saturating_add(1);
            self.next_frame = self.next_frame.plus_millis(self.frame_interval_ms);
        }
        self.now = target;
    }

    /// The driven context.
    pub const fn app(&self) -> &AppContext<D> {
        &self.app
    }

    /// Current script time.
    pub const fn now(&self) -> Timestamp {
        self.now
    }

    /// Frames rendered so far.
    pub const fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use horde_app::{AppConfig, Key};
    use horde_core::RecordingDriver;

    use super::*;

    fn driver() -> Driver<RecordingDriver> {
        let mut config = AppConfig::default();
        config.output.show_instructions = false;
        let app = AppContext::new(&config, RecordingDriver::supported(), Timestamp::ZERO).unwrap();
        Driver::new(app, config.engine.frame_interval_ms)
    }

    #[test]
    fn parses_every_step_kind() {
        let script = "
# warm up
wait 100
down 10 20.5
move 30 40   # drag
up
key ctrl+d
text hello world
resize horde 1024 768
";
        let steps = parse(script).unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Wait(100),
                Step::Down(Vec2::new(10.0, 20.5)),
                Step::Move(Vec2::new(30.0, 40.0)),
                Step::Up,
                Step::Key(KeyPress::ctrl('d')),
                Step::Text(String::from("hello world")),
                Step::Resize(Canvas::Horde, Viewport::new(1024.0, 768.0)),
            ]
        );
    }

    #[test]
    fn errors_carry_the_line_number() {
        let err = parse("wait 10\n\nwait soon\n").unwrap_err();
        assert!(matches!(err, ScriptError::Parse { line: 3, .. }));
        assert!(matches!(parse("jump"), Err(ScriptError::Parse { line: 1, .. })));
        assert!(parse("down 1").is_err());
        assert!(parse("resize moon 1 1").is_err());
        assert!(parse("key hyperspace").is_err());
    }

    #[test]
    fn wait_renders_frames_on_the_interval() {
        let mut driver = driver();
        driver.step(&Step::Wait(100));
        // Frames at 0, 16, ..., 96.
        assert_eq!(driver.frames(), 7);
        assert_eq!(driver.now(), Timestamp::from_millis(100));
        driver.step(&Step::Wait(12));
        assert_eq!(driver.frames(), 8);
    }

    #[test]
    fn tap_then_enter_reaches_the_output() {
        let mut driver = driver();
        let q = driver.app().hive().tiles().first().unwrap().center;
        driver.run(&[
            Step::Text(String::from("> ")),
            Step::Down(q),
            Step::Wait(50),
            Step::Up,
            Step::Key(KeyPress::plain(Key::Enter)),
        ]);
        assert_eq!(driver.app().snapshot().text, "> q\n> ");
    }

    #[test]
    fn release_uses_last_pointer_position() {
        let mut driver = driver();
        let tiles = driver.app().hive().tiles();
        let (w, e) = (tiles[1].center, tiles[2].center);
        driver.run(&[Step::Down(w), Step::Move(e), Step::Wait(30), Step::Up]);
        assert_eq!(driver.app().snapshot().text, "we ");
    }

    #[test]
    fn bundled_demo_replays() {
        let steps = parse(include_str!("../../../demos/hello.script")).unwrap();
        let config = AppConfig::default();
        let app = AppContext::new(&config, RecordingDriver::supported(), Timestamp::ZERO).unwrap();
        let mut driver = Driver::new(app, config.engine.frame_interval_ms);
        driver.run(&steps);
        let snap = driver.app().snapshot();
        assert!(snap.text.starts_with("HORDE KEYBOARD ACTIVE\n"));
        assert!(snap.text.ends_with("WATCH THE SWARM\n\n> sea we\n> done"));
        assert!(snap.chorus_mode);
        assert_eq!(snap.agent_count, 51);
        assert_eq!(driver.app().hive().tiles().len(), 24);
    }
}
