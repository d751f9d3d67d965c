//! Control commands and keyboard shortcuts.
//!
//! | Key         | Command                                  |
//! |-------------|------------------------------------------|
//! | `Escape`    | [`Command::ClearOutput`]                 |
//! | `Backspace` | [`Command::Backspace`]                   |
//! | `Space`     | [`Command::Space`]                       |
//! | `Enter`     | [`Command::NewLine`]                     |
//! | `Ctrl+H`    | [`Command::ToggleHaptics`]               |
//! | `Ctrl+C`    | [`Command::ToggleChorus`]                |
//! | `Ctrl++`    | [`Command::AddAgent`]                    |
//! | `Ctrl+-`    | [`Command::RemoveAgent`]                 |
//! | `Ctrl+D`    | [`Command::Disperse`]                    |
//!
//! Any other key is ignored.

use core::str::FromStr;

use crate::error::AppError;

/// Something the user asked the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Drop all output text.
    ClearOutput,
    /// Delete the last character.
    Backspace,
    /// Commit the pending word and end it with a space.
    Space,
    /// Commit the pending word and start a new prompt line.
    NewLine,
    /// Flip haptic feedback on or off.
    ToggleHaptics,
    /// Flip the swarm's chorus mode.
    ToggleChorus,
    /// Add one agent to the swarm.
    AddAgent,
    /// Remove one agent from the swarm, down to its floor.
    RemoveAgent,
    /// Kick every agent with a random impulse.
    Disperse,
    /// Append text verbatim to the output.
    AddText(String),
}

/// A physical key, without modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// The escape key.
    Escape,
    /// The backspace key.
    Backspace,
    /// The space bar.
    Space,
    /// The enter key.
    Enter,
    /// Any key producing a character.
    Char(char),
}

/// A key together with the state of the command modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key.
    pub key: Key,
    /// Whether Ctrl (or Cmd) was held.
    pub ctrl: bool,
}

impl KeyPress {
    /// A key pressed without modifiers.
    pub const fn plain(key: Key) -> Self {
        Self { key, ctrl: false }
    }

    /// A character key pressed with Ctrl.
    pub const fn ctrl(c: char) -> Self {
        Self { key: Key::Char(c), ctrl: true }
    }

    /// The command bound to this key press, if any.
    pub fn command(self) -> Option<Command> {
        match self.key {
            Key::Escape => Some(Command::ClearOutput),
            Key::Backspace => Some(Command::Backspace),
            Key::Space => Some(Command::Space),
            Key::Enter => Some(Command::NewLine),
            Key::Char(c) if self.ctrl => match c.to_ascii_lowercase() {
                'h' => Some(Command::ToggleHaptics),
                'c' => Some(Command::ToggleChorus),
                '+' => Some(Command::AddAgent),
                '-' => Some(Command::RemoveAgent),
                'd' => Some(Command::Disperse),
                _ => None,
            },
            Key::Char(_) => None,
        }
    }
}

impl FromStr for KeyPress {
    type Err = AppError;

    /// Parse `escape`, `backspace`, `space`, `enter`, a single character, or
    /// any of these prefixed with `ctrl+`. Names are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let lower = input.to_ascii_lowercase();
        let (ctrl, rest) = match lower.strip_prefix("ctrl+") {
            Some(rest) if !rest.is_empty() => (true, rest),
            _ => (false, lower.as_str()),
        };
        let key = match rest {
            "escape" | "esc" => Key::Escape,
            "backspace" => Key::Backspace,
            "space" => Key::Space,
            "enter" | "return" => Key::Enter,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => {
                        return Err(AppError::UnknownKey { input: input.to_owned() });
                    }
                }
            }
        };
        Ok(Self { key, ctrl })
    }
}
