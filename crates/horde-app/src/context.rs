//! The application context.
//!
//! [`AppContext`] owns one of everything: swarm, hive, output buffer, haptic
//! notifier, frame clock and the schedule of deferred output. Hosts feed it
//! timestamps, pointer events and key presses and draw the frames it
//! returns. There is no global state.
//!
//! # Frame order
//!
//! 1. Tick the frame clock.
//! 2. Update the swarm.
//! 3. Resolve due long presses in the hive.
//! 4. Append due banner text.
//! 5. Render the swarm, then the hive.

use horde_core::{
    FrameClock, HapticNotifier, HapticSink, OutputBuffer, OutputSink, Schedule, VibrationDriver,
};
use horde_hive::Hive;
use horde_swarm::Swarm;
use horde_types::{AppFrame, AppSnapshot, HapticKind, PointerEvent, Timestamp, Viewport};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info};

use crate::banner;
use crate::command::{Command, KeyPress};
use crate::config::AppConfig;
use crate::error::AppError;

/// Everything one keyboard session needs.
#[derive(Debug)]
pub struct AppContext<D> {
    clock: FrameClock,
    swarm: Swarm,
    hive: Hive,
    output: OutputBuffer,
    haptics: HapticNotifier<D>,
    deferred: Schedule<String>,
}

impl<D: VibrationDriver> AppContext<D> {
    /// Build a session from configuration, starting at `start`.
    ///
    /// The swarm and the hive each get their own random stream, both derived
    /// from `config.seed`, so a session replays identically for a given seed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Swarm`] or [`AppError::Hive`] if the respective
    /// configuration section is invalid.
    pub fn new(config: &AppConfig, driver: D, start: Timestamp) -> Result<Self, AppError> {
        let mut master = SmallRng::seed_from_u64(config.seed);
        let swarm = Swarm::new(
            config.swarm.clone(),
            config.viewport.horde,
            SmallRng::from_rng(&mut master),
        )?;
        let hive = Hive::new(
            config.hive.clone(),
            config.viewport.hive,
            SmallRng::from_rng(&mut master),
        )?;
        let haptics = HapticNotifier::from_config(driver, &config.haptics);

        let mut deferred = Schedule::new();
        if config.output.show_instructions {
            banner::schedule(&mut deferred, start);
        }
        info!(
            seed = config.seed,
            agents = swarm.len(),
            tiles = hive.tiles().len(),
            haptics = haptics.is_enabled(),
            "horde keyboard initialised"
        );
        Ok(Self {
            clock: FrameClock::new(),
            swarm,
            hive,
            output: OutputBuffer::new(),
            haptics,
            deferred,
        })
    }

    // -------------------------------------------------------------------
    // Frame loop
    // -------------------------------------------------------------------

    /// Advance one display frame to `now` and describe it.
    pub fn frame(&mut self, now: Timestamp) -> AppFrame {
        let step = self.clock.tick(now);
        self.swarm.update(&step, &mut self.haptics);
        self.hive.poll(now, &mut self.output, &mut self.haptics);
        for (_, text) in self.deferred.drain_due(now) {
            self.output.append_raw(&text);
        }
        AppFrame {
            frame: step.frame,
            swarm: self.swarm.render(now),
            hive: self.hive.render(),
        }
    }

    // -------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------

    /// Route a pointer event on the hive canvas.
    pub fn pointer(&mut self, event: PointerEvent) {
        self.hive
            .handle_pointer(event, &mut self.output, &mut self.haptics);
    }

    /// Handle a key press. Returns whether the key was bound to a command.
    pub fn key(&mut self, press: KeyPress) -> bool {
        match press.command() {
            Some(command) => {
                self.execute(command);
                true
            }
            None => {
                debug!(?press, "unbound key ignored");
                false
            }
        }
    }

    /// Carry out a control command.
    pub fn execute(&mut self, command: Command) {
        debug!(?command, "executing command");
        match command {
            Command::ClearOutput => self.output.clear(),
            Command::Backspace => {
                self.output.backspace();
                self.haptics.notify(HapticKind::Tap);
            }
            Command::Space => {
                self.output.append_space();
                self.haptics.notify(HapticKind::Tap);
            }
            Command::NewLine => {
                self.output.commit_word();
                self.output.append_raw(banner::PROMPT);
                self.haptics.notify(HapticKind::Press);
            }
            Command::ToggleHaptics => {
                let enabled = self.haptics.toggle();
                info!(enabled, "haptics toggled");
            }
            Command::ToggleChorus => {
                let _ = self.swarm.toggle_chorus();
            }
            Command::AddAgent => {
                let _ = self.swarm.add_agent();
                info!(agents = self.swarm.len(), "agent added");
            }
            Command::RemoveAgent => {
                let _ = self.swarm.remove_agent();
                info!(agents = self.swarm.len(), "agent removed");
            }
            Command::Disperse => self.swarm.disperse(),
            Command::AddText(text) => self.output.append_raw(&text),
        }
    }

    /// Adopt a new hive canvas size.
    pub fn resize_hive(&mut self, viewport: Viewport) {
        self.hive.resize(viewport);
    }

    /// Adopt a new horde canvas size.
    pub fn resize_horde(&mut self, viewport: Viewport) {
        self.swarm.resize(viewport);
    }

    // -------------------------------------------------------------------
    // Introspection
    // -------------------------------------------------------------------

    /// Point-in-time summary of the session.
    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            haptics_enabled: self.haptics.is_enabled(),
            chorus_mode: self.swarm.chorus_enabled(),
            agent_count: self.swarm.len(),
            text: self.output.text(),
        }
    }

    /// The swarm.
    pub const fn swarm(&self) -> &Swarm {
        &self.swarm
    }

    /// The hive.
    pub const fn hive(&self) -> &Hive {
        &self.hive
    }

    /// The output buffer.
    pub const fn output(&self) -> &OutputBuffer {
        &self.output
    }

    /// The haptic notifier.
    pub const fn haptics(&self) -> &HapticNotifier<D> {
        &self.haptics
    }

    /// The frame clock.
    pub const fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Deferred output not yet written.
    pub fn pending_output(&self) -> usize {
        self.deferred.len()
    }
}
