//! The hex input engine.
//!
//! A [`Hive`] owns the tile set, the gesture state and the long-press timer.
//! Pointer events enter through [`Hive::handle_pointer`]; the frame loop
//! calls [`Hive::poll`] so a held press seeds its tile even when no further
//! pointer events arrive.
//!
//! In word mode the hive starts dormant: only the seed tile at the center
//! takes input until a long press on it writes the seed mark. Each tapped
//! word is committed on its own and a dragged path commits its words
//! separated by spaces.
//!
//! Commits go to an [`OutputSink`] and feedback to a [`HapticSink`], both
//! passed per call so the hive never owns its collaborators.

use horde_core::{HapticSink, OutputSink, Schedule, TimerToken};
use horde_types::{
    HapticKind, HiveFrame, HiveSide, PointerEvent, PointerPhase, TileSprite, Timestamp, Vec2,
    Viewport,
};
use rand::rngs::SmallRng;
use tracing::{debug, info, warn};

use crate::config::{HiveConfig, LabelMode};
use crate::error::HiveError;
use crate::gesture::{GestureState, Session};
use crate::labels::{self, LabelSource, SEED_LABEL};
use crate::tessellation::GridLayout;
use crate::tile::{Tile, TileId};

/// Dual hive of hexagonal keys.
#[derive(Debug, Clone)]
pub struct Hive {
    config: HiveConfig,
    viewport: Viewport,
    tiles: Vec<Tile>,
    state: GestureState,
    timers: Schedule<TileId>,
    rng: SmallRng,
    awake: bool,
}

impl Hive {
    /// Build a hive tessellating `viewport`.
    ///
    /// # Errors
    ///
    /// Returns [`HiveError::InvalidConfig`] if the configuration fails
    /// validation.
    pub fn new(config: HiveConfig, viewport: Viewport, rng: SmallRng) -> Result<Self, HiveError> {
        config.validate()?;
        let mut hive = Self {
            config,
            viewport,
            tiles: Vec::new(),
            state: GestureState::Idle,
            timers: Schedule::new(),
            rng,
            awake: false,
        };
        hive.regenerate();
        info!(
            tiles = hive.tiles.len(),
            mode = ?hive.config.labels,
            "hive created"
        );
        Ok(hive)
    }

    // -------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------

    /// Feed one pointer event through the gesture state machine.
    ///
    /// Long presses due at or before the event's time are resolved first.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        output: &mut impl OutputSink,
        haptics: &mut impl HapticSink,
    ) {
        self.poll(event.at, output, haptics);
        match event.phase {
            PointerPhase::Down => self.pointer_down(event.position, event.at, haptics),
            PointerPhase::Move => self.pointer_move(event.position, haptics),
            PointerPhase::Up => self.pointer_up(output, haptics),
        }
    }

    /// Resolve long-press timers due at `now`.
    ///
    /// Seeding the center tile of a dormant word hive writes the seed mark
    /// to `output`.
    pub fn poll(
        &mut self,
        now: Timestamp,
        output: &mut impl OutputSink,
        haptics: &mut impl HapticSink,
    ) {
        for (token, tile) in self.timers.drain_due(now) {
            self.long_press(token, tile, output, haptics);
        }
    }

    /// First tile, in generation order, whose hit circle contains `point`.
    pub fn hit_test(&self, point: Vec2) -> Option<TileId> {
        self.tiles.iter().find(|t| t.contains(point)).map(|t| t.id)
    }

    fn pointer_down(&mut self, point: Vec2, now: Timestamp, haptics: &mut impl HapticSink) {
        let Some(anchor) = self.hit_test(point) else {
            debug!(x = point.x, y = point.y, "pointer down outside tiles");
            return;
        };
        if !self.awake && self.tile(anchor).is_some_and(|t| t.source != LabelSource::Seed) {
            debug!(%anchor, "hive not seeded, ignoring tile");
            return;
        }
        if let Some(stale) = self.state.session() {
            warn!(
                anchor = %stale.anchor,
                state = self.state.name(),
                "pointer down during a gesture, discarding it"
            );
            self.reset_gesture();
        }
        if let Some(tile) = self.tile_mut(anchor) {
            tile.active = true;
        }
        haptics.notify(HapticKind::Tap);
        let token = self
            .timers
            .schedule(now.plus_millis(self.config.long_press_ms), anchor);
        self.state = GestureState::Pressed(Session::new(anchor, now, token));
        debug!(%anchor, "gesture pressed");
    }

    fn pointer_move(&mut self, point: Vec2, haptics: &mut impl HapticSink) {
        let Some(anchor) = self.state.session().map(|s| s.anchor) else {
            return;
        };
        if !self.awake {
            return;
        }
        let Some(hit) = self.hit_test(point) else {
            return;
        };
        if hit == anchor {
            return;
        }
        if !self.state.is_dragging() {
            self.state = match core::mem::take(&mut self.state) {
                GestureState::Pressed(s) | GestureState::Seeded(s) | GestureState::Dragging(s) => {
                    GestureState::Dragging(s)
                }
                GestureState::Idle => GestureState::Idle,
            };
            haptics.notify(HapticKind::Press);
            debug!(%anchor, "gesture dragging");
        }
        let visited = self.state.session_mut().is_some_and(|s| s.visit(hit));
        if visited {
            if let Some(tile) = self.tile_mut(hit) {
                tile.active = true;
            }
            haptics.notify(HapticKind::Tap);
        }
    }

    fn pointer_up(&mut self, output: &mut impl OutputSink, haptics: &mut impl HapticSink) {
        let state = core::mem::take(&mut self.state);
        match &state {
            GestureState::Idle => return,
            GestureState::Dragging(session) => {
                let parts: Vec<&str> = session
                    .path
                    .iter()
                    .filter_map(|id| self.tile(*id))
                    .filter(|t| t.source != LabelSource::Seed)
                    .map(|t| t.label.as_str())
                    .collect();
                let word = match self.config.labels {
                    LabelMode::Characters => parts.concat(),
                    LabelMode::Words => parts.join(" "),
                };
                if !word.is_empty() {
                    output.append_character(&word);
                    output.append_space();
                }
                haptics.notify(HapticKind::Select);
                debug!(%word, tiles = session.path.len(), "selection committed");
                for id in &session.path {
                    self.relabel(*id);
                }
            }
            GestureState::Pressed(session) | GestureState::Seeded(session) => {
                let label = self
                    .tile(session.anchor)
                    .filter(|t| !t.is_seeded() && t.source != LabelSource::Seed)
                    .map(|t| t.label.clone());
                if let Some(label) = label {
                    output.append_character(&label);
                    if self.config.labels == LabelMode::Words {
                        output.append_space();
                    }
                    haptics.notify(HapticKind::Tap);
                    debug!(%label, "tap committed");
                    self.relabel(session.anchor);
                }
            }
        }
        if let Some(session) = state.session() {
            let _ = self.timers.cancel(session.long_press);
        }
        self.clear_active();
    }

    fn long_press(
        &mut self,
        token: TimerToken,
        anchor: TileId,
        output: &mut impl OutputSink,
        haptics: &mut impl HapticSink,
    ) {
        let Some(session) = self.state.session() else {
            return;
        };
        if session.long_press != token || session.anchor != anchor {
            return;
        }
        let seeded_at = session.started_at.plus_millis(self.config.long_press_ms);
        let Some(tile) = self.tile_mut(anchor) else {
            return;
        };
        if tile.is_seeded() {
            return;
        }
        tile.seeded_at = Some(seeded_at);
        let is_seed = tile.source == LabelSource::Seed;
        let wakes = !self.awake && is_seed;
        haptics.notify(HapticKind::LongPress);
        if wakes {
            self.awake = true;
            output.append_character(SEED_LABEL);
            output.append_space();
            info!(%anchor, "hive seeded");
        }
        self.state = match core::mem::take(&mut self.state) {
            GestureState::Pressed(s) => GestureState::Seeded(s),
            other => other,
        };
        debug!(%anchor, state = self.state.name(), "tile seeded");
    }

    // -------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------

    /// Adopt a new canvas size. Tiles are regenerated and any gesture in
    /// progress is dropped.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.regenerate();
        info!(
            width = viewport.width,
            height = viewport.height,
            tiles = self.tiles.len(),
            "hive regenerated"
        );
    }

    fn regenerate(&mut self) {
        self.state = GestureState::Idle;
        self.timers.clear();
        self.awake = self.config.labels == LabelMode::Characters;
        let layout = GridLayout::fit(self.viewport, self.config.hex_radius);
        let midline = self.viewport.midline();
        let (seed_row, seed_col) = (layout.rows / 2, layout.cols / 2);

        let mut tiles = Vec::with_capacity(layout.len());
        for (index, (row, col, center)) in layout.cells().enumerate() {
            let side = if center.x < midline { HiveSide::Left } else { HiveSide::Right };
            let (label, source) = match self.config.labels {
                LabelMode::Characters => {
                    let set = match side {
                        HiveSide::Left => &self.config.left_labels,
                        HiveSide::Right => &self.config.right_labels,
                    };
                    (labels::cycled_label(set, index), LabelSource::Fixed)
                }
                LabelMode::Words => {
                    let source = LabelSource::for_cell(row, col, seed_row, seed_col);
                    (source.draw(&mut self.rng).unwrap_or_default(), source)
                }
            };
            tiles.push(Tile {
                id: TileId(index),
                center,
                radius: self.config.hex_radius,
                row,
                col,
                side,
                label,
                source,
                active: false,
                seeded_at: None,
            });
        }
        self.tiles = tiles;
    }

    fn relabel(&mut self, id: TileId) {
        let Some(source) = self.tile(id).map(|t| t.source) else {
            return;
        };
        let Some(label) = source.draw(&mut self.rng) else {
            return;
        };
        if let Some(tile) = self.tile_mut(id) {
            tile.label = label;
        }
    }

    fn reset_gesture(&mut self) {
        let stale = core::mem::take(&mut self.state);
        if let Some(session) = stale.session() {
            let _ = self.timers.cancel(session.long_press);
        }
        self.clear_active();
    }

    fn clear_active(&mut self) {
        for tile in &mut self.tiles {
            tile.active = false;
        }
    }

    // -------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------

    /// Describe the current frame.
    pub fn render(&self) -> HiveFrame {
        let tiles = self
            .tiles
            .iter()
            .map(|t| TileSprite {
                center: t.center,
                radius: t.radius,
                label: t.label.to_uppercase(),
                style: t.style(),
            })
            .collect();
        let path = self
            .path()
            .filter(|p| p.len() > 1)
            .map(|p| p.iter().filter_map(|id| self.tile(*id)).map(|t| t.center).collect())
            .unwrap_or_default();
        HiveFrame { tiles, path }
    }

    // -------------------------------------------------------------------
    // Introspection
    // -------------------------------------------------------------------

    /// All tiles in generation order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Look up a tile.
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.0)
    }

    fn tile_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(id.0)
    }

    /// Current gesture state.
    pub const fn state(&self) -> &GestureState {
        &self.state
    }

    /// Path of the gesture in progress.
    pub fn path(&self) -> Option<&[TileId]> {
        self.state.session().map(|s| s.path.as_slice())
    }

    /// Whether the hive takes input on every tile. A word hive is dormant
    /// until its seed tile is long-pressed; a character hive never is.
    pub const fn is_awake(&self) -> bool {
        self.awake
    }

    /// Whether a long press is still pending.
    pub fn long_press_pending(&self) -> bool {
        !self.timers.is_empty()
    }

    /// The hive's canvas.
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The active configuration.
    pub const fn config(&self) -> &HiveConfig {
        &self.config
    }
}
