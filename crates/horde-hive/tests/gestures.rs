//! End-to-end gesture sequences against a real tessellation.
//!
//! The 600x300 canvas with radius 25 yields 16 columns by 5 rows. Tiles 0-7
//! of the first row sit left of the midline and tile 8 is the first right
//! tile.

#![allow(clippy::unwrap_used, missing_docs)]

use horde_core::{OutputBuffer, OutputSink};
use horde_hive::{GestureState, Hive, HiveConfig, LabelMode, LabelSource, SEED_LABEL, TileId};
use horde_types::{HapticKind, PointerEvent, TileStyle, Timestamp, Vec2, Viewport};
use rand::SeedableRng;
use rand::rngs::SmallRng;

const VIEWPORT: Viewport = Viewport::new(600.0, 300.0);

/// Center tile of the 16x5 word hive, at row 2, column 8.
const SEED: usize = 40;

struct Rig {
    hive: Hive,
    output: OutputBuffer,
    haptics: Vec<HapticKind>,
}

impl Rig {
    fn new() -> Self {
        Self::with_config(HiveConfig::default())
    }

    fn with_config(config: HiveConfig) -> Self {
        Self {
            hive: Hive::new(config, VIEWPORT, SmallRng::seed_from_u64(42)).unwrap(),
            output: OutputBuffer::new(),
            haptics: Vec::new(),
        }
    }

    fn center(&self, id: usize) -> Vec2 {
        self.hive.tile(TileId(id)).unwrap().center
    }

    fn label(&self, id: usize) -> String {
        self.hive.tile(TileId(id)).unwrap().label.clone()
    }

    fn down(&mut self, id: usize, ms: u64) {
        let event = PointerEvent::down(self.center(id), Timestamp::from_millis(ms));
        self.hive.handle_pointer(event, &mut self.output, &mut self.haptics);
    }

    fn move_to(&mut self, id: usize, ms: u64) {
        let event = PointerEvent::moved(self.center(id), Timestamp::from_millis(ms));
        self.hive.handle_pointer(event, &mut self.output, &mut self.haptics);
    }

    fn up(&mut self, ms: u64) {
        let event = PointerEvent::up(Vec2::ZERO, Timestamp::from_millis(ms));
        self.hive.handle_pointer(event, &mut self.output, &mut self.haptics);
    }

    /// Word hive with its center tile held awake. Leaves `"• "` in the
    /// output and the clock at 600 ms.
    fn words() -> Self {
        let config = HiveConfig { labels: LabelMode::Words, ..HiveConfig::default() };
        let mut rig = Self::with_config(config);
        rig.down(SEED, 0);
        rig.hive.poll(Timestamp::from_millis(500), &mut rig.output, &mut rig.haptics);
        rig.up(600);
        rig
    }

    fn assert_settled(&self) {
        assert!(self.hive.state().is_idle());
        assert!(self.hive.path().is_none());
        assert!(self.hive.tiles().iter().all(|t| !t.active));
        assert!(!self.hive.long_press_pending());
    }
}

#[test]
fn classic_canvas_layout() {
    let rig = Rig::new();
    assert_eq!(rig.hive.tiles().len(), 80);
    assert_eq!(rig.label(0), "q");
    assert_eq!(rig.label(7), "s");
    // The running index is shared: the first right tile takes right[8].
    assert_eq!(rig.label(8), "l");
    assert!(rig.hive.is_awake());
}

#[test]
fn tap_types_the_label() {
    let mut rig = Rig::new();
    rig.down(1, 0);
    assert!(matches!(rig.hive.state(), GestureState::Pressed(_)));
    rig.up(80);
    assert_eq!(rig.output.text(), "w");
    assert_eq!(rig.haptics, vec![HapticKind::Tap, HapticKind::Tap]);
    rig.assert_settled();
}

#[test]
fn drag_commits_one_word() {
    let mut rig = Rig::new();
    rig.down(1, 0);
    rig.move_to(2, 40);
    rig.move_to(2, 50);
    rig.move_to(3, 90);
    rig.move_to(2, 120);
    rig.up(150);
    assert_eq!(rig.output.text(), "wer ");
    assert_eq!(
        rig.haptics,
        vec![
            HapticKind::Tap,
            HapticKind::Press,
            HapticKind::Tap,
            HapticKind::Tap,
            HapticKind::Select,
        ]
    );
    rig.assert_settled();

    rig.up(200);
    assert_eq!(rig.output.text(), "wer ");
}

#[test]
fn hold_seeds_and_commits_nothing() {
    let mut rig = Rig::new();
    rig.down(4, 0);
    rig.up(600);
    assert_eq!(rig.output.text(), "");
    assert_eq!(rig.haptics, vec![HapticKind::Tap, HapticKind::LongPress]);
    let tile = rig.hive.tile(TileId(4)).unwrap();
    assert_eq!(tile.seeded_at, Some(Timestamp::from_millis(500)));
    assert_eq!(tile.style(), TileStyle::Seeded);
    rig.assert_settled();

    rig.haptics.clear();
    rig.down(4, 1000);
    rig.up(1050);
    assert_eq!(rig.output.text(), "");
    assert_eq!(rig.haptics, vec![HapticKind::Tap]);
}

#[test]
fn frame_poll_seeds_without_pointer_events() {
    let mut rig = Rig::new();
    rig.down(2, 100);
    rig.hive.poll(Timestamp::from_millis(599), &mut rig.output, &mut rig.haptics);
    assert!(matches!(rig.hive.state(), GestureState::Pressed(_)));
    rig.hive.poll(Timestamp::from_millis(600), &mut rig.output, &mut rig.haptics);
    assert!(matches!(rig.hive.state(), GestureState::Seeded(_)));
    assert_eq!(rig.haptics.last(), Some(&HapticKind::LongPress));
}

#[test]
fn long_press_during_drag_seeds_anchor_but_keeps_dragging() {
    let mut rig = Rig::new();
    rig.down(1, 0);
    rig.move_to(2, 100);
    rig.hive.poll(Timestamp::from_millis(500), &mut rig.output, &mut rig.haptics);
    assert!(rig.hive.state().is_dragging());
    assert!(rig.hive.tile(TileId(1)).unwrap().is_seeded());
    rig.up(700);
    assert_eq!(rig.output.text(), "we ");
}

#[test]
fn quick_release_cancels_long_press() {
    let mut rig = Rig::new();
    rig.down(3, 0);
    rig.up(100);
    rig.hive.poll(Timestamp::from_millis(2000), &mut rig.output, &mut rig.haptics);
    assert!(!rig.hive.tile(TileId(3)).unwrap().is_seeded());
    assert!(!rig.haptics.contains(&HapticKind::LongPress));
}

#[test]
fn stray_input_is_ignored() {
    let mut rig = Rig::new();
    let outside = Vec2::new(300.0, 299.0);
    assert!(rig.hive.hit_test(outside).is_none());
    let at = Timestamp::from_millis(10);
    rig.hive
        .handle_pointer(PointerEvent::down(outside, at), &mut rig.output, &mut rig.haptics);
    rig.move_to(5, 20);
    rig.up(30);
    assert!(rig.haptics.is_empty());
    assert_eq!(rig.output.text(), "");
    rig.assert_settled();
}

#[test]
fn move_outside_tiles_keeps_the_session() {
    let mut rig = Rig::new();
    rig.down(1, 0);
    let outside = Vec2::new(300.0, 299.0);
    rig.hive.handle_pointer(
        PointerEvent::moved(outside, Timestamp::from_millis(20)),
        &mut rig.output,
        &mut rig.haptics,
    );
    assert!(matches!(rig.hive.state(), GestureState::Pressed(_)));
    rig.up(40);
    assert_eq!(rig.output.text(), "w");
}

#[test]
fn second_down_discards_stale_gesture() {
    let mut rig = Rig::new();
    rig.down(1, 0);
    rig.move_to(2, 50);
    rig.down(6, 100);
    assert_eq!(rig.hive.path(), Some(&[TileId(6)][..]));
    assert!(!rig.hive.tile(TileId(1)).unwrap().active);
    assert!(!rig.hive.tile(TileId(2)).unwrap().active);
    assert_eq!(rig.output.text(), "");

    // The first gesture's long press no longer fires.
    rig.hive.poll(Timestamp::from_millis(550), &mut rig.output, &mut rig.haptics);
    assert!(!rig.hive.tile(TileId(1)).unwrap().is_seeded());
    rig.up(150);
    assert_eq!(rig.output.text(), "a");
}

#[test]
fn render_shows_path_and_upper_case_labels() {
    let mut rig = Rig::new();
    rig.down(0, 0);
    assert!(rig.hive.render().path.is_empty());
    rig.move_to(1, 20);
    let frame = rig.hive.render();
    assert_eq!(frame.tiles.len(), 80);
    assert_eq!(frame.path, vec![rig.center(0), rig.center(1)]);
    let first = frame.tiles.first().unwrap();
    assert_eq!(first.label, "Q");
    assert_eq!(first.style, TileStyle::Active);
    rig.up(40);
    assert!(rig.hive.render().path.is_empty());
}

#[test]
fn resize_regenerates_and_drops_the_gesture() {
    let mut rig = Rig::new();
    rig.down(1, 0);
    rig.hive.resize(Viewport::new(300.0, 200.0));
    assert_eq!(rig.hive.tiles().len(), 8 * 3);
    rig.assert_settled();
    rig.hive.poll(Timestamp::from_millis(1000), &mut rig.output, &mut rig.haptics);
    assert!(rig.hive.tiles().iter().all(|t| !t.is_seeded()));
    rig.up(1100);
    assert_eq!(rig.output.text(), "");
}

#[test]
fn word_mode_labels_and_relabels() {
    let mut rig = Rig::words();
    let seed = rig.hive.tile(TileId(SEED)).unwrap();
    assert_eq!(seed.source, LabelSource::Seed);
    assert_eq!((seed.row, seed.col), (2, 8));
    assert_eq!(seed.label, SEED_LABEL);

    let impulse = rig
        .hive
        .tiles()
        .iter()
        .find(|t| matches!(t.source, LabelSource::Impulse(_)))
        .unwrap();
    let (id, source, word) = (impulse.id.0, impulse.source, impulse.label.clone());
    rig.down(id, 1000);
    rig.up(1050);
    assert_eq!(rig.output.text(), format!("{SEED_LABEL} {word} "));
    let vocabulary = match source {
        LabelSource::Impulse(category) => category.words(),
        _ => &[],
    };
    assert!(vocabulary.contains(&rig.label(id).as_str()));
}

#[test]
fn word_hive_sleeps_until_the_seed_is_held() {
    let config = HiveConfig { labels: LabelMode::Words, ..HiveConfig::default() };
    let mut rig = Rig::with_config(config);
    assert!(!rig.hive.is_awake());

    rig.down(SEED - 1, 0);
    rig.move_to(SEED + 1, 20);
    rig.up(40);
    assert!(rig.haptics.is_empty());
    assert_eq!(rig.output.text(), "");
    rig.assert_settled();

    // A short press on the seed writes nothing and leaves the hive asleep.
    rig.down(SEED, 100);
    rig.up(200);
    assert!(!rig.hive.is_awake());
    assert_eq!(rig.output.text(), "");

    rig.down(SEED, 300);
    rig.hive.poll(Timestamp::from_millis(800), &mut rig.output, &mut rig.haptics);
    assert!(rig.hive.is_awake());
    assert_eq!(rig.output.text(), format!("{SEED_LABEL} "));
    assert_eq!(rig.haptics.last(), Some(&HapticKind::LongPress));
    rig.up(900);
    rig.assert_settled();

    // The seed never commits once awake.
    rig.down(SEED, 1000);
    rig.up(1050);
    assert_eq!(rig.output.text(), format!("{SEED_LABEL} "));
}

#[test]
fn word_taps_commit_separate_words() {
    let mut rig = Rig::words();
    let (first, second) = (rig.label(SEED - 1), rig.label(SEED + 1));
    rig.down(SEED - 1, 1000);
    rig.up(1050);
    rig.down(SEED + 1, 1100);
    rig.up(1150);
    assert_eq!(rig.output.text(), format!("{SEED_LABEL} {first} {second} "));
}

#[test]
fn word_drag_joins_words_and_skips_the_seed() {
    let mut rig = Rig::words();
    let (first, second) = (rig.label(SEED - 1), rig.label(SEED + 1));
    rig.down(SEED - 1, 1000);
    rig.move_to(SEED, 1020);
    rig.move_to(SEED + 1, 1040);
    assert_eq!(rig.hive.path(), Some(&[TileId(SEED - 1), TileId(SEED), TileId(SEED + 1)][..]));
    rig.up(1060);
    assert_eq!(rig.output.text(), format!("{SEED_LABEL} {first} {second} "));
    assert_eq!(rig.label(SEED), SEED_LABEL);
}

#[test]
fn resize_puts_the_word_hive_back_to_sleep() {
    let mut rig = Rig::words();
    assert!(rig.hive.is_awake());
    rig.hive.resize(Viewport::new(300.0, 200.0));
    assert!(!rig.hive.is_awake());
}
