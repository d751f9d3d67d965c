//! Tile labels.
//!
//! In character mode a single running index walks every tile in generation
//! order and picks `set[index % set.len()]`, where `set` is the label set of
//! the tile's hive. The index is shared by both hives, so the right hive
//! does not start at its first label.
//!
//! In word mode the tile nearest the grid center is the seed tile `•`. Its
//! eight surrounding grid cells carry impulse words; every other tile carries
//! an expansion word chosen by its Manhattan distance from the seed.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Label of the seed tile in word mode.
pub const SEED_LABEL: &str = "•";

/// Words adjacent to the seed: what the writer wants to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Impulse {
    /// Going out to find something.
    Explore,
    /// Asking.
    Question,
    /// Making up one's mind.
    Decide,
    /// Doing.
    Act,
    /// Being.
    Exist,
}

impl Impulse {
    /// All impulses in category order.
    pub const ALL: [Self; 5] = [Self::Explore, Self::Question, Self::Decide, Self::Act, Self::Exist];

    /// Impulse for a first-ring slot `(dr + 1) * 3 + (dc + 1)`.
    pub const fn from_slot(slot: i64) -> Self {
        match slot.rem_euclid(5) {
            0 => Self::Explore,
            1 => Self::Question,
            2 => Self::Decide,
            3 => Self::Act,
            _ => Self::Exist,
        }
    }

    /// Vocabulary of this impulse.
    pub const fn words(self) -> &'static [&'static str] {
        match self {
            Self::Explore => &["discover", "search", "wander", "journey", "seek", "roam", "venture"],
            Self::Question => &["what", "why", "how", "when", "where", "who", "wonder"],
            Self::Decide => &["choose", "select", "commit", "resolve", "determine", "conclude", "pick"],
            Self::Act => &["move", "create", "build", "change", "transform", "shape", "forge"],
            Self::Exist => &["be", "become", "remain", "persist", "endure", "manifest", "emerge"],
        }
    }
}

/// Words further out: material to extend a phrase with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expansion {
    /// Conjunctions.
    Connectors,
    /// Adverbs.
    Modifiers,
    /// Nouns.
    Objects,
    /// Emotions.
    Feelings,
}

impl Expansion {
    /// All expansions in category order.
    pub const ALL: [Self; 4] = [Self::Connectors, Self::Modifiers, Self::Objects, Self::Feelings];

    /// Expansion for a cell at Manhattan `distance` from the seed.
    pub const fn from_distance(distance: i64) -> Self {
        match distance.rem_euclid(4) {
            0 => Self::Connectors,
            1 => Self::Modifiers,
            2 => Self::Objects,
            _ => Self::Feelings,
        }
    }

    /// Vocabulary of this expansion.
    pub const fn words(self) -> &'static [&'static str] {
        match self {
            Self::Connectors => &["and", "but", "or", "yet", "so", "for", "nor"],
            Self::Modifiers => &["deeply", "gently", "swiftly", "quietly", "boldly", "softly", "carefully"],
            Self::Objects => &["path", "trail", "bridge", "door", "window", "garden", "river"],
            Self::Feelings => &["joy", "wonder", "peace", "hope", "clarity", "warmth", "strength"],
        }
    }
}

/// Where a tile's label comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelSource {
    /// A fixed label from a character set; never changes.
    Fixed,
    /// The word-mode seed tile.
    Seed,
    /// An impulse vocabulary.
    Impulse(Impulse),
    /// An expansion vocabulary.
    Expansion(Expansion),
}

impl LabelSource {
    /// Word-mode source for the cell at (`row`, `col`) given the seed cell.
    pub fn for_cell(row: usize, col: usize, seed_row: usize, seed_col: usize) -> Self {
        let dr = offset(row, seed_row);
        let dc = offset(col, seed_col);
        if dr == 0 && dc == 0 {
            return Self::Seed;
        }
        if dr.abs() <= 1 && dc.abs() <= 1 {
            return Self::Impulse(Impulse::from_slot((dr + 1) * 3 + (dc + 1)));
        }
        Self::Expansion(Expansion::from_distance(dr.abs() + dc.abs()))
    }

    /// Draw a fresh label, or `None` for [`LabelSource::Fixed`].
    pub fn draw(self, rng: &mut impl Rng) -> Option<String> {
        let words = match self {
            Self::Fixed => return None,
            Self::Seed => return Some(SEED_LABEL.to_owned()),
            Self::Impulse(impulse) => impulse.words(),
            Self::Expansion(expansion) => expansion.words(),
        };
        words.choose(rng).map(|w| (*w).to_owned())
    }
}

/// Character-mode label for the tile with running `index`.
pub fn cycled_label(set: &[String], index: usize) -> String {
    set.get(index.checked_rem(set.len()).unwrap_or(0))
        .cloned()
        .unwrap_or_default()
}

/// Signed distance from `origin` to `value`, saturating at `i64` bounds.
fn offset(value: usize, origin: usize) -> i64 {
    let v = i64::try_from(value).unwrap_or(i64::MAX);
    let o = i64::try_from(origin).unwrap_or(i64::MAX);
    v.saturating_sub(o)
}
