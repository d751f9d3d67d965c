//! Hex tiles.

use horde_types::{HiveSide, TileStyle, Timestamp, Vec2};

use crate::labels::LabelSource;

/// Position of a tile in the hive's generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileId(pub usize);

impl core::fmt::Display for TileId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "tile#{}", self.0)
    }
}

/// One hexagonal key.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Index in generation order.
    pub id: TileId,
    /// Hexagon center.
    pub center: Vec2,
    /// Circumradius, shared by every tile.
    pub radius: f64,
    /// Row in the offset grid.
    pub row: usize,
    /// Column in the offset grid.
    pub col: usize,
    /// Which hive the tile belongs to.
    pub side: HiveSide,
    /// Text emitted when the tile is committed.
    pub label: String,
    /// Where the label comes from, for relabelling in word mode.
    pub source: LabelSource,
    /// Whether the tile is part of the gesture in progress.
    pub active: bool,
    /// When a long press seeded the tile, if ever.
    pub seeded_at: Option<Timestamp>,
}

impl Tile {
    /// Whether a long press has seeded the tile.
    pub const fn is_seeded(&self) -> bool {
        self.seeded_at.is_some()
    }

    /// Whether `point` is within the tile's hit circle.
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance(point) <= self.radius
    }

    /// Visual state; an active tile looks active even when seeded.
    pub const fn style(&self) -> TileStyle {
        if self.active {
            TileStyle::Active
        } else if self.seeded_at.is_some() {
            TileStyle::Seeded
        } else {
            TileStyle::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile() -> Tile {
        Tile {
            id: TileId(0),
            center: Vec2::new(50.0, 50.0),
            radius: 25.0,
            row: 0,
            col: 0,
            side: HiveSide::Left,
            label: String::from("q"),
            source: LabelSource::Fixed,
            active: false,
            seeded_at: None,
        }
    }

    #[test]
    fn hit_circle_is_closed() {
        let t = tile();
        assert!(t.contains(Vec2::new(75.0, 50.0)));
        assert!(t.contains(Vec2::new(50.0, 50.0)));
        assert!(!t.contains(Vec2::new(75.1, 50.0)));
    }

    #[test]
    fn active_wins_over_seeded() {
        let mut t = tile();
        assert_eq!(t.style(), TileStyle::Idle);
        t.seeded_at = Some(Timestamp::from_millis(500));
        assert_eq!(t.style(), TileStyle::Seeded);
        t.active = true;
        assert_eq!(t.style(), TileStyle::Active);
    }

    #[test]
    fn id_displays_index() {
        assert_eq!(TileId(7).to_string(), "tile#7");
    }
}
