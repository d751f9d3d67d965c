//! Draw descriptions produced by each render pass.
//!
//! Neither subsystem touches a drawing surface. A render pass returns one of
//! these frames and the front end turns it into canvas calls. Colors are left
//! to the front end; only geometry and opacity are decided here.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::TileStyle;
use crate::geometry::Vec2;

/// An agent's trail, drawn as an open polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TrailStroke {
    /// Points from oldest to newest.
    pub points: Vec<Vec2>,
    /// Stroke opacity in `[0, 1]`.
    pub alpha: f64,
    /// Stroke width in canvas units.
    pub width: f64,
}

/// An agent body: a filled disc plus a radial glow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MoteSprite {
    /// Center of the disc.
    pub center: Vec2,
    /// Disc radius.
    pub radius: f64,
    /// Disc opacity in `[0, 1]`.
    pub alpha: f64,
    /// Outer radius of the glow gradient.
    pub glow_radius: f64,
    /// Opacity at the center of the glow gradient.
    pub glow_alpha: f64,
}

/// An expanding, fading ring marking a simulated press.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PressRing {
    /// Where the press happened.
    pub center: Vec2,
    /// Current ring radius.
    pub radius: f64,
    /// Current ring opacity in `[0, 1]`.
    pub alpha: f64,
}

/// Everything needed to draw one swarm frame, in paint order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SwarmFrame {
    /// Trails, drawn first.
    pub trails: Vec<TrailStroke>,
    /// Agent bodies.
    pub motes: Vec<MoteSprite>,
    /// Active press effects, drawn last.
    pub rings: Vec<PressRing>,
}

/// One hexagonal tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TileSprite {
    /// Hexagon center.
    pub center: Vec2,
    /// Circumradius of the hexagon.
    pub radius: f64,
    /// Upper-cased label to print at the center.
    pub label: String,
    /// Visual state.
    pub style: TileStyle,
}

/// Everything needed to draw one hive frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HiveFrame {
    /// Tiles in generation order.
    pub tiles: Vec<TileSprite>,
    /// Centers of the tiles on the current drag path; empty unless the path
    /// holds more than one tile.
    pub path: Vec<Vec2>,
}

/// Both render passes of one display frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AppFrame {
    /// Frame number from the frame clock.
    pub frame: u64,
    /// The swarm canvas.
    pub swarm: SwarmFrame,
    /// The hive canvas.
    pub hive: HiveFrame,
}
