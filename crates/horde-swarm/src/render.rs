//! Conversion of agent state into draw primitives.

use horde_types::{MoteSprite, PressRing, SwarmFrame, Timestamp, TrailStroke};

use crate::agent::Agent;

/// Trail opacity per unit of energy.
const TRAIL_ALPHA_PER_ENERGY: f64 = 0.3;
/// Trail stroke width.
const TRAIL_WIDTH: f64 = 0.5;
/// Glow radius as a multiple of the mote radius.
const GLOW_SCALE: f64 = 3.0;
/// Glow opacity as a fraction of the mote opacity.
const GLOW_ALPHA_SCALE: f64 = 0.3;

/// Ring geometry shared by every press effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingStyle {
    /// Lifetime of a ring in milliseconds.
    pub duration_ms: u64,
    /// Radius reached at the end of the lifetime.
    pub max_radius: f64,
}

/// Trail stroke for an agent, if it has at least two samples.
pub fn trail_stroke(agent: &Agent) -> Option<TrailStroke> {
    if agent.trail.len() < 2 {
        return None;
    }
    Some(TrailStroke {
        points: agent.trail.iter().map(|s| s.position).collect(),
        alpha: agent.energy * TRAIL_ALPHA_PER_ENERGY,
        width: TRAIL_WIDTH,
    })
}

/// Body sprite for an agent.
pub fn mote_sprite(agent: &Agent) -> MoteSprite {
    let radius = agent.size * agent.energy.mul_add(0.4, 0.8);
    let alpha = agent.energy.mul_add(0.7, 0.3);
    MoteSprite {
        center: agent.position,
        radius,
        alpha,
        glow_radius: radius * GLOW_SCALE,
        glow_alpha: alpha * GLOW_ALPHA_SCALE,
    }
}

/// Ring for an agent's press effect. Expired effects are removed from the
/// agent and produce nothing.
pub fn press_ring(agent: &mut Agent, now: Timestamp, style: RingStyle) -> Option<PressRing> {
    let effect = agent.press?;
    let Some(progress) = effect.progress(now, style.duration_ms) else {
        agent.press = None;
        return None;
    };
    Some(PressRing {
        center: effect.origin,
        radius: style.max_radius * progress,
        alpha: (1.0 - progress) * effect.intensity,
    })
}

/// Render every agent: trails first, then bodies, then rings.
pub fn render_agents(agents: &mut [Agent], now: Timestamp, style: RingStyle) -> SwarmFrame {
    let trails = agents.iter().filter_map(trail_stroke).collect();
    let motes = agents.iter().map(mote_sprite).collect();
    let rings = agents
        .iter_mut()
        .filter_map(|agent| press_ring(agent, now, style))
        .collect();
    SwarmFrame { trails, motes, rings }
}
