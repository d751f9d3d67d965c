//! Tunable parameters for the swarm.
//!
//! These values correspond to the `swarm` key of `horde-config.yaml`. Every
//! field has a default, so a partial section (or none at all) is valid.
//! [`SwarmConfig::validate`] rejects combinations the simulation cannot honour.

use serde::Deserialize;

use crate::error::SwarmError;

/// Configuration for the flocking simulation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SwarmConfig {
    /// Agents spawned at start (default: 50).
    #[serde(default = "default_initial_agents")]
    pub initial_agents: usize,

    /// Removal floor: `remove_agent` is a no-op at this count (default: 10).
    #[serde(default = "default_min_agents")]
    pub min_agents: usize,

    /// Neighbors are agents strictly closer than this (default: 50).
    #[serde(default = "default_neighbor_radius")]
    pub neighbor_radius: f64,

    /// Speed limit in units per second (default: 50).
    #[serde(default = "default_max_speed")]
    pub max_speed: f64,

    /// Weight of the separation rule (default: 2).
    #[serde(default = "default_separation_weight")]
    pub separation_weight: f64,

    /// Weight of the alignment rule (default: 1).
    #[serde(default = "default_unit_weight")]
    pub alignment_weight: f64,

    /// Weight of the cohesion rule (default: 1).
    #[serde(default = "default_unit_weight")]
    pub cohesion_weight: f64,

    /// Fraction of the offset to the neighbor centroid used as cohesion
    /// (default: 0.1).
    #[serde(default = "default_cohesion_factor")]
    pub cohesion_factor: f64,

    /// Half-width of the per-axis velocity jitter, scaled by dt (default: 0.25).
    #[serde(default = "default_jitter")]
    pub jitter: f64,

    /// Half-width of the per-tick energy random walk (default: 0.005).
    #[serde(default = "default_energy_walk")]
    pub energy_walk: f64,

    /// Trail samples kept per agent (default: 30).
    #[serde(default = "default_trail_capacity")]
    pub trail_capacity: usize,

    /// Shortest cooldown between an agent's own presses (default: 2000 ms).
    #[serde(default = "default_press_cooldown_min_ms")]
    pub press_cooldown_min_ms: u64,

    /// Longest cooldown between an agent's own presses (default: 5000 ms).
    #[serde(default = "default_press_cooldown_max_ms")]
    pub press_cooldown_max_ms: u64,

    /// Per-tick chance that an eligible agent presses (default: 0.005).
    #[serde(default = "default_press_probability")]
    pub press_probability: f64,

    /// Per-tick chance that one random agent presses regardless of cooldown
    /// (default: 0.01).
    #[serde(default = "default_random_press_probability")]
    pub random_press_probability: f64,

    /// Chance that a press requests ambient haptic feedback (default: 0.3).
    #[serde(default = "default_ambient_haptic_probability")]
    pub ambient_haptic_probability: f64,

    /// Lifetime of a press ring (default: 1000 ms).
    #[serde(default = "default_press_effect_ms")]
    pub press_effect_ms: u64,

    /// Final radius of a press ring (default: 20).
    #[serde(default = "default_press_ring_radius")]
    pub press_ring_radius: f64,

    /// Chorus mode bursts once per this many milliseconds (default: 1000).
    #[serde(default = "default_chorus_interval_ms")]
    pub chorus_interval_ms: u64,

    /// Share of the swarm joining each chorus burst, as a percentage
    /// (0--100, default: 30). The burst size is rounded down.
    #[serde(default = "default_chorus_share_pct")]
    pub chorus_share_pct: u32,

    /// Chorus presses are spread over this many milliseconds (default: 500).
    #[serde(default = "default_chorus_stagger_ms")]
    pub chorus_stagger_ms: u64,

    /// Half-width of the velocity impulse applied by `disperse` (default: 5).
    #[serde(default = "default_disperse_impulse")]
    pub disperse_impulse: f64,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            initial_agents: default_initial_agents(),
            min_agents: default_min_agents(),
            neighbor_radius: default_neighbor_radius(),
            max_speed: default_max_speed(),
            separation_weight: default_separation_weight(),
            alignment_weight: default_unit_weight(),
            cohesion_weight: default_unit_weight(),
            cohesion_factor: default_cohesion_factor(),
            jitter: default_jitter(),
            energy_walk: default_energy_walk(),
            trail_capacity: default_trail_capacity(),
            press_cooldown_min_ms: default_press_cooldown_min_ms(),
            press_cooldown_max_ms: default_press_cooldown_max_ms(),
            press_probability: default_press_probability(),
            random_press_probability: default_random_press_probability(),
            ambient_haptic_probability: default_ambient_haptic_probability(),
            press_effect_ms: default_press_effect_ms(),
            press_ring_radius: default_press_ring_radius(),
            chorus_interval_ms: default_chorus_interval_ms(),
            chorus_share_pct: default_chorus_share_pct(),
            chorus_stagger_ms: default_chorus_stagger_ms(),
            disperse_impulse: default_disperse_impulse(),
        }
    }
}

impl SwarmConfig {
    /// Check that the configuration describes a runnable swarm.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), SwarmError> {
        if self.initial_agents < self.min_agents {
            return Err(invalid(format!(
                "initial_agents ({}) is below min_agents ({})",
                self.initial_agents, self.min_agents
            )));
        }
        for (name, value) in [
            ("neighbor_radius", self.neighbor_radius),
            ("max_speed", self.max_speed),
            ("press_ring_radius", self.press_ring_radius),
            ("disperse_impulse", self.disperse_impulse),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }
        for (name, value) in [
            ("separation_weight", self.separation_weight),
            ("alignment_weight", self.alignment_weight),
            ("cohesion_weight", self.cohesion_weight),
            ("cohesion_factor", self.cohesion_factor),
            ("jitter", self.jitter),
            ("energy_walk", self.energy_walk),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(format!("{name} must be non-negative, got {value}")));
            }
        }
        for (name, value) in [
            ("press_probability", self.press_probability),
            ("random_press_probability", self.random_press_probability),
            ("ambient_haptic_probability", self.ambient_haptic_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(format!("{name} must be within [0, 1], got {value}")));
            }
        }
        if self.trail_capacity == 0 {
            return Err(invalid(String::from("trail_capacity must be at least 1")));
        }
        if self.press_cooldown_min_ms > self.press_cooldown_max_ms {
            return Err(invalid(format!(
                "press_cooldown_min_ms ({}) exceeds press_cooldown_max_ms ({})",
                self.press_cooldown_min_ms, self.press_cooldown_max_ms
            )));
        }
        if self.press_effect_ms == 0 {
            return Err(invalid(String::from("press_effect_ms must be at least 1")));
        }
        if self.chorus_interval_ms == 0 {
            return Err(invalid(String::from("chorus_interval_ms must be at least 1")));
        }
        if self.chorus_share_pct > 100 {
            return Err(invalid(format!(
                "chorus_share_pct must be at most 100, got {}",
                self.chorus_share_pct
            )));
        }
        Ok(())
    }

    /// Number of agents joining a chorus burst in a swarm of `agent_count`.
    pub fn chorus_size(&self, agent_count: usize) -> usize {
        let share = usize::try_from(self.chorus_share_pct).unwrap_or(100).min(100);
        agent_count.saturating_mul(share) / 100
    }
}

fn invalid(reason: String) -> SwarmError {
    SwarmError::InvalidConfig { reason }
}

const fn default_initial_agents() -> usize {
    50
}

const fn default_min_agents() -> usize {
    10
}

const fn default_neighbor_radius() -> f64 {
    50.0
}

const fn default_max_speed() -> f64 {
    50.0
}

const fn default_separation_weight() -> f64 {
    2.0
}

const fn default_unit_weight() -> f64 {
    1.0
}

const fn default_cohesion_factor() -> f64 {
    0.1
}

const fn default_jitter() -> f64 {
    0.25
}

const fn default_energy_walk() -> f64 {
    0.005
}

const fn default_trail_capacity() -> usize {
    30
}

const fn default_press_cooldown_min_ms() -> u64 {
    2000
}

const fn default_press_cooldown_max_ms() -> u64 {
    5000
}

const fn default_press_probability() -> f64 {
    0.005
}

const fn default_random_press_probability() -> f64 {
    0.01
}

const fn default_ambient_haptic_probability() -> f64 {
    0.3
}

const fn default_press_effect_ms() -> u64 {
    1000
}

const fn default_press_ring_radius() -> f64 {
    20.0
}

const fn default_chorus_interval_ms() -> u64 {
    1000
}

const fn default_chorus_share_pct() -> u32 {
    30
}

const fn default_chorus_stagger_ms() -> u64 {
    500
}

const fn default_disperse_impulse() -> f64 {
    5.0
}
