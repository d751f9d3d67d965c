//! The flocking simulation.
//!
//! A [`Swarm`] owns its agents, its random stream and the schedule of
//! staggered chorus presses. [`Swarm::update`] advances one frame;
//! [`Swarm::render`] describes it. Every runtime operation is total.

use horde_core::{FrameStep, HapticSink, Schedule};
use horde_types::{AgentId, HapticKind, SwarmFrame, Timestamp, Vec2, Viewport};
use rand::Rng;
use rand::rngs::SmallRng;
use tracing::{debug, info};

use crate::agent::{Agent, TrailSample};
use crate::config::SwarmConfig;
use crate::error::SwarmError;
use crate::flocking::{self, Boid, Neighborhood, Weights};
use crate::render::{self, RingStyle};

/// The horde.
#[derive(Debug, Clone)]
pub struct Swarm {
    config: SwarmConfig,
    viewport: Viewport,
    agents: Vec<Agent>,
    rng: SmallRng,
    chorus: bool,
    chorus_elapsed_ms: u64,
    chorus_bursts: u64,
    last_burst_size: usize,
    scheduled: Schedule<AgentId>,
}

impl Swarm {
    /// Build a swarm of `config.initial_agents` agents scattered over
    /// `viewport`.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidConfig`] if the configuration fails
    /// validation or the viewport has a negative or non-finite extent.
    pub fn new(config: SwarmConfig, viewport: Viewport, mut rng: SmallRng) -> Result<Self, SwarmError> {
        config.validate()?;
        check_viewport(viewport)?;
        let agents = (0..config.initial_agents)
            .map(|_| Agent::spawn(&mut rng, viewport, config.trail_capacity))
            .collect::<Vec<_>>();
        info!(
            agents = agents.len(),
            width = viewport.width,
            height = viewport.height,
            "swarm created"
        );
        Ok(Self {
            config,
            viewport,
            agents,
            rng,
            chorus: false,
            chorus_elapsed_ms: 0,
            chorus_bursts: 0,
            last_burst_size: 0,
            scheduled: Schedule::new(),
        })
    }

    /// Advance the simulation by one frame.
    ///
    /// Order within a tick: flocking and per-agent presses, then the chorus
    /// accumulator, then the global random press, then any scheduled chorus
    /// presses that are due.
    pub fn update(&mut self, step: &FrameStep, haptics: &mut impl HapticSink) {
        let now = step.now;
        let dt = step.delta_seconds();
        let cfg = &self.config;
        let weights = Weights {
            separation: cfg.separation_weight,
            alignment: cfg.alignment_weight,
            cohesion: cfg.cohesion_weight,
            cohesion_factor: cfg.cohesion_factor,
        };
        let hood = Neighborhood::new(
            self.agents
                .iter()
                .map(|a| Boid { position: a.position, velocity: a.velocity })
                .collect(),
        );

        for (index, agent) in self.agents.iter_mut().enumerate() {
            let me = Boid { position: agent.position, velocity: agent.velocity };
            let neighbors = hood.neighbors(index, cfg.neighbor_radius);
            let jitter = Vec2::new(
                symmetric(&mut self.rng, cfg.jitter),
                symmetric(&mut self.rng, cfg.jitter),
            );
            let velocity = agent.velocity + (flocking::steering(&me, &neighbors, &weights) + jitter) * dt;
            agent.velocity = velocity.clamp_length(cfg.max_speed);

            let moved = agent.position + agent.velocity * dt;
            agent.position = Vec2::new(
                flocking::wrap(moved.x, self.viewport.width),
                flocking::wrap(moved.y, self.viewport.height),
            );
            agent.trail.push(TrailSample { position: agent.position, at: now });

            let walk = symmetric(&mut self.rng, cfg.energy_walk);
            agent.energy = (agent.energy + walk).clamp(0.0, 1.0);

            if is_eligible(agent, now, cfg, &mut self.rng) && self.rng.random::<f64>() < cfg.press_probability {
                fire(agent, now, cfg.ambient_haptic_probability, &mut self.rng, haptics);
            }
        }

        if self.chorus {
            self.chorus_elapsed_ms = self.chorus_elapsed_ms.saturating_add(step.delta_ms);
            if self.chorus_elapsed_ms >= self.config.chorus_interval_ms {
                self.chorus_elapsed_ms = 0;
                self.schedule_burst(now);
            }
        }

        if !self.agents.is_empty() && self.rng.random::<f64>() < self.config.random_press_probability {
            let index = self.rng.random_range(0..self.agents.len());
            if let Some(agent) = self.agents.get_mut(index) {
                fire(agent, now, self.config.ambient_haptic_probability, &mut self.rng, haptics);
            }
        }

        for (_, id) in self.scheduled.drain_due(now) {
            // Agents removed since the burst was scheduled are skipped.
            if let Some(agent) = self.agents.iter_mut().find(|a| a.id == id) {
                fire(agent, now, self.config.ambient_haptic_probability, &mut self.rng, haptics);
            }
        }
    }

    /// Describe the current frame. Press effects that have expired by `now`
    /// are cleared.
    pub fn render(&mut self, now: Timestamp) -> SwarmFrame {
        let style = RingStyle {
            duration_ms: self.config.press_effect_ms,
            max_radius: self.config.press_ring_radius,
        };
        render::render_agents(&mut self.agents, now, style)
    }

    /// Add exactly one agent with randomized state.
    pub fn add_agent(&mut self) -> AgentId {
        let agent = Agent::spawn(&mut self.rng, self.viewport, self.config.trail_capacity);
        let id = agent.id;
        self.agents.push(agent);
        debug!(agent = %id, count = self.agents.len(), "agent added");
        id
    }

    /// Remove the most recently added agent, unless the swarm is already at
    /// its floor. Returns the removed agent's id.
    pub fn remove_agent(&mut self) -> Option<AgentId> {
        if self.agents.len() <= self.config.min_agents {
            debug!(count = self.agents.len(), "agent floor reached, nothing removed");
            return None;
        }
        let removed = self.agents.pop().map(|a| a.id);
        debug!(count = self.agents.len(), "agent removed");
        removed
    }

    /// Kick every agent with a random velocity impulse.
    pub fn disperse(&mut self) {
        let impulse = self.config.disperse_impulse;
        for agent in &mut self.agents {
            agent.velocity += Vec2::new(
                symmetric(&mut self.rng, impulse),
                symmetric(&mut self.rng, impulse),
            );
        }
        debug!(agents = self.agents.len(), "swarm dispersed");
    }

    /// Flip chorus mode and reset its accumulator. Returns the new state.
    pub fn toggle_chorus(&mut self) -> bool {
        self.chorus = !self.chorus;
        self.chorus_elapsed_ms = 0;
        info!(enabled = self.chorus, "chorus mode toggled");
        self.chorus
    }

    /// Adopt a new canvas size. Agents now outside it wrap immediately.
    pub fn resize(&mut self, viewport: Viewport) {
        if check_viewport(viewport).is_err() {
            debug!(?viewport, "ignoring invalid swarm viewport");
            return;
        }
        self.viewport = viewport;
        for agent in &mut self.agents {
            agent.position = Vec2::new(
                flocking::wrap(agent.position.x, viewport.width),
                flocking::wrap(agent.position.y, viewport.height),
            );
        }
        debug!(width = viewport.width, height = viewport.height, "swarm resized");
    }

    /// Current agents, in insertion order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Number of agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the swarm has no agents (only possible with a zero floor).
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Whether chorus mode is on.
    pub const fn chorus_enabled(&self) -> bool {
        self.chorus
    }

    /// Chorus presses scheduled but not yet fired.
    pub fn pending_chorus(&self) -> usize {
        self.scheduled.len()
    }

    /// Chorus bursts scheduled since construction.
    pub const fn chorus_bursts(&self) -> u64 {
        self.chorus_bursts
    }

    /// Number of agents picked by the most recent chorus burst.
    pub const fn last_burst_size(&self) -> usize {
        self.last_burst_size
    }

    /// The swarm's canvas.
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The active configuration.
    pub const fn config(&self) -> &SwarmConfig {
        &self.config
    }

    fn schedule_burst(&mut self, now: Timestamp) {
        let size = self.config.chorus_size(self.agents.len());
        let picked = rand::seq::index::sample(&mut self.rng, self.agents.len(), size);
        for index in picked.iter() {
            let Some(agent) = self.agents.get(index) else {
                continue;
            };
            let delay = if self.config.chorus_stagger_ms > 0 {
                self.rng.random_range(0..self.config.chorus_stagger_ms)
            } else {
                0
            };
            let _ = self.scheduled.schedule(now.plus_millis(delay), agent.id);
        }
        self.chorus_bursts = self.chorus_bursts.saturating_add(1);
        self.last_burst_size = size;
        debug!(size, burst = self.chorus_bursts, "chorus burst scheduled");
    }
}

/// Uniform draw from `[-half, half)`.
fn symmetric(rng: &mut impl Rng, half: f64) -> f64 {
    (rng.random::<f64>() - 0.5) * 2.0 * half
}

/// Whether an agent's own cooldown has passed. The cooldown is redrawn on
/// every check; an agent that never pressed is always eligible.
fn is_eligible(agent: &Agent, now: Timestamp, config: &SwarmConfig, rng: &mut impl Rng) -> bool {
    let Some(last) = agent.last_press else {
        return true;
    };
    let (min, max) = (config.press_cooldown_min_ms, config.press_cooldown_max_ms);
    let cooldown = if max > min { rng.random_range(min..max) } else { min };
    now.millis_since(last) > cooldown
}

fn fire(
    agent: &mut Agent,
    now: Timestamp,
    ambient_probability: f64,
    rng: &mut impl Rng,
    haptics: &mut impl HapticSink,
) {
    agent.press(now);
    if rng.random::<f64>() < ambient_probability {
        haptics.notify(HapticKind::AmbientActivity);
    }
}

fn check_viewport(viewport: Viewport) -> Result<(), SwarmError> {
    let valid = |v: f64| v.is_finite() && v >= 0.0;
    if valid(viewport.width) && valid(viewport.height) {
        Ok(())
    } else {
        Err(SwarmError::InvalidConfig {
            reason: format!(
                "viewport must have non-negative finite extent, got {}x{}",
                viewport.width, viewport.height
            ),
        })
    }
}
