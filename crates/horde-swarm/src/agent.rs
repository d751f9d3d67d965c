//! Agent state.
//!
//! An agent is a mote with a position, a velocity and an energy level that
//! only affects how it is drawn. Each agent drags a short trail of recent
//! positions behind it and may carry one transient press effect.

use std::collections::VecDeque;

use horde_types::{AgentId, Timestamp, Vec2, Viewport};
use rand::Rng;

/// One sampled point of an agent's trail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSample {
    /// Agent position when the sample was taken.
    pub position: Vec2,
    /// Frame timestamp of the sample.
    pub at: Timestamp,
}

/// Fixed-capacity FIFO of recent positions, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    samples: VecDeque<TrailSample>,
    capacity: usize,
}

impl Trail {
    /// Create an empty trail holding at most `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest ones beyond capacity.
    pub fn push(&mut self, sample: TrailSample) {
        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            let _ = self.samples.pop_front();
        }
    }

    /// Number of samples held.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no sample has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum number of samples held.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &TrailSample> {
        self.samples.iter()
    }

    /// The newest sample, if any.
    pub fn latest(&self) -> Option<&TrailSample> {
        self.samples.back()
    }
}

/// The expanding ring left behind when an agent "presses".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressEffect {
    /// Where the agent was when it pressed.
    pub origin: Vec2,
    /// Agent energy at press time; scales the ring's opacity.
    pub intensity: f64,
    /// When the press happened.
    pub started_at: Timestamp,
}

impl PressEffect {
    /// Fraction of `duration_ms` elapsed at `now`, or `None` once the effect
    /// has expired (more than `duration_ms` elapsed).
    pub fn progress(&self, now: Timestamp, duration_ms: u64) -> Option<f64> {
        let elapsed = now.millis_since(self.started_at);
        if elapsed > duration_ms || duration_ms == 0 {
            None
        } else {
            Some(elapsed as f64 / duration_ms as f64)
        }
    }
}

/// A single member of the horde.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    /// Stable identity, unaffected by removal of other agents.
    pub id: AgentId,
    /// Current position, always inside the viewport.
    pub position: Vec2,
    /// Current velocity in units per second.
    pub velocity: Vec2,
    /// Base mote radius, fixed at creation, within `[1, 4)`.
    pub size: f64,
    /// Energy within `[0, 1]`; drives opacity and size only.
    pub energy: f64,
    /// Recent positions.
    pub trail: Trail,
    /// Active press ring, if any.
    pub press: Option<PressEffect>,
    /// Time of the last press; `None` until the agent first presses.
    pub last_press: Option<Timestamp>,
}

impl Agent {
    /// Create an agent with randomized state inside `viewport`.
    ///
    /// Position is uniform over the viewport, each velocity component is
    /// uniform in `[-1, 1)`, size is uniform in `[1, 4)` and energy in `[0, 1)`.
    pub fn spawn(rng: &mut impl Rng, viewport: Viewport, trail_capacity: usize) -> Self {
        let id = AgentId::from_random_bytes(rng.random());
        let position = Vec2::new(
            rng.random::<f64>() * viewport.width,
            rng.random::<f64>() * viewport.height,
        );
        let velocity = Vec2::new(
            (rng.random::<f64>() - 0.5) * 2.0,
            (rng.random::<f64>() - 0.5) * 2.0,
        );
        Self {
            id,
            position,
            velocity,
            size: rng.random::<f64>().mul_add(3.0, 1.0),
            energy: rng.random::<f64>(),
            trail: Trail::with_capacity(trail_capacity),
            press: None,
            last_press: None,
        }
    }

    /// Record a press at `now`, replacing any effect still running.
    pub fn press(&mut self, now: Timestamp) {
        self.press = Some(PressEffect {
            origin: self.position,
            intensity: self.energy,
            started_at: now,
        });
        self.last_press = Some(now);
    }

    /// Current speed.
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn sample(ms: u64) -> TrailSample {
        TrailSample {
            position: Vec2::new(ms as f64, 0.0),
            at: Timestamp::from_millis(ms),
        }
    }

    #[test]
    fn trail_evicts_oldest_first() {
        let mut trail = Trail::with_capacity(3);
        for ms in 0..5 {
            trail.push(sample(ms));
        }
        assert_eq!(trail.len(), 3);
        let times: Vec<u64> = trail.iter().map(|s| s.at.as_millis()).collect();
        assert_eq!(times, vec![2, 3, 4]);
        assert_eq!(trail.latest().unwrap().at.as_millis(), 4);
    }

    #[test]
    fn spawned_agents_respect_ranges() {
        let mut rng = SmallRng::seed_from_u64(42);
        let viewport = Viewport::new(320.0, 200.0);
        for _ in 0..200 {
            let agent = Agent::spawn(&mut rng, viewport, 30);
            assert!(viewport.contains(agent.position));
            assert!((-1.0..1.0).contains(&agent.velocity.x));
            assert!((-1.0..1.0).contains(&agent.velocity.y));
            assert!((1.0..4.0).contains(&agent.size));
            assert!((0.0..=1.0).contains(&agent.energy));
            assert!(agent.trail.is_empty());
            assert!(agent.press.is_none());
            assert!(agent.last_press.is_none());
        }
    }

    #[test]
    fn spawn_is_reproducible() {
        let viewport = Viewport::new(100.0, 100.0);
        let a = Agent::spawn(&mut SmallRng::seed_from_u64(7), viewport, 30);
        let b = Agent::spawn(&mut SmallRng::seed_from_u64(7), viewport, 30);
        assert_eq!(a, b);
    }

    #[test]
    fn press_replaces_previous_effect() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut agent = Agent::spawn(&mut rng, Viewport::new(100.0, 100.0), 30);
        agent.press(Timestamp::from_millis(100));
        agent.position = Vec2::new(1.0, 2.0);
        agent.press(Timestamp::from_millis(300));
        let effect = agent.press.unwrap();
        assert_eq!(effect.started_at, Timestamp::from_millis(300));
        assert_eq!(effect.origin, Vec2::new(1.0, 2.0));
        assert_eq!(agent.last_press, Some(Timestamp::from_millis(300)));
    }

    #[test]
    fn press_effect_progress_and_expiry() {
        let effect = PressEffect {
            origin: Vec2::ZERO,
            intensity: 1.0,
            started_at: Timestamp::from_millis(1000),
        };
        assert_eq!(effect.progress(Timestamp::from_millis(1000), 1000), Some(0.0));
        assert_eq!(effect.progress(Timestamp::from_millis(1500), 1000), Some(0.5));
        assert_eq!(effect.progress(Timestamp::from_millis(2000), 1000), Some(1.0));
        assert_eq!(effect.progress(Timestamp::from_millis(2001), 1000), None);
    }
}
