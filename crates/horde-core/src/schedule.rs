//! Deferred actions drained by the frame clock.
//!
//! A [`Schedule`] replaces host timer callbacks with an explicit list of
//! `(fire_at, token, payload)` entries. The owner drains due entries from its
//! own update path, which makes firing order deterministic and cancellation
//! a plain removal.
//!
//! Entries fire when `fire_at <= now`. Due entries come out ordered by
//! `fire_at`, then by scheduling order.

use horde_types::Timestamp;

/// Handle to a scheduled entry, used to cancel it.
///
/// Tokens are unique within one schedule and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(u64);

/// One pending entry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry<P> {
    fire_at: Timestamp,
    token: TimerToken,
    payload: P,
}

/// A set of one-shot deferred actions carrying payload `P`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule<P> {
    entries: Vec<Entry<P>>,
    next_token: u64,
}

impl<P> Default for Schedule<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Schedule<P> {
    /// Create an empty schedule.
    pub const fn new() -> Self {
        Self { entries: Vec::new(), next_token: 0 }
    }

    /// Schedule `payload` to fire at `fire_at`. Returns the cancellation token.
    pub fn schedule(&mut self, fire_at: Timestamp, payload: P) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token = self.next_token.saturating_add(1);
        self.entries.push(Entry { fire_at, token, payload });
        token
    }

    /// Cancel a pending entry. Returns `false` if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.token != token);
        self.entries.len() != before
    }

    /// Whether `token` is still pending.
    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.entries.iter().any(|entry| entry.token == token)
    }

    /// Remove and return every entry due at `now`.
    pub fn drain_due(&mut self, now: Timestamp) -> Vec<(TimerToken, P)> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.entries.drain(..).partition(|entry| entry.fire_at <= now);
        self.entries = pending;
        due.sort_by_key(|entry| (entry.fire_at, entry.token));
        due.into_iter().map(|entry| (entry.token, entry.payload)).collect()
    }

    /// Earliest pending fire time.
    pub fn next_due(&self) -> Option<Timestamp> {
        self.entries.iter().map(|entry| entry.fire_at).min()
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every pending entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Timestamp {
        Timestamp::from_millis(v)
    }

    #[test]
    fn entries_fire_when_due() {
        let mut schedule = Schedule::new();
        let _ = schedule.schedule(ms(500), "long-press");

        assert!(schedule.drain_due(ms(499)).is_empty());
        assert_eq!(schedule.len(), 1);

        let due = schedule.drain_due(ms(500));
        assert_eq!(due.len(), 1);
        assert_eq!(due.first().map(|(_, p)| *p), Some("long-press"));
        assert!(schedule.is_empty());
    }

    #[test]
    fn due_entries_are_ordered_by_time_then_insertion() {
        let mut schedule = Schedule::new();
        let _ = schedule.schedule(ms(300), 'c');
        let _ = schedule.schedule(ms(100), 'a');
        let _ = schedule.schedule(ms(300), 'd');
        let _ = schedule.schedule(ms(200), 'b');
        let _ = schedule.schedule(ms(900), 'z');

        let order: Vec<char> = schedule.drain_due(ms(400)).into_iter().map(|(_, p)| p).collect();
        assert_eq!(order, vec!['a', 'b', 'c', 'd']);
        assert_eq!(schedule.next_due(), Some(ms(900)));
    }

    #[test]
    fn cancelled_entries_never_fire() {
        let mut schedule = Schedule::new();
        let keep = schedule.schedule(ms(10), 1);
        let drop = schedule.schedule(ms(10), 2);

        assert!(schedule.cancel(drop));
        assert!(!schedule.cancel(drop));
        assert!(schedule.is_pending(keep));
        assert!(!schedule.is_pending(drop));

        let fired: Vec<i32> = schedule.drain_due(ms(10)).into_iter().map(|(_, p)| p).collect();
        assert_eq!(fired, vec![1]);
        assert!(!schedule.cancel(keep));
    }

    #[test]
    fn tokens_are_unique() {
        let mut schedule = Schedule::new();
        let a = schedule.schedule(ms(1), ());
        let b = schedule.schedule(ms(1), ());
        assert_ne!(a, b);
        schedule.clear();
        let c = schedule.schedule(ms(1), ());
        assert_ne!(a, c);
        assert_ne!(b, c);
    }
}
