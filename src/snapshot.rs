//! The per-cycle progress record handed to renderers.
//!
//! A [`Snapshot`] lives inside the render-owner slot and is only mutated by the
//! caller holding that slot, once per successful refresh. Between refreshes it
//! is stable, so every component in a frame sees the same numbers.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use web_time::Instant;

/// Progress, total, and timing state as of the most recent refresh.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Snapshot {
    start: Instant,
    last_update: Instant,
    next_update: Instant,
    delta_update: Duration,

    progress: i64,
    total: i64,
    last_progress: i64,
    last_total: i64,
    delta_progress: i64,
    delta_total: i64,
}

impl Snapshot {
    /// A zeroed snapshot whose tracking starts at `now`.
    #[must_use]
    pub fn new(now: Instant, refresh_interval: Duration) -> Self {
        Self {
            start: now,
            last_update: now,
            next_update: now + refresh_interval,
            delta_update: Duration::ZERO,
            progress: 0,
            total: 0,
            last_progress: 0,
            last_total: 0,
            delta_progress: 0,
            delta_total: 0,
        }
    }

    /// Shifts the current values into `last_*` and records fresh counter readings taken at `now`.
    pub(crate) fn refresh(
        &mut self,
        progress: i64,
        total: i64,
        now: Instant,
        refresh_interval: Duration,
    ) {
        self.delta_progress = progress.saturating_sub(self.progress);
        self.last_progress = self.progress;
        self.progress = progress;

        self.delta_total = total.saturating_sub(self.total);
        self.last_total = self.total;
        self.total = total;

        self.delta_update = now.saturating_duration_since(self.last_update);
        self.last_update = now;
        self.next_update = now + refresh_interval;
    }

    /// Returns the snapshot to its freshly constructed state.
    pub(crate) fn reset(&mut self, now: Instant, refresh_interval: Duration) {
        *self = Self::new(now, refresh_interval);
    }

    /// When tracking began (construction or the last reset).
    #[must_use]
    pub const fn start(&self) -> Instant {
        self.start
    }

    /// When the snapshot was last refreshed.
    #[must_use]
    pub const fn last_update(&self) -> Instant {
        self.last_update
    }

    /// Earliest instant an unforced refresh may run.
    #[must_use]
    pub const fn next_update(&self) -> Instant {
        self.next_update
    }

    /// Time between the previous refresh and this one.
    #[must_use]
    pub const fn delta_update(&self) -> Duration {
        self.delta_update
    }

    /// Progress as of this refresh.
    #[must_use]
    pub const fn progress(&self) -> i64 {
        self.progress
    }

    /// Total as of this refresh.
    #[must_use]
    pub const fn total(&self) -> i64 {
        self.total
    }

    /// Progress as of the previous refresh.
    #[must_use]
    pub const fn last_progress(&self) -> i64 {
        self.last_progress
    }

    /// Total as of the previous refresh.
    #[must_use]
    pub const fn last_total(&self) -> i64 {
        self.last_total
    }

    /// `progress - last_progress`. Negative if progress was set backwards.
    #[must_use]
    pub const fn delta_progress(&self) -> i64 {
        self.delta_progress
    }

    /// `total - last_total`.
    #[must_use]
    pub const fn delta_total(&self) -> i64 {
        self.delta_total
    }

    /// Time from `start` to `last_update`.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.last_update.saturating_duration_since(self.start)
    }
}

/// Serializable form of a [`Snapshot`].
///
/// Instants are not meaningful outside the process, so timestamps are expressed
/// as offsets from `start`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    /// `last_update - start`.
    pub last_update: Duration,
    /// `next_update - start`.
    pub next_update: Duration,
    /// Time between the two most recent refreshes.
    pub delta_update: Duration,
    /// Current progress.
    pub progress: i64,
    /// Current total.
    pub total: i64,
    /// Previous progress.
    pub last_progress: i64,
    /// Previous total.
    pub last_total: i64,
    /// Progress change since the previous refresh.
    pub delta_progress: i64,
    /// Total change since the previous refresh.
    pub delta_total: i64,
}

impl From<&Snapshot> for SnapshotRecord {
    fn from(s: &Snapshot) -> Self {
        Self {
            last_update: s.last_update.saturating_duration_since(s.start),
            next_update: s.next_update.saturating_duration_since(s.start),
            delta_update: s.delta_update,
            progress: s.progress,
            total: s.total,
            last_progress: s.last_progress,
            last_total: s.last_total,
            delta_progress: s.delta_progress,
            delta_total: s.delta_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use web_time::Instant;

    use super::{Snapshot, SnapshotRecord};

    const INTERVAL: Duration = Duration::from_millis(250);

    #[test]
    fn test_fresh_snapshot() {
        let now = Instant::now();
        let s = Snapshot::new(now, INTERVAL);

        assert_eq!(s.start(), now);
        assert_eq!(s.last_update(), now);
        assert_eq!(s.next_update(), now + INTERVAL);
        assert_eq!(s.delta_update(), Duration::ZERO);
        assert_eq!(s.progress(), 0);
        assert_eq!(s.elapsed(), Duration::ZERO);
    }

    /// Refresh shifts current values into `last_*` and computes deltas.
    #[test]
    fn test_refresh_deltas() {
        let t0 = Instant::now();
        let mut s = Snapshot::new(t0, INTERVAL);

        let t1 = t0 + Duration::from_secs(1);
        s.refresh(40, 100, t1, INTERVAL);
        assert_eq!(s.progress(), 40);
        assert_eq!(s.delta_progress(), 40);
        assert_eq!(s.total(), 100);
        assert_eq!(s.delta_total(), 100);
        assert_eq!(s.delta_update(), Duration::from_secs(1));
        assert_eq!(s.next_update(), t1 + INTERVAL);

        let t2 = t1 + Duration::from_millis(500);
        s.refresh(30, 100, t2, INTERVAL);
        assert_eq!(s.last_progress(), 40);
        assert_eq!(s.delta_progress(), -10);
        assert_eq!(s.last_total(), 100);
        assert_eq!(s.delta_total(), 0);
        assert_eq!(s.delta_update(), Duration::from_millis(500));
        assert_eq!(s.elapsed(), Duration::from_millis(1500));
    }

    /// Extreme counter values produce clamped deltas rather than overflowing.
    #[test]
    fn test_refresh_deltas_saturate() {
        let t0 = Instant::now();
        let mut s = Snapshot::new(t0, INTERVAL);
        s.refresh(i64::MAX, i64::MAX, t0, INTERVAL);
        assert_eq!(s.delta_progress(), i64::MAX);

        s.refresh(i64::MIN, 0, t0, INTERVAL);
        assert_eq!(s.delta_progress(), i64::MIN);
        assert_eq!(s.delta_total(), -i64::MAX);
    }

    #[test]
    fn test_reset_restores_fresh_state() {
        let t0 = Instant::now();
        let mut s = Snapshot::new(t0, INTERVAL);
        s.refresh(7, 9, t0 + Duration::from_secs(2), INTERVAL);

        let t1 = t0 + Duration::from_secs(3);
        s.reset(t1, INTERVAL);
        assert_eq!(s, Snapshot::new(t1, INTERVAL));
    }

    #[test]
    fn test_record_offsets() {
        let t0 = Instant::now();
        let mut s = Snapshot::new(t0, INTERVAL);
        s.refresh(5, 10, t0 + Duration::from_secs(1), INTERVAL);

        let record = SnapshotRecord::from(&s);
        assert_eq!(record.last_update, Duration::from_secs(1));
        assert_eq!(record.next_update, Duration::from_secs(1) + INTERVAL);
        assert_eq!(record.progress, 5);
        assert_eq!(record.total, 10);
    }
}
