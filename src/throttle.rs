//! The throttle gate: decides which caller, if any, performs a refresh.
//!
//! An unforced request first tries the render-owner slot without blocking and
//! then checks the clock. Losing either check is a normal outcome: the counter
//! update that prompted the request is already stored and will be picked up by
//! whoever refreshes next. A forced request waits for the slot and skips the
//! clock check.

use std::time::Duration;

use web_time::Instant;

use crate::slot::{ExclusiveSlot, SlotGuard};

/// Result of asking the gate for permission to refresh.
pub(crate) enum Admission<'a, T> {
    /// The caller holds the slot and must refresh.
    Granted(SlotGuard<'a, T>, Instant),
    /// The slot was free but the interval has not elapsed yet.
    Throttled,
    /// Someone else holds the slot.
    Contended,
}

/// Minimum spacing between unforced refreshes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Throttle {
    interval: Duration,
}

impl Throttle {
    /// A gate enforcing `interval`. [`Duration::ZERO`] admits every request.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// The configured interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether an unforced refresh may run at `now`.
    #[must_use]
    pub fn is_due(&self, now: Instant, next_update: Instant) -> bool {
        now >= next_update
    }

    /// Decides whether this caller performs the refresh.
    ///
    /// `next_update` reads the scheduled instant out of the guarded state; it
    /// is only called while the slot is held.
    pub(crate) fn admit<'a, T>(
        &self,
        slot: &'a ExclusiveSlot<T>,
        force: bool,
        next_update: impl FnOnce(&T) -> Instant,
    ) -> Admission<'a, T> {
        if force {
            let guard = slot.acquire();
            return Admission::Granted(guard, Instant::now());
        }

        let Some(guard) = slot.try_acquire() else {
            return Admission::Contended;
        };
        let now = Instant::now();
        if self.is_due(now, next_update(&*guard)) {
            Admission::Granted(guard, now)
        } else {
            Admission::Throttled
        }
    }
}
