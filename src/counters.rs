//! The counter store: progress and total as two independent atomics.
//!
//! Producers mutate the pair on the hot path with single atomic operations and
//! no locking. The two fields are linearizable individually, not jointly: a
//! reader may see `progress` and `total` from slightly different instants.
//! A later refresh corrects any such drift.

use std::sync::atomic::{AtomicI64, Ordering};

use crate::error::{Result, non_negative};

/// A pair of wait-free counters shared between producers and a
/// [`StatusLine`](crate::StatusLine).
///
/// Methods here only touch the atomics. The refresh-requesting variants live on
/// [`StatusLine`](crate::StatusLine); use [`StatusLineBuilder::with_counters`]
/// to share one `Counters` across several handles or subsystems.
///
/// [`StatusLineBuilder::with_counters`]: crate::StatusLineBuilder::with_counters
#[derive(Debug, Default)]
pub struct Counters {
    progress: AtomicI64,
    total: AtomicI64,
}

impl Counters {
    /// Creates a zeroed counter pair.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            progress: AtomicI64::new(0),
            total: AtomicI64::new(0),
        }
    }

    /// Stores an absolute progress value.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `progress` is negative.
    pub fn set_progress(&self, progress: i64) -> Result<()> {
        let progress = non_negative("progress", progress)?;
        self.progress.store(progress, Ordering::Relaxed);
        Ok(())
    }

    /// Adds `delta` to the progress counter, saturating at [`i64::MAX`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `delta` is negative.
    pub fn add_progress(&self, delta: i64) -> Result<()> {
        let delta = non_negative("progress delta", delta)?;
        saturating_add(&self.progress, delta);
        Ok(())
    }

    /// Stores an absolute total.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `total` is negative.
    pub fn set_total(&self, total: i64) -> Result<()> {
        let total = non_negative("total", total)?;
        self.total.store(total, Ordering::Relaxed);
        Ok(())
    }

    /// Adds `delta` to the total, saturating at [`i64::MAX`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `delta` is negative.
    pub fn add_total(&self, delta: i64) -> Result<()> {
        let delta = non_negative("total delta", delta)?;
        saturating_add(&self.total, delta);
        Ok(())
    }

    /// Current progress.
    #[must_use]
    pub fn progress(&self) -> i64 {
        self.progress.load(Ordering::Relaxed)
    }

    /// Current total.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.total.load(Ordering::Relaxed)
    }

    /// Zeroes both counters.
    pub(crate) fn reset(&self) {
        self.progress.store(0, Ordering::Relaxed);
        self.total.store(0, Ordering::Relaxed);
    }
}

/// Adds without wrapping, so a counter never turns negative.
fn saturating_add(counter: &AtomicI64, delta: i64) {
    // The closure always returns `Some`, so the update cannot fail.
    let _ = counter.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |v| {
        Some(v.saturating_add(delta))
    });
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::Counters;
    use crate::Error;

    #[test]
    fn test_set_and_add() {
        let c = Counters::new();
        c.set_total(10).unwrap();
        c.add_total(5).unwrap();
        c.set_progress(3).unwrap();
        c.add_progress(4).unwrap();

        assert_eq!(c.total(), 15);
        assert_eq!(c.progress(), 7);

        c.reset();
        assert_eq!((c.progress(), c.total()), (0, 0));
    }

    /// A rejected argument leaves the stored value untouched.
    #[test]
    fn test_negative_is_rejected_without_mutation() {
        let c = Counters::new();
        c.set_progress(9).unwrap();

        assert!(matches!(
            c.add_progress(-1),
            Err(Error::InvalidArgument { value: -1, .. })
        ));
        assert!(c.set_progress(-9).is_err());
        assert!(c.set_total(-1).is_err());
        assert!(c.add_total(-1).is_err());

        assert_eq!(c.progress(), 9);
        assert_eq!(c.total(), 0);
    }

    /// Adding past the largest value pins the counter instead of wrapping negative.
    #[test]
    fn test_add_saturates_at_max() {
        let c = Counters::new();
        c.set_progress(i64::MAX).unwrap();
        c.add_progress(1).unwrap();
        assert_eq!(c.progress(), i64::MAX);

        c.set_total(i64::MAX - 1).unwrap();
        c.add_total(5).unwrap();
        assert_eq!(c.total(), i64::MAX);
    }

    /// Concurrent adds are lossless.
    #[test]
    fn test_concurrent_adds() {
        let c = Arc::new(Counters::new());
        let handles: Vec<_> = (0..10)
            .map(|_| {
                let c = Arc::clone(&c);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        c.add_progress(1).unwrap();
                        c.add_total(2).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(c.progress(), 10_000);
        assert_eq!(c.total(), 20_000);
    }
}
