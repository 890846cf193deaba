//! The render-owner slot: a capacity-1 token that can be taken without blocking.
//!
//! Many producers race for the slot after every counter update; only the winner
//! recomputes the snapshot and draws. Losers find out immediately via
//! [`ExclusiveSlot::try_acquire`] and go back to work. Forced operations use the
//! blocking [`ExclusiveSlot::acquire`] instead.
//!
//! The slot owns the data it protects, so holding a [`SlotGuard`] is the only way
//! to reach it, and dropping the guard releases it (including on `?` early returns).

use std::ops::{Deref, DerefMut};

use parking_lot::{Mutex, MutexGuard};

/// A capacity-1 token guarding a value of type `T`.
#[derive(Debug, Default)]
pub struct ExclusiveSlot<T> {
    inner: Mutex<T>,
}

/// Proof of holding an [`ExclusiveSlot`]. The slot is released on drop.
#[must_use = "the slot is released as soon as the guard is dropped"]
pub struct SlotGuard<'a, T> {
    guard: MutexGuard<'a, T>,
}

impl<T> ExclusiveSlot<T> {
    /// Creates a free slot holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(value),
        }
    }

    /// Blocks until the slot is free, then takes it.
    pub fn acquire(&self) -> SlotGuard<'_, T> {
        SlotGuard {
            guard: self.inner.lock(),
        }
    }

    /// Takes the slot if nobody holds it. Never blocks.
    pub fn try_acquire(&self) -> Option<SlotGuard<'_, T>> {
        self.inner.try_lock().map(|guard| SlotGuard { guard })
    }

    /// Whether some caller currently holds the slot.
    ///
    /// Only a hint: the answer may be stale by the time it is read.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.inner.is_locked()
    }
}

impl<T> SlotGuard<'_, T> {
    /// Returns the slot explicitly. Equivalent to dropping the guard.
    pub fn release(self) {}
}

impl<T> Deref for SlotGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T> DerefMut for SlotGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.guard
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, Barrier},
        thread,
    };

    use super::ExclusiveSlot;

    #[test]
    fn test_try_acquire_fails_while_held() {
        let slot = ExclusiveSlot::new(0u32);

        let mut held = slot.try_acquire().expect("free slot");
        *held += 1;
        assert!(slot.is_held());
        assert!(slot.try_acquire().is_none());

        held.release();
        assert!(!slot.is_held());
        assert_eq!(*slot.acquire(), 1);
    }

    /// Exactly one of many simultaneous contenders wins a single round.
    #[test]
    fn test_single_winner_under_contention() {
        let slot = Arc::new(ExclusiveSlot::new(()));
        let gate = Arc::new(Barrier::new(8));
        let done = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let slot = Arc::clone(&slot);
                let gate = Arc::clone(&gate);
                let done = Arc::clone(&done);
                thread::spawn(move || {
                    gate.wait();
                    let guard = slot.try_acquire();
                    let won = guard.is_some();
                    // Hold until everyone has tried.
                    done.wait();
                    drop(guard);
                    won
                })
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(winners, 1);
    }

    #[test]
    fn test_acquire_waits_for_release() {
        let slot = Arc::new(ExclusiveSlot::new(Vec::new()));
        let guard = slot.acquire();

        let waiter = {
            let slot = Arc::clone(&slot);
            thread::spawn(move || slot.acquire().push("second"))
        };

        drop(guard);
        waiter.join().unwrap();
        assert_eq!(*slot.acquire(), vec!["second"]);
    }
}
