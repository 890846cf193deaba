//! Text that rotates through a list of entries.

use std::{sync::Arc, time::Duration};

use compact_str::CompactString;
use parking_lot::Mutex;
use web_time::Instant;

use super::Component;
use crate::Snapshot;

/// Handle to an entry of a [`CycleText`], used to remove it later.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TextId(u64);

/// Rotates through a list of texts on its own cadence.
///
/// The rotation timer is independent of the status line's refresh interval: the
/// next entry is shown only once more than `speed` has passed since the last
/// advance, however often the line is redrawn.
///
/// `CycleText` is a cloneable handle. Keep a clone outside the pipeline to add or
/// remove entries while the line is being rendered, e.g. one entry per
/// in-flight download.
#[derive(Clone, Debug)]
pub struct CycleText {
    inner: Arc<Mutex<Cycle>>,
}

#[derive(Debug)]
struct Cycle {
    speed: Duration,
    entries: Vec<(TextId, CompactString)>,
    current: Option<usize>,
    last_cycle: Option<Instant>,
    next_id: u64,
}

impl CycleText {
    /// Creates an empty rotation advancing at most once per `speed`.
    #[must_use]
    pub fn new(speed: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Cycle {
                speed,
                entries: Vec::new(),
                current: None,
                last_cycle: None,
                next_id: 0,
            })),
        }
    }

    /// Creates a rotation pre-filled with `texts`.
    pub fn with_texts<I, T>(speed: Duration, texts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<CompactString>,
    {
        let cycle = Self::new(speed);
        for text in texts {
            cycle.push(text);
        }
        cycle
    }

    /// Appends `text` to the rotation.
    pub fn push(&self, text: impl Into<CompactString>) -> TextId {
        let mut cycle = self.inner.lock();
        let id = TextId(cycle.next_id);
        cycle.next_id += 1;
        cycle.entries.push((id, text.into()));
        id
    }

    /// Removes an entry. Returns `false` if it was already gone.
    pub fn remove(&self, id: TextId) -> bool {
        let mut cycle = self.inner.lock();
        let Some(index) = cycle.entries.iter().position(|(entry, _)| *entry == id) else {
            return false;
        };
        cycle.entries.remove(index);

        // Keep pointing at the same entry, or at its successor if it was the one removed.
        let len = cycle.entries.len();
        cycle.current = match cycle.current {
            Some(_) if len == 0 => None,
            Some(current) if index < current => Some(current - 1),
            Some(current) if current >= len => Some(0),
            other => other,
        };
        true
    }

    /// Number of entries in the rotation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Whether the rotation is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    fn render_at(&self, buf: &mut String, now: Instant) {
        let mut cycle = self.inner.lock();
        let len = cycle.entries.len();
        if len == 0 {
            return;
        }

        let index = match (cycle.current, cycle.last_cycle) {
            (Some(current), Some(last)) if now.saturating_duration_since(last) > cycle.speed => {
                cycle.last_cycle = Some(now);
                (current + 1) % len
            }
            (Some(current), _) => current,
            (None, _) => {
                cycle.last_cycle = Some(now);
                0
            }
        };
        cycle.current = Some(index);
        buf.push_str(&cycle.entries[index].1);
    }
}

impl Component for CycleText {
    fn render(&mut self, buf: &mut String, _snapshot: &Snapshot) {
        self.render_at(buf, Instant::now());
    }
}
