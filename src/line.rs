//! The display controller.
//!
//! [`StatusLine`] ties the pieces together: producers update the [`Counters`],
//! the [`Throttle`] and the render-owner slot decide who (if anyone) redraws,
//! and the controller owns the output sink and the visibility state.
//!
//! # Locking
//!
//! Three locks, always taken in this order:
//!
//! 1. **Lifecycle lock**, held by [`show`](StatusLine::show),
//!    [`hide`](StatusLine::hide) and [`reset`](StatusLine::reset) so that only
//!    one of them runs at a time.
//! 2. **Render-owner slot**, guarding the [`Snapshot`] and the [`Pipeline`].
//!    Counter updates only ever *try* to take it; everything else blocks.
//! 3. **Write lock**, guarding the sink and the `active` flag. Every byte that
//!    reaches the sink is written under it, so frames, clears and pass-through
//!    output never interleave.
//!
//! All three are RAII guards, so an I/O error propagated with `?` releases them.

use std::{
    fmt,
    io::{self, Write},
    sync::Arc,
    time::Duration,
};

use parking_lot::Mutex;
use tracing::{debug, trace};
use web_time::Instant;

use crate::{
    Snapshot,
    counters::Counters,
    error::Result,
    pipeline::Pipeline,
    slot::ExclusiveSlot,
    throttle::{Admission, Throttle},
};

/// What a refresh request ended up doing.
///
/// Only [`Rendered`](Self::Rendered) touched the sink. `Throttled` and `Contended`
/// are the expected outcome for most updates under load; the counter change is
/// stored either way and shows up in the next frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RefreshOutcome {
    /// This caller recomputed the snapshot and wrote a frame.
    Rendered,
    /// This caller recomputed the snapshot; nothing was drawn because the line is hidden.
    Refreshed,
    /// The refresh interval has not elapsed since the previous refresh.
    Throttled,
    /// Another caller was refreshing or reconfiguring the line.
    Contended,
}

impl RefreshOutcome {
    /// Whether the snapshot was recomputed by this call.
    #[must_use]
    pub const fn is_refreshed(self) -> bool {
        matches!(self, Self::Rendered | Self::Refreshed)
    }
}

/// A thread-safe, cloneable handle to a single redrawable status line.
///
/// Cloning is cheap (an [`Arc`] bump); every clone drives the same counters,
/// snapshot, components and sink. Build one with
/// [`StatusLineBuilder`](crate::StatusLineBuilder).
pub struct StatusLine<W> {
    inner: Arc<Shared<W>>,
}

impl<W> Clone for StatusLine<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W> fmt::Debug for StatusLine<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusLine")
            .field("progress", &self.inner.counters.progress())
            .field("total", &self.inner.counters.total())
            .field("refresh_interval", &self.inner.throttle.interval())
            .finish_non_exhaustive()
    }
}

struct Shared<W> {
    counters: Arc<Counters>,
    throttle: Throttle,
    lifecycle: Mutex<()>,
    render: ExclusiveSlot<RenderState>,
    display: Mutex<Display<W>>,
}

/// State owned by whoever holds the render-owner slot.
struct RenderState {
    snapshot: Snapshot,
    pipeline: Pipeline,
}

/// State guarded by the write lock.
struct Display<W> {
    sink: W,
    active: bool,
    clear: Box<[u8]>,
}

impl<W: Write> Display<W> {
    fn emit(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.sink.write_all(bytes)?;
        self.sink.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        self.sink.write_all(&self.clear)?;
        self.sink.flush()
    }
}

impl<W: Write> Shared<W> {
    fn refresh_snapshot(&self, state: &mut RenderState, now: Instant) {
        state.snapshot.refresh(
            self.counters.progress(),
            self.counters.total(),
            now,
            self.throttle.interval(),
        );
    }

    /// Composes and writes a frame if the line is visible.
    fn draw(state: &mut RenderState, display: &mut Display<W>) -> Result<RefreshOutcome> {
        if !display.active {
            return Ok(RefreshOutcome::Refreshed);
        }
        let RenderState { snapshot, pipeline } = state;
        let frame = pipeline.compose(snapshot);
        display.emit(frame.as_bytes())?;
        Ok(RefreshOutcome::Rendered)
    }

    fn request_refresh(&self, force: bool) -> Result<RefreshOutcome> {
        match self
            .throttle
            .admit(&self.render, force, |state| state.snapshot.next_update())
        {
            Admission::Granted(mut state, now) => {
                self.refresh_snapshot(&mut state, now);
                let mut display = self.display.lock();
                Self::draw(&mut state, &mut display)
            }
            Admission::Throttled => {
                trace!("refresh throttled");
                Ok(RefreshOutcome::Throttled)
            }
            Admission::Contended => {
                trace!("refresh skipped, render slot busy");
                Ok(RefreshOutcome::Contended)
            }
        }
    }
}

impl<W> StatusLine<W> {
    pub(crate) fn from_parts(
        sink: W,
        counters: Arc<Counters>,
        refresh_interval: Duration,
        clear: &str,
        pipeline: Pipeline,
    ) -> Self {
        let throttle = Throttle::new(refresh_interval);
        Self {
            inner: Arc::new(Shared {
                counters,
                throttle,
                lifecycle: Mutex::new(()),
                render: ExclusiveSlot::new(RenderState {
                    snapshot: Snapshot::new(Instant::now(), refresh_interval),
                    pipeline,
                }),
                display: Mutex::new(Display {
                    sink,
                    active: false,
                    clear: clear.as_bytes().into(),
                }),
            }),
        }
    }

    /// The shared counter store behind this line.
    #[must_use]
    pub fn counters(&self) -> Arc<Counters> {
        Arc::clone(&self.inner.counters)
    }

    /// Current progress, read without locking.
    #[must_use]
    pub fn progress(&self) -> i64 {
        self.inner.counters.progress()
    }

    /// Current total, read without locking.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.inner.counters.total()
    }

    /// Minimum spacing between unforced renders.
    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        self.inner.throttle.interval()
    }

    /// Whether the line is currently shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.inner.display.lock().active
    }

    /// A copy of the snapshot produced by the most recent refresh.
    ///
    /// Waits for an in-flight refresh to finish.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.inner.render.acquire().snapshot
    }
}

impl<W: Write> StatusLine<W> {
    /// Sets progress to `progress` and tries to refresh.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) for a negative value,
    /// [`Error::Sink`](crate::Error::Sink) if this call rendered and the write failed.
    pub fn set_progress(&self, progress: i64) -> Result<RefreshOutcome> {
        self.inner.counters.set_progress(progress)?;
        self.inner.request_refresh(false)
    }

    /// Adds `delta` to progress and tries to refresh.
    ///
    /// # Errors
    ///
    /// See [`set_progress`](Self::set_progress).
    pub fn add_progress(&self, delta: i64) -> Result<RefreshOutcome> {
        self.inner.counters.add_progress(delta)?;
        self.inner.request_refresh(false)
    }

    /// Sets the total to `total` and tries to refresh.
    ///
    /// # Errors
    ///
    /// See [`set_progress`](Self::set_progress).
    pub fn set_total(&self, total: i64) -> Result<RefreshOutcome> {
        self.inner.counters.set_total(total)?;
        self.inner.request_refresh(false)
    }

    /// Adds `delta` to the total and tries to refresh.
    ///
    /// # Errors
    ///
    /// See [`set_progress`](Self::set_progress).
    pub fn add_total(&self, delta: i64) -> Result<RefreshOutcome> {
        self.inner.counters.add_total(delta)?;
        self.inner.request_refresh(false)
    }

    /// Refreshes now, waiting for any in-flight refresh and ignoring the interval.
    ///
    /// # Errors
    ///
    /// [`Error::Sink`](crate::Error::Sink) if the frame could not be written.
    pub fn refresh(&self) -> Result<RefreshOutcome> {
        self.inner.request_refresh(true)
    }

    /// Makes the line visible and draws a fresh frame. No-op if already visible.
    ///
    /// # Errors
    ///
    /// [`Error::Sink`](crate::Error::Sink) if the frame could not be written.
    pub fn show(&self) -> Result<()> {
        let shared = &*self.inner;
        let _lifecycle = shared.lifecycle.lock();
        let mut state = shared.render.acquire();
        let mut display = shared.display.lock();
        if display.active {
            return Ok(());
        }

        debug!("showing status line");
        display.active = true;
        shared.refresh_snapshot(&mut state, Instant::now());
        Shared::<W>::draw(&mut state, &mut display)?;
        Ok(())
    }

    /// Erases the line and stops drawing it. No-op if already hidden.
    ///
    /// # Errors
    ///
    /// [`Error::Sink`](crate::Error::Sink) if the clear sequence could not be written.
    pub fn hide(&self) -> Result<()> {
        let shared = &*self.inner;
        let _lifecycle = shared.lifecycle.lock();
        let _state = shared.render.acquire();
        let mut display = shared.display.lock();
        if !display.active {
            return Ok(());
        }

        debug!("hiding status line");
        display.active = false;
        display.clear()?;
        Ok(())
    }

    /// Zeroes the counters, restarts timing, and redraws if visible.
    ///
    /// # Errors
    ///
    /// [`Error::Sink`](crate::Error::Sink) if the frame could not be written.
    pub fn reset(&self) -> Result<()> {
        let shared = &*self.inner;
        let _lifecycle = shared.lifecycle.lock();
        let mut state = shared.render.acquire();

        debug!("resetting status line");
        shared.counters.reset();
        state
            .snapshot
            .reset(Instant::now(), shared.throttle.interval());

        let mut display = shared.display.lock();
        Shared::<W>::draw(&mut state, &mut display)?;
        Ok(())
    }

    /// Writes unrelated output through the sink without corrupting the line.
    ///
    /// While the line is visible it is erased first, `bytes` are written
    /// verbatim, and if they end with a newline the line is redrawn beneath
    /// them. While hidden, `bytes` go straight to the sink.
    ///
    /// # Errors
    ///
    /// [`Error::Sink`](crate::Error::Sink) if any write fails.
    pub fn write_through(&self, bytes: &[u8]) -> Result<()> {
        let shared = &*self.inner;
        let mut state = shared.render.acquire();
        let mut display = shared.display.lock();
        if !display.active {
            display.emit(bytes)?;
            return Ok(());
        }

        display.clear()?;
        display.emit(bytes)?;
        if bytes.ends_with(b"\n") {
            shared.refresh_snapshot(&mut state, Instant::now());
            Shared::<W>::draw(&mut state, &mut display)?;
        }
        Ok(())
    }
}

impl<W: Write> Write for StatusLine<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_through(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.display.lock().sink.flush()
    }
}
