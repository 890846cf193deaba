//! # `advance_line`
//!
//! A thread-safe, throttled, single-line progress display.
//!
//! Any number of threads report progress against a shared `(progress, total)`
//! counter pair while one status line is periodically redrawn on a terminal-like
//! output stream. It is designed to be:
//!
//! * **Non-blocking for producers**: Counter updates are single atomic operations.
//!   After updating, a producer makes one non-blocking attempt to become the
//!   renderer; if someone else is drawing, or the refresh interval has not elapsed,
//!   it simply returns.
//! * **Throttled**: Unforced redraws happen at most once per refresh interval, so
//!   reporting throughput is decoupled from terminal I/O.
//! * **Log friendly**: Foreign output written through the line
//!   ([`StatusLine::write_through`] or its [`std::io::Write`] impl) erases the
//!   line first and redraws it beneath complete lines.
//!
//! ## Modules
//!
//! * [`builder`]: Fluent interface for constructing [`StatusLine`] instances.
//! * [`component`]: Render widgets (text, bars, rates, ...) and the [`Component`] trait.
//! * [`config`]: Serializable construction settings.
//! * [`counters`]: The lock-free counter store.
//! * [`io`]: Wrappers for [`std::io::Read`] and [`std::io::Write`] that report bytes transferred.
//! * [`line`]: The [`StatusLine`] display controller.
//! * [`pipeline`]: The ordered component list and its frame buffer.
//! * [`slot`]: The non-blocking render-owner slot.
//! * [`snapshot`]: The per-refresh [`Snapshot`] handed to components.
//! * [`throttle`]: The refresh interval gate.
//! * [`units`]: Byte units for rate display.
//!
//! ## Example
//!
//! ```
//! use std::{io, time::Duration};
//!
//! use advance_line::{
//!     StatusLineBuilder,
//!     component::{DataRate, ProgressBar, Text},
//! };
//!
//! let line = StatusLineBuilder::new(io::sink())
//!     .refresh_interval(Duration::from_millis(100))
//!     .component(Text::new("copying"))
//!     .component(ProgressBar::new(20))
//!     .component(DataRate::default())
//!     .build()?;
//!
//! line.set_total(1024)?;
//! line.show()?;
//! line.add_progress(512)?;
//! line.hide()?;
//! # Ok::<(), advance_line::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod builder;
pub mod component;
pub mod config;
pub mod counters;
pub mod error;
pub mod io;
pub mod line;
pub mod pipeline;
pub mod slot;
pub mod snapshot;
pub mod throttle;
pub mod units;

pub use builder::StatusLineBuilder;
pub use component::Component;
pub use config::{Config, DEFAULT_CLEAR_SEQUENCE};
pub use counters::Counters;
pub use error::{Error, Result};
pub use io::{ProgressReader, ProgressWriter};
pub use line::{RefreshOutcome, StatusLine};
pub use snapshot::{Snapshot, SnapshotRecord};
pub use throttle::Throttle;
