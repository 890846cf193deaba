//! Render components: the widgets a [`Pipeline`](crate::pipeline::Pipeline) strings together.
//!
//! Each component appends text for one [`Snapshot`] to a shared frame buffer.
//! The pipeline calls components one at a time while holding the render-owner
//! slot, so a component may keep mutable state between frames (a smoothed rate,
//! a cycling index) without locking of its own.

mod bar;
mod cycle;
mod debug;
mod elapsed;
mod fixed;
mod rate;
mod text;

pub use bar::ProgressBar;
pub use cycle::{CycleText, TextId};
pub use debug::DebugJson;
pub use elapsed::Elapsed;
pub use fixed::FixedWidth;
pub use rate::{DataRate, RateUnit};
pub use text::Text;

use crate::Snapshot;

/// Something that can draw part of a status line.
///
/// Implementations append to `buf` and must not keep the snapshot beyond the call.
pub trait Component: Send {
    /// Appends this component's text for `snapshot` to `buf`.
    fn render(&mut self, buf: &mut String, snapshot: &Snapshot);
}

impl Component for Box<dyn Component> {
    fn render(&mut self, buf: &mut String, snapshot: &Snapshot) {
        (**self).render(buf, snapshot);
    }
}
