//! Fixed-width wrapper for stable redraw geometry.

use super::Component;
use crate::Snapshot;

/// Forces a nested component to occupy exactly `width` characters.
///
/// Longer output is truncated, shorter output is padded with spaces on the right.
/// A fixed footprint keeps the redraw geometry stable from frame to frame.
#[derive(Clone, Debug)]
pub struct FixedWidth<C> {
    inner: C,
    width: usize,
}

impl<C: Component> FixedWidth<C> {
    /// Wraps `inner` to `width` characters.
    pub const fn new(inner: C, width: usize) -> Self {
        Self { inner, width }
    }

    /// The enforced width in characters.
    pub const fn width(&self) -> usize {
        self.width
    }
}

impl<C: Component> Component for FixedWidth<C> {
    fn render(&mut self, buf: &mut String, snapshot: &Snapshot) {
        let start = buf.len();
        self.inner.render(buf, snapshot);

        let cut = buf[start..]
            .char_indices()
            .nth(self.width)
            .map(|(offset, _)| offset);
        if let Some(cut) = cut {
            buf.truncate(start + cut);
        } else {
            let len = buf[start..].chars().count();
            buf.extend(std::iter::repeat_n(' ', self.width - len));
        }
    }
}
