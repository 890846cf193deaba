//! Static text.

use compact_str::CompactString;

use super::Component;
use crate::Snapshot;

/// Static text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Text {
    text: CompactString,
}

impl Text {
    /// Creates a component that always renders `text`.
    pub fn new(text: impl Into<CompactString>) -> Self {
        Self { text: text.into() }
    }
}

impl Component for Text {
    fn render(&mut self, buf: &mut String, _snapshot: &Snapshot) {
        buf.push_str(&self.text);
    }
}
