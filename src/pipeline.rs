//! The render pipeline: an ordered list of components sharing one frame buffer.
//!
//! The buffer always starts with the control prefix that erases the previous
//! frame. Composing truncates back to the end of that prefix, then lets every
//! component append in order with a single space between neighbours. The
//! finished buffer is written to the sink in one piece.

use std::fmt;

use crate::{
    Snapshot,
    component::Component,
    error::{Error, Result},
};

/// Separator inserted between consecutive components.
const SEPARATOR: char = ' ';

/// Components plus the frame buffer they draw into.
pub struct Pipeline {
    components: Vec<Box<dyn Component>>,
    frame: String,
    prefix_len: usize,
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("components", &self.components.len())
            .field("prefix", &self.prefix())
            .finish()
    }
}

impl Pipeline {
    /// Creates a pipeline whose frames start with `prefix`.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] if `components` is empty.
    pub fn new(prefix: &str, components: Vec<Box<dyn Component>>) -> Result<Self> {
        if components.is_empty() {
            return Err(Error::Configuration("at least one component is required"));
        }
        Ok(Self {
            components,
            frame: prefix.to_owned(),
            prefix_len: prefix.len(),
        })
    }

    /// Renders every component for `snapshot` and returns the full frame, prefix included.
    pub fn compose(&mut self, snapshot: &Snapshot) -> &str {
        self.frame.truncate(self.prefix_len);
        for (i, component) in self.components.iter_mut().enumerate() {
            if i > 0 {
                self.frame.push(SEPARATOR);
            }
            component.render(&mut self.frame, snapshot);
        }
        &self.frame
    }

    /// The control prefix that erases the previous frame.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.frame[..self.prefix_len]
    }

    /// The most recently composed frame (just the prefix before the first compose).
    #[must_use]
    pub fn frame(&self) -> &str {
        &self.frame
    }
}
