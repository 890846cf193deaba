//! Fluent interface for constructing [`StatusLine`] instances.
//!
//! # Key Features
//!
//! * **Components:** The line is described by an ordered list of
//!   [`Component`]s; at least one is required.
//! * **Shared State:** An existing `Arc<Counters>` can be injected. This is useful
//!   when several subsystems feed the *same* counters (e.g., a global byte counter
//!   shared by download workers) and only one of them owns the display.
//! * **Configuration:** [`StatusLineBuilder::from_config`] starts from a
//!   deserialized [`Config`].

use std::{io::Write, sync::Arc, time::Duration};

use compact_str::CompactString;

use crate::{
    component::Component,
    config::Config,
    counters::Counters,
    error::Result,
    line::StatusLine,
    pipeline::Pipeline,
};

/// A builder for [`StatusLine`].
pub struct StatusLineBuilder<W> {
    sink: W,
    refresh_interval: Duration,
    clear_sequence: CompactString,
    components: Vec<Box<dyn Component>>,
    counters: Option<Arc<Counters>>,
}

impl<W: Write> StatusLineBuilder<W> {
    /// Starts a builder writing to `sink` with default settings.
    #[must_use]
    pub fn new(sink: W) -> Self {
        Self::from_config(sink, &Config::default())
    }

    /// Starts a builder writing to `sink` with settings from `config`.
    #[must_use]
    pub fn from_config(sink: W, config: &Config) -> Self {
        Self {
            sink,
            refresh_interval: config.refresh_interval(),
            clear_sequence: config.clear_sequence().into(),
            components: Vec::new(),
            counters: None,
        }
    }

    /// Sets the minimum spacing between unforced renders. [`Duration::ZERO`]
    /// renders on every update.
    #[must_use]
    pub const fn refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Sets the control sequence that erases the previous frame.
    #[must_use]
    pub fn clear_sequence(mut self, sequence: impl Into<CompactString>) -> Self {
        self.clear_sequence = sequence.into();
        self
    }

    /// Appends a component to the line.
    #[must_use]
    pub fn component(mut self, component: impl Component + 'static) -> Self {
        self.components.push(Box::new(component));
        self
    }

    /// Appends several already boxed components.
    #[must_use]
    pub fn components(mut self, components: impl IntoIterator<Item = Box<dyn Component>>) -> Self {
        self.components.extend(components);
        self
    }

    /// Uses a pre-existing counter store instead of a fresh one.
    #[must_use]
    pub fn with_counters(mut self, counters: Arc<Counters>) -> Self {
        self.counters = Some(counters);
        self
    }

    /// Consumes the builder and returns the constructed [`StatusLine`], initially hidden.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`](crate::Error::Configuration) if no component was added.
    pub fn build(self) -> Result<StatusLine<W>> {
        let pipeline = Pipeline::new(&self.clear_sequence, self.components)?;
        Ok(StatusLine::from_parts(
            self.sink,
            self.counters.unwrap_or_default(),
            self.refresh_interval,
            &self.clear_sequence,
            pipeline,
        ))
    }
}
