//! Elapsed time display.

use std::{fmt::Write as _, time::Duration};

use super::Component;
use crate::Snapshot;

/// Time since tracking started, rounded to whole seconds (`1h2m3s`).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Elapsed;

fn write_duration(buf: &mut String, elapsed: Duration) {
    let secs = (elapsed.as_millis() + 500) / 1000;
    let (hours, minutes, seconds) = (secs / 3600, secs / 60 % 60, secs % 60);
    let _ = if hours > 0 {
        write!(buf, "{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        write!(buf, "{minutes}m{seconds}s")
    } else {
        write!(buf, "{seconds}s")
    };
}

impl Component for Elapsed {
    fn render(&mut self, buf: &mut String, snapshot: &Snapshot) {
        write_duration(buf, snapshot.elapsed());
    }
}
