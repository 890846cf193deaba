//! JSON dump of the snapshot for tests and troubleshooting.

use tracing::warn;

use super::Component;
use crate::{Snapshot, SnapshotRecord};

/// Dumps the whole snapshot as one line of JSON ([`SnapshotRecord`]) followed by `\n`.
///
/// Meant for tests and troubleshooting rather than humans.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DebugJson;

impl Component for DebugJson {
    fn render(&mut self, buf: &mut String, snapshot: &Snapshot) {
        match serde_json::to_string(&SnapshotRecord::from(snapshot)) {
            Ok(json) => buf.push_str(&json),
            Err(err) => warn!(error = %err, "failed to serialize snapshot"),
        }
        buf.push('\n');
    }
}
