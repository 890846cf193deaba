//! Bracketed progress bar.

use super::Component;
use crate::Snapshot;

/// A bracketed bar, e.g. `[=====>    ]`, scaled to `width` columns.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProgressBar {
    width: usize,
}

impl ProgressBar {
    /// A bar with `width` columns between the brackets.
    #[must_use]
    pub const fn new(width: usize) -> Self {
        Self { width }
    }

    /// Number of filled columns for `progress` out of `total`.
    ///
    /// Zero when `total` is zero, full once `progress` reaches `total`.
    #[must_use]
    pub fn fill(&self, progress: i64, total: i64) -> usize {
        if total <= 0 || progress <= 0 {
            0
        } else if progress >= total {
            self.width
        } else {
            (i128::from(progress) * self.width as i128 / i128::from(total)) as usize
        }
    }
}

impl Component for ProgressBar {
    fn render(&mut self, buf: &mut String, snapshot: &Snapshot) {
        let fill = self.fill(snapshot.progress(), snapshot.total());
        let empty = self.width - fill;

        buf.push('[');
        buf.extend(std::iter::repeat_n('=', fill));
        if empty > 0 {
            buf.push('>');
            buf.extend(std::iter::repeat_n(' ', empty - 1));
        }
        buf.push(']');
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use proptest::prelude::*;
    use web_time::Instant;

    use super::ProgressBar;
    use crate::{Snapshot, component::Component};

    fn draw(width: usize, progress: i64, total: i64) -> String {
        let mut snapshot = Snapshot::new(Instant::now(), Duration::ZERO);
        snapshot.refresh(progress, total, Instant::now(), Duration::ZERO);
        let mut buf = String::new();
        ProgressBar::new(width).render(&mut buf, &snapshot);
        buf
    }

    #[test]
    fn test_boundary_fills() {
        let bar = ProgressBar::new(10);
        assert_eq!(bar.fill(3, 0), 0);
        assert_eq!(bar.fill(5, 5), 10);
        assert_eq!(bar.fill(0, 10), 0);
        assert_eq!(bar.fill(7, 5), 10);
        assert_eq!(bar.fill(5, 10), 5);
        assert_eq!(bar.fill(99, 100), 9);
    }

    #[test]
    fn test_rendering() {
        assert_eq!(draw(10, 5, 5), "[==========]");
        assert_eq!(draw(10, 0, 10), "[>         ]");
        assert_eq!(draw(10, 5, 10), "[=====>    ]");
        assert_eq!(draw(10, 1, 0), "[>         ]");
        assert_eq!(draw(0, 1, 2), "[]");
    }

    proptest! {
        #[test]
        fn prop_bar_has_stable_width(width in 0usize..80, progress in 0i64..1_000, total in 0i64..1_000) {
            prop_assert_eq!(draw(width, progress, total).chars().count(), width + 2);
        }
    }
}
