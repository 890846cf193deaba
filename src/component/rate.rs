//! Smoothed data rate display.

use std::fmt::Write as _;

use super::Component;
use crate::{
    Snapshot,
    units::{ByteUnit, UnitSystem},
};

/// How a [`DataRate`] picks its display unit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RateUnit {
    /// Always display in this unit.
    Fixed(ByteUnit),
    /// Pick a unit from this system based on the current rate.
    Auto(UnitSystem),
}

impl Default for RateUnit {
    fn default() -> Self {
        Self::Auto(UnitSystem::Iec)
    }
}

/// Exponentially smoothed transfer rate, e.g. `12 MiB/s`.
///
/// Each frame computes `delta_progress / delta_update` and folds it into the
/// running average with weight 1/8. The first finite rate seeds the average.
#[derive(Clone, Copy, Debug)]
pub struct DataRate {
    smoothed: f64,
    unit: RateUnit,
}

impl Default for DataRate {
    fn default() -> Self {
        Self::new(RateUnit::default())
    }
}

impl DataRate {
    /// A rate display using `unit`.
    #[must_use]
    pub const fn new(unit: RateUnit) -> Self {
        Self {
            smoothed: f64::NAN,
            unit,
        }
    }

    /// The current smoothed rate in bytes per second, if any finite sample was seen.
    #[must_use]
    pub fn rate(&self) -> Option<f64> {
        self.smoothed.is_finite().then_some(self.smoothed)
    }

    fn sample(&mut self, snapshot: &Snapshot) {
        let rate = snapshot.delta_progress() as f64 / snapshot.delta_update().as_secs_f64();
        if !rate.is_finite() {
            return;
        }
        self.smoothed = if self.smoothed.is_finite() {
            self.smoothed * 7.0 / 8.0 + rate / 8.0
        } else {
            rate
        };
    }
}

impl Component for DataRate {
    fn render(&mut self, buf: &mut String, snapshot: &Snapshot) {
        self.sample(snapshot);

        let rate = self.rate().unwrap_or(0.0);
        let unit = match self.unit {
            RateUnit::Fixed(unit) => unit,
            RateUnit::Auto(system) => system.auto(rate),
        };
        let _ = write!(buf, "{} {}/s", unit.scale(rate).round(), unit.label());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use web_time::Instant;

    use super::{DataRate, RateUnit};
    use crate::{
        Snapshot,
        component::Component,
        units::{ByteUnit, UnitSystem},
    };

    /// Feeds successive (progress, elapsed) samples and returns the last frame.
    fn run(rate: &mut DataRate, samples: &[(i64, Duration)]) -> String {
        let t0 = Instant::now();
        let mut snapshot = Snapshot::new(t0, Duration::ZERO);
        let mut buf = String::new();
        for (progress, at) in samples {
            snapshot.refresh(*progress, 0, t0 + *at, Duration::ZERO);
            buf.clear();
            rate.render(&mut buf, &snapshot);
        }
        buf
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_first_sample_seeds() {
        let mut rate = DataRate::new(RateUnit::Fixed(ByteUnit::B));
        let out = run(&mut rate, &[(1000, Duration::from_secs(1))]);
        assert_eq!(rate.rate(), Some(1000.0));
        assert_eq!(out, "1000 B/s");
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_smoothing() {
        let mut rate = DataRate::new(RateUnit::Fixed(ByteUnit::B));
        run(
            &mut rate,
            &[
                (800, Duration::from_secs(1)),
                (800, Duration::from_secs(2)),
            ],
        );
        // 800 * 7/8 + 0 * 1/8
        assert_eq!(rate.rate(), Some(700.0));
    }

    /// A zero-length interval yields no finite sample and leaves the average alone.
    #[test]
    fn test_non_finite_samples_ignored() {
        let mut rate = DataRate::default();
        let out = run(&mut rate, &[(0, Duration::ZERO)]);
        assert_eq!(rate.rate(), None);
        assert_eq!(out, "0 B/s");

        run(
            &mut rate,
            &[(2048, Duration::from_secs(1)), (4096, Duration::from_secs(1))],
        );
        assert_eq!(rate.rate(), Some(2048.0));
    }

    #[test]
    fn test_auto_unit() {
        let mut rate = DataRate::new(RateUnit::Auto(UnitSystem::Iec));
        let out = run(&mut rate, &[(3 * 1024 * 1024, Duration::from_secs(1))]);
        assert_eq!(out, "3 MiB/s");

        let mut rate = DataRate::new(RateUnit::Auto(UnitSystem::Si));
        let out = run(&mut rate, &[(1500, Duration::from_secs(1))]);
        assert_eq!(out, "2 kB/s");
    }
}
