//! Byte units used by the data rate widget.

/// A byte unit with its scale factor and display label.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ByteUnit {
    /// Bytes.
    B,
    /// 10^3 bytes.
    KB,
    /// 10^6 bytes.
    MB,
    /// 10^9 bytes.
    GB,
    /// 10^12 bytes.
    TB,
    /// 10^15 bytes.
    PB,
    /// 10^18 bytes.
    EB,
    /// 10^21 bytes.
    ZB,
    /// 10^24 bytes.
    YB,
    /// 2^10 bytes.
    KiB,
    /// 2^20 bytes.
    MiB,
    /// 2^30 bytes.
    GiB,
    /// 2^40 bytes.
    TiB,
    /// 2^50 bytes.
    PiB,
    /// 2^60 bytes.
    EiB,
    /// 2^70 bytes.
    ZiB,
    /// 2^80 bytes.
    YiB,
}

/// Which family of units to scale through.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum UnitSystem {
    /// Powers of 1000 (kB, MB, ...).
    Si,
    /// Powers of 1024 (KiB, MiB, ...).
    #[default]
    Iec,
}

const SI: [ByteUnit; 9] = [
    ByteUnit::B,
    ByteUnit::KB,
    ByteUnit::MB,
    ByteUnit::GB,
    ByteUnit::TB,
    ByteUnit::PB,
    ByteUnit::EB,
    ByteUnit::ZB,
    ByteUnit::YB,
];

const IEC: [ByteUnit; 9] = [
    ByteUnit::B,
    ByteUnit::KiB,
    ByteUnit::MiB,
    ByteUnit::GiB,
    ByteUnit::TiB,
    ByteUnit::PiB,
    ByteUnit::EiB,
    ByteUnit::ZiB,
    ByteUnit::YiB,
];

impl ByteUnit {
    /// Number of bytes in one of this unit.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::B => 1.0,
            Self::KB => 1e3,
            Self::MB => 1e6,
            Self::GB => 1e9,
            Self::TB => 1e12,
            Self::PB => 1e15,
            Self::EB => 1e18,
            Self::ZB => 1e21,
            Self::YB => 1e24,
            Self::KiB => 1024f64,
            Self::MiB => 1024f64.powi(2),
            Self::GiB => 1024f64.powi(3),
            Self::TiB => 1024f64.powi(4),
            Self::PiB => 1024f64.powi(5),
            Self::EiB => 1024f64.powi(6),
            Self::ZiB => 1024f64.powi(7),
            Self::YiB => 1024f64.powi(8),
        }
    }

    /// Short display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::B => "B",
            Self::KB => "kB",
            Self::MB => "MB",
            Self::GB => "GB",
            Self::TB => "TB",
            Self::PB => "PB",
            Self::EB => "EB",
            Self::ZB => "ZB",
            Self::YB => "YB",
            Self::KiB => "KiB",
            Self::MiB => "MiB",
            Self::GiB => "GiB",
            Self::TiB => "TiB",
            Self::PiB => "PiB",
            Self::EiB => "EiB",
            Self::ZiB => "ZiB",
            Self::YiB => "YiB",
        }
    }

    /// Expresses `bytes` in this unit.
    #[must_use]
    pub fn scale(self, bytes: f64) -> f64 {
        bytes / self.factor()
    }
}

impl UnitSystem {
    /// Units in ascending order.
    #[must_use]
    pub const fn units(self) -> &'static [ByteUnit] {
        match self {
            Self::Si => &SI,
            Self::Iec => &IEC,
        }
    }

    /// Picks a unit for `bytes`.
    ///
    /// Each unit's threshold is the factor of the unit above it. The first unit
    /// whose threshold exceeds `bytes` wins; values past every threshold (and
    /// NaN) use the largest unit.
    #[must_use]
    pub fn auto(self, bytes: f64) -> ByteUnit {
        let units = self.units();
        units
            .windows(2)
            .find(|pair| pair[1].factor() > bytes)
            .map_or(units[units.len() - 1], |pair| pair[0])
    }
}

#[cfg(test)]
mod tests {
    use super::{ByteUnit, UnitSystem};

    #[test]
    fn test_auto_scan() {
        assert_eq!(UnitSystem::Iec.auto(0.0), ByteUnit::B);
        assert_eq!(UnitSystem::Iec.auto(1023.0), ByteUnit::B);
        assert_eq!(UnitSystem::Iec.auto(1024.0), ByteUnit::KiB);
        assert_eq!(UnitSystem::Iec.auto(5.0 * 1024.0 * 1024.0), ByteUnit::MiB);
        assert_eq!(UnitSystem::Si.auto(999.0), ByteUnit::B);
        assert_eq!(UnitSystem::Si.auto(1500.0), ByteUnit::KB);
    }

    #[test]
    fn test_auto_falls_back_to_largest() {
        assert_eq!(UnitSystem::Si.auto(1e30), ByteUnit::YB);
        assert_eq!(UnitSystem::Iec.auto(f64::INFINITY), ByteUnit::YiB);
        assert_eq!(UnitSystem::Iec.auto(f64::NAN), ByteUnit::YiB);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_scale() {
        assert_eq!(ByteUnit::KiB.scale(2048.0), 2.0);
        assert_eq!(ByteUnit::MB.label(), "MB");
    }
}
