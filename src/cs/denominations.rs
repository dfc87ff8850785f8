use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use rand::Rng;

use crate::error::Error;

/// Named denomination sets, in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Canonical euro-style coins including the unit coin. Greedy is optimal.
    Canonical,
    /// The canonical set without the unit coin. Greedy fails on amounts such
    /// as 343 that the exact solver can still form.
    NoUnit,
    /// A small set paired with large random amounts for timing runs.
    Speed,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Canonical, Preset::NoUnit, Preset::Speed];

    /// Range random amounts are drawn from for [`Preset::Speed`].
    pub const SPEED_AMOUNTS: RangeInclusive<usize> = 10_000..=500_000;

    /// Denominations in ascending order.
    pub fn coins(&self) -> &'static [usize] {
        match self {
            Preset::Canonical => &[1, 2, 5, 10, 20, 50, 100, 200],
            Preset::NoUnit => &[2, 5, 10, 20, 50, 100, 200],
            Preset::Speed => &[2, 5, 10, 50],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Canonical => "canonical",
            Preset::NoUnit => "no-unit",
            Preset::Speed => "speed",
        }
    }

    /// Draws an amount suitable for timing the solvers.
    pub fn random_amount<R: Rng>(rng: &mut R) -> usize {
        rng.gen_range(Self::SPEED_AMOUNTS)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}
