use std::fmt::{Display, Formatter};

use crate::core::profile::ConsumptionProfile;

const RESIDENTIAL: [f64; 24] = [
    3.0, 2.0, 2.0, 2.0, 2.0, 3.0, 4.0, 5.0, 4.0, 3.5, 3.5, 3.5, //
    5.0, 3.5, 3.5, 3.5, 4.0, 5.5, 7.0, 8.0, 7.5, 6.0, 5.0, 4.0,
];

const INDUSTRIAL: [f64; 24] = [
    1.5, 1.5, 1.5, 1.5, 1.5, 2.0, 4.0, 6.5, 7.5, 7.5, 7.5, 7.0, //
    5.5, 7.0, 7.5, 7.5, 6.5, 4.5, 3.0, 2.5, 2.0, 1.5, 1.5, 1.5,
];

/// Canonical consumption profiles.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum ProfilePreset {
    /// Evening-peaking household consumption.
    #[default]
    Residential,

    /// Business-hours consumption.
    Industrial,

    /// Round-the-clock constant consumption.
    Flat,
}

impl ProfilePreset {
    pub const fn profile(self) -> ConsumptionProfile {
        match self {
            Self::Residential => ConsumptionProfile::new(RESIDENTIAL),
            Self::Industrial => ConsumptionProfile::new(INDUSTRIAL),
            Self::Flat => ConsumptionProfile::flat(),
        }
    }
}

impl Display for ProfilePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Residential => write!(f, "Residential"),
            Self::Industrial => write!(f, "Industrial"),
            Self::Flat => write!(f, "Flat"),
        }
    }
}
