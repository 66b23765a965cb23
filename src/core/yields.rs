use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::{core::error::Error, quantity::specific_yield::SpecificYield};

pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Monthly specific yield of the location, January through December.
///
/// Supplied by an external irradiance source and treated as opaque: no unit conversion happens here.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct SolarYieldSeries([SpecificYield; 12]);

impl SolarYieldSeries {
    pub fn iter(&self) -> impl Iterator<Item = (Month, SpecificYield)> + '_ {
        MONTHS.into_iter().zip(self.0.iter().copied())
    }

    /// Mean monthly yield over the year.
    pub fn average(&self) -> SpecificYield {
        self.0.iter().copied().sum::<SpecificYield>() / 12.0
    }
}

impl TryFrom<Vec<f64>> for SolarYieldSeries {
    type Error = Error;

    fn try_from(yields: Vec<f64>) -> Result<Self, Self::Error> {
        let actual = yields.len();
        let yields: [f64; 12] = yields
            .try_into()
            .map_err(|_| Error::MalformedInput { what: "solar yields", expected: 12, actual })?;
        for specific_yield in yields {
            Error::ensure_non_negative("solar yield", specific_yield)?;
        }
        Ok(Self(yields.map(SpecificYield)))
    }
}

impl From<SolarYieldSeries> for Vec<f64> {
    fn from(yields: SolarYieldSeries) -> Self {
        yields.0.iter().map(|specific_yield| specific_yield.0).collect()
    }
}
