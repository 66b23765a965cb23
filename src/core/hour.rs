use std::fmt::{Display, Formatter};

use crate::core::error::Error;

/// Hour of the day, `0..=23`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct Hour(u8);

impl Hour {
    pub const N_HOURS: usize = 24;

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0..24).map(Self)
    }
}

impl TryFrom<u8> for Hour {
    type Error = Error;

    fn try_from(hour: u8) -> Result<Self, Self::Error> {
        if usize::from(hour) < Self::N_HOURS {
            Ok(Self(hour))
        } else {
            Err(Error::InvalidParameter { name: "hour", value: f64::from(hour) })
        }
    }
}

impl Display for Hour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}
