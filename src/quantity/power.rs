use std::ops::Mul;

use crate::quantity::{energy::KilowattHours, specific_yield::SpecificYield};

quantity!(KilowattsPeak, suffix: "kWp", precision: 1);

impl Mul<SpecificYield> for KilowattsPeak {
    type Output = KilowattHours;

    fn mul(self, rhs: SpecificYield) -> Self::Output {
        KilowattHours(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy() {
        assert_eq!(KilowattsPeak(10.0) * SpecificYield(150.0), KilowattHours(1500.0));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("12.5".parse::<KilowattsPeak>().unwrap(), KilowattsPeak(12.5));
    }
}
