quantity!(Percentage, suffix: "%", precision: 1);

impl Percentage {
    pub const HUNDRED: Self = Self(100.0);

    pub const fn to_proportion(self) -> f64 {
        self.0 / 100.0
    }
}
