/// Errors raised by the sizing core on domain-meaningless inputs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed {what}: expected {expected} values, got {actual}")]
    MalformedInput { what: &'static str, expected: usize, actual: usize },

    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

impl Error {
    /// Reject negative and non-finite values.
    pub fn ensure_non_negative(name: &'static str, value: f64) -> Result<(), Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(Self::InvalidParameter { name, value })
        }
    }
}
