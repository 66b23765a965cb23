pub mod balance;
pub mod error;
pub mod hour;
pub mod profile;
pub mod record;
pub mod result;
pub mod scenario;
pub mod shape;
pub mod simulator;
pub mod solver;
pub mod tariff;
pub mod yields;

/// Every calendar month is projected from a typical day over a fixed number of days.
pub const DAYS_PER_MONTH: f64 = 30.0;
