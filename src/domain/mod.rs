//! Domain value objects and types.
//!
//! Type-safe wrappers for domain concepts that validate at construction
//! time, so invalid values cannot be represented further in.

pub mod day_of_week;

pub use day_of_week::DayOfWeek;
