//! Broken-down date/time value for datetime cell writes.

/// A calendar date plus wall-clock time, as the legacy host supplies it.
///
/// Fields are deliberately unvalidated; the engine decides how (or whether) to
/// reject out-of-range components, the same way it owns row/column bounds.
/// Seconds are fractional to preserve sub-second precision from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateTime {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub min: i32,
    pub sec: f64,
}

impl DateTime {
    /// Build a value from broken-down components.
    pub fn new(year: i32, month: i32, day: i32, hour: i32, min: i32, sec: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            min,
            sec,
        }
    }
}
