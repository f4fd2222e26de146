//! Time display utilities: wall-clock timestamps and print durations.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

/// Formats a `Timestamp` in the system timezone as `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// A print duration in minutes, shown as `2h 05m`, `45m` or `-` when zero.
///
/// ```rust
/// use amsplan_core::display::Minutes;
///
/// assert_eq!(Minutes(125).to_string(), "2h 05m");
/// assert_eq!(Minutes(45).to_string(), "45m");
/// assert_eq!(Minutes(0).to_string(), "-");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minutes(pub u64);

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hours, minutes) = (self.0 / 60, self.0 % 60);
        match (hours, minutes) {
            (0, 0) => write!(f, "-"),
            (0, m) => write!(f, "{m}m"),
            (h, m) => write!(f, "{h}h {m:02}m"),
        }
    }
}
