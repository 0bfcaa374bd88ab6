//! Wall-clock time of day with wrap-around arithmetic.
//!
//! Stores milliseconds since midnight and keeps every operation inside one
//! 24 h cycle, so alarm math near midnight needs no special cases. This is
//! deliberately distinct from the monotonic [`Instant`](crate::Instant)
//! used for deadlines: the wall clock may jump when it is resynchronized,
//! the monotonic clock never does.

use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use embassy_time::Duration;

/// Milliseconds in one day.
const MS_PER_DAY: u32 = 24 * 60 * 60 * 1000;

/// A time of day, stored as milliseconds since midnight.
///
/// Always normalized to `0..MS_PER_DAY`; adding or subtracting a
/// [`Duration`] wraps around midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    millis: u32,
}

impl TimeOfDay {
    /// 00:00:00.000.
    pub const MIDNIGHT: Self = Self { millis: 0 };

    /// Create from milliseconds since midnight, normalizing into one day.
    pub const fn from_millis(millis: u32) -> Self {
        Self {
            millis: millis % MS_PER_DAY,
        }
    }

    /// Create from hours, minutes and seconds, normalizing into one day.
    pub const fn from_hms(hour: u8, minute: u8, second: u8) -> Self {
        Self::from_millis(hour as u32 * 3_600_000 + minute as u32 * 60_000 + second as u32 * 1000)
    }

    /// Milliseconds since midnight.
    pub const fn as_millis(self) -> u32 {
        self.millis
    }

    /// Hour of day, `0..24`.
    pub const fn hour(self) -> u8 {
        (self.millis / 3_600_000) as u8
    }

    /// Minute of hour, `0..60`.
    pub const fn minute(self) -> u8 {
        (self.millis / 60_000 % 60) as u8
    }

    /// Second of minute, `0..60`.
    pub const fn second(self) -> u8 {
        (self.millis / 1000 % 60) as u8
    }

    /// Millisecond of second, `0..1000`.
    pub const fn millisecond(self) -> u16 {
        (self.millis % 1000) as u16
    }

    /// Whether `self` lies at `target` or within `window` after it.
    ///
    /// The distance is measured forward from `target` modulo 24 h, so a
    /// window that spans midnight (say 23:59:59.900 + 990 ms) still
    /// matches. With a 990 ms window a 100 ms poller cannot step over the
    /// match interval.
    pub const fn is_within_after(self, target: Self, window: Duration) -> bool {
        let diff = (self.millis + MS_PER_DAY - target.millis) % MS_PER_DAY;
        diff as u64 <= window.as_millis()
    }
}

impl Add<Duration> for TimeOfDay {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        let sum = (u64::from(self.millis) + rhs.as_millis()) % u64::from(MS_PER_DAY);
        Self { millis: sum as u32 }
    }
}

impl Sub<Duration> for TimeOfDay {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self {
        let day = u64::from(MS_PER_DAY);
        let back = rhs.as_millis() % day;
        let diff = (u64::from(self.millis) + day - back) % day;
        Self { millis: diff as u32 }
    }
}

impl AddAssign<Duration> for TimeOfDay {
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl SubAssign<Duration> for TimeOfDay {
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}
