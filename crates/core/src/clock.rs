//! Time source abstraction and the clock's string formats.
//!
//! The formatted strings are a contract with the glyph renderer: time is
//! always `HH:MM:SS` (eight characters) and the date is `YYYY-MM-DD`.

use std::fmt::{self, Write};

use arrayvec::ArrayString;
use chrono::{Datelike, Local, Timelike};

/// Fixed-capacity buffer for one formatted clock string.
pub type ClockText = ArrayString<64>;

/// Local calendar fields sampled from a time source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockReading {
    /// 0..=23
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// 1..=366
    pub day_of_year: u32,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Source of wall-clock readings.
pub trait TimeSource {
    fn now(&mut self) -> ClockReading;
}

/// Reads the system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&mut self) -> ClockReading {
        let now = Local::now();
        ClockReading {
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
            day_of_year: now.ordinal(),
            year: now.year(),
            month: now.month(),
            day: now.day(),
        }
    }
}

/// Always returns the same reading. Useful for headless rendering and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock(pub ClockReading);

impl TimeSource for FixedClock {
    fn now(&mut self) -> ClockReading {
        self.0
    }
}

/// 24-hour (`%H`) or 12-hour (`%I`) display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HourFormat {
    #[default]
    H24,
    H12,
}

impl HourFormat {
    pub fn display_hour(self, hour: u32) -> u32 {
        match self {
            HourFormat::H24 => hour,
            HourFormat::H12 => match hour % 12 {
                0 => 12,
                h => h,
            },
        }
    }
}

/// Write `HH:MM:SS` into `out`, replacing its contents.
pub fn format_time(reading: &ClockReading, hours: HourFormat, out: &mut ClockText) -> fmt::Result {
    out.clear();
    write!(
        out,
        "{:02}:{:02}:{:02}",
        hours.display_hour(reading.hour),
        reading.minute,
        reading.second
    )
}

/// Write `YYYY-MM-DD` into `out`, replacing its contents.
pub fn format_date(reading: &ClockReading, out: &mut ClockText) -> fmt::Result {
    out.clear();
    write!(out, "{:04}-{:02}-{:02}", reading.year, reading.month, reading.day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(hour: u32, minute: u32, second: u32) -> ClockReading {
        ClockReading {
            hour,
            minute,
            second,
            day_of_year: 32,
            year: 2024,
            month: 2,
            day: 1,
        }
    }

    #[test]
    fn time_is_zero_padded() {
        let mut out = ClockText::new();
        format_time(&reading(1, 2, 3), HourFormat::H24, &mut out).unwrap();
        assert_eq!(out.as_str(), "01:02:03");
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn twelve_hour_clock_matches_strftime_i() {
        let mut out = ClockText::new();
        format_time(&reading(0, 5, 9), HourFormat::H12, &mut out).unwrap();
        assert_eq!(out.as_str(), "12:05:09");
        format_time(&reading(12, 0, 0), HourFormat::H12, &mut out).unwrap();
        assert_eq!(out.as_str(), "12:00:00");
        format_time(&reading(23, 59, 59), HourFormat::H12, &mut out).unwrap();
        assert_eq!(out.as_str(), "11:59:59");
    }

    #[test]
    fn formatting_replaces_previous_contents() {
        let mut out = ClockText::new();
        format_time(&reading(23, 59, 59), HourFormat::H24, &mut out).unwrap();
        format_time(&reading(0, 0, 0), HourFormat::H24, &mut out).unwrap();
        assert_eq!(out.as_str(), "00:00:00");
    }

    #[test]
    fn date_is_iso_like() {
        let mut out = ClockText::new();
        format_date(&reading(0, 0, 0), &mut out).unwrap();
        assert_eq!(out.as_str(), "2024-02-01");
    }

    #[test]
    fn fixed_clock_repeats() {
        let mut clock = FixedClock(reading(7, 8, 9));
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn local_clock_fields_are_in_range() {
        let r = LocalClock.now();
        assert!(r.hour < 24);
        assert!(r.minute < 60);
        assert!(r.second < 61);
        assert!((1..=366).contains(&r.day_of_year));
        assert!((1..=12).contains(&r.month));
        assert!((1..=31).contains(&r.day));
    }
}
