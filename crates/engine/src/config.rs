//! Clock configuration, read from environment variables.
//!
//! - `SCLOCK_REFRESH_MS`: redraw cadence in milliseconds (default 1000)
//! - `SCLOCK_12H`: `1`/`true` for a 12-hour clock
//! - `SCLOCK_HIDE_DATE`: `1`/`true` to start with the date hidden
//! - `SCLOCK_COLOR`: starting color pair, 1..=4 (default 1)
//! - `NO_COLOR`: any non-empty value disables color pairs
//! - `SCLOCK_ASCII`: `1`/`true` forces the ASCII charset
//! - `SCLOCK_LOG_PATH`: write logs to this file (logging is off otherwise)
//! - `SCLOCK_LOG`: log filter, e.g. `debug` (default `info`)

use std::time::Duration;

use crate::core::HourFormat;
use crate::term::Charset;
use crate::types::{ColorIndex, REFRESH_MS};

#[derive(Debug, Clone, PartialEq)]
pub struct ClockConfig {
    pub refresh_ms: u64,
    pub hours: HourFormat,
    pub show_date: bool,
    pub start_color: ColorIndex,
    pub colors_enabled: bool,
    pub charset: Charset,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            refresh_ms: REFRESH_MS,
            hours: HourFormat::H24,
            show_date: true,
            start_color: ColorIndex::default(),
            colors_enabled: true,
            charset: Charset::UNICODE,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl ClockConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let refresh_ms = lookup("SCLOCK_REFRESH_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(|ms| ms.max(1))
            .unwrap_or(defaults.refresh_ms);

        let hours = if flag(&lookup, "SCLOCK_12H") {
            HourFormat::H12
        } else {
            HourFormat::H24
        };

        let start_color = lookup("SCLOCK_COLOR")
            .and_then(|s| s.trim().parse::<u8>().ok())
            .and_then(ColorIndex::new)
            .unwrap_or(defaults.start_color);

        let colors_enabled = lookup("NO_COLOR").map_or(true, |v| v.is_empty());

        let charset = if flag(&lookup, "SCLOCK_ASCII") || !locale_is_utf8(&lookup) {
            Charset::ASCII
        } else {
            Charset::UNICODE
        };

        let log_path = lookup("SCLOCK_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_filter = lookup("SCLOCK_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            refresh_ms,
            hours,
            show_date: !flag(&lookup, "SCLOCK_HIDE_DATE"),
            start_color,
            colors_enabled,
            charset,
            log_path,
            log_filter,
        }
    }

    pub fn refresh(&self) -> Duration {
        Duration::from_millis(self.refresh_ms)
    }
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> bool {
    lookup(key)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Whether the effective `LC_CTYPE` names a UTF-8 codeset.
///
/// Precedence follows POSIX: `LC_ALL`, then `LC_CTYPE`, then `LANG`.
pub fn locale_is_utf8(lookup: &impl Fn(&str) -> Option<String>) -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .filter_map(|key| lookup(key))
        .find(|v| !v.is_empty())
        .map(|v| {
            let v = v.to_ascii_lowercase();
            v.contains("utf-8") || v.contains("utf8")
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> ClockConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClockConfig::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn defaults_with_utf8_locale() {
        let c = config(&[("LANG", "en_US.UTF-8")]);
        assert_eq!(c.refresh_ms, 1000);
        assert_eq!(c.hours, HourFormat::H24);
        assert!(c.show_date);
        assert_eq!(c.start_color.get(), 1);
        assert!(c.colors_enabled);
        assert_eq!(c.charset, Charset::UNICODE);
        assert_eq!(c.log_path, None);
        assert_eq!(c.log_filter, "info");
    }

    #[test]
    fn non_utf8_locale_falls_back_to_ascii() {
        assert_eq!(config(&[]).charset, Charset::ASCII);
        assert_eq!(config(&[("LANG", "C")]).charset, Charset::ASCII);
        // LC_ALL wins over LANG.
        assert_eq!(
            config(&[("LC_ALL", "POSIX"), ("LANG", "en_US.UTF-8")]).charset,
            Charset::ASCII
        );
        assert_eq!(config(&[("LC_CTYPE", "de_DE.utf8")]).charset, Charset::UNICODE);
    }

    #[test]
    fn ascii_can_be_forced() {
        let c = config(&[("LANG", "en_US.UTF-8"), ("SCLOCK_ASCII", "true")]);
        assert_eq!(c.charset, Charset::ASCII);
    }

    #[test]
    fn overrides_are_parsed() {
        let c = config(&[
            ("SCLOCK_REFRESH_MS", "250"),
            ("SCLOCK_12H", "1"),
            ("SCLOCK_HIDE_DATE", "TRUE"),
            ("SCLOCK_COLOR", "3"),
            ("NO_COLOR", "1"),
            ("SCLOCK_LOG_PATH", " /tmp/sclock.log "),
            ("SCLOCK_LOG", "debug"),
        ]);
        assert_eq!(c.refresh(), Duration::from_millis(250));
        assert_eq!(c.hours, HourFormat::H12);
        assert!(!c.show_date);
        assert_eq!(c.start_color.get(), 3);
        assert!(!c.colors_enabled);
        assert_eq!(c.log_path.as_deref(), Some("/tmp/sclock.log"));
        assert_eq!(c.log_filter, "debug");
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let c = config(&[
            ("SCLOCK_REFRESH_MS", "soon"),
            ("SCLOCK_COLOR", "9"),
            ("NO_COLOR", ""),
            ("SCLOCK_LOG_PATH", "   "),
        ]);
        assert_eq!(c.refresh_ms, 1000);
        assert_eq!(c.start_color.get(), 1);
        assert!(c.colors_enabled);
        assert_eq!(c.log_path, None);
    }

    #[test]
    fn zero_refresh_is_clamped() {
        assert_eq!(config(&[("SCLOCK_REFRESH_MS", "0")]).refresh_ms, 1);
    }
}
