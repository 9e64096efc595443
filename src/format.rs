// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Display formatting for durations, weights, rest times and dates

use chrono::{NaiveDate, NaiveDateTime};

use crate::constants::messages::DURATION_UNAVAILABLE;

/// How a missing or zero duration is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationStyle {
    /// History lists show "N/D"
    History,
    /// Inline labels show nothing
    Compact,
}

/// Format a duration given in minutes: `125` → "2 h 05 min", `45` → "45 min"
pub fn format_duration(minutes: Option<i64>, style: DurationStyle) -> String {
    match minutes {
        Some(m) if m > 0 => {
            let hours = m / 60;
            let mins = m % 60;
            if hours > 0 {
                format!("{} h {:02} min", hours, mins)
            } else {
                format!("{} min", mins)
            }
        }
        _ => match style {
            DurationStyle::History => DURATION_UNAVAILABLE.to_string(),
            DurationStyle::Compact => String::new(),
        },
    }
}

/// Format a weight in kilograms
///
/// Whole numbers drop the decimals, multiples of 0.125 (plate increments)
/// keep only the digits they need, anything else falls back to two decimals.
pub fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 {
        return format!("{}", weight as i64);
    }
    if (weight * 8.0).fract() == 0.0 {
        let fixed = format!("{:.3}", weight);
        return fixed.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    format!("{:.2}", weight)
}

/// Format a rest time: `90` → "1:30", `45` → "45s"
pub fn format_rest_time(seconds: i64) -> String {
    if seconds >= 60 {
        format!("{}:{:02}", seconds / 60, seconds % 60)
    } else {
        format!("{}s", seconds.max(0))
    }
}

/// Format a backend date (`YYYY-MM-DD[ HH:MM:SS]`) as `dd/mm/yyyy`
///
/// Unparseable input is returned unchanged.
pub fn format_workout_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return dt.format("%d/%m/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Some(125), DurationStyle::History), "2 h 05 min");
        assert_eq!(format_duration(Some(45), DurationStyle::History), "45 min");
        assert_eq!(format_duration(Some(60), DurationStyle::Compact), "1 h 00 min");
        assert_eq!(format_duration(Some(0), DurationStyle::History), "N/D");
        assert_eq!(format_duration(None, DurationStyle::History), "N/D");
        assert_eq!(format_duration(Some(0), DurationStyle::Compact), "");
        assert_eq!(format_duration(Some(-3), DurationStyle::Compact), "");
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(12.5), "12.5");
        assert_eq!(format_weight(12.125), "12.125");
        assert_eq!(format_weight(12.25), "12.25");
        assert_eq!(format_weight(12.3), "12.30");
        assert_eq!(format_weight(12.0), "12");
        assert_eq!(format_weight(0.0), "0");
    }

    #[test]
    fn test_format_rest_time() {
        assert_eq!(format_rest_time(90), "1:30");
        assert_eq!(format_rest_time(60), "1:00");
        assert_eq!(format_rest_time(45), "45s");
    }

    #[test]
    fn test_format_workout_date() {
        assert_eq!(format_workout_date("2024-03-01 18:30:00"), "01/03/2024");
        assert_eq!(format_workout_date("2024-03-01"), "01/03/2024");
        assert_eq!(format_workout_date("ieri"), "ieri");
    }
}
