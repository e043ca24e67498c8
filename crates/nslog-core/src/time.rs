//! Timestamp utilities.

use chrono::{Local, NaiveTime, Timelike};

/// Current local wall-clock time.
pub fn now() -> NaiveTime {
    Local::now().time()
}

/// Format a time as `HH:MM:SS.mmm`, the stamp used in rendered lines.
pub fn clock_stamp(time: NaiveTime) -> String {
    // Leap seconds report nanoseconds past 999_999_999; clamp the millis.
    let millis = (time.nanosecond() / 1_000_000).min(999);
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        time.hour(),
        time.minute(),
        time.second(),
        millis
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_stamp_pads_fields() {
        let t = NaiveTime::from_hms_milli_opt(7, 4, 9, 5).unwrap();
        assert_eq!(clock_stamp(t), "07:04:09.005");

        let t = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap();
        assert_eq!(clock_stamp(t), "23:59:59.999");
    }

    #[test]
    fn test_clock_stamp_leap_second() {
        let t = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).unwrap();
        assert_eq!(clock_stamp(t), "23:59:59.999");
    }
}
