const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Format a millisecond timestamp as `HH:MM:SS.mmm` wall-clock time.
///
/// `offset_minutes` is added to UTC, so pass the negated
/// `Date.getTimezoneOffset()` to get local time.
pub fn format_clock(timestamp_ms: u64, offset_minutes: i64) -> String {
    let shifted = timestamp_ms as i64 + offset_minutes * 60_000;
    let ms_of_day = shifted.rem_euclid(MS_PER_DAY);
    let hours = ms_of_day / 3_600_000;
    let minutes = ms_of_day / 60_000 % 60;
    let seconds = ms_of_day / 1000 % 60;
    let millis = ms_of_day % 1000;
    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
}

#[cfg(test)]
mod tests {
    use super::format_clock;

    #[test]
    fn epoch_is_midnight_utc() {
        assert_eq!(format_clock(0, 0), "00:00:00.000");
    }

    #[test]
    fn offset_wraps_around_midnight() {
        // 00:30 UTC in UTC-1 is 23:30 the day before
        assert_eq!(format_clock(30 * 60_000, -60), "23:30:00.000");
        assert_eq!(format_clock(1_234, 330), "05:30:01.234");
    }
}
