#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use timer::libs::formatter::{format_date, format_datetime, format_duration, format_timestamp};

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(0), "00:00:00");
    }

    #[test]
    fn test_format_duration_seconds_and_minutes() {
        assert_eq!(format_duration(1), "00:00:01");
        assert_eq!(format_duration(59), "00:00:59");
        assert_eq!(format_duration(60), "00:01:00");
        assert_eq!(format_duration(61), "00:01:01");
        assert_eq!(format_duration(3599), "00:59:59");
    }

    #[test]
    fn test_format_duration_hours() {
        assert_eq!(format_duration(3600), "01:00:00");
        assert_eq!(format_duration(3661), "01:01:01");
        assert_eq!(format_duration(3722), "01:02:02");
    }

    #[test]
    fn test_format_duration_does_not_wrap_at_24_hours() {
        assert_eq!(format_duration(24 * 3600), "24:00:00");
        assert_eq!(format_duration(25 * 3600), "25:00:00");
        assert_eq!(format_duration(100 * 3600 + 5), "100:00:05");
    }

    #[test]
    fn test_format_duration_negative_clamped_to_zero() {
        assert_eq!(format_duration(-1), "00:00:00");
        assert_eq!(format_duration(-3600), "00:00:00");
    }

    #[test]
    fn test_timestamp_formats() {
        let ts = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(9, 5, 7).unwrap();
        assert_eq!(format_timestamp(&ts), "2025-01-15T09:05:07");
        assert_eq!(format_date(&ts), "2025-01-15");
        assert_eq!(format_datetime(&ts), "2025-01-15 09:05:07");
    }

    #[test]
    fn test_timestamp_keeps_fraction() {
        let ts = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_micro_opt(9, 5, 7, 250_000).unwrap();
        assert_eq!(format_timestamp(&ts), "2025-01-15T09:05:07.250");
    }

    #[test]
    fn test_timestamps_sort_chronologically() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let earlier = format_timestamp(&day.and_hms_opt(9, 0, 0).unwrap());
        let later = format_timestamp(&day.and_hms_opt(10, 0, 0).unwrap());
        assert!(earlier < later);
    }
}
