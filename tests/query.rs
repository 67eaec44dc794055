#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
    use timer::libs::entry::Entry;
    use timer::libs::query::{day_end, day_start, today_start, week_start, EntryFilter, EntryQuery};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry_starting(id: &str, start: NaiveDateTime) -> Entry {
        Entry::from_parts(id, "Task", "", start, start + Duration::minutes(5), vec![], vec![]).unwrap()
    }

    fn ids(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(Entry::id).collect()
    }

    #[test]
    fn test_today_start() {
        let now = date(2025, 1, 15).and_hms_opt(14, 30, 15).unwrap();
        assert_eq!(today_start(now), date(2025, 1, 15).and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_week_start_is_monday_midnight() {
        let monday = date(2025, 1, 13).and_hms_opt(0, 0, 0).unwrap();
        // Wednesday, Sunday and Monday itself all belong to the week of the 13th.
        assert_eq!(week_start(date(2025, 1, 15).and_hms_opt(10, 0, 0).unwrap()), monday);
        assert_eq!(week_start(date(2025, 1, 19).and_hms_opt(23, 59, 59).unwrap()), monday);
        assert_eq!(week_start(date(2025, 1, 13).and_hms_opt(8, 0, 0).unwrap()), monday);
    }

    #[test]
    fn test_since_midnight_boundary() {
        let now = date(2025, 1, 15).and_hms_opt(14, 0, 0).unwrap();
        let midnight = today_start(now);
        let entries = vec![
            entry_starting("before", midnight - Duration::seconds(1)),
            entry_starting("at", midnight),
            entry_starting("after", midnight + Duration::hours(9)),
        ];

        assert_eq!(ids(&entries.since(midnight)), vec!["at", "after"]);
    }

    #[test]
    fn test_today_uses_local_midnight() {
        let midnight = today_start(Local::now().naive_local());
        let entries = vec![
            entry_starting("yesterday", midnight - Duration::seconds(1)),
            entry_starting("today", midnight),
        ];

        assert_eq!(ids(&entries.today()), vec!["today"]);
    }

    #[test]
    fn test_this_week_excludes_previous_week() {
        let monday = week_start(Local::now().naive_local());
        let entries = vec![
            entry_starting("last-week", monday - Duration::seconds(1)),
            entry_starting("this-week", monday),
        ];

        assert_eq!(ids(&entries.this_week()), vec!["this-week"]);
    }

    #[test]
    fn test_between_is_inclusive() {
        let from = date(2025, 1, 10).and_hms_opt(9, 0, 0).unwrap();
        let to = date(2025, 1, 12).and_hms_opt(17, 0, 0).unwrap();
        let entries = vec![
            entry_starting("too-early", from - Duration::seconds(1)),
            entry_starting("from", from),
            entry_starting("inside", from + Duration::days(1)),
            entry_starting("to", to),
            entry_starting("too-late", to + Duration::seconds(1)),
        ];

        assert_eq!(ids(&entries.between(from, to)), vec!["from", "inside", "to"]);
    }

    #[test]
    fn test_filters_compose() {
        let base = date(2025, 1, 10).and_hms_opt(12, 0, 0).unwrap();
        let entries = vec![
            entry_starting("a", base),
            entry_starting("b", base + Duration::days(1)),
            entry_starting("c", base + Duration::days(2)),
        ];

        let selected = entries.since(base + Duration::hours(1)).between(base, base + Duration::days(1));
        assert_eq!(ids(&selected), vec!["b"]);
    }

    #[test]
    fn test_filters_keep_order() {
        let base = date(2025, 1, 10).and_hms_opt(12, 0, 0).unwrap();
        let entries = vec![
            entry_starting("late", base + Duration::days(2)),
            entry_starting("early", base),
        ];

        assert_eq!(ids(&entries.since(base)), vec!["late", "early"]);
    }

    #[test]
    fn test_day_bounds() {
        let day = date(2025, 1, 15);
        assert_eq!(day_start(day), day.and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(day_end(day), day.and_hms_nano_opt(23, 59, 59, 999_999_999).unwrap());
    }

    #[test]
    fn test_day_end_of_last_representable_date() {
        assert_eq!(day_end(NaiveDate::MAX), NaiveDate::MAX.and_hms_nano_opt(23, 59, 59, 999_999_999).unwrap());
        assert_eq!(
            EntryFilter::from_flags(false, false, None, Some(NaiveDate::MAX)),
            EntryFilter::Range(NaiveDateTime::MIN, day_end(NaiveDate::MAX))
        );
    }

    #[test]
    fn test_filter_from_flags() {
        assert_eq!(EntryFilter::from_flags(false, false, None, None), EntryFilter::All);
        assert_eq!(EntryFilter::from_flags(true, false, None, None), EntryFilter::Today);
        assert_eq!(EntryFilter::from_flags(false, true, None, None), EntryFilter::Week);

        let from = date(2025, 1, 10);
        let to = date(2025, 1, 12);
        assert_eq!(
            EntryFilter::from_flags(false, false, Some(from), Some(to)),
            EntryFilter::Range(day_start(from), day_end(to))
        );
        assert_eq!(
            EntryFilter::from_flags(false, false, Some(from), None),
            EntryFilter::Range(day_start(from), NaiveDateTime::MAX)
        );
    }

    #[test]
    fn test_range_filter_includes_whole_last_day() {
        let entries = vec![
            entry_starting("first-day", date(2025, 1, 10).and_hms_opt(0, 0, 0).unwrap()),
            entry_starting("last-day", date(2025, 1, 12).and_hms_opt(23, 59, 59).unwrap()),
            entry_starting("next-day", date(2025, 1, 13).and_hms_opt(0, 0, 0).unwrap()),
        ];

        let filter = EntryFilter::from_flags(false, false, Some(date(2025, 1, 10)), Some(date(2025, 1, 12)));
        assert_eq!(ids(&filter.apply(entries)), vec!["first-day", "last-day"]);
    }

    #[test]
    fn test_filter_all_keeps_everything() {
        let base = date(2025, 1, 10).and_hms_opt(12, 0, 0).unwrap();
        let entries = vec![entry_starting("a", base), entry_starting("b", base)];
        assert_eq!(EntryFilter::All.apply(entries).len(), 2);
    }
}
