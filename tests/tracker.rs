#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use std::fs;
    use test_context::{test_context, TestContext};
    use timer::libs::entry::Entry;
    use timer::libs::error::{Conflict, TimerError};
    use timer::libs::timer::Transition;
    use timer::libs::tracker::Tracker;
    use timer::store::{JsonStore, TimerStore};

    struct TrackerTestContext {
        _temp_dir: tempfile::TempDir,
        tracker: Tracker<JsonStore>,
    }

    impl TestContext for TrackerTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = JsonStore::new(temp_dir.path()).unwrap();
            TrackerTestContext {
                _temp_dir: temp_dir,
                tracker: Tracker::new(store),
            }
        }
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    fn seed_entries(tracker: &Tracker<JsonStore>, ids: &[&str]) {
        let entries: Vec<Entry> = ids
            .iter()
            .map(|id| Entry::from_parts(*id, "Seeded", "", at(9, 0, 0), at(9, 15, 0), vec![], vec![]).unwrap())
            .collect();
        tracker.store().save_entries(&entries).unwrap();
    }

    fn is_no_active_timer<T>(result: Result<T, TimerError>) -> bool {
        matches!(result, Err(TimerError::Conflict(Conflict::NoActiveTimer)))
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_start_persists_timer(ctx: &mut TrackerTestContext) {
        let timer = ctx.tracker.start("Write docs", "README", vec!["docs".to_string()]).unwrap();

        let stored = ctx.tracker.active().unwrap().unwrap();
        assert_eq!(stored, timer);
        assert_eq!(stored.task_name(), "Write docs");
        assert!(!stored.is_paused());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_second_start_conflicts(ctx: &mut TrackerTestContext) {
        ctx.tracker.start("First", "", vec![]).unwrap();

        match ctx.tracker.start("Second", "", vec![]) {
            Err(TimerError::Conflict(Conflict::AlreadyRunning { task_name })) => assert_eq!(task_name, "First"),
            other => panic!("expected conflict, got {:?}", other),
        }
        assert_eq!(ctx.tracker.active().unwrap().unwrap().task_name(), "First");
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_start_while_paused_conflicts(ctx: &mut TrackerTestContext) {
        ctx.tracker.start("First", "", vec![]).unwrap();
        ctx.tracker.pause().unwrap();

        assert!(matches!(
            ctx.tracker.start("Second", "", vec![]),
            Err(TimerError::Conflict(Conflict::AlreadyRunning { .. }))
        ));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_empty_task_name_is_rejected(ctx: &mut TrackerTestContext) {
        assert!(matches!(ctx.tracker.start("   ", "", vec![]), Err(TimerError::InvalidInput(_))));
        assert!(ctx.tracker.active().unwrap().is_none());
        assert!(!ctx.tracker.store().active_path().exists());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_operations_without_timer(ctx: &mut TrackerTestContext) {
        assert!(is_no_active_timer(ctx.tracker.pause()));
        assert!(is_no_active_timer(ctx.tracker.resume()));
        assert!(is_no_active_timer(ctx.tracker.stop()));
        assert!(ctx.tracker.entries().unwrap().is_empty());
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_pause_and_resume_transitions(ctx: &mut TrackerTestContext) {
        ctx.tracker.start("Focus", "", vec![]).unwrap();

        let (timer, transition) = ctx.tracker.pause().unwrap();
        assert_eq!(transition, Transition::Applied);
        assert!(timer.is_paused());
        assert!(ctx.tracker.active().unwrap().unwrap().is_paused());

        let (_, transition) = ctx.tracker.pause().unwrap();
        assert_eq!(transition, Transition::Unchanged);

        let (timer, transition) = ctx.tracker.resume().unwrap();
        assert_eq!(transition, Transition::Applied);
        assert!(!timer.is_paused());
        assert_eq!(timer.pauses().len(), 1);

        let (_, transition) = ctx.tracker.resume().unwrap();
        assert_eq!(transition, Transition::Unchanged);
        assert_eq!(ctx.tracker.active().unwrap().unwrap().pauses().len(), 1);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_full_workflow(ctx: &mut TrackerTestContext) {
        ctx.tracker.start("Review", "PR #7", vec!["code".to_string()]).unwrap();
        ctx.tracker.pause().unwrap();
        ctx.tracker.resume().unwrap();
        ctx.tracker.pause().unwrap();

        let entry = ctx.tracker.stop().unwrap();

        assert_eq!(entry.task_name(), "Review");
        assert_eq!(entry.description(), "PR #7");
        assert_eq!(entry.tags(), ["code".to_string()]);
        assert_eq!(entry.pauses().len(), 2);
        assert!(entry.pauses().iter().all(|p| p.is_closed()));
        assert!(entry.duration_seconds() >= 0);

        assert!(ctx.tracker.active().unwrap().is_none());
        assert!(!ctx.tracker.store().active_path().exists());
        assert_eq!(ctx.tracker.entries().unwrap(), vec![entry.clone()]);
        assert_eq!(ctx.tracker.last_entry().unwrap(), Some(entry));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_stop_appends_after_existing_entries(ctx: &mut TrackerTestContext) {
        seed_entries(&ctx.tracker, &["older-entry"]);
        ctx.tracker.start("Newer", "", vec![]).unwrap();

        let entry = ctx.tracker.stop().unwrap();

        let entries = ctx.tracker.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id(), "older-entry");
        assert_eq!(entries[1].id(), entry.id());
        assert_eq!(entry.id().len(), 36);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_find_by_prefix(ctx: &mut TrackerTestContext) {
        seed_entries(&ctx.tracker, &["abc11111", "def22222"]);

        assert_eq!(ctx.tracker.find("def").unwrap().id(), "def22222");
        assert!(matches!(ctx.tracker.find("zzz"), Err(TimerError::NotFound { .. })));
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_delete_unique_prefix(ctx: &mut TrackerTestContext) {
        seed_entries(&ctx.tracker, &["abc11111", "def22222"]);

        let deleted = ctx.tracker.delete("abc").unwrap();

        assert_eq!(deleted.id(), "abc11111");
        let remaining: Vec<String> = ctx.tracker.entries().unwrap().iter().map(|e| e.id().to_string()).collect();
        assert_eq!(remaining, vec!["def22222"]);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_ambiguous_delete_changes_nothing(ctx: &mut TrackerTestContext) {
        seed_entries(&ctx.tracker, &["abc11111", "abc22222", "def33333"]);
        let before = fs::read(ctx.tracker.store().entries_path()).unwrap();

        match ctx.tracker.delete("abc") {
            Err(TimerError::Ambiguous { prefix, candidates }) => {
                assert_eq!(prefix, "abc");
                assert_eq!(candidates, vec!["abc11111".to_string(), "abc22222".to_string()]);
            }
            other => panic!("expected ambiguous prefix, got {:?}", other),
        }

        assert_eq!(fs::read(ctx.tracker.store().entries_path()).unwrap(), before);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_delete_with_empty_id_changes_nothing(ctx: &mut TrackerTestContext) {
        seed_entries(&ctx.tracker, &["abc"]);

        assert!(matches!(ctx.tracker.delete(""), Err(TimerError::InvalidInput(_))));
        assert_eq!(ctx.tracker.entries().unwrap().len(), 1);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_delete_unknown_prefix(ctx: &mut TrackerTestContext) {
        seed_entries(&ctx.tracker, &["abc11111"]);
        let before = fs::read(ctx.tracker.store().entries_path()).unwrap();

        assert!(matches!(ctx.tracker.delete("xyz"), Err(TimerError::NotFound { .. })));
        assert_eq!(fs::read(ctx.tracker.store().entries_path()).unwrap(), before);
    }

    #[test_context(TrackerTestContext)]
    #[test]
    fn test_exact_id_wins_over_longer_match(ctx: &mut TrackerTestContext) {
        seed_entries(&ctx.tracker, &["abc", "abcdef"]);

        assert_eq!(ctx.tracker.delete("abc").unwrap().id(), "abc");
        assert_eq!(ctx.tracker.entries().unwrap().len(), 1);
    }
}
