#[cfg(test)]
mod tests {
    use chrono::{Days, Duration, NaiveDate, NaiveDateTime};
    use std::sync::Arc;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todobell::db::{db::Db, tasks::Tasks};
    use todobell::libs::clock::ManualClock;
    use todobell::libs::stats::{completion_rate, MAX_STATS_DAYS};
    use todobell::libs::task::{NewTask, Priority};

    struct StatsTestContext {
        _temp_dir: TempDir,
        clock: Arc<ManualClock>,
        tasks: Tasks,
    }

    impl TestContext for StatsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let clock = Arc::new(ManualClock::new(start()));
            let db = Db::open(temp_dir.path().join("todobell.db")).unwrap();
            let tasks = Tasks::with_clock(db, clock.clone());
            StatsTestContext {
                _temp_dir: temp_dir,
                clock,
                tasks,
            }
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    fn start() -> NaiveDateTime {
        today().and_hms_opt(10, 0, 0).unwrap()
    }

    fn add(ctx: &mut StatsTestContext, priority: &str) -> i64 {
        ctx.tasks.insert(&NewTask::new("task").priority(priority)).unwrap()
    }

    #[test]
    fn test_completion_rate_rounding() {
        assert_eq!(completion_rate(0, 0), 0.0);
        assert_eq!(completion_rate(1, 3), 33.3);
        assert_eq!(completion_rate(2, 3), 66.7);
        assert_eq!(completion_rate(4, 4), 100.0);
    }

    #[test_context(StatsTestContext)]
    #[test]
    fn test_completion_statistics_on_empty_store(ctx: &mut StatsTestContext) {
        let stats = ctx.tasks.completion_statistics().unwrap();

        assert_eq!(stats.len(), 3);
        for priority in Priority::ALL {
            let entry = stats.get(priority);
            assert_eq!(entry.total, 0);
            assert_eq!(entry.completed, 0);
            assert_eq!(entry.completion_rate, 0.0);
            assert_eq!(entry.label, priority.label());
        }
    }

    #[test_context(StatsTestContext)]
    #[test]
    fn test_completion_statistics_per_priority(ctx: &mut StatsTestContext) {
        let high = [add(ctx, "high"), add(ctx, "high"), add(ctx, "high")];
        add(ctx, "low");
        let low_done = add(ctx, "low");

        ctx.tasks.complete(high[0]).unwrap();
        ctx.tasks.complete(low_done).unwrap();

        let stats = ctx.tasks.completion_statistics().unwrap();
        assert_eq!(stats.len(), 3);

        let high = stats.get(Priority::High);
        assert_eq!((high.total, high.completed, high.pending), (3, 1, 2));
        assert_eq!(high.completion_rate, 33.3);

        let medium = stats.get(Priority::Medium);
        assert_eq!((medium.total, medium.completed), (0, 0));

        let low = stats.get(Priority::Low);
        assert_eq!(low.completion_rate, 50.0);

        for (_, entry) in stats.iter() {
            assert!(entry.completed <= entry.total);
        }
    }

    #[test_context(StatsTestContext)]
    #[test]
    fn test_completion_statistics_json_keys(ctx: &mut StatsTestContext) {
        add(ctx, "medium");
        let json = serde_json::to_value(ctx.tasks.completion_statistics().unwrap()).unwrap();

        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(json["medium"]["total"], 1);
        assert_eq!(json["high"]["label"], "High priority");
        assert_eq!(json["medium"]["label"], "Medium priority");
        assert_eq!(json["low"]["label"], "Low priority");
    }

    #[test_context(StatsTestContext)]
    #[test]
    fn test_daily_stats_without_completions(ctx: &mut StatsTestContext) {
        add(ctx, "high");

        let daily = ctx.tasks.daily_completion_stats(3).unwrap();
        let dates: Vec<NaiveDate> = daily.iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            vec![today() - Days::new(2), today() - Days::new(1), today()]
        );
        assert!(daily.iter().all(|d| d.total == 0 && d.high == 0 && d.medium == 0 && d.low == 0));
    }

    #[test_context(StatsTestContext)]
    #[test]
    fn test_daily_stats_groups_by_completion_day(ctx: &mut StatsTestContext) {
        // Completed two days ago
        ctx.clock.set(start() - Duration::days(2));
        let a = add(ctx, "high");
        let b = add(ctx, "low");
        ctx.tasks.complete(a).unwrap();
        ctx.tasks.complete(b).unwrap();

        // Created two days ago, completed today
        let c = add(ctx, "medium");
        ctx.clock.set(start());
        ctx.tasks.complete(c).unwrap();

        // Completed long before the window
        ctx.clock.set(start() - Duration::days(20));
        let old = add(ctx, "high");
        ctx.tasks.complete(old).unwrap();
        ctx.clock.set(start());

        let daily = ctx.tasks.daily_completion_stats(7).unwrap();
        assert_eq!(daily.len(), 7);
        assert_eq!(daily.last().unwrap().date, today());

        let two_days_ago = &daily[4];
        assert_eq!(two_days_ago.date, today() - Days::new(2));
        assert_eq!((two_days_ago.high, two_days_ago.medium, two_days_ago.low), (1, 0, 1));
        assert_eq!(two_days_ago.total, 2);

        let today_entry = &daily[6];
        assert_eq!((today_entry.medium, today_entry.total), (1, 1));

        let sum: u64 = daily.iter().map(|d| d.total).sum();
        assert_eq!(sum, 3);
    }

    #[test_context(StatsTestContext)]
    #[test]
    fn test_daily_stats_days_are_clamped(ctx: &mut StatsTestContext) {
        assert_eq!(ctx.tasks.daily_completion_stats(365).unwrap().len(), MAX_STATS_DAYS as usize);
        assert_eq!(ctx.tasks.daily_completion_stats(1).unwrap().len(), 1);
        assert!(ctx.tasks.daily_completion_stats(0).unwrap().is_empty());
    }

    #[test_context(StatsTestContext)]
    #[test]
    fn test_overall_statistics(ctx: &mut StatsTestContext) {
        // Yesterday: two tasks, one completed yesterday
        ctx.clock.set(start() - Duration::days(1));
        let old_done = add(ctx, "low");
        add(ctx, "low");
        ctx.tasks.complete(old_done).unwrap();

        // Today: three tasks, one due soon, one completed
        ctx.clock.set(start());
        let done_today = add(ctx, "high");
        ctx.tasks
            .insert(&NewTask::new("due soon").due(start() + Duration::hours(2)))
            .unwrap();
        ctx.tasks
            .insert(&NewTask::new("due next week").due(start() + Duration::days(7)))
            .unwrap();
        ctx.tasks.complete(done_today).unwrap();

        let overall = ctx.tasks.overall_statistics().unwrap();
        assert_eq!(overall.total_tasks, 5);
        assert_eq!(overall.completed_tasks, 2);
        assert_eq!(overall.pending_tasks, 3);
        assert_eq!(overall.today_completed, 1);
        assert_eq!(overall.today_added, 3);
        assert_eq!(overall.upcoming_tasks, 1);
        assert_eq!(overall.overall_completion_rate, 40.0);
    }

    #[test_context(StatsTestContext)]
    #[test]
    fn test_overall_statistics_on_empty_store(ctx: &mut StatsTestContext) {
        let overall = ctx.tasks.overall_statistics().unwrap();
        assert_eq!(overall.total_tasks, 0);
        assert_eq!(overall.pending_tasks, 0);
        assert_eq!(overall.overall_completion_rate, 0.0);
    }
}
