#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
    use todobell::libs::formatter::{format_due, format_minutes};
    use todobell::libs::task::{floor_minutes, format_timestamp, parse_timestamp, DueTimeEdit, Priority, Task};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_parse_accepts_form_and_iso_variants() {
        assert_eq!(parse_timestamp("2025-06-01T18:30"), Some(at(18, 30, 0)));
        assert_eq!(parse_timestamp("2025-06-01 18:30"), Some(at(18, 30, 0)));
        assert_eq!(parse_timestamp("2025-06-01T18:30:15"), Some(at(18, 30, 15)));
        assert_eq!(parse_timestamp("  2025-06-01 18:30:15  "), Some(at(18, 30, 15)));

        let fractional = parse_timestamp("2025-06-01T18:30:15.250000").unwrap();
        assert_eq!(fractional, at(18, 30, 15) + TimeDelta::milliseconds(250));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("tomorrow"), None);
        assert_eq!(parse_timestamp("2025-06-01"), None);
        assert_eq!(parse_timestamp("2025-13-01 10:00"), None);
    }

    #[test]
    fn test_format_is_read_back_unchanged() {
        let ts = at(9, 5, 7) + TimeDelta::microseconds(123_456);
        assert_eq!(parse_timestamp(&format_timestamp(&ts)), Some(ts));
        assert_eq!(format_timestamp(&at(9, 5, 7)), "2025-06-01T09:05:07");
    }

    #[test]
    fn test_floor_minutes() {
        assert_eq!(floor_minutes(TimeDelta::seconds(600)), 10);
        assert_eq!(floor_minutes(TimeDelta::seconds(659)), 10);
        assert_eq!(floor_minutes(TimeDelta::seconds(59)), 0);
        assert_eq!(floor_minutes(TimeDelta::seconds(-1)), -1);
    }

    #[test]
    fn test_priority_parse_and_coerce() {
        assert_eq!(Priority::parse("high"), Some(Priority::High));
        assert_eq!(Priority::parse("HIGH"), None);
        assert_eq!(Priority::coerce("urgent"), Priority::Medium);
        assert_eq!(Priority::coerce("low"), Priority::Low);
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(Priority::High.label(), "High priority");
    }

    #[test]
    fn test_due_time_edit_from_input() {
        assert_eq!(DueTimeEdit::from_input(None), DueTimeEdit::Keep);
        assert_eq!(DueTimeEdit::from_input(Some("")), DueTimeEdit::Clear);
        assert_eq!(DueTimeEdit::from_input(Some("2025-06-01 18:30")), DueTimeEdit::Set(at(18, 30, 0)));
        assert_eq!(DueTimeEdit::from_input(Some("soon")), DueTimeEdit::Keep);
    }

    #[test]
    fn test_time_left_only_for_pending_tasks_with_due_time() {
        let mut task = Task {
            id: 1,
            description: "Water plants".to_string(),
            priority: Priority::Low,
            completed: false,
            created_at: at(8, 0, 0),
            updated_at: at(8, 0, 0),
            due_time: Some("2025-06-01T12:30:00".to_string()),
        };
        assert_eq!(task.time_left(at(12, 0, 0)), Some(TimeDelta::minutes(30)));

        task.due_time = Some("not a date".to_string());
        assert_eq!(task.time_left(at(12, 0, 0)), None);
        assert_eq!(format_due(&task), "not a date (?)");

        task.due_time = Some("2025-06-01T12:30:00".to_string());
        task.completed = true;
        assert_eq!(task.time_left(at(12, 0, 0)), None);
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(90), "01:30");
        assert_eq!(format_minutes(24 * 60), "24:00");
        assert_eq!(format_minutes(-3), "00:00");
    }
}
