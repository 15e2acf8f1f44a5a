use chrono::Duration;
use pbl_progress_engine::engine::deadline::{
    Urgency, deadline_status, format_deadline, is_overdue, overdue_tasks, refresh_overdue_flags,
    time_remaining, upcoming_deadlines, urgency,
};
use pbl_progress_engine::model::team::Task;

mod helpers;
use helpers::{at, create_test_task, now};

fn due(id: &str, offset: Duration) -> Task {
    Task {
        deadline: Some(now() + offset),
        ..create_test_task(id)
    }
}

fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.id.as_str()).collect()
}

// urgency / is_overdue

#[test]
fn test_urgency_levels() {
    let cases = [
        (Some(Duration::hours(12)), Urgency::High),
        (Some(Duration::days(2)), Urgency::Medium),
        (Some(Duration::days(3)), Urgency::Low),
        (Some(Duration::days(10)), Urgency::Low),
        (Some(Duration::hours(-1)), Urgency::Overdue),
        (None, Urgency::None),
    ];

    for (offset, expected) in cases {
        let deadline = offset.map(|offset| now() + offset);
        assert_eq!(urgency(deadline, now()), expected, "offset {offset:?}");
    }
}

#[test]
fn test_is_overdue_strictly_after_deadline() {
    assert!(is_overdue(Some(now() - Duration::seconds(1)), now()));
    assert!(!is_overdue(Some(now()), now()));
    assert!(!is_overdue(Some(now() + Duration::hours(1)), now()));
    assert!(!is_overdue(None, now()));
}

// time_remaining

#[test]
fn test_time_remaining_future() {
    let cases = [
        (Duration::days(2) + Duration::hours(5), "2 days, 5 hours"),
        (Duration::days(1) + Duration::hours(1), "1 day, 1 hour"),
        (Duration::days(4), "4 days, 0 hours"),
        (Duration::hours(3) + Duration::minutes(20), "3 hours, 20 min"),
        (Duration::hours(1) + Duration::minutes(1), "1 hour, 1 min"),
        (Duration::minutes(45), "45 minutes"),
        (Duration::seconds(90), "1 minute"),
    ];

    for (offset, expected) in cases {
        assert_eq!(time_remaining(Some(now() + offset), now()), expected);
    }
}

#[test]
fn test_time_remaining_overdue() {
    let cases = [
        (Duration::days(3) + Duration::hours(2), "Overdue by 3 days"),
        (Duration::days(1), "Overdue by 1 day"),
        (Duration::hours(2) + Duration::minutes(30), "Overdue by 2 hours"),
        (Duration::minutes(30), "Overdue"),
    ];

    for (offset, expected) in cases {
        assert_eq!(time_remaining(Some(now() - offset), now()), expected);
    }
}

#[test]
fn test_time_remaining_without_deadline() {
    assert_eq!(time_remaining(None, now()), "No deadline");
}

// format_deadline

#[test]
fn test_format_deadline_relative_days() {
    assert_eq!(
        format_deadline(Some(at("2026-03-10T15:05:00Z")), now()),
        "Today at 3:05 PM"
    );
    assert_eq!(
        format_deadline(Some(at("2026-03-10T00:00:00Z")), now()),
        "Today at 12:00 AM"
    );
    assert_eq!(
        format_deadline(Some(at("2026-03-11T09:00:00Z")), now()),
        "Tomorrow at 9:00 AM"
    );
}

#[test]
fn test_format_deadline_calendar_dates() {
    assert_eq!(
        format_deadline(Some(at("2026-03-15T15:05:00Z")), now()),
        "Mar 15, 3:05 PM"
    );
    assert_eq!(
        format_deadline(Some(at("2026-03-09T10:00:00Z")), now()),
        "Mar 9, 10:00 AM"
    );
    assert_eq!(
        format_deadline(Some(at("2027-01-05T08:30:00Z")), now()),
        "Jan 5, 2027, 8:30 AM"
    );
    assert_eq!(format_deadline(None, now()), "No deadline set");
}

#[test]
fn test_deadline_status_combines_all_views() {
    let status = deadline_status(Some(at("2026-03-11T09:00:00Z")), now());

    assert_eq!(status.urgency, Urgency::High);
    assert!(!status.overdue);
    assert_eq!(status.remaining, "21 hours, 0 min");
    assert_eq!(status.formatted, "Tomorrow at 9:00 AM");
}

// task lists

#[test]
fn test_upcoming_deadlines_window_and_order() {
    let tasks = vec![
        due("next-day", Duration::days(1)),
        due("edge", Duration::days(7)),
        due("past-window", Duration::days(7) + Duration::seconds(1)),
        due("late", Duration::days(-1)),
        create_test_task("undated"),
        due("soon", Duration::hours(3)),
    ];

    let upcoming = upcoming_deadlines(&tasks, now(), 7);

    assert_eq!(ids(&upcoming), vec!["soon", "next-day", "edge"]);
}

#[test]
fn test_upcoming_deadlines_with_huge_window() {
    let tasks = vec![
        due("next-day", Duration::days(1)),
        due("late", Duration::days(-1)),
        due("far", Duration::days(3650)),
    ];

    let upcoming = upcoming_deadlines(&tasks, now(), u32::MAX);

    assert_eq!(ids(&upcoming), vec!["next-day", "far"]);
}

#[test]
fn test_overdue_tasks_skip_completed() {
    let mut finished = due("finished", Duration::days(-2));
    finished.completed = true;
    let tasks = vec![
        due("late", Duration::days(-1)),
        finished,
        due("future", Duration::days(1)),
        create_test_task("undated"),
    ];

    assert_eq!(ids(&overdue_tasks(&tasks, now())), vec!["late"]);
}

#[test]
fn test_refresh_overdue_flags() {
    let mut stale = due("stale", Duration::days(1));
    stale.is_overdue = true;
    let mut finished = due("finished", Duration::days(-2));
    finished.completed = true;
    let tasks = vec![due("late", Duration::hours(-1)), stale, finished];

    let refreshed = refresh_overdue_flags(&tasks, now());

    let flags: Vec<bool> = refreshed.iter().map(|task| task.is_overdue).collect();
    assert_eq!(flags, vec![true, false, false]);
    assert!(!tasks[0].is_overdue);
}
