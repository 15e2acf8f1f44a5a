//! Deadline arithmetic for tasks and phases. Every function takes the current time
//! explicitly; nothing here reads a clock.

use crate::model::team::Task;
use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

const MS_PER_MINUTE: i64 = 60 * 1000;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    None,
    Overdue,
    High,
    Medium,
    Low,
}

/// Everything a dashboard shows next to a dated task or phase.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DeadlineStatus {
    pub urgency: Urgency,
    pub overdue: bool,
    pub remaining: String,
    pub formatted: String,
}

pub fn is_overdue(deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    deadline.is_some_and(|deadline| now > deadline)
}

/// Less than a day left is `High`, less than three days `Medium`, anything further `Low`.
pub fn urgency(deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Urgency {
    let Some(deadline) = deadline else {
        return Urgency::None;
    };

    let diff_ms = (deadline - now).num_milliseconds();
    if diff_ms < 0 {
        return Urgency::Overdue;
    }

    let days_remaining = diff_ms as f64 / MS_PER_DAY as f64;
    if days_remaining < 1.0 {
        Urgency::High
    } else if days_remaining < 3.0 {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Human-readable countdown such as `"2 days, 5 hours"` or `"Overdue by 3 days"`.
pub fn time_remaining(deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(deadline) = deadline else {
        return "No deadline".to_string();
    };

    let diff_ms = (deadline - now).num_milliseconds();

    if diff_ms < 0 {
        let past_ms = diff_ms.abs();
        let days = past_ms / MS_PER_DAY;
        let hours = (past_ms % MS_PER_DAY) / MS_PER_HOUR;

        return if days > 0 {
            format!("Overdue by {}", plural(days, "day"))
        } else if hours > 0 {
            format!("Overdue by {}", plural(hours, "hour"))
        } else {
            "Overdue".to_string()
        };
    }

    let days = diff_ms / MS_PER_DAY;
    let hours = (diff_ms % MS_PER_DAY) / MS_PER_HOUR;
    let minutes = (diff_ms % MS_PER_HOUR) / MS_PER_MINUTE;

    if days > 0 {
        format!("{}, {}", plural(days, "day"), plural(hours, "hour"))
    } else if hours > 0 {
        format!("{}, {minutes} min", plural(hours, "hour"))
    } else {
        plural(minutes, "minute")
    }
}

/// Calendar-relative label in UTC: `"Today at 3:05 PM"`, `"Tomorrow at 9:00 AM"`,
/// `"Mar 5, 3:05 PM"`, or `"Mar 5, 2027, 3:05 PM"` outside the current year.
pub fn format_deadline(deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(deadline) = deadline else {
        return "No deadline set".to_string();
    };

    let time = deadline.format("%-I:%M %p");
    let deadline_day = deadline.date_naive();
    let today = now.date_naive();

    if deadline_day == today {
        return format!("Today at {time}");
    }
    if today.succ_opt() == Some(deadline_day) {
        return format!("Tomorrow at {time}");
    }

    let day = deadline.format("%b %-d");
    if deadline.year() != now.year() {
        format!("{day}, {}, {time}", deadline.year())
    } else {
        format!("{day}, {time}")
    }
}

pub fn deadline_status(deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DeadlineStatus {
    DeadlineStatus {
        urgency: urgency(deadline, now),
        overdue: is_overdue(deadline, now),
        remaining: time_remaining(deadline, now),
        formatted: format_deadline(deadline, now),
    }
}

/// Tasks due within `(now, now + window_days]`, soonest first.
pub fn upcoming_deadlines(tasks: &[Task], now: DateTime<Utc>, window_days: u32) -> Vec<Task> {
    let horizon = now
        .checked_add_signed(Duration::days(i64::from(window_days)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    let mut upcoming: Vec<Task> = tasks
        .iter()
        .filter(|task| {
            task.deadline
                .is_some_and(|deadline| deadline > now && deadline <= horizon)
        })
        .cloned()
        .collect();
    upcoming.sort_by_key(|task| task.deadline);
    upcoming
}

pub fn overdue_tasks(tasks: &[Task], now: DateTime<Utc>) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| !task.completed && is_overdue(task.deadline, now))
        .cloned()
        .collect()
}

/// Returns copies of `tasks` with `is_overdue` recomputed against `now`.
pub fn refresh_overdue_flags(tasks: &[Task], now: DateTime<Utc>) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| Task {
            is_overdue: !task.completed && is_overdue(task.deadline, now),
            ..task.clone()
        })
        .collect()
}
