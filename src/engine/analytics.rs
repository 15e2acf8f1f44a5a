//! Per-student and class-wide metrics. All of it is derived from team snapshots on
//! demand and never stored.

use crate::model::analytics::{ClassMetrics, StudentAnalytics, SubmissionStats};
use crate::model::student::{ActivityAction, Student};
use crate::model::team::{SubmissionStatus, Team};
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

const CSV_HEADER: &str = "Student ID,Student Name,Team,Tasks Completed,Time Spent (min),Submission Quality,Contribution Score,Pending Tasks,Overdue Tasks,Last Active\n";

fn rounded_mean(sum: f64, count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    (sum / count as f64).round() as u32
}

/// Whole minutes between the first and last activity entries; 0 with fewer than two.
pub fn time_spent(student: &Student) -> i64 {
    match (student.activity_log.first(), student.activity_log.last()) {
        (Some(first), Some(last)) if student.activity_log.len() >= 2 => {
            (last.timestamp - first.timestamp).num_minutes().max(0)
        }
        _ => 0,
    }
}

/// The student's completed-task entries as a share of the project's tasks, capped at 100.
pub fn contribution_score(student: &Student, team: &Team) -> u32 {
    let total = team.total_tasks();
    if total == 0 {
        return 0;
    }
    let completed = student.count_actions(ActivityAction::TaskCompleted);
    (100.0 * completed as f64 / total as f64).round().min(100.0) as u32
}

/// Mean rubric percentage over tasks that carry both a rubric and a scored review.
pub fn submission_quality(team: &Team) -> u32 {
    let scores: Vec<f64> = team
        .tasks()
        .into_iter()
        .filter_map(|task| task.scored_quality())
        .collect();
    rounded_mean(scores.iter().sum(), scores.len())
}

pub fn student_analytics(student: &Student, team: &Team, now: DateTime<Utc>) -> StudentAnalytics {
    let tasks = team.tasks();
    let pending_tasks = tasks
        .iter()
        .filter(|task| {
            !task.completed && task.submission_status() == Some(SubmissionStatus::Pending)
        })
        .count();
    let overdue_tasks_count = tasks
        .iter()
        .filter(|task| !task.completed && task.deadline.is_some_and(|deadline| deadline < now))
        .count();

    StudentAnalytics {
        student_id: student.id.clone(),
        team_id: team.id.clone(),
        tasks_completed: student.count_actions(ActivityAction::TaskCompleted) as u32,
        time_spent: time_spent(student),
        submission_quality: submission_quality(team),
        contribution_score: contribution_score(student, team),
        last_active: student.last_active(),
        pending_tasks: pending_tasks as u32,
        overdue_tasks_count: overdue_tasks_count as u32,
    }
}

pub fn all_student_analytics(teams: &[Team], now: DateTime<Utc>) -> Vec<StudentAnalytics> {
    teams
        .iter()
        .flat_map(|team| {
            team.members
                .iter()
                .map(move |student| student_analytics(student, team, now))
        })
        .collect()
}

/// Pending work and no activity for strictly longer than `days_threshold` days.
pub fn is_stuck(analytics: &StudentAnalytics, now: DateTime<Utc>, days_threshold: u32) -> bool {
    let idle = now - analytics.last_active;
    analytics.pending_tasks > 0 && idle > Duration::days(i64::from(days_threshold))
}

pub fn detect_stuck_students(
    teams: &[Team],
    now: DateTime<Utc>,
    days_threshold: u32,
) -> Vec<StudentAnalytics> {
    let stuck: Vec<StudentAnalytics> = all_student_analytics(teams, now)
        .into_iter()
        .filter(|analytics| is_stuck(analytics, now, days_threshold))
        .collect();
    debug!(
        "{} stuck students (threshold {} days)",
        stuck.len(),
        days_threshold
    );
    stuck
}

pub fn submission_stats(teams: &[Team]) -> SubmissionStats {
    let mut stats = SubmissionStats::default();
    for status in teams
        .iter()
        .flat_map(Team::tasks)
        .filter_map(|task| task.submission_status())
    {
        match status {
            SubmissionStatus::Pending => stats.pending += 1,
            SubmissionStatus::Approved => stats.approved += 1,
            SubmissionStatus::Rejected => stats.rejected += 1,
            SubmissionStatus::NeedsRevision => stats.needs_revision += 1,
        }
    }
    stats
}

pub fn class_metrics(teams: &[Team], now: DateTime<Utc>, days_threshold: u32) -> ClassMetrics {
    let analytics = all_student_analytics(teams, now);

    let progress_sum: f64 = teams.iter().map(|team| f64::from(team.progress)).sum();
    let quality_sum: f64 = analytics
        .iter()
        .map(|entry| f64::from(entry.submission_quality))
        .sum();
    let stuck = analytics
        .iter()
        .filter(|entry| is_stuck(entry, now, days_threshold))
        .count();

    ClassMetrics {
        total_students: analytics.len() as u32,
        total_teams: teams.len() as u32,
        average_progress: rounded_mean(progress_sum, teams.len()),
        total_tasks_completed: analytics.iter().map(|entry| entry.tasks_completed).sum(),
        average_submission_quality: rounded_mean(quality_sum, analytics.len()),
        stuck_students_count: stuck as u32,
        submission_stats: submission_stats(teams),
    }
}

fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// One CSV row per student, with a header line. Dates are UTC `YYYY-MM-DD`.
pub fn export_csv(teams: &[Team], now: DateTime<Utc>) -> String {
    let mut csv = String::from(CSV_HEADER);

    for team in teams {
        for student in &team.members {
            let entry = student_analytics(student, team, now);
            let last_active = entry.last_active.format("%Y-%m-%d").to_string();
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{},{},{}\n",
                entry.student_id,
                quoted(&student.name),
                quoted(&team.name),
                entry.tasks_completed,
                entry.time_spent,
                entry.submission_quality,
                entry.contribution_score,
                entry.pending_tasks,
                entry.overdue_tasks_count,
                quoted(&last_active),
            ));
        }
    }

    csv
}
