//! Task, submission and phase transitions for a single team.
//!
//! Each operation takes a team snapshot and returns a new one; the input is never
//! touched. Unknown team, phase, task or student ids are not errors: the snapshot
//! comes back unchanged.
//!
//! After any task change the owning phase is re-derived (`Completed` iff all of its
//! tasks are done, `Active` otherwise) and, if it just completed, the following
//! phase is unlocked when it is still `Locked`. That is the only unlock trigger.

use crate::model::student::ActivityEntry;
use crate::model::team::{
    Feedback, Phase, PhaseStatus, Project, Submission, SubmissionKind, SubmissionStatus, Task,
    Team,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Evidence handed in by a student, before the engine stamps it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NewSubmission {
    pub id: String,
    pub kind: SubmissionKind,
    pub url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    Approve,
    Reject,
    RequestRevision,
}

impl ReviewDecision {
    fn outcome(self) -> (SubmissionStatus, bool) {
        match self {
            ReviewDecision::Approve => (SubmissionStatus::Approved, true),
            ReviewDecision::Reject => (SubmissionStatus::Rejected, false),
            ReviewDecision::RequestRevision => (SubmissionStatus::NeedsRevision, false),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct FeedbackInput {
    pub comment: String,
    pub rubric_score: Option<f64>,
}

/// `round(100 * completed / total)` over every phase; 0 for a project without tasks.
pub fn progress_percent(project: &Project) -> u8 {
    let total = project.total_tasks();
    if total == 0 {
        return 0;
    }
    let completed = project.completed_tasks();
    (100.0 * completed as f64 / total as f64).round() as u8
}

/// The first phase that is not completed yet.
pub fn frontier_phase(project: &Project) -> Option<&Phase> {
    project
        .phases
        .iter()
        .find(|phase| phase.status != PhaseStatus::Completed)
}

fn cascade(phases: &mut [Phase], phase_index: usize) {
    let phase = &mut phases[phase_index];
    let was_completed = phase.status == PhaseStatus::Completed;
    phase.status = if phase.all_tasks_completed() {
        PhaseStatus::Completed
    } else {
        PhaseStatus::Active
    };

    if phase.status != PhaseStatus::Completed {
        if was_completed {
            debug!("Phase {} reopened", phase.id);
        }
        return;
    }
    if !was_completed {
        info!("Phase {} completed", phase.id);
    }

    if let Some(next) = phases.get_mut(phase_index + 1) {
        if next.status == PhaseStatus::Locked {
            info!("Phase {} unlocked", next.id);
            next.status = PhaseStatus::Active;
        }
    }
}

/// Applies `change` to one task and re-derives phase statuses and team progress.
/// `change` returns `None` to leave the team untouched.
fn transition<F>(team: &Team, phase_id: &str, task_id: &str, change: F) -> Team
where
    F: FnOnce(&Phase, &Task) -> Option<Task>,
{
    let Some(project) = team.project.as_ref() else {
        debug!("Team {} has no project, nothing to update", team.id);
        return team.clone();
    };
    let Some(phase_index) = project.phases.iter().position(|phase| phase.id == phase_id) else {
        debug!("Phase {} not found in team {}", phase_id, team.id);
        return team.clone();
    };
    let phase = &project.phases[phase_index];
    let Some(task_index) = phase.tasks.iter().position(|task| task.id == task_id) else {
        debug!("Task {} not found in phase {}", task_id, phase_id);
        return team.clone();
    };
    let Some(updated_task) = change(phase, &phase.tasks[task_index]) else {
        return team.clone();
    };

    let mut phases = project.phases.clone();
    phases[phase_index].tasks[task_index] = updated_task;
    cascade(&mut phases, phase_index);

    let project = Project {
        phases,
        ..project.clone()
    };
    let progress = progress_percent(&project);

    Team {
        project: Some(project),
        progress,
        ..team.clone()
    }
}

/// Flips a task's completion. A task with evidence attached moves its submission in
/// lock-step: completed means approved, not completed means pending.
pub fn toggle_task(team: &Team, phase_id: &str, task_id: &str) -> Team {
    transition(team, phase_id, task_id, |_, task| {
        let completed = !task.completed;
        let submission = task.submission.as_ref().map(|submission| Submission {
            status: if completed {
                SubmissionStatus::Approved
            } else {
                SubmissionStatus::Pending
            },
            ..submission.clone()
        });

        debug!("Task {} completed: {}", task.id, completed);
        Some(Task {
            completed,
            submission,
            ..task.clone()
        })
    })
}

/// Attaches a new pending submission to an open task in an unlocked phase.
///
/// Resubmitting after a rejection or a revision request bumps `revision_count`.
/// Completed tasks and locked phases do not accept evidence.
pub fn submit_evidence(
    team: &Team,
    phase_id: &str,
    task_id: &str,
    submission: NewSubmission,
    now: DateTime<Utc>,
) -> Team {
    transition(team, phase_id, task_id, |phase, task| {
        if phase.status == PhaseStatus::Locked {
            debug!("Ignoring submission for task {} in locked phase {}", task.id, phase.id);
            return None;
        }
        if task.completed {
            debug!("Ignoring submission for completed task {}", task.id);
            return None;
        }

        let revision_count = match task.submission.as_ref() {
            Some(previous) if previous.status.is_returned() => {
                Some(previous.revision_count.unwrap_or(0) + 1)
            }
            Some(previous) => previous.revision_count,
            None => None,
        };

        Some(Task {
            submission: Some(Submission {
                id: submission.id,
                kind: submission.kind,
                url: submission.url,
                status: SubmissionStatus::Pending,
                feedback: None,
                submitted_at: now,
                reviewed_at: None,
                revision_count,
            }),
            ..task.clone()
        })
    })
}

/// Records a teacher's decision on the task's current submission.
///
/// Approving completes the task; rejecting or requesting a revision reopens it.
/// Feedback, when given, replaces the previous feedback. Tasks without a
/// submission are left alone.
pub fn review_submission(
    team: &Team,
    phase_id: &str,
    task_id: &str,
    decision: ReviewDecision,
    feedback: Option<FeedbackInput>,
    now: DateTime<Utc>,
) -> Team {
    transition(team, phase_id, task_id, |_, task| {
        let Some(submission) = task.submission.as_ref() else {
            debug!("Task {} has no submission to review", task.id);
            return None;
        };

        let (status, completed) = decision.outcome();
        let feedback = match feedback {
            Some(input) => Some(Feedback {
                teacher_comment: input.comment,
                rubric_score: input.rubric_score,
                created_at: now,
            }),
            None => submission.feedback.clone(),
        };

        debug!("Submission {} reviewed: {:?}", submission.id, status);
        Some(Task {
            completed,
            submission: Some(Submission {
                status,
                feedback,
                reviewed_at: Some(now),
                ..submission.clone()
            }),
            ..task.clone()
        })
    })
}

/// Adds `entry` to a member's activity log, keeping the log in timestamp order.
/// An entry stamped earlier than the latest one is placed after every entry that is
/// not later than it.
pub fn record_activity(team: &Team, student_id: &str, entry: ActivityEntry) -> Team {
    let Some(member_index) = team
        .members
        .iter()
        .position(|member| member.id == student_id)
    else {
        debug!("Student {} is not a member of team {}", student_id, team.id);
        return team.clone();
    };

    let mut members = team.members.clone();
    let log = &mut members[member_index].activity_log;
    let position = log.partition_point(|existing| existing.timestamp <= entry.timestamp);
    if position < log.len() {
        debug!(
            "Activity {} predates the latest entry for student {}",
            entry.id, student_id
        );
    }
    log.insert(position, entry);

    Team {
        members,
        ..team.clone()
    }
}
