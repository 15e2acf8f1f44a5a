use crate::errors::EngineError;
use crate::model::team::{Phase, PhaseStatus, Project, ProjectStatus, Resource, Task, Team};
use tracing::info;

const TEMPLATE_PHASES: [(&str, &str, [&str; 3]); 4] = [
    (
        "Entry Event & Driving Question",
        "Kickoff the project with an engaging event and form the central question.",
        [
            "Analyze the project scenario",
            "Brainstorm initial questions",
            "Define the Driving Question",
        ],
    ),
    (
        "Inquiry & Innovation",
        "Conduct research and explore existing solutions.",
        [
            "Assign research roles",
            "Gather data and resources",
            "Identify constraints and criteria",
        ],
    ),
    (
        "Creation & Prototyping",
        "Build the solution or prototype.",
        [
            "Design the solution",
            "Develop the prototype",
            "Test and iterate",
        ],
    ),
    (
        "Presentation & Reflection",
        "Present findings and reflect on the learning process.",
        [
            "Prepare the presentation",
            "Deliver final pitch",
            "Complete reflection journal",
        ],
    ),
];

/// Builds the standard four-phase project for `topic`. Only the first phase starts unlocked.
pub fn project_template(topic: &str) -> Result<Project, EngineError> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(EngineError::BlankTopic);
    }

    let phases = TEMPLATE_PHASES
        .iter()
        .enumerate()
        .map(|(p, (title, description, tasks))| Phase {
            id: format!("phase-{p}"),
            title: title.to_string(),
            description: description.to_string(),
            tasks: tasks
                .iter()
                .enumerate()
                .map(|(t, task_title)| Task::new(format!("task-{p}-{t}"), *task_title))
                .collect(),
            status: if p == 0 {
                PhaseStatus::Active
            } else {
                PhaseStatus::Locked
            },
            deadline: None,
        })
        .collect();

    Ok(Project {
        topic: topic.to_string(),
        driving_question: format!("How can we solve challenges related to {topic}?"),
        description: format!(
            "A comprehensive project-based learning experience exploring {topic}. \
             Teams will research, design, and present innovative solutions."
        ),
        phases,
        resources: vec![
            Resource {
                title: "Project Guide".to_string(),
                uri: "https://example.com/guide".to_string(),
            },
            Resource {
                title: "Research Template".to_string(),
                uri: "https://example.com/template".to_string(),
            },
        ],
    })
}

/// Gives every team its own copy of `project` and marks the team active.
pub fn assign_project(teams: &[Team], project: &Project) -> Vec<Team> {
    info!(
        "Assigning project '{}' to {} teams",
        project.topic,
        teams.len()
    );

    teams
        .iter()
        .map(|team| Team {
            project: Some(project.clone()),
            project_status: ProjectStatus::Active,
            ..team.clone()
        })
        .collect()
}
