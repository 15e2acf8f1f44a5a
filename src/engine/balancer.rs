use crate::errors::EngineError;
use crate::model::student::Student;
use crate::model::team::Team;
use tracing::{debug, info};

fn team_name(index: usize) -> String {
    let letter = char::from(b'A' + (index % 26) as u8);
    format!("Team {letter}")
}

/// Partitions `roster` into `ceil(N / team_size)` teams of near-equal total mastery.
///
/// Students are ranked by `average_score` (descending, ties keep roster order) and
/// dealt out in snake order: 0, 1, .., n-1, n-1, .., 1, 0, 0, 1, ..
/// Direction flips at both ends instead of wrapping, so each team gets one strong
/// and one weak pick per full pass.
///
/// Returns `EngineError::InvalidTeamSize` for a team size below 1.
pub fn form_balanced_teams(roster: &[Student], team_size: i64) -> Result<Vec<Team>, EngineError> {
    if team_size < 1 {
        return Err(EngineError::InvalidTeamSize(team_size));
    }
    let team_size =
        usize::try_from(team_size).map_err(|_| EngineError::InvalidTeamSize(team_size))?;

    let number_of_teams = roster.len().div_ceil(team_size);
    if number_of_teams == 0 {
        debug!("Empty roster, no teams formed");
        return Ok(Vec::new());
    }

    let mut ranked: Vec<&Student> = roster.iter().collect();
    ranked.sort_by(|a, b| b.average_score.total_cmp(&a.average_score));

    let mut buckets: Vec<Vec<Student>> = vec![Vec::new(); number_of_teams];
    let last = number_of_teams - 1;
    let mut index = 0;
    let mut forward = true;

    for student in ranked {
        buckets[index].push(student.clone());

        if forward {
            if index == last {
                forward = false;
            } else {
                index += 1;
            }
        } else if index == 0 {
            forward = true;
        } else {
            index -= 1;
        }
    }

    let teams: Vec<Team> = buckets
        .into_iter()
        .enumerate()
        .map(|(i, members)| Team::new(format!("group-{i}"), team_name(i), members))
        .collect();

    info!(
        "Formed {} balanced teams from {} students (team size {})",
        teams.len(),
        roster.len(),
        team_size
    );
    Ok(teams)
}
