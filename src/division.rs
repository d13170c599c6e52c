use std::collections::HashMap;

use tracing::debug;

use crate::common::{Capacity, TeamIndex};
use crate::error::{EliminationError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub remaining: u32,
    // games left against every team of the division, in standings order
    pub against: Vec<u32>,
}

impl Team {
    pub fn new(name: &str, wins: u32, losses: u32, remaining: u32, against: Vec<u32>) -> Self {
        Team {
            name: name.to_owned(),
            wins,
            losses,
            remaining,
            against,
        }
    }
}

/// Standings of one division. Immutable once built.
#[derive(Clone, Debug)]
pub struct Division {
    teams: Vec<Team>,
    index: HashMap<String, TeamIndex>,
}

impl Division {
    pub fn new(teams: Vec<Team>) -> Result<Self> {
        let n = teams.len();
        if n == 0 {
            return Err(EliminationError::MalformedInput(
                "division has no teams".to_owned(),
            ));
        }
        let mut index = HashMap::with_capacity(n);
        for (i, team) in teams.iter().enumerate() {
            if team.against.len() != n {
                return Err(EliminationError::MalformedInput(format!(
                    "{} has {} against entries, expected {}",
                    team.name,
                    team.against.len(),
                    n
                )));
            }
            if team.against[i] != 0 {
                return Err(EliminationError::MalformedInput(format!(
                    "{} has {} games left against itself",
                    team.name, team.against[i]
                )));
            }
            if index.insert(team.name.clone(), i).is_some() {
                return Err(EliminationError::MalformedInput(format!(
                    "duplicate team {}",
                    team.name
                )));
            }
        }
        for i in 0..n {
            for j in i + 1..n {
                if teams[i].against[j] != teams[j].against[i] {
                    return Err(EliminationError::MalformedInput(format!(
                        "{} - {} has {} games left but {} - {} has {}",
                        teams[i].name,
                        teams[j].name,
                        teams[i].against[j],
                        teams[j].name,
                        teams[i].name,
                        teams[j].against[i]
                    )));
                }
            }
        }
        let division = Division { teams, index };
        debug!(
            teams = division.number_of_teams(),
            games_left = division.games_left(),
            "division loaded"
        );
        Ok(division)
    }
    pub fn number_of_teams(&self) -> usize {
        self.teams.len()
    }
    pub fn teams(&self) -> impl Iterator<Item = &str> + '_ {
        self.teams.iter().map(|team| team.name.as_str())
    }
    pub fn index_of(&self, team: &str) -> Result<TeamIndex> {
        self.index
            .get(team)
            .copied()
            .ok_or_else(|| EliminationError::InvalidTeam(team.to_owned()))
    }
    /// Name of the team at `index`, if there is one.
    pub fn team_name(&self, index: TeamIndex) -> Option<&str> {
        self.teams.get(index).map(|team| team.name.as_str())
    }
    pub(crate) fn name(&self, index: TeamIndex) -> &str {
        &self.teams[index].name
    }
    pub fn wins(&self, team: &str) -> Result<u32> {
        Ok(self.team(self.index_of(team)?).wins)
    }
    pub fn losses(&self, team: &str) -> Result<u32> {
        Ok(self.team(self.index_of(team)?).losses)
    }
    pub fn remaining(&self, team: &str) -> Result<u32> {
        Ok(self.team(self.index_of(team)?).remaining)
    }
    pub fn against(&self, team1: &str, team2: &str) -> Result<u32> {
        let i = self.index_of(team1)?;
        let j = self.index_of(team2)?;
        Ok(self.team(i).against[j])
    }
    /// Games left to be played between teams of this division.
    pub fn games_left(&self) -> u64 {
        let n = self.number_of_teams();
        (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .map(|(i, j)| u64::from(self.teams[i].against[j]))
            .sum()
    }
    pub(crate) fn team(&self, index: TeamIndex) -> &Team {
        &self.teams[index]
    }
    // most wins `index` can still finish with
    pub(crate) fn ceiling(&self, index: TeamIndex) -> Capacity {
        let team = self.team(index);
        Capacity::from(team.wins) + Capacity::from(team.remaining)
    }
    pub(crate) fn wins_at(&self, index: TeamIndex) -> Capacity {
        Capacity::from(self.team(index).wins)
    }
    pub(crate) fn against_at(&self, i: TeamIndex, j: TeamIndex) -> Capacity {
        Capacity::from(self.team(i).against[j])
    }
}
