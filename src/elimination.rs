use std::fmt::Display;

use tracing::debug;

use crate::common::{Capacity, TeamIndex};
use crate::config::EliminationConfig;
use crate::division::Division;
use crate::error::{EliminationError, Result};
use crate::network::EliminationNetwork;
use crate::oracle::{EdmondsKarp, MaxFlowOracle};
use crate::trivial::trivial_elimination;

/// Outcome of an elimination query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Elimination {
    NotEliminated,
    /// `by` already has more wins than the team can reach.
    Trivial { by: TeamIndex },
    /// The games left between `subset` force one of them past the team.
    Flow {
        max_flow: Capacity,
        games_left: Capacity,
        subset: Vec<TeamIndex>,
    },
}

impl Elimination {
    pub fn is_eliminated(&self) -> bool {
        !matches!(self, Elimination::NotEliminated)
    }
    /// Teams proving the elimination, in standings order.
    pub fn subset(&self) -> Option<&[TeamIndex]> {
        match self {
            Elimination::NotEliminated => None,
            Elimination::Trivial { by } => Some(std::slice::from_ref(by)),
            Elimination::Flow { subset, .. } => Some(subset),
        }
    }
}

/// Names of the teams that eliminate a team.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Certificate(Vec<String>);

impl Certificate {
    pub fn teams(&self) -> &[String] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, team: &str) -> bool {
        self.0.iter().any(|name| name == team)
    }
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }
}

impl IntoIterator for Certificate {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Display for Certificate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ ")?;
        for team in &self.0 {
            write!(f, "{} ", team)?;
        }
        write!(f, "}}")
    }
}

/// Whether `subset` proves that `target` cannot finish first: between them,
/// its teams already have, or must still win, more games than `target` can
/// reach per team.
pub fn is_certificate(division: &Division, target: TeamIndex, subset: &[TeamIndex]) -> bool {
    if subset.is_empty() || subset.contains(&target) {
        return false;
    }
    let mut total: Capacity = subset.iter().map(|&j| division.wins_at(j)).sum();
    for (a, &i) in subset.iter().enumerate() {
        for &j in &subset[a + 1..] {
            total += division.against_at(i, j);
        }
    }
    total > division.ceiling(target) * subset.len() as Capacity
}

/// Answers elimination queries against one division. Every query builds and
/// solves its own network.
pub struct Eliminator<'d, O: MaxFlowOracle = EdmondsKarp> {
    division: &'d Division,
    oracle: O,
    config: EliminationConfig,
}

impl<'d> Eliminator<'d> {
    pub fn new(division: &'d Division) -> Self {
        Self::with_config(division, EliminationConfig::default())
    }
    pub fn with_config(division: &'d Division, config: EliminationConfig) -> Self {
        let oracle = EdmondsKarp::new(config.backend);
        Eliminator {
            division,
            oracle,
            config,
        }
    }
}

impl<'d, O: MaxFlowOracle> Eliminator<'d, O> {
    pub fn with_oracle(division: &'d Division, oracle: O, config: EliminationConfig) -> Self {
        Eliminator {
            division,
            oracle,
            config,
        }
    }
    pub fn division(&self) -> &'d Division {
        self.division
    }
    pub fn config(&self) -> &EliminationConfig {
        &self.config
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn eliminate(&self, team: &str) -> Result<Elimination> {
        let target = self.division.index_of(team)?;
        self.eliminate_index(target)
    }

    pub fn eliminate_index(&self, target: TeamIndex) -> Result<Elimination> {
        let division = self.division;
        if target >= division.number_of_teams() {
            return Err(EliminationError::InvalidTeam(format!("#{}", target)));
        }
        if let Some(by) = trivial_elimination(division, target) {
            debug!(by = division.name(by), "trivially eliminated");
            return Ok(Elimination::Trivial { by });
        }
        if division.number_of_teams() < 2 {
            return Ok(Elimination::NotEliminated);
        }

        let network = EliminationNetwork::build(division, target)?;
        let flow = self.oracle.max_flow(&network);
        let source = network.source();
        let games_left = network.source_capacity();
        let saturated = network
            .source_edges()
            .all(|(game, capacity)| flow.flow(source, game) >= capacity);
        if saturated != (flow.value() >= games_left) {
            return Err(EliminationError::InvariantViolation(format!(
                "max flow {} disagrees with source edge saturation ({} games left)",
                flow.value(),
                games_left
            )));
        }
        if saturated {
            debug!(games_left, "not eliminated");
            return Ok(Elimination::NotEliminated);
        }

        let subset: Vec<TeamIndex> = network
            .team_vertices()
            .filter(|&(id, _)| flow.in_cut(id))
            .map(|(_, team)| team)
            .collect();
        if subset.is_empty() {
            return Err(EliminationError::InvariantViolation(format!(
                "{} is eliminated but no team is on the source side of the cut",
                division.name(target)
            )));
        }
        if self.config.verify_certificates && !is_certificate(division, target, &subset) {
            return Err(EliminationError::InvariantViolation(format!(
                "cut {:?} does not eliminate {}",
                subset,
                division.name(target)
            )));
        }
        debug!(
            max_flow = flow.value(),
            games_left,
            certificate = subset.len(),
            "eliminated"
        );
        Ok(Elimination::Flow {
            max_flow: flow.value(),
            games_left,
            subset,
        })
    }

    pub fn is_eliminated(&self, team: &str) -> Result<bool> {
        Ok(self.eliminate(team)?.is_eliminated())
    }

    /// Teams proving that `team` is eliminated, or `None` if it is not.
    pub fn certificate_of_elimination(&self, team: &str) -> Result<Option<Certificate>> {
        let elimination = self.eliminate(team)?;
        Ok(elimination.subset().map(|subset| {
            Certificate(
                subset
                    .iter()
                    .map(|&i| self.division.name(i).to_owned())
                    .collect(),
            )
        }))
    }

    /// Verdict for every team, in standings order.
    pub fn eliminations(&self) -> Result<Vec<(&'d str, Elimination)>> {
        (0..self.division.number_of_teams())
            .map(|i| Ok((self.division.name(i), self.eliminate_index(i)?)))
            .collect()
    }
}

impl Division {
    pub fn is_eliminated(&self, team: &str) -> Result<bool> {
        Eliminator::new(self).is_eliminated(team)
    }
    pub fn certificate_of_elimination(&self, team: &str) -> Result<Option<Certificate>> {
        Eliminator::new(self).certificate_of_elimination(team)
    }
}
