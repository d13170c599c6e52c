use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::trace;

use crate::common::{Capacity, TeamIndex, Vertex};
use crate::division::Division;
use crate::error::{EliminationError, Result};

/// Number of unordered pairs over `n` elements.
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Position of the unordered pair {i, j} in the row-major upper triangle of
/// an `n` x `n` matrix. Maps the pairs of `0..n` onto `0..pair_count(n)`.
pub fn pair_index(i: usize, j: usize, n: usize) -> usize {
    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    debug_assert!(lo != hi && hi < n);
    lo * (2 * n - lo - 1) / 2 + (hi - lo - 1)
}

/// Flow network answering whether `target` can still finish first.
///
/// Vertex ids are dense: the source is 0, game vertices follow, then one team
/// vertex per team other than `target`, and the sink comes last. Node indices
/// of the underlying graph are the vertex ids.
#[derive(Debug, Clone)]
pub struct EliminationNetwork {
    graph: DiGraph<Vertex, Capacity>,
    source: NodeIndex,
    sink: NodeIndex,
    // id of the first team vertex
    team_offset: usize,
    // division index of every team vertex, in id order
    teams: Vec<TeamIndex>,
    target: TeamIndex,
    unbounded: Capacity,
}

impl EliminationNetwork {
    /// Builds the network for `target`. Every other team must be within
    /// reach of `target`'s ceiling, see [`crate::trivial_elimination`].
    pub fn build(division: &Division, target: TeamIndex) -> Result<Self> {
        let n = division.number_of_teams();
        if target >= n {
            return Err(EliminationError::InvalidTeam(format!("#{}", target)));
        }
        let teams: Vec<TeamIndex> = (0..n).filter(|&i| i != target).collect();
        let m = teams.len();
        let games = pair_count(m);
        let team_offset = 1 + games;

        let pairs = move || (0..m).flat_map(move |a| (a + 1..m).map(move |b| (a, b)));
        let source_capacity: Capacity = pairs()
            .map(|(a, b)| division.against_at(teams[a], teams[b]))
            .sum();
        let unbounded = source_capacity + 1;

        let mut graph = DiGraph::with_capacity(games + m + 2, 3 * games + m);
        let source = graph.add_node(Vertex::Source);
        for (a, b) in pairs() {
            graph.add_node(Vertex::Game(teams[a], teams[b]));
        }
        for &i in &teams {
            graph.add_node(Vertex::Team(i));
        }
        let sink = graph.add_node(Vertex::Sink);

        for (a, b) in pairs() {
            let game = NodeIndex::new(1 + pair_index(a, b, m));
            debug_assert_eq!(graph[game], Vertex::Game(teams[a], teams[b]));
            graph.add_edge(source, game, division.against_at(teams[a], teams[b]));
            graph.add_edge(game, NodeIndex::new(team_offset + a), unbounded);
            graph.add_edge(game, NodeIndex::new(team_offset + b), unbounded);
        }
        let ceiling = division.ceiling(target);
        for (a, &j) in teams.iter().enumerate() {
            let capacity = ceiling - division.wins_at(j);
            if capacity < 0 {
                return Err(EliminationError::InvariantViolation(format!(
                    "{} already has {} wins, more than {} can reach ({})",
                    division.name(j),
                    division.wins_at(j),
                    division.name(target),
                    ceiling
                )));
            }
            graph.add_edge(NodeIndex::new(team_offset + a), sink, capacity);
        }
        trace!(
            target = division.name(target),
            vertices = graph.node_count(),
            edges = graph.edge_count(),
            unbounded,
            "elimination network built"
        );
        Ok(EliminationNetwork {
            graph,
            source,
            sink,
            team_offset,
            teams,
            target,
            unbounded,
        })
    }
    pub fn graph(&self) -> &DiGraph<Vertex, Capacity> {
        &self.graph
    }
    pub fn source(&self) -> usize {
        self.source.index()
    }
    pub fn sink(&self) -> usize {
        self.sink.index()
    }
    pub fn target(&self) -> TeamIndex {
        self.target
    }
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }
    pub fn vertex(&self, id: usize) -> Option<Vertex> {
        self.graph.node_weight(NodeIndex::new(id)).copied()
    }
    /// Capacity standing in for "unbounded": larger than any feasible flow.
    pub fn unbounded(&self) -> Capacity {
        self.unbounded
    }
    /// `(from, to)` id pairs with their capacity, for every edge.
    pub fn capacities(&self) -> impl Iterator<Item = ((usize, usize), Capacity)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| ((edge.source().index(), edge.target().index()), *edge.weight()))
    }
    /// Game vertex ids with the capacity of the edge feeding them.
    pub fn source_edges(&self) -> impl Iterator<Item = (usize, Capacity)> + '_ {
        self.graph
            .edges(self.source)
            .map(|edge| (edge.target().index(), *edge.weight()))
    }
    /// Games left between the teams other than the target.
    pub fn source_capacity(&self) -> Capacity {
        self.source_edges().map(|(_, capacity)| capacity).sum()
    }
    /// Team vertex ids with the division index of their team.
    pub fn team_vertices(&self) -> impl Iterator<Item = (usize, TeamIndex)> + '_ {
        self.teams
            .iter()
            .enumerate()
            .map(move |(a, &team)| (self.team_offset + a, team))
    }
    /// The team behind `id`, if `id` is a team vertex.
    pub fn team_at(&self, id: usize) -> Option<TeamIndex> {
        id.checked_sub(self.team_offset)
            .and_then(|a| self.teams.get(a))
            .copied()
    }
}
