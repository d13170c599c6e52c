use std::collections::HashMap;

use pathfinding::directed::bfs::bfs_reach;
use pathfinding::directed::edmonds_karp::{edmonds_karp_dense, edmonds_karp_sparse};
use tracing::debug;

use crate::common::Capacity;
use crate::config::FlowBackend;
use crate::network::EliminationNetwork;

/// A maximum flow through an [`EliminationNetwork`], with the source side of
/// its minimum cut.
#[derive(Debug, Clone)]
pub struct MaxFlow {
    value: Capacity,
    flows: HashMap<(usize, usize), Capacity>,
    cut: Vec<((usize, usize), Capacity)>,
    source_side: Vec<bool>,
}

impl MaxFlow {
    /// Wraps a solver's flow assignment. Edges missing from `flows` carry
    /// nothing. The source side and the cut are read off the residual graph.
    pub fn new<I: IntoIterator<Item = ((usize, usize), Capacity)>>(
        network: &EliminationNetwork,
        value: Capacity,
        flows: I,
    ) -> Self {
        let flows: HashMap<_, _> = flows.into_iter().filter(|&(_, f)| f > 0).collect();
        let mut residual = vec![Vec::new(); network.vertex_count()];
        for ((from, to), capacity) in network.capacities() {
            let flow = flows.get(&(from, to)).copied().unwrap_or(0);
            if flow < capacity {
                residual[from].push(to);
            }
            if flow > 0 {
                residual[to].push(from);
            }
        }
        let mut source_side = vec![false; network.vertex_count()];
        let residual = &residual;
        for vertex in bfs_reach(network.source(), move |&v| residual[v].iter().copied()) {
            source_side[vertex] = true;
        }
        let cut = network
            .capacities()
            .filter(|&((from, to), _)| source_side[from] && !source_side[to])
            .collect();
        MaxFlow {
            value,
            flows,
            cut,
            source_side,
        }
    }
    pub fn value(&self) -> Capacity {
        self.value
    }
    pub fn flow(&self, from: usize, to: usize) -> Capacity {
        self.flows.get(&(from, to)).copied().unwrap_or(0)
    }
    /// Edges leaving the source side of the minimum cut.
    pub fn cut(&self) -> &[((usize, usize), Capacity)] {
        &self.cut
    }
    /// Whether `vertex` is reachable from the source in the residual graph.
    pub fn in_cut(&self, vertex: usize) -> bool {
        self.source_side.get(vertex).copied().unwrap_or(false)
    }
}

/// Solves the max-flow problem posed by an elimination network.
pub trait MaxFlowOracle {
    fn max_flow(&self, network: &EliminationNetwork) -> MaxFlow;
}

/// Edmonds-Karp from the `pathfinding` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdmondsKarp {
    backend: FlowBackend,
}

impl EdmondsKarp {
    pub fn new(backend: FlowBackend) -> Self {
        EdmondsKarp { backend }
    }
}

impl MaxFlowOracle for EdmondsKarp {
    fn max_flow(&self, network: &EliminationNetwork) -> MaxFlow {
        let vertices: Vec<usize> = (0..network.vertex_count()).collect();
        let source = network.source();
        let sink = network.sink();
        let capacities = network.capacities();
        let (flows, value) = match self.backend {
            FlowBackend::Sparse => edmonds_karp_sparse(&vertices, &source, &sink, capacities),
            FlowBackend::Dense => edmonds_karp_dense(&vertices, &source, &sink, capacities),
        };
        debug!(
            backend = ?self.backend,
            value,
            source_capacity = network.source_capacity(),
            "max flow computed"
        );
        MaxFlow::new(network, value, flows)
    }
}
