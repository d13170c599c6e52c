//! Decides whether teams of a division can still finish first, reducing the
//! question to a maximum flow and reading a certificate off the minimum cut.

mod common;
mod config;
mod division;
mod elimination;
mod error;
mod network;
mod oracle;
mod standings;
mod trivial;

#[cfg(test)]
mod testing;

pub use common::{Capacity, TeamIndex, Vertex};
pub use config::{EliminationConfig, FlowBackend};
pub use division::{Division, Team};
pub use elimination::{is_certificate, Certificate, Elimination, Eliminator};
pub use error::{EliminationError, Result};
pub use network::{pair_count, pair_index, EliminationNetwork};
pub use oracle::{EdmondsKarp, MaxFlow, MaxFlowOracle};
pub use trivial::trivial_elimination;
