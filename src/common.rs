use std::fmt::Display;

/// Position of a team in its division, in standings order.
pub type TeamIndex = usize;

/// Edge capacity and flow amount of an elimination network.
pub type Capacity = i64;

#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Vertex {
    Source,
    // games left between two teams, lower index first
    Game(TeamIndex, TeamIndex),
    Team(TeamIndex),
    Sink,
}

impl Vertex {
    pub fn team(&self) -> Option<TeamIndex> {
        match self {
            Vertex::Team(i) => Some(*i),
            _ => None,
        }
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Vertex::Source => write!(f, "s"),
            Vertex::Game(i, j) => write!(f, "{}-{}", i, j),
            Vertex::Team(i) => write!(f, "{}", i),
            Vertex::Sink => write!(f, "t"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Vertex::Source.to_string(), "s");
        assert_eq!(Vertex::Game(0, 3).to_string(), "0-3");
        assert_eq!(Vertex::Team(2).to_string(), "2");
        assert_eq!(Vertex::Sink.to_string(), "t");
    }

    #[test]
    fn test_team() {
        assert_eq!(Vertex::Team(4).team(), Some(4));
        assert_eq!(Vertex::Game(1, 4).team(), None);
        assert_eq!(Vertex::Source.team(), None);
        assert_eq!(Vertex::Sink.team(), None);
    }
}
