use crate::common::TeamIndex;
use crate::division::Division;

/// First team, in standings order, that already has more wins than `target`
/// can reach by winning every game it has left.
///
/// Runs before any network is built: a team found here would give the
/// network a negative sink capacity.
pub fn trivial_elimination(division: &Division, target: TeamIndex) -> Option<TeamIndex> {
    let ceiling = division.ceiling(target);
    (0..division.number_of_teams())
        .filter(|&i| i != target)
        .find(|&i| division.wins_at(i) > ceiling)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::division::Team;
    use crate::testing::{teams4, teams5};

    #[test]
    fn test_montreal() {
        // 77 + 3 < 83
        let division = teams4();
        assert_eq!(trivial_elimination(&division, 3), Some(0));
        for x in 0..3 {
            assert_eq!(trivial_elimination(&division, x), None);
        }
    }

    #[test]
    fn test_tie_is_not_elimination() {
        let division = Division::new(vec![
            Team::new("A", 10, 0, 0, vec![0, 0]),
            Team::new("B", 8, 0, 2, vec![0, 0]),
        ])
        .unwrap();
        assert_eq!(trivial_elimination(&division, 1), None);
    }

    #[test]
    fn test_first_in_standings_order() {
        let division = Division::new(vec![
            Team::new("A", 5, 0, 0, vec![0, 0, 0]),
            Team::new("B", 9, 0, 0, vec![0, 0, 0]),
            Team::new("C", 7, 0, 0, vec![0, 0, 0]),
        ])
        .unwrap();
        assert_eq!(trivial_elimination(&division, 0), Some(1));
        assert_eq!(trivial_elimination(&division, 2), Some(1));
        assert_eq!(trivial_elimination(&division, 1), None);
    }

    #[test]
    fn test_needs_flow() {
        // Detroit can still reach every team on its own
        let division = teams5();
        assert_eq!(trivial_elimination(&division, 4), None);
    }

    #[test]
    fn test_single_team() {
        let division = Division::new(vec![Team::new("A", 0, 10, 0, vec![0])]).unwrap();
        assert_eq!(trivial_elimination(&division, 0), None);
    }
}
