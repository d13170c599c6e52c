use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::common::{Capacity, TeamIndex};
use crate::division::{Division, Team};

pub const TEAMS4: &str = "4
Atlanta       83 71  8  0 1 6 1
Philadelphia  80 79  3  1 0 0 2
New_York      78 78  6  6 0 0 0
Montreal      77 82  3  1 2 0 0
";

pub const TEAMS5: &str = "5
New_York    75 59 28   0 3 8 7 3
Baltimore   71 63 28   3 0 2 7 4
Boston      69 66 27   8 2 0 0 0
Toronto     63 72 27   7 7 0 0 0
Detroit     49 86 27   3 4 0 0 0
";

// Toronto's ceiling of 90 is only beaten by New York and Baltimore
// splitting their 36 games. Rows deliberately exceed `remaining`.
pub const AL_EAST4: &str = "4
New_York    75 59 28   0 36 0 4
Baltimore   71 63 28  36  0 0 2
Boston      69 66 27   0  0 0 3
Toronto     63 72 27   4  2 3 0
";

pub fn teams4() -> Division {
    TEAMS4.parse().unwrap()
}

pub fn teams5() -> Division {
    TEAMS5.parse().unwrap()
}

pub fn al_east4() -> Division {
    AL_EAST4.parse().unwrap()
}

pub fn random_division(num_teams: usize, seed: u64) -> Division {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut against = vec![vec![0; num_teams]; num_teams];
    for i in 0..num_teams {
        for j in i + 1..num_teams {
            let games = rng.gen_range(0..6);
            against[i][j] = games;
            against[j][i] = games;
        }
    }
    let teams = against
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let outside: u32 = rng.gen_range(0..4);
            let remaining = row.iter().sum::<u32>() + outside;
            Team::new(
                &format!("T{}", i),
                rng.gen_range(50..80),
                rng.gen_range(50..80),
                remaining,
                row,
            )
        })
        .collect();
    Division::new(teams).unwrap()
}

/// Every non-empty subset of `others`.
fn subsets(others: &[TeamIndex]) -> impl Iterator<Item = Vec<TeamIndex>> + '_ {
    (1u32..1 << others.len()).map(move |mask| {
        others
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, &team)| team)
            .collect()
    })
}

/// `target` is eliminated iff some subset of the others is bound to average
/// more wins than `target` can reach.
pub fn brute_force_eliminated(division: &Division, target: TeamIndex) -> bool {
    let others: Vec<TeamIndex> = (0..division.number_of_teams())
        .filter(|&i| i != target)
        .collect();
    let ceiling = division.ceiling(target);
    let found = subsets(&others).any(|subset| {
        let mut total: Capacity = subset.iter().map(|&j| division.wins_at(j)).sum();
        for (a, &i) in subset.iter().enumerate() {
            for &j in &subset[a + 1..] {
                total += division.against_at(i, j);
            }
        }
        total > ceiling * subset.len() as Capacity
    });
    found
}
