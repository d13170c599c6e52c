use std::io::Read;
use std::str::FromStr;

use crate::division::{Division, Team};
use crate::error::{EliminationError, Result};

// Reads the standings record format: a team count, then per team its name,
// wins, losses, remaining games and one against entry per team.
struct Tokens<I>(I);

impl<'a, I: Iterator<Item = &'a str>> Tokens<I> {
    fn next(&mut self, what: &str) -> Result<&'a str> {
        self.0.next().ok_or_else(|| {
            EliminationError::MalformedInput(format!("standings ended before {}", what))
        })
    }
    fn next_count(&mut self, what: &str) -> Result<u32> {
        let token = self.next(what)?;
        token.parse().map_err(|_| {
            EliminationError::MalformedInput(format!("expected {}, found {:?}", what, token))
        })
    }
}

impl Division {
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|err| EliminationError::MalformedInput(err.to_string()))?;
        text.parse()
    }

    fn from_tokens<'a, I: Iterator<Item = &'a str>>(tokens: I) -> Result<Self> {
        let mut tokens = Tokens(tokens);
        let n = tokens.next_count("the team count")? as usize;
        if n == 0 {
            return Err(EliminationError::MalformedInput(
                "team count is zero".to_owned(),
            ));
        }
        let mut teams = Vec::with_capacity(n);
        for i in 0..n {
            let name = tokens.next(&format!("the name of team {}", i + 1))?;
            let wins = tokens.next_count(&format!("wins of {}", name))?;
            let losses = tokens.next_count(&format!("losses of {}", name))?;
            let remaining = tokens.next_count(&format!("remaining games of {}", name))?;
            let against = (0..n)
                .map(|j| {
                    let what = format!("games left between {} and team {}", name, j + 1);
                    tokens.next_count(&what)
                })
                .collect::<Result<Vec<_>>>()?;
            teams.push(Team::new(name, wins, losses, remaining, against));
        }
        if let Some(extra) = tokens.0.next() {
            return Err(EliminationError::MalformedInput(format!(
                "unexpected {:?} after the last team",
                extra
            )));
        }
        Division::new(teams)
    }
}

impl FromStr for Division {
    type Err = EliminationError;

    fn from_str(s: &str) -> Result<Self> {
        Division::from_tokens(s.split_whitespace())
    }
}
