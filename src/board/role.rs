use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// The two sides of a Tic-Tac-Total game. The odds player places 1, 3, or 5;
/// the evens player places 2, 4, or 6. Numbers are reusable.
#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord)]
pub enum Role {
    Odds = 0,
    Evens = 1,
}

impl Role {
    const ALL: [Role; 2] = [Role::Odds, Role::Evens];

    pub fn opposite(&self) -> Self {
        match self {
            Role::Odds => Role::Evens,
            Role::Evens => Role::Odds,
        }
    }

    /// The numbers this player is allowed to place, in ascending order.
    pub fn numbers(&self) -> [u8; 3] {
        match self {
            Role::Odds => [1, 3, 5],
            Role::Evens => [2, 4, 6],
        }
    }

    pub fn owns(&self, number: u8) -> bool {
        self.numbers().contains(&number)
    }

    pub fn random() -> Self {
        *Self::ALL.choose(&mut rand::thread_rng()).unwrap()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role_str = match self {
            Role::Odds => "odds",
            Role::Evens => "evens",
        };
        write!(f, "{}", role_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Role {
    type Err = ParseError;
    fn from_str(role: &str) -> Result<Self, Self::Err> {
        match role {
            "odds" => Ok(Role::Odds),
            "evens" => Ok(Role::Evens),
            "random" => Ok(Role::random()),
            _ => Err("invalid role; options are: odds, evens, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random() {
        assert!(Role::ALL.contains(&Role::random()));
    }

    #[test]
    fn test_parse_odds() {
        assert_eq!(Role::Odds, Role::from_str("odds").unwrap());
    }

    #[test]
    fn test_parse_evens() {
        assert_eq!(Role::Evens, Role::from_str("evens").unwrap());
    }

    #[test]
    fn test_parse_random() {
        let rand_role = Role::from_str("random").unwrap();
        assert!(Role::ALL.contains(&rand_role));
    }

    #[test]
    fn test_parse_rejects_unknown_role() {
        assert!(Role::from_str("threes").is_err());
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Role::Odds.opposite(), Role::Evens);
        assert_eq!(Role::Evens.opposite(), Role::Odds);
    }

    #[test]
    fn test_ownership_partitions_the_numbers() {
        for number in 1..=6u8 {
            let owned_by_odds = Role::Odds.owns(number);
            let owned_by_evens = Role::Evens.owns(number);
            assert!(
                owned_by_odds != owned_by_evens,
                "{} should belong to exactly one side",
                number
            );
            assert_eq!(owned_by_odds, number % 2 == 1);
        }
        assert!(!Role::Odds.owns(0));
        assert!(!Role::Evens.owns(7));
    }
}
