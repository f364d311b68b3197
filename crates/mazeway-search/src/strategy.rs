use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// The closed set of search strategies.
///
/// Selecting by name goes through [`FromStr`], so an unknown name is a
/// typed [`SearchError::UnknownStrategy`] instead of a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// FIFO expansion; shortest segment under unit edge cost.
    BreadthFirst,
    /// LIFO expansion; finds some path, no optimality guarantee.
    DepthFirst,
    /// Expands the frontier cell closest to an objective by Manhattan
    /// estimate, ignoring accumulated cost. Not optimal.
    Greedy,
    /// Priority = path cost + Manhattan estimate; shortest segment under
    /// unit edge cost.
    AStar,
}

impl Strategy {
    /// Every strategy, in documentation order.
    pub const ALL: [Strategy; 4] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::Greedy,
        Strategy::AStar,
    ];

    /// Canonical short name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirst => "dfs",
            Strategy::Greedy => "greedy",
            Strategy::AStar => "astar",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Strategy::BreadthFirst),
            "dfs" => Ok(Strategy::DepthFirst),
            "greedy" => Ok(Strategy::Greedy),
            "astar" => Ok(Strategy::AStar),
            other => Err(SearchError::UnknownStrategy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_round_trips_through_from_str() {
        for s in Strategy::ALL {
            assert_eq!(s.name().parse::<Strategy>(), Ok(s));
        }
    }

    #[test]
    fn unknown_name_is_a_typed_error() {
        let err = "ucs".parse::<Strategy>().unwrap_err();
        assert_eq!(err, SearchError::UnknownStrategy("ucs".to_string()));
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Strategy::AStar.to_string(), "astar");
        assert_eq!(Strategy::BreadthFirst.to_string(), "bfs");
    }
}
