//! Search strategy selection

use std::fmt;

/// Which traversal to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// Memoized depth-first exploration (default, terminates on every input)
    #[default]
    Explore,
    /// Greedy trail building with threshold relaxation
    Greedy,
}

impl StrategyKind {
    /// Create strategy from name string
    ///
    /// Supported names: "explore", "dfs", "greedy", "climb".
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "explore" | "dfs" => Some(Self::Explore),
            "greedy" | "climb" => Some(Self::Greedy),
            _ => None,
        }
    }

    /// Canonical name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Explore => "explore",
            Self::Greedy => "greedy",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
