use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Represents the cost of traversing edges.
///
/// Costs are compared with a total order (`f64::total_cmp`) so they can key a
/// binary heap. A cost is only meaningful to the search when it is finite and
/// non-negative; see [`Cost::is_valid`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Finite and non-negative
    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl std::iter::Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::ZERO, |acc, c| acc + c)
    }
}

impl From<u32> for Cost {
    fn from(cost: u32) -> Self {
        Cost(f64::from(cost))
    }
}

impl From<f64> for Cost {
    fn from(cost: f64) -> Self {
        Cost(cost)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Policy for edge costs that break the non-negative precondition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostPolicy {
    /// Fail with `InvalidEdgeCost` when a negative or non-finite cost is seen
    #[default]
    Reject,
    /// Skip validation; results on such graphs are undefined
    Unchecked,
}

impl std::str::FromStr for CostPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(CostPolicy::Reject),
            "unchecked" => Ok(CostPolicy::Unchecked),
            other => Err(format!(
                "unknown cost policy '{}' (expected: reject, unchecked)",
                other
            )),
        }
    }
}

/// A directed, weighted edge to `to`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge<N> {
    pub to: N,
    pub cost: Cost,
}

impl<N> Edge<N> {
    pub fn new(to: N, cost: impl Into<Cost>) -> Self {
        Edge {
            to,
            cost: cost.into(),
        }
    }
}

/// A minimum-cost path from start to goal, both inclusive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult<N> {
    pub path: Vec<N>,
    pub cost: Cost,
}

impl<N> PathResult<N> {
    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Counters collected during one search invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes finalized and expanded
    pub expansions: usize,
    /// Entries dequeued for nodes that were already visited
    pub stale_discards: usize,
    /// Frontier insertions, including the start entry
    pub pushes: usize,
    /// Largest frontier length observed
    pub frontier_high_water: usize,
}
