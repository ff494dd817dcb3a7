use crate::error::{Result, UcsError};
use crate::graph::path::{PathArena, TrailId};
use crate::graph::types::{Cost, CostPolicy, PathResult, SearchStats};
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Frontier entry for the min-heap.
///
/// Ordered by accumulated cost, then by insertion sequence so that equal-cost
/// entries leave the frontier first-in-first-out.
#[derive(Debug, Clone)]
pub struct HeapEntry<N> {
    pub node: N,
    pub accumulated_cost: Cost,
    pub sequence: u64,
    trail: TrailId,
}

impl<N> PartialEq for HeapEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.accumulated_cost == other.accumulated_cost && self.sequence == other.sequence
    }
}

impl<N> Eq for HeapEntry<N> {}

impl<N> PartialOrd for HeapEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for HeapEntry<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated_cost
            .cmp(&other.accumulated_cost)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Knobs for [`uniform_cost_search_with`]
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Handling of negative or non-finite edge costs met during expansion
    pub cost_policy: CostPolicy,
    /// Fail once this many nodes have been expanded without reaching the goal
    pub max_expansions: Option<usize>,
    /// Checked between dequeues; the search stops with `Interrupted` once set
    pub interrupt: Option<Arc<AtomicBool>>,
}

impl SearchOptions {
    /// No cost validation, no limit, no interrupt
    pub fn unchecked() -> Self {
        Self {
            cost_policy: CostPolicy::Unchecked,
            ..Self::default()
        }
    }

    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    fn is_interrupted(&self) -> bool {
        self.interrupt
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }
}

/// Result of a search together with its counters
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<N> {
    pub result: Option<PathResult<N>>,
    pub stats: SearchStats,
}

/// State owned by a single search invocation
struct SearchState<N> {
    visited: HashSet<N>,
    heap: BinaryHeap<Reverse<HeapEntry<N>>>,
    arena: PathArena<N>,
    next_sequence: u64,
    stats: SearchStats,
}

impl<N: Clone + Eq + Hash> SearchState<N> {
    fn new() -> Self {
        Self {
            visited: HashSet::new(),
            heap: BinaryHeap::new(),
            arena: PathArena::new(),
            next_sequence: 0,
            stats: SearchStats::default(),
        }
    }

    fn push(&mut self, node: N, accumulated_cost: Cost, trail: TrailId) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(HeapEntry {
            node,
            accumulated_cost,
            sequence,
            trail,
        }));
        self.stats.pushes += 1;
        self.stats.frontier_high_water = self.stats.frontier_high_water.max(self.heap.len());
    }

    fn finish(self, result: Option<PathResult<N>>) -> SearchOutcome<N> {
        SearchOutcome {
            result,
            stats: self.stats,
        }
    }
}

/// Finalize `entry`'s node and push its unvisited neighbors
fn expand<N, G>(
    graph: &G,
    entry: HeapEntry<N>,
    state: &mut SearchState<N>,
    opts: &SearchOptions,
) -> Result<()>
where
    N: Clone + Eq + Hash + Debug,
    G: GraphProvider<N> + ?Sized,
{
    tracing::trace!(node = ?entry.node, cost = %entry.accumulated_cost, "expand");

    state.visited.insert(entry.node.clone());
    state.stats.expansions += 1;

    for edge in graph.outbound_edges(&entry.node) {
        if opts.cost_policy == CostPolicy::Reject && !edge.cost.is_valid() {
            return Err(UcsError::invalid_edge_cost(
                &entry.node,
                &edge.to,
                edge.cost.value(),
            ));
        }

        if state.visited.contains(&edge.to) {
            continue;
        }

        let trail = state.arena.extend(entry.trail, edge.to.clone());
        state.push(edge.to.clone(), entry.accumulated_cost + edge.cost, trail);
    }

    Ok(())
}

/// Find a minimum-cost path from `start` to `goal`.
///
/// Returns `None` when the frontier runs dry without dequeuing `goal`. Edge
/// costs are not validated; with negative costs the result is undefined,
/// although the search still terminates.
pub fn uniform_cost_search<N, G>(graph: &G, start: &N, goal: &N) -> Option<PathResult<N>>
where
    N: Clone + Eq + Hash + Debug,
    G: GraphProvider<N> + ?Sized,
{
    // Without a limit or an interrupt flag and with validation off, no error path is reachable
    uniform_cost_search_with(graph, start, goal, &SearchOptions::unchecked())
        .ok()
        .and_then(|outcome| outcome.result)
}

/// Uniform-cost search with cost validation, an expansion budget, and
/// cooperative cancellation.
///
/// The goal test happens when an entry is dequeued, never when it is pushed:
/// the frontier only ever yields non-decreasing costs, so the first time the
/// goal comes off the heap its cost is minimal.
#[tracing::instrument(level = "debug", skip_all, fields(start = ?start, goal = ?goal))]
pub fn uniform_cost_search_with<N, G>(
    graph: &G,
    start: &N,
    goal: &N,
    opts: &SearchOptions,
) -> Result<SearchOutcome<N>>
where
    N: Clone + Eq + Hash + Debug,
    G: GraphProvider<N> + ?Sized,
{
    let mut state = SearchState::new();
    let root = state.arena.root(start.clone());
    state.push(start.clone(), Cost::ZERO, root);

    while let Some(Reverse(entry)) = state.heap.pop() {
        if opts.is_interrupted() {
            tracing::info!(
                expansions = state.stats.expansions,
                frontier = state.heap.len(),
                "search interrupted"
            );
            return Err(UcsError::Interrupted);
        }

        if entry.node == *goal {
            let path = state.arena.reconstruct(entry.trail);
            tracing::debug!(
                cost = %entry.accumulated_cost,
                hops = path.len() - 1,
                expansions = state.stats.expansions,
                stale_discards = state.stats.stale_discards,
                "goal reached"
            );
            let result = PathResult {
                path,
                cost: entry.accumulated_cost,
            };
            return Ok(state.finish(Some(result)));
        }

        if state.visited.contains(&entry.node) {
            state.stats.stale_discards += 1;
            continue;
        }

        if let Some(limit) = opts.max_expansions {
            if state.stats.expansions >= limit {
                tracing::warn!(limit, "expansion limit reached");
                return Err(UcsError::ExpansionLimit { limit });
            }
        }

        expand(graph, entry, &mut state, opts)?;
    }

    tracing::debug!(
        expansions = state.stats.expansions,
        stale_discards = state.stats.stale_discards,
        "frontier exhausted without reaching goal"
    );
    Ok(state.finish(None))
}
