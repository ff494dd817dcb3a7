//! Path reconstruction utilities for graph search
//!
//! Frontier entries do not own a copy of their path. Each entry points at a
//! link in a [`PathArena`]; appending a node pushes a new link whose parent is
//! the extended entry's link. Links are never modified after insertion, so
//! every entry observes an immutable path that shares its prefix with its
//! siblings.

/// Index of a link inside a [`PathArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailId(usize);

#[derive(Debug)]
struct TrailLink<N> {
    node: N,
    parent: Option<TrailId>,
}

/// Append-only store of `(node, parent)` links
#[derive(Debug)]
pub struct PathArena<N> {
    links: Vec<TrailLink<N>>,
}

impl<N: Clone> PathArena<N> {
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Start a new path consisting of `node` alone
    pub fn root(&mut self, node: N) -> TrailId {
        self.push(node, None)
    }

    /// The path ending at `parent` with `node` appended
    pub fn extend(&mut self, parent: TrailId, node: N) -> TrailId {
        self.push(node, Some(parent))
    }

    fn push(&mut self, node: N, parent: Option<TrailId>) -> TrailId {
        let id = TrailId(self.links.len());
        self.links.push(TrailLink { node, parent });
        id
    }

    /// Number of links allocated so far
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Walk parent pointers back to the root and return the path root-first
    pub fn reconstruct(&self, tail: TrailId) -> Vec<N> {
        let mut path = Vec::new();
        let mut current = Some(tail);

        while let Some(TrailId(index)) = current {
            let link = &self.links[index];
            path.push(link.node.clone());
            current = link.parent;
        }

        path.reverse();
        path
    }
}

impl<N: Clone> Default for PathArena<N> {
    fn default() -> Self {
        Self::new()
    }
}
