use std::cmp::Ordering;

use ordered_float::OrderedFloat;

/// Partial decision state of the branch-and-bound search.
///
/// The first `depth` items (in ratio order) have been decided on, which corresponds to
/// a `level` of `depth - 1`: the root has depth 0 and decided nothing.
/// The items taken so far are not stored in the node but in a [`DecisionArena`],
/// the node only keeps the index of its most recent "take" decision.
#[derive(Debug, Clone, Copy)]
pub struct SearchNode {
    pub depth: usize,
    pub profit: f64,
    pub weight: f64,
    /// Upper bound on the profit reachable from this node
    pub bound: f64,
    /// Most recent take decision on the path to this node, `None` if nothing was taken
    pub chain: Option<usize>,
}

impl SearchNode {
    pub fn root(bound: f64) -> Self {
        SearchNode {
            depth: 0,
            profit: 0.0,
            weight: 0.0,
            bound,
            chain: None,
        }
    }
}

/// Nodes are ordered by bound, so a [`BinaryHeap`](std::collections::BinaryHeap) pops the highest bound first.
/// Ties are broken in favour of deeper nodes and then higher profit, which reach a good incumbent sooner.
impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.bound)
            .cmp(&OrderedFloat(other.bound))
            .then(self.depth.cmp(&other.depth))
            .then(OrderedFloat(self.profit).cmp(&OrderedFloat(other.profit)))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}

/// A single "take" decision, linked to the previous take decision on the same path.
#[derive(Debug, Clone, Copy)]
struct TakeRecord {
    item: usize,
    parent: Option<usize>,
}

/// Parent-pointer arena of take decisions shared by all nodes of a search.
/// Sibling nodes share their common prefix instead of each owning a copy of the selection.
#[derive(Debug, Default)]
pub struct DecisionArena {
    records: Vec<TakeRecord>,
}

impl DecisionArena {
    /// Registers taking `item` after the decisions in `parent`, returns the new chain
    pub fn take(&mut self, item: usize, parent: Option<usize>) -> usize {
        self.records.push(TakeRecord { item, parent });
        self.records.len() - 1
    }

    /// All items taken on the chain, in decision order
    pub fn materialize(&self, chain: Option<usize>) -> Vec<usize> {
        let mut items = vec![];
        let mut cursor = chain;
        while let Some(idx) = cursor {
            let record = self.records[idx];
            items.push(record.item);
            cursor = record.parent;
        }
        items.reverse();
        items
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
