//! Phase-one priority frontier and phase-two stack frontier.
//!
//! Neither frontier deduplicates on push. The driver filters already-visited
//! states when it pops (lazy deletion), so a state may sit in a frontier
//! several times under different parents.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::rc::Rc;

use crate::node::{FrontierKey, SearchNode};

/// A frontier entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest total first).
#[derive(Debug)]
struct FrontierEntry<S> {
    key: Reverse<FrontierKey>,
    node: Rc<SearchNode<S>>,
}

impl<S> PartialEq for FrontierEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S> Eq for FrontierEntry<S> {}

impl<S> PartialOrd for FrontierEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for FrontierEntry<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-total frontier for bounded best-first expansion.
#[derive(Debug)]
pub struct PriorityFrontier<S> {
    heap: BinaryHeap<FrontierEntry<S>>,
    high_water: usize,
}

impl<S> PriorityFrontier<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            high_water: 0,
        }
    }

    pub fn push(&mut self, node: Rc<SearchNode<S>>) {
        self.heap.push(FrontierEntry {
            key: Reverse(FrontierKey::from(node.as_ref())),
            node,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Pop the lowest-total node.
    #[must_use]
    pub fn pop(&mut self) -> Option<Rc<SearchNode<S>>> {
        self.heap.pop().map(|e| e.node)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Consume the frontier, yielding every remaining node in the heap's
    /// backing-array order.
    ///
    /// This is NOT priority order. Index 0 holds the best entry and the rest
    /// follow the heap layout, so a stack seeded from this sequence pops the
    /// last array slot first.
    #[must_use]
    pub fn into_storage_order(self) -> Vec<Rc<SearchNode<S>>> {
        self.heap.into_vec().into_iter().map(|e| e.node).collect()
    }
}

impl<S> Default for PriorityFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Last-in-first-out frontier for unbounded depth-first expansion.
#[derive(Debug)]
pub struct StackFrontier<S> {
    stack: Vec<Rc<SearchNode<S>>>,
    high_water: usize,
}

impl<S> StackFrontier<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            high_water: 0,
        }
    }

    /// Seed the stack with `nodes`; the last element ends up on top.
    #[must_use]
    pub fn seeded(nodes: Vec<Rc<SearchNode<S>>>) -> Self {
        let high_water = nodes.len();
        Self {
            stack: nodes,
            high_water,
        }
    }

    pub fn push(&mut self, node: Rc<SearchNode<S>>) {
        self.stack.push(node);
        self.high_water = self.high_water.max(self.stack.len());
    }

    #[must_use]
    pub fn pop(&mut self) -> Option<Rc<SearchNode<S>>> {
        self.stack.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl<S> Default for StackFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}
