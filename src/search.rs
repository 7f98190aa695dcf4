use std::collections::HashSet;

use crate::{binary_tree::BinaryTreeGraphNode, node::GraphNode};

const DEFAULT_HASH_SET_CAPACITY: usize = 64;

/// Depth-first search over outgoing edges with an explicit stack.
///
/// Successors are pushed in declaration order, so among siblings the last
/// declared one is visited first.
pub struct DfsIterator<Nd: GraphNode> {
    visited: HashSet<Nd::Id>,
    stack: Vec<Nd>,
}

impl<Nd: GraphNode> DfsIterator<Nd> {
    pub fn new(start: Nd) -> Self {
        Self {
            visited: HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            stack: vec![start],
        }
    }
}

impl<Nd: GraphNode> Iterator for DfsIterator<Nd> {
    type Item = Nd;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if self.visited.insert(node.id().clone()) {
                for successor in node.outgoing_nodes() {
                    if !self.visited.contains(successor.id()) {
                        self.stack.push(successor);
                    }
                }
                return Some(node);
            }
        }
        None
    }
}

/// Work-list traversal of the nodes reachable from a start node, seeded with
/// the start node's successors.  The start node itself is never yielded.
pub struct ReachableIterator<Nd: GraphNode> {
    queued: HashSet<Nd::Id>,
    stack: Vec<Nd>,
}

impl<Nd: GraphNode> ReachableIterator<Nd> {
    pub fn new(start: &Nd) -> Self {
        let mut queued = HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY);
        queued.insert(start.id().clone());
        let stack: Vec<Nd> = start
            .outgoing_nodes()
            .into_iter()
            .filter(|successor| queued.insert(successor.id().clone()))
            .collect();
        Self { queued, stack }
    }
}

impl<Nd: GraphNode> Iterator for ReachableIterator<Nd> {
    type Item = Nd;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        for successor in node.outgoing_nodes() {
            if self.queued.insert(successor.id().clone()) {
                self.stack.push(successor);
            }
        }
        Some(node)
    }
}

/// In-order walk of a binary tree: left subtree, node, right subtree.
pub struct InorderIterator<Nd: BinaryTreeGraphNode> {
    stack: Vec<Nd>,
    current: Option<Nd>,
}

impl<Nd: BinaryTreeGraphNode> InorderIterator<Nd> {
    pub fn new(root: Nd) -> Self {
        Self {
            stack: Vec::new(),
            current: Some(root),
        }
    }
}

impl<Nd: BinaryTreeGraphNode> Iterator for InorderIterator<Nd> {
    type Item = Nd;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current.take() {
            self.current = node.left_node();
            self.stack.push(node);
        }
        let node = self.stack.pop()?;
        self.current = node.right_node();
        Some(node)
    }
}
