#![allow(dead_code)]

use graphirino::{AdjacencyList, GraphNode};

/// 1 -> {2, 3}, 2 -> {4}; 3, 4 and 5 are leaves.
pub fn dfs_example() -> AdjacencyList<i32, (), ()> {
    AdjacencyList::new()
        .add(1, (), [(2, ()), (3, ())])
        .add(2, (), [(4, ())])
        .add(3, (), [])
        .add(4, (), [])
        .add(5, (), [])
}

/// 1 -> {2, 3}.
pub fn simple_tree() -> AdjacencyList<i32, (), ()> {
    AdjacencyList::new()
        .add(1, (), [(2, ()), (3, ())])
        .add(2, (), [])
        .add(3, (), [])
}

pub fn ids<Nd: GraphNode<Id = i32>>(nodes: &[Nd]) -> Vec<i32> {
    nodes.iter().map(|node| *node.id()).collect()
}
