use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use quickcheck::{Arbitrary, Gen};

use crate::prelude::*;
use crate::tracing_support::{debug_span, init_tracing};
use crate::{AdjacencyList, Graph};

/// Random declarations over a small id space.
///
/// Every node id used by an edge is declared, and some nodes and edges are
/// declared more than once with different payloads.
#[derive(Debug, Clone)]
pub struct ArbAdjacencyList {
    pub list: AdjacencyList<u8, u8, u8>,
    /// Node declarations in order, as `(id, payload)`.
    pub declared_nodes: Vec<(u8, u8)>,
    /// Edge declarations in order, as `(source, target)`.
    pub declared_edges: Vec<(u8, u8)>,
    declared_edge_data: Vec<u8>,
}

impl ArbAdjacencyList {
    /// Gets the distinct node ids in first-declaration order.
    pub fn node_ids(&self) -> Vec<u8> {
        let mut seen = HashSet::new();
        self.declared_nodes
            .iter()
            .map(|&(id, _)| id)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    pub fn last_node_data(&self) -> HashMap<u8, u8> {
        self.declared_nodes.iter().copied().collect()
    }

    pub fn last_edge_data(&self) -> HashMap<(u8, u8), u8> {
        self.declared_edges
            .iter()
            .copied()
            .zip(self.declared_edge_data.iter().copied())
            .collect()
    }
}

impl Arbitrary for ArbAdjacencyList {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_ids = usize::arbitrary(g) % 12;
        let mut pool: Vec<u8> = Vec::with_capacity(num_ids);
        while pool.len() < num_ids {
            let id = u8::arbitrary(g);
            if !pool.contains(&id) {
                pool.push(id);
            }
        }

        // Every id once, then a few redeclarations.
        let mut declaration_ids = pool.clone();
        if !pool.is_empty() {
            for _ in 0..usize::arbitrary(g) % 4 {
                declaration_ids.push(pool[usize::arbitrary(g) % pool.len()]);
            }
        }

        let mut list = AdjacencyList::new();
        let mut declared_nodes = Vec::new();
        let mut declared_edges = Vec::new();
        let mut declared_edge_data = Vec::new();
        for id in declaration_ids {
            let data = u8::arbitrary(g);
            let num_edges = usize::arbitrary(g) % 4;
            let edges: Vec<(u8, u8)> = (0..num_edges)
                .map(|_| (pool[usize::arbitrary(g) % pool.len()], u8::arbitrary(g)))
                .collect();
            for &(target, edge_data) in &edges {
                declared_edges.push((id, target));
                declared_edge_data.push(edge_data);
            }
            declared_nodes.push((id, data));
            list = list.add(id, data, edges);
        }

        ArbAdjacencyList {
            list,
            declared_nodes,
            declared_edges,
            declared_edge_data,
        }
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Checks the internal consistency of a graph.
pub fn check_graph_consistency<Nd: GraphNode>(graph: &Graph<Nd>) {
    init_tracing();
    let _span = debug_span!("check_graph_consistency").entered();

    // Node ids are unique and resolve to themselves.
    assert!(!has_duplicates(graph.nodes().iter().map(|node| node.id())));
    assert_eq!(graph.nodes().len(), graph.num_nodes());
    assert_eq!(graph.node_table().is_empty(), graph.num_nodes() == 0);
    for node in graph.nodes() {
        assert!(graph.node_table().contains(node.id()));
        let found = graph.find_node_by_id(node.id());
        assert_eq!(found.map(|found| found.id()), Some(node.id()));
    }

    // Edges are unique and both endpoints are in the graph.
    assert!(!has_duplicates(
        graph
            .edges()
            .iter()
            .map(|edge| (edge.source_id(), edge.target_id()))
    ));
    for edge in graph.edges() {
        assert_eq!(edge.source_node().map(|n| n.id().clone()).as_ref(), Ok(edge.source_id()));
        assert_eq!(edge.target_node().map(|n| n.id().clone()).as_ref(), Ok(edge.target_id()));
    }

    let index_is_own = graph
        .incoming_edges_by_node_id()
        .is_indexing(graph.node_table());
    for node in graph.nodes() {
        let id = node.id();
        let touching = graph
            .edges()
            .iter()
            .filter(|edge| edge.source_id() == id || edge.target_id() == id)
            .count();
        let outgoing = graph.edges().iter().filter(|edge| edge.source_id() == id).count();
        let incoming = graph.edges().iter().filter(|edge| edge.target_id() == id).count();

        // Each edge appears once in the edge list of each endpoint, once in
        // total for a self loop.
        assert_eq!(node.raw().edges().len(), touching);
        assert!(
            node.raw()
                .edges()
                .iter()
                .all(|edge| edge.source_id() == id || edge.target_id() == id)
        );
        assert_eq!(node.outgoing_nodes().len(), outgoing);
        assert_eq!(node.incoming_nodes().len(), incoming);

        let indexed = graph.incoming_edges_by_node_id().num_edges_into(id);
        assert_eq!(node.incoming_edges().len(), indexed);
        if index_is_own {
            assert_eq!(indexed, incoming);
        } else {
            // A subgraph's index also covers edges of the graph it was taken
            // from.
            assert!(indexed >= incoming);
        }
    }
}
