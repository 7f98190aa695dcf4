use std::{collections::HashSet, ops::Deref};

use derivative::Derivative;

use crate::{
    adjacency_list::AdjacencyList,
    error::Result,
    graph::Graph,
    node::{GraphNode, Node},
    raw::NodeId,
    tracing_support::{debug, debug_span},
};

/// A graph whose nodes are all reachable from a single depth-first search.
///
/// Connectivity is promised by the constructor's caller, not checked.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""))]
pub struct ConnectedGraph<Nd: GraphNode> {
    graph: Graph<Nd>,
}

impl<I: NodeId, N, E> ConnectedGraph<Node<I, N, E>> {
    pub fn from_adjacency_list(adjacency_list: &AdjacencyList<I, N, E>) -> Result<Self> {
        Ok(Self::from_graph(Graph::from_adjacency_list(adjacency_list)?))
    }
}

impl<Nd: GraphNode> ConnectedGraph<Nd> {
    /// Wraps a graph the caller knows to be connected.
    pub fn from_graph(graph: Graph<Nd>) -> Self {
        Self { graph }
    }

    /// Splits `graph` into the node sets reached by depth-first searches over
    /// outgoing edges.
    ///
    /// Nodes are taken in graph order; each node not yet visited starts a new
    /// search, and the nodes it reaches become one subgraph.  Only outgoing
    /// edges are followed, so a search can reach nodes an earlier search
    /// already claimed: if node 2 precedes node 1 and 1 -> 2, the result is
    /// `[2]` followed by `[2, 1]`.
    pub fn components(graph: &Graph<Nd>) -> Vec<Self> {
        let _span = debug_span!("connected_components", nodes = graph.num_nodes()).entered();
        let mut visited: HashSet<Nd::Id> = HashSet::with_capacity(graph.num_nodes());
        let mut components = Vec::new();
        for node in graph.nodes() {
            if visited.contains(node.id()) {
                continue;
            }
            let component_ids: Vec<Nd::Id> = node
                .search_depth_first()
                .iter()
                .map(|dfs_node| dfs_node.id().clone())
                .collect();
            visited.extend(component_ids.iter().cloned());
            components.push(Self::from_graph(graph.create_subgraph(&component_ids)));
        }
        debug!(components = components.len(), "decomposed graph");
        components
    }

    pub fn graph(&self) -> &Graph<Nd> {
        &self.graph
    }

    pub fn into_graph(self) -> Graph<Nd> {
        self.graph
    }
}

impl<Nd: GraphNode> Deref for ConnectedGraph<Nd> {
    type Target = Graph<Nd>;

    fn deref(&self) -> &Self::Target {
        &self.graph
    }
}
