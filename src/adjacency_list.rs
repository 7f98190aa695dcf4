//! Accumulates node and outgoing-edge declarations and materialises them into
//! the parts every graph layer is constructed from.
use std::{collections::HashMap, sync::Arc};

use derivative::Derivative;

use crate::{
    edge::Edge,
    error::{GraphError, Result, render_id},
    node::{GraphNode, NodeFactory},
    node_table::{IncomingEdgeIndex, IncomingEdges, NodeTable, group_by_target},
    raw::{NodeId, RawEdge, RawNode},
    tracing_support::{debug, debug_span, trace},
    util::InsertionOrderedMap,
};

/// Node and edge declarations for one graph.
///
/// Declaring a node id or a (source, target) pair a second time replaces the
/// earlier payload but keeps the earlier position.  Edges may name targets
/// that are declared later; every endpoint must be declared by the time
/// [`AdjacencyList::build`] runs.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "I: Clone"),
    Debug(bound = "I: std::fmt::Debug, N: std::fmt::Debug, E: std::fmt::Debug"),
    Default(bound = "")
)]
pub struct AdjacencyList<I, N, E> {
    nodes: InsertionOrderedMap<I, Arc<N>>,
    edges: InsertionOrderedMap<(I, I), Arc<E>>,
}

/// The output of [`AdjacencyList::build`].
pub struct GraphParts<Nd: GraphNode> {
    pub node_table: Arc<NodeTable<Nd>>,
    pub incoming_edges: Arc<IncomingEdgeIndex<Nd>>,
    pub outgoing_edges: HashMap<Nd::Id, Vec<Edge<Nd>>>,
    pub edges: Vec<Edge<Nd>>,
    pub factory: NodeFactory<Nd>,
}

impl<I: NodeId, N, E> AdjacencyList<I, N, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a node together with its outgoing edges, given as
    /// `(target id, edge payload)` pairs.
    pub fn add(mut self, id: I, data: N, outgoing_edges: impl IntoIterator<Item = (I, E)>) -> Self {
        if self.nodes.insert(id.clone(), Arc::new(data)).is_some() {
            trace!(node = ?id, "node declaration replaced");
        }
        for (target_id, edge_data) in outgoing_edges {
            let pair = (id.clone(), target_id);
            if self.edges.insert(pair.clone(), Arc::new(edge_data)).is_some() {
                trace!(source = ?pair.0, target = ?pair.1, "edge declaration replaced");
            }
        }
        self
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn node_data(&self, id: &I) -> Option<&N> {
        self.nodes.get(id).map(|data| &**data)
    }

    pub fn edge_data(&self, source_id: &I, target_id: &I) -> Option<&E> {
        self.edges
            .get(&(source_id.clone(), target_id.clone()))
            .map(|data| &**data)
    }

    /// Materialises the declarations, wrapping every node with `factory`.
    ///
    /// Fails if an edge names a node id that was never declared.
    pub fn build<Nd>(&self, factory: NodeFactory<Nd>) -> Result<GraphParts<Nd>>
    where
        Nd: GraphNode<Id = I, Data = N, EdgeData = E>,
    {
        let _span = debug_span!(
            "adjacency_list_build",
            nodes = self.nodes.len(),
            edges = self.edges.len()
        )
        .entered();

        let mut edges_by_node: HashMap<I, Vec<Arc<RawEdge<I, E>>>> = HashMap::new();
        let mut raw_edges = Vec::with_capacity(self.edges.len());
        for ((source_id, target_id), data) in self.edges.iter() {
            for endpoint in [source_id, target_id] {
                if !self.nodes.contains_key(endpoint) {
                    return Err(GraphError::UndeclaredNode {
                        from: render_id(source_id),
                        to: render_id(target_id),
                        missing: render_id(endpoint),
                    });
                }
            }
            let raw_edge = Arc::new(RawEdge::new(
                source_id.clone(),
                target_id.clone(),
                data.clone(),
            ));
            edges_by_node
                .entry(source_id.clone())
                .or_default()
                .push(raw_edge.clone());
            if !raw_edge.is_self_loop() {
                edges_by_node
                    .entry(target_id.clone())
                    .or_default()
                    .push(raw_edge.clone());
            }
            raw_edges.push(raw_edge);
        }

        let raw_nodes = self
            .nodes
            .iter()
            .map(|(id, data)| {
                let mut raw_node = RawNode::new(id.clone(), data.clone());
                for raw_edge in edges_by_node.remove(id).unwrap_or_default() {
                    raw_node.push_edge(raw_edge);
                }
                raw_node
            })
            .collect();
        let node_table = NodeTable::assemble(
            raw_nodes,
            IncomingEdges::Fresh(group_by_target(&raw_edges)),
            factory,
        );

        let mut outgoing_edges: HashMap<I, Vec<Edge<Nd>>> = HashMap::new();
        let edges: Vec<Edge<Nd>> = raw_edges
            .into_iter()
            .map(|raw_edge| {
                let edge = Edge::new(raw_edge, node_table.clone());
                outgoing_edges
                    .entry(edge.source_id().clone())
                    .or_default()
                    .push(edge.clone());
                edge
            })
            .collect();
        debug!(
            nodes = node_table.len(),
            edges = edges.len(),
            "built graph parts"
        );

        Ok(GraphParts {
            incoming_edges: node_table.incoming_edges().clone(),
            node_table,
            outgoing_edges,
            edges,
            factory,
        })
    }
}
