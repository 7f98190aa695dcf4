//! `Graph` owns the node table and edge list produced by one build and is the
//! base of the specialised views: [`crate::ConnectedGraph`], [`crate::Tree`]
//! and [`crate::BinaryTree`] each wrap the layer below and dereference to it.
//!
//! Graphs are immutable once built.  Deriving a subgraph or re-wrapping the
//! nodes with another node type always produces fresh raw nodes, raw edges
//! and node table; only payloads are shared.
use std::{
    collections::{HashMap, HashSet},
    fmt::{self, Debug},
    sync::Arc,
};

use derivative::Derivative;

use crate::{
    adjacency_list::{AdjacencyList, GraphParts},
    edge::Edge,
    error::Result,
    node::{GraphNode, Node, NodeFactory},
    node_table::{IncomingEdgeIndex, IncomingEdges, NodeTable, group_by_target},
    raw::{NodeId, RawEdge, RawNode},
    tracing_support::{debug, debug_span},
};

type DetachedParts<I, N, E> = (Vec<RawNode<I, N, E>>, Vec<Arc<RawEdge<I, E>>>);

#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct Graph<Nd: GraphNode> {
    node_table: Arc<NodeTable<Nd>>,
    edges: Vec<Edge<Nd>>,
    factory: NodeFactory<Nd>,
    /// The table the incoming-edge index resolves against.  This is the
    /// graph's own table unless the graph is a subgraph, in which case it is
    /// the table of the graph the index was built for; holding it keeps that
    /// index usable for as long as the subgraph lives.
    incoming_origin: Arc<NodeTable<Nd>>,
}

impl<I: NodeId, N, E> Graph<Node<I, N, E>> {
    pub fn from_adjacency_list(adjacency_list: &AdjacencyList<I, N, E>) -> Result<Self> {
        Ok(Self::from_parts(
            adjacency_list.build::<Node<I, N, E>>(Node::from_context)?,
        ))
    }
}

impl<Nd: GraphNode> Graph<Nd> {
    pub fn from_parts(parts: GraphParts<Nd>) -> Self {
        Self {
            incoming_origin: parts.node_table.clone(),
            node_table: parts.node_table,
            edges: parts.edges,
            factory: parts.factory,
        }
    }

    /// Looks up a node by id.
    pub fn find_node_by_id(&self, id: &Nd::Id) -> Option<&Nd> {
        self.node_table.get(id)
    }

    /// Gets all nodes in construction order.
    pub fn nodes(&self) -> &[Nd] {
        self.node_table.nodes()
    }

    /// Gets all edges in construction order.
    pub fn edges(&self) -> &[Edge<Nd>] {
        &self.edges
    }

    pub fn num_nodes(&self) -> usize {
        self.node_table.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn node_table(&self) -> &Arc<NodeTable<Nd>> {
        &self.node_table
    }

    /// Gets the incoming-edge index node queries of this graph use.
    pub fn incoming_edges_by_node_id(&self) -> &Arc<IncomingEdgeIndex<Nd>> {
        self.node_table.incoming_edges()
    }

    /// Groups this graph's own edges by source id.
    pub fn outgoing_edges_by_node_id(&self) -> HashMap<Nd::Id, Vec<Edge<Nd>>> {
        let mut outgoing: HashMap<Nd::Id, Vec<Edge<Nd>>> = HashMap::new();
        for edge in &self.edges {
            outgoing
                .entry(edge.source_id().clone())
                .or_default()
                .push(edge.clone());
        }
        outgoing
    }

    pub fn factory(&self) -> NodeFactory<Nd> {
        self.factory
    }

    /// Extracts the nodes whose id is in `node_ids`, with the edges running
    /// between them.  Node order follows this graph, not `node_ids`.
    ///
    /// The subgraph gets its own nodes and edges, but it shares this graph's
    /// incoming-edge index: [`GraphNode::incoming_edges`] on a subgraph node
    /// still reports every incoming edge of the originating graph.
    pub fn create_subgraph(&self, node_ids: &[Nd::Id]) -> Graph<Nd> {
        let _span = debug_span!("create_subgraph", requested = node_ids.len()).entered();
        let selected: HashSet<&Nd::Id> = node_ids.iter().collect();
        let (raw_nodes, raw_edges) = self.detach(|id| selected.contains(id));
        let node_table = NodeTable::assemble(
            raw_nodes,
            IncomingEdges::Shared(self.node_table.incoming_edges().clone()),
            self.factory,
        );
        let edges = Self::wrap_edges(raw_edges, &node_table);
        debug!(
            nodes = node_table.len(),
            edges = edges.len(),
            "created subgraph"
        );
        Graph {
            node_table,
            edges,
            factory: self.factory,
            incoming_origin: self.incoming_origin.clone(),
        }
    }

    /// Rebuilds this graph with another node type.  The result is a fresh
    /// graph with its own incoming-edge index.
    pub fn with_node_type<M>(&self) -> Graph<M>
    where
        M: GraphNode<Id = Nd::Id, Data = Nd::Data, EdgeData = Nd::EdgeData>,
    {
        let _span = debug_span!("with_node_type", nodes = self.num_nodes()).entered();
        let (raw_nodes, raw_edges) = self.detach(|_| true);
        let node_table = NodeTable::assemble(
            raw_nodes,
            IncomingEdges::Fresh(group_by_target(&raw_edges)),
            M::from_context,
        );
        let edges = Graph::<M>::wrap_edges(raw_edges, &node_table);
        Graph {
            incoming_origin: node_table.clone(),
            node_table,
            edges,
            factory: M::from_context,
        }
    }

    /// Copies the selected nodes and the edges between them, relinking each
    /// copied edge into its endpoints' edge lists.
    fn detach(
        &self,
        keep: impl Fn(&Nd::Id) -> bool,
    ) -> DetachedParts<Nd::Id, Nd::Data, Nd::EdgeData> {
        let mut raw_nodes: Vec<_> = self
            .nodes()
            .iter()
            .filter(|node| keep(node.id()))
            .map(|node| node.raw().detached())
            .collect();
        let positions: HashMap<Nd::Id, usize> = raw_nodes
            .iter()
            .enumerate()
            .map(|(position, raw_node)| (raw_node.id().clone(), position))
            .collect();

        let mut raw_edges = Vec::new();
        for edge in &self.edges {
            let (Some(&source), Some(&target)) = (
                positions.get(edge.source_id()),
                positions.get(edge.target_id()),
            ) else {
                continue;
            };
            let raw_edge = Arc::new(edge.shared_raw().detached());
            raw_nodes[source].push_edge(raw_edge.clone());
            if target != source {
                raw_nodes[target].push_edge(raw_edge.clone());
            }
            raw_edges.push(raw_edge);
        }
        (raw_nodes, raw_edges)
    }

    fn wrap_edges(
        raw_edges: Vec<Arc<RawEdge<Nd::Id, Nd::EdgeData>>>,
        node_table: &Arc<NodeTable<Nd>>,
    ) -> Vec<Edge<Nd>> {
        raw_edges
            .into_iter()
            .map(|raw_edge| Edge::new(raw_edge, node_table.clone()))
            .collect()
    }
}

impl<Nd: GraphNode> Debug for Graph<Nd> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.node_table)
            .field("edges", &self.edges)
            .finish()
    }
}
