//! Node handles.
//!
//! A node handle pairs a shared [`RawNode`] with a weak reference to the
//! [`NodeTable`] of the graph that built it.  Neighbour ids found in the raw
//! edge list are resolved through that table, so the table, not the nodes,
//! owns every node of a graph.  Relationship queries are recomputed from the
//! raw edge list on every call.
use std::{
    fmt::{self, Debug},
    sync::{Arc, Weak},
};

use derivative::Derivative;

use crate::{
    edge::Edge,
    error::{ExpectConsistent, GraphError, Result, render_id},
    node_table::NodeTable,
    raw::{NodeId, RawNode},
    search::{DfsIterator, ReachableIterator},
};

/// Constructs a node of a graph's specialised node type from its context.
pub type NodeFactory<Nd> = fn(NodeContext<Nd>) -> Nd;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Incoming,
    Outgoing,
}

/// Everything a node handle needs to answer relationship queries: its raw
/// record and read access to the node table of its graph.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct NodeContext<Nd: GraphNode> {
    raw: Arc<RawNode<Nd::Id, Nd::Data, Nd::EdgeData>>,
    table: Weak<NodeTable<Nd>>,
}

impl<Nd: GraphNode> NodeContext<Nd> {
    pub(crate) fn new(
        raw: Arc<RawNode<Nd::Id, Nd::Data, Nd::EdgeData>>,
        table: Weak<NodeTable<Nd>>,
    ) -> Self {
        Self { raw, table }
    }

    pub fn raw(&self) -> &RawNode<Nd::Id, Nd::Data, Nd::EdgeData> {
        &self.raw
    }

    /// Gets the node table of the graph this node belongs to.
    pub fn table(&self) -> Result<Arc<NodeTable<Nd>>> {
        self.table.upgrade().ok_or_else(|| GraphError::GraphDropped {
            id: render_id(self.raw.id()),
        })
    }

    /// Resolves an id into a node handle of the same graph.
    pub fn resolve(&self, id: &Nd::Id) -> Result<Nd> {
        self.table()?
            .get(id)
            .cloned()
            .ok_or_else(|| GraphError::MissingNode { id: render_id(id) })
    }

    pub(crate) fn incoming_edges(&self) -> Result<Vec<Edge<Nd>>> {
        self.table()?.incoming_edges().edges_into(self.raw.id())
    }

    pub(crate) fn neighbors(&self, direction: Direction) -> Result<Vec<Nd>> {
        let table = self.table()?;
        let id = self.raw.id();
        self.raw
            .edges()
            .iter()
            .filter_map(|edge| match direction {
                Direction::Incoming => (edge.target_id() == id).then(|| edge.source_id()),
                Direction::Outgoing => (edge.source_id() == id).then(|| edge.target_id()),
            })
            .map(|neighbor| {
                table
                    .get(neighbor)
                    .cloned()
                    .ok_or_else(|| GraphError::MissingNode {
                        id: render_id(neighbor),
                    })
            })
            .collect()
    }
}

/// Behaviour shared by every node type: identity, payload access and
/// relationship queries.
///
/// Implementors only provide [`GraphNode::from_context`] and
/// [`GraphNode::context`]; everything else has a default implementation.
///
/// # Panics
///
/// The relationship queries panic if the node handle outlived its graph, or
/// if the graph's node table is missing a neighbour.  Neither can happen for
/// handles obtained from a live graph built by this crate.
pub trait GraphNode: Clone + Sized {
    type Id: NodeId;
    type Data;
    type EdgeData;

    /// Builds a node handle; this is the node factory of graphs of this node
    /// type.
    fn from_context(context: NodeContext<Self>) -> Self;

    fn context(&self) -> &NodeContext<Self>;

    fn raw(&self) -> &RawNode<Self::Id, Self::Data, Self::EdgeData> {
        self.context().raw()
    }

    fn id(&self) -> &Self::Id {
        self.raw().id()
    }

    fn data(&self) -> &Self::Data {
        self.raw().data()
    }

    /// Gets the edges ending at this node from the incoming-edge index the
    /// graph was built with.  For subgraphs this is the index of the graph the
    /// subgraph was taken from, so sources may lie outside the subgraph.
    fn incoming_edges(&self) -> Vec<Edge<Self>> {
        self.context().incoming_edges().expect_consistent()
    }

    /// Gets the sources of this node's incoming edges.
    fn incoming_nodes(&self) -> Vec<Self> {
        self.context()
            .neighbors(Direction::Incoming)
            .expect_consistent()
    }

    /// Gets the targets of this node's outgoing edges, in declaration order.
    fn outgoing_nodes(&self) -> Vec<Self> {
        self.context()
            .neighbors(Direction::Outgoing)
            .expect_consistent()
    }

    /// Gets every node reachable through outgoing edges, excluding this node.
    fn reachable_nodes(&self) -> Vec<Self> {
        ReachableIterator::new(self).collect()
    }

    /// Gets every node reachable from this node, this node first, in the
    /// order a stack-based depth-first search visits them.
    fn search_depth_first(&self) -> Vec<Self> {
        DfsIterator::new(self.clone()).collect()
    }
}

/// The node type of plain graphs.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct Node<I: NodeId, N, E> {
    context: NodeContext<Node<I, N, E>>,
}

impl<I: NodeId, N, E> GraphNode for Node<I, N, E> {
    type Id = I;
    type Data = N;
    type EdgeData = E;

    fn from_context(context: NodeContext<Self>) -> Self {
        Self { context }
    }

    fn context(&self) -> &NodeContext<Self> {
        &self.context
    }
}

impl<I: NodeId, N, E> Debug for Node<I, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node").field("id", self.id()).finish()
    }
}
