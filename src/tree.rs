//! Trees: connected graphs in which every node has at most one parent.
//!
//! The single-parent invariant is not checked when a tree is built.  A node
//! with several incoming edges is only reported when its parent is asked for.
use std::{
    collections::HashSet,
    fmt::{self, Debug},
    ops::Deref,
};

use derivative::Derivative;

use crate::{
    adjacency_list::AdjacencyList,
    connected_graph::ConnectedGraph,
    error::{GraphError, Result, render_id},
    graph::Graph,
    node::{GraphNode, NodeContext},
    raw::NodeId,
    tracing_support::trace,
};

/// Parent and ancestor queries on top of [`GraphNode`].
pub trait TreeGraphNode: GraphNode {
    /// Gets the node's parent, the source of its only incoming edge.
    ///
    /// Fails with [`GraphError::MultipleParents`] if the node has more than
    /// one incoming edge.  Like every node handle, the parent is only usable
    /// while its graph is alive.
    fn parent_node(&self) -> Result<Option<Self>> {
        let mut parents = self.incoming_nodes();
        match parents.len() {
            0 | 1 => Ok(parents.pop()),
            count => Err(GraphError::MultipleParents {
                id: render_id(self.id()),
                count,
            }),
        }
    }

    /// Gets the chain of parents up to the root, nearest first.  The node
    /// itself is not included.
    fn ancestor_nodes(&self) -> Result<Vec<Self>> {
        let mut walked = HashSet::new();
        walked.insert(self.id().clone());
        let mut ancestors = Vec::new();
        let mut current = self.parent_node()?;
        while let Some(parent) = current {
            if !walked.insert(parent.id().clone()) {
                return Err(GraphError::ParentCycle {
                    id: render_id(parent.id()),
                });
            }
            current = parent.parent_node()?;
            ancestors.push(parent);
        }
        Ok(ancestors)
    }

    /// Gets the number of ancestors; the root has depth 0.
    fn depth(&self) -> Result<usize> {
        Ok(self.ancestor_nodes()?.len())
    }
}

/// The node type of [`Tree`].
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct TreeNode<I: NodeId, N, E> {
    context: NodeContext<TreeNode<I, N, E>>,
}

impl<I: NodeId, N, E> GraphNode for TreeNode<I, N, E> {
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

impl<I: NodeId, N, E> TreeGraphNode for TreeNode<I, N, E> {}

impl<I: NodeId, N, E> Debug for TreeNode<I, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode").field("id", self.id()).finish()
    }
}

#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""))]
pub struct Tree<Nd: TreeGraphNode> {
    connected: ConnectedGraph<Nd>,
}

impl<I: NodeId, N, E> Tree<TreeNode<I, N, E>> {
    pub fn from_adjacency_list(adjacency_list: &AdjacencyList<I, N, E>) -> Result<Self> {
        let parts = adjacency_list.build::<TreeNode<I, N, E>>(TreeNode::from_context)?;
        Ok(Self::from_connected(ConnectedGraph::from_graph(
            Graph::from_parts(parts),
        )))
    }
}

impl<Nd: TreeGraphNode> Tree<Nd> {
    /// Wraps a connected graph whose node type already is a tree node.
    pub fn from_connected(connected: ConnectedGraph<Nd>) -> Self {
        Self { connected }
    }

    /// Rebuilds a connected graph of another node type as a tree.
    pub fn from_connected_graph<Src>(connected: &ConnectedGraph<Src>) -> Self
    where
        Src: GraphNode<Id = Nd::Id, Data = Nd::Data, EdgeData = Nd::EdgeData>,
    {
        Self::from_connected(ConnectedGraph::from_graph(connected.with_node_type()))
    }

    /// Gets the first node of the tree.
    ///
    /// This is positional: the node declared first is taken as the root,
    /// whether or not it has a parent.  See [`find_root_from_node`] for a
    /// search that follows the edges.
    pub fn root_node(&self) -> Option<&Nd> {
        self.nodes().first()
    }

    pub fn connected_graph(&self) -> &ConnectedGraph<Nd> {
        &self.connected
    }

    pub fn into_connected_graph(self) -> ConnectedGraph<Nd> {
        self.connected
    }
}

impl<Nd: TreeGraphNode> Deref for Tree<Nd> {
    type Target = ConnectedGraph<Nd>;

    fn deref(&self) -> &Self::Target {
        &self.connected
    }
}

/// Follows single incoming edges upwards from `node` until a node without
/// incoming edges is found.
///
/// Returns `None` if a node on the way has several incoming edges, or if the
/// walk runs into a cycle.  Works on any graph, tree or not.
///
/// The returned handle belongs to the same graph as `node` and must not
/// outlive it: its relationship queries panic once the graph is dropped.
pub fn find_root_from_node<Nd: GraphNode>(node: &Nd) -> Option<Nd> {
    let mut walked = HashSet::new();
    let mut current = node.clone();
    loop {
        let mut parents = current.incoming_nodes();
        if parents.len() > 1 {
            trace!(node = ?current.id(), parents = parents.len(), "no single root");
            return None;
        }
        let Some(parent) = parents.pop() else {
            return Some(current);
        };
        if !walked.insert(parent.id().clone()) {
            trace!(node = ?parent.id(), "cycle while searching for root");
            return None;
        }
        current = parent;
    }
}
