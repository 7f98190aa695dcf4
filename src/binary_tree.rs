use std::{
    fmt::{self, Debug},
    ops::Deref,
};

use derivative::Derivative;

use crate::{
    adjacency_list::AdjacencyList,
    connected_graph::ConnectedGraph,
    error::Result,
    graph::Graph,
    node::{GraphNode, NodeContext},
    raw::NodeId,
    search::InorderIterator,
    tree::{Tree, TreeGraphNode},
};

/// Positional child queries: the first outgoing edge leads to the left child,
/// the second to the right child.  Further outgoing edges are ignored.
pub trait BinaryTreeGraphNode: TreeGraphNode {
    fn left_node(&self) -> Option<Self> {
        self.outgoing_nodes().into_iter().next()
    }

    fn right_node(&self) -> Option<Self> {
        self.outgoing_nodes().into_iter().nth(1)
    }

    /// Gets the subtree rooted at this node in left, self, right order.
    fn search_depth_first_inorder(&self) -> Vec<Self> {
        InorderIterator::new(self.clone()).collect()
    }
}

#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct BinaryTreeNode<I: NodeId, N, E> {
    context: NodeContext<BinaryTreeNode<I, N, E>>,
}

impl<I: NodeId, N, E> GraphNode for BinaryTreeNode<I, N, E> {
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

impl<I: NodeId, N, E> TreeGraphNode for BinaryTreeNode<I, N, E> {}

impl<I: NodeId, N, E> BinaryTreeGraphNode for BinaryTreeNode<I, N, E> {}

impl<I: NodeId, N, E> Debug for BinaryTreeNode<I, N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTreeNode").field("id", self.id()).finish()
    }
}

#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""))]
pub struct BinaryTree<Nd: BinaryTreeGraphNode> {
    tree: Tree<Nd>,
}

impl<I: NodeId, N, E> BinaryTree<BinaryTreeNode<I, N, E>> {
    pub fn from_adjacency_list(adjacency_list: &AdjacencyList<I, N, E>) -> Result<Self> {
        let parts =
            adjacency_list.build::<BinaryTreeNode<I, N, E>>(BinaryTreeNode::from_context)?;
        Ok(Self {
            tree: Tree::from_connected(ConnectedGraph::from_graph(Graph::from_parts(parts))),
        })
    }
}

impl<Nd: BinaryTreeGraphNode> BinaryTree<Nd> {
    /// Rebuilds a tree of another node type as a binary tree.
    pub fn from_tree<Src>(tree: &Tree<Src>) -> Self
    where
        Src: TreeGraphNode<Id = Nd::Id, Data = Nd::Data, EdgeData = Nd::EdgeData>,
    {
        Self {
            tree: Tree::from_connected_graph(tree.connected_graph()),
        }
    }

    pub fn tree(&self) -> &Tree<Nd> {
        &self.tree
    }

    pub fn into_tree(self) -> Tree<Nd> {
        self.tree
    }
}

impl<Nd: BinaryTreeGraphNode> Deref for BinaryTree<Nd> {
    type Target = Tree<Nd>;

    fn deref(&self) -> &Self::Target {
        &self.tree
    }
}
