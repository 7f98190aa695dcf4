pub mod adjacency_list;
pub mod binary_tree;
pub mod connected_graph;
pub mod edge;
pub mod error;
pub mod graph;
pub mod node;
pub mod node_table;
pub mod prelude;
pub mod raw;
pub mod search;
pub mod tracing_support;
pub mod tree;

mod util;

#[cfg(test)]
mod generate_large_graph;
#[cfg(test)]
mod graph_test_support;

pub use adjacency_list::{AdjacencyList, GraphParts};
pub use binary_tree::{BinaryTree, BinaryTreeGraphNode, BinaryTreeNode};
pub use connected_graph::ConnectedGraph;
pub use edge::Edge;
pub use error::{EdgeEnd, GraphError, Result};
pub use graph::Graph;
pub use node::{GraphNode, Node, NodeContext, NodeFactory};
pub use node_table::{IncomingEdgeIndex, NodeTable};
pub use raw::{NodeId, RawEdge, RawNode};
pub use search::{DfsIterator, InorderIterator, ReachableIterator};
pub use tree::{Tree, TreeGraphNode, TreeNode, find_root_from_node};
