pub use crate::binary_tree::BinaryTreeGraphNode;
pub use crate::node::GraphNode;
pub use crate::tree::TreeGraphNode;
