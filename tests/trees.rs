mod common;

use common::{ids, simple_tree};
use graphirino::{BinaryTree, ConnectedGraph, Tree, find_root_from_node, prelude::*};

#[test]
fn tree_depth() {
    let tree = Tree::from_adjacency_list(&simple_tree()).unwrap();
    assert_eq!(tree.find_node_by_id(&1).unwrap().depth(), Ok(0));
    assert_eq!(tree.find_node_by_id(&2).unwrap().depth(), Ok(1));
}

#[test]
fn root_discovery_from_descendant() {
    let graph = ConnectedGraph::from_adjacency_list(&simple_tree()).unwrap();
    for id in [1, 2, 3] {
        let node = graph.find_node_by_id(&id).unwrap();
        assert_eq!(find_root_from_node(node).map(|root| *root.id()), Some(1));
    }
}

#[test]
fn binary_tree_structure_and_traversal() {
    let tree = BinaryTree::from_adjacency_list(&simple_tree()).unwrap();
    let root = tree.root_node().unwrap();
    assert_eq!(*root.id(), 1);
    assert_eq!(root.left_node().map(|node| *node.id()), Some(2));
    assert_eq!(root.right_node().map(|node| *node.id()), Some(3));
    assert_eq!(ids(&root.search_depth_first_inorder()), vec![2, 1, 3]);
}

#[test]
fn layers_rebuild_from_the_layer_below() {
    let connected = ConnectedGraph::from_adjacency_list(&simple_tree()).unwrap();
    let tree: Tree<graphirino::TreeNode<i32, (), ()>> = Tree::from_connected_graph(&connected);
    let binary: BinaryTree<graphirino::BinaryTreeNode<i32, (), ()>> = BinaryTree::from_tree(&tree);
    let leaf = binary.find_node_by_id(&3).unwrap();
    assert_eq!(leaf.depth(), Ok(1));
    assert_eq!(ids(&leaf.ancestor_nodes().unwrap()), vec![1]);
}
