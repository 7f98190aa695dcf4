//! Plain records underneath the node and edge handles.
//!
//! Raw records carry no behaviour.  Edges refer to their endpoints by id; the
//! ids are resolved through the node table of the graph that owns the edge.
use std::{fmt::Debug, hash::Hash, sync::Arc};

use derivative::Derivative;

/// A node identifier, unique within one graph build.
///
/// Any hashable, cloneable type with a `Debug` representation qualifies, so
/// integers and strings can be used directly.
pub trait NodeId: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> NodeId for T {}

#[derive(Derivative)]
#[derivative(Debug(bound = "I: Debug, E: Debug"))]
pub struct RawEdge<I, E> {
    source_id: I,
    target_id: I,
    data: Arc<E>,
}

impl<I, E> RawEdge<I, E> {
    pub fn new(source_id: I, target_id: I, data: Arc<E>) -> Self {
        Self {
            source_id,
            target_id,
            data,
        }
    }

    pub fn source_id(&self) -> &I {
        &self.source_id
    }

    pub fn target_id(&self) -> &I {
        &self.target_id
    }

    pub fn data(&self) -> &E {
        &self.data
    }

    pub fn is_self_loop(&self) -> bool
    where
        I: PartialEq,
    {
        self.source_id == self.target_id
    }

    /// Copies the edge for another graph, sharing the payload.
    pub(crate) fn detached(&self) -> Self
    where
        I: Clone,
    {
        Self::new(
            self.source_id.clone(),
            self.target_id.clone(),
            self.data.clone(),
        )
    }
}

#[derive(Derivative)]
#[derivative(Debug(bound = "I: Debug, N: Debug, E: Debug"))]
pub struct RawNode<I, N, E> {
    id: I,
    data: Arc<N>,
    /// Every edge where this node is the source or the target, in edge
    /// construction order.  Self-loops appear once.
    edges: Vec<Arc<RawEdge<I, E>>>,
}

impl<I, N, E> RawNode<I, N, E> {
    pub fn new(id: I, data: Arc<N>) -> Self {
        Self {
            id,
            data,
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> &I {
        &self.id
    }

    pub fn data(&self) -> &N {
        &self.data
    }

    pub fn edges(&self) -> &[Arc<RawEdge<I, E>>] {
        &self.edges
    }

    pub(crate) fn push_edge(&mut self, edge: Arc<RawEdge<I, E>>) {
        self.edges.push(edge);
    }

    /// Copies the node for another graph with an empty edge list, sharing the
    /// payload.
    pub(crate) fn detached(&self) -> Self
    where
        I: Clone,
    {
        Self::new(self.id.clone(), self.data.clone())
    }
}
