use std::{
    collections::HashMap,
    fmt::{self, Debug},
    sync::{Arc, Weak},
};

use crate::{
    edge::Edge,
    error::{GraphError, Result, render_id},
    node::{GraphNode, NodeContext, NodeFactory},
    raw::{RawEdge, RawNode},
};

pub(crate) type RawEdgesById<I, E> = HashMap<I, Vec<Arc<RawEdge<I, E>>>>;

/// Groups raw edges by target id, keeping edge order within each group.
pub(crate) fn group_by_target<I, E>(raw_edges: &[Arc<RawEdge<I, E>>]) -> RawEdgesById<I, E>
where
    I: crate::raw::NodeId,
{
    let mut by_target: RawEdgesById<I, E> = HashMap::new();
    for raw_edge in raw_edges {
        by_target
            .entry(raw_edge.target_id().clone())
            .or_default()
            .push(raw_edge.clone());
    }
    by_target
}

/// The incoming-edge index a node table was built with.
pub(crate) enum IncomingEdges<Nd: GraphNode> {
    /// Index the given edges against the table being built.
    Fresh(RawEdgesById<Nd::Id, Nd::EdgeData>),
    /// Reuse the index of another table.
    Shared(Arc<IncomingEdgeIndex<Nd>>),
}

/// The nodes of one graph, in construction order, with lookup by id.
pub struct NodeTable<Nd: GraphNode> {
    nodes: Vec<Nd>,
    positions: HashMap<Nd::Id, usize>,
    incoming_edges: Arc<IncomingEdgeIndex<Nd>>,
}

impl<Nd: GraphNode> NodeTable<Nd> {
    /// Wraps every raw node with `factory`.  The raw nodes must already carry
    /// their complete edge lists.
    pub(crate) fn assemble(
        raw_nodes: Vec<RawNode<Nd::Id, Nd::Data, Nd::EdgeData>>,
        incoming_edges: IncomingEdges<Nd>,
        factory: NodeFactory<Nd>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|table| {
            let incoming_edges = match incoming_edges {
                IncomingEdges::Fresh(by_target) => Arc::new(IncomingEdgeIndex {
                    origin: table.clone(),
                    by_target,
                }),
                IncomingEdges::Shared(index) => index,
            };
            let mut positions = HashMap::with_capacity(raw_nodes.len());
            let nodes: Vec<Nd> = raw_nodes
                .into_iter()
                .enumerate()
                .map(|(position, raw_node)| {
                    positions.insert(raw_node.id().clone(), position);
                    factory(NodeContext::new(Arc::new(raw_node), table.clone()))
                })
                .collect();
            NodeTable {
                nodes,
                positions,
                incoming_edges,
            }
        })
    }

    pub fn get(&self, id: &Nd::Id) -> Option<&Nd> {
        self.positions.get(id).map(|&position| &self.nodes[position])
    }

    pub fn contains(&self, id: &Nd::Id) -> bool {
        self.positions.contains_key(id)
    }

    pub fn nodes(&self) -> &[Nd] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn incoming_edges(&self) -> &Arc<IncomingEdgeIndex<Nd>> {
        &self.incoming_edges
    }
}

impl<Nd: GraphNode> Debug for NodeTable<Nd> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.nodes.iter().map(|node| node.id()))
            .finish()
    }
}

/// Incoming edges keyed by target id.
///
/// The index resolves edge endpoints against the table it was originally built
/// for.  Subgraphs share the index of the graph they were taken from.
pub struct IncomingEdgeIndex<Nd: GraphNode> {
    origin: Weak<NodeTable<Nd>>,
    by_target: RawEdgesById<Nd::Id, Nd::EdgeData>,
}

impl<Nd: GraphNode> IncomingEdgeIndex<Nd> {
    /// Gets the edges ending at `id`, in edge construction order.
    pub fn edges_into(&self, id: &Nd::Id) -> Result<Vec<Edge<Nd>>> {
        let Some(raw_edges) = self.by_target.get(id) else {
            return Ok(Vec::new());
        };
        let origin = self.origin.upgrade().ok_or_else(|| GraphError::GraphDropped {
            id: render_id(id),
        })?;
        Ok(raw_edges
            .iter()
            .map(|raw_edge| Edge::new(raw_edge.clone(), origin.clone()))
            .collect())
    }

    pub fn num_edges_into(&self, id: &Nd::Id) -> usize {
        self.by_target.get(id).map_or(0, Vec::len)
    }

    /// Checks whether this index resolves against `table`.
    pub fn is_indexing(&self, table: &Arc<NodeTable<Nd>>) -> bool {
        std::ptr::eq(self.origin.as_ptr(), Arc::as_ptr(table))
    }
}
