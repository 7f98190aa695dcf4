use std::{
    fmt::{self, Debug},
    sync::Arc,
};

use derivative::Derivative;

use crate::{
    error::{EdgeEnd, GraphError, Result, render_id},
    node::GraphNode,
    node_table::NodeTable,
    raw::RawEdge,
};

/// An edge handle: a raw edge plus the node table its endpoints resolve in.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct Edge<Nd: GraphNode> {
    raw: Arc<RawEdge<Nd::Id, Nd::EdgeData>>,
    table: Arc<NodeTable<Nd>>,
}

impl<Nd: GraphNode> Edge<Nd> {
    pub fn new(raw: Arc<RawEdge<Nd::Id, Nd::EdgeData>>, table: Arc<NodeTable<Nd>>) -> Self {
        Self { raw, table }
    }

    pub fn raw(&self) -> &RawEdge<Nd::Id, Nd::EdgeData> {
        &self.raw
    }

    pub(crate) fn shared_raw(&self) -> &Arc<RawEdge<Nd::Id, Nd::EdgeData>> {
        &self.raw
    }

    pub fn data(&self) -> &Nd::EdgeData {
        self.raw.data()
    }

    pub fn source_id(&self) -> &Nd::Id {
        self.raw.source_id()
    }

    pub fn target_id(&self) -> &Nd::Id {
        self.raw.target_id()
    }

    /// Resolves the source node.  Fails if the node table is missing the id,
    /// which means the edge was paired with the wrong table.
    ///
    /// The edge keeps its node table alive, but not the graph the table was
    /// built for.  Once no graph or edge holds the table any more, queries on
    /// the returned node panic with [`GraphError::GraphDropped`].
    pub fn source_node(&self) -> Result<Nd> {
        self.endpoint(EdgeEnd::Source)
    }

    /// Resolves the target node.  Fails like [`Edge::source_node`].
    pub fn target_node(&self) -> Result<Nd> {
        self.endpoint(EdgeEnd::Target)
    }

    fn endpoint(&self, end: EdgeEnd) -> Result<Nd> {
        let id = match end {
            EdgeEnd::Source => self.raw.source_id(),
            EdgeEnd::Target => self.raw.target_id(),
        };
        self.table
            .get(id)
            .cloned()
            .ok_or_else(|| GraphError::MissingEndpoint {
                end,
                id: render_id(id),
            })
    }
}

impl<Nd: GraphNode> Debug for Edge<Nd> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({:?} -> {:?})", self.source_id(), self.target_id())
    }
}
