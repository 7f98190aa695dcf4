use std::fmt;

use thiserror::Error;

/// Which end of an edge a lookup was resolving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeEnd {
    Source,
    Target,
}

impl fmt::Display for EdgeEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeEnd::Source => write!(f, "source"),
            EdgeEnd::Target => write!(f, "target"),
        }
    }
}

/// Errors raised while building or querying a graph.
///
/// Node ids are rendered with their `Debug` representation so that the error
/// type does not depend on the id type of the graph that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge was declared towards or from a node that was never declared.
    #[error("edge {from} -> {to} refers to undeclared node {missing}")]
    UndeclaredNode {
        from: String,
        to: String,
        missing: String,
    },

    /// An edge endpoint is not present in the node table the edge resolves
    /// against.
    #[error("couldn't find {end} node {id} of edge")]
    MissingEndpoint { end: EdgeEnd, id: String },

    /// A neighbour id is not present in the node's own node table.
    #[error("couldn't find node {id} in the node table")]
    MissingNode { id: String },

    /// A tree node has more than one incoming edge.
    #[error("tree node {id} has {count} parents")]
    MultipleParents { id: String, count: usize },

    /// Walking parent links came back to a node already walked.
    #[error("tree node {id} is its own ancestor")]
    ParentCycle { id: String },

    /// A node handle was used after the graph owning it was dropped.
    #[error("graph owning node {id} has been dropped")]
    GraphDropped { id: String },
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;

pub(crate) fn render_id(id: &impl fmt::Debug) -> String {
    format!("{id:?}")
}

/// Unwraps results whose error can only be caused by a corrupted graph.
pub(crate) trait ExpectConsistent<T> {
    fn expect_consistent(self) -> T;
}

impl<T> ExpectConsistent<T> for Result<T> {
    #[track_caller]
    fn expect_consistent(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => panic!("graph invariant violated: {err}"),
        }
    }
}
