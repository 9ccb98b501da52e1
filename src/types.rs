//! Various types related to subgraph mining.

/// The vertex id type, local to one graph or one pattern.
pub type VId = usize;

/// The vertex label type.
pub type VLabel = usize;

/// The edge label type.
pub type ELabel = usize;

/// The graph id type, i.e. the position of a graph in the collection.
pub type GId = usize;
