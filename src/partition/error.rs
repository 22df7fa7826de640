/// Errors raised while partitioning a simplex.
///
/// All of them are fatal for the simplex being processed: no partial result is returned.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PartitionError {
    /// The simplex has exactly zero volume.
    #[error("the simplex has a zero volume.")]
    DegenerateSimplex,
    /// The interface segment used to build the local axis of a triangle has a zero length.
    #[error("the interface segment of the triangle has a zero length.")]
    DegenerateInterface,
    /// The tetrahedron splitter requested internal nodes.
    #[error("the tetrahedron splitter requires {count} internal node(s), which is not supported.")]
    InternalNodeRequired {
        /// The number of internal nodes requested.
        count: usize,
    },
    /// The tetrahedron splitter referenced an edge node that was never created.
    #[error("the tetrahedron splitter referenced the slot {slot} which has no node.")]
    UnknownEdgeNode {
        /// The referenced slot.
        slot: usize,
    },
    /// The tetrahedron splitter returned an unsupported number of sub-tetrahedra.
    #[error("the tetrahedron splitter returned {count} sub-tetrahedra (expected 1 to 6).")]
    TooManyPartitions {
        /// The number of sub-tetrahedra returned.
        count: usize,
    },
    /// More than eight nodes were pushed to a node table.
    #[error("the node table can hold at most 8 nodes.")]
    NodeTableFull,
}
