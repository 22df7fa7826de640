//! Partitioning of triangles and tetrahedra by the zero level set of nodal distances.
//!
//! The partitioners split a simplex into sub-simplices lying entirely on one side of the
//! interface, and compute the standard and enriched shape functions of each of them. The
//! vertices of a partition are described by [`Slot`]s: original vertices, or auxiliary
//! nodes created on the edges crossed by the interface.

pub use self::distances::NormalizedDistances;
pub use self::edge_area::accumulate_edge_areas;
pub use self::edge_cut::EdgeCut;
pub use self::enrichment::{enriched_partition, partition_sign};
pub use self::error::PartitionError;
pub use self::partition_tetrahedron::{
    partition_tetrahedron, partition_tetrahedron_with_splitter,
    partition_tetrahedron_with_tolerances,
};
pub use self::partition_triangle::{
    partition_triangle, partition_triangle_in_local_axis,
    partition_triangle_in_local_axis_with_tolerances, partition_triangle_with_tolerances,
};
pub use self::result::{
    LocalAxisPartitioning, Partition, Partition2, Partition3, Partitioning, Partitioning2,
    Partitioning3, MAX_PARTITIONS,
};
pub use self::slot::Slot;
pub use self::splitter::{
    CutEdges, EdgeBisection, SplitPattern, TetrahedronSplit, TetrahedronSplitter,
};
pub use self::tolerances::{DistanceScale, PartitionTolerances};

mod distances;
mod edge_area;
mod edge_cut;
mod enrichment;
mod error;
mod partition_tetrahedron;
mod partition_triangle;
mod result;
mod slot;
mod splitter;
mod tolerances;
