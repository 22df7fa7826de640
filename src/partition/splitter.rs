use crate::partition::{Slot, MAX_PARTITIONS};
use crate::shape::Tetrahedron;
use smallvec::SmallVec;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
/// The set of tetrahedron edges carrying an auxiliary node.
///
/// Bit `e` is set if the edge `e` of [`Tetrahedron::EDGES`] is split.
pub struct CutEdges(u8);

bitflags::bitflags! {
    impl CutEdges: u8 {
        /// The edge AB is split.
        const AB = 1;
        /// The edge AC is split.
        const AC = 1 << 1;
        /// The edge AD is split.
        const AD = 1 << 2;
        /// The edge BC is split.
        const BC = 1 << 3;
        /// The edge BD is split.
        const BD = 1 << 4;
        /// The edge CD is split.
        const CD = 1 << 5;
    }
}

impl CutEdges {
    /// The flag of the `e`-th edge of [`Tetrahedron::EDGES`].
    #[inline]
    pub fn edge(e: usize) -> Self {
        Self::from_bits_truncate(1 << e)
    }
}

/// The input of a [`TetrahedronSplitter`]: which edges of the tetrahedron carry an
/// auxiliary node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitPattern {
    /// For each edge of [`Tetrahedron::EDGES`], the index of its auxiliary node in the node
    /// table, or `None` if the edge is not split.
    pub edge_nodes: [Option<usize>; 6],
}

impl SplitPattern {
    /// The set of split edges.
    pub fn mode(&self) -> CutEdges {
        self.edge_nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_some())
            .fold(CutEdges::empty(), |mode, (e, _)| mode | CutEdges::edge(e))
    }

    /// The number of split edges.
    pub fn num_split_edges(&self) -> usize {
        self.edge_nodes.iter().filter(|node| node.is_some()).count()
    }

    /// The index in the node table of the node described by `slot`.
    ///
    /// Returns `None` for the auxiliary node of an edge that is not split.
    pub fn node_index(&self, slot: &Slot) -> Option<usize> {
        match slot {
            Slot::Vertex(i) => Some(*i),
            Slot::Edge { edge, .. } => self.edge_nodes.get(*edge).copied().flatten(),
        }
    }

    /// The flat encoding used by table-driven splitters.
    ///
    /// Entries `0..4` are the vertices, entry `4 + e` is the node index of the edge `e` or
    /// `-1`. The last two entries are unused and always `-1`.
    pub fn to_raw(&self) -> [i32; 12] {
        let mut raw = [-1; 12];

        for i in 0..4 {
            raw[i] = i as i32;
        }

        for (e, node) in self.edge_nodes.iter().enumerate() {
            if let Some(node) = node {
                raw[4 + e] = *node as i32;
            }
        }

        raw
    }
}

/// The output of a [`TetrahedronSplitter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TetrahedronSplit {
    /// The split edges that led to this split.
    pub mode: CutEdges,
    /// The sub-tetrahedra.
    ///
    /// Each index is a slot id: `0..4` for the original vertices, and `4 + e` for the
    /// auxiliary node of the edge `e` (see [`Slot::from_id`]).
    pub tetrahedra: SmallVec<[[usize; 4]; MAX_PARTITIONS]>,
    /// The number of nodes, other than the vertices and the edge nodes, needed by this split.
    pub internal_nodes: usize,
}

/// Splits a tetrahedron along its split edges.
///
/// Implementations must be pure: the result depends only on the pattern passed to
/// [`TetrahedronSplitter::split`]. The returned sub-tetrahedra must tile the original
/// tetrahedron and have the same orientation.
pub trait TetrahedronSplitter {
    /// Computes the sub-tetrahedra of a tetrahedron with the given split edges.
    fn split(&self, pattern: &SplitPattern) -> TetrahedronSplit;
}

/// A tetrahedron splitter bisecting the split edges one after the other.
///
/// The edges are processed in the order of [`Tetrahedron::EDGES`]. Bisecting the edge
/// `[a, b]` replaces every current sub-tetrahedron having both `a` and `b` as vertices by
/// the two sub-tetrahedra obtained by substituting the edge node for `b`, then for `a`.
/// No internal node is ever needed and the orientation is preserved.
///
/// For the patterns produced by a linear distance field, this yields 4 sub-tetrahedra
/// when one vertex is isolated by the interface, 6 when the interface separates two
/// pairs of vertices, and 3 or 2 when vertices lie on the interface.
#[derive(Copy, Clone, Debug, Default)]
pub struct EdgeBisection;

impl TetrahedronSplitter for EdgeBisection {
    fn split(&self, pattern: &SplitPattern) -> TetrahedronSplit {
        let mut tetrahedra: SmallVec<[[usize; 4]; MAX_PARTITIONS]> = SmallVec::new();
        tetrahedra.push([0, 1, 2, 3]);

        for (e, [a, b]) in Tetrahedron::EDGES.iter().copied().enumerate() {
            if pattern.edge_nodes[e].is_none() {
                continue;
            }

            let node = 4 + e;
            let mut bisected = SmallVec::new();

            for tet in tetrahedra {
                match (
                    tet.iter().position(|v| *v == a),
                    tet.iter().position(|v| *v == b),
                ) {
                    (Some(ia), Some(ib)) => {
                        let mut first = tet;
                        first[ib] = node;
                        let mut second = tet;
                        second[ia] = node;
                        bisected.push(first);
                        bisected.push(second);
                    }
                    _ => bisected.push(tet),
                }
            }

            tetrahedra = bisected;
        }

        TetrahedronSplit {
            mode: pattern.mode(),
            tetrahedra,
            internal_nodes: 0,
        }
    }
}
