/// One vertex of a partition, described in terms of the nodes of the original simplex.
///
/// A partition vertex is either one of the original vertices, or the auxiliary node
/// created where the interface crosses an original edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The original vertex with the given index.
    Vertex(usize),
    /// The auxiliary node lying on a cut edge.
    Edge {
        /// The index of the cut edge.
        edge: usize,
        /// The two endpoints of the cut edge.
        parents: [usize; 2],
    },
}

impl Slot {
    /// Is this slot an auxiliary node?
    #[inline]
    pub fn is_auxiliary(&self) -> bool {
        matches!(self, Slot::Edge { .. })
    }

    /// The original edge this slot lies on, if it is an auxiliary node.
    #[inline]
    pub fn edge(&self) -> Option<usize> {
        match self {
            Slot::Vertex(_) => None,
            Slot::Edge { edge, .. } => Some(*edge),
        }
    }

    /// The original vertex this slot is, if it is not an auxiliary node.
    #[inline]
    pub fn vertex(&self) -> Option<usize> {
        match self {
            Slot::Vertex(i) => Some(*i),
            Slot::Edge { .. } => None,
        }
    }

    /// Is the original node `node` this slot, or one of the endpoints of its edge?
    #[inline]
    pub fn has_parent(&self, node: usize) -> bool {
        match self {
            Slot::Vertex(i) => *i == node,
            Slot::Edge { parents, .. } => parents.contains(&node),
        }
    }

    /// The slot with index `id` in the numbering shared by the tetrahedron splitters.
    ///
    /// Ids `0..N` are the original vertices, and id `N + e` is the auxiliary node of the
    /// edge `e` of `edges`. Returns `None` for an id out of range.
    pub fn from_id<const E: usize>(id: usize, num_vertices: usize, edges: &[[usize; 2]; E]) -> Option<Self> {
        if id < num_vertices {
            Some(Slot::Vertex(id))
        } else {
            let edge = id - num_vertices;
            edges.get(edge).map(|parents| Slot::Edge {
                edge,
                parents: *parents,
            })
        }
    }
}
