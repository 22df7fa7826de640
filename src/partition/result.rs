use crate::math::{Matrix2, Point2, Real, SMatrix};
use arrayvec::ArrayVec;

/// The maximum number of partitions a single simplex is split into.
pub const MAX_PARTITIONS: usize = 6;

/// A sub-simplex lying entirely on one side of the interface.
///
/// `N` is the number of nodes of the original simplex and `D` the dimension of the space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Partition<const N: usize, const D: usize> {
    /// The signed volume (area in 2D) of this partition.
    ///
    /// It has the same sign as the volume of the original simplex.
    pub volume: Real,
    /// `1.0` if this partition lies on the positive side of the interface, `-1.0` otherwise.
    pub sign: Real,
    /// The shape functions of the original simplex, evaluated at the center of this partition.
    pub shape_functions: [Real; N],
    /// The enriched shape functions of the original nodes, restricted to this partition.
    pub enriched_shape_functions: [Real; N],
    /// The gradients of the enriched shape functions on this partition.
    ///
    /// Row `j` is the gradient of the enriched shape function of the original node `j`.
    pub enriched_gradients: SMatrix<Real, N, D>,
}

impl<const N: usize, const D: usize> Partition<N, D> {
    /// The single partition covering a simplex that is not cut by the interface.
    pub fn whole(volume: Real, sign: Real) -> Self {
        Self {
            volume,
            sign,
            shape_functions: [1.0 / N as Real; N],
            enriched_shape_functions: [0.0; N],
            enriched_gradients: SMatrix::zeros(),
        }
    }
}

/// A partition of a triangle.
pub type Partition2 = Partition<3, 2>;
/// A partition of a tetrahedron.
pub type Partition3 = Partition<4, 3>;

/// The result of partitioning a simplex by the zero level set of nodal distances.
///
/// `N` is the number of nodes of the simplex, `D` the dimension of the space and `E` the
/// number of edges of the simplex.
#[derive(Clone, Debug, PartialEq)]
pub struct Partitioning<const N: usize, const D: usize, const E: usize> {
    /// The number of partitions reported by the partitioner.
    ///
    /// This is 1 for a simplex that is not cut. A cut triangle always reports 3, and a cut
    /// tetrahedron reports the number of sub-tetrahedra created. `partitions` never holds
    /// more than `count` elements.
    pub count: usize,
    /// The retained partitions.
    pub partitions: ArrayVec<Partition<N, D>, MAX_PARTITIONS>,
    /// The interface area accumulated on each original edge.
    pub edge_areas: [Real; E],
    /// The nodal distances after normalization.
    pub distances: [Real; N],
    /// The signed volume (area in 2D) of the whole simplex.
    pub volume: Real,
    /// The gradients of the shape functions of the whole simplex.
    pub gradients: SMatrix<Real, N, D>,
}

impl<const N: usize, const D: usize, const E: usize> Partitioning<N, D, E> {
    pub(crate) fn new(volume: Real, gradients: SMatrix<Real, N, D>, distances: [Real; N]) -> Self {
        Self {
            count: 0,
            partitions: ArrayVec::new(),
            edge_areas: [0.0; E],
            distances,
            volume,
            gradients,
        }
    }

    pub(crate) fn with_single_partition(mut self, sign: Real) -> Self {
        self.count = 1;
        self.partitions.clear();
        self.partitions.push(Partition::whole(self.volume, sign));
        self
    }

    /// Is the simplex actually split by the interface?
    #[inline]
    pub fn is_cut(&self) -> bool {
        self.count > 1
    }

    /// The sum of the volumes of all the retained partitions.
    pub fn total_volume(&self) -> Real {
        self.partitions.iter().map(|p| p.volume).sum()
    }

    /// Iterates through the retained partitions.
    pub fn iter(&self) -> core::slice::Iter<'_, Partition<N, D>> {
        self.partitions.iter()
    }
}

/// The result of partitioning a triangle.
pub type Partitioning2 = Partitioning<3, 2, 3>;
/// The result of partitioning a tetrahedron.
pub type Partitioning3 = Partitioning<4, 3, 6>;

/// The result of partitioning a triangle in a frame aligned with the interface.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalAxisPartitioning {
    /// The partitions, with gradients expressed in the local frame.
    ///
    /// The `gradients` of the whole triangle are those in the original frame.
    pub partitioning: Partitioning2,
    /// The origin of the local frame, expressed in the original frame.
    pub origin: Point2<Real>,
    /// The rotation bringing local coordinates back to the original frame.
    ///
    /// A point with local coordinates `q` is located at `origin + rotation * q`. Its first
    /// column is the direction of the interface segment.
    pub rotation: Matrix2<Real>,
    /// The triangle vertices expressed in the local frame.
    pub rotated_points: [Point2<Real>; 3],
    /// The gradients of the shape functions of the triangle, in the local frame.
    pub local_gradients: SMatrix<Real, 3, 2>,
}
