use crate::math::{Gradients3, Point3, Real, SMatrix, Vector3};
use crate::partition::{
    accumulate_edge_areas, enriched_partition, partition_sign, EdgeBisection, EdgeCut,
    NormalizedDistances, PartitionError, PartitionTolerances, Partitioning3, Slot, SplitPattern,
    TetrahedronSplitter, MAX_PARTITIONS,
};
use crate::shape::Tetrahedron;
use arrayvec::ArrayVec;

/// The maximum number of nodes of a split tetrahedron: the 4 vertices and 4 edge nodes.
const MAX_NODES: usize = 8;

impl Tetrahedron {
    /// Splits this tetrahedron along the zero level set of the given nodal distances, using
    /// the [`EdgeBisection`] splitter.
    ///
    /// See [`Tetrahedron::partition_with`].
    pub fn partition(
        &self,
        distances: &[Real; 4],
        tolerances: &PartitionTolerances,
    ) -> Result<Partitioning3, PartitionError> {
        self.partition_with(distances, tolerances, &EdgeBisection)
    }

    /// Splits this tetrahedron along the zero level set of the given nodal distances.
    ///
    /// Distances with a magnitude below the collapse threshold of `tolerances` are set to
    /// zero (see [`NormalizedDistances::collapsed`]), and no edge touching such a node gets an
    /// auxiliary node. If no edge is cut, the whole tetrahedron is returned as a single
    /// partition on the side of the smallest distance.
    ///
    /// Otherwise, an auxiliary node is created on every cut edge and `splitter` computes the
    /// sub-tetrahedra. The side of each sub-tetrahedron and the edge areas are computed from
    /// the exact distances of the nodes to the plane passing through the first auxiliary
    /// node and orthogonal to the gradient of the interpolated distance. A sub-tetrahedron
    /// whose volume rounds to zero is kept, with zero enriched gradients.
    pub fn partition_with<S: TetrahedronSplitter + ?Sized>(
        &self,
        distances: &[Real; 4],
        tolerances: &PartitionTolerances,
        splitter: &S,
    ) -> Result<Partitioning3, PartitionError> {
        let (gradients, volume) = self
            .shape_function_gradients()
            .ok_or(PartitionError::DegenerateSimplex)?;
        let normalized = NormalizedDistances::collapsed(
            distances,
            tolerances.tetrahedron_collapse_factor * self.longest_edge(),
        );
        let mut result = Partitioning3::new(volume, gradients, normalized.values);
        let cuts = EdgeCut::classify_all(&Tetrahedron::EDGES, &normalized);

        if !cuts.iter().any(EdgeCut::is_cut) {
            let min = normalized.values.iter().copied().fold(Real::MAX, Real::min);
            let sign = if min < 0.0 { -1.0 } else { 1.0 };
            return Ok(result.with_single_partition(sign));
        }

        // Nodes are expressed relative to the first vertex so edge nodes close to a vertex
        // stay distinct from it far from the origin.
        let shift = self.a.coords;
        let local = Tetrahedron::from(self.vertices().map(|p| p - shift));

        let mut nodes: ArrayVec<Point3<Real>, MAX_NODES> = ArrayVec::new();
        for vertex in local.vertices() {
            push_node(&mut nodes, vertex)?;
        }

        let mut pattern = SplitPattern::default();
        for (e, cut) in cuts.iter().enumerate() {
            if let EdgeCut::Cut { parameter } = *cut {
                let [i, j] = Tetrahedron::EDGES[e];
                let pi = local.vertex(i);
                let pj = local.vertex(j);
                pattern.edge_nodes[e] = Some(nodes.len());
                push_node(&mut nodes, pi + (pj - pi) * parameter)?;
            }
        }

        let exact = exact_distances(&gradients, &normalized, &nodes, tolerances);
        let split = splitter.split(&pattern);

        if split.internal_nodes != 0 {
            return Err(PartitionError::InternalNodeRequired {
                count: split.internal_nodes,
            });
        }

        let count = split.tetrahedra.len();
        if count == 0 || count > MAX_PARTITIONS {
            return Err(PartitionError::TooManyPartitions { count });
        }

        log::trace!("splitting along {:?} into {count} sub-tetrahedra", split.mode);

        for ids in &split.tetrahedra {
            let mut slots = [Slot::Vertex(0); 4];
            let mut points = [Point3::origin(); 4];

            for (k, id) in ids.iter().enumerate() {
                let unknown = PartitionError::UnknownEdgeNode { slot: *id };
                let slot = Slot::from_id(*id, 4, &Tetrahedron::EDGES).ok_or(unknown)?;
                let node = pattern.node_index(&slot).ok_or(unknown)?;
                points[k] = *nodes.get(node).ok_or(unknown)?;
                slots[k] = slot;
            }

            let sub = Tetrahedron::from(points);
            let sub_volume = sub.signed_volume();
            accumulate_edge_areas(&mut result.edge_areas, &exact, &slots, sub_volume);

            // A sub-tetrahedron flattened by rounding is kept, with no gradient.
            let local_gradients = match sub.shape_function_gradients() {
                Some((local_gradients, _)) => local_gradients,
                None => {
                    log::debug!("the sub-tetrahedron {ids:?} has a zero volume");
                    Gradients3::zeros()
                }
            };
            let shape_functions = local
                .barycentric_coordinates(&sub.center())
                .ok_or(PartitionError::DegenerateSimplex)?;
            let sign = partition_sign(&shape_functions, &exact);

            result.partitions.push(enriched_partition(
                &slots,
                &local_gradients,
                &normalized.values,
                sub_volume,
                sign,
                shape_functions,
            ));
        }

        result.count = count;
        Ok(result)
    }
}

fn push_node(
    nodes: &mut ArrayVec<Point3<Real>, MAX_NODES>,
    node: Point3<Real>,
) -> Result<(), PartitionError> {
    nodes
        .try_push(node)
        .map_err(|_| PartitionError::NodeTableFull)
}

/// The signed distances of the vertices to the plane approximating the interface.
///
/// The plane passes through the first auxiliary node (`nodes[4]`) and is orthogonal to the
/// (normalized) gradient of the interpolated distance. Collapsed nodes keep a zero distance.
fn exact_distances(
    gradients: &SMatrix<Real, 4, 3>,
    normalized: &NormalizedDistances<4>,
    nodes: &[Point3<Real>],
    tolerances: &PartitionTolerances,
) -> [Real; 4] {
    let d = SMatrix::<Real, 4, 1>::from(normalized.values);
    let mut normal: Vector3<Real> = gradients.tr_mul(&d);

    if let Some(unit) = normal.try_normalize(tolerances.gradient_epsilon) {
        normal = unit;
    }

    let Some(base) = nodes.get(4) else {
        return normalized.values;
    };

    let mut exact = [0.0; 4];
    for i in 0..4 {
        if normalized.is_collapsed(i) {
            continue;
        }

        let dist = (nodes[i] - base).dot(&normal).abs();
        exact[i] = if normalized.values[i] < 0.0 { -dist } else { dist };
    }

    exact
}

/// Splits the tetrahedron with vertices `points` along the zero level set of `distances`,
/// with the default tolerances and splitter.
///
/// See [`Tetrahedron::partition_with`].
pub fn partition_tetrahedron(
    points: &[Point3<Real>; 4],
    distances: &[Real; 4],
) -> Result<Partitioning3, PartitionError> {
    partition_tetrahedron_with_tolerances(points, distances, &PartitionTolerances::default())
}

/// Splits the tetrahedron with vertices `points` along the zero level set of `distances`,
/// with the default splitter.
///
/// See [`Tetrahedron::partition_with`].
pub fn partition_tetrahedron_with_tolerances(
    points: &[Point3<Real>; 4],
    distances: &[Real; 4],
    tolerances: &PartitionTolerances,
) -> Result<Partitioning3, PartitionError> {
    Tetrahedron::from_array(points).partition(distances, tolerances)
}

/// Splits the tetrahedron with vertices `points` along the zero level set of `distances`,
/// computing the sub-tetrahedra with `splitter`.
///
/// See [`Tetrahedron::partition_with`].
pub fn partition_tetrahedron_with_splitter<S: TetrahedronSplitter + ?Sized>(
    points: &[Point3<Real>; 4],
    distances: &[Real; 4],
    tolerances: &PartitionTolerances,
    splitter: &S,
) -> Result<Partitioning3, PartitionError> {
    Tetrahedron::from_array(points).partition_with(distances, tolerances, splitter)
}
