use crate::math::{Matrix2, Point2, Real};
use crate::partition::{
    accumulate_edge_areas, enriched_partition, partition_sign, EdgeCut, LocalAxisPartitioning,
    NormalizedDistances, PartitionError, PartitionTolerances, Partitioning2, Slot,
};
use crate::shape::Triangle;

/// The number of partitions reported for a cut triangle.
const CUT_TRIANGLE_PARTITION_COUNT: usize = 3;

impl Triangle {
    /// Splits this triangle along the zero level set of the given nodal distances.
    ///
    /// Distances with a magnitude below the snapping threshold of `tolerances` are first
    /// moved away from the interface (see [`NormalizedDistances::snapped`]). If all the
    /// normalized distances have the same sign, the whole triangle is returned as a single
    /// partition. Otherwise, the triangle is split into the three corner triangles and the
    /// center triangle defined by the auxiliary nodes of its edges, and the candidates with
    /// a zero area are discarded. A cut triangle always reports a count of 3.
    pub fn partition(
        &self,
        distances: &[Real; 3],
        tolerances: &PartitionTolerances,
    ) -> Result<Partitioning2, PartitionError> {
        let (gradients, area) = self
            .shape_function_gradients()
            .ok_or(PartitionError::DegenerateSimplex)?;
        let normalized = self.normalized_distances(distances, tolerances);
        let mut result = Partitioning2::new(area, gradients, normalized.values);

        if normalized.same_side() {
            return Ok(result.with_single_partition(side(normalized.values[0])));
        }

        let cuts = EdgeCut::classify_all(&Triangle::EDGES, &normalized);
        let (aux_points, aux_slots) = self.auxiliary_nodes(&cuts);
        split_candidates(self, &aux_points, &aux_slots, tolerances, &mut result)?;

        Ok(result)
    }

    /// Splits this triangle in a frame whose first axis follows the interface.
    ///
    /// The interface is approximated by the segment joining two auxiliary nodes: those of
    /// the edges 1 and 2 if the edge 0 is not cut, those of the edges 0 and 1 if both are
    /// cut, and those of the edges 0 and 2 otherwise. The origin of the local frame is the
    /// first of these two nodes.
    ///
    /// The partitions are then computed exactly like [`Triangle::partition`] but with every
    /// point expressed in the local frame, so the enriched gradients come out in local
    /// coordinates. A triangle that is not cut gets the identity frame.
    pub fn partition_in_local_axis(
        &self,
        distances: &[Real; 3],
        tolerances: &PartitionTolerances,
    ) -> Result<LocalAxisPartitioning, PartitionError> {
        let (gradients, area) = self
            .shape_function_gradients()
            .ok_or(PartitionError::DegenerateSimplex)?;
        let normalized = self.normalized_distances(distances, tolerances);
        let mut result = Partitioning2::new(area, gradients, normalized.values);

        if normalized.same_side() {
            return Ok(LocalAxisPartitioning {
                partitioning: result.with_single_partition(side(normalized.values[0])),
                origin: Point2::origin(),
                rotation: Matrix2::identity(),
                rotated_points: self.vertices(),
                local_gradients: gradients,
            });
        }

        let cuts = EdgeCut::classify_all(&Triangle::EDGES, &normalized);
        let (aux_points, aux_slots) = self.auxiliary_nodes(&cuts);

        let (origin, direction) = if !cuts[0].is_cut() {
            (aux_points[1], aux_points[2] - aux_points[1])
        } else if cuts[1].is_cut() {
            (aux_points[0], aux_points[1] - aux_points[0])
        } else {
            (aux_points[0], aux_points[2] - aux_points[0])
        };

        let axis = direction
            .try_normalize(0.0)
            .ok_or(PartitionError::DegenerateInterface)?;
        #[rustfmt::skip]
        let rotation = Matrix2::new(
            axis.x, -axis.y,
            axis.y, axis.x,
        );
        let to_local = |p: &Point2<Real>| -> Point2<Real> {
            Point2::from(rotation.tr_mul(&(p - origin)))
        };

        let rotated = Triangle::from(self.vertices().map(|p| to_local(&p)));
        let rotated_aux = aux_points.map(|p| to_local(&p));
        let (local_gradients, _) = rotated
            .shape_function_gradients()
            .ok_or(PartitionError::DegenerateSimplex)?;

        split_candidates(&rotated, &rotated_aux, &aux_slots, tolerances, &mut result)?;

        Ok(LocalAxisPartitioning {
            partitioning: result,
            origin,
            rotation,
            rotated_points: rotated.vertices(),
            local_gradients,
        })
    }

    fn normalized_distances(
        &self,
        distances: &[Real; 3],
        tolerances: &PartitionTolerances,
    ) -> NormalizedDistances<3> {
        let scale = tolerances
            .triangle_snap_scale
            .length(self.longest_edge(), distances);
        NormalizedDistances::snapped(distances, tolerances.triangle_snap_factor * scale)
    }

    /// The auxiliary node of each edge, with its description in terms of original nodes.
    ///
    /// The node of a cut edge lies where the interpolated distance vanishes. The node of an
    /// uncut edge is the endpoint with the largest absolute distance.
    fn auxiliary_nodes(&self, cuts: &[EdgeCut; 3]) -> ([Point2<Real>; 3], [Slot; 3]) {
        let mut points = [Point2::origin(); 3];
        let mut slots = [Slot::Vertex(0); 3];

        for (e, cut) in cuts.iter().enumerate() {
            let [i, j] = Triangle::EDGES[e];
            let (point, slot) = match *cut {
                EdgeCut::Cut { parameter } => {
                    let pi = self.vertex(i);
                    let pj = self.vertex(j);
                    (
                        pi + (pj - pi) * parameter,
                        Slot::Edge {
                            edge: e,
                            parents: [i, j],
                        },
                    )
                }
                EdgeCut::Uncut { dominant } => (self.vertex(dominant), Slot::Vertex(dominant)),
                // Snapped distances never flag collapsed nodes.
                EdgeCut::Collapsed => (self.vertex(i), Slot::Vertex(i)),
            };
            points[e] = point;
            slots[e] = slot;
        }

        (points, slots)
    }
}

/// `1.0` for a positive distance, `-1.0` otherwise.
#[inline]
fn side(distance: Real) -> Real {
    if distance > 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Computes the partitions of a cut triangle from its four candidate sub-triangles.
///
/// `frame` is the triangle expressed in the frame the partitions are computed in, and
/// `aux_points` the auxiliary nodes of its edges in that same frame.
fn split_candidates(
    frame: &Triangle,
    aux_points: &[Point2<Real>; 3],
    aux_slots: &[Slot; 3],
    tolerances: &PartitionTolerances,
    result: &mut Partitioning2,
) -> Result<(), PartitionError> {
    let distances = result.distances;
    let point = |id: usize| {
        if id < 3 {
            frame.vertex(id)
        } else {
            aux_points[id - 3]
        }
    };
    let slot = |id: usize| {
        if id < 3 {
            Slot::Vertex(id)
        } else {
            aux_slots[id - 3]
        }
    };

    // Node ids: 0..3 for the vertices, 3 + e for the auxiliary node of the edge e.
    let candidates = [[0, 3, 5], [1, 4, 3], [2, 5, 4], [3, 4, 5]];

    for ids in candidates {
        let sub = Triangle::from(ids.map(point));
        let area = sub.signed_area();

        if area.abs() <= tolerances.zero_area {
            log::debug!("discarding the sub-triangle {ids:?} with area {area:e}");
            continue;
        }

        let (local_gradients, _) = sub
            .shape_function_gradients()
            .ok_or(PartitionError::DegenerateSimplex)?;
        let shape_functions = frame
            .barycentric_coordinates(&sub.center())
            .ok_or(PartitionError::DegenerateSimplex)?;
        let sign = partition_sign(&shape_functions, &distances);
        let slots = ids.map(slot);

        accumulate_edge_areas(&mut result.edge_areas, &distances, &slots, area);
        result.partitions.push(enriched_partition(
            &slots,
            &local_gradients,
            &distances,
            area,
            sign,
            shape_functions,
        ));
    }

    result.count = CUT_TRIANGLE_PARTITION_COUNT;
    Ok(())
}

/// Splits the triangle with vertices `points` along the zero level set of `distances`,
/// with the default tolerances.
///
/// See [`Triangle::partition`].
pub fn partition_triangle(
    points: &[Point2<Real>; 3],
    distances: &[Real; 3],
) -> Result<Partitioning2, PartitionError> {
    partition_triangle_with_tolerances(points, distances, &PartitionTolerances::default())
}

/// Splits the triangle with vertices `points` along the zero level set of `distances`.
///
/// See [`Triangle::partition`].
pub fn partition_triangle_with_tolerances(
    points: &[Point2<Real>; 3],
    distances: &[Real; 3],
    tolerances: &PartitionTolerances,
) -> Result<Partitioning2, PartitionError> {
    Triangle::from_array(points).partition(distances, tolerances)
}

/// Splits the triangle with vertices `points` in a frame aligned with the interface, with
/// the default tolerances.
///
/// See [`Triangle::partition_in_local_axis`].
pub fn partition_triangle_in_local_axis(
    points: &[Point2<Real>; 3],
    distances: &[Real; 3],
) -> Result<LocalAxisPartitioning, PartitionError> {
    partition_triangle_in_local_axis_with_tolerances(
        points,
        distances,
        &PartitionTolerances::default(),
    )
}

/// Splits the triangle with vertices `points` in a frame aligned with the interface.
///
/// See [`Triangle::partition_in_local_axis`].
pub fn partition_triangle_in_local_axis_with_tolerances(
    points: &[Point2<Real>; 3],
    distances: &[Real; 3],
    tolerances: &PartitionTolerances,
) -> Result<LocalAxisPartitioning, PartitionError> {
    Triangle::from_array(points).partition_in_local_axis(distances, tolerances)
}
