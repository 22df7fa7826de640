use approx::assert_relative_eq;
use discont::math::Point2;
use discont::partition::{
    partition_triangle, partition_triangle_with_tolerances, DistanceScale, EdgeCut,
    NormalizedDistances, PartitionError, PartitionTolerances,
};
use discont::shape::Triangle;

fn unit_points() -> [Point2<f64>; 3] {
    [
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
    ]
}

#[test]
fn simple_cut() {
    let result = partition_triangle(&unit_points(), &[1.0, -1.0, -1.0]).unwrap();

    assert_eq!(result.count, 3);
    assert!(result.partitions.len() <= 3);
    assert_relative_eq!(result.total_volume(), 0.5, epsilon = 1.0e-12);

    let positive: Vec<_> = result.iter().filter(|p| p.sign > 0.0).collect();
    assert_eq!(positive.len(), 1);

    let n = positive[0].shape_functions;
    assert!(n[0] > n[1] && n[0] > n[2]);
    assert_relative_eq!(n[0] + n[1] + n[2], 1.0, epsilon = 1.0e-12);
}

#[test]
fn no_cut() {
    let result = partition_triangle(&unit_points(), &[1.0, 1.0, 1.0]).unwrap();

    assert_eq!(result.count, 1);
    assert_eq!(result.partitions.len(), 1);

    let whole = &result.partitions[0];
    assert_relative_eq!(whole.volume, 0.5);
    assert_eq!(whole.sign, 1.0);
    for n in whole.shape_functions {
        assert_relative_eq!(n, 1.0 / 3.0);
    }
    assert_eq!(whole.enriched_shape_functions, [0.0; 3]);
    assert_eq!(result.edge_areas, [0.0; 3]);
}

#[test]
fn uncut_edge_ties_collapse_onto_the_first_endpoint() {
    // |d1| == |d2|: the auxiliary node of the edge 1-2 sits on the vertex 1, so the corner
    // triangle of the vertex 1 vanishes and the one of the vertex 2 covers half the triangle.
    let result = partition_triangle(&unit_points(), &[1.0, -1.0, -1.0]).unwrap();
    assert_eq!(result.partitions.len(), 3);

    let corner = &result.partitions[1];
    assert_relative_eq!(corner.volume, 0.25, epsilon = 1.0e-12);
    assert_relative_eq!(corner.shape_functions[0], 1.0 / 6.0, epsilon = 1.0e-12);
    assert_relative_eq!(corner.shape_functions[1], 1.0 / 3.0, epsilon = 1.0e-12);
    assert_relative_eq!(corner.shape_functions[2], 0.5, epsilon = 1.0e-12);
    assert_relative_eq!(corner.enriched_shape_functions[1], 1.0 / 3.0, epsilon = 1.0e-12);
    assert_relative_eq!(corner.enriched_shape_functions[2], 2.0 / 3.0, epsilon = 1.0e-12);
}

#[test]
fn edge_intersection_is_on_the_zero_level_set() {
    let distances = [0.7, -0.2, 1.3];
    let normalized = NormalizedDistances::snapped(&distances, 0.0);

    for (e, [i, j]) in Triangle::EDGES.iter().copied().enumerate() {
        let cut = EdgeCut::classify([i, j], &normalized);
        if let Some(s) = cut.parameter() {
            assert!(e != 2, "the edge 2-0 is not cut");
            let (di, dj) = (distances[i], distances[j]);
            assert_relative_eq!(di + (dj - di) * s, 0.0, epsilon = 1.0e-14);
        }
    }
}

#[test]
fn enriched_nodes_are_on_the_partition_side() {
    let points = [
        Point2::new(-0.3, 0.1),
        Point2::new(1.2, -0.4),
        Point2::new(0.4, 0.9),
    ];
    let result = partition_triangle(&points, &[-0.4, 0.9, 0.2]).unwrap();

    for p in result.iter() {
        let total: f64 = p.enriched_shape_functions.iter().sum();
        assert!(total > 0.0 && total <= 1.0 + 1.0e-12);

        for j in 0..3 {
            if p.enriched_shape_functions[j] != 0.0 {
                assert!(p.sign * result.distances[j] > 0.0);
            }
        }
    }
}

#[test]
fn legacy_snapping_scale() {
    let tolerances = PartitionTolerances {
        triangle_snap_scale: DistanceScale::LargestDistance,
        ..Default::default()
    };
    let result =
        partition_triangle_with_tolerances(&unit_points(), &[2.0, -1.0e-5, 4.0], &tolerances)
            .unwrap();
    assert_relative_eq!(result.distances[1], -4.0e-3);
    assert!(result.is_cut());
}

#[test]
fn colinear_points_are_rejected() {
    let points = [
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(3.0, 0.0),
    ];
    assert_eq!(
        partition_triangle(&points, &[1.0, -1.0, 1.0]),
        Err(PartitionError::DegenerateSimplex)
    );
}
