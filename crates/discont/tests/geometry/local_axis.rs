use approx::assert_relative_eq;
use discont::math::{Matrix2, Point2};
use discont::partition::{partition_triangle, partition_triangle_in_local_axis, PartitionError};
use discont::shape::Triangle;

fn points() -> [Point2<f64>; 3] {
    [
        Point2::new(-0.2, 0.1),
        Point2::new(1.4, 0.3),
        Point2::new(0.3, 1.1),
    ]
}

#[test]
fn frame_origin_is_on_the_interface() {
    let distances = [0.8, -0.3, 0.4];
    let result = partition_triangle_in_local_axis(&points(), &distances).unwrap();

    let bcoords = Triangle::from(points())
        .barycentric_coordinates(&result.origin)
        .unwrap();
    let dist: f64 = bcoords.iter().zip(distances).map(|(n, d)| n * d).sum();
    assert_relative_eq!(dist, 0.0, epsilon = 1.0e-12);

    // The first axis follows the interface: the distance is constant along it.
    let (gradients, _) = Triangle::from(points()).shape_function_gradients().unwrap();
    let axis = result.rotation.column(0);
    let mut slope = 0.0;
    for i in 0..3 {
        slope += distances[i] * (gradients[(i, 0)] * axis[0] + gradients[(i, 1)] * axis[1]);
    }
    assert_relative_eq!(slope, 0.0, epsilon = 1.0e-12);
}

#[test]
fn rotation_is_orthonormal() {
    let result = partition_triangle_in_local_axis(&points(), &[-1.0, 0.5, 0.25]).unwrap();
    let rotation = result.rotation;

    assert_relative_eq!(rotation.determinant(), 1.0, epsilon = 1.0e-12);
    assert_relative_eq!(
        rotation.transpose() * rotation,
        Matrix2::identity(),
        epsilon = 1.0e-12
    );

    for (local, original) in result.rotated_points.iter().zip(points()) {
        assert_relative_eq!(
            result.origin + rotation * local.coords,
            original,
            epsilon = 1.0e-12
        );
    }
}

#[test]
fn local_gradients_are_rotated_gradients() {
    let distances = [0.6, 0.9, -0.7];
    let local = partition_triangle_in_local_axis(&points(), &distances).unwrap();
    let global = partition_triangle(&points(), &distances).unwrap();

    assert_relative_eq!(
        local.partitioning.gradients * local.rotation,
        local.local_gradients,
        epsilon = 1.0e-12
    );

    assert_eq!(local.partitioning.count, global.count);
    assert_eq!(local.partitioning.partitions.len(), global.partitions.len());
    assert_relative_eq!(
        local.partitioning.edge_areas[..],
        global.edge_areas[..],
        epsilon = 1.0e-12
    );

    for (l, g) in local.partitioning.iter().zip(global.iter()) {
        assert_eq!(l.sign, g.sign);
        assert_relative_eq!(l.volume, g.volume, epsilon = 1.0e-12);
        assert_relative_eq!(
            l.enriched_gradients * local.rotation.transpose(),
            g.enriched_gradients,
            epsilon = 1.0e-10
        );
    }
}

#[test]
fn uncut_triangle_keeps_the_original_frame() {
    let result = partition_triangle_in_local_axis(&points(), &[1.0, 2.0, 0.5]).unwrap();

    assert_eq!(result.partitioning.count, 1);
    assert_eq!(result.rotation, Matrix2::identity());
    assert_eq!(result.rotated_points, points());
    assert_eq!(result.local_gradients, result.partitioning.gradients);
}

#[test]
fn degenerate_triangle_is_rejected() {
    let flat = [
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(2.0, 2.0),
    ];
    assert_eq!(
        partition_triangle_in_local_axis(&flat, &[1.0, -1.0, 1.0]),
        Err(PartitionError::DegenerateSimplex)
    );
}
