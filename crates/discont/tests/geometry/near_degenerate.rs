use approx::assert_relative_eq;
use discont::math::{Point2, Point3};
use discont::partition::{partition_tetrahedron, partition_triangle};

#[test]
fn tiny_triangle_distance_does_not_add_partitions() {
    let points = [
        Point2::new(0.0, 0.0),
        Point2::new(2.0, 0.5),
        Point2::new(0.5, 1.5),
    ];

    for distances in [[0.0, 1.0, -1.0], [1.0, -0.5, 0.0], [0.0, 0.0, 1.0]] {
        let mut perturbed = distances;
        perturbed[distances.iter().position(|d| *d == 0.0).unwrap()] = 1.0e-14;

        let exact = partition_triangle(&points, &distances).unwrap();
        let nudged = partition_triangle(&points, &perturbed).unwrap();

        assert_eq!(exact.count, nudged.count);
        assert_eq!(exact.partitions.len(), nudged.partitions.len());
        assert_relative_eq!(exact.total_volume(), nudged.total_volume(), epsilon = 1.0e-12);
        assert_relative_eq!(nudged.total_volume(), nudged.volume, epsilon = 1.0e-12);
    }
}

#[test]
fn tiny_tetrahedron_distance_does_not_add_partitions() {
    let points = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.2, 0.0),
        Point3::new(0.1, 1.0, 0.3),
        Point3::new(0.2, 0.1, 1.0),
    ];

    for distances in [
        [0.0, -1.0, -1.0, -1.0],
        [0.0, 1.0, -1.0, -1.0],
        [1.0, 0.0, 0.0, -1.0],
    ] {
        let mut perturbed = distances;
        perturbed[distances.iter().position(|d| *d == 0.0).unwrap()] = 1.0e-14;

        let exact = partition_tetrahedron(&points, &distances).unwrap();
        let nudged = partition_tetrahedron(&points, &perturbed).unwrap();

        assert_eq!(exact.count, nudged.count);
        assert_eq!(exact.distances, nudged.distances);
        assert_relative_eq!(exact.total_volume(), nudged.total_volume(), epsilon = 1.0e-14);
        assert_relative_eq!(nudged.total_volume(), nudged.volume, epsilon = 1.0e-14);
    }
}

#[test]
fn collapsed_vertex_gets_no_enrichment() {
    let points = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ];
    let result = partition_tetrahedron(&points, &[1.0e-14, 1.0, -1.0, -1.0]).unwrap();

    assert_eq!(result.distances[0], 0.0);
    for p in result.iter() {
        assert_eq!(p.enriched_shape_functions[0], 0.0);
    }
}
