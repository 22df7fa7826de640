use approx::assert_relative_eq;
use discont::math::{Point2, Point3};
use discont::partition::{
    partition_tetrahedron, partition_triangle, Partitioning, MAX_PARTITIONS,
};
use discont::shape::{Tetrahedron, Triangle};

fn uniform(rng: &mut oorandom::Rand64) -> f64 {
    rng.rand_float() * 2.0 - 1.0
}

fn check_partitioning<const N: usize, const D: usize, const E: usize>(
    result: &Partitioning<N, D, E>,
    distances: &[f64; N],
) {
    assert!(result.partitions.len() <= result.count);
    assert!(result.count <= MAX_PARTITIONS);

    // Volume conservation.
    assert_relative_eq!(
        result.total_volume(),
        result.volume,
        max_relative = 1.0e-9,
        epsilon = 1.0e-14
    );

    for p in result.iter() {
        assert!(p.sign == 1.0 || p.sign == -1.0);
        assert_eq!(p.volume.signum(), result.volume.signum());

        let n_sum: f64 = p.shape_functions.iter().sum();
        assert_relative_eq!(n_sum, 1.0, epsilon = 1.0e-10);

        let enriched: f64 = p.enriched_shape_functions.iter().sum();
        assert!(enriched <= 1.0 + 1.0e-12);

        for j in 0..N {
            if p.enriched_shape_functions[j] != 0.0 {
                assert!(p.sign * result.distances[j] > 0.0);
            }
        }

        // Every enriched shape function is a count of same-side slots over N.
        for psi in p.enriched_shape_functions {
            let slots = psi * N as f64;
            assert_relative_eq!(slots, slots.round(), epsilon = 1.0e-9);
        }

        if result.is_cut() {
            assert!(enriched > 0.0 || result.distances.contains(&0.0));
        } else {
            assert_eq!(enriched, 0.0);
        }

        // Without collapsed nodes each slot has exactly one same-side parent.
        if result.is_cut() && !result.distances.contains(&0.0) {
            assert_relative_eq!(enriched, 1.0, epsilon = 1.0e-12);

            let scale = p.enriched_gradients.amax().max(1.0);
            for k in 0..D {
                let slope: f64 = p.enriched_gradients.column(k).sum();
                assert!(slope.abs() <= 1.0e-9 * scale);
            }
        }
    }

    assert!(result.edge_areas.iter().all(|a| *a >= 0.0));

    if !result.is_cut() {
        let first = distances[0];
        assert!(distances.iter().all(|d| d * first >= 0.0) || result.distances.contains(&0.0));
    }
}

#[test]
fn random_triangles() {
    let mut rng = oorandom::Rand64::new(42);
    let mut num_cut = 0;

    for _ in 0..2000 {
        let points = [(); 3].map(|_| Point2::new(uniform(&mut rng), uniform(&mut rng)));
        if Triangle::from(points).area() < 1.0e-3 {
            continue;
        }

        let distances = [(); 3].map(|_| uniform(&mut rng));
        let result = partition_triangle(&points, &distances).unwrap();
        check_partitioning(&result, &distances);

        if result.is_cut() {
            num_cut += 1;
            assert_eq!(result.count, 3);
            assert!(result.partitions.len() >= 2);
        }
    }

    assert!(num_cut > 0);
}

#[test]
fn random_tetrahedra() {
    let mut rng = oorandom::Rand64::new(1234);
    let mut num_cut = 0;

    for _ in 0..2000 {
        let points = [(); 4].map(|_| {
            Point3::new(uniform(&mut rng), uniform(&mut rng), uniform(&mut rng))
        });
        if Tetrahedron::from(points).volume() < 1.0e-3 {
            continue;
        }

        let distances = [(); 4].map(|_| uniform(&mut rng));
        let result = partition_tetrahedron(&points, &distances).unwrap();
        check_partitioning(&result, &distances);

        if result.is_cut() {
            num_cut += 1;
            assert!(result.count == 4 || result.count == 6);
            assert_eq!(result.partitions.len(), result.count);

            // A vertex alone on the positive side always yields a cap.
            let num_positive = result.distances.iter().filter(|d| **d > 0.0).count();
            if num_positive == 1 && !result.distances.contains(&0.0) {
                assert!(result.edge_areas.iter().any(|a| *a > 0.0));
            }
        }
    }

    assert!(num_cut > 0);
}
