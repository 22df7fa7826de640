use crate::math::{Real, SMatrix};
use crate::partition::{Partition, Slot};

/// The side of the interface a partition lies on.
///
/// This is the sign of `Σ n_j d_j`, the distance interpolated at the partition center
/// whose barycentric coordinates in the original simplex are `n`. If that value is exactly
/// zero, the sign of the node with the largest barycentric weight among those with a
/// nonzero distance is used instead (lowest index on ties), and `1.0` if all distances
/// are zero.
pub fn partition_sign<const N: usize>(n: &[Real; N], distances: &[Real; N]) -> Real {
    let dist: Real = n.iter().zip(distances.iter()).map(|(n, d)| n * d).sum();

    if dist > 0.0 {
        return 1.0;
    } else if dist < 0.0 {
        return -1.0;
    }

    let mut nearest: Option<usize> = None;
    for j in 0..N {
        if distances[j] != 0.0 && nearest.map_or(true, |k| n[j] > n[k]) {
            nearest = Some(j);
        }
    }

    let sign = match nearest {
        Some(j) if distances[j] < 0.0 => -1.0,
        _ => 1.0,
    };
    log::warn!(
        "the interpolated distance at a partition center is exactly zero; using the sign {sign} of the nearest node {nearest:?}"
    );
    sign
}

/// Builds a partition and accumulates the enriched shape functions of the original nodes.
///
/// Only the nodes `j` on the same side as the partition (`sign * distances[j] > 0`)
/// receive contributions, from each slot of the partition that is `j` itself or lies on
/// an edge ending at `j`. Every such slot adds `1 / N` to the enriched shape function of `j`
/// and its row of `local_gradients` (the shape function gradients of the partition itself)
/// to the enriched gradient of `j`.
pub fn enriched_partition<const N: usize, const D: usize>(
    slots: &[Slot; N],
    local_gradients: &SMatrix<Real, N, D>,
    distances: &[Real; N],
    volume: Real,
    sign: Real,
    shape_functions: [Real; N],
) -> Partition<N, D> {
    let weight = 1.0 / N as Real;
    let mut enriched_shape_functions = [0.0; N];
    let mut enriched_gradients = SMatrix::<Real, N, D>::zeros();

    for j in 0..N {
        if sign * distances[j] <= 0.0 {
            continue;
        }

        for (k, slot) in slots.iter().enumerate() {
            if slot.has_parent(j) {
                enriched_shape_functions[j] += weight;
                for c in 0..D {
                    enriched_gradients[(j, c)] += local_gradients[(k, c)];
                }
            }
        }
    }

    Partition {
        volume,
        sign,
        shape_functions,
        enriched_shape_functions,
        enriched_gradients,
    }
}
