use crate::math::Real;
use crate::partition::Slot;

/// Accumulates the interface area carried by a partition onto the original edges.
///
/// A partition contributes only if all of its slots but one are auxiliary nodes and the
/// remaining original vertex has a strictly positive distance. Such a partition is a cap
/// whose base lies on the interface. Each of its auxiliary slots then receives
/// `|volume| * N / |d_p| / (N - 1)` on its edge, `d_p` being the distance of the
/// positive vertex. Edge areas are never negative, whatever the orientation of the simplex.
pub fn accumulate_edge_areas<const N: usize, const E: usize>(
    edge_areas: &mut [Real; E],
    distances: &[Real; N],
    slots: &[Slot; N],
    volume: Real,
) {
    let dim = N - 1;
    let num_cut = slots.iter().filter(|s| s.is_auxiliary()).count();
    let mut positive = slots
        .iter()
        .filter_map(Slot::vertex)
        .filter(|i| distances[*i] > 0.0);

    if num_cut != dim {
        return;
    }

    let (Some(vertex), None) = (positive.next(), positive.next()) else {
        return;
    };

    let area = volume.abs() * N as Real / distances[vertex].abs() / dim as Real;

    for edge in slots.iter().filter_map(Slot::edge) {
        edge_areas[edge] += area;
    }
}
