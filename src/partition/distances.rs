use crate::math::Real;

/// Nodal distances after the near-zero ones have been adjusted.
///
/// Two rules exist. Triangles move near-zero distances away from the interface
/// ([`NormalizedDistances::snapped`]) so every node keeps a well-defined side, while
/// tetrahedra collapse them onto the interface ([`NormalizedDistances::collapsed`]) so no
/// sliver sub-tetrahedron is ever created next to such a node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NormalizedDistances<const N: usize> {
    /// The normalized distance of each node.
    pub values: [Real; N],
    /// `true` for the nodes whose distance was collapsed to exactly zero.
    pub collapsed: [bool; N],
}

impl<const N: usize> NormalizedDistances<N> {
    /// Moves every distance with a magnitude below `threshold` to `±threshold`.
    ///
    /// The original sign is kept. A distance of exactly zero has no sign and is moved to the
    /// positive side. No node is flagged as collapsed.
    pub fn snapped(distances: &[Real; N], threshold: Real) -> Self {
        let mut values = *distances;

        for (i, d) in values.iter_mut().enumerate() {
            if d.abs() < threshold {
                let snapped = if *d < 0.0 { -threshold } else { threshold };
                log::trace!("snapping the distance {d:e} of node {i} to {snapped:e}");
                *d = snapped;
            }
        }

        Self {
            values,
            collapsed: [false; N],
        }
    }

    /// Sets every distance with a magnitude below `threshold` to zero and flags its node as
    /// collapsed.
    pub fn collapsed(distances: &[Real; N], threshold: Real) -> Self {
        let mut values = *distances;
        let mut collapsed = [false; N];

        for i in 0..N {
            if values[i].abs() < threshold {
                log::trace!("collapsing node {i} with distance {:e}", values[i]);
                values[i] = 0.0;
                collapsed[i] = true;
            }
        }

        Self { values, collapsed }
    }

    /// Is the `i`-th node collapsed onto the interface?
    #[inline]
    pub fn is_collapsed(&self, i: usize) -> bool {
        self.collapsed[i]
    }

    /// Do all the nodes lie strictly on the same side as the first one?
    pub fn same_side(&self) -> bool {
        self.values[1..]
            .iter()
            .all(|d| self.values[0] * d > 0.0)
    }
}
