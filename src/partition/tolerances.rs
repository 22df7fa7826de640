use crate::math::Real;

/// The length used to scale the relative snapping tolerance of nodal distances.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum DistanceScale {
    /// The tolerance is relative to the longest edge of the simplex.
    #[default]
    LongestEdge,
    /// The tolerance is relative to the largest absolute nodal distance.
    LargestDistance,
}

impl DistanceScale {
    /// The reference length for a simplex with the given longest edge and nodal distances.
    pub fn length(self, longest_edge: Real, distances: &[Real]) -> Real {
        match self {
            DistanceScale::LongestEdge => longest_edge,
            DistanceScale::LargestDistance => distances.iter().fold(0.0, |m, d| m.max(d.abs())),
        }
    }
}

/// Tolerances controlling how near-degenerate configurations are handled by the partitioners.
///
/// # Examples
///
/// ```
/// use discont::partition::{DistanceScale, PartitionTolerances};
///
/// // Use default tolerances (recommended for most cases)
/// let default_tol = PartitionTolerances::default();
///
/// // Or snap 2D distances relative to the largest nodal distance instead.
/// let custom_tol = PartitionTolerances {
///     triangle_snap_scale: DistanceScale::LargestDistance,
///     ..Default::default()
/// };
/// # assert_ne!(default_tol, custom_tol);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PartitionTolerances {
    /// Relative factor of the 2D snapping threshold.
    ///
    /// Triangle distances with a magnitude below `triangle_snap_factor * scale` are moved
    /// away from the interface, up to that threshold, keeping their sign.
    pub triangle_snap_factor: Real,
    /// The length the 2D snapping threshold is relative to.
    pub triangle_snap_scale: DistanceScale,
    /// Relative factor of the 3D collapse threshold.
    ///
    /// Tetrahedron distances with a magnitude below `tetrahedron_collapse_factor` times the
    /// longest edge are collapsed to exactly zero.
    pub tetrahedron_collapse_factor: Real,
    /// Absolute area below which a candidate 2D partition is discarded.
    pub zero_area: Real,
    /// The distance gradient is only normalized if its norm exceeds this value.
    pub gradient_epsilon: Real,
}

impl Default for PartitionTolerances {
    fn default() -> Self {
        Self {
            triangle_snap_factor: 1.0e-3,
            triangle_snap_scale: DistanceScale::LongestEdge,
            tetrahedron_collapse_factor: 1.0e-12,
            zero_area: 1.0e-20,
            gradient_epsilon: 1.0e-15,
        }
    }
}
