use crate::math::Real;
use na::{Point, SVector};

/// Computes the geometric center (centroid) of a set of points.
///
/// The center is calculated by averaging all the point coordinates. All points
/// are weighted equally, so for the vertices of a simplex this is the simplex
/// centroid.
///
/// # Panics
///
/// Panics if the input slice is empty.
///
/// # Examples
///
/// ```
/// use discont::math::Point3;
/// use discont::utils::center;
///
/// let points = [
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(4.0, 0.0, 0.0),
///     Point3::new(0.0, 4.0, 0.0),
///     Point3::new(0.0, 0.0, 4.0),
/// ];
///
/// let c = center(&points);
/// assert!((c.x - 1.0).abs() < 1e-12);
/// assert!((c.y - 1.0).abs() < 1e-12);
/// assert!((c.z - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn center<const D: usize>(pts: &[Point<Real, D>]) -> Point<Real, D> {
    assert!(
        !pts.is_empty(),
        "Cannot compute the center of less than 1 point."
    );

    let denom = 1.0 / (pts.len() as Real);
    let mut res = SVector::<Real, D>::zeros();

    for pt in pts {
        res += pt.coords;
    }

    Point::from(res * denom)
}
