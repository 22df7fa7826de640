/*!
discont
========

**discont** computes discontinuous (enriched) shape functions for linear
triangles and tetrahedra cut by an embedded interface.

Given a simplex and one signed distance per vertex, the simplex is split into
sub-simplices lying entirely on one side of the zero level set. For each of
them, the volume, side sign, standard shape function values at its center,
and the enriched shape functions together with their gradients are computed.

```
use discont::math::Point2;
use discont::partition::partition_triangle;

let points = [
    Point2::new(0.0, 0.0),
    Point2::new(1.0, 0.0),
    Point2::new(0.0, 1.0),
];
let result = partition_triangle(&points, &[1.0, -1.0, -1.0]).unwrap();

assert_eq!(result.count, 3);
assert!((result.total_volume() - 0.5).abs() < 1.0e-12);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![allow(clippy::needless_range_loop)] // Index loops mirror the node/edge numbering.

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod partition;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    pub use f64 as Real;
}

/// Aliases for the mathematical types used by the 2D and 3D partitioners.
pub mod math {
    pub use super::real::*;
    pub use na::{Matrix2, Matrix3, Point2, Point3, SMatrix, Vector2, Vector3};

    /// Gradients of the three linear shape functions of a triangle.
    ///
    /// Row `i` holds the gradient of the shape function of node `i`.
    pub type Gradients2 = SMatrix<Real, 3, 2>;

    /// Gradients of the four linear shape functions of a tetrahedron.
    ///
    /// Row `i` holds the gradient of the shape function of node `i`.
    pub type Gradients3 = SMatrix<Real, 4, 3>;
}
