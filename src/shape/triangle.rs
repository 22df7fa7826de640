//! Definition of the triangle shape.

use crate::math::{Gradients2, Point2, Real};
use crate::utils;

/// A 2D triangle with 3 vertices.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point2<Real>,
    /// The triangle second point.
    pub b: Point2<Real>,
    /// The triangle third point.
    pub c: Point2<Real>,
}

impl From<[Point2<Real>; 3]> for Triangle {
    fn from(arr: [Point2<Real>; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// The vertex indices of the edges of a triangle.
    ///
    /// The 0-th edge is the segment AB.
    /// The 1-st edge is the segment BC.
    /// The 2-nd edge is the segment CA.
    pub const EDGES: [[usize; 2]; 3] = [[0, 1], [1, 2], [2, 0]];

    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point2<Real>, b: Point2<Real>, c: Point2<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// Creates a triangle from an array of three points.
    #[inline]
    pub fn from_array(arr: &[Point2<Real>; 3]) -> Triangle {
        Triangle::new(arr[0], arr[1], arr[2])
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point2<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The `i`-th vertex of this triangle.
    #[inline]
    pub fn vertex(&self, i: usize) -> Point2<Real> {
        match i {
            0 => self.a,
            1 => self.b,
            2 => self.c,
            _ => panic!("Triangle vertex index out of bounds (must be < 3)."),
        }
    }

    /// The lengths of the three edges, in the order of [`Triangle::EDGES`].
    pub fn edge_lengths(&self) -> [Real; 3] {
        Self::EDGES.map(|[i, j]| (self.vertex(j) - self.vertex(i)).norm())
    }

    /// The length of the longest edge of this triangle.
    pub fn longest_edge(&self) -> Real {
        self.edge_lengths().into_iter().fold(0.0, Real::max)
    }

    /// The signed area of this triangle.
    ///
    /// It is positive if the vertices are ordered counterclockwise.
    #[inline]
    pub fn signed_area(&self) -> Real {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        0.5 * (ab.x * ac.y - ab.y * ac.x)
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.signed_area().abs()
    }

    /// The center of this triangle.
    #[inline]
    pub fn center(&self) -> Point2<Real> {
        utils::center(&[self.a, self.b, self.c])
    }

    /// Computes the gradients of the linear shape functions together with the signed area.
    ///
    /// Row `i` of the returned matrix is the (constant) gradient of the shape function
    /// associated to the `i`-th vertex.
    ///
    /// Returns `None` if the triangle has exactly zero area.
    pub fn shape_function_gradients(&self) -> Option<(Gradients2, Real)> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let det = ab.x * ac.y - ab.y * ac.x;

        if det == 0.0 {
            return None;
        }

        #[rustfmt::skip]
        let gradients = Gradients2::new(
            ab.y - ac.y, ac.x - ab.x,
            ac.y,        -ac.x,
            -ab.y,       ab.x,
        ) / det;

        Some((gradients, 0.5 * det))
    }

    /// Computes the barycentric coordinates of the given point in the coordinate system of
    /// this triangle.
    ///
    /// Each coordinate is the ratio between the area of the triangle obtained by replacing the
    /// matching vertex by `p` and the area of `self`.
    ///
    /// Returns `None` if this triangle has exactly zero area.
    pub fn barycentric_coordinates(&self, p: &Point2<Real>) -> Option<[Real; 3]> {
        let area = self.signed_area();

        if area == 0.0 {
            return None;
        }

        let inv_area = 1.0 / area;
        Some([
            Triangle::new(*p, self.b, self.c).signed_area() * inv_area,
            Triangle::new(self.a, *p, self.c).signed_area() * inv_area,
            Triangle::new(self.a, self.b, *p).signed_area() * inv_area,
        ])
    }
}
