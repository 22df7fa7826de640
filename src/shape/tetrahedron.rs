//! Definition of the tetrahedron shape.

use crate::math::{Gradients3, Point3, Real};
use crate::utils;

/// A tetrahedron with 4 vertices.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Tetrahedron {
    /// The tetrahedron first point.
    pub a: Point3<Real>,
    /// The tetrahedron second point.
    pub b: Point3<Real>,
    /// The tetrahedron third point.
    pub c: Point3<Real>,
    /// The tetrahedron fourth point.
    pub d: Point3<Real>,
}

impl From<[Point3<Real>; 4]> for Tetrahedron {
    fn from(arr: [Point3<Real>; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl Tetrahedron {
    /// The vertex indices of the edges of a tetrahedron.
    ///
    /// The 0-st edge is the segment AB.
    /// The 1-st edge is the segment AC.
    /// The 2-nd edge is the segment AD.
    /// The 3-rd edge is the segment BC.
    /// The 4-th edge is the segment BD.
    /// The 5-th edge is the segment CD.
    pub const EDGES: [[usize; 2]; 6] = [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]];

    /// Creates a tetrahedron from four points.
    #[inline]
    pub fn new(a: Point3<Real>, b: Point3<Real>, c: Point3<Real>, d: Point3<Real>) -> Tetrahedron {
        Tetrahedron { a, b, c, d }
    }

    /// Creates a tetrahedron from an array of four points.
    #[inline]
    pub fn from_array(arr: &[Point3<Real>; 4]) -> Tetrahedron {
        Tetrahedron::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// The four vertices of this tetrahedron.
    #[inline]
    pub fn vertices(&self) -> [Point3<Real>; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// The `i`-th vertex of this tetrahedron.
    #[inline]
    pub fn vertex(&self, i: usize) -> Point3<Real> {
        match i {
            0 => self.a,
            1 => self.b,
            2 => self.c,
            3 => self.d,
            _ => panic!("Tetrahedron vertex index out of bounds (must be < 4)."),
        }
    }

    /// Returns the indices of the vertices of the i-th edge of this tetrahedron.
    ///
    /// See [`Tetrahedron::EDGES`] for the edge numbering.
    pub fn edge_ids(i: usize) -> (usize, usize) {
        let [a, b] = Self::EDGES[i];
        (a, b)
    }

    /// The lengths of the six edges, in the order of [`Tetrahedron::EDGES`].
    pub fn edge_lengths(&self) -> [Real; 6] {
        Self::EDGES.map(|[i, j]| (self.vertex(j) - self.vertex(i)).norm())
    }

    /// The length of the longest edge of this tetrahedron.
    pub fn longest_edge(&self) -> Real {
        self.edge_lengths().into_iter().fold(0.0, Real::max)
    }

    /// Computes the volume of this tetrahedron.
    #[inline]
    pub fn volume(&self) -> Real {
        self.signed_volume().abs()
    }

    /// Computes the signed volume of this tetrahedron.
    ///
    /// If it is positive, `d` is on the half-space pointed by the normal of the oriented triangle
    /// `(a, b, c)`.
    #[inline]
    pub fn signed_volume(&self) -> Real {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let ad = self.d - self.a;

        ab.dot(&ac.cross(&ad)) / 6.0
    }

    /// Computes the center of this tetrahedron.
    #[inline]
    pub fn center(&self) -> Point3<Real> {
        utils::center(&[self.a, self.b, self.c, self.d])
    }

    /// Computes the gradients of the linear shape functions together with the signed volume.
    ///
    /// Row `i` of the returned matrix is the (constant) gradient of the shape function
    /// associated to the `i`-th vertex. The rows of the vertices `b`, `c`, `d` are the
    /// cofactors of the Jacobian `[b - a, c - a, d - a]` divided by its determinant, and
    /// the first row is minus their sum.
    ///
    /// Returns `None` if the tetrahedron has exactly zero volume.
    pub fn shape_function_gradients(&self) -> Option<(Gradients3, Real)> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let ad = self.d - self.a;

        let gb = ac.cross(&ad);
        let gc = ad.cross(&ab);
        let gd = ab.cross(&ac);
        let det = ab.dot(&gb);

        if det == 0.0 {
            return None;
        }

        let ga = -(gb + gc + gd);
        let mut gradients = Gradients3::zeros();

        for (i, g) in [ga, gb, gc, gd].iter().enumerate() {
            gradients.set_row(i, &(g / det).transpose());
        }

        Some((gradients, det / 6.0))
    }

    /// Computes the barycentric coordinates of the given point in the coordinate system of
    /// this tetrahedron.
    ///
    /// Each coordinate is the ratio between the volume of the tetrahedron obtained by
    /// replacing the matching vertex by `p` and the volume of `self`.
    ///
    /// Returns `None` if this tetrahedron has exactly zero volume.
    pub fn barycentric_coordinates(&self, p: &Point3<Real>) -> Option<[Real; 4]> {
        let volume = self.signed_volume();

        if volume == 0.0 {
            return None;
        }

        let inv_volume = 1.0 / volume;
        Some([
            Tetrahedron::new(*p, self.b, self.c, self.d).signed_volume() * inv_volume,
            Tetrahedron::new(self.a, *p, self.c, self.d).signed_volume() * inv_volume,
            Tetrahedron::new(self.a, self.b, *p, self.d).signed_volume() * inv_volume,
            Tetrahedron::new(self.a, self.b, self.c, *p).signed_volume() * inv_volume,
        ])
    }
}
