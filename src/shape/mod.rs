//! Shapes supported by the partitioners.

pub use self::tetrahedron::Tetrahedron;
pub use self::triangle::Triangle;

mod tetrahedron;
mod triangle;
