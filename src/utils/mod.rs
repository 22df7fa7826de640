//! Various unsorted geometrical and logical operators.

pub use self::center::center;

mod center;
