//! This module contains a struct, [`Coord`](coord::Coord), that models a point in a 3D color space
//! and supports the small amount of linear algebra the conversions need: applying a function to
//! each component, and applying a 3x3 matrix. Every color space in [`colors`] maps its three
//! components onto the axes in the order of the letters in its name: `OklabColor` puts `l` on the
//! x-axis, `a` on the y-axis, and `b` on the z-axis.
//!
//! [`colors`]: ../colors/index.html

/// A 3x3 matrix, stored row by row.
pub type Matrix3 = [[f64; 3]; 3];

/// A point in 3D space.
///
/// # Example
/// ```
/// # use okpalette::coord::Coord;
/// let point = Coord{x: 1., y: 8., z: -7.};
/// assert_eq!(point.max_min(), (8., -7.));
/// assert_eq!(point.map(|v| v * 2.), Coord{x: 2., y: 16., z: -14.});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Coord {
    /// Multiplies the given matrix by this point, treated as a column vector.
    /// # Example
    /// ```
    /// # use okpalette::coord::Coord;
    /// let swap = [[0., 1., 0.], [1., 0., 0.], [0., 0., 2.]];
    /// let p = Coord{x: 1., y: 2., z: 3.}.transform(&swap);
    /// assert_eq!(p, Coord{x: 2., y: 1., z: 6.});
    /// ```
    pub fn transform(&self, m: &Matrix3) -> Coord {
        Coord {
            x: m[0][0] * self.x + m[0][1] * self.y + m[0][2] * self.z,
            y: m[1][0] * self.x + m[1][1] * self.y + m[1][2] * self.z,
            z: m[2][0] * self.x + m[2][1] * self.y + m[2][2] * self.z,
        }
    }

    /// Applies a function to each component independently, such as a transfer curve or a cube root.
    pub fn map<F: Fn(f64) -> f64>(&self, f: F) -> Coord {
        Coord {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }

    /// The largest and smallest component, in that order.
    pub fn max_min(&self) -> (f64, f64) {
        let max_c = self.x.max(self.y).max(self.z);
        let min_c = self.x.min(self.y).min(self.z);
        (max_c, min_c)
    }
}
