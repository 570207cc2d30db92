use std::fmt;
use super::*;

/// Axial coordinates, i.e. cube coordinates with only `q` and `r`
/// stored and `s` computed on demand.
///
/// Guide: [Axial Coordinates]
///
/// [Axial Coordinates]: https://www.redblobgames.com/grids/hexagons/#coordinates-axial
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Axial {
    pub q: i32,
    pub r: i32
}

impl Axial {
    /// Create axial coordinates from the three logical cube components,
    /// failing with [`Error::InvalidCoordinate`] unless `q + r + s = 0`.
    /// Only `q` and `r` are retained.
    ///
    /// [`Error::InvalidCoordinate`]: ../../error/enum.Error.html
    pub fn new(q: i32, r: i32, s: i32) -> Result<Axial> {
        Cube::new(q, r, s).map(Axial::from)
    }

    pub fn s(&self) -> i32 {
        -self.q - self.r
    }
}

impl Coords for Axial {}

impl fmt::Display for Axial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.q, self.r)
    }
}

impl From<Cube> for Axial {
    fn from(c: Cube) -> Axial {
        Axial { q: c.q(), r: c.r() }
    }
}

impl From<Axial> for Cube {
    fn from(a: Axial) -> Cube {
        Cube::new_qr(a.q, a.r)
    }
}
