//! A cube coordinate system for hexagonal grids.
pub mod dir;

use nalgebra::geometry::Point3;

use std::fmt;
use std::ops::{ Add, Sub, Neg, Mul };

use crate::error::{ Error, Result };
use super::Coords;
use self::dir::*;

/// The tolerance for the sum of fractional cube coordinates.
pub const EPSILON: f64 = 1e-9;

/// Cube coordinates, i.e. points in 3d space, satisfying `q + r + s = 0`.
///
/// Cube coordinates are points on a diagonal plane that "cuts through"
/// a cube grid (a cube made of many smaller cubes). The cubes intersecting
/// the plane project regular hexagons onto the plane, allowing to see the
/// plane as a hexagonal grid whereby the coordinates of each hexagon can be
/// identified with the coordinates of the cube it is projected from.
/// This yields a coordinate system that simplifies many algorithms and
/// thus serves as the canonical coordinate system for any grid
/// (see [`Coords`]).
///
/// Guide: [Cube coordinates]
///
/// Any triple of `i32` summing to zero is a valid coordinate, and
/// [`length`](#method.length) and [`distance`](#method.distance) are total
/// over all of them. The arithmetic operators behave like `i32` arithmetic
/// and overflow (panicking in debug builds) when a component leaves the
/// range of `i32`; use [`checked_add`](#method.checked_add) and
/// [`checked_sub`](#method.checked_sub) near the bounds.
///
/// [Cube coordinates]: https://www.redblobgames.com/grids/hexagons/#coordinates-cube
/// [`Coords`]: ../trait.Coords.html
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Cube {
    p: Point3<i32>,
}

impl Cube {
    pub fn origin() -> Cube {
        Self::mk(0, 0, 0)
    }

    /// Create cube coordinates from all three components, failing
    /// with [`Error::InvalidCoordinate`] unless `q + r + s = 0`.
    ///
    /// [`Error::InvalidCoordinate`]: ../../error/enum.Error.html
    pub fn new(q: i32, r: i32, s: i32) -> Result<Cube> {
        let c = Cube { p: Point3::new(q, r, s) };
        if c.is_valid() {
            Ok(c)
        } else {
            Err(Error::InvalidCoordinate { q: q as f64, r: r as f64, s: s as f64 })
        }
    }

    /// Create cube coordinates from `q` and `r`, deriving `s`.
    pub fn new_qr(q: i32, r: i32) -> Cube {
        Self::mk(q, r, -q - r)
    }

    pub fn q(&self) -> i32 { self.p.x }
    pub fn r(&self) -> i32 { self.p.y }
    pub fn s(&self) -> i32 { self.p.z }

    /// The distance to the origin.
    pub fn length(&self) -> u32 {
        half_sum_abs(self.q() as i64, self.r() as i64, self.s() as i64)
    }

    /// The distance to another cube coordinate. The difference is taken
    /// in `i64`, so this never overflows.
    pub fn distance(&self, other: Cube) -> u32 {
        half_sum_abs(
            self.q() as i64 - other.q() as i64,
            self.r() as i64 - other.r() as i64,
            self.s() as i64 - other.s() as i64)
    }

    /// Component-wise addition, `None` on `i32` overflow.
    pub fn checked_add(&self, other: Cube) -> Option<Cube> {
        Some(Cube { p: Point3::new(
            self.q().checked_add(other.q())?,
            self.r().checked_add(other.r())?,
            self.s().checked_add(other.s())?) })
    }

    /// Component-wise subtraction, `None` on `i32` overflow.
    pub fn checked_sub(&self, other: Cube) -> Option<Cube> {
        Some(Cube { p: Point3::new(
            self.q().checked_sub(other.q())?,
            self.r().checked_sub(other.r())?,
            self.s().checked_sub(other.s())?) })
    }

    /// The adjacent cube coordinate in the direction with the given index.
    pub fn neighbour(&self, dir: i32) -> Result<Cube> {
        direction(dir).map(|v| *self + v)
    }

    /// Iterate over the neighbouring (adjacent) cube coordinates
    /// in direction order.
    pub fn neighbours(&self) -> impl Iterator<Item=Cube> + '_ {
        Direction::all().map(move |d| *self + d.vector())
    }

    /// Scale by a real factor. The result is in general not on the grid.
    pub fn scale(&self, k: f64) -> FracCube {
        FracCube::from(*self) * k
    }

    fn mk(q: i32, r: i32, s: i32) -> Cube {
        let c = Cube { p: Point3::new(q, r, s) };
        debug_assert!(c.is_valid());
        c
    }

    /// Validity check for the cube coordinates, i.e. that they
    /// represent a point in the plane defined by `q + r + s = 0`.
    fn is_valid(&self) -> bool {
        self.q() as i64 + self.r() as i64 + self.s() as i64 == 0
    }
}

/// Half the sum of the absolute components of a point in the plane
/// `q + r + s = 0`. For such a point this is the largest absolute
/// component, which for differences of two `i32` cubes fits a `u32`.
fn half_sum_abs(q: i64, r: i64, s: i64) -> u32 {
    let d = (q.unsigned_abs() + r.unsigned_abs() + s.unsigned_abs()) / 2;
    d.min(u32::MAX as u64) as u32
}

impl Coords for Cube {}

/// The canonical key of a hexagon, `q,r,s`.
impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.q(), self.r(), self.s())
    }
}

impl Add<Cube> for Cube {
    type Output = Cube;

    fn add(self, other: Cube) -> Cube {
        Cube { p: self.p + other.p.coords }
    }
}

impl Sub<Cube> for Cube {
    type Output = Cube;

    fn sub(self, other: Cube) -> Cube {
        Cube { p: self.p - other.p.coords }
    }
}

impl Neg for Cube {
    type Output = Cube;

    fn neg(self) -> Cube {
        Cube { p: Point3::from(-self.p.coords) }
    }
}

impl Mul<i32> for Cube {
    type Output = Cube;

    fn mul(self, k: i32) -> Cube {
        Cube { p: self.p * k }
    }
}

/// Fractional cube coordinates, e.g. the result of mapping a pixel
/// back onto the grid. These satisfy `q + r + s = 0` only up to
/// [`EPSILON`] and must be [rounded](#method.round) to obtain the
/// hexagon that contains them.
///
/// [`EPSILON`]: constant.EPSILON.html
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct FracCube {
    p: Point3<f64>,
}

impl FracCube {
    pub fn new(q: f64, r: f64, s: f64) -> Result<FracCube> {
        if (q + r + s).abs() <= EPSILON {
            Ok(FracCube { p: Point3::new(q, r, s) })
        } else {
            Err(Error::InvalidCoordinate { q, r, s })
        }
    }

    pub fn new_qr(q: f64, r: f64) -> FracCube {
        FracCube { p: Point3::new(q, r, -q - r) }
    }

    pub fn q(&self) -> f64 { self.p.x }
    pub fn r(&self) -> f64 { self.p.y }
    pub fn s(&self) -> f64 { self.p.z }

    /// The distance to the origin, rounded down.
    pub fn length(&self) -> f64 {
        ((self.q().abs() + self.r().abs() + self.s().abs()) / 2.).floor()
    }

    /// Linear interpolation towards `other`.
    pub fn lerp(&self, other: FracCube, t: f64) -> FracCube {
        FracCube { p: self.p + (other.p - self.p) * t }
    }

    /// Round to the nearest cube coordinate.
    ///
    /// Each component is rounded on its own (ties towards positive
    /// infinity), after which the component with the largest rounding
    /// error is recomputed from the other two. The `q` component only
    /// wins with a strictly larger error than both others, `r` only
    /// with a strictly larger error than `s`.
    pub fn round(&self) -> Cube {
        let (q, r, s) = (self.q(), self.r(), self.s());
        let (rq, rr, rs) = (round_half_up(q), round_half_up(r), round_half_up(s));
        let (dq, dr, ds) = ((rq - q).abs(), (rr - r).abs(), (rs - s).abs());
        if dq > dr && dq > ds {
            Cube::mk(-(rr + rs) as i32, rr as i32, rs as i32)
        }
        else if dr > ds {
            Cube::mk(rq as i32, -(rq + rs) as i32, rs as i32)
        }
        else {
            Cube::mk(rq as i32, rr as i32, -(rq + rr) as i32)
        }
    }
}

fn round_half_up(x: f64) -> f64 {
    if (x - x.trunc()).abs() == 0.5 { x.ceil() } else { x.round() }
}

impl From<Cube> for FracCube {
    fn from(c: Cube) -> FracCube {
        FracCube::new_qr(c.q() as f64, c.r() as f64)
    }
}

impl Add<FracCube> for FracCube {
    type Output = FracCube;

    fn add(self, other: FracCube) -> FracCube {
        FracCube { p: self.p + other.p.coords }
    }
}

impl Sub<FracCube> for FracCube {
    type Output = FracCube;

    fn sub(self, other: FracCube) -> FracCube {
        FracCube { p: self.p - other.p.coords }
    }
}

impl Mul<f64> for FracCube {
    type Output = FracCube;

    fn mul(self, k: f64) -> FracCube {
        FracCube { p: self.p * k }
    }
}
