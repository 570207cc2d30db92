//! Directions in the cube coordinate system.
//!
//! The six directions are indexed `0..=5`, starting at `(1, 0, -1)` and
//! advancing by one 60 degree step per index. In pixel space (y pointing
//! down) the neighbour in direction `i` lies at an angle of `-60° * i` under
//! a pointy-top layout and `30° - 60° * i` under a flat-top layout, i.e.
//! directions turn opposite to the corner indices of
//! [`Layout::polygon_corners`], whose angles grow as `60° * (start + i)`.
//!
//! [`Layout::polygon_corners`]: ../../geo/struct.Layout.html#method.polygon_corners

use num_traits::cast::FromPrimitive;

use crate::error::{ Error, Result };
use super::Cube;

/// Vectors for the displacement to a neighbouring (adjacent) cube coordinate
/// along one of the sides of a hexagon, as `[q, r, s]`.
pub const CUBE_DIR_VECTORS: [[i32; 3]; 6] =
    [ [ 1, 0, -1], [ 1, -1, 0], [0, -1, 1]
    , [-1, 0,  1], [-1,  1, 0], [0,  1, -1]
    ];

lazy_static! {
    static ref DIRECTIONS: [Cube; 6] = {
        let mut dirs = [Cube::origin(); 6];
        for (d, [q, r, s]) in dirs.iter_mut().zip(CUBE_DIR_VECTORS.iter()) {
            *d = Cube::mk(*q, *r, *s);
        }
        dirs
    };
}

/// Directions to adjacent neighbours. The compass names describe
/// a pointy-top layout with the y-axis pointing down the screen.
#[derive(PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
#[derive(Debug, FromPrimitive)]
pub enum Direction {
    East      = 0,
    NorthEast = 1,
    NorthWest = 2,
    West      = 3,
    SouthWest = 4,
    SouthEast = 5,
}

impl Direction {
    /// Look up a direction by its index, failing with
    /// [`Error::InvalidDirection`] outside of `0..=5`.
    ///
    /// [`Error::InvalidDirection`]: ../../error/enum.Error.html
    pub fn from_index(i: i32) -> Result<Direction> {
        Direction::from_i32(i).ok_or(Error::InvalidDirection(i))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// The unit hexagon for this direction.
    pub fn vector(self) -> Cube {
        DIRECTIONS[self.index()]
    }

    /// The direction rotated by 180 degrees.
    pub fn opposite(self) -> Direction {
        Self::nth((self.index() + 3) % 6)
    }

    /// All directions in index order.
    pub fn all() -> impl DoubleEndedIterator<Item=Direction> + ExactSizeIterator + Clone {
        (0 .. 6).map(Self::nth)
    }

    fn nth(i: usize) -> Direction {
        match i {
            0 => Direction::East,
            1 => Direction::NorthEast,
            2 => Direction::NorthWest,
            3 => Direction::West,
            4 => Direction::SouthWest,
            _ => Direction::SouthEast,
        }
    }
}

/// The unit hexagon for the direction with the given index.
pub fn direction(i: i32) -> Result<Cube> {
    Direction::from_index(i).map(Direction::vector)
}
