//! Hexagonal grids with overlaid coordinate systems.
pub mod axial;
pub mod cube;
pub mod shape;

pub use self::axial::*;
pub use self::cube::*;
pub use self::cube::dir::*;
pub use crate::geo::*;

use indexmap::IndexMap;

use crate::error::Result;

use std::fmt::{ Debug, Display };
use std::hash::Hash;

/// Coordinates on a grid. A grid coordinate system must support
/// conversion to and from cube coordinates.
pub trait Coords:
    From<Cube> + Into<Cube> + Eq + Copy + Debug + Display + Hash {
}

/// Iterate over the neighbouring (adjacent) coordinates in direction order.
pub fn neighbours<C: Coords, D: Coords>(c: C) -> impl Iterator<Item=D> {
    let center: Cube = c.into();
    Direction::all().map(move |d| D::from(center + d.vector()))
}

/// The adjacent coordinates in the direction with the given index.
pub fn neighbour<C: Coords>(c: C, dir: i32) -> Result<C> {
    let c: Cube = c.into();
    c.neighbour(dir).map(C::from)
}

/// The distance between two coordinates.
pub fn distance<C: Coords>(from: C, to: C) -> u32 {
    let (a, b): (Cube, Cube) = (from.into(), to.into());
    a.distance(b)
}

/// A hexagon of a generated grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Tile {
    pub coords: Cube,
    /// The distance to the origin.
    pub distance: u32,
}

/// Receives the hexagons of a grid for drawing, e.g. as vector graphics.
pub trait RenderSink {
    type Error;

    /// Draw a tile, given the corners of its hexagon and its index in
    /// the iteration order of the grid.
    fn draw(&mut self, tile: &Tile, hexagon: &Hexagon, index: usize)
        -> std::result::Result<(), Self::Error>;
}

/// A grid is a collection of tiles, keyed by their cube coordinates
/// and iterated in the order in which they were generated.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    tiles: IndexMap<Cube, Tile>,
}

impl Grid {
    /// Collect the coordinates of a shape into a grid. Duplicate
    /// coordinates are kept at their first position.
    pub fn from_shape<I: Iterator<Item=Cube>>(shape: I) -> Grid {
        let (lower, _) = shape.size_hint();
        let mut grid = Grid { tiles: IndexMap::with_capacity(lower) };
        grid.extend(shape);
        grid
    }

    /// A hexagonal grid of the given radius centered at the origin.
    pub fn hexagon(radius: u16) -> Grid {
        let shape = shape::hexagon(radius);
        let mut grid = Grid { tiles: IndexMap::with_capacity(shape.total) };
        grid.extend(shape);
        grid
    }

    /// A triangular grid of the given radius, shaped according to the
    /// given triangle orientation. Orientations other than the four
    /// triangle orientations yield an empty grid.
    pub fn triangle(radius: u16, orientation: Orientation) -> Grid {
        let shape = shape::triangle(radius, orientation);
        let mut grid = Grid { tiles: IndexMap::with_capacity(shape.total) };
        grid.extend(shape);
        grid
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get<C: Coords>(&self, c: C) -> Option<&Tile> {
        let c: Cube = c.into();
        self.tiles.get(&c)
    }

    pub fn contains<C: Coords>(&self, c: C) -> bool {
        let c: Cube = c.into();
        self.tiles.contains_key(&c)
    }

    /// Iterate over the tiles in generation order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item=&Tile> + '_ {
        self.tiles.values()
    }

    /// The tile containing the given pixel, if any.
    pub fn from_pixel(&self, layout: &Layout, p: Point) -> Option<&Tile> {
        self.tiles.get(&layout.hex_at(p))
    }

    /// The corners of every tile, aligned with the iteration order
    /// of the grid.
    pub fn corners(&self, layout: &Layout) -> Vec<[Point; 6]> {
        self.iter().map(|t| layout.polygon_corners(t.coords)).collect()
    }

    /// Draw every tile into the given sink in iteration order,
    /// stopping at the first error.
    pub fn render<S: RenderSink>(&self, layout: &Layout, sink: &mut S)
            -> std::result::Result<(), S::Error> {
        for (i, tile) in self.iter().enumerate() {
            sink.draw(tile, &layout.hexagon(tile.coords), i)?;
        }
        Ok(())
    }
}

impl Extend<Cube> for Grid {
    fn extend<I: IntoIterator<Item=Cube>>(&mut self, iter: I) {
        for coords in iter {
            self.tiles.entry(coords).or_insert(Tile { coords, distance: coords.length() });
        }
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Tile;
    type IntoIter = indexmap::map::Values<'a, Cube, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.values()
    }
}
