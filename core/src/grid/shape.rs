//! Shapes of grids, i.e. enumerations of the cube coordinates
//! that make up a region.

use either::Either;

use super::*;

use std::cmp::{ min, max };
use std::iter;

/// A finite, restartable enumeration of the cube coordinates of a shape,
/// with the total number of coordinates known upfront.
#[derive(Clone)]
pub struct ShapeIter<I: Iterator<Item=Cube> + Clone> {
    pub iter: I,
    pub total: usize,
}

impl<I: Iterator<Item=Cube> + Clone> Iterator for ShapeIter<I> {
    type Item = Cube;

    fn next(&mut self) -> Option<Cube> {
        self.iter.next()
    }
}

/// A hexagon of the given radius centered at the origin, i.e. all
/// cube coordinates with a length of at most `radius`.
///
/// Coordinates are enumerated by ascending `q`, then ascending `r`.
pub fn hexagon(radius: u16) -> ShapeIter<impl Iterator<Item=Cube> + Clone> {
    let n = radius as i32;
    let iter = (-n ..= n).flat_map(move |q| {
        let r_start = max(-n, -q - n);
        let r_end   = min( n, -q + n);
        (r_start ..= r_end).map(move |r| Cube::new_qr(q, r))
    });
    ShapeIter { iter, total: num_in_hexagon(radius) }
}

/// The number of cube coordinates in a hexagon of the given radius.
pub fn num_in_hexagon(radius: u16) -> usize {
    3 * (radius as usize) * (radius as usize + 1) + 1
}

/// A triangle of the given radius for one of the triangle orientations.
///
///   * `TriangleUp`, `TriangleDown`: `q` in `[-radius, radius]`,
///     then `r` in `[0, radius - q]`.
///   * `TriangleLeft`, `TriangleRight`: `r` in `[-radius, radius]`,
///     then `q` in `[0, radius - r]`.
///
/// Any other orientation yields an empty shape.
pub fn triangle(radius: u16, orientation: Orientation)
        -> ShapeIter<impl Iterator<Item=Cube> + Clone> {
    let n = radius as i32;
    let iter = match orientation {
        Orientation::TriangleUp | Orientation::TriangleDown =>
            Either::Left((-n ..= n).flat_map(move |q| {
                (0 ..= n - q).map(move |r| Cube::new_qr(q, r))
            })),
        Orientation::TriangleLeft | Orientation::TriangleRight =>
            Either::Right(Either::Left((-n ..= n).flat_map(move |r| {
                (0 ..= n - r).map(move |q| Cube::new_qr(q, r))
            }))),
        Orientation::PointyTop | Orientation::FlatTop =>
            Either::Right(Either::Right(iter::empty())),
    };
    let total = if orientation.is_triangle() { num_in_triangle(radius) } else { 0 };
    ShapeIter { iter, total }
}

/// The number of cube coordinates in a triangle of the given radius.
pub fn num_in_triangle(radius: u16) -> usize {
    (2 * radius as usize + 1) * (radius as usize + 1)
}
