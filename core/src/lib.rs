//! Hexagonal grid coordinates and the geometry needed to place,
//! measure and render hexagons on a pixel canvas.
//!
//! Guide: [Hexagonal Grids](https://www.redblobgames.com/grids/hexagons/)

extern crate either;
extern crate indexmap;
#[macro_use]
extern crate lazy_static;
extern crate nalgebra;
extern crate num_traits;
#[macro_use]
extern crate num_derive;
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
extern crate rand;

pub mod error;
pub mod geo;
pub mod grid;

pub use crate::error::{ Error, Result };
