//! Geometry of regular hexagons in a 2d cartesian coordinate system,
//! i.e. the mapping between cube coordinates and pixels.
//!
//! Guide: [Layout](https://www.redblobgames.com/grids/hexagons/implementation.html#layout)

use nalgebra::{ Matrix2, Point2, Vector2 };
use strum::{ Display, EnumIter, EnumString };

use std::f64::consts::PI;

use crate::error::{ Error, Result };
use crate::grid::{ Cube, FracCube };

/// A point in pixel space.
pub type Point = Point2<f64>;

/// The linear maps between cube coordinates `(q, r)` and pixel space
/// (before scaling by size and translating by origin), together with
/// the angle of the first corner in multiples of 60 degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    pub forward: Matrix2<f64>,
    pub inverse: Matrix2<f64>,
    pub start_angle: f64,
}

lazy_static! {
    static ref POINTY_TOP: Transform = {
        let sqrt3 = f64::sqrt(3.0);
        Transform {
            forward: Matrix2::new(sqrt3, sqrt3 / 2.0, 0.0, 3.0 / 2.0),
            inverse: Matrix2::new(sqrt3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0),
            start_angle: 0.5,
        }
    };

    static ref FLAT_TOP: Transform = {
        let sqrt3 = f64::sqrt(3.0);
        Transform {
            forward: Matrix2::new(3.0 / 2.0, 0.0, sqrt3 / 2.0, sqrt3),
            inverse: Matrix2::new(2.0 / 3.0, 0.0, -1.0 / 3.0, sqrt3 / 3.0),
            start_angle: 0.0,
        }
    };
}

/// The orientation of the hexagons of a grid.
///
/// The triangle orientations lay out hexagons like their pointy-top
/// (`TriangleUp`, `TriangleDown`) or flat-top (`TriangleLeft`,
/// `TriangleRight`) counterparts and additionally select the shape
/// of a [triangular grid](../grid/shape/fn.triangle.html).
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab_case")]
pub enum Orientation {
    PointyTop,
    FlatTop,
    TriangleUp,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
}

impl Orientation {
    pub fn transform(self) -> &'static Transform {
        match self {
            Orientation::PointyTop
            | Orientation::TriangleUp
            | Orientation::TriangleDown => &POINTY_TOP,
            Orientation::FlatTop
            | Orientation::TriangleLeft
            | Orientation::TriangleRight => &FLAT_TOP,
        }
    }

    pub fn is_triangle(self) -> bool {
        !matches!(self, Orientation::PointyTop | Orientation::FlatTop)
    }
}

/// A regular hexagon placed in pixel space.
#[derive(Clone, Debug)]
pub struct Hexagon {
    pub(crate) center: Point,
    pub(crate) corners: [Point; 6],
}

impl Hexagon {
    pub fn center(&self) -> Point {
        self.center
    }

    /// The corners in increasing corner index order, such that
    /// connecting consecutive corners draws the outline.
    pub fn corners(&self) -> &[Point; 6] {
        &self.corners
    }
}

/// The parameters for mapping cube coordinates to pixels and back:
/// an orientation, the size of a hexagon (scaled independently along
/// both axes) and the pixel position of the origin hexagon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    orientation: Orientation,
    size: Vector2<f64>,
    origin: Point,
}

impl Layout {
    pub fn new(orientation: Orientation, size: Vector2<f64>, origin: Point) -> Layout {
        Layout { orientation, size, origin }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn size(&self) -> Vector2<f64> {
        self.size
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The pixel position of the center of a (possibly fractional) hexagon.
    pub fn hex_to_pixel<H: Into<FracCube>>(&self, h: H) -> Point {
        let h = h.into();
        let v = self.orientation.transform().forward * Vector2::new(h.q(), h.r());
        self.origin + v.component_mul(&self.size)
    }

    /// The fractional cube coordinates of a pixel. Use [`FracCube::round`]
    /// (or [`hex_at`]) to find the hexagon containing the pixel.
    ///
    /// [`FracCube::round`]: ../grid/struct.FracCube.html#method.round
    /// [`hex_at`]: #method.hex_at
    pub fn pixel_to_hex(&self, p: Point) -> FracCube {
        let pt = (p - self.origin).component_div(&self.size);
        let v = self.orientation.transform().inverse * pt;
        FracCube::new_qr(v.x, v.y)
    }

    /// The hexagon containing a pixel.
    pub fn hex_at(&self, p: Point) -> Cube {
        self.pixel_to_hex(p).round()
    }

    /// The offset from the center of a hexagon to the corner with the
    /// given index, failing with [`Error::InvalidCorner`] outside of `0..=5`.
    ///
    /// [`Error::InvalidCorner`]: ../error/enum.Error.html
    pub fn corner_offset(&self, corner: i32) -> Result<Vector2<f64>> {
        if (0 .. 6).contains(&corner) {
            Ok(self.offset(corner as u8))
        } else {
            Err(Error::InvalidCorner(corner))
        }
    }

    /// The corners of a hexagon in increasing corner index order.
    pub fn polygon_corners<H: Into<FracCube>>(&self, h: H) -> [Point; 6] {
        self.corners(self.hex_to_pixel(h))
    }

    pub fn hexagon<H: Into<FracCube>>(&self, h: H) -> Hexagon {
        let center = self.hex_to_pixel(h);
        Hexagon { center, corners: self.corners(center) }
    }

    fn corners(&self, center: Point) -> [Point; 6] {
        [ center + self.offset(0)
        , center + self.offset(1)
        , center + self.offset(2)
        , center + self.offset(3)
        , center + self.offset(4)
        , center + self.offset(5)
        ]
    }

    fn offset(&self, i: u8) -> Vector2<f64> {
        let start = self.orientation.transform().start_angle;
        let angle = 2.0 * PI * (start + i as f64) / 6.0;
        Vector2::new(self.size.x * angle.cos(), self.size.y * angle.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::*;
    use rand::Rng;
    use strum::IntoEnumIterator;

    const TOLERANCE: f64 = 1e-6;

    impl Arbitrary for Orientation {
        fn arbitrary<G: Gen>(g: &mut G) -> Orientation {
            let i = g.gen_range(0, 6);
            Orientation::iter().nth(i).unwrap_or(Orientation::PointyTop)
        }
    }

    fn layout(o: Orientation) -> Layout {
        Layout::new(o, Vector2::new(17.5, 9.25), Point::new(3.0, -4.0))
    }

    fn close(a: Point, b: Point) -> bool {
        (a - b).norm() < TOLERANCE
    }

    #[test]
    fn test_parse_orientation() {
        assert_eq!("pointy-top".parse::<Orientation>(), Ok(Orientation::PointyTop));
        assert_eq!("triangle-left".parse::<Orientation>(), Ok(Orientation::TriangleLeft));
        assert_eq!(Orientation::FlatTop.to_string(), "flat-top");
        assert!("sideways".parse::<Orientation>().is_err());
    }

    #[test]
    fn test_triangle_transforms() {
        assert_eq!(Orientation::TriangleUp.transform(), Orientation::PointyTop.transform());
        assert_eq!(Orientation::TriangleDown.transform(), Orientation::PointyTop.transform());
        assert_eq!(Orientation::TriangleLeft.transform(), Orientation::FlatTop.transform());
        assert_eq!(Orientation::TriangleRight.transform(), Orientation::FlatTop.transform());
    }

    #[test]
    fn test_transforms_inverse() {
        for o in Orientation::iter() {
            let t = o.transform();
            let id = t.forward * t.inverse;
            assert!((id - Matrix2::identity()).norm() < TOLERANCE);
        }
    }

    #[test]
    fn test_hex_to_pixel() {
        let l = Layout::new(Orientation::PointyTop, Vector2::new(10.0, 10.0), Point::origin());
        assert!(close(l.hex_to_pixel(Cube::origin()), Point::origin()));
        assert!(close(l.hex_to_pixel(Cube::new_qr(1, 0)), Point::new(10.0 * f64::sqrt(3.0), 0.0)));
        assert!(close(l.hex_to_pixel(Cube::new_qr(0, 1)), Point::new(5.0 * f64::sqrt(3.0), 15.0)));

        let l = Layout::new(Orientation::FlatTop, Vector2::new(10.0, 20.0), Point::new(100.0, 50.0));
        assert!(close(l.hex_to_pixel(Cube::new_qr(1, 0)),
                      Point::new(115.0, 50.0 + 10.0 * f64::sqrt(3.0))));
    }

    #[test]
    fn test_pixel_to_hex_fractional() {
        let l = Layout::new(Orientation::PointyTop, Vector2::new(10.0, 10.0), Point::origin());
        let p = l.hex_to_pixel(Cube::new_qr(1, 0));
        let mid = Point::new(p.x / 2.0, p.y / 2.0);
        let f = l.pixel_to_hex(mid);
        assert!((f.q() - 0.5).abs() < TOLERANCE);
        assert!(f.r().abs() < TOLERANCE);
        assert!((f.q() + f.r() + f.s()).abs() < TOLERANCE);
    }

    #[test]
    fn test_corner_offset() {
        let l = Layout::new(Orientation::PointyTop, Vector2::new(10.0, 10.0), Point::origin());
        let o = l.corner_offset(0).unwrap();
        assert!((o.x - 5.0 * f64::sqrt(3.0)).abs() < TOLERANCE);
        assert!((o.y - 5.0).abs() < TOLERANCE);

        let l = Layout::new(Orientation::FlatTop, Vector2::new(10.0, 10.0), Point::origin());
        let o = l.corner_offset(0).unwrap();
        assert!((o.x - 10.0).abs() < TOLERANCE && o.y.abs() < TOLERANCE);
        let o = l.corner_offset(3).unwrap();
        assert!((o.x + 10.0).abs() < TOLERANCE && o.y.abs() < TOLERANCE);
    }

    #[test]
    fn test_corner_offset_invalid() {
        let l = layout(Orientation::PointyTop);
        assert_eq!(l.corner_offset(7), Err(Error::InvalidCorner(7)));
        assert_eq!(l.corner_offset(6), Err(Error::InvalidCorner(6)));
        assert_eq!(l.corner_offset(-1), Err(Error::InvalidCorner(-1)));
    }

    #[test]
    fn prop_pixel_roundtrip() {
        fn prop(c: Cube, o: Orientation) -> bool {
            let l = layout(o);
            l.pixel_to_hex(l.hex_to_pixel(c)).round() == c
                && l.hex_at(l.hex_to_pixel(c)) == c
        }
        quickcheck(prop as fn(Cube, Orientation) -> bool);
    }

    #[test]
    fn prop_corner_inside() {
        fn prop(c: Cube, o: Orientation) -> bool {
            // A point slightly inside a corner belongs to the hexagon.
            let l = layout(o);
            let center = l.hex_to_pixel(c);
            l.polygon_corners(c).iter().all(|p| {
                l.hex_at(center + (p - center) * 0.9) == c
            })
        }
        quickcheck(prop as fn(Cube, Orientation) -> bool);
    }

    #[test]
    fn prop_corners_centroid() {
        fn prop(c: Cube, o: Orientation) -> bool {
            let l = layout(o);
            let h = l.hexagon(c);
            let sum = h.corners().iter().fold(Vector2::zeros(), |acc, p| acc + p.coords);
            close(Point::from(sum / 6.0), h.center())
                && h.corners() == &l.polygon_corners(c)
        }
        quickcheck(prop as fn(Cube, Orientation) -> bool);
    }

    #[test]
    fn prop_corners_order() {
        fn prop(o: Orientation) -> bool {
            let mut g = rand::thread_rng();
            let c = Cube::new_qr(g.gen_range(-50, 50), g.gen_range(-50, 50));
            let l = layout(o);
            let corners = l.polygon_corners(c);
            let center = l.hex_to_pixel(c);
            (0 .. 6).all(|i| close(corners[i], center + l.corner_offset(i as i32).unwrap()))
        }
        quickcheck(prop as fn(Orientation) -> bool);
    }
}
