//! Render [hexlayout] grids as SVG documents.
//!
//! ```
//! use hexlayout::grid::{ Grid, Layout, Orientation, Point };
//! use nalgebra::Vector2;
//!
//! let grid = Grid::hexagon(2);
//! let layout = Layout::new(Orientation::PointyTop, Vector2::new(10.0, 10.0), Point::origin());
//! let document = hexlayout_svg::render(&grid, &layout);
//! assert!(document.to_string().contains("<polygon"));
//! ```

use hexlayout::grid::{ Grid, Hexagon, Layout, Point, RenderSink, Tile };
use svg::node::element::{ Group, Polygon, Text };
use svg::Document;

use std::convert::Infallible;

const FILL_EVEN: &str = "#e8e2d0";
const FILL_ODD: &str = "#c9d6c3";
const STROKE: &str = "#3b3b3b";

/// Padding around the drawn hexagons, in pixels.
const PADDING: f64 = 2.0;

/// Collects the tiles of a grid as SVG groups, one per tile, each holding
/// the outline polygon and, optionally, a coordinate label.
pub struct SvgSink {
    groups: Vec<Group>,
    labels: bool,
    min: Point,
    max: Point,
}

impl SvgSink {
    pub fn new() -> SvgSink {
        SvgSink {
            groups: Vec::new(),
            labels: false,
            min: Point::new(f64::INFINITY, f64::INFINITY),
            max: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Label every hexagon with its cube coordinates.
    pub fn with_labels(mut self, labels: bool) -> SvgSink {
        self.labels = labels;
        self
    }

    /// The number of tiles drawn so far.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Assemble the document, with a view box fitted to the drawn hexagons.
    pub fn finish(self) -> Document {
        let mut document = Document::new();
        if !self.groups.is_empty() {
            let width = self.max.x - self.min.x + 2.0 * PADDING;
            let height = self.max.y - self.min.y + 2.0 * PADDING;
            document = document.set(
                "viewBox",
                (self.min.x - PADDING, self.min.y - PADDING, width, height),
            );
        }
        for group in self.groups {
            document = document.add(group);
        }
        document
    }
}

impl Default for SvgSink {
    fn default() -> SvgSink {
        SvgSink::new()
    }
}

impl RenderSink for SvgSink {
    type Error = Infallible;

    fn draw(&mut self, tile: &Tile, hexagon: &Hexagon, index: usize)
            -> Result<(), Infallible> {
        for p in hexagon.corners() {
            self.min = Point::new(self.min.x.min(p.x), self.min.y.min(p.y));
            self.max = Point::new(self.max.x.max(p.x), self.max.y.max(p.y));
        }

        let fill = if tile.distance % 2 == 0 { FILL_EVEN } else { FILL_ODD };
        let polygon = Polygon::new()
            .set(
                "points",
                hexagon.corners().iter().map(|p| (p.x, p.y)).collect::<Vec<_>>(),
            )
            .set("fill", fill)
            .set("stroke", STROKE)
            .set("stroke-width", 1);

        let mut group = Group::new()
            .set("id", format!("hex-{}", index))
            .set("class", "hexagon")
            .set("data-key", tile.coords.to_string())
            .set("data-distance", tile.distance.to_string())
            .add(polygon);

        if self.labels {
            let center = hexagon.center();
            group = group.add(
                Text::new()
                    .set("x", center.x)
                    .set("y", center.y)
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle")
                    .set("font-size", 6)
                    .add(svg::node::Text::new(tile.coords.to_string())),
            );
        }

        self.groups.push(group);
        Ok(())
    }
}

/// Render a grid with the given layout.
pub fn render(grid: &Grid, layout: &Layout) -> Document {
    render_with(grid, layout, SvgSink::new())
}

/// Render a grid with the given layout into a configured sink.
pub fn render_with(grid: &Grid, layout: &Layout, mut sink: SvgSink) -> Document {
    grid.render(layout, &mut sink).unwrap_or_else(|e| match e {});
    log::debug!("rendered {} of {} tiles", sink.len(), grid.len());
    sink.finish()
}
