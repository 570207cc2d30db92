use anyhow::Context;
use clap::Parser;
use hexlayout::grid::{ Grid, Layout, Orientation, Point };
use hexlayout_svg::SvgSink;
use log::{ info, warn, LevelFilter };
use nalgebra::Vector2;
use simple_logger::SimpleLogger;
use strum::{ Display, EnumString };

use std::io;
use std::path::PathBuf;
use std::process;

/// Generate a hexagonal grid and render it as SVG.
#[derive(Debug, Parser)]
#[command(name = "hexgrid", version)]
struct Options {
    /// The radius of the grid, in hexagons.
    #[arg(short, long, default_value_t = 3)]
    radius: u16,

    /// The shape of the grid: hexagon or triangle.
    #[arg(short, long, default_value = "hexagon")]
    shape: Shape,

    /// The orientation of the hexagons: pointy-top, flat-top,
    /// triangle-up, triangle-down, triangle-left or triangle-right.
    /// Triangle grids are empty unless a triangle orientation is given.
    #[arg(long, default_value = "pointy-top")]
    orientation: Orientation,

    /// The horizontal size of a hexagon, in pixels.
    #[arg(long, default_value_t = 20.0)]
    size_x: f64,

    /// The vertical size of a hexagon, in pixels.
    #[arg(long, default_value_t = 20.0)]
    size_y: f64,

    /// The horizontal pixel position of the origin hexagon.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    origin_x: f64,

    /// The vertical pixel position of the origin hexagon.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    origin_y: f64,

    /// Label every hexagon with its cube coordinates.
    #[arg(long)]
    labels: bool,

    /// Write the SVG to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// The logging level. See
    /// https://docs.rs/log/latest/log/enum.LevelFilter.html for options
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum Shape {
    Hexagon,
    Triangle,
}

fn run(opt: Options) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let grid = match opt.shape {
        Shape::Hexagon => Grid::hexagon(opt.radius),
        Shape::Triangle => {
            if !opt.orientation.is_triangle() {
                warn!("{} is not a triangle orientation, the grid is empty", opt.orientation);
            }
            Grid::triangle(opt.radius, opt.orientation)
        }
    };
    info!("Generated {} grid of radius {} with {} tiles", opt.shape, opt.radius, grid.len());

    let layout = Layout::new(
        opt.orientation,
        Vector2::new(opt.size_x, opt.size_y),
        Point::new(opt.origin_x, opt.origin_y),
    );
    let document = hexlayout_svg::render_with(&grid, &layout, SvgSink::new().with_labels(opt.labels));

    match opt.output {
        Some(path) => {
            svg::save(&path, &document)
                .with_context(|| format!("error writing SVG to {:?}", &path))?;
            info!("Wrote {:?}", &path);
        }
        None => {
            svg::write(io::stdout(), &document).context("error writing SVG to stdout")?;
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Options::parse()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command() {
        Options::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let opt = Options::try_parse_from(["hexgrid"]).unwrap();
        assert_eq!(opt.radius, 3);
        assert!(matches!(opt.shape, Shape::Hexagon));
        assert_eq!(opt.orientation, Orientation::PointyTop);
        assert_eq!((opt.size_x, opt.size_y), (20.0, 20.0));
        assert_eq!((opt.origin_x, opt.origin_y), (0.0, 0.0));
        assert!(!opt.labels);
        assert!(opt.output.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let opt = Options::try_parse_from([
            "hexgrid", "--radius", "5", "--shape", "triangle",
            "--orientation", "triangle-left", "--size-x", "12", "--size-y", "8",
            "--origin-x", "-40", "--origin-y", "30.5", "--labels",
            "--output", "grid.svg", "--log-level", "debug",
        ]).unwrap();
        assert_eq!(opt.radius, 5);
        assert!(matches!(opt.shape, Shape::Triangle));
        assert_eq!(opt.orientation, Orientation::TriangleLeft);
        assert_eq!((opt.size_x, opt.size_y), (12.0, 8.0));
        assert_eq!((opt.origin_x, opt.origin_y), (-40.0, 30.5));
        assert!(opt.labels);
        assert_eq!(opt.output, Some(PathBuf::from("grid.svg")));
        assert_eq!(opt.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Options::try_parse_from(["hexgrid", "--shape", "square"]).is_err());
        assert!(Options::try_parse_from(["hexgrid", "--size", "10"]).is_err());
    }
}
