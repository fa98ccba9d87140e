use crate::config::{Config, load_config};
use crate::geometry::{Coord, Point, Rect};
use crate::parser::parse_obstacles;
use crate::placement::{Placement, place};
use crate::placement_dump::write_placement_dump;
use crate::render::{render_svg, write_output_svg};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "freespace",
    version,
    about = "Find where a window of a given size fits between the windows already on screen",
    after_help = "Obstacles are read one per line as 'x y w h'. Prints 'x y' of the chosen \
                  spot; exits with status 1 when nothing fits."
)]
pub struct Args {
    /// Screen width
    #[arg(value_parser = clap::value_parser!(i64).range(1..))]
    pub width: Coord,

    /// Screen height
    #[arg(value_parser = clap::value_parser!(i64).range(1..))]
    pub height: Coord,

    /// Requested width
    #[arg(value_parser = clap::value_parser!(i64).range(1..))]
    pub size_width: Coord,

    /// Requested height
    #[arg(value_parser = clap::value_parser!(i64).range(1..))]
    pub size_height: Coord,

    /// Obstacle file or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Config JSON file (theme and render settings for diagnostics)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Write an SVG drawing of the placement
    #[arg(long = "svg")]
    pub svg: Option<PathBuf>,

    /// Write a PNG drawing of the placement
    #[arg(long = "png")]
    pub png: Option<PathBuf>,

    /// Write the placement, including every free space, as JSON
    #[arg(long = "dump")]
    pub dump: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn bounds(&self) -> Rect<Coord> {
        Rect::from_origin_size(0, 0, self.width, self.height)
    }

    pub fn size(&self) -> Point<Coord> {
        Point::new(self.size_width, self.size_height)
    }
}

/// Parse arguments, place the window and print its position.
///
/// `Ok(None)` means the input was fine but nothing fits.
pub fn run() -> Result<Option<Point<Coord>>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_deref())?;
    let input = read_input(args.input.as_deref())?;
    let placement = execute(&args, &input)?;
    write_diagnostics(&args, &config, &placement)?;

    let position = placement.position();
    if let Some(position) = position {
        println!("{}", position.coords_string());
    }
    Ok(position)
}

pub fn execute(args: &Args, input: &str) -> Result<Placement> {
    let obstacles = parse_obstacles(input).context("reading obstacles")?;
    Ok(place(args.bounds(), args.size(), &obstacles))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()));
        }
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_diagnostics(args: &Args, config: &Config, placement: &Placement) -> Result<()> {
    if let Some(path) = args.dump.as_deref() {
        write_placement_dump(path, placement)
            .with_context(|| format!("writing dump {}", path.display()))?;
    }

    if args.svg.is_none() && args.png.is_none() {
        return Ok(());
    }

    let svg = render_svg(placement, &config.theme, &config.render);
    if let Some(path) = args.svg.as_deref() {
        write_output_svg(&svg, Some(path))
            .with_context(|| format!("writing {}", path.display()))?;
    }
    if let Some(path) = args.png.as_deref() {
        write_png(&svg, path)?;
    }
    Ok(())
}

#[cfg(feature = "png")]
fn write_png(svg: &str, path: &Path) -> Result<()> {
    crate::render::write_output_png(svg, path)
        .with_context(|| format!("writing {}", path.display()))
}

#[cfg(not(feature = "png"))]
fn write_png(_svg: &str, path: &Path) -> Result<()> {
    Err(anyhow::anyhow!(
        "cannot write {}: built without the png feature",
        path.display()
    ))
}
