#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod parser;
pub mod placement;
pub mod placement_dump;
pub mod render;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, RenderConfig, load_config};
pub use error::{GeometryError, ParseError};
pub use geometry::{Coord, Point, Rect};
pub use parser::{parse_obstacles, parse_size};
pub use placement::{Placement, choose_space, find_space, partition, partition_space, place};
pub use render::render_svg;
pub use theme::Theme;
