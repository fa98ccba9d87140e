use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;
use crate::geometry::{Coord, Point, Rect};

static OBSTACLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([-+]?\d+)\s+([-+]?\d+)\s+([-+]?\d+)\s+([-+]?\d+)$").unwrap());

/// Read obstacles, one `x y w h` descriptor per line.
///
/// Lines are trimmed and blank lines skipped. The first malformed line
/// aborts the whole read.
pub fn parse_obstacles(input: &str) -> Result<Vec<Rect<Coord>>, ParseError> {
    let mut obstacles = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        obstacles.push(parse_obstacle(line).ok_or_else(|| ParseError::Obstacle {
            line: idx + 1,
            content: line.to_string(),
        })?);
    }
    log::debug!("read {} obstacles", obstacles.len());
    Ok(obstacles)
}

fn parse_obstacle(line: &str) -> Option<Rect<Coord>> {
    let caps = OBSTACLE_RE.captures(line)?;
    let field = |idx: usize| caps.get(idx)?.as_str().parse::<Coord>().ok();
    let (x, y) = (field(1)?, field(2)?);
    let right = x.checked_add(field(3)?)?;
    let bottom = y.checked_add(field(4)?)?;
    Some(Rect::new(Point::new(x, y), Point::new(right, bottom)))
}

/// Read a size or position given as a point string such as `640,480`.
pub fn parse_size(input: &str) -> Result<Point<Coord>, ParseError> {
    Ok(input.parse::<Point<Coord>>()?)
}
