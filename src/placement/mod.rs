//! Free-space search: split the screen around every obstacle, then pick the
//! tightest region that holds the requested size.

mod partition;
mod select;

pub use partition::{partition, partition_space};
pub use select::choose_space;

use crate::geometry::{Coord, Point, Rect};

/// Outcome of one placement run, with the intermediate free spaces kept
/// around for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub bounds: Rect<Coord>,
    pub size: Point<Coord>,
    pub obstacles: Vec<Rect<Coord>>,
    pub spaces: Vec<Rect<Coord>>,
    pub chosen: Option<Rect<Coord>>,
}

impl Placement {
    /// Top-left corner of the chosen free space.
    pub fn position(&self) -> Option<Point<Coord>> {
        self.chosen.map(|space| space.top_left)
    }

    /// The requested region anchored at `position()`.
    pub fn target(&self) -> Option<Rect<Coord>> {
        self.position()
            .map(|position| Rect::new(position, position.add(self.size)))
    }
}

pub fn place(bounds: Rect<Coord>, size: Point<Coord>, obstacles: &[Rect<Coord>]) -> Placement {
    if !bounds.is_valid() {
        log::warn!("bounds {} have no area", bounds);
    }
    for obstacle in obstacles.iter().filter(|obstacle| !obstacle.is_valid()) {
        log::warn!("obstacle {} has no area", obstacle);
    }

    let spaces = partition_space(&bounds, obstacles);
    let chosen = choose_space(&spaces, size);
    log::info!(
        "{} obstacles, {} free spaces, chosen {}",
        obstacles.len(),
        spaces.len(),
        chosen.map_or_else(|| "none".to_string(), |space| space.to_string())
    );

    Placement {
        bounds,
        size,
        obstacles: obstacles.to_vec(),
        spaces,
        chosen,
    }
}

/// Top-left corner where a region of `size` fits inside `bounds` without
/// overlapping any obstacle, or `None` when there is no such place.
pub fn find_space(
    bounds: Rect<Coord>,
    size: Point<Coord>,
    obstacles: &[Rect<Coord>],
) -> Option<Point<Coord>> {
    place(bounds, size, obstacles).position()
}
