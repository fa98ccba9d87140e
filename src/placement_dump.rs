use crate::geometry::{Coord, Rect};
use crate::placement::Placement;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct PlacementDump {
    pub bounds: RectDump,
    pub size: [Coord; 2],
    pub obstacles: Vec<RectDump>,
    pub spaces: Vec<RectDump>,
    pub chosen: Option<RectDump>,
    pub position: Option<[Coord; 2]>,
}

#[derive(Debug, Serialize)]
pub struct RectDump {
    pub x: Coord,
    pub y: Coord,
    pub width: Coord,
    pub height: Coord,
    pub valid: bool,
}

impl From<&Rect<Coord>> for RectDump {
    fn from(rect: &Rect<Coord>) -> Self {
        RectDump {
            x: rect.left(),
            y: rect.top(),
            width: rect.width(),
            height: rect.height(),
            valid: rect.is_valid(),
        }
    }
}

impl PlacementDump {
    pub fn from_placement(placement: &Placement) -> Self {
        PlacementDump {
            bounds: RectDump::from(&placement.bounds),
            size: [placement.size.x, placement.size.y],
            obstacles: placement.obstacles.iter().map(RectDump::from).collect(),
            spaces: placement.spaces.iter().map(RectDump::from).collect(),
            chosen: placement.chosen.as_ref().map(RectDump::from),
            position: placement.position().map(|p| [p.x, p.y]),
        }
    }
}

pub fn write_placement_dump(path: &Path, placement: &Placement) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = PlacementDump::from_placement(placement);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
