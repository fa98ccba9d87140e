use freespace::{Point, Rect, Theme, parse_obstacles, place, render_svg};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FreeSpaceOptions {
    theme: Option<String>,
    with_svg: Option<bool>,
    show_spaces: Option<bool>,
}

#[derive(Debug, Serialize)]
struct FreeSpaceResult {
    position: Option<[i64; 2]>,
    spaces: usize,
    svg: Option<String>,
}

fn find_free_space_json(
    width: i64,
    height: i64,
    size_width: i64,
    size_height: i64,
    obstacles: &str,
    options: FreeSpaceOptions,
) -> Result<String, String> {
    for (name, value) in [
        ("width", width),
        ("height", height),
        ("size width", size_width),
        ("size height", size_height),
    ] {
        if value < 1 {
            return Err(format!("{name} must be positive, got {value}"));
        }
    }
    let obstacles = parse_obstacles(obstacles).map_err(|error| error.to_string())?;
    let placement = place(
        Rect::from_origin_size(0, 0, width, height),
        Point::new(size_width, size_height),
        &obstacles,
    );

    let svg = if options.with_svg.unwrap_or(false) {
        let theme = options
            .theme
            .as_deref()
            .and_then(Theme::by_name)
            .unwrap_or_default();
        let mut render = freespace::RenderConfig::default();
        if let Some(show_spaces) = options.show_spaces {
            render.show_spaces = show_spaces;
        }
        Some(render_svg(&placement, &theme, &render))
    } else {
        None
    };

    let result = FreeSpaceResult {
        position: placement.position().map(|p| [p.x, p.y]),
        spaces: placement.spaces.len(),
        svg,
    };
    serde_json::to_string(&result).map_err(|error| error.to_string())
}

/// Place a `size_width` x `size_height` window on a `width` x `height`
/// screen. `obstacles` holds one `x y w h` line per existing window.
/// Returns JSON with `position` (null when nothing fits).
#[wasm_bindgen]
pub fn find_free_space(
    width: i64,
    height: i64,
    size_width: i64,
    size_height: i64,
    obstacles: &str,
    options_json: Option<String>,
) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<FreeSpaceOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        FreeSpaceOptions::default()
    };

    find_free_space_json(width, height, size_width, size_height, obstacles, options)
        .map_err(|error| JsValue::from_str(&error))
}
