/// Colors for the diagnostic drawing of a placement run.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: String,
    pub background_opacity: f32,
    pub bounds_stroke: String,
    pub obstacle_fill: String,
    pub space_fill: String,
    pub chosen_fill: String,
    pub fill_opacity: f32,
    pub stroke_width: f32,
}

impl Theme {
    /// Translucent green obstacles, blue free spaces and a red target over a
    /// transparent background.
    pub fn debug() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            background_opacity: 0.0,
            bounds_stroke: "#000000".to_string(),
            obstacle_fill: "#00FF00".to_string(),
            space_fill: "#0000FF".to_string(),
            chosen_fill: "#FF0000".to_string(),
            fill_opacity: 0.5,
            stroke_width: 0.0,
        }
    }

    pub fn plain() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            background_opacity: 1.0,
            bounds_stroke: "#7A8AA6".to_string(),
            obstacle_fill: "#C7D2E5".to_string(),
            space_fill: "#EEF2F8".to_string(),
            chosen_fill: "#E8590C".to_string(),
            fill_opacity: 0.6,
            stroke_width: 1.0,
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "debug" | "default" => Some(Self::debug()),
            "plain" => Some(Self::plain()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::debug()
    }
}
