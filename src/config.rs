use crate::theme::Theme;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output pixels per screen unit.
    pub scale: f32,
    /// Draw every free space, not just the chosen one.
    pub show_spaces: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            show_spaces: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub theme: Theme,
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    background: Option<String>,
    background_opacity: Option<f32>,
    bounds_stroke: Option<String>,
    obstacle_fill: Option<String>,
    space_fill: Option<String>,
    chosen_fill: Option<String>,
    fill_opacity: Option<f32>,
    stroke_width: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    scale: Option<f32>,
    show_spaces: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    render: Option<RenderConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("parsing config {}", path.display()))
}

/// Build a config from JSON text. JSON5 (comments, trailing commas) is
/// accepted as a fallback.
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let parsed: ConfigFile = match serde_json::from_str(contents) {
        Ok(parsed) => parsed,
        Err(json_err) => json5::from_str(contents).map_err(|_| json_err)?,
    };

    let mut config = Config::default();

    if let Some(theme_name) = parsed.theme.as_deref() {
        match Theme::by_name(theme_name) {
            Some(theme) => config.theme = theme,
            None => log::warn!("unknown theme '{}', keeping default", theme_name),
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
        if let Some(v) = vars.background_opacity {
            config.theme.background_opacity = v.clamp(0.0, 1.0);
        }
        if let Some(v) = vars.bounds_stroke {
            config.theme.bounds_stroke = v;
        }
        if let Some(v) = vars.obstacle_fill {
            config.theme.obstacle_fill = v;
        }
        if let Some(v) = vars.space_fill {
            config.theme.space_fill = v;
        }
        if let Some(v) = vars.chosen_fill {
            config.theme.chosen_fill = v;
        }
        if let Some(v) = vars.fill_opacity {
            config.theme.fill_opacity = v.clamp(0.0, 1.0);
        }
        if let Some(v) = vars.stroke_width {
            config.theme.stroke_width = v.max(0.0);
        }
    }

    if let Some(render) = parsed.render {
        if let Some(v) = render.scale {
            anyhow::ensure!(v > 0.0, "render.scale must be positive, got {v}");
            config.render.scale = v;
        }
        if let Some(v) = render.show_spaces {
            config.render.show_spaces = v;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_gives_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.theme, Theme::debug());
    }

    #[test]
    fn theme_variables_override_preset() {
        let config = parse_config(
            r##"{
                "theme": "plain",
                "themeVariables": { "chosenFill": "#123456", "fillOpacity": 3.0 },
                "render": { "scale": 2.5, "showSpaces": false }
            }"##,
        )
        .unwrap();
        assert_eq!(config.theme.obstacle_fill, Theme::plain().obstacle_fill);
        assert_eq!(config.theme.chosen_fill, "#123456");
        assert_eq!(config.theme.fill_opacity, 1.0);
        assert_eq!(config.render.scale, 2.5);
        assert!(!config.render.show_spaces);
    }

    #[test]
    fn accepts_json5() {
        let config = parse_config(
            "{\n  // lenient\n  theme: 'plain',\n  render: { scale: 4, },\n}",
        )
        .unwrap();
        assert_eq!(config.theme.space_fill, Theme::plain().space_fill);
        assert_eq!(config.render.scale, 4.0);
    }

    #[test]
    fn rejects_bad_scale_and_garbage() {
        assert!(parse_config(r#"{ "render": { "scale": 0 } }"#).is_err());
        assert!(parse_config("not a config").is_err());
    }

    #[test]
    fn unknown_theme_keeps_default() {
        let config = parse_config(r#"{ "theme": "neon" }"#).unwrap();
        assert_eq!(config.theme, Theme::debug());
    }
}
