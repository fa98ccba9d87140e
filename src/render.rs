use crate::config::RenderConfig;
use crate::geometry::{Coord, Rect};
use crate::placement::Placement;
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

/// Draw the screen, its obstacles, the free spaces found between them and
/// the region picked for the request.
pub fn render_svg(placement: &Placement, theme: &Theme, config: &RenderConfig) -> String {
    let bounds = &placement.bounds;
    let view_w = bounds.width().max(1);
    let view_h = bounds.height().max(1);
    let width = view_w as f32 * config.scale;
    let height = view_h as f32 * config.scale;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.0}\" height=\"{height:.0}\" viewBox=\"{} {} {view_w} {view_h}\">",
        bounds.left(),
        bounds.top(),
    ));

    svg.push_str(&format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{view_w}\" height=\"{view_h}\" fill=\"{}\" fill-opacity=\"{}\"/>",
        bounds.left(),
        bounds.top(),
        escape_xml(&theme.background),
        theme.background_opacity
    ));

    svg.push_str("<g class=\"obstacles\">");
    for obstacle in placement.obstacles.iter().filter(|r| r.is_valid()) {
        svg.push_str(&rect_svg(obstacle, &theme.obstacle_fill, theme));
    }
    svg.push_str("</g>");

    if config.show_spaces {
        svg.push_str("<g class=\"spaces\">");
        for space in &placement.spaces {
            svg.push_str(&rect_svg(space, &theme.space_fill, theme));
        }
        svg.push_str("</g>");
    }

    if let Some(target) = placement.target() {
        svg.push_str(&rect_svg(&target, &theme.chosen_fill, theme));
    }

    if theme.stroke_width > 0.0 {
        svg.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
            bounds.left(),
            bounds.top(),
            bounds.width(),
            bounds.height(),
            escape_xml(&theme.bounds_stroke),
            theme.stroke_width
        ));
    }

    svg.push_str("</svg>");
    svg
}

fn rect_svg(rect: &Rect<Coord>, fill: &str, theme: &Theme) -> String {
    format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" fill-opacity=\"{}\"/>",
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
        escape_xml(fill),
        theme.fill_opacity
    )
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path) -> Result<()> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::placement::place;

    fn sample() -> Placement {
        place(
            Rect::from_origin_size(0, 0, 100, 80),
            Point::new(40, 40),
            &[Rect::from_origin_size(10, 10, 20, 20)],
        )
    }

    #[test]
    fn render_svg_basic() {
        let svg = render_svg(&sample(), &Theme::debug(), &RenderConfig::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("viewBox=\"0 0 100 80\""));
        assert!(svg.contains("fill=\"#00FF00\""));
        assert!(svg.contains("<rect x=\"0\" y=\"30\" width=\"40\" height=\"40\" fill=\"#FF0000\""));
    }

    #[test]
    fn hides_spaces_and_scales_on_request() {
        let config = RenderConfig {
            scale: 2.0,
            show_spaces: false,
        };
        let svg = render_svg(&sample(), &Theme::plain(), &config);
        assert!(svg.contains("width=\"200\" height=\"160\""));
        assert!(!svg.contains("class=\"spaces\""));
        assert!(svg.contains("stroke=\"#7A8AA6\""));
    }

    #[test]
    fn escapes_theme_colors() {
        let mut theme = Theme::debug();
        theme.obstacle_fill = "\"><script>".to_string();
        let svg = render_svg(&sample(), &theme, &RenderConfig::default());
        assert!(!svg.contains("<script>"));
    }
}
