use glam::DVec2;

use crate::api::config::ViewConfig;
use crate::api::types::ShapeId;
use crate::renderer::traits::DrawSurface;

/// Show `name` as the system label, creating the label on first use and
/// rewriting it afterwards. Position, tag and font come from `config`.
pub fn set_system_label<S: DrawSurface + ?Sized>(surface: &mut S, config: &ViewConfig, name: &str) -> ShapeId {
    let [x, y] = config.header_pos;
    let id = surface.upsert_text(&config.header_tag, DVec2::new(x, y), name, &config.header_font);
    log::info!("System label set to {:?}", name);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::LabelFont;
    use crate::renderer::canvas::{Canvas, ShapeKind};

    #[test]
    fn label_is_created_once() {
        let mut canvas = Canvas::new(600, 600);
        let config = ViewConfig::default();

        let first = set_system_label(&mut canvas, &config, "Solar System");
        let second = set_system_label(&mut canvas, &config, "Double Star");
        assert_eq!(first, second);
        assert_eq!(canvas.len(), 1);

        let label = canvas.find_by_tag("header").unwrap();
        assert_eq!(label.coords.min, DVec2::new(30.0, 80.0));
        match &label.kind {
            ShapeKind::Text { text, font, .. } => {
                assert_eq!(text, "Double Star");
                assert_eq!(font, &LabelFont::new("Arial", 16));
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn label_follows_config() {
        let mut canvas = Canvas::new(600, 600);
        let config = ViewConfig {
            header_tag: "title".to_string(),
            header_pos: [10.0, 20.0],
            header_font: LabelFont::new("Courier", 10),
            ..Default::default()
        };
        set_system_label(&mut canvas, &config, "Binary");
        assert!(canvas.find_by_tag("header").is_none());
        let label = canvas.find_by_tag("title").unwrap();
        assert_eq!(label.coords.min, DVec2::new(10.0, 20.0));
    }
}
