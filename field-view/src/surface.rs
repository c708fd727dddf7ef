use field_core::{surface::Surface, types::Rgba};
use glam::Vec2;

/// [`Surface`] over an egui painter clipped to a panel rectangle.
///
/// Surface coordinates start at the rectangle's top-left corner. egui
/// rebuilds its shape list every frame, so `clear` only paints the
/// background.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    background: egui::Color32,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect, background: egui::Color32) -> Self {
        Self {
            painter,
            rect,
            background,
        }
    }

    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        self.rect.min + egui::vec2(p.x, p.y)
    }
}

/// Converts a surface colour into egui's unmultiplied form.
pub fn color32(c: Rgba) -> egui::Color32 {
    let a = (c.alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(c.rgb.0, c.rgb.1, c.rgb.2, a)
}

/// Maps a screen position into the surface space of `rect`.
pub fn to_surface(p: egui::Pos2, rect: egui::Rect) -> Vec2 {
    let local = p - rect.min;
    Vec2::new(local.x, local.y)
}

impl Surface for PainterSurface<'_> {
    fn size(&self) -> Option<Vec2> {
        Some(Vec2::new(self.rect.width(), self.rect.height()))
    }

    fn clear(&mut self) {
        self.painter
            .rect_filled(self.rect, egui::CornerRadius::ZERO, self.background);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.painter
            .circle_filled(self.to_screen(center), radius, color32(color));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(width, color32(color)),
        );
    }
}
