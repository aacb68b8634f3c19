//! [`DrawSurface`] backed by an egui [`Painter`](egui::Painter).

use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke};

use crate::surface::{DrawSurface, TextAnchor};

const BACKGROUND: Color32 = Color32::WHITE;
const FONT_SIZE: f32 = 12.0;

/// Draws into a painter allocated for the plot area. Engine coordinates are
/// relative to the top-left corner of `rect`.
pub struct EguiSurface {
    painter: egui::Painter,
    rect: Rect,
}

impl EguiSurface {
    pub fn new(painter: egui::Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, p: [f32; 2]) -> Pos2 {
        Pos2::new(self.rect.min.x + p[0], self.rect.min.y + p[1])
    }

    /// Convert a screen position back into surface coordinates.
    pub fn to_local(&self, pos: Pos2) -> [f32; 2] {
        [pos.x - self.rect.min.x, pos.y - self.rect.min.y]
    }
}

fn align(anchor: TextAnchor) -> Align2 {
    match anchor {
        TextAnchor::Left => Align2::LEFT_CENTER,
        TextAnchor::Center => Align2::CENTER_CENTER,
        TextAnchor::Right => Align2::RIGHT_CENTER,
        TextAnchor::Top => Align2::CENTER_TOP,
    }
}

impl DrawSurface for EguiSurface {
    fn size(&self) -> [f32; 2] {
        [self.rect.width(), self.rect.height()]
    }

    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, BACKGROUND);
    }

    fn fill_rect(&mut self, min: [f32; 2], max: [f32; 2], color: Color32) {
        let rect = Rect::from_min_max(self.to_screen(min), self.to_screen(max));
        self.painter.rect_filled(rect, 0.0, color);
    }

    fn line(&mut self, from: [f32; 2], to: [f32; 2], width: f32, color: Color32) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            Stroke::new(width, color),
        );
    }

    fn polyline(&mut self, points: Vec<[f32; 2]>, width: f32, color: Color32) {
        let points: Vec<Pos2> = points.into_iter().map(|p| self.to_screen(p)).collect();
        self.painter
            .add(egui::Shape::line(points, Stroke::new(width, color)));
    }

    fn text(&mut self, pos: [f32; 2], anchor: TextAnchor, text: &str, color: Color32) {
        self.painter.text(
            self.to_screen(pos),
            align(anchor),
            text,
            FontId::proportional(FONT_SIZE),
            color,
        );
    }
}
