//! Abstract 2-D drawing target.
//!
//! The renderer only issues the handful of primitives below, so the engine can
//! draw into an egui painter, a test recorder, or anything else that can fill
//! rectangles, stroke lines and place text.

use egui::Color32;

/// Which point of the text box sits at the given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Vertically centred, text extends to the right.
    Left,
    Center,
    /// Vertically centred, text extends to the left.
    Right,
    /// Horizontally centred, text hangs below the position.
    Top,
}

pub trait DrawSurface {
    /// Size of the drawable area in pixels, `[width, height]`.
    fn size(&self) -> [f32; 2];

    /// Erase everything drawn so far.
    fn clear(&mut self);

    fn fill_rect(&mut self, min: [f32; 2], max: [f32; 2], color: Color32);

    fn line(&mut self, from: [f32; 2], to: [f32; 2], width: f32, color: Color32);

    fn polyline(&mut self, points: Vec<[f32; 2]>, width: f32, color: Color32);

    fn text(&mut self, pos: [f32; 2], anchor: TextAnchor, text: &str, color: Color32);
}

/// One recorded primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        min: [f32; 2],
        max: [f32; 2],
        color: Color32,
    },
    Line {
        from: [f32; 2],
        to: [f32; 2],
        width: f32,
        color: Color32,
    },
    Polyline {
        points: Vec<[f32; 2]>,
        width: f32,
        color: Color32,
    },
    Text {
        pos: [f32; 2],
        anchor: TextAnchor,
        text: String,
        color: Color32,
    },
}

/// Surface that keeps the draw calls of the current frame in memory.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: [f32; 2],
    pub commands: Vec<DrawCommand>,
    /// How many times [`clear`](DrawSurface::clear) was called.
    pub clears: usize,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: [width, height],
            commands: Vec::new(),
            clears: 0,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = [width, height];
    }

    pub fn polylines(&self) -> impl Iterator<Item = (&[[f32; 2]], Color32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polyline { points, color, .. } => Some((points.as_slice(), *color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn is_blank(&self) -> bool {
        self.commands.is_empty()
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> [f32; 2] {
        self.size
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn fill_rect(&mut self, min: [f32; 2], max: [f32; 2], color: Color32) {
        self.commands.push(DrawCommand::FillRect { min, max, color });
    }

    fn line(&mut self, from: [f32; 2], to: [f32; 2], width: f32, color: Color32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn polyline(&mut self, points: Vec<[f32; 2]>, width: f32, color: Color32) {
        self.commands.push(DrawCommand::Polyline {
            points,
            width,
            color,
        });
    }

    fn text(&mut self, pos: [f32; 2], anchor: TextAnchor, text: &str, color: Color32) {
        self.commands.push(DrawCommand::Text {
            pos,
            anchor,
            text: text.to_string(),
            color,
        });
    }
}
