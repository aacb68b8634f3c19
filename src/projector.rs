//! Data ↔ pixel mapping for one rendered frame.

/// Pixel rectangle of the plot area (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Inclusive on all edges.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// The rectangle and data ranges a frame was drawn with.
///
/// Produced by [`Renderer::draw`](crate::render::Renderer::draw) and the only
/// coordinate system hover lookups may rely on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotGeometry {
    pub rect: PlotRect,
    pub t_min: f64,
    pub t_max: f64,
    pub v_min: f64,
    pub v_max: f64,
}

impl PlotGeometry {
    /// Both ranges and the rectangle have positive, finite extent.
    pub fn is_valid(&self) -> bool {
        let finite = [self.t_min, self.t_max, self.v_min, self.v_max]
            .iter()
            .all(|v| v.is_finite());
        finite
            && self.t_max > self.t_min
            && self.v_max > self.v_min
            && self.rect.width() > 0.0
            && self.rect.height() > 0.0
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        self.rect.contains(px, py)
    }

    /// `t` lies in the drawn time range, bounds included.
    pub fn contains_time(&self, t: f64) -> bool {
        t >= self.t_min && t <= self.t_max
    }

    pub fn time_to_x(&self, t: f64) -> f32 {
        let frac = (t - self.t_min) / (self.t_max - self.t_min);
        (self.rect.left as f64 + frac * self.rect.width() as f64) as f32
    }

    /// Higher values map to smaller y (higher on screen).
    pub fn value_to_y(&self, v: f64) -> f32 {
        let frac = (v - self.v_min) / (self.v_max - self.v_min);
        (self.rect.bottom as f64 - frac * self.rect.height() as f64) as f32
    }

    pub fn x_to_time(&self, px: f32) -> f64 {
        let frac = (px - self.rect.left) as f64 / self.rect.width() as f64;
        self.t_min + frac * (self.t_max - self.t_min)
    }

    pub fn y_to_value(&self, py: f32) -> f64 {
        let frac = (self.rect.bottom - py) as f64 / self.rect.height() as f64;
        self.v_min + frac * (self.v_max - self.v_min)
    }

    pub fn project(&self, t: f64, v: f64) -> [f32; 2] {
        [self.time_to_x(t), self.value_to_y(v)]
    }
}
