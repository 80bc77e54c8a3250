//! Drawing contract the stage renders against, plus the fixed viewport.

use crate::constants::{NODES, SIZE_FACTOR, STROKE_FACTOR};
use crate::error::StageError;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// Stroke-drawing primitives with a save/restore transform stack, shaped
/// after the Canvas 2D API.
pub trait Surface {
    fn set_stroke_color(&mut self, color: &str);
    fn set_fill_color(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_line_cap(&mut self, cap: LineCap);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, radians: f64);

    /// Strokes a single segment as its own path.
    fn draw_line(&mut self, from: DVec2, to: DVec2) {
        self.begin_path();
        self.move_to(from.x, from.y);
        self.line_to(to.x, to.y);
        self.stroke();
    }
}

/// Drawable area in surface pixels. Fixed for the lifetime of a stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self, StageError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(StageError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Vertical distance between consecutive figures.
    pub fn gap(&self) -> f64 {
        self.height / (NODES + 1) as f64
    }

    /// Half the length of a figure's vertical stroke.
    pub fn figure_size(&self) -> f64 {
        self.gap() / SIZE_FACTOR
    }

    pub fn stroke_width(&self) -> f64 {
        self.width.min(self.height) / STROKE_FACTOR
    }

    /// Anchor of figure `i`: horizontally centered, one gap per index.
    pub fn anchor(&self, i: usize) -> DVec2 {
        DVec2::new(self.width / 2.0, self.gap() * (i + 1) as f64)
    }
}
