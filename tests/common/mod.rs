// Host-side fakes for the drawing surface and the interval scheduler.

#![allow(dead_code)]
use std::time::Duration;
use ztoline_core::{LineCap, Scheduler, StageError, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    StrokeColor(String),
    FillColor(String),
    LineWidth(f64),
    LineCap(LineCap),
    FillRect(f64, f64, f64, f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
}

#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    pub fn strokes(&self) -> usize {
        self.count(|op| matches!(op, Op::Stroke))
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn set_stroke_color(&mut self, color: &str) {
        self.ops.push(Op::StrokeColor(color.to_string()));
    }
    fn set_fill_color(&mut self, color: &str) {
        self.ops.push(Op::FillColor(color.to_string()));
    }
    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::LineWidth(width));
    }
    fn set_line_cap(&mut self, cap: LineCap) {
        self.ops.push(Op::LineCap(cap));
    }
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(Op::FillRect(x, y, width, height));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
    }
    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }
    fn save(&mut self) {
        self.ops.push(Op::Save);
    }
    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }
    fn translate(&mut self, x: f64, y: f64) {
        self.ops.push(Op::Translate(x, y));
    }
    fn rotate(&mut self, radians: f64) {
        self.ops.push(Op::Rotate(radians));
    }
}

/// Scheduler that only tracks registrations; tests call `tick` by hand.
#[derive(Default)]
pub struct ManualScheduler {
    pub next_id: u32,
    pub active: Vec<u32>,
    pub scheduled: usize,
    pub cancelled: usize,
    pub last_period: Option<Duration>,
    pub fail: bool,
}

impl Scheduler for ManualScheduler {
    type Handle = u32;

    fn schedule(&mut self, period: Duration) -> Result<u32, StageError> {
        if self.fail {
            return Err(StageError::Schedule("timer refused".into()));
        }
        self.next_id += 1;
        self.active.push(self.next_id);
        self.scheduled += 1;
        self.last_period = Some(period);
        Ok(self.next_id)
    }

    fn cancel(&mut self, handle: u32) {
        self.active.retain(|&h| h != handle);
        self.cancelled += 1;
    }
}
