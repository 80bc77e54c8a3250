use std::time::Duration;

// Fixed stage tuning shared by the core state machine and the web frontend.

// Chain layout
pub const NODES: usize = 5; // figures in the chain
pub const LINES: usize = 2; // angled strokes per figure

// Animation
pub const SC_GAP: f64 = 0.05; // base scale delta per tick
pub const SC_DIV: f64 = 0.51; // band threshold between the two step regimes
pub const TICK_PERIOD: Duration = Duration::from_millis(50);

// Visual sizing
pub const STROKE_FACTOR: f64 = 90.0; // stroke width = min(w, h) / STROKE_FACTOR
pub const SIZE_FACTOR: f64 = 2.9; // figure half-size = gap / SIZE_FACTOR

// Palette
pub const FORE_COLOR: &str = "#1A237E";
pub const BACK_COLOR: &str = "#BDBDBD";
