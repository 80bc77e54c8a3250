//! Geometry of a single "Z to line" figure.
//!
//! The figure is a centre stroke with two outer strokes attached to its ends.
//! The first half of the scale swings the outer strokes by 45°, the third
//! quarter slides them out toward the right edge, and the last quarter turns
//! the centre stroke upright.

use crate::constants::{FORE_COLOR, LINES};
use crate::scale::clamped_progress;
use crate::surface::{LineCap, Surface, Viewport};
use glam::DVec2;
use std::f64::consts::FRAC_PI_4;

pub fn draw_node<D: Surface + ?Sized>(surface: &mut D, viewport: &Viewport, scale: f64, i: usize) {
    let size = viewport.figure_size();
    let sc1 = clamped_progress(scale, 0, 2);
    let sc2 = clamped_progress(scale, 1, 2);
    let sc21 = clamped_progress(sc2, 0, 2);
    let sc22 = clamped_progress(sc2, 1, 2);

    surface.set_line_cap(LineCap::Round);
    surface.set_line_width(viewport.stroke_width());
    surface.set_stroke_color(FORE_COLOR);

    let anchor = viewport.anchor(i);
    surface.save();
    surface.translate(anchor.x, anchor.y);
    surface.rotate(FRAC_PI_4 * (1.0 - sc22));
    surface.draw_line(DVec2::new(0.0, -size), DVec2::new(0.0, size));
    for j in 0..LINES {
        draw_z_line(surface, j, size, viewport.width() / 2.0, sc1, sc21);
    }
    surface.restore();
}

fn draw_z_line<D: Surface + ?Sized>(
    surface: &mut D,
    j: usize,
    size: f64,
    reach: f64,
    sc1: f64,
    sc2: f64,
) {
    let sc1j = clamped_progress(sc1, j, LINES);
    let sc2j = clamped_progress(sc2, j, LINES);
    let jf = j as f64;
    surface.save();
    surface.translate(reach * sc2j, -size + 2.0 * size * jf);
    surface.rotate(FRAC_PI_4 * sc1j);
    surface.draw_line(DVec2::ZERO, DVec2::new(0.0, -2.0 * size * (1.0 - 2.0 * jf)));
    surface.restore();
}
