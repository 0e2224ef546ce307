//! Wrapping draw view over the canvas
//!
//! Every plotted point is folded into the world before it reaches the
//! frame buffer, so objects straddling an edge draw partly on each side.
//! The wrap happens here, per point, before delegating to the canvas blit;
//! the canvas itself knows nothing about the torus.

use crate::{geometry, world::WorldBounds};
use console_engine::{
    canvas::{line_points, Canvas, Color, SOLID},
    math::Vec2,
};

/// A borrowed canvas that wraps coordinates into the world bounds.
pub struct WrappedCanvas<'a> {
    canvas: &'a mut Canvas,
    bounds: WorldBounds,
}

impl<'a> WrappedCanvas<'a> {
    /// Wrap a canvas in the given world bounds.
    pub fn new(canvas: &'a mut Canvas, bounds: WorldBounds) -> Self {
        Self { canvas, bounds }
    }

    /// Clear the frame to the blank background.
    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    /// Draw a single point, wrapped into the world.
    pub fn point(&mut self, p: Vec2, color: Color) {
        let w = self.bounds.wrap(p);
        self.canvas.draw(w.x as i32, w.y as i32, SOLID, color);
    }

    /// Draw a line between two world points, wrapping every plotted cell.
    pub fn line(&mut self, a: Vec2, b: Vec2, color: Color) {
        for (x, y) in line_points(a.x as i32, a.y as i32, b.x as i32, b.y as i32) {
            let w = self.bounds.wrap(Vec2::new(x as f32, y as f32));
            self.canvas.draw(w.x as i32, w.y as i32, SOLID, color);
        }
    }

    /// Draw a model as a closed wire-frame loop at the given pose.
    pub fn wireframe(&mut self, model: &[Vec2], position: Vec2, angle: f32, scale: f32, color: Color) {
        let verts = geometry::transform_model(model, position, angle, scale);
        for i in 0..verts.len() {
            let j = (i + 1) % verts.len();
            self.line(verts[i], verts[j], color);
        }
    }

    /// Draw a text string at a fixed screen location (not wrapped).
    pub fn text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        self.canvas.draw_string(x, y, text, color);
    }
}
