//! Character-cell frame buffer and draw primitives
//!
//! The [`Canvas`] is a `width x height` grid of [`Cell`]s that the game
//! draws into each frame and the backend blits to the terminal. Primitives
//! are deliberately minimal: rectangular fill, single point, straight line,
//! and text. Out-of-range points are silently dropped; clipping is the
//! caller's concern only when it wants different behavior (e.g. wrapping).

/// A small terminal-friendly color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Black (background)
    Black,
    /// White
    White,
    /// Red
    Red,
    /// Green
    Green,
    /// Blue
    Blue,
    /// Yellow
    Yellow,
    /// Cyan
    Cyan,
    /// Magenta
    Magenta,
}

/// One character cell of the frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The glyph shown in this cell
    pub glyph: char,

    /// Foreground color of the glyph
    pub color: Color,
}

impl Cell {
    /// The blank background cell.
    pub const BLANK: Cell = Cell {
        glyph: ' ',
        color: Color::Black,
    };
}

/// The solid block glyph used for filled points and lines.
pub const SOLID: char = '\u{2588}';

/// A rectangular character-cell frame buffer.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Create a blank canvas of the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; usize::from(width) * usize::from(height)],
        }
    }

    /// Canvas width in cells.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Canvas height in cells.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get the cell at the given coordinates, or `None` if out of range.
    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Fill the whole buffer with the blank background cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Fill the rectangle `[x0, x1) x [y0, y1)` with a glyph, clamped to the
    /// buffer.
    pub fn fill(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, glyph: char, color: Color) {
        for y in y0.max(0)..y1.min(i32::from(self.height)) {
            for x in x0.max(0)..x1.min(i32::from(self.width)) {
                self.draw(x, y, glyph, color);
            }
        }
    }

    /// Draw a single point. Points outside the buffer are ignored.
    pub fn draw(&mut self, x: i32, y: i32, glyph: char, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Cell { glyph, color };
        }
    }

    /// Draw a straight line between two points (inclusive of both ends).
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, glyph: char, color: Color) {
        for (x, y) in line_points(x0, y0, x1, y1) {
            self.draw(x, y, glyph, color);
        }
    }

    /// Draw a text string starting at the given cell, left to right.
    /// Characters past the right edge are dropped.
    pub fn draw_string(&mut self, x: i32, y: i32, text: &str, color: Color) {
        for (offset, glyph) in text.chars().enumerate() {
            let cx = x + i32::try_from(offset).unwrap_or(i32::MAX);
            self.draw(cx, y, glyph, color);
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        Some(usize::try_from(y).ok()? * usize::from(self.width) + usize::try_from(x).ok()?)
    }
}

/// Iterator over the integer points of a line segment (Bresenham).
///
/// Exposed as a primitive so callers that need to post-process each plotted
/// point (coordinate wrapping, clipping) can rasterize without duplicating
/// the algorithm.
pub fn line_points(x0: i32, y0: i32, x1: i32, y1: i32) -> LinePoints {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    LinePoints {
        x: x0,
        y: y0,
        x1,
        y1,
        dx,
        dy,
        sx: if x0 < x1 { 1 } else { -1 },
        sy: if y0 < y1 { 1 } else { -1 },
        err: dx + dy,
        done: false,
    }
}

/// Iterator state for [`line_points`].
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i32,
    y: i32,
    x1: i32,
    y1: i32,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl Iterator for LinePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.done {
            return None;
        }
        let point = (self.x, self.y);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(point);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_blank() {
        let canvas = Canvas::new(8, 4);
        assert_eq!(canvas.width(), 8);
        assert_eq!(canvas.height(), 4);
        assert_eq!(canvas.cell(0, 0), Some(&Cell::BLANK));
        assert_eq!(canvas.cell(7, 3), Some(&Cell::BLANK));
        assert_eq!(canvas.cell(8, 0), None);
    }

    #[test]
    fn test_draw_point() {
        let mut canvas = Canvas::new(8, 4);
        canvas.draw(3, 2, SOLID, Color::Red);
        let cell = canvas.cell(3, 2).unwrap();
        assert_eq!(cell.glyph, SOLID);
        assert_eq!(cell.color, Color::Red);
    }

    #[test]
    fn test_draw_out_of_range_is_ignored() {
        let mut canvas = Canvas::new(8, 4);
        canvas.draw(-1, 0, SOLID, Color::White);
        canvas.draw(0, 100, SOLID, Color::White);
        assert!(canvas
            .cell(0, 0)
            .is_some_and(|cell| *cell == Cell::BLANK));
    }

    #[test]
    fn test_line_is_inclusive_of_both_ends() {
        let points: Vec<_> = line_points(0, 0, 3, 3).collect();
        assert_eq!(points, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_line_single_point() {
        let points: Vec<_> = line_points(5, 5, 5, 5).collect();
        assert_eq!(points, vec![(5, 5)]);
    }

    #[test]
    fn test_line_steep_descending() {
        let points: Vec<_> = line_points(0, 3, 1, 0).collect();
        assert_eq!(points.first(), Some(&(0, 3)));
        assert_eq!(points.last(), Some(&(1, 0)));
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn test_draw_string_clips_at_edge() {
        let mut canvas = Canvas::new(8, 4);
        canvas.draw_string(6, 1, "SCORE", Color::Yellow);
        assert_eq!(canvas.cell(6, 1).unwrap().glyph, 'S');
        assert_eq!(canvas.cell(7, 1).unwrap().glyph, 'C');
        // "ORE" falls off the right edge
        assert_eq!(canvas.cell(0, 1), Some(&Cell::BLANK));
    }

    #[test]
    fn test_fill_and_clear() {
        let mut canvas = Canvas::new(8, 4);
        canvas.fill(0, 0, 8, 4, SOLID, Color::Blue);
        assert_eq!(canvas.cell(7, 3).unwrap().glyph, SOLID);
        canvas.clear();
        assert_eq!(canvas.cell(7, 3), Some(&Cell::BLANK));
    }
}
