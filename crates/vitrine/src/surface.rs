//! Terminal adapter for the particle field's drawing surface.
//!
//! Projected particles land in a cell grid; each point becomes a glyph
//! chosen by its projected size, with its color dimmed by opacity. The
//! grid converts to ratatui lines rendered behind the page content.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use vitrine_motion::Surface;

/// Glyphs by projected size, small to large.
const POINT_CHARS: &[char] = &['·', '•', '*', '✦', '●'];

/// A cell-grid surface the particle field draws into.
#[derive(Debug)]
pub struct CellSurface {
    width: u16,
    height: u16,
    cells: Vec<Option<(char, Color)>>,
}

impl CellSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Resize the grid, discarding the previous frame.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = vec![None; width as usize * height as usize];
    }

    /// The current frame as background lines.
    pub fn lines(&self) -> Vec<Line<'static>> {
        (0..self.height)
            .map(|y| {
                let spans: Vec<Span> = (0..self.width)
                    .map(|x| {
                        let idx = y as usize * self.width as usize + x as usize;
                        match self.cells[idx] {
                            Some((ch, color)) => {
                                Span::styled(ch.to_string(), Style::new().fg(color))
                            }
                            None => Span::raw(" "),
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    fn glyph_for(size: f32) -> char {
        let idx = if size < 0.8 {
            0
        } else if size < 1.5 {
            1
        } else if size < 2.2 {
            2
        } else if size < 3.0 {
            3
        } else {
            4
        };
        POINT_CHARS[idx]
    }

    fn dim(color: Color, opacity: f32) -> Color {
        match color {
            Color::Rgb(r, g, b) => Color::Rgb(
                (r as f32 * opacity) as u8,
                (g as f32 * opacity) as u8,
                (b as f32 * opacity) as u8,
            ),
            other => other,
        }
    }
}

impl Surface for CellSurface {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn draw_point(&mut self, x: f32, y: f32, size: f32, color: Color, opacity: f32) {
        if x < 0.0 || y < 0.0 {
            return;
        }
        let (col, row) = (x.round() as u16, y.round() as u16);
        if col >= self.width || row >= self.height {
            return;
        }
        let idx = row as usize * self.width as usize + col as usize;
        self.cells[idx] = Some((Self::glyph_for(size), Self::dim(color, opacity)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_point_lands_in_cell() {
        let mut surface = CellSurface::new(10, 4);
        surface.draw_point(3.4, 1.6, 1.0, Color::Rgb(200, 100, 50), 0.5);
        let lines = surface.lines();
        assert_eq!(lines.len(), 4);
        let span = &lines[2].spans[3];
        assert_eq!(span.content, "•");
        assert_eq!(span.style.fg, Some(Color::Rgb(100, 50, 25)));
    }

    #[test]
    fn test_out_of_bounds_points_are_dropped() {
        let mut surface = CellSurface::new(10, 4);
        surface.draw_point(-1.0, 0.0, 1.0, Color::White, 1.0);
        surface.draw_point(0.0, 9.9, 1.0, Color::White, 1.0);
        surface.draw_point(99.0, 0.0, 1.0, Color::White, 1.0);
        assert!(surface.cells.iter().all(Option::is_none));
    }

    #[test]
    fn test_clear_erases_frame() {
        let mut surface = CellSurface::new(4, 2);
        surface.draw_point(0.0, 0.0, 4.0, Color::White, 1.0);
        surface.clear();
        assert!(surface.cells.iter().all(Option::is_none));
    }

    #[test]
    fn test_glyph_grows_with_size() {
        assert_eq!(CellSurface::glyph_for(0.2), '·');
        assert_eq!(CellSurface::glyph_for(1.0), '•');
        assert_eq!(CellSurface::glyph_for(5.0), '●');
    }

    #[test]
    fn test_resize_discards_frame() {
        let mut surface = CellSurface::new(4, 2);
        surface.draw_point(0.0, 0.0, 1.0, Color::White, 1.0);
        surface.resize(6, 3);
        assert_eq!(surface.size(), (6, 3));
        assert!(surface.cells.iter().all(Option::is_none));
    }
}
