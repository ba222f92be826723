//! Drawing-surface capability trait.
//!
//! The particle field renders through this minimal interface so the
//! simulation stays independent of any terminal backend and can be
//! exercised headlessly in tests.

use ratatui::style::Color;

/// A drawable surface the particle field projects onto.
pub trait Surface {
    /// Current surface dimensions in cells. A zero dimension means the
    /// surface is not ready and the frame should be dropped.
    fn size(&self) -> (u16, u16);

    /// Erase the previous frame.
    fn clear(&mut self);

    /// Plot one projected particle. Coordinates are in surface cells
    /// with the origin at the top-left; `opacity` is in `[0, 1]`.
    fn draw_point(&mut self, x: f32, y: f32, size: f32, color: Color, opacity: f32);
}
