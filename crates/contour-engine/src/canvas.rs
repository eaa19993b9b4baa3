//! Drawing surfaces supplied by the host toolkit.
//!
//! Contour never rasterizes anything itself. Shapes are expressed as a
//! sequence of calls against these traits, and the host maps them onto
//! whatever vector backend it runs (NanoVG, AGGE, a recorder in tests).

use crate::coords::{Rect, Vec2};
use crate::paint::Color;

/// Path-based vector canvas.
///
/// Follows the usual immediate-mode model: `begin_path` starts an empty
/// path, geometry calls append to it, and `fill` / `stroke` paint it with
/// the current state. `save` / `restore` bracket transform and paint state.
pub trait VgCanvas {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn scale(&mut self, sx: f32, sy: f32);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32);
    fn bezier_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32);
    fn close_path(&mut self);

    fn rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, r: f32);
    /// Circular arc around `(cx, cy)`; angles in radians.
    fn arc(&mut self, cx: f32, cy: f32, r: f32, start: f32, end: f32, ccw: bool);
    fn ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32);

    fn set_fill_color(&mut self, color: Color);
    fn fill(&mut self);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);
    fn stroke(&mut self);
}

/// Widget-level canvas: a vector canvas plus text output.
///
/// `origin` is the absolute position of the widget being painted. Vector
/// calls are issued in widget space after translating by it; text calls
/// apply the origin themselves.
pub trait Canvas: VgCanvas {
    fn origin(&self) -> Vec2;
    fn set_font_size(&mut self, size: f32);
    fn set_text_color(&mut self, color: Color);
    fn draw_text_in_rect(&mut self, text: &str, rect: Rect);
}
