use crate::canvas::{Canvas, VgCanvas};
use crate::coords::{Rect, Vec2};
use crate::paint::Color;

use super::DrawCmd;

/// Recording canvas.
///
/// Every call is appended as a [`DrawCmd`] in the order it was issued.
/// Nothing is validated or interpreted, which makes the list a faithful
/// transcript of what a shape asked the host to do.
///
/// ```
/// use contour_engine::canvas::VgCanvas;
/// use contour_engine::scene::{DrawCmd, DrawList};
///
/// let mut list = DrawList::new();
/// list.move_to(0.0, 0.0);
/// list.line_to(10.0, 0.0);
/// assert_eq!(list.items()[1], DrawCmd::LineTo { x: 10.0, y: 0.0 });
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
    origin: Vec2,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder reporting `origin` as the painted widget's absolute position.
    #[inline]
    pub fn with_origin(origin: Vec2) -> Self {
        Self { items: Vec::new(), origin }
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Replays the recorded stream onto another canvas.
    pub fn replay<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for cmd in &self.items {
            match cmd {
                DrawCmd::Save => canvas.save(),
                DrawCmd::Restore => canvas.restore(),
                DrawCmd::Translate { x, y } => canvas.translate(*x, *y),
                DrawCmd::Scale { sx, sy } => canvas.scale(*sx, *sy),
                DrawCmd::BeginPath => canvas.begin_path(),
                DrawCmd::MoveTo { x, y } => canvas.move_to(*x, *y),
                DrawCmd::LineTo { x, y } => canvas.line_to(*x, *y),
                DrawCmd::QuadTo { cx, cy, x, y } => canvas.quad_to(*cx, *cy, *x, *y),
                DrawCmd::BezierTo { c1x, c1y, c2x, c2y, x, y } => {
                    canvas.bezier_to(*c1x, *c1y, *c2x, *c2y, *x, *y)
                }
                DrawCmd::ClosePath => canvas.close_path(),
                DrawCmd::RoundedRect { x, y, w, h, r } => canvas.rounded_rect(*x, *y, *w, *h, *r),
                DrawCmd::Arc { cx, cy, r, start, end, ccw } => {
                    canvas.arc(*cx, *cy, *r, *start, *end, *ccw)
                }
                DrawCmd::Ellipse { cx, cy, rx, ry } => canvas.ellipse(*cx, *cy, *rx, *ry),
                DrawCmd::SetFillColor(c) => canvas.set_fill_color(*c),
                DrawCmd::Fill => canvas.fill(),
                DrawCmd::SetStrokeColor(c) => canvas.set_stroke_color(*c),
                DrawCmd::SetLineWidth(w) => canvas.set_line_width(*w),
                DrawCmd::Stroke => canvas.stroke(),
                DrawCmd::SetFontSize(s) => canvas.set_font_size(*s),
                DrawCmd::SetTextColor(c) => canvas.set_text_color(*c),
                DrawCmd::DrawText { text, rect } => canvas.draw_text_in_rect(text, *rect),
            }
        }
    }
}

impl VgCanvas for DrawList {
    fn save(&mut self) { self.push(DrawCmd::Save) }
    fn restore(&mut self) { self.push(DrawCmd::Restore) }
    fn translate(&mut self, x: f32, y: f32) { self.push(DrawCmd::Translate { x, y }) }
    fn scale(&mut self, sx: f32, sy: f32) { self.push(DrawCmd::Scale { sx, sy }) }

    fn begin_path(&mut self) { self.push(DrawCmd::BeginPath) }
    fn move_to(&mut self, x: f32, y: f32) { self.push(DrawCmd::MoveTo { x, y }) }
    fn line_to(&mut self, x: f32, y: f32) { self.push(DrawCmd::LineTo { x, y }) }
    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.push(DrawCmd::QuadTo { cx, cy, x, y })
    }
    fn bezier_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        self.push(DrawCmd::BezierTo { c1x, c1y, c2x, c2y, x, y })
    }
    fn close_path(&mut self) { self.push(DrawCmd::ClosePath) }

    fn rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, r: f32) {
        self.push(DrawCmd::RoundedRect { x, y, w, h, r })
    }
    fn arc(&mut self, cx: f32, cy: f32, r: f32, start: f32, end: f32, ccw: bool) {
        self.push(DrawCmd::Arc { cx, cy, r, start, end, ccw })
    }
    fn ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32) {
        self.push(DrawCmd::Ellipse { cx, cy, rx, ry })
    }

    fn set_fill_color(&mut self, color: Color) { self.push(DrawCmd::SetFillColor(color)) }
    fn fill(&mut self) { self.push(DrawCmd::Fill) }
    fn set_stroke_color(&mut self, color: Color) { self.push(DrawCmd::SetStrokeColor(color)) }
    fn set_line_width(&mut self, width: f32) { self.push(DrawCmd::SetLineWidth(width)) }
    fn stroke(&mut self) { self.push(DrawCmd::Stroke) }
}

impl Canvas for DrawList {
    fn origin(&self) -> Vec2 {
        self.origin
    }
    fn set_font_size(&mut self, size: f32) { self.push(DrawCmd::SetFontSize(size)) }
    fn set_text_color(&mut self, color: Color) { self.push(DrawCmd::SetTextColor(color)) }
    fn draw_text_in_rect(&mut self, text: &str, rect: Rect) {
        self.push(DrawCmd::DrawText { text: text.to_string(), rect })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_call_order() {
        let mut list = DrawList::new();
        list.begin_path();
        list.rounded_rect(0.0, 0.0, 10.0, 5.0, 1.0);
        list.set_fill_color(Color::white());
        list.fill();
        assert_eq!(
            list.items(),
            &[
                DrawCmd::BeginPath,
                DrawCmd::RoundedRect { x: 0.0, y: 0.0, w: 10.0, h: 5.0, r: 1.0 },
                DrawCmd::SetFillColor(Color::white()),
                DrawCmd::Fill,
            ]
        );
    }

    #[test]
    fn replay_reproduces_stream() {
        let mut src = DrawList::with_origin(Vec2::new(3.0, 4.0));
        src.save();
        src.translate(3.0, 4.0);
        src.arc(1.0, 1.0, 1.0, 0.0, 1.0, false);
        src.draw_text_in_rect("hi", Rect::new(0.0, 0.0, 5.0, 5.0));
        src.restore();

        let mut dst = DrawList::new();
        src.replay(&mut dst);
        assert_eq!(src.items(), dst.items());
    }

    #[test]
    fn clear_keeps_origin() {
        let mut list = DrawList::with_origin(Vec2::new(1.0, 2.0));
        list.fill();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.origin(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn display_lists_arguments() {
        assert_eq!(DrawCmd::MoveTo { x: 1.5, y: 2.0 }.to_string(), "move_to 1.5 2");
        assert_eq!(DrawCmd::Stroke.to_string(), "stroke");
        assert_eq!(DrawCmd::SetStrokeColor(Color::black()).to_string(), "set_stroke_color #000000ff");
    }
}
