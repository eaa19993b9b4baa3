use contour_engine::canvas::Canvas;
use contour_engine::coords::{Rect, Vec2};
use contour_engine::paint::Color;

use crate::error::ShapeError;
use crate::units::Length;

use super::args::Args;

/// `text(x, y, w, h, size, text, color)`: text laid out inside a box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    pub x: Length,
    pub y: Length,
    pub w: Length,
    pub h: Length,
    pub size: f32,
    pub text: String,
    /// `None` from `color=none`: nothing is drawn.
    pub color: Option<Color>,
}

impl TextShape {
    pub(crate) const KEYS: &'static [&'static str] = &["x", "y", "w", "h", "size", "text", "color"];

    pub(crate) fn from_args(args: &Args) -> Result<Self, ShapeError> {
        Ok(Self {
            x: args.length("x", 0.0)?,
            y: args.length("y", 0.0)?,
            w: args.length("w", 1.0)?,
            h: args.length("h", 1.0)?,
            size: args.number("size", 18.0)?,
            text: args.text("text").unwrap_or_default().to_string(),
            color: args.color("color", Color::black())?,
        })
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, size: Vec2) {
        let Some(color) = self.color else { return };
        if self.text.is_empty() {
            return;
        }

        let rect = Rect::new(
            self.x.resolve(size.x),
            self.y.resolve(size.y),
            self.w.resolve(size.x),
            self.h.resolve(size.y),
        );

        // Text output applies the widget origin itself, so lift the vector
        // translation for the duration of the call.
        let origin = canvas.origin();
        canvas.translate(-origin.x, -origin.y);
        canvas.set_font_size(self.size);
        canvas.set_text_color(color);
        canvas.draw_text_in_rect(&self.text, rect);
        canvas.translate(origin.x, origin.y);
    }
}
