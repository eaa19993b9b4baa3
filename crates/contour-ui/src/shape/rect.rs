use contour_engine::canvas::VgCanvas;
use contour_engine::coords::Vec2;

use crate::error::ShapeError;
use crate::style::{FillStyle, StrokeStyle};
use crate::units::Length;

use super::args::Args;

/// `rect(x, y, w, h, r, fill, stroke, lw)`: optionally rounded rectangle.
///
/// A fractional `r` is relative to the shorter side of the rectangle itself,
/// not of the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    pub x: Length,
    pub y: Length,
    pub w: Length,
    pub h: Length,
    pub r: Length,
    pub fill: FillStyle,
    pub stroke: StrokeStyle,
}

impl RectShape {
    pub(crate) const KEYS: &'static [&'static str] =
        &["x", "y", "w", "h", "r", "fill", "stroke", "lw"];

    pub(crate) fn from_args(args: &Args) -> Result<Self, ShapeError> {
        Ok(Self {
            x: args.length("x", 0.0)?,
            y: args.length("y", 0.0)?,
            w: args.length("w", 1.0)?,
            h: args.length("h", 1.0)?,
            r: args.length("r", 0.0)?,
            fill: args.fill()?,
            stroke: args.stroke()?,
        })
    }

    pub fn draw<V: VgCanvas + ?Sized>(&self, vg: &mut V, size: Vec2) {
        let x = self.x.resolve(size.x);
        let y = self.y.resolve(size.y);
        let w = self.w.resolve(size.x);
        let h = self.h.resolve(size.y);
        let r = self.r.resolve(w.min(h));

        vg.rounded_rect(x, y, w, h, r);
        self.fill.apply(vg);
        self.stroke.apply(vg);
    }
}
