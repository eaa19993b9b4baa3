use contour_engine::canvas::VgCanvas;
use contour_engine::coords::Vec2;

use crate::dash::{draw_line, Dash};
use crate::error::ShapeError;
use crate::style::StrokeStyle;
use crate::units::Length;

use super::args::Args;

/// `hline(x, y, w, on, off, stroke, lw)`: horizontal line starting at `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct HLine {
    pub x: Length,
    pub y: Length,
    pub w: Length,
    pub dash: Dash,
    pub stroke: StrokeStyle,
}

impl HLine {
    pub(crate) const KEYS: &'static [&'static str] = &["x", "y", "w", "on", "off", "stroke", "lw"];

    pub(crate) fn from_args(args: &Args) -> Result<Self, ShapeError> {
        Ok(Self {
            x: args.length("x", 0.0)?,
            y: args.length("y", 0.5)?,
            w: args.length("w", 1.0)?,
            dash: args.dash()?,
            stroke: args.stroke()?,
        })
    }

    pub fn draw<V: VgCanvas + ?Sized>(&self, vg: &mut V, size: Vec2) {
        let x = self.x.resolve(size.x);
        let y = self.y.resolve(size.y);
        let w = self.w.resolve(size.x);

        draw_line(vg, Vec2::new(x, y), Vec2::new(x + w, y), self.dash);
        self.stroke.apply(vg);
    }
}

/// `vline(x, y, h, on, off, stroke, lw)`: vertical line starting at `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct VLine {
    pub x: Length,
    pub y: Length,
    pub h: Length,
    pub dash: Dash,
    pub stroke: StrokeStyle,
}

impl VLine {
    pub(crate) const KEYS: &'static [&'static str] = &["x", "y", "h", "on", "off", "stroke", "lw"];

    pub(crate) fn from_args(args: &Args) -> Result<Self, ShapeError> {
        Ok(Self {
            x: args.length("x", 0.5)?,
            y: args.length("y", 0.0)?,
            h: args.length("h", 1.0)?,
            dash: args.dash()?,
            stroke: args.stroke()?,
        })
    }

    pub fn draw<V: VgCanvas + ?Sized>(&self, vg: &mut V, size: Vec2) {
        let x = self.x.resolve(size.x);
        let y = self.y.resolve(size.y);
        let h = self.h.resolve(size.y);

        draw_line(vg, Vec2::new(x, y), Vec2::new(x, y + h), self.dash);
        self.stroke.apply(vg);
    }
}

/// `line(x1, y1, x2, y2, on, off, stroke, lw)`: segment at any angle.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub x1: Length,
    pub y1: Length,
    pub x2: Length,
    pub y2: Length,
    pub dash: Dash,
    pub stroke: StrokeStyle,
}

impl Line {
    pub(crate) const KEYS: &'static [&'static str] =
        &["x1", "y1", "x2", "y2", "on", "off", "stroke", "lw"];

    pub(crate) fn from_args(args: &Args) -> Result<Self, ShapeError> {
        Ok(Self {
            x1: args.length("x1", 0.0)?,
            y1: args.length("y1", 0.0)?,
            x2: args.length("x2", 1.0)?,
            y2: args.length("y2", 1.0)?,
            dash: args.dash()?,
            stroke: args.stroke()?,
        })
    }

    pub fn draw<V: VgCanvas + ?Sized>(&self, vg: &mut V, size: Vec2) {
        let p1 = Vec2::new(self.x1.resolve(size.x), self.y1.resolve(size.y));
        let p2 = Vec2::new(self.x2.resolve(size.x), self.y2.resolve(size.y));

        draw_line(vg, p1, p2, self.dash);
        self.stroke.apply(vg);
    }
}
