use std::f32::consts::PI;

use contour_engine::canvas::VgCanvas;
use contour_engine::coords::Vec2;

use crate::error::ShapeError;
use crate::style::{FillStyle, StrokeStyle};
use crate::units::Length;

use super::args::Args;

/// `circle(x, y, r, fill, stroke, lw)`: circle centred on `(x, y)`.
///
/// A fractional `r` is relative to the widget's shorter side.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub x: Length,
    pub y: Length,
    pub r: Length,
    pub fill: FillStyle,
    pub stroke: StrokeStyle,
}

impl Circle {
    pub(crate) const KEYS: &'static [&'static str] = &["x", "y", "r", "fill", "stroke", "lw"];

    pub(crate) fn from_args(args: &Args) -> Result<Self, ShapeError> {
        Ok(Self {
            x: args.length("x", 0.5)?,
            y: args.length("y", 0.5)?,
            r: args.length("r", 0.5)?,
            fill: args.fill()?,
            stroke: args.stroke()?,
        })
    }

    pub fn draw<V: VgCanvas + ?Sized>(&self, vg: &mut V, size: Vec2) {
        let x = self.x.resolve(size.x);
        let y = self.y.resolve(size.y);
        let r = self.r.resolve(size.min_element());

        vg.arc(x, y, r, 0.0, PI * 2.0, false);
        self.fill.apply(vg);
        self.stroke.apply(vg);
    }
}

/// `ellipse(x, y, rx, ry, fill, stroke, lw)`.
///
/// `rx` is relative to the widget width, `ry` to its height.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    pub x: Length,
    pub y: Length,
    pub rx: Length,
    pub ry: Length,
    pub fill: FillStyle,
    pub stroke: StrokeStyle,
}

impl Ellipse {
    pub(crate) const KEYS: &'static [&'static str] =
        &["x", "y", "rx", "ry", "fill", "stroke", "lw"];

    pub(crate) fn from_args(args: &Args) -> Result<Self, ShapeError> {
        Ok(Self {
            x: args.length("x", 0.5)?,
            y: args.length("y", 0.5)?,
            rx: args.length("rx", 0.5)?,
            ry: args.length("ry", 0.5)?,
            fill: args.fill()?,
            stroke: args.stroke()?,
        })
    }

    pub fn draw<V: VgCanvas + ?Sized>(&self, vg: &mut V, size: Vec2) {
        let x = self.x.resolve(size.x);
        let y = self.y.resolve(size.y);
        let rx = self.rx.resolve(size.x);
        let ry = self.ry.resolve(size.y);

        vg.ellipse(x, y, rx, ry);
        self.fill.apply(vg);
        self.stroke.apply(vg);
    }
}
