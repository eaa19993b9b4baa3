use contour_engine::canvas::VgCanvas;
use contour_engine::coords::Vec2;
use resvg::tiny_skia::PathSegment;
use resvg::usvg;

use crate::error::ShapeError;
use crate::style::{FillStyle, StrokeStyle};
use crate::units::Length;

use super::args::Args;

/// One segment of parsed SVG path data, in the path's own coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathSeg {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo(Vec2, Vec2),
    CubicTo(Vec2, Vec2, Vec2),
    Close,
}

impl From<PathSegment> for PathSeg {
    fn from(seg: PathSegment) -> Self {
        let v = |p: resvg::tiny_skia::Point| Vec2::new(p.x, p.y);
        match seg {
            PathSegment::MoveTo(p) => PathSeg::MoveTo(v(p)),
            PathSegment::LineTo(p) => PathSeg::LineTo(v(p)),
            PathSegment::QuadTo(c, p) => PathSeg::QuadTo(v(c), v(p)),
            PathSegment::CubicTo(c1, c2, p) => PathSeg::CubicTo(v(c1), v(c2), v(p)),
            PathSegment::Close => PathSeg::Close,
        }
    }
}

/// Parses SVG path data (`M 0 0 L 10 10 Z`, arcs, relative commands, ...).
///
/// The data is wrapped in a one-element SVG document and handed to usvg,
/// which normalizes every command to move/line/quad/cubic/close. Data must
/// open with a moveto; anything else is an error. Empty data, or data
/// with nothing drawable such as a lone `M 0 0`, yields no segments.
pub fn parse_path_data(data: &str) -> Result<Vec<PathSeg>, ShapeError> {
    let trimmed = data.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if !trimmed.starts_with(['M', 'm']) {
        return Err(ShapeError::InvalidPath {
            data: data.to_string(),
            reason: "path data must start with a moveto (M or m)".to_string(),
        });
    }

    let doc = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><path d="{}"/></svg>"#,
        escape_attr(data)
    );
    let tree = usvg::Tree::from_str(&doc, &usvg::Options::default()).map_err(|e| {
        ShapeError::InvalidPath { data: data.to_string(), reason: e.to_string() }
    })?;

    let mut segs = Vec::new();
    collect_segments(tree.root(), &mut segs);

    if segs.is_empty() {
        log::debug!("path(): {:?} has no drawable segments", data);
    }
    Ok(segs)
}

fn collect_segments(group: &usvg::Group, out: &mut Vec<PathSeg>) {
    for node in group.children() {
        match node {
            usvg::Node::Group(g) => collect_segments(g, out),
            usvg::Node::Path(p) => out.extend(p.data().segments().map(PathSeg::from)),
            _ => {}
        }
    }
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

/// `path(w, h, data, fill, stroke, lw)`: SVG path data.
///
/// `w` × `h` is the path's design box. It is scaled uniformly to fit the
/// widget and centred on the free axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PathShape {
    pub w: Length,
    pub h: Length,
    pub segments: Vec<PathSeg>,
    pub fill: FillStyle,
    pub stroke: StrokeStyle,
}

impl PathShape {
    pub(crate) const KEYS: &'static [&'static str] = &["w", "h", "data", "fill", "stroke", "lw"];

    pub(crate) fn from_args(args: &Args) -> Result<Self, ShapeError> {
        Ok(Self {
            w: args.length("w", 1.0)?,
            h: args.length("h", 1.0)?,
            segments: parse_path_data(args.text("data").unwrap_or_default())?,
            fill: args.fill()?,
            stroke: args.stroke()?,
        })
    }

    pub fn draw<V: VgCanvas + ?Sized>(&self, vg: &mut V, size: Vec2) {
        if self.segments.is_empty() {
            return;
        }
        let w = self.w.resolve(size.x);
        let h = self.h.resolve(size.y);
        if w <= 0.0 || h <= 0.0 {
            log::warn!("path(): design box {}x{} is empty, skipping", w, h);
            return;
        }

        let scale = (size.x / w).min(size.y / h);
        let ox = (size.x - w * scale) / 2.0;
        let oy = (size.y - h * scale) / 2.0;

        vg.save();
        vg.translate(ox, oy);
        vg.scale(scale, scale);

        for seg in &self.segments {
            match *seg {
                PathSeg::MoveTo(p) => vg.move_to(p.x, p.y),
                PathSeg::LineTo(p) => vg.line_to(p.x, p.y),
                PathSeg::QuadTo(c, p) => vg.quad_to(c.x, c.y, p.x, p.y),
                PathSeg::CubicTo(c1, c2, p) => vg.bezier_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y),
                PathSeg::Close => vg.close_path(),
            }
        }

        self.fill.apply(vg);
        self.stroke.apply(vg);
        vg.restore();
    }
}
