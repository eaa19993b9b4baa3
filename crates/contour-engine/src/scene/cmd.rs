use std::fmt;

use crate::coords::Rect;
use crate::paint::Color;

/// One recorded canvas call.
///
/// Variants mirror the methods of [`VgCanvas`](crate::canvas::VgCanvas) and
/// [`Canvas`](crate::canvas::Canvas) one to one, so a recorded stream can be
/// replayed onto any other canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Save,
    Restore,
    Translate { x: f32, y: f32 },
    Scale { sx: f32, sy: f32 },
    BeginPath,
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    QuadTo { cx: f32, cy: f32, x: f32, y: f32 },
    BezierTo { c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32 },
    ClosePath,
    RoundedRect { x: f32, y: f32, w: f32, h: f32, r: f32 },
    Arc { cx: f32, cy: f32, r: f32, start: f32, end: f32, ccw: bool },
    Ellipse { cx: f32, cy: f32, rx: f32, ry: f32 },
    SetFillColor(Color),
    Fill,
    SetStrokeColor(Color),
    SetLineWidth(f32),
    Stroke,
    SetFontSize(f32),
    SetTextColor(Color),
    DrawText { text: String, rect: Rect },
}

impl DrawCmd {
    /// Canvas method name this command stands for.
    pub fn name(&self) -> &'static str {
        match self {
            DrawCmd::Save => "save",
            DrawCmd::Restore => "restore",
            DrawCmd::Translate { .. } => "translate",
            DrawCmd::Scale { .. } => "scale",
            DrawCmd::BeginPath => "begin_path",
            DrawCmd::MoveTo { .. } => "move_to",
            DrawCmd::LineTo { .. } => "line_to",
            DrawCmd::QuadTo { .. } => "quad_to",
            DrawCmd::BezierTo { .. } => "bezier_to",
            DrawCmd::ClosePath => "close_path",
            DrawCmd::RoundedRect { .. } => "rounded_rect",
            DrawCmd::Arc { .. } => "arc",
            DrawCmd::Ellipse { .. } => "ellipse",
            DrawCmd::SetFillColor(_) => "set_fill_color",
            DrawCmd::Fill => "fill",
            DrawCmd::SetStrokeColor(_) => "set_stroke_color",
            DrawCmd::SetLineWidth(_) => "set_line_width",
            DrawCmd::Stroke => "stroke",
            DrawCmd::SetFontSize(_) => "set_font_size",
            DrawCmd::SetTextColor(_) => "set_text_color",
            DrawCmd::DrawText { .. } => "draw_text",
        }
    }
}

impl fmt::Display for DrawCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        match self {
            DrawCmd::Translate { x, y }
            | DrawCmd::MoveTo { x, y }
            | DrawCmd::LineTo { x, y } => write!(f, " {x} {y}"),
            DrawCmd::Scale { sx, sy } => write!(f, " {sx} {sy}"),
            DrawCmd::QuadTo { cx, cy, x, y } => write!(f, " {cx} {cy} {x} {y}"),
            DrawCmd::BezierTo { c1x, c1y, c2x, c2y, x, y } => {
                write!(f, " {c1x} {c1y} {c2x} {c2y} {x} {y}")
            }
            DrawCmd::RoundedRect { x, y, w, h, r } => write!(f, " {x} {y} {w} {h} {r}"),
            DrawCmd::Arc { cx, cy, r, start, end, ccw } => {
                write!(f, " {cx} {cy} {r} {start} {end} {ccw}")
            }
            DrawCmd::Ellipse { cx, cy, rx, ry } => write!(f, " {cx} {cy} {rx} {ry}"),
            DrawCmd::SetFillColor(c) | DrawCmd::SetStrokeColor(c) | DrawCmd::SetTextColor(c) => {
                write!(f, " {c}")
            }
            DrawCmd::SetLineWidth(v) | DrawCmd::SetFontSize(v) => write!(f, " {v}"),
            DrawCmd::DrawText { text, rect } => write!(
                f,
                " {:?} {} {} {} {}",
                text, rect.origin.x, rect.origin.y, rect.size.x, rect.size.y
            ),
            DrawCmd::Save
            | DrawCmd::Restore
            | DrawCmd::BeginPath
            | DrawCmd::ClosePath
            | DrawCmd::Fill
            | DrawCmd::Stroke => Ok(()),
        }
    }
}
