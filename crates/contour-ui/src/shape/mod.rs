//! Typed shapes and the name → shape dispatch table.
//!
//! Adding a shape:
//! - add a module with a struct holding its typed parameters
//! - give it `KEYS`, `from_args` and `draw`
//! - add a variant to [`Shape`] and a row to `SHAPES`

mod args;
mod line;
mod list;
mod path;
mod rect;
mod round;
mod text;

use contour_engine::canvas::Canvas;
use contour_engine::coords::Vec2;
use contour_lang::Call;

use crate::error::ShapeError;

use args::Args;

pub use line::{HLine, Line, VLine};
pub use list::ShapeList;
pub use path::{parse_path_data, PathSeg, PathShape};
pub use rect::RectShape;
pub use round::{Circle, Ellipse};
pub use text::TextShape;

/// One drawable shape with its arguments already typed and defaulted.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    HLine(HLine),
    VLine(VLine),
    Line(Line),
    Rect(RectShape),
    Circle(Circle),
    Ellipse(Ellipse),
    Path(PathShape),
    Text(TextShape),
}

struct ShapeKind {
    name: &'static str,
    keys: &'static [&'static str],
    build: fn(&Args) -> Result<Shape, ShapeError>,
}

const SHAPES: &[ShapeKind] = &[
    ShapeKind { name: "hline", keys: HLine::KEYS, build: |a| HLine::from_args(a).map(Shape::HLine) },
    ShapeKind { name: "vline", keys: VLine::KEYS, build: |a| VLine::from_args(a).map(Shape::VLine) },
    ShapeKind { name: "line", keys: Line::KEYS, build: |a| Line::from_args(a).map(Shape::Line) },
    ShapeKind { name: "rect", keys: RectShape::KEYS, build: |a| RectShape::from_args(a).map(Shape::Rect) },
    ShapeKind { name: "circle", keys: Circle::KEYS, build: |a| Circle::from_args(a).map(Shape::Circle) },
    ShapeKind { name: "ellipse", keys: Ellipse::KEYS, build: |a| Ellipse::from_args(a).map(Shape::Ellipse) },
    ShapeKind { name: "path", keys: PathShape::KEYS, build: |a| PathShape::from_args(a).map(Shape::Path) },
    ShapeKind { name: "text", keys: TextShape::KEYS, build: |a| TextShape::from_args(a).map(Shape::Text) },
];

fn find_kind(name: &str) -> Option<&'static ShapeKind> {
    SHAPES.iter().find(|k| k.name == name)
}

/// Names accepted as shape functions, in table order.
pub fn shape_names() -> impl Iterator<Item = &'static str> {
    SHAPES.iter().map(|k| k.name)
}

impl Shape {
    /// Converts a parsed call into a typed shape.
    ///
    /// Unknown argument keys are ignored; an unknown function name, or a value
    /// of the wrong kind for a known key, is an error.
    pub fn from_call(call: &Call) -> Result<Shape, ShapeError> {
        let kind = find_kind(&call.name)
            .ok_or_else(|| ShapeError::UnknownShape { name: call.name.clone() })?;
        let args = Args::new(call);
        args.warn_unknown(kind.keys);
        (kind.build)(&args)
    }

    /// Parses a single `name(...)` expression.
    pub fn parse(src: &str) -> Result<Shape, ShapeError> {
        let call = contour_lang::parse_call(src)?;
        Shape::from_call(&call)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::HLine(_) => "hline",
            Shape::VLine(_) => "vline",
            Shape::Line(_) => "line",
            Shape::Rect(_) => "rect",
            Shape::Circle(_) => "circle",
            Shape::Ellipse(_) => "ellipse",
            Shape::Path(_) => "path",
            Shape::Text(_) => "text",
        }
    }

    /// Emits the canvas calls for this shape into the current path.
    ///
    /// `size` is the widget size that fractional lengths resolve against.
    /// Callers issue `begin_path` first.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, size: Vec2) {
        match self {
            Shape::HLine(s) => s.draw(canvas, size),
            Shape::VLine(s) => s.draw(canvas, size),
            Shape::Line(s) => s.draw(canvas, size),
            Shape::Rect(s) => s.draw(canvas, size),
            Shape::Circle(s) => s.draw(canvas, size),
            Shape::Ellipse(s) => s.draw(canvas, size),
            Shape::Path(s) => s.draw(canvas, size),
            Shape::Text(s) => s.draw(canvas, size),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use contour_engine::paint::Color;
    use contour_engine::scene::{DrawCmd, DrawList};

    use super::*;

    const SIZE: Vec2 = Vec2::new(200.0, 100.0);

    fn draw(src: &str) -> Vec<DrawCmd> {
        let mut list = DrawList::new();
        Shape::parse(src).unwrap().draw(&mut list, SIZE);
        list.items().to_vec()
    }

    fn stroke_cmds(color: Color, width: f32) -> [DrawCmd; 3] {
        [DrawCmd::SetStrokeColor(color), DrawCmd::SetLineWidth(width), DrawCmd::Stroke]
    }

    #[test]
    fn every_table_name_builds_with_defaults() {
        for name in shape_names() {
            let shape = Shape::parse(&format!("{}()", name)).unwrap();
            assert_eq!(shape.name(), name);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            Shape::parse("star()"),
            Err(ShapeError::UnknownShape { name: "star".into() })
        );
    }

    #[test]
    fn syntax_error_surfaces_as_parse() {
        assert!(matches!(Shape::parse("rect("), Err(ShapeError::Parse(_))));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert!(Shape::parse("rect(colour=red)").is_ok());
    }

    #[test]
    fn hline_defaults_span_the_middle() {
        let mut expected = vec![DrawCmd::MoveTo { x: 0.0, y: 50.0 }, DrawCmd::LineTo { x: 200.0, y: 50.0 }];
        expected.extend(stroke_cmds(Color::black(), 1.0));
        assert_eq!(draw("hline()"), expected);
    }

    #[test]
    fn vline_with_pixels_and_style() {
        let mut expected = vec![DrawCmd::MoveTo { x: 20.0, y: 0.0 }, DrawCmd::LineTo { x: 20.0, y: 100.0 }];
        expected.extend(stroke_cmds(Color::rgb(0xff, 0, 0), 3.0));
        assert_eq!(draw("vline(x=20, stroke=#f00, lw=3)"), expected);
    }

    #[test]
    fn dashed_hline() {
        let cmds = draw("hline(y=10, w=20, on=5, off=5)");
        assert_eq!(
            &cmds[..4],
            &[
                DrawCmd::MoveTo { x: 0.0, y: 10.0 },
                DrawCmd::LineTo { x: 5.0, y: 10.0 },
                DrawCmd::MoveTo { x: 10.0, y: 10.0 },
                DrawCmd::LineTo { x: 15.0, y: 10.0 },
            ]
        );
        assert_eq!(cmds.len(), 4 + 3);
    }

    #[test]
    fn line_defaults_are_the_diagonal() {
        let cmds = draw("line(stroke=none)");
        assert_eq!(
            cmds,
            vec![DrawCmd::MoveTo { x: 0.0, y: 0.0 }, DrawCmd::LineTo { x: 200.0, y: 100.0 }]
        );
    }

    #[test]
    fn rect_radius_relative_to_own_short_side() {
        let cmds = draw("rect(x=10, y=10, w=0.5, h=40, r=0.25, stroke=none)");
        assert_eq!(
            cmds,
            vec![
                DrawCmd::RoundedRect { x: 10.0, y: 10.0, w: 100.0, h: 40.0, r: 10.0 },
                DrawCmd::SetFillColor(Color::white()),
                DrawCmd::Fill,
            ]
        );
    }

    #[test]
    fn rect_fills_before_stroking() {
        let cmds = draw("rect(fill=#00ff00, stroke=#0000ff, lw=2)");
        let mut expected = vec![
            DrawCmd::RoundedRect { x: 0.0, y: 0.0, w: 200.0, h: 100.0, r: 0.0 },
            DrawCmd::SetFillColor(Color::rgb(0, 0xff, 0)),
            DrawCmd::Fill,
        ];
        expected.extend(stroke_cmds(Color::rgb(0, 0, 0xff), 2.0));
        assert_eq!(cmds, expected);
    }

    #[test]
    fn circle_radius_relative_to_widget_short_side() {
        let cmds = draw("circle(fill=none, stroke=none)");
        assert_eq!(
            cmds,
            vec![DrawCmd::Arc { cx: 100.0, cy: 50.0, r: 50.0, start: 0.0, end: PI * 2.0, ccw: false }]
        );
    }

    #[test]
    fn ellipse_radii_per_axis() {
        let cmds = draw("ellipse(rx=0.25, ry=0.25, fill=none, stroke=none)");
        assert_eq!(cmds, vec![DrawCmd::Ellipse { cx: 100.0, cy: 50.0, rx: 50.0, ry: 25.0 }]);
    }

    #[test]
    fn path_is_fitted_and_centred() {
        let cmds = draw("path(w=50, h=50, data=M 0 0 L 50 50, fill=none, stroke=none)");
        assert_eq!(cmds[0], DrawCmd::Save);
        // 200x100 widget, 50x50 box: scale 2, centred horizontally.
        assert_eq!(cmds[1], DrawCmd::Translate { x: 50.0, y: 0.0 });
        assert_eq!(cmds[2], DrawCmd::Scale { sx: 2.0, sy: 2.0 });
        assert_eq!(cmds[3], DrawCmd::MoveTo { x: 0.0, y: 0.0 });
        assert_eq!(cmds[4], DrawCmd::LineTo { x: 50.0, y: 50.0 });
        assert_eq!(cmds.last(), Some(&DrawCmd::Restore));
    }

    #[test]
    fn text_lifts_origin_translation() {
        let mut list = DrawList::with_origin(Vec2::new(7.0, 9.0));
        Shape::parse(r#"text(text="hi, there", size=12, color=#336699)"#)
            .unwrap()
            .draw(&mut list, SIZE);
        assert_eq!(
            list.items(),
            &[
                DrawCmd::Translate { x: -7.0, y: -9.0 },
                DrawCmd::SetFontSize(12.0),
                DrawCmd::SetTextColor(Color::rgb(0x33, 0x66, 0x99)),
                DrawCmd::DrawText {
                    text: "hi, there".into(),
                    rect: contour_engine::coords::Rect::new(0.0, 0.0, 200.0, 100.0),
                },
                DrawCmd::Translate { x: 7.0, y: 9.0 },
            ]
        );
    }

    #[test]
    fn empty_text_draws_nothing() {
        assert!(draw("text()").is_empty());
    }

    #[test]
    fn text_without_colour_draws_nothing() {
        assert!(draw("text(text=hello, color=none)").is_empty());
    }

    #[test]
    fn path_with_empty_box_draws_nothing() {
        assert!(draw("path(w=0, h=0, data=M 0 0 L 10 10)").is_empty());
    }

    #[test]
    fn path_without_drawable_segments_draws_nothing() {
        assert!(draw("path(data=M 0 0)").is_empty());
        let list = ShapeList::try_parse("path(data=M 5 5); hline()").unwrap();
        assert_eq!(list.len(), 2);
    }
}
