use contour_engine::canvas::Canvas;
use contour_engine::coords::Vec2;

use crate::error::ShapeError;

use super::Shape;

/// The parsed form of a whole shape description.
///
/// A description is either a single shape or a composite (`a(); b()`).
/// The distinction matters at paint time: composite entries each start a
/// fresh path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeList {
    shapes: Vec<Shape>,
    composite: bool,
}

impl ShapeList {
    /// Parses a description into shapes.
    ///
    /// Returns the list together with the first error, if any. For a
    /// composite the list holds every shape before the one that failed,
    /// whether it failed on syntax or on its arguments. A failing single
    /// shape yields an empty list.
    pub fn parse(src: &str) -> (ShapeList, Option<ShapeError>) {
        let (program, syntax_err) = contour_lang::parse_program_partial(src);
        let composite = program.is_composite();

        let mut shapes = Vec::with_capacity(program.calls.len());
        let mut err = None;
        for call in &program.calls {
            match Shape::from_call(call) {
                Ok(shape) => shapes.push(shape),
                Err(e) => {
                    err = Some(e);
                    break;
                }
            }
        }
        // Syntax errors lie after every parsed call, so they rank second.
        let err = err.or_else(|| syntax_err.map(ShapeError::from));

        if err.is_some() && !composite {
            shapes.clear();
        }
        (ShapeList { shapes, composite }, err)
    }

    /// Strict variant of [`parse`](Self::parse): any error discards everything.
    pub fn try_parse(src: &str) -> Result<ShapeList, ShapeError> {
        match ShapeList::parse(src) {
            (list, None) => Ok(list),
            (_, Some(e)) => Err(e),
        }
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[inline]
    pub fn is_composite(&self) -> bool {
        self.composite
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Draws every shape in order against a widget of `size`.
    ///
    /// Composite entries are each preceded by `begin_path`; a single shape
    /// draws into the path the caller already began.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, size: Vec2) {
        for shape in &self.shapes {
            if self.composite {
                canvas.begin_path();
            }
            shape.draw(canvas, size);
        }
    }
}

#[cfg(test)]
mod tests {
    use contour_engine::scene::{DrawCmd, DrawList};

    use super::*;

    #[test]
    fn single_shape() {
        let list = ShapeList::try_parse("circle()").unwrap();
        assert_eq!(list.len(), 1);
        assert!(!list.is_composite());
    }

    #[test]
    fn composite_keeps_order() {
        let list = ShapeList::try_parse("rect(); hline(); text(text=a)").unwrap();
        let names: Vec<_> = list.shapes().iter().map(Shape::name).collect();
        assert_eq!(names, ["rect", "hline", "text"]);
        assert!(list.is_composite());
    }

    #[test]
    fn composite_stops_at_first_bad_shape() {
        let (list, err) = ShapeList::parse("rect(); star(); circle()");
        assert_eq!(list.len(), 1);
        assert_eq!(list.shapes()[0].name(), "rect");
        assert_eq!(err, Some(ShapeError::UnknownShape { name: "star".into() }));
    }

    #[test]
    fn bad_single_shape_yields_nothing() {
        let (list, err) = ShapeList::parse("rect(w=wide)");
        assert!(list.is_empty());
        assert!(matches!(err, Some(ShapeError::InvalidNumber { .. })));
    }

    #[test]
    fn composite_keeps_shapes_before_a_syntax_error() {
        let (list, err) = ShapeList::parse(r#"rect(); circle(); text(text="oops)"#);
        let names: Vec<_> = list.shapes().iter().map(Shape::name).collect();
        assert_eq!(names, ["rect", "circle"]);
        assert!(matches!(err, Some(ShapeError::Parse(ref e)) if e.col == 29));
        assert!(ShapeList::try_parse("rect(); circle(").is_err());
    }

    #[test]
    fn single_shape_syntax_error_yields_nothing() {
        let (list, err) = ShapeList::parse("rect(x=1");
        assert!(list.is_empty());
        assert!(!list.is_composite());
        assert!(matches!(err, Some(ShapeError::Parse(_))));
    }

    #[test]
    fn composite_begins_a_path_per_shape() {
        let list = ShapeList::try_parse("line(stroke=none); line(stroke=none, x1=1.5)").unwrap();
        let mut dl = DrawList::new();
        list.draw(&mut dl, Vec2::new(10.0, 10.0));
        let begins = dl.items().iter().filter(|c| **c == DrawCmd::BeginPath).count();
        assert_eq!(begins, 2);
        assert_eq!(dl.items()[0], DrawCmd::BeginPath);
    }

    #[test]
    fn single_shape_does_not_begin_a_path() {
        let list = ShapeList::try_parse("line(stroke=none)").unwrap();
        let mut dl = DrawList::new();
        list.draw(&mut dl, Vec2::new(10.0, 10.0));
        assert!(!dl.items().contains(&DrawCmd::BeginPath));
    }
}
