use contour_engine::canvas::Canvas;
use contour_engine::coords::Rect;

use crate::error::{PropError, ShapeError};
use crate::event::{EventResult, UiEvent};
use crate::shape::ShapeList;

// ── Widget trait ──────────────────────────────────────────────────────────

/// A dynamically typed property value, as exchanged with the host toolkit.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Str(String),
    Number(f64),
    Bool(bool),
}

impl PropValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Str(s.to_string())
    }
}

/// What the host needs from a widget it creates through a factory.
pub trait Widget: 'static {
    /// Type name the widget was registered under.
    fn type_name(&self) -> &'static str;

    /// Position relative to the parent, and size.
    fn bounds(&self) -> Rect;

    fn set_bounds(&mut self, bounds: Rect);

    /// Paints the widget itself (not children) onto `canvas`.
    fn paint_self(&self, canvas: &mut dyn Canvas);

    /// Returns `None` when the widget has no property called `name`.
    fn get_prop(&self, name: &str) -> Option<PropValue>;

    fn set_prop(&mut self, name: &str, value: &PropValue) -> Result<(), PropError>;

    /// Properties copied when the host clones the widget.
    fn clone_properties(&self) -> &'static [&'static str] {
        &[]
    }

    /// Properties the host saves when serializing a UI description.
    fn persistent_properties(&self) -> &'static [&'static str] {
        &[]
    }

    /// Route an input event. Leaf widgets that ignore input keep the default.
    fn on_event(&mut self, _event: &UiEvent) -> EventResult {
        EventResult::Ignored
    }
}

// ── ShapeWidget ───────────────────────────────────────────────────────────

pub const WIDGET_TYPE_SHAPE: &str = "shape";
pub const PROP_VALUE: &str = "value";

/// Description a freshly created shape widget starts with.
pub const DEFAULT_VALUE: &str = "hline()";

const SHAPE_PROPERTIES: &[&str] = &[PROP_VALUE];

/// Displays basic shapes described by its `value` property.
///
/// ```
/// use contour_engine::coords::Rect;
/// use contour_engine::scene::DrawList;
/// use contour_ui::prelude::*;
///
/// let mut shape = ShapeWidget::new(Rect::new(0.0, 0.0, 100.0, 40.0));
/// shape.set_value("rect(r=0.2, fill=#336699); hline(on=4, off=2)").unwrap();
///
/// let mut canvas = DrawList::new();
/// shape.paint_self(&mut canvas);
/// assert!(!canvas.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ShapeWidget {
    bounds: Rect,
    value: String,
    shapes: ShapeList,
}

impl ShapeWidget {
    /// Creates a widget holding [`DEFAULT_VALUE`].
    ///
    /// The default is parsed right away, so a fresh widget paints a
    /// horizontal line through its middle before any value is set.
    pub fn new(bounds: Rect) -> Self {
        let mut widget = Self { bounds, value: String::new(), shapes: ShapeList::default() };
        // The default description is known-good.
        let _ = widget.set_value(DEFAULT_VALUE);
        widget
    }

    /// The description exactly as last set.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn shapes(&self) -> &ShapeList {
        &self.shapes
    }

    /// Stores `value` and re-parses it.
    ///
    /// The string is kept even when it fails to parse, so `value()` always
    /// reflects what was set. On failure the widget draws whatever
    /// [`ShapeList::parse`] salvaged, which is nothing unless `value` is a
    /// composite whose leading shapes were valid.
    pub fn set_value(&mut self, value: impl Into<String>) -> Result<(), ShapeError> {
        self.value = value.into();
        let (shapes, err) = ShapeList::parse(&self.value);
        self.shapes = shapes;

        match err {
            None => {
                log::debug!("shape: {} shape(s) from {:?}", self.shapes.len(), self.value);
                Ok(())
            }
            Some(e) => {
                log::warn!("shape: {} (kept {} shape(s))", e, self.shapes.len());
                Err(e)
            }
        }
    }
}

impl Widget for ShapeWidget {
    fn type_name(&self) -> &'static str {
        WIDGET_TYPE_SHAPE
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn paint_self(&self, canvas: &mut dyn Canvas) {
        if self.shapes.is_empty() {
            return;
        }

        let origin = canvas.origin();
        canvas.save();
        canvas.translate(origin.x, origin.y);
        canvas.begin_path();

        self.shapes.draw(&mut *canvas, self.bounds.size);

        canvas.restore();
    }

    fn get_prop(&self, name: &str) -> Option<PropValue> {
        (name == PROP_VALUE).then(|| PropValue::Str(self.value.clone()))
    }

    fn set_prop(&mut self, name: &str, value: &PropValue) -> Result<(), PropError> {
        if name != PROP_VALUE {
            return Err(PropError::NotFound(name.to_string()));
        }
        let Some(s) = value.as_str() else {
            return Err(PropError::TypeMismatch { name: name.to_string(), expected: "string" });
        };
        self.set_value(s)?;
        Ok(())
    }

    fn clone_properties(&self) -> &'static [&'static str] {
        SHAPE_PROPERTIES
    }

    fn persistent_properties(&self) -> &'static [&'static str] {
        SHAPE_PROPERTIES
    }
}
