use std::collections::HashMap;
use std::fmt;

use contour_engine::coords::Rect;

use crate::widget::{ShapeWidget, Widget, WIDGET_TYPE_SHAPE};

/// Builds a widget of one type at the given bounds.
pub type WidgetCtor = fn(Rect) -> Box<dyn Widget>;

/// Render backends the shape widget is known to draw correctly on.
pub const SUPPORTED_RENDER_MODES: &str = "OpenGL|AGGE-BGR565|AGGE-BGRA8888|AGGE-MONO";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    AlreadyRegistered(String),
}

impl fmt::Display for FactoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactoryError::AlreadyRegistered(name) => {
                write!(f, "widget type {:?} is already registered", name)
            }
        }
    }
}

impl std::error::Error for FactoryError {}

/// Maps widget type names (as used in UI descriptions) to constructors.
#[derive(Default)]
pub struct WidgetFactory {
    ctors: HashMap<String, WidgetCtor>,
}

impl WidgetFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, type_name: impl Into<String>, ctor: WidgetCtor) -> Result<(), FactoryError> {
        let type_name = type_name.into();
        if self.ctors.contains_key(&type_name) {
            return Err(FactoryError::AlreadyRegistered(type_name));
        }
        log::debug!("widget factory: registered {:?}", type_name);
        self.ctors.insert(type_name, ctor);
        Ok(())
    }

    pub fn is_registered(&self, type_name: &str) -> bool {
        self.ctors.contains_key(type_name)
    }

    /// Creates a widget, or `None` if `type_name` was never registered.
    pub fn create(&self, type_name: &str, bounds: Rect) -> Option<Box<dyn Widget>> {
        let ctor = self.ctors.get(type_name)?;
        Some(ctor(bounds))
    }
}

fn create_shape(bounds: Rect) -> Box<dyn Widget> {
    Box::new(ShapeWidget::new(bounds))
}

/// Registers the shape widget under `"shape"`.
pub fn register_shape(factory: &mut WidgetFactory) -> Result<(), FactoryError> {
    factory.register(WIDGET_TYPE_SHAPE, create_shape)
}

/// Render backends the shape widget supports, `|`-separated.
pub fn supported_render_modes() -> &'static str {
    SUPPORTED_RENDER_MODES
}

#[cfg(test)]
mod tests {
    use crate::widget::{PropValue, DEFAULT_VALUE, PROP_VALUE};

    use super::*;

    #[test]
    fn creates_registered_shape() {
        let mut factory = WidgetFactory::new();
        register_shape(&mut factory).unwrap();
        assert!(factory.is_registered("shape"));

        let bounds = Rect::new(1.0, 2.0, 30.0, 40.0);
        let w = factory.create("shape", bounds).unwrap();
        assert_eq!(w.type_name(), "shape");
        assert_eq!(w.bounds(), bounds);
        assert_eq!(w.get_prop(PROP_VALUE), Some(PropValue::from(DEFAULT_VALUE)));
    }

    #[test]
    fn unknown_type_is_none() {
        assert!(WidgetFactory::new().create("shape", Rect::default()).is_none());
    }

    #[test]
    fn double_registration_is_rejected() {
        let mut factory = WidgetFactory::new();
        register_shape(&mut factory).unwrap();
        assert_eq!(
            register_shape(&mut factory),
            Err(FactoryError::AlreadyRegistered("shape".into()))
        );
    }

    #[test]
    fn render_modes_are_pipe_separated() {
        assert!(supported_render_modes().split('|').any(|m| m == "OpenGL"));
    }
}
