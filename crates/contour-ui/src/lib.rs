//! Contour UI: the shape widget.
//!
//! A [`ShapeWidget`](widget::ShapeWidget) holds a shape description such as
//!
//! ```text
//! rect(x=0, y=0, w=1, h=1, r=0.1, fill=#fff, stroke=#000); hline(on=4, off=2)
//! ```
//!
//! and paints it by issuing calls against the host's [`Canvas`].
//!
//! # Pipeline
//!
//! 1. `contour-lang` parses the text into calls.
//! 2. [`shape::Shape::from_call`] looks the name up in the dispatch table
//!    and types every argument, applying per-shape defaults.
//! 3. At paint time each [`units::Length`] is resolved against the widget
//!    size: values in `[0, 1]` are fractions, others pixels.
//! 4. Lines go through the dashed-line rasterizer in [`dash`]; closed
//!    shapes go straight to the canvas. [`style`] applies fill and stroke.
//!
//! [`Canvas`]: contour_engine::canvas::Canvas

pub mod dash;
pub mod error;
pub mod event;
pub mod factory;
pub mod shape;
pub mod style;
pub mod units;
pub mod widget;

/// Everything a host integration needs. Import this in glue code.
pub mod prelude {
    pub use crate::error::{PropError, ShapeError};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::factory::{register_shape, supported_render_modes, WidgetFactory};
    pub use crate::shape::{Shape, ShapeList};
    pub use crate::widget::{PropValue, ShapeWidget, Widget, PROP_VALUE, WIDGET_TYPE_SHAPE};

    // Re-export the engine primitives everyone needs.
    pub use contour_engine::canvas::{Canvas, VgCanvas};
    pub use contour_engine::coords::{Rect, Vec2};
    pub use contour_engine::paint::Color;
}
