//! Paint model shared between shapes and canvases.
//!
//! Scope is deliberately small: a straight-alpha colour and its parser.
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
