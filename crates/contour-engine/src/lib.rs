//! Contour engine crate.
//!
//! Owns the pieces every layer shares: geometry, colour, the canvas
//! traits a host implements, and a recording canvas.

pub mod canvas;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
