//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - describe canvas calls as plain data (`DrawCmd`)
//! - record them in issue order (`DrawList`, a `Canvas` implementation)

mod cmd;
mod list;

pub use cmd::DrawCmd;
pub use list::DrawList;
