//! Lexer, parser, and AST for the **Contour shape-description language**.
//!
//! A description is one function-call expression, or several separated by `;`:
//!
//! ```text
//! rect(x=0, y=0, w=1, h=1, r=0.1, fill=#fff, stroke=#000)
//! hline(y=0.5, on=4, off=2); circle(r=0.25, fill=none)
//! ```
//!
//! Values are kept as text. Deciding what a number or colour means is the
//! job of the widget layer, which knows the defaults of every shape.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `Program`, `Call`, `Arg` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_program`, `parse_program_partial` and `parse_call` entry points |
//!
//! # Quick start
//!
//! ```rust
//! use contour_lang::parse_program;
//!
//! let prog = parse_program("rect(w=0.5, fill=#ff0000); vline()").unwrap();
//! assert!(prog.is_composite());
//! assert_eq!(prog.calls[0].name, "rect");
//! assert_eq!(prog.calls[0].arg("fill"), Some("#ff0000"));
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{Arg, Call, Program};
pub use error::ParseError;
pub use parser::{parse_call, parse_program, parse_program_partial};
