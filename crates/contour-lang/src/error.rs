use std::fmt;

/// A parse error from the shape-description language.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    /// 1-based column (in characters) where the error occurred.
    pub col: usize,
}

impl ParseError {
    pub(crate) fn new(msg: impl Into<String>, col: usize) -> Self {
        Self { message: msg.into(), col }
    }

    /// Renders `src` with a caret under the failing column.
    ///
    /// ```text
    /// rect(x=1) circle()
    ///           ^ expected ';' or end of input after ')', got Ident("circle")
    /// ```
    pub fn render(&self, src: &str) -> String {
        let pad = " ".repeat(self.col.saturating_sub(1));
        format!("{}\n{}^ {}", src, pad, self.message)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape parse error at column {}: {}", self.col, self.message)
    }
}

impl std::error::Error for ParseError {}
