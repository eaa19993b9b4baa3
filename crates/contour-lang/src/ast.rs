/// A single `key=value` argument. Values are kept as text; typing happens
/// in the layer that knows what each shape expects.
#[derive(Debug, Clone, PartialEq)]
pub struct Arg {
    pub key: String,
    pub value: String,
}

/// One function-call expression: `name(key=value, ...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub name: String,
    pub args: Vec<Arg>,
}

impl Call {
    /// Returns the value bound to `key`. When a key repeats, the last one wins.
    pub fn arg(&self, key: &str) -> Option<&str> {
        self.args
            .iter()
            .rev()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    pub fn has_arg(&self, key: &str) -> bool {
        self.args.iter().any(|a| a.key == key)
    }
}

/// A whole shape description: one call, or several separated by `;`.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub calls: Vec<Call>,
    /// True when the source used the `;` list form, even with a single entry.
    pub composite: bool,
}

impl Program {
    #[inline]
    pub fn is_composite(&self) -> bool {
        self.composite
    }
}
