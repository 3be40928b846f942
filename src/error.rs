use std::num::ParseIntError;

#[derive(Debug)]
pub enum ResolveError {
    /// The stored value for `name` is neither decimal nor `0x`-prefixed hex.
    InvalidValue {
        name: String,
        value: String,
        source: ParseIntError,
    },
    UnknownFunction(String),
    ArgumentCount {
        function: String,
        got: usize,
        min: usize,
        max: usize,
    },
}

impl ResolveError {
    /// True for errors caused by how the function was called rather than by
    /// the database contents.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            ResolveError::UnknownFunction(_) | ResolveError::ArgumentCount { .. }
        )
    }
}

impl std::fmt::Display for ResolveError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ResolveError::InvalidValue { name, value, .. } => {
                write!(f, "{name}: invalid integer value {value:?}")
            }
            ResolveError::UnknownFunction(name) => write!(f, "unknown function {name:?}"),
            ResolveError::ArgumentCount {
                function,
                got,
                min,
                max,
            } => write!(
                f,
                "{function} takes {min} to {max} arguments, {got} given"
            ),
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResolveError::InvalidValue { source, .. } => Some(source),
            _ => None,
        }
    }
}
