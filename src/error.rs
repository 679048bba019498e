use thiserror::Error;

/// Errors surfaced by binding or evaluating a builtin math function.
///
/// Mathematically undefined inputs (`LOG(-1)`, `ASIN(2)`) are not errors;
/// they evaluate to `Datum::Null`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Bind error: {0}")]
    BindError(String),

    #[error("{0}")]
    CoercionError(String),

    #[error("{0}")]
    OverflowError(String),

    #[error("Evaluation error: {0}")]
    EvalError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

pub type MathResult<T> = Result<T, MathError>;

impl MathError {
    /// Truncation of a string that was required to be numeric.
    pub fn truncated(target: &str, input: &str) -> Self {
        MathError::CoercionError(format!("Truncated incorrect {} value: '{}'", target, input))
    }

    /// Result magnitude outside what `kind` can represent.
    pub fn out_of_range(kind: &str, expr: impl std::fmt::Display) -> Self {
        MathError::OverflowError(format!("{} value is out of range in '{}'", kind, expr))
    }

    pub fn wrong_arg_count(name: &str, actual: usize) -> Self {
        MathError::BindError(format!(
            "Incorrect parameter count in the call to native function '{}' (got {})",
            name, actual
        ))
    }

    pub fn is_truncation(&self) -> bool {
        matches!(self, MathError::CoercionError(_))
    }
}

impl serde::Serialize for MathError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
