//! Statement-scoped evaluation state and the evaluation result type.

use crate::datum::{Coerced, Datum};
use crate::error::{MathError, MathResult};

/// Per-statement flags read by the math builtins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvalContext {
    ignore_truncate: bool,
    rand_seed: Option<i64>,
}

impl EvalContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept partially numeric strings silently instead of reporting them.
    pub fn with_ignore_truncate(mut self, ignore: bool) -> Self {
        self.ignore_truncate = ignore;
        self
    }

    /// Seed used by `RAND()` calls that carry no seed argument.
    pub fn with_rand_seed(mut self, seed: Option<i64>) -> Self {
        self.rand_seed = seed;
        self
    }

    pub fn ignore_truncate(&self) -> bool {
        self.ignore_truncate
    }

    pub fn rand_seed(&self) -> Option<i64> {
        self.rand_seed
    }

    /// Truncation is a hard error unless the statement tolerates it.
    pub fn strict<T>(&self, coerced: Coerced<T>, target: &str) -> MathResult<T> {
        match coerced {
            Ok(v) => Ok(v),
            Err(t) if self.ignore_truncate => Ok(t.partial),
            Err(t) => Err(t.into_error(target)),
        }
    }

    /// Truncation keeps the partial value and, unless tolerated, reports
    /// the error alongside it.
    pub fn lenient<T>(&self, coerced: Coerced<T>, target: &str) -> (T, Option<MathError>) {
        match coerced {
            Ok(v) => (v, None),
            Err(t) if self.ignore_truncate => (t.partial, None),
            Err(t) => {
                let err = MathError::truncated(target, &t.input);
                (t.partial, Some(err))
            }
        }
    }

    /// As `lenient`, but input with no numeric prefix at all is an error
    /// unless truncation is tolerated.
    pub fn lenient_prefix<T>(
        &self,
        coerced: Coerced<T>,
        target: &str,
    ) -> MathResult<(T, Option<MathError>)> {
        match coerced {
            Err(t) if !t.has_prefix && !self.ignore_truncate => Err(t.into_error(target)),
            other => Ok(self.lenient(other, target)),
        }
    }
}

/// Successful evaluation, possibly degraded.
///
/// `warning` is set when a value was produced from input that could only
/// be partly interpreted; callers must check it even though `datum` is
/// usable.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluated {
    pub datum: Datum,
    pub warning: Option<MathError>,
}

impl Evaluated {
    pub fn new(datum: impl Into<Datum>) -> Self {
        Self {
            datum: datum.into(),
            warning: None,
        }
    }

    pub fn null() -> Self {
        Self::new(Datum::Null)
    }

    pub fn with_warning(datum: impl Into<Datum>, warning: Option<MathError>) -> Self {
        Self {
            datum: datum.into(),
            warning,
        }
    }

    /// Keep an earlier warning when this result has none of its own.
    pub fn or_warning(mut self, warning: Option<MathError>) -> Self {
        if self.warning.is_none() {
            self.warning = warning;
        }
        self
    }

    pub fn is_degraded(&self) -> bool {
        self.warning.is_some()
    }

    /// Collapse into a plain result, treating a warning as failure.
    pub fn into_result(self) -> MathResult<Datum> {
        match self.warning {
            Some(err) => Err(err),
            None => Ok(self.datum),
        }
    }
}
