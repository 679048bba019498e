//! MySQL-compatible builtin math functions for a SQL expression evaluator.
//!
//! ```
//! use sqlmath::{registry, Datum, EvalContext, Expression};
//!
//! let ctx = EvalContext::new();
//! let class = registry::lookup("ROUND").unwrap();
//! let mut round = class
//!     .get_function(vec![Expression::constant(1.298), Expression::constant(1i64)], &ctx)
//!     .unwrap();
//! assert_eq!(round.eval(None).unwrap().datum, Datum::Float64(1.3));
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod datum;
pub mod error;
pub mod expression;
pub mod functions;
pub mod numeric;
pub mod registry;

pub use config::EngineConfig;
pub use context::{EvalContext, Evaluated};
pub use datum::{Datum, DatumKind, Duration, Time, TimeType};
pub use error::{MathError, MathResult};
pub use expression::{Expression, Row};
pub use functions::{BoundFunction, Coercion, FunctionClass, MathFunction};
pub use registry::{lookup, registry, FunctionRegistry};
