//! Function classes and bound functions for the math builtins.
//!
//! A `FunctionClass` is the static descriptor of one builtin name: arity
//! and the coercion each argument position goes through. Binding it to
//! argument expressions yields a `BoundFunction` that is evaluated once per
//! row.
//!
//! Function families:
//! - arith: ABS, CEIL, FLOOR, SIGN, ROUND, TRUNCATE, EXP, LOG*, POW, SQRT, DEGREES, RADIANS
//! - trig: SIN, COS, TAN, COT, ASIN, ACOS, ATAN
//! - misc: CRC32, CONV, PI

mod arith;
mod misc;
mod trig;

use std::fmt;

use crate::context::{EvalContext, Evaluated};
use crate::datum::{Datum, DatumKind};
use crate::error::{MathError, MathResult};
use crate::expression::{Expression, Row};
use crate::numeric::MysqlRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathFunction {
    Abs,
    Ceil,
    Floor,
    Exp,
    Log,
    Log2,
    Log10,
    Pow,
    Round,
    Truncate,
    Crc32,
    Conv,
    Sign,
    Degrees,
    Radians,
    Sin,
    Cos,
    Tan,
    Cot,
    Asin,
    Acos,
    Atan,
    Rand,
    Pi,
    Sqrt,
}

/// What an argument position is coerced to before the function computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Double precision float.
    Real,
    /// Any number; decimals and integers keep their kind.
    Numeric,
    /// 64-bit signed integer (bases, digit counts, seeds).
    Int,
    /// String view of the value.
    Str,
}

impl Coercion {
    /// Declared argument kinds this coercion can take.
    pub fn accepts(self, kind: DatumKind) -> bool {
        match self {
            Coercion::Int => !kind.is_temporal(),
            Coercion::Real | Coercion::Numeric | Coercion::Str => true,
        }
    }
}

/// Static descriptor for one builtin name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionClass {
    pub name: &'static str,
    pub func: MathFunction,
    pub min_args: usize,
    pub max_args: usize,
    coercions: &'static [Coercion],
}

impl FunctionClass {
    pub const fn new(
        name: &'static str,
        func: MathFunction,
        min_args: usize,
        max_args: usize,
        coercions: &'static [Coercion],
    ) -> Self {
        Self {
            name,
            func,
            min_args,
            max_args,
            coercions,
        }
    }

    pub fn coercion(&self, position: usize) -> Coercion {
        self.coercions
            .get(position)
            .copied()
            .unwrap_or(Coercion::Real)
    }

    /// Validate `args` and bind them into an evaluable function.
    ///
    /// For `RAND(seed)` the seed is evaluated here, once, without a row.
    pub fn get_function(
        &self,
        mut args: Vec<Expression>,
        ctx: &EvalContext,
    ) -> MathResult<BoundFunction> {
        tracing::debug!("Binding {} with {} argument(s)", self.name, args.len());

        if args.len() < self.min_args || args.len() > self.max_args {
            return Err(MathError::wrong_arg_count(self.name, args.len()));
        }
        for (i, arg) in args.iter().enumerate() {
            let kind = arg.ret_type();
            if !self.coercion(i).accepts(kind) {
                return Err(MathError::BindError(format!(
                    "Illegal argument {} of type {} for function '{}'",
                    i + 1,
                    kind,
                    self.name
                )));
            }
        }

        let mut deterministic = true;
        let mut rng = None;
        if self.func == MathFunction::Rand {
            deterministic = args.first().map(Expression::is_constant).unwrap_or(false);
            let seed = match args.first_mut() {
                Some(seed_expr) => {
                    let seed = seed_expr.eval(None).map_err(|e| {
                        MathError::BindError(format!("RAND seed is not a constant: {}", e))
                    })?;
                    Some(ctx.strict(seed.datum.to_i64(), "INTEGER")?)
                }
                None => ctx.rand_seed(),
            };
            let seed = seed.unwrap_or_else(|| rand::random::<u32>() as i64);
            rng = Some(MysqlRng::new(seed));
        }

        let ret_type = return_type(self.func, &args);
        Ok(BoundFunction {
            class: *self,
            args,
            ret_type,
            deterministic,
            ctx: ctx.clone(),
            rng,
        })
    }
}

fn return_type(func: MathFunction, args: &[Expression]) -> DatumKind {
    match func {
        MathFunction::Abs
        | MathFunction::Ceil
        | MathFunction::Floor
        | MathFunction::Round
        | MathFunction::Truncate => match args.first().map(Expression::ret_type) {
            Some(kind @ (DatumKind::Int64 | DatumKind::Uint64 | DatumKind::Decimal)) => kind,
            _ => DatumKind::Float64,
        },
        MathFunction::Sign => DatumKind::Int64,
        MathFunction::Crc32 => DatumKind::Uint64,
        MathFunction::Conv => DatumKind::String,
        _ => DatumKind::Float64,
    }
}

/// A function bound to its argument expressions.
///
/// Evaluation takes `&mut self` because `RAND` advances its generator.
#[derive(Debug, Clone)]
pub struct BoundFunction {
    class: FunctionClass,
    args: Vec<Expression>,
    ret_type: DatumKind,
    deterministic: bool,
    ctx: EvalContext,
    rng: Option<MysqlRng>,
}

impl BoundFunction {
    pub fn name(&self) -> &'static str {
        self.class.name
    }

    pub fn args(&self) -> &[Expression] {
        &self.args
    }

    pub fn ret_type(&self) -> DatumKind {
        self.ret_type
    }

    pub fn is_deterministic(&self) -> bool {
        self.deterministic
    }

    pub fn eval(&mut self, row: Option<&Row>) -> MathResult<Evaluated> {
        let mut warning = None;
        let mut values = Vec::with_capacity(self.args.len());
        for arg in self.args.iter_mut() {
            let evaluated = arg.eval(row)?;
            if warning.is_none() {
                warning = evaluated.warning;
            }
            values.push(evaluated.datum);
        }

        let call = Call {
            name: self.class.name,
            args: &values,
            ctx: &self.ctx,
        };
        let result = match self.class.func {
            MathFunction::Abs => arith::abs(&call),
            MathFunction::Ceil => arith::ceil(&call),
            MathFunction::Floor => arith::floor(&call),
            MathFunction::Exp => arith::exp(&call),
            MathFunction::Log => arith::log(&call),
            MathFunction::Log2 => arith::log2(&call),
            MathFunction::Log10 => arith::log10(&call),
            MathFunction::Pow => arith::pow(&call),
            MathFunction::Round => arith::round(&call),
            MathFunction::Truncate => arith::truncate(&call),
            MathFunction::Sign => arith::sign(&call),
            MathFunction::Sqrt => arith::sqrt(&call),
            MathFunction::Degrees => arith::degrees(&call),
            MathFunction::Radians => arith::radians(&call),
            MathFunction::Sin => trig::sin(&call),
            MathFunction::Cos => trig::cos(&call),
            MathFunction::Tan => trig::tan(&call),
            MathFunction::Cot => trig::cot(&call),
            MathFunction::Asin => trig::asin(&call),
            MathFunction::Acos => trig::acos(&call),
            MathFunction::Atan => trig::atan(&call),
            MathFunction::Crc32 => misc::crc32(&call),
            MathFunction::Conv => misc::conv(&call),
            MathFunction::Pi => misc::pi(),
            MathFunction::Rand => match self.rng.as_mut() {
                Some(rng) => Ok(Evaluated::new(rng.next_f64())),
                None => Err(MathError::EvalError(
                    "RAND evaluated without a generator".to_string(),
                )),
            },
        }?;
        Ok(result.or_warning(warning))
    }
}

impl fmt::Display for BoundFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.class.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        f.write_str(")")
    }
}

/// Evaluated arguments of one call plus the statement context.
pub(crate) struct Call<'a> {
    pub name: &'static str,
    pub args: &'a [Datum],
    pub ctx: &'a EvalContext,
}

impl Call<'_> {
    pub fn arg(&self, i: usize) -> &Datum {
        &self.args[i]
    }

    pub fn any_null(&self) -> bool {
        self.args.iter().any(Datum::is_null)
    }

    /// Float value of argument `i`; partial strings are errors.
    pub fn real(&self, i: usize) -> MathResult<f64> {
        self.ctx.strict(self.args[i].to_f64(), "DOUBLE")
    }

    /// Float value of argument `i`; partial strings produce a warning.
    pub fn real_lenient(&self, i: usize) -> (f64, Option<MathError>) {
        self.ctx.lenient(self.args[i].to_f64(), "DOUBLE")
    }

    /// As `real_lenient`, but a string with no numeric prefix is an error.
    pub fn real_prefixed(&self, i: usize) -> MathResult<(f64, Option<MathError>)> {
        self.ctx.lenient_prefix(self.args[i].to_f64(), "DOUBLE")
    }

    pub fn int(&self, i: usize) -> MathResult<i64> {
        self.ctx.strict(self.args[i].to_i64(), "INTEGER")
    }

    pub fn out_of_range(&self, kind: &str) -> MathError {
        let args: Vec<String> = self
            .args
            .iter()
            .map(|d| match d {
                Datum::String(s) => format!("'{}'", s),
                other => other.to_string(),
            })
            .collect();
        MathError::out_of_range(kind, format!("{}({})", self.name, args.join(", ")))
    }
}
