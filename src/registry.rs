//! Process-wide table of math builtins, built once and never mutated.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::functions::{Coercion, FunctionClass, MathFunction};

const NONE: &[Coercion] = &[];
const REAL: &[Coercion] = &[Coercion::Real];
const REAL_REAL: &[Coercion] = &[Coercion::Real, Coercion::Real];
const NUMERIC: &[Coercion] = &[Coercion::Numeric];
const NUMERIC_INT: &[Coercion] = &[Coercion::Numeric, Coercion::Int];
const STR: &[Coercion] = &[Coercion::Str];
const STR_INT_INT: &[Coercion] = &[Coercion::Str, Coercion::Int, Coercion::Int];
const INT: &[Coercion] = &[Coercion::Int];

const BUILTINS: &[FunctionClass] = &[
    FunctionClass::new("abs", MathFunction::Abs, 1, 1, NUMERIC),
    FunctionClass::new("ceil", MathFunction::Ceil, 1, 1, NUMERIC),
    FunctionClass::new("ceiling", MathFunction::Ceil, 1, 1, NUMERIC),
    FunctionClass::new("floor", MathFunction::Floor, 1, 1, NUMERIC),
    FunctionClass::new("exp", MathFunction::Exp, 1, 1, REAL),
    FunctionClass::new("ln", MathFunction::Log, 1, 1, REAL),
    FunctionClass::new("log", MathFunction::Log, 1, 2, REAL_REAL),
    FunctionClass::new("log2", MathFunction::Log2, 1, 1, REAL),
    FunctionClass::new("log10", MathFunction::Log10, 1, 1, REAL),
    FunctionClass::new("pow", MathFunction::Pow, 2, 2, REAL_REAL),
    FunctionClass::new("power", MathFunction::Pow, 2, 2, REAL_REAL),
    FunctionClass::new("round", MathFunction::Round, 1, 2, NUMERIC_INT),
    FunctionClass::new("truncate", MathFunction::Truncate, 1, 2, NUMERIC_INT),
    FunctionClass::new("crc32", MathFunction::Crc32, 1, 1, STR),
    FunctionClass::new("conv", MathFunction::Conv, 3, 3, STR_INT_INT),
    FunctionClass::new("sign", MathFunction::Sign, 1, 1, REAL),
    FunctionClass::new("degrees", MathFunction::Degrees, 1, 1, REAL),
    FunctionClass::new("radians", MathFunction::Radians, 1, 1, REAL),
    FunctionClass::new("sin", MathFunction::Sin, 1, 1, REAL),
    FunctionClass::new("cos", MathFunction::Cos, 1, 1, REAL),
    FunctionClass::new("tan", MathFunction::Tan, 1, 1, REAL),
    FunctionClass::new("cot", MathFunction::Cot, 1, 1, REAL),
    FunctionClass::new("asin", MathFunction::Asin, 1, 1, REAL),
    FunctionClass::new("acos", MathFunction::Acos, 1, 1, REAL),
    FunctionClass::new("atan", MathFunction::Atan, 1, 2, REAL_REAL),
    FunctionClass::new("atan2", MathFunction::Atan, 2, 2, REAL_REAL),
    FunctionClass::new("rand", MathFunction::Rand, 0, 1, INT),
    FunctionClass::new("pi", MathFunction::Pi, 0, 0, NONE),
    FunctionClass::new("sqrt", MathFunction::Sqrt, 1, 1, REAL),
];

static REGISTRY: Lazy<FunctionRegistry> = Lazy::new(FunctionRegistry::builtin);

/// Immutable name -> `FunctionClass` mapping. Names are case-insensitive.
#[derive(Debug)]
pub struct FunctionRegistry {
    classes: HashMap<String, FunctionClass>,
}

impl FunctionRegistry {
    fn builtin() -> Self {
        let classes = BUILTINS
            .iter()
            .map(|class| (class.name.to_uppercase(), *class))
            .collect();
        Self { classes }
    }

    pub fn get(&self, name: &str) -> Option<&FunctionClass> {
        self.classes.get(&name.to_uppercase())
    }

    /// Registered names in upper case, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.classes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

pub fn registry() -> &'static FunctionRegistry {
    &REGISTRY
}

pub fn lookup(name: &str) -> Option<&'static FunctionClass> {
    registry().get(name)
}
