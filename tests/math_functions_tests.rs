//! Math Builtin Tests
//!
//! Tests for every registered math function covering:
//! - Kind preservation (ABS, CEIL, FLOOR, ROUND, TRUNCATE)
//! - Domain edges that yield NULL (LOG, SQRT, ASIN, ACOS)
//! - Strict vs lenient handling of partially numeric strings
//! - Overflow errors (EXP, POW, COT, ABS)
//! - CONV, CRC32 and the seeded RAND stream

mod common;

use std::f64::consts::PI;

use common::{bind, bind_with, dec, eval, eval_with, value};
use sqlmath::{
    Datum, DatumKind, Duration, EvalContext, Expression, MathError, Row, Time,
};

fn null() -> Datum {
    Datum::Null
}

fn s(v: &str) -> Datum {
    Datum::from(v)
}

fn assert_error(name: &str, args: Vec<Datum>) {
    assert!(
        eval(name, args.clone()).is_err(),
        "{}({:?}) should fail",
        name,
        args
    );
}

fn assert_warns(name: &str, args: Vec<Datum>, expected: Datum) {
    let evaluated = eval(name, args.clone()).unwrap();
    assert_eq!(evaluated.datum, expected, "{}({:?})", name, args);
    assert!(
        evaluated.is_degraded(),
        "{}({:?}) should carry a warning",
        name,
        args
    );
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_abs() {
    assert_eq!(value("abs", vec![null()]), Datum::Null);
    assert_eq!(value("abs", vec![Datum::Int64(1)]), Datum::Int64(1));
    assert_eq!(value("abs", vec![Datum::Uint64(1)]), Datum::Uint64(1));
    assert_eq!(value("abs", vec![Datum::Int64(-1)]), Datum::Int64(1));
    assert_eq!(value("abs", vec![Datum::Float64(3.14)]), Datum::Float64(3.14));
    assert_eq!(value("abs", vec![Datum::Float64(-3.14)]), Datum::Float64(3.14));
    assert_eq!(value("abs", vec![dec("-0.50")]), dec("0.50"));
}

#[test]
fn test_abs_overflow() {
    let err = eval("abs", vec![Datum::Int64(i64::MIN)]).unwrap_err();
    assert!(matches!(err, MathError::OverflowError(_)));
}

#[test]
fn test_ceil() {
    assert_eq!(value("ceil", vec![null()]), Datum::Null);
    assert_eq!(value("ceil", vec![Datum::Int64(1)]), Datum::Int64(1));
    assert_eq!(value("ceil", vec![Datum::Float64(1.23)]), Datum::Float64(2.0));
    assert_eq!(value("ceil", vec![Datum::Float64(-1.23)]), Datum::Float64(-1.0));
    assert_eq!(value("ceil", vec![s("1.23")]), Datum::Float64(2.0));
    assert_eq!(value("ceiling", vec![s("-1.23")]), Datum::Float64(-1.0));
    assert_eq!(value("ceil", vec![dec("1.01")]), dec("2"));
}

#[test]
fn test_exp() {
    let cases = [
        (Datum::Int64(1), 2.718281828459045),
        (Datum::Float64(1.23), 3.4212295362896734),
        (Datum::Float64(-1.23), 0.2922925776808594),
        (Datum::Float64(-1.0), 0.36787944117144233),
        (Datum::Float64(0.0), 1.0),
        (s("1.23"), 3.4212295362896734),
        (s("-1.23"), 0.2922925776808594),
        (s("0"), 1.0),
    ];
    for (arg, expected) in cases {
        assert_eq!(value("exp", vec![arg]), Datum::Float64(expected));
    }
    assert_eq!(value("exp", vec![null()]), Datum::Null);
    assert_error("exp", vec![s("abce")]);
    assert_error("exp", vec![s("")]);
    assert!(matches!(
        eval("exp", vec![Datum::Int64(1000)]),
        Err(MathError::OverflowError(_))
    ));
}

#[test]
fn test_floor_ignoring_truncation() {
    let ctx = EvalContext::new().with_ignore_truncate(true);
    let cases = vec![
        (null(), Datum::Null),
        (Datum::Int64(1), Datum::Int64(1)),
        (Datum::Float64(1.23), Datum::Float64(1.0)),
        (Datum::Float64(-1.23), Datum::Float64(-2.0)),
        (s("1.23"), Datum::Float64(1.0)),
        (s("-1.23"), Datum::Float64(-2.0)),
        (s("-1.b23"), Datum::Float64(-1.0)),
        (s("abce"), Datum::Float64(0.0)),
        (
            Datum::Duration(Duration::from_hms(12, 59, 59)),
            Datum::Float64(125959.0),
        ),
        (
            Datum::Duration(Duration::from_hms(0, 12, 34)),
            Datum::Float64(1234.0),
        ),
        (
            Datum::Time(Time::from_ymd(2017, 7, 19).unwrap()),
            Datum::Float64(20170719000000.0),
        ),
    ];
    for (arg, expected) in cases {
        let result = eval_with("floor", vec![arg.clone()], &ctx).unwrap();
        assert_eq!(result.datum, expected, "floor({:?})", arg);
        assert!(!result.is_degraded());
    }
}

#[test]
fn test_floor_warns_on_partial_string() {
    assert_warns("floor", vec![s("-1.b23")], Datum::Float64(-1.0));
    assert_warns("floor", vec![s("abce")], Datum::Float64(0.0));
    assert_eq!(value("floor", vec![dec("-1.5")]), dec("-2"));
}

#[test]
fn test_floor_is_deterministic() {
    for arg in [
        Expression::typed_constant(0i64, DatumKind::Int64),
        Expression::typed_constant(12.34, DatumKind::Float64),
    ] {
        let f = sqlmath::lookup("floor")
            .unwrap()
            .get_function(vec![arg], &EvalContext::new())
            .unwrap();
        assert!(f.is_deterministic());
    }
}

#[test]
fn test_log() {
    assert_eq!(value("log", vec![null()]), Datum::Null);
    assert_eq!(value("log", vec![null(), null()]), Datum::Null);
    assert_eq!(
        value("log", vec![Datum::Int64(100)]),
        Datum::Float64(4.605170185988092)
    );
    assert_eq!(
        value("log", vec![Datum::Float64(100.0)]),
        Datum::Float64(4.605170185988092)
    );
    assert_eq!(
        value("log", vec![Datum::Int64(10), Datum::Int64(100)]),
        Datum::Float64(2.0)
    );
    assert_eq!(
        value("log", vec![Datum::Float64(0.5), Datum::Float64(0.25)]),
        Datum::Float64(2.0)
    );
    assert_eq!(value("log", vec![Datum::Float64(-1.0)]), Datum::Null);
    assert_eq!(value("log", vec![Datum::Int64(0)]), Datum::Null);
    assert_eq!(
        value("log", vec![Datum::Float64(1.0), Datum::Float64(2.0)]),
        Datum::Null
    );
    assert_error("log", vec![s("abc")]);
    assert_eq!(
        value("ln", vec![Datum::Int64(100)]),
        Datum::Float64(4.605170185988092)
    );
}

#[test]
fn test_log2_log10() {
    assert_eq!(value("log2", vec![null()]), Datum::Null);
    assert_eq!(value("log2", vec![Datum::Int64(16)]), Datum::Float64(4.0));
    assert_eq!(value("log2", vec![Datum::Float64(16.0)]), Datum::Float64(4.0));
    assert_eq!(
        value("log2", vec![Datum::Int64(5)]),
        Datum::Float64(2.321928094887362)
    );
    assert_eq!(value("log2", vec![Datum::Int64(-1)]), Datum::Null);
    assert_error("log2", vec![s("4abc")]);

    assert_eq!(value("log10", vec![null()]), Datum::Null);
    assert_eq!(value("log10", vec![Datum::Int64(100)]), Datum::Float64(2.0));
    assert_eq!(value("log10", vec![Datum::Float64(100.0)]), Datum::Float64(2.0));
    assert_eq!(
        value("log10", vec![Datum::Int64(101)]),
        Datum::Float64(2.0043213737826426)
    );
    assert_eq!(value("log10", vec![Datum::Int64(-1)]), Datum::Null);
    assert_error("log10", vec![s("100abc")]);
}

#[test]
fn test_pow() {
    let cases = [
        (1i64, 3.0, 1.0),
        (2, 2.0, 4.0),
        (4, 0.5, 2.0),
        (4, -2.0, 0.0625),
    ];
    for (x, y, expected) in cases {
        assert_eq!(
            value("pow", vec![Datum::Int64(x), Datum::Float64(y)]),
            Datum::Float64(expected)
        );
    }
    assert_eq!(
        value("power", vec![Datum::Int64(2), Datum::Int64(10)]),
        Datum::Float64(1024.0)
    );
}

#[test]
fn test_pow_failures() {
    assert_error("pow", vec![s("test"), s("test")]);
    assert_error("pow", vec![Datum::Int64(1), s("test")]);
    assert!(matches!(
        eval("pow", vec![Datum::Int64(10), Datum::Int64(700)]),
        Err(MathError::OverflowError(_))
    ));
    assert_eq!(value("pow", vec![null(), null()]), Datum::Null);
    assert_eq!(value("pow", vec![Datum::Int64(1), null()]), Datum::Null);
    assert_eq!(
        value("pow", vec![Datum::Int64(-8), Datum::Float64(0.5)]),
        Datum::Null
    );
}

#[test]
fn test_round() {
    let cases = vec![
        (vec![Datum::Float64(-1.23)], Datum::Float64(-1.0)),
        (vec![Datum::Float64(-1.23), Datum::Int64(0)], Datum::Float64(-1.0)),
        (vec![Datum::Float64(-1.58)], Datum::Float64(-2.0)),
        (vec![Datum::Float64(1.58)], Datum::Float64(2.0)),
        (vec![Datum::Float64(1.298), Datum::Int64(1)], Datum::Float64(1.3)),
        (vec![Datum::Float64(1.298)], Datum::Float64(1.0)),
        (vec![Datum::Float64(1.298), Datum::Int64(0)], Datum::Float64(1.0)),
        (vec![Datum::Float64(23.298), Datum::Int64(-1)], Datum::Float64(20.0)),
        (vec![dec("-1.23")], dec("-1")),
        (vec![dec("-1.23"), Datum::Int64(1)], dec("-1.2")),
        (vec![dec("-1.58")], dec("-2")),
        (vec![dec("1.58")], dec("2")),
        (vec![dec("1.58"), Datum::Int64(1)], dec("1.6")),
        (vec![dec("23.298"), Datum::Int64(-1)], dec("20")),
        (vec![null(), Datum::Int64(2)], Datum::Null),
        (vec![Datum::Float64(2.5), null()], Datum::Null),
        (vec![Datum::Int64(15), Datum::Int64(-1)], Datum::Int64(20)),
        (vec![Datum::Int64(-15), Datum::Int64(-1)], Datum::Int64(-20)),
    ];
    for (args, expected) in cases {
        assert_eq!(value("round", args.clone()), expected, "round({:?})", args);
    }
}

#[test]
fn test_truncate() {
    let cases = vec![
        (vec![Datum::Float64(-1.23), Datum::Int64(0)], Datum::Float64(-1.0)),
        (vec![Datum::Float64(1.58), Datum::Int64(0)], Datum::Float64(1.0)),
        (vec![Datum::Float64(1.298), Datum::Int64(1)], Datum::Float64(1.2)),
        (vec![Datum::Float64(123.2), Datum::Int64(-1)], Datum::Float64(120.0)),
        (vec![Datum::Float64(123.2), Datum::Int64(100)], Datum::Float64(123.2)),
        (vec![Datum::Float64(123.2), Datum::Int64(-100)], Datum::Float64(0.0)),
        (vec![Datum::Float64(f64::MAX), Datum::Int64(2)], Datum::Float64(f64::MAX)),
        (vec![Datum::Float64(0.9999999999999999), Datum::Int64(0)], Datum::Float64(0.0)),
        (vec![Datum::Float64(1.9999999999999998), Datum::Int64(0)], Datum::Float64(1.0)),
        (vec![dec("-1.23"), Datum::Int64(0)], dec("-1")),
        (vec![dec("-1.23"), Datum::Int64(1)], dec("-1.2")),
        (vec![dec("-11.23"), Datum::Int64(-1)], dec("-10")),
        (vec![dec("1.58"), Datum::Int64(0)], dec("1")),
        (vec![dec("1.58"), Datum::Int64(1)], dec("1.5")),
        (vec![dec("11.58"), Datum::Int64(-1)], dec("10")),
        (vec![dec("23.298"), Datum::Int64(-1)], dec("20")),
        (vec![dec("23.298"), Datum::Int64(-100)], dec("0")),
        (vec![dec("23.298"), Datum::Int64(100)], dec("23.298")),
        (vec![null(), Datum::Int64(2)], Datum::Null),
        (vec![Datum::Int64(1299), Datum::Int64(-2)], Datum::Int64(1200)),
    ];
    for (args, expected) in cases {
        assert_eq!(value("truncate", args.clone()), expected, "truncate({:?})", args);
    }
}

#[test]
fn test_round_and_truncate_are_idempotent() {
    let inputs = [0.29, 1.005, -2.675, 123.456, 1e-7, 98765.4321];
    for x in inputs {
        for d in [-2i64, 0, 1, 2, 3] {
            for name in ["round", "truncate"] {
                let once = value(name, vec![Datum::Float64(x), Datum::Int64(d)]);
                let twice = value(name, vec![once.clone(), Datum::Int64(d)]);
                assert_eq!(once, twice, "{}({}, {})", name, x, d);
            }
        }
    }
    assert_eq!(
        value("truncate", vec![Datum::Float64(0.29), Datum::Int64(2)]),
        Datum::Float64(0.29)
    );
}

#[test]
fn test_round_digits_are_strict() {
    assert_error("round", vec![Datum::Float64(1.5), s("x")]);
    let ctx = EvalContext::new().with_ignore_truncate(true);
    assert_eq!(
        eval_with("round", vec![Datum::Float64(1.55), s("1x")], &ctx)
            .unwrap()
            .datum,
        Datum::Float64(1.6)
    );
}

#[test]
fn test_sign() {
    assert_eq!(value("sign", vec![null()]), Datum::Null);
    assert_eq!(value("sign", vec![Datum::Int64(1)]), Datum::Int64(1));
    assert_eq!(value("sign", vec![Datum::Int64(0)]), Datum::Int64(0));
    assert_eq!(value("sign", vec![Datum::Int64(-1)]), Datum::Int64(-1));
    assert_eq!(value("sign", vec![Datum::Float64(0.4)]), Datum::Int64(1));
    assert_eq!(value("sign", vec![Datum::Float64(-0.4)]), Datum::Int64(-1));
    assert_eq!(value("sign", vec![s("1")]), Datum::Int64(1));
    assert_eq!(value("sign", vec![s("-1")]), Datum::Int64(-1));
    assert_eq!(
        value("sign", vec![Datum::Uint64(9223372036854775808)]),
        Datum::Int64(1)
    );
    assert_warns("sign", vec![s("1a")], Datum::Int64(1));
    assert_warns("sign", vec![s("-1a")], Datum::Int64(-1));
    assert_error("sign", vec![s("a")]);
    assert_error("sign", vec![s("")]);
}

#[test]
fn test_sign_without_digits_ignoring_truncation() {
    let ctx = EvalContext::new().with_ignore_truncate(true);
    let result = eval_with("sign", vec![s("a")], &ctx).unwrap();
    assert_eq!(result.datum, Datum::Int64(0));
    assert!(!result.is_degraded());
}

#[test]
fn test_sqrt() {
    assert_eq!(value("sqrt", vec![null()]), Datum::Null);
    assert_eq!(value("sqrt", vec![Datum::Int64(1)]), Datum::Float64(1.0));
    assert_eq!(value("sqrt", vec![Datum::Float64(4.0)]), Datum::Float64(2.0));
    assert_eq!(value("sqrt", vec![s("4")]), Datum::Float64(2.0));
    assert_eq!(value("sqrt", vec![s("9")]), Datum::Float64(3.0));
    assert_eq!(value("sqrt", vec![s("-16")]), Datum::Null);
}

#[test]
fn test_degrees() {
    assert_eq!(value("degrees", vec![null()]), Datum::Null);
    assert_eq!(value("degrees", vec![Datum::Int64(0)]), Datum::Float64(0.0));
    assert_eq!(
        value("degrees", vec![Datum::Int64(1)]),
        Datum::Float64(57.29577951308232)
    );
    assert_eq!(
        value("degrees", vec![Datum::Float64(1.0)]),
        Datum::Float64(57.29577951308232)
    );
    assert_eq!(value("degrees", vec![Datum::Float64(PI)]), Datum::Float64(180.0));
    assert_eq!(
        value("degrees", vec![Datum::Float64(-PI / 2.0)]),
        Datum::Float64(-90.0)
    );
    assert_eq!(
        value("degrees", vec![s("-2")]),
        Datum::Float64(-114.59155902616465)
    );
    assert_error("degrees", vec![s("")]);
    assert_error("degrees", vec![s("abc")]);
    assert_warns("degrees", vec![s("+1abc")], Datum::Float64(57.29577951308232));
}

#[test]
fn test_radians() {
    assert_eq!(value("radians", vec![null()]), Datum::Null);
    assert_eq!(value("radians", vec![Datum::Int64(0)]), Datum::Float64(0.0));
    assert_eq!(value("radians", vec![Datum::Float64(180.0)]), Datum::Float64(PI));
    assert_eq!(
        value("radians", vec![Datum::Int64(-360)]),
        Datum::Float64(-2.0 * PI)
    );
    assert_eq!(value("radians", vec![s("180")]), Datum::Float64(PI));
    assert_error("radians", vec![s("notNum")]);
}

#[test]
fn test_pi() {
    assert_eq!(value("pi", vec![]), Datum::Float64(PI));
}

// ============================================================================
// Trigonometry
// ============================================================================

#[test]
fn test_sin_cos_tan() {
    for x in [0.0, PI, -PI, PI / 2.0, -PI / 2.0, PI / 6.0, -PI / 6.0, PI * 2.0] {
        assert_eq!(value("sin", vec![Datum::Float64(x)]), Datum::Float64(x.sin()));
        assert_eq!(value("cos", vec![Datum::Float64(x)]), Datum::Float64(x.cos()));
    }
    for x in [0.0, PI / 4.0, -PI / 4.0, PI * 3.0 / 4.0] {
        assert_eq!(value("tan", vec![Datum::Float64(x)]), Datum::Float64(x.tan()));
    }
    assert_eq!(value("cos", vec![Datum::Float64(PI)]), Datum::Float64(-1.0));
    assert_eq!(value("sin", vec![Datum::Int64(0)]), Datum::Float64(0.0));
    assert_eq!(value("sin", vec![s("0.000")]), Datum::Float64(0.0));
    assert_eq!(value("cos", vec![s("0.000")]), Datum::Float64(1.0));
    assert_eq!(value("tan", vec![s("0.000")]), Datum::Float64(0.0));
    for name in ["sin", "cos", "tan"] {
        assert_eq!(value(name, vec![null()]), Datum::Null);
        assert_error(name, vec![s("sdfgsdfg")]);
    }
}

#[test]
fn test_cot() {
    assert_eq!(value("cot", vec![null()]), Datum::Null);
    for x in [PI / 4.0, -PI / 4.0, PI * 3.0 / 4.0] {
        assert_eq!(
            value("cot", vec![Datum::Float64(x)]),
            Datum::Float64(x.cos() / x.sin())
        );
    }
    let x: f64 = 3.1415926;
    assert_eq!(
        value("cot", vec![s("3.1415926")]),
        Datum::Float64(x.cos() / x.sin())
    );
    assert!(matches!(
        eval("cot", vec![Datum::Int64(0)]),
        Err(MathError::OverflowError(_))
    ));
}

#[test]
fn test_asin_acos() {
    assert_eq!(value("acos", vec![null()]), Datum::Null);
    assert_eq!(value("acos", vec![Datum::Float64(1.0)]), Datum::Float64(0.0));
    assert_eq!(value("acos", vec![Datum::Float64(2.0)]), Datum::Null);
    assert_eq!(value("acos", vec![Datum::Float64(-1.0)]), Datum::Float64(PI));
    assert_eq!(value("acos", vec![Datum::Float64(-2.0)]), Datum::Null);
    assert_error("acos", vec![s("tidb")]);

    assert_eq!(value("asin", vec![null()]), Datum::Null);
    assert_eq!(
        value("asin", vec![Datum::Float64(1.0)]),
        Datum::Float64(1.5707963267948966)
    );
    assert_eq!(value("asin", vec![Datum::Float64(2.0)]), Datum::Null);
    assert_eq!(
        value("asin", vec![Datum::Float64(-1.0)]),
        Datum::Float64(-1.5707963267948966)
    );
    assert_eq!(value("asin", vec![Datum::Float64(-2.0)]), Datum::Null);
    assert_error("asin", vec![s("tidb")]);
}

#[test]
fn test_atan() {
    assert_eq!(value("atan", vec![null()]), Datum::Null);
    assert_eq!(value("atan", vec![null(), null()]), Datum::Null);
    assert_eq!(
        value("atan", vec![Datum::Float64(1.0)]),
        Datum::Float64(0.7853981633974483)
    );
    assert_eq!(
        value("atan", vec![Datum::Float64(-1.0)]),
        Datum::Float64(-0.7853981633974483)
    );
    assert_eq!(
        value("atan", vec![Datum::Float64(0.0), Datum::Float64(-2.0)]),
        Datum::Float64(PI)
    );
    assert_eq!(
        value("atan2", vec![Datum::Float64(0.0), Datum::Float64(-2.0)]),
        Datum::Float64(PI)
    );
    assert_error("atan", vec![s("tidb")]);
}

// ============================================================================
// CRC32, CONV, RAND
// ============================================================================

#[test]
fn test_crc32() {
    assert_eq!(value("crc32", vec![s("mysql")]), Datum::Uint64(2501908538));
    assert_eq!(value("crc32", vec![s("MySQL")]), Datum::Uint64(3259397556));
    assert_eq!(value("crc32", vec![s("hello")]), Datum::Uint64(907060870));
    assert_eq!(value("crc32", vec![null()]), Datum::Null);
}

#[test]
fn test_conv() {
    let cases = vec![
        (vec![s("a"), Datum::Int64(16), Datum::Int64(2)], s("1010")),
        (vec![s("6E"), Datum::Int64(18), Datum::Int64(8)], s("172")),
        (vec![s("-17"), Datum::Int64(10), Datum::Int64(-18)], s("-H")),
        (
            vec![s("-17"), Datum::Int64(10), Datum::Int64(18)],
            s("2D3FGB0B9CG4BD1H"),
        ),
        (vec![null(), Datum::Int64(10), Datum::Int64(10)], Datum::Null),
        (vec![s("+18aZ"), Datum::Int64(7), Datum::Int64(36)], s("1")),
        (
            vec![s("18446744073709551615"), Datum::Int64(-10), Datum::Int64(16)],
            s("7FFFFFFFFFFFFFFF"),
        ),
        (
            vec![s("18446744073709551615"), Datum::Int64(10), Datum::Int64(16)],
            s("FFFFFFFFFFFFFFFF"),
        ),
        (vec![s("12F"), Datum::Int64(-10), Datum::Int64(16)], s("C")),
        (vec![s("  FF "), Datum::Int64(16), Datum::Int64(10)], s("255")),
        (vec![s("TIDB"), Datum::Int64(10), Datum::Int64(8)], s("0")),
        (vec![s("aa"), Datum::Int64(10), Datum::Int64(2)], s("0")),
        (vec![s(" A"), Datum::Int64(-10), Datum::Int64(16)], s("0")),
        (vec![s("a6a"), Datum::Int64(10), Datum::Int64(8)], s("0")),
        (vec![s("10"), Datum::Int64(1), Datum::Int64(10)], Datum::Null),
        (vec![s("10"), Datum::Int64(10), Datum::Int64(37)], Datum::Null),
    ];
    for (args, expected) in cases {
        assert_eq!(value("conv", args.clone()), expected, "conv({:?})", args);
    }
}

#[test]
fn test_rand_unseeded_range() {
    let mut f = bind("rand", vec![]).unwrap();
    assert!(!f.is_deterministic());
    for _ in 0..100 {
        match f.eval(None).unwrap().datum {
            Datum::Float64(v) => assert!((0.0..1.0).contains(&v)),
            other => panic!("unexpected {:?}", other),
        }
    }
}

#[test]
fn test_rand_seeded_stream() {
    let mut f = bind("rand", vec![Datum::Int64(20160101)]).unwrap();
    assert!(f.is_deterministic());
    for expected in [0.9050663168589271, 0.8890408565188207, 0.7300053627509674] {
        assert_eq!(f.eval(None).unwrap().datum, Datum::Float64(expected));
    }

    let mut g = bind("rand", vec![Datum::Int64(1)]).unwrap();
    assert_eq!(g.eval(None).unwrap().datum, Datum::Float64(0.40540353712197724));
}

#[test]
fn test_rand_null_seed_is_zero() {
    let mut a = bind("rand", vec![null()]).unwrap();
    let mut b = bind("rand", vec![Datum::Int64(0)]).unwrap();
    for _ in 0..5 {
        assert_eq!(a.eval(None).unwrap(), b.eval(None).unwrap());
    }
}

#[test]
fn test_rand_context_seed() {
    let ctx = EvalContext::new().with_rand_seed(Some(20160101));
    let mut f = bind_with("rand", vec![], &ctx).unwrap();
    assert_eq!(f.eval(None).unwrap().datum, Datum::Float64(0.9050663168589271));
}

#[test]
fn test_rand_seed_must_be_constant() {
    let column = Expression::column(0, "seed", DatumKind::Int64);
    let err = sqlmath::lookup("rand")
        .unwrap()
        .get_function(vec![column], &EvalContext::new())
        .unwrap_err();
    assert!(matches!(err, MathError::BindError(_)));
}

// ============================================================================
// Cross-cutting behaviour
// ============================================================================

#[test]
fn test_null_propagates_everywhere() {
    for name in sqlmath::registry().names() {
        let class = sqlmath::lookup(name).unwrap();
        if class.min_args == 0 {
            continue;
        }
        let args = vec![Datum::Null; class.min_args];
        assert_eq!(value(name, args), Datum::Null, "{}(NULL...)", name);
    }
}

#[test]
fn test_deterministic_with_constant_arguments() {
    for name in sqlmath::registry().names() {
        let class = sqlmath::lookup(name).unwrap();
        let args = vec![Datum::Int64(1); class.min_args.max(class.max_args.min(1))];
        let f = bind(name, args).unwrap();
        assert!(f.is_deterministic(), "{} should be deterministic", name);
    }
}

#[test]
fn test_ignore_truncate_silences_lenient_warnings() {
    let ctx = EvalContext::new().with_ignore_truncate(true);
    for name in ["ceil", "floor", "sign", "degrees"] {
        let result = eval_with(name, vec![s("7zz")], &ctx).unwrap();
        assert!(!result.is_degraded(), "{}", name);
    }
    for name in ["exp", "sin", "log10", "radians"] {
        assert!(eval_with(name, vec![s("1zz")], &ctx).is_ok(), "{}", name);
    }
}

#[test]
fn test_nested_warning_reaches_outer_result() {
    let inner = bind("floor", vec![s("3.7x")]).unwrap();
    let mut outer = sqlmath::lookup("pow")
        .unwrap()
        .get_function(
            vec![Expression::function(inner), Expression::constant(2i64)],
            &EvalContext::new(),
        )
        .unwrap();
    let result = outer.eval(None).unwrap();
    assert_eq!(result.datum, Datum::Float64(9.0));
    assert!(result.is_degraded());
    assert!(result.into_result().is_err());
}

#[test]
fn test_column_arguments() {
    let mut f = sqlmath::lookup("abs")
        .unwrap()
        .get_function(
            vec![Expression::column(1, "delta", DatumKind::Int64)],
            &EvalContext::new(),
        )
        .unwrap();
    assert!(f.is_deterministic());

    let row = Row::new(vec![Datum::Null, Datum::Int64(-5)]);
    assert_eq!(f.eval(Some(&row)).unwrap().datum, Datum::Int64(5));
    let row = Row::new(vec![Datum::Null, Datum::Null]);
    assert_eq!(f.eval(Some(&row)).unwrap().datum, Datum::Null);

    assert!(matches!(f.eval(None), Err(MathError::EvalError(_))));
    let short = Row::new(vec![Datum::Int64(1)]);
    assert!(matches!(f.eval(Some(&short)), Err(MathError::EvalError(_))));
}

#[test]
fn test_overflow_message_names_the_call() {
    let err = eval("pow", vec![Datum::Int64(10), Datum::Int64(700)]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "DOUBLE value is out of range in 'pow(10, 700)'"
    );
}
