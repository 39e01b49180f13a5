//! Unary math built-ins: accept a `Number` or elementwise over a `List`.

use crate::{construct::tree::Expr, env::Environment, error::EvalError, eval, value::Value};

pub(crate) fn unary(
    args: &[Expr],
    env: &mut Environment,
    f: impl Fn(f64) -> f64,
) -> Result<Value, EvalError> {
    match eval::eval_expr(&args[0], env)? {
        Value::Number(n) => Ok(Value::Number(f(n))),
        Value::List(l) => Ok(Value::List(l.into_iter().map(&f).collect())),
        _ => Err(EvalError::WrongParameterType),
    }
}

/// Abramowitz & Stegun 7.1.26 approximation of the error function, accurate
/// to about 1.5e-7.
pub(crate) fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    sign * (1.0 - poly * (-x * x).exp())
}

/// Lanczos approximation of the gamma function (g = 7, n = 9), reflected
/// via `gamma(x) = pi / (sin(pi x) * gamma(1 - x))` for `x < 0.5`.
pub(crate) fn gamma(x: f64) -> f64 {
    const G: f64 = 7.0;
    const COEFFICIENTS: [f64; 9] = [
        0.99999999999980993,
        676.5203681218851,
        -1259.1392167224028,
        771.32342877765313,
        -176.61502916214059,
        12.507343278686905,
        -0.13857109526572012,
        9.9843695780195716e-6,
        1.5056327351493116e-7,
    ];

    if x < 0.5 {
        std::f64::consts::PI / ((std::f64::consts::PI * x).sin() * gamma(1.0 - x))
    } else {
        let x = x - 1.0;
        let mut a = COEFFICIENTS[0];
        let t = x + G + 0.5;
        for (i, c) in COEFFICIENTS.iter().enumerate().skip(1) {
            a += c / (x + i as f64);
        }
        (2.0 * std::f64::consts::PI).sqrt() * t.powf(x + 0.5) * (-t).exp() * a
    }
}
