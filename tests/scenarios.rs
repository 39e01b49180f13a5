//! End-to-end scenarios from `spec.md` §8, driving [`Context`] the way a
//! REPL host would — one `exec` call per line.

use calcore::{Context, EvalError, Value};

#[test]
fn operator_precedence_and_power() {
    let mut ctx = Context::new();
    assert_eq!(ctx.exec("1 + 2*3^2").unwrap(), Value::Number(19.0));
}

#[test]
fn recursive_factorial_via_if_else() {
    let mut ctx = Context::new();
    ctx.exec("fact(n) = if_else(eq(n, 0), 1, n*fact(n-1))").unwrap();
    assert_eq!(ctx.exec("fact(5)").unwrap(), Value::Number(120.0));
}

#[test]
fn list_elementwise_addition() {
    let mut ctx = Context::new();
    assert_eq!(ctx.exec("[1,2,3] + [4,5,6]").unwrap(), Value::List(vec![5.0, 7.0, 9.0]));
}

#[test]
fn user_defined_map_over_a_list() {
    let mut ctx = Context::new();
    ctx.exec(
        "map = @(f, L){ if_else(eq(len(L),0), [], append([f(L[0])], map(f, slice(L,1,len(L))))) }",
    )
    .unwrap();
    assert_eq!(ctx.exec("map(@(x){x*2}, [1,2,3])").unwrap(), Value::List(vec![2.0, 4.0, 6.0]));
}

#[test]
fn variable_assignment_then_use() {
    let mut ctx = Context::new();
    ctx.exec("x = 5").unwrap();
    assert_eq!(ctx.exec("x + 1").unwrap(), Value::Number(6.0));
}

#[test]
fn calling_an_undefined_identifier_errors() {
    let mut ctx = Context::new();
    assert_eq!(ctx.exec("f()").unwrap_err(), EvalError::IdentifierUndefined("f".to_string()));
}

#[test]
fn every_error_kind_has_a_minimal_reproducer() {
    let mut ctx = Context::new();

    assert_eq!(ctx.exec("1e999").unwrap_err(), EvalError::DecimalOutOfRange);
    assert_eq!(ctx.exec("1 +* 2").unwrap_err(), EvalError::ParseFailed);
    assert_eq!(ctx.exec("undefined_name").unwrap_err(), EvalError::IdentifierUndefined("undefined_name".to_string()));
    assert_eq!(ctx.exec("x = 5").unwrap(), Value::Void);
    assert_eq!(ctx.exec("x()").unwrap_err(), EvalError::ObjectNotCallable);
    assert_eq!(ctx.exec("x[0]").unwrap_err(), EvalError::ObjectNotList);
    assert_eq!(ctx.exec("[1,2,3][[1]]").unwrap_err(), EvalError::IndexNotDecimal);
    assert_eq!(ctx.exec("[1,2,3][10]").unwrap_err(), EvalError::IndexOutOfRange);
    assert_eq!(ctx.exec("[1, [2], 3]").unwrap_err(), EvalError::ListMemberNotDecimal);
    ctx.exec("f(a, b) = a + b").unwrap();
    assert_eq!(ctx.exec("f(1)").unwrap_err(), EvalError::WrongNumberOfParameters);
    ctx.exec("g = @(a){a}").unwrap();
    assert_eq!(ctx.exec("g + 1").unwrap_err(), EvalError::WrongOperandType);
    assert_eq!(ctx.exec("[1,2] + [1,2,3]").unwrap_err(), EvalError::DifferentListLengths);
    assert_eq!(ctx.exec("eq(1, [1])").unwrap_err(), EvalError::WrongParameterType);
}

#[test]
fn broadcasting_matches_spec_table() {
    let mut ctx = Context::new();
    for (expr, expected) in [
        ("[1,2,3] + 2", vec![3.0, 4.0, 5.0]),
        ("2 + [1,2,3]", vec![3.0, 4.0, 5.0]),
        ("[1,2,3] * 2", vec![2.0, 4.0, 6.0]),
        ("[1,2,3] - 2", vec![-1.0, 0.0, 1.0]),
        ("2 - [1,2,3]", vec![1.0, 0.0, -1.0]),
        ("[2,4,6] / 2", vec![1.0, 2.0, 3.0]),
        ("2 / [1,2,4]", vec![2.0, 1.0, 0.5]),
    ] {
        assert_eq!(ctx.exec(expr).unwrap(), Value::List(expected), "for {expr}");
    }
}

#[test]
fn sin_is_elementwise_over_a_list() {
    let mut ctx = Context::new();
    match ctx.exec("sin([0, pi])").unwrap() {
        Value::List(values) => {
            assert!((values[0]).abs() < 1e-12);
            assert!((values[1]).abs() < 1e-12);
        },
        other => panic!("expected a list, got {other:?}"),
    }
}

#[test]
fn lambda_literal_call() {
    let mut ctx = Context::new();
    ctx.exec("g = @(x, y){x + y}").unwrap();
    assert_eq!(ctx.exec("g(2, 3)").unwrap(), Value::Number(5.0));
}

#[test]
fn indexing_a_list_literal() {
    let mut ctx = Context::new();
    assert_eq!(ctx.exec("[1, 2, 3][1]").unwrap(), Value::Number(2.0));
}

#[test]
fn user_lambda_returning_a_lambda() {
    let mut ctx = Context::new();
    ctx.exec("adder(n) = @(x){x + n}").unwrap();
    ctx.exec("add5 = adder(5)").unwrap();
    assert_eq!(ctx.exec("add5(10)").unwrap(), Value::Number(15.0));
}

#[test]
fn empty_list_and_empty_call_are_legal() {
    let mut ctx = Context::new();
    assert_eq!(ctx.exec("[]").unwrap(), Value::List(vec![]));
    ctx.exec("zero() = 0").unwrap();
    assert_eq!(ctx.exec("zero()").unwrap(), Value::Number(0.0));
}
