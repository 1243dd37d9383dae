use calc::{
    AngleMode, Config, ErrorKind,
    error::{Error, ParseError, RuntimeError},
    interpreter::evaluator::core::Context,
};

const TOLERANCE: f64 = 1e-9;

fn eval_with(src: &str, config: Config) -> Result<Vec<f64>, Error> {
    Context::new(config).eval_expression(src)
}

fn assert_value_with(src: &str, config: Config, expected: f64) {
    match eval_with(src, config) {
        Ok(values) => {
            assert_eq!(values.len(), 1, "expected a single result for {src:?}, got {values:?}");
            assert!((values[0] - expected).abs() <= TOLERANCE * expected.abs().max(1.0),
                    "{src:?} evaluated to {}, expected {expected}",
                    values[0]);
        },
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_value(src: &str, expected: f64) {
    assert_value_with(src, Config::default(), expected);
}

fn assert_failure(src: &str, kind: ErrorKind) -> Error {
    match eval_with(src, Config::default()) {
        Ok(values) => panic!("Expression {src:?} succeeded with {values:?} but was expected to fail"),
        Err(e) => {
            assert_eq!(e.kind(), kind, "wrong error for {src:?}: {e}");
            e
        },
    }
}

fn degrees() -> Config {
    Config { angle_mode: AngleMode::Degrees,
             ..Config::default() }
}

#[test]
fn precedence_and_parentheses() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("2*(3+4)", 14.0);
    assert_value("10-4/2", 8.0);
    assert_value("7 % 3", 1.0);
    assert_value("2 * 3 % 4", 2.0);
    assert_value("((1))", 1.0);
}

#[test]
fn associativity() {
    assert_value("2^3^2", 512.0);
    assert_value("8-3-2", 3.0);
    assert_value("64/4/2", 8.0);
    assert_value("(2^3)^2", 64.0);
}

#[test]
fn unary_reinterpretation() {
    assert_value("-3+4", 1.0);
    assert_value("3+-4", -1.0);
    assert_value("--3", 3.0);
    assert_value("+5", 5.0);
    assert_value("~3", -3.0);
    assert_value("2*-3", -6.0);
    assert_value("2^-1", 0.5);
    assert_value("-(2+3)", -5.0);
}

#[test]
fn prefix_minus_binds_tighter_than_power() {
    assert_value("-2^2", 4.0);
    assert_value("-(2^2)", -4.0);
}

#[test]
fn factorial() {
    assert_value("0!", 1.0);
    assert_value("5!", 120.0);
    assert_value("1+5!", 121.0);
    assert_value("(5!)+1", 121.0);
    assert_value("3!*2", 12.0);
    assert_value("-3!", -6.0);
    assert_value("3!!", 720.0);
    assert_value("2^3!", 64.0);
    assert_value("(2+1)!", 6.0);

    let overflow = eval_with("171!", Config::default()).unwrap();
    assert!(overflow[0].is_infinite());
}

#[test]
fn sign_after_factorial_is_prefix() {
    assert_failure("5!+1", ErrorKind::MalformedExpression);
    assert_failure("5!-1", ErrorKind::MalformedExpression);
}

#[test]
fn factorial_domain_errors() {
    assert_failure("(-1)!", ErrorKind::FactorialDomainError);
    assert_failure("2.5!", ErrorKind::FactorialDomainError);

    let err = assert_failure("2.5!", ErrorKind::FactorialDomainError);
    assert_eq!(err,
               Error::Runtime(RuntimeError::FactorialDomain { value:    2.5,
                                                              position: 4, }));
}

#[test]
fn mismatched_parentheses() {
    let err = assert_failure("(2+3", ErrorKind::MismatchedOpenParen);
    assert_eq!(err.position(), 1);

    let err = assert_failure("2+3)", ErrorKind::MismatchedCloseParen);
    assert_eq!(err.position(), 4);

    assert_failure("((2)", ErrorKind::MismatchedOpenParen);
    assert_failure(")(", ErrorKind::MismatchedCloseParen);
}

#[test]
fn malformed_operand_counts() {
    assert_failure("+", ErrorKind::MalformedExpression);
    assert_failure("2 3", ErrorKind::MalformedExpression);
    assert_failure("2+", ErrorKind::MalformedExpression);
    assert_failure("*2", ErrorKind::MalformedExpression);
    assert_failure("", ErrorKind::MalformedExpression);
    assert_failure("()", ErrorKind::MalformedExpression);
    assert_failure("sqrt", ErrorKind::MalformedExpression);
    assert_failure("1,", ErrorKind::MalformedExpression);
}

#[test]
fn functions() {
    assert_value("sqrt(16)", 4.0);
    assert_value("sqrt 16 + 1", 5.0);
    assert_value("abs(-2.5)", 2.5);
    assert_value("sgn(-42)", -1.0);
    assert_value("sgn(0)", 0.0);
    assert_value("log(1000)", 3.0);
    assert_value("ln(e)", 1.0);
    assert_value("exp(0)", 1.0);
    assert_value("round(2.5)", 3.0);
    assert_value("round(-2.5)", -3.0);
    assert_value("ceil(1.2)", 2.0);
    assert_value("floor(-1.2)", -2.0);
    assert_value("sin(0)", 0.0);
    assert_value("cos(pi)", -1.0);
    assert_value("atan(1)*4", std::f64::consts::PI);
    assert_value("sin(-1)", -(1.0_f64.sin()));
    assert_value("sqrt(4)^2", 4.0);
    assert_value("sqrt sqrt 16", 2.0);
}

#[test]
fn prefix_operator_reduces_pending_function() {
    assert_failure("sin -1", ErrorKind::MalformedExpression);
    assert_failure("sqrt +4", ErrorKind::MalformedExpression);
    assert_value("sqrt(+4)", 2.0);
}

#[test]
fn names_are_case_insensitive() {
    assert_value("SQRT(16)", 4.0);
    assert_value("Pi", std::f64::consts::PI);
    assert_value("2*E", 2.0 * std::f64::consts::E);
}

#[test]
fn degree_mode() {
    assert_value_with("sin(90)", degrees(), 1.0);
    assert_value_with("cos(180)", degrees(), -1.0);
    assert_value_with("asin(1)", degrees(), 90.0);
    assert_value_with("atan(1)", degrees(), 45.0);
    assert_value_with("sinh(180)", degrees(), std::f64::consts::PI.sinh());
    assert_value_with("tan(45)", degrees(), 1.0);
    assert_value_with("cosh(180)", degrees(), std::f64::consts::PI.cosh());
    assert_value_with("tanh(180)", degrees(), std::f64::consts::PI.tanh());
    assert_value_with("asinh(1)", degrees(), 1.0_f64.asinh().to_degrees());
    assert_value_with("acosh(2)", degrees(), 2.0_f64.acosh().to_degrees());
    assert_value_with("atanh(0.5)", degrees(), 0.5_f64.atanh().to_degrees());
    assert_value_with("sqrt(16)", degrees(), 4.0);
    assert_value_with("asin(1)", Config::default(), std::f64::consts::FRAC_PI_2);
}

#[test]
fn numeric_literals() {
    assert_value("1e10", 1e10);
    assert_value("1.5e3", 1500.0);
    assert_value("2.5E-1", 0.25);
    assert_value(".5", 0.5);
    assert_value("2.", 2.0);
    assert_value("1.e2", 100.0);
}

#[test]
fn tokenizer_errors() {
    let err = assert_failure("1e400", ErrorKind::ConstantOverflow);
    assert_eq!(err,
               Error::Parse(ParseError::ConstantOverflow { text:     "1e400".to_string(),
                                                           position: 1, }));

    assert_failure(".", ErrorKind::InvalidConstant);
    assert_failure("2 + .", ErrorKind::InvalidConstant);

    let err = assert_failure("2 * foo", ErrorKind::UndefinedIdentifier);
    assert_eq!(err,
               Error::Parse(ParseError::UndefinedIdentifier { name:     "foo".to_string(),
                                                              position: 5, }));

    let err = assert_failure("2 # 3", ErrorKind::InvalidToken);
    assert_eq!(err,
               Error::Parse(ParseError::InvalidToken { character: '#',
                                                       position:  3, }));

    let err = assert_failure("2 & 3", ErrorKind::InvalidToken);
    assert!(err.to_string().contains('&'));
}

#[test]
fn comma_separated_subexpressions() {
    let values = eval_with("1+1, 2*3, $1+$2", Config::default()).unwrap();
    assert_eq!(values, vec![2.0, 6.0, 8.0]);
}

#[test]
fn separator_restores_unary_context() {
    let values = eval_with("1,-2", Config::default()).unwrap();
    assert_eq!(values, vec![1.0, -2.0]);

    let values = eval_with("3, +4", Config::default()).unwrap();
    assert_eq!(values, vec![3.0, 4.0]);
}

#[test]
fn back_reference_errors() {
    assert_failure("$1", ErrorKind::InvalidResultIndex);
    assert_failure("1, $0", ErrorKind::InvalidResultIndex);
    assert_failure("1, $2", ErrorKind::InvalidResultIndex);
    assert_failure("1, $1.5", ErrorKind::InvalidResultIndex);
    assert_failure("1, $-1", ErrorKind::InvalidResultIndex);
    assert_failure("$", ErrorKind::MalformedExpression);
}

#[test]
fn division_by_zero_is_not_an_error() {
    let values = eval_with("1/0, -1/0", Config::default()).unwrap();
    assert_eq!(values, vec![f64::INFINITY, f64::NEG_INFINITY]);
}
