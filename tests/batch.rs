use calc::{
    Config, ErrorKind, evaluate_batch, get_result,
    interpreter::evaluator::core::Context,
    render,
    util::format::{format_general, format_result},
};

fn newline() -> Config {
    Config { newline: true,
             ..Config::default() }
}

#[test]
fn back_reference_across_expressions() {
    let outcomes = evaluate_batch(&["3+4", "$1*2"], Config::default());
    assert_eq!(outcomes, vec![Ok(vec![7.0]), Ok(vec![14.0])]);
}

#[test]
fn failed_expression_commits_nothing() {
    let outcomes = evaluate_batch(&["1, 2", "3, (", "$3"], Config::default());

    assert_eq!(outcomes[0], Ok(vec![1.0, 2.0]));
    assert_eq!(outcomes[1].as_ref().unwrap_err().kind(), ErrorKind::MismatchedOpenParen);
    assert_eq!(outcomes[2].as_ref().unwrap_err().kind(), ErrorKind::InvalidResultIndex);
}

#[test]
fn batch_continues_after_failure() {
    let outcomes = evaluate_batch(&["2+", "5", "$1"], Config::default());

    assert!(outcomes[0].is_err());
    assert_eq!(outcomes[1], Ok(vec![5.0]));
    assert_eq!(outcomes[2], Ok(vec![5.0]));
}

#[test]
fn registry_holds_only_committed_results() {
    let mut context = Context::new(Config::default());

    context.eval_expression("1, 2").unwrap();
    context.eval_expression("$1, 2 3").unwrap_err();
    context.eval_expression("$2 * 10").unwrap();

    assert_eq!(context.results.as_slice(), &[1.0, 2.0, 20.0]);
}

#[test]
fn render_joins_values_and_expressions() {
    let outcomes = evaluate_batch(&["1+1, 2^3", "10/4", "2 3", "-1"], Config::default());
    assert_eq!(render(&outcomes, &Config::default()), "2,8 2.5 -1");
    assert_eq!(render(&outcomes, &newline()), "2,8\n2.5\n-1");
}

#[test]
fn get_result_stops_at_first_error() {
    assert_eq!(get_result(&["3+4", "$1*2"], Config::default()).unwrap(), "7 14");

    let err = get_result(&["1", "foo", "2"], Config::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UndefinedIdentifier);
}

#[test]
fn general_format_matches_printf() {
    assert_eq!(format_result(0.0), "0");
    assert_eq!(format_result(-0.0), "-0");
    assert_eq!(format_result(120.0), "120");
    assert_eq!(format_result(0.0001), "0.0001");
    assert_eq!(format_result(0.000_012_5), "1.25E-05");
    assert_eq!(format_result(123_456_789_012.0), "1.23456789E+11");
    assert_eq!(format_result(1_234_567_890.0), "1234567890");
    assert_eq!(format_result(9_999_999_999.5), "1E+10");
    assert_eq!(format_result(std::f64::consts::PI), "3.141592654");
    assert_eq!(format_result(1e100), "1E+100");
    assert_eq!(format_result(f64::NEG_INFINITY), "-INF");
    assert_eq!(format_general(2.0 / 3.0, 3), "0.667");
    assert_eq!(format_general(1234.0, 2), "1.2E+03");
}
