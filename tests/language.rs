use std::{fs, path::Path};

use calc::{
    error::{CalcError, ParseError, RuntimeError},
    evaluate, to_postfix,
    interpreter::token::core::Token,
};
use walkdir::WalkDir;

/// Runs every `expression => expected` line of the `.calc` files under
/// `tests/cases`. An expected value of `!<code>` means the expression must
/// fail with that exit code.
#[test]
fn case_files_pass() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/cases");
    let mut count = 0;

    for entry in WalkDir::new(&root).into_iter()
                                    .filter_map(Result::ok)
                                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((expression, expected)) = line.split_once(" => ") else {
                panic!("{path:?}:{}: missing ' => '", number + 1);
            };

            count += 1;
            let actual = match evaluate(expression) {
                Ok(token) => token.to_string(),
                Err(e) => format!("!{}", e.exit_code()),
            };
            assert_eq!(actual, expected.trim(), "{path:?}:{}: {expression}", number + 1);
        }
    }

    assert!(count > 0, "No cases found in {root:?}");
}

fn assert_result(src: &str, expected: &Token) {
    match evaluate(src) {
        Ok(token) => assert_eq!(&token, expected, "{src}"),
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) -> CalcError {
    match evaluate(src) {
        Ok(token) => panic!("Expression '{src}' succeeded with {token} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_and_associativity() {
    assert_result("3 + 4 * 2", &Token::Integer(11));
    assert_result("(3 + 4) * 2", &Token::Integer(14));
    assert_result("2 ^ 3 ^ 2", &Token::Integer(512));
    assert_result("(2 ^ 3) ^ 2", &Token::Integer(64));
    assert_result("10 - 4 - 3", &Token::Integer(3));
    assert_result("100 / 10 / 5", &Token::Integer(2));
}

#[test]
fn postfix_forms() {
    assert_eq!(to_postfix("3 + 4 * 2").unwrap().to_string(), "3 4 2 * +");
    assert_eq!(to_postfix("(3 + 4) * 2").unwrap().to_string(), "3 4 + 2 *");
    assert_eq!(to_postfix("2 ^ 3 ^ 2").unwrap().to_string(), "2 3 2 ^ ^");
}

#[test]
fn mixed_arithmetic_widens() {
    assert_result("3.0 / 2", &Token::Float(1.5));
    assert_result("7 / 2", &Token::Integer(3));
    assert_result("1 + 0.25", &Token::Float(1.25));
    assert_eq!(evaluate("3.0 / 2").unwrap().to_string(), "1.500000");
    // Integers beyond 2^53 round to the nearest float instead of failing.
    assert_result("9007199254740993 + 0.5", &Token::Float(9_007_199_254_740_992.0));
    assert_result("9223372036854775807 * 1.0", &Token::Float(9_223_372_036_854_775_808.0));
}

#[test]
fn modulo_narrows_float_operands() {
    // `%` truncates float operands instead of widening like the other
    // operators do.
    assert_result("3 % 2.5", &Token::Integer(1));
    assert_result("10.9 % 4", &Token::Integer(2));
}

#[test]
fn functions() {
    assert_result("sin(0)", &Token::Float(0.0));
    assert_result("cos(0) * 2", &Token::Float(2.0));
    assert_result("tan(0) + 1", &Token::Float(1.0));
}

#[test]
fn parse_failures() {
    assert!(matches!(assert_failure("(1 + 2"),
                     CalcError::Parse(ParseError::UnbalancedParentheses { .. })));
    assert!(matches!(assert_failure("1 + 2)"),
                     CalcError::Parse(ParseError::UnbalancedParentheses { .. })));
    assert!(matches!(assert_failure("1 + y"),
                     CalcError::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("2 & 3"), CalcError::Parse(ParseError::ScanFault { .. })));
}

#[test]
fn runtime_failures() {
    assert!(matches!(assert_failure("1 +"),
                     CalcError::Runtime(RuntimeError::StackUnderflow { .. })));
    assert!(matches!(assert_failure("+ 1"),
                     CalcError::Runtime(RuntimeError::StackUnderflow { .. })));
    assert!(matches!(assert_failure("1 2"),
                     CalcError::Runtime(RuntimeError::MalformedProgram { remaining: 2 })));
    assert!(matches!(assert_failure(""),
                     CalcError::Runtime(RuntimeError::MalformedProgram { remaining: 0 })));
    assert!(matches!(assert_failure(r#""two" * 2"#),
                     CalcError::Runtime(RuntimeError::UnsupportedInstruction { .. })));
    assert!(matches!(assert_failure("5 / 0"), CalcError::Runtime(RuntimeError::DivisionByZero)));
}

#[test]
fn exit_codes() {
    assert_eq!(assert_failure("(1").exit_code(), 65);
    assert_eq!(assert_failure("1 $").exit_code(), 65);
    assert_eq!(assert_failure("1 -").exit_code(), 70);
    assert_eq!(assert_failure("4 % 0").exit_code(), 70);
}

#[test]
fn evaluations_are_independent() {
    assert!(evaluate("(((1").is_err());
    assert_result("1 + 1", &Token::Integer(2));
    assert!(evaluate("1 2 3").is_err());
    assert_result("4", &Token::Integer(4));
}
