use std::{cell::RefCell, fmt::Arguments, rc::Rc};

use arith::{run, run_file, run_lines, utils::logger::Logger, Error, Options, ParseError};

const TEST_FILE_DIR: &str = "test_files";

struct MockLogger {
    logs: Rc<RefCell<Vec<String>>>,
}
impl MockLogger {
    fn new() -> MockLogger {
        MockLogger {
            logs: Rc::new(RefCell::new(vec![])),
        }
    }
}
impl Logger for MockLogger {
    fn print(&mut self, value: Arguments) {
        self.logs.borrow_mut().push(value.to_string());
    }

    fn error(&mut self, value: Arguments) {
        self.logs.borrow_mut().push(format!("stderr: {value}"));
    }
}

fn run_test_file(file_name: &str) -> (Result<(), Error>, Vec<String>) {
    let logger = Box::new(MockLogger::new());
    let logs = logger.logs.clone();
    let result = run_file(
        format!("{TEST_FILE_DIR}/{file_name}"),
        Some(logger),
        Options::default(),
    );
    let logs = logs.borrow().clone();
    (result, logs)
}

fn assert_prints(file_name: &str, expected_prints: &[&str]) {
    let (result, logs) = run_test_file(file_name);
    assert!(result.is_ok(), "{file_name}: {result:?}");
    assert_eq!(logs, expected_prints);
}

#[test]
fn precedence_and_associativity() {
    assert_prints(
        "precedence.calc",
        &["Result: 7", "Result: 5", "Result: 9", "Result: -6"],
    )
}

#[test]
fn decimals() {
    assert_prints(
        "decimals.calc",
        &["Result: 5", "Result: 0.25", "Result: 0.30000000000000004"],
    )
}

#[test]
fn division_by_zero() {
    assert_prints(
        "division_by_zero.calc",
        &["Result: inf", "Result: -inf", "Result: NaN"],
    )
}

#[test]
fn file_stops_at_first_bad_line() {
    let (result, logs) = run_test_file("parse_error.calc");
    assert_eq!(logs, vec!["Result: 2".to_string()]);
    match result {
        Err(Error::Line { line, source }) => {
            assert_eq!(line, 2);
            assert_eq!(source, ParseError::UnexpectedEndOfInput);
        }
        other => panic!("expected a line error, got {other:?}"),
    }
}

#[test]
fn missing_file() {
    let (result, logs) = run_test_file("does_not_exist.calc");
    assert!(matches!(result, Err(Error::Io { .. })));
    assert!(logs.is_empty());
}

#[test]
fn single_expression_with_all_stages() {
    let logger = Box::new(MockLogger::new());
    let logs = logger.logs.clone();
    let options = Options {
        show_tokens: true,
        show_ast: true,
    };

    let value = run("-5", logger, options).unwrap();
    assert_eq!(value, -5.0);
    assert_eq!(
        *logs.borrow(),
        vec![
            "Tokens: [Minus(-), Number(5)]".to_string(),
            "AST: (- 5)".to_string(),
            "Result: -5".to_string(),
        ]
    );
}

#[test]
fn illegal_characters_show_up_as_tokens() {
    let logger = Box::new(MockLogger::new());
    let logs = logger.logs.clone();
    let options = Options {
        show_tokens: true,
        show_ast: false,
    };

    let result = run("2 $ 3", logger, options);
    assert!(matches!(
        result,
        Err(Error::Parse(ParseError::TrailingTokens(ref token))) if token.literal == "$"
    ));
    assert_eq!(
        *logs.borrow(),
        vec!["Tokens: [Number(2), Illegal($), Number(3)]".to_string()]
    );
}

#[test]
fn prompt_reports_bad_line_and_keeps_going() {
    let logger = Box::new(MockLogger::new());
    let logs = logger.logs.clone();

    let result = run_lines("1 +\n2 * 3\nexit\n4\n".as_bytes(), logger, Options::default());
    assert!(result.is_ok());
    assert_eq!(
        *logs.borrow(),
        vec![
            "stderr: Error: unexpected end of input".to_string(),
            "Result: 6".to_string(),
        ]
    );
}

#[test]
fn prompt_survives_deep_nesting() {
    let logger = Box::new(MockLogger::new());
    let logs = logger.logs.clone();

    let deep = "(".repeat(10_000) + "1" + &")".repeat(10_000);
    let input = format!("{deep}\n-(2)\n");
    assert!(run_lines(input.as_bytes(), logger, Options::default()).is_ok());

    let logs = logs.borrow();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].starts_with("stderr: Error: expression nested too deeply"));
    assert_eq!(logs[1], "Result: -2");
}
