use sprig::{
    eval_source,
    interpreter::{
        evaluator::block::eval_program,
        lexer::TokenStream,
        object::{Object, NULL},
        parser::core::Parser,
    },
    repl,
};

fn run(source: &str) -> Object {
    eval_source(source).unwrap_or_else(|errors| panic!("parse failed for {source:?}: {errors:?}"))
}

fn assert_integer(source: &str, expected: i64) {
    assert_eq!(run(source), Object::Integer(expected), "for {source:?}");
}

fn assert_boolean(source: &str, expected: bool) {
    assert_eq!(run(source), Object::Boolean(expected), "for {source:?}");
}

fn assert_null(source: &str) {
    assert_eq!(run(source), NULL, "for {source:?}");
}

fn assert_error(source: &str, message: &str) {
    assert_eq!(run(source), Object::Error(message.to_string()), "for {source:?}");
}

#[test]
fn integer_arithmetic() {
    assert_integer("5", 5);
    assert_integer("10", 10);
    assert_integer("-5", -5);
    assert_integer("-10", -10);
    assert_integer("5 + 5 + 5 + 5 - 10", 10);
    assert_integer("2 * 2 * 2 * 2 * 2", 32);
    assert_integer("-50 + 100 + -50", 0);
    assert_integer("5 * 2 + 10", 20);
    assert_integer("5 + 2 * 10", 25);
    assert_integer("20 + 2 * -10", 0);
    assert_integer("50 / 2 * 2 + 10", 60);
    assert_integer("2 * (5 + 10)", 30);
    assert_integer("3 * 3 * 3 + 10", 37);
    assert_integer("3 * (3 * 3) + 10", 37);
    assert_integer("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50);
}

#[test]
fn boolean_expressions() {
    assert_boolean("true", true);
    assert_boolean("false", false);
    assert_boolean("1 < 2", true);
    assert_boolean("1 > 2", false);
    assert_boolean("1 < 1", false);
    assert_boolean("1 == 1", true);
    assert_boolean("1 != 1", false);
    assert_boolean("1 == 2", false);
    assert_boolean("1 != 2", true);
    assert_boolean("true == true", true);
    assert_boolean("false == false", true);
    assert_boolean("true == false", false);
    assert_boolean("true != false", true);
    assert_boolean("(1 < 2) == true", true);
    assert_boolean("(1 < 2) == false", false);
    assert_boolean("(1 > 2) == true", false);
}

#[test]
fn bang_operator_is_truthiness_negation() {
    assert_boolean("!true", false);
    assert_boolean("!false", true);
    assert_boolean("!5", false);
    assert_boolean("!0", false);
    assert_boolean("!!true", true);
    assert_boolean("!!false", false);
    assert_boolean("!!5", true);
}

#[test]
fn string_values() {
    assert_eq!(run("\"hello world\""), Object::Str("hello world".to_string()));
    assert_boolean("\"a\" == \"a\"", true);
    assert_boolean("\"a\" == \"b\"", false);
    assert_boolean("\"a\" != \"b\"", true);
}

#[test]
fn equality_across_types_is_false_not_an_error() {
    assert_boolean("5 == true", false);
    assert_boolean("5 != true", true);
    assert_boolean("\"5\" == 5", false);
}

#[test]
fn conditionals() {
    assert_integer("if (true) { 10 }", 10);
    assert_null("if (false) { 10 }");
    assert_integer("if (1) { 10 }", 10);
    assert_integer("if (0) { 10 }", 10);
    assert_integer("if (1 < 2) { 10 }", 10);
    assert_null("if (1 > 2) { 10 }");
    assert_integer("if (1 > 2) { 10 } else { 20 }", 20);
    assert_integer("if (1 < 2) { 10 } else { 20 }", 10);
}

#[test]
fn return_statements_end_the_program() {
    assert_integer("return 10;", 10);
    assert_integer("return 10; 9;", 10);
    assert_integer("return 2 * 5; 9;", 10);
    assert_integer("9; return 2 * 5; 9;", 10);
    assert_null("return;");
    assert_null("return; 9;");
}

#[test]
fn returns_bubble_through_nested_blocks() {
    assert_integer("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10);
    assert_integer("if (10 > 1) { if (1 > 10) { return 10; } return 1; }", 1);
}

#[test]
fn error_objects_carry_pinned_messages() {
    assert_error("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("-true", "unknown operator: -BOOLEAN");
    assert_error("true + false;", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("\"a\" + \"b\"", "unknown operator: STRING + STRING");
    assert_error("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                 "unknown operator: BOOLEAN + BOOLEAN");
}

#[test]
fn errors_short_circuit_the_surrounding_evaluation() {
    assert_error("(5 + true) * 10", "type mismatch: INTEGER + BOOLEAN");
    assert_error("-(5 + true)", "type mismatch: INTEGER + BOOLEAN");
    assert_error("if (5 + true) { 10 }", "type mismatch: INTEGER + BOOLEAN");
    assert_error("return 5 + true;", "type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn error_objects_render_their_message_verbatim() {
    assert_eq!(run("5 + true").to_string(), "type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn division_by_zero_yields_null() {
    assert_null("5 / 0");
    assert_null("5 / (1 - 1)");
    assert_error("5 / 0 + 1", "type mismatch: NULL + INTEGER");
}

#[test]
fn integer_overflow_is_an_error_object() {
    assert_error("9223372036854775807 + 1",
                 "integer overflow: 9223372036854775807 + 1");
    assert_error("-9223372036854775807 - 2",
                 "integer overflow: -9223372036854775807 - 2");
}

#[test]
fn environment_dependent_constructs_yield_null_for_now() {
    assert_null("let a = 5;");
    assert_null("foobar");
    assert_null("fn(x) { x }(5)");
    assert_null("[1, 2, 3][0]");
    assert_null("{1: 2}");
}

#[test]
fn evaluation_is_deterministic_and_leaves_the_ast_untouched() {
    let mut parser = Parser::new(TokenStream::new("if (10 > 1) { return 2 * 5; } 9;"));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty());

    let snapshot = program.clone();
    let first = eval_program(&program);
    let second = eval_program(&program);

    assert_eq!(first, Object::Integer(10));
    assert_eq!(first, second);
    assert_eq!(program, snapshot);
}

#[test]
fn repl_prints_results_and_diagnostics() {
    let mut input = "5 + 5;\nlet x 5;\n".as_bytes();
    let mut output = Vec::new();

    repl::start(&mut input, &mut output).unwrap();
    let printed = String::from_utf8(output).unwrap();

    assert!(printed.contains("10"), "{printed}");
    assert!(printed.contains("parser errors:"), "{printed}");
    assert!(printed.contains("Expected '=', found '5'."), "{printed}");
}
