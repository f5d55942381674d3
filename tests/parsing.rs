use sprig::{
    ast::{Expr, Program, Statement},
    error::ParseError,
    interpreter::{lexer::TokenStream, parser::core::Parser},
};

fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(TokenStream::new(source));
    let program = parser.parse_program();
    let errors = parser.into_errors();
    (program, errors)
}

fn assert_renders(source: &str, expected: &str) {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "unexpected parse errors for {source:?}: {errors:?}");
    assert_eq!(program.to_string(), expected, "wrong rendering for {source:?}");
}

#[test]
fn operator_precedence_rendering() {
    let tests = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true", "true"),
                 ("false", "false"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))")];

    for (source, expected) in tests {
        assert_renders(source, expected);
    }
}

#[test]
fn multiple_statements_render_in_order() {
    assert_renders("let x = 5; x + 1;", "let x = 5; (x + 1)");
}

#[test]
fn let_statements_carry_parsed_values() {
    let (program, errors) = parse("let x = 5;\nlet y = 10;\nlet foobar = 838383;");
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(program.statements.len(), 3);

    let expected = [("x", 5), ("y", 10), ("foobar", 838_383)];
    for (statement, (name, value)) in program.statements.iter().zip(expected) {
        match statement {
            Statement::Let { name: bound, value: expr } => {
                assert_eq!(bound, name);
                assert_eq!(*expr, Expr::IntegerLiteral { value });
            },
            other => panic!("expected let statement, got {other:?}"),
        }
    }
}

#[test]
fn let_values_use_the_full_expression_parser() {
    assert_renders("let x = 1 + 2 * 3;", "let x = (1 + (2 * 3));");
    assert_renders("let ok = !true;", "let ok = (!true);");
}

#[test]
fn return_statements_carry_parsed_values() {
    assert_renders("return 5;", "return 5;");
    assert_renders("return 2 * 5;", "return (2 * 5);");
    assert_renders("return;", "return;");

    let (program, errors) = parse("if (x) { return }");
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(program.to_string(), "if (x) { return; }");
}

#[test]
fn if_expressions_parse_both_branches() {
    assert_renders("if (x < y) { x }", "if ((x < y)) { x }");
    assert_renders("if (x < y) { x } else { y }", "if ((x < y)) { x } else { y }");
}

#[test]
fn function_literals_and_calls() {
    assert_renders("fn(x, y) { x + y; }", "fn(x, y) { (x + y) }");
    assert_renders("fn() { 5; }", "fn() { 5 }");
    assert_renders("add(1, 2 * 3, 4 + 5)", "add(1, (2 * 3), (4 + 5))");
    assert_renders("fn(x) { x }(5)", "fn(x) { x }(5)");
}

#[test]
fn string_and_composite_literals() {
    assert_renders("\"hello world\"", "\"hello world\"");
    assert_renders("[1, 2 * 2, 3 + 3]", "[1, (2 * 2), (3 + 3)]");
    assert_renders("myArray[1 + 1]", "(myArray[(1 + 1)])");

    let (program, errors) = parse("{1: 2, true: 3, \"four\": 5}");
    assert!(errors.is_empty(), "{errors:?}");
    match &program.statements[..] {
        [Statement::Expression { expr: Expr::Hash { pairs } }] => assert_eq!(pairs.len(), 3),
        other => panic!("expected a hash literal statement, got {other:?}"),
    }
    assert_eq!(program.to_string(), "{1: 2, true: 3, \"four\": 5}");

    let (program, errors) = parse("{}");
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(program.to_string(), "{}");
}

#[test]
fn malformed_let_produces_one_diagnostic_and_parsing_continues() {
    let (program, errors) = parse("let x 5; let y = 10;");

    assert_eq!(errors.len(), 1, "{errors:?}");
    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.to_string(), "let y = 10;");
}

#[test]
fn each_malformed_statement_produces_its_own_diagnostic() {
    let (program, errors) = parse("let = 5; let y 10; foobar;");

    assert_eq!(errors.len(), 2, "{errors:?}");
    assert_eq!(program.to_string(), "foobar");
}

#[test]
fn token_without_prefix_rule_is_a_diagnostic_not_a_crash() {
    let (program, errors) = parse("+ 5; 42;");

    assert_eq!(errors.len(), 1, "{errors:?}");
    assert!(matches!(errors[0], ParseError::NoPrefixParseFunction { .. }), "{:?}", errors[0]);
    assert_eq!(program.to_string(), "42");
}

#[test]
fn unrecognized_characters_are_diagnosed() {
    let (_, errors) = parse("let a = 1 @ 2;");

    assert_eq!(errors.len(), 1, "{errors:?}");
    assert!(matches!(errors[0], ParseError::IllegalCharacter { .. }), "{:?}", errors[0]);
}

#[test]
fn unclosed_block_is_diagnosed() {
    let (_, errors) = parse("if (x) { 1");

    assert_eq!(errors.len(), 1, "{errors:?}");
    assert!(matches!(errors[0], ParseError::UnclosedBlock { .. }), "{:?}", errors[0]);
}

#[test]
fn diagnostics_carry_the_source_line() {
    let (_, errors) = parse("let a = 1;\nlet b 2;");

    assert_eq!(errors.len(), 1, "{errors:?}");
    assert_eq!(errors[0].to_string(), "Error on line 2: Expected '=', found '2'.");
}
