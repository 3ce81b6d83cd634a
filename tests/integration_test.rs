// Integration tests for the formula → truth table pipeline

use veritab::eval::table::TruthTable;
use veritab::parser::lexer::Lexer;
use veritab::parser::parse::Parser;

// === TABLE OUTPUT TESTS ===

#[test]
fn test_and_table() {
    let mut lexer = Lexer::new("a & b");
    let tokens = lexer.tokenize().expect("Tokenization failed");
    let expr = Parser::new(tokens).parse().expect("Parsing failed");
    let table = TruthTable::build(&expr).expect("Table construction failed");

    let expected = "\
| a | b | - |
| 1 | 1 | 1 |
| 1 | 0 | 0 |
| 0 | 1 | 0 |
| 0 | 0 | 0 |
";
    assert_eq!(table.to_string(), expected);
}

#[test]
fn test_implication_table() {
    let mut lexer = Lexer::new("a => b");
    let tokens = lexer.tokenize().expect("Tokenization failed");
    let expr = Parser::new(tokens).parse().expect("Parsing failed");
    let table = TruthTable::build(&expr).expect("Table construction failed");

    let expected = "\
| a | b | - |
| 1 | 1 | 1 |
| 1 | 0 | 0 |
| 0 | 1 | 1 |
| 0 | 0 | 1 |
";
    assert_eq!(table.to_string(), expected);
}

#[test]
fn test_three_variable_table() {
    let mut lexer = Lexer::new("a & b + c");
    let tokens = lexer.tokenize().expect("Tokenization failed");
    let expr = Parser::new(tokens).parse().expect("Parsing failed");
    let table = TruthTable::build(&expr).expect("Table construction failed");

    // '&' binds tighter than '+', so this is (a & b) + c
    let expected = "\
| a | b | c | - |
| 1 | 1 | 1 | 1 |
| 1 | 1 | 0 | 1 |
| 1 | 0 | 1 | 1 |
| 1 | 0 | 0 | 0 |
| 0 | 1 | 1 | 1 |
| 0 | 1 | 0 | 0 |
| 0 | 0 | 1 | 1 |
| 0 | 0 | 0 | 0 |
";
    assert_eq!(table.to_string(), expected);
}

#[test]
fn test_single_variable_table() {
    let mut lexer = Lexer::new("x");
    let tokens = lexer.tokenize().expect("Tokenization failed");
    let expr = Parser::new(tokens).parse().expect("Parsing failed");
    let table = TruthTable::build(&expr).expect("Table construction failed");

    let expected = "\
| x | - |
| 1 | 1 |
| 0 | 0 |
";
    assert_eq!(table.to_string(), expected);
}

#[test]
fn test_multi_letter_variables_sort_by_name() {
    let mut lexer = Lexer::new("foo & bar");
    let tokens = lexer.tokenize().expect("Tokenization failed");
    let expr = Parser::new(tokens).parse().expect("Parsing failed");
    let table = TruthTable::build(&expr).expect("Table construction failed");

    let expected = "\
| bar | foo | - |
| 1 | 1 | 1 |
| 1 | 0 | 0 |
| 0 | 1 | 0 |
| 0 | 0 | 0 |
";
    assert_eq!(table.to_string(), expected);
}

#[test]
fn test_whitespace_is_insignificant() {
    let render = |text: &str| {
        let mut lexer = Lexer::new(text);
        let tokens = lexer.tokenize().expect("Tokenization failed");
        let expr = Parser::new(tokens).parse().expect("Parsing failed");
        TruthTable::build(&expr)
            .expect("Table construction failed")
            .to_string()
    };

    assert_eq!(render("a&b+~c"), render("  a  &  b\t+ ~ c "));
}

#[test]
fn test_repeated_variable_gets_one_column() {
    let mut lexer = Lexer::new("a & a + a");
    let tokens = lexer.tokenize().expect("Tokenization failed");
    let expr = Parser::new(tokens).parse().expect("Parsing failed");
    let table = TruthTable::build(&expr).expect("Table construction failed");

    assert_eq!(table.variables(), ["a"]);
    assert_eq!(table.rows().len(), 2);
}

// === ASSOCIATIVITY THROUGH FULL TABLES ===

#[test]
fn test_implication_chain_associates_left() {
    let render = |text: &str| {
        let mut lexer = Lexer::new(text);
        let tokens = lexer.tokenize().expect("Tokenization failed");
        let expr = Parser::new(tokens).parse().expect("Parsing failed");
        TruthTable::build(&expr)
            .expect("Table construction failed")
            .to_string()
    };

    // Left and right groupings of => genuinely differ, so this pins the
    // chain to the left grouping.
    let chain = render("a => b => c");
    assert_eq!(chain, render("(a => b) => c"));
    assert_ne!(chain, render("a => (b => c)"));
}

// === ERROR SURFACING ===

#[test]
fn test_unknown_character_is_a_lex_error() {
    let mut lexer = Lexer::new("a $ b");
    let err = lexer.tokenize().unwrap_err();

    let message = err.to_string();
    assert!(message.contains('$'), "message was: {}", message);
    assert!(
        message.contains("line 1, column 3"),
        "message was: {}",
        message
    );
}

#[test]
fn test_truncated_implies_is_a_lex_error() {
    let mut lexer = Lexer::new("a =");
    let err = lexer.tokenize().unwrap_err();

    let message = err.to_string();
    assert!(message.contains("'>'"), "message was: {}", message);
}

#[test]
fn test_missing_rparen_is_a_parse_error() {
    let mut lexer = Lexer::new("(a & b");
    let tokens = lexer.tokenize().expect("Tokenization failed");
    let err = Parser::new(tokens).parse().unwrap_err();

    let message = err.to_string();
    assert!(message.contains("')'"), "message was: {}", message);
}

#[test]
fn test_trailing_rparen_is_a_parse_error() {
    let mut lexer = Lexer::new("a & b)");
    let tokens = lexer.tokenize().expect("Tokenization failed");
    let err = Parser::new(tokens).parse().unwrap_err();

    let message = err.to_string();
    assert!(
        message.contains("after formula"),
        "message was: {}",
        message
    );
}

#[test]
fn test_empty_input_is_a_parse_error() {
    let mut lexer = Lexer::new("");
    let tokens = lexer.tokenize().expect("Tokenization failed");
    let err = Parser::new(tokens).parse().unwrap_err();

    let message = err.to_string();
    assert!(
        message.contains("end of input"),
        "message was: {}",
        message
    );
}

// === DISPLAY ROUND TRIP ===

#[test]
fn test_display_round_trips_through_the_parser() {
    let mut lexer = Lexer::new("~(a + b) => c & d <=> e");
    let tokens = lexer.tokenize().expect("Tokenization failed");
    let expr = Parser::new(tokens).parse().expect("Parsing failed");

    let rendered = expr.to_string();
    let mut lexer = Lexer::new(&rendered);
    let tokens = lexer.tokenize().expect("Tokenization failed");
    let reparsed = Parser::new(tokens).parse().expect("Parsing failed");

    assert_eq!(rendered, reparsed.to_string());
}

#[test]
fn test_free_variables_survive_the_pipeline() {
    let mut lexer = Lexer::new("zz & a + b & a");
    let tokens = lexer.tokenize().expect("Tokenization failed");
    let expr = Parser::new(tokens).parse().expect("Parsing failed");

    let mut names: Vec<String> = expr.variables().into_iter().collect();
    names.sort();
    assert_eq!(names, ["a", "b", "zz"]);

    let table = TruthTable::build(&expr).expect("Table construction failed");
    assert_eq!(table.variables(), ["a", "b", "zz"]);
    assert_eq!(table.rows().len(), 8);
}
