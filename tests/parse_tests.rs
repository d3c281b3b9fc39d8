// Integration tests for the minilang front end

use minilang::parser::ast::{Expr, Id, IntLiteral, SourceLocation, Stmt};
use minilang::parser::lexer::{Lexer, Token};
use minilang::parser::parse::Parser;

fn parse(source: &str) -> Result<minilang::parser::ast::Program, String> {
    let mut parser = Parser::new(source).map_err(|e| e.to_string())?;
    parser.parse_program().map_err(|e| e.to_string())
}

#[test]
fn test_token_sequence_for_simple_program() {
    let source = "var a init a = 5 write a";
    let tokens = Lexer::new(source).tokenize().expect("tokenize failed");

    assert!(matches!(tokens[0], Token::Var(_)));
    assert!(matches!(tokens[1], Token::Ident(ref s, _) if s == "a"));
    assert!(matches!(tokens[2], Token::Init(_)));
    assert!(matches!(tokens[3], Token::Ident(ref s, _) if s == "a"));
    assert!(matches!(tokens[4], Token::Equals(_)));
    assert!(matches!(tokens[5], Token::IntLiteral(ref s, _) if s == "5"));
    assert!(matches!(tokens[6], Token::Write(_)));
    assert!(matches!(tokens[7], Token::Ident(ref s, _) if s == "a"));
    assert!(matches!(tokens[8], Token::Eof(_)));
    assert_eq!(tokens.len(), 9);
}

#[test]
fn test_simple_program_ast_shape() {
    let program = parse("var a init a = 5 write a").expect("parse failed");

    assert_eq!(program.vars.len(), 1);
    assert_eq!(program.vars[0].name, "a");

    assert_eq!(program.stmts.len(), 2);
    match &program.stmts[0] {
        Stmt::Init { target, value } => {
            assert_eq!(target.name, "a");
            assert_eq!(value.value, 5);
        }
        other => panic!("Expected init statement, got {:?}", other),
    }
    match &program.stmts[1] {
        Stmt::Write { target } => assert_eq!(target.name, "a"),
        other => panic!("Expected write statement, got {:?}", other),
    }
}

#[test]
fn test_empty_program_parses() {
    let program = parse("").expect("parse failed");

    assert!(program.vars.is_empty());
    assert!(program.stmts.is_empty());
}

#[test]
fn test_duplicate_declaration_names_variable() {
    let err = parse("var x var x").unwrap_err();

    assert!(err.contains("already declared"), "got: {}", err);
    assert!(err.contains('x'), "got: {}", err);
}

#[test]
fn test_missing_then_reports_expected_and_actual() {
    let err = parse("if a = b endif").unwrap_err();

    assert!(err.contains("Expected 'then'"), "got: {}", err);
    assert!(err.contains("'endif'"), "got: {}", err);
}

#[test]
fn test_use_before_declare_is_not_checked() {
    // The front end only rejects duplicate declarations; using an
    // undeclared variable is accepted and left for later phases.
    let program = parse("calculate a = a + 1").expect("parse failed");

    assert!(program.vars.is_empty());
    match &program.stmts[0] {
        Stmt::Calculate { target, expr } => {
            assert_eq!(target.name, "a");
            assert!(matches!(expr, Expr::Plus { .. }));
        }
        other => panic!("Expected calculate statement, got {:?}", other),
    }
}

#[test]
fn test_unexpected_character_fails_the_parse() {
    // '&' is a lexical error. It is reported as such (with its position),
    // never silently treated as end of input, so the parse can not
    // spuriously succeed.
    let err = parse("a & b").unwrap_err();

    assert!(err.contains('&'), "got: {}", err);
    assert!(err.contains("line 1, column 3"), "got: {}", err);
}

#[test]
fn test_statement_section_cannot_precede_declarations() {
    // Once statements start, a 'var' ends the Stmts loop and must then
    // match Eof, so a late declaration is a syntax error.
    let err = parse("write a var b").unwrap_err();

    assert!(err.contains("end of input"), "got: {}", err);
    assert!(err.contains("'var'"), "got: {}", err);
}

#[test]
fn test_demo_program_parses_and_dumps() {
    let source = "
        var a
        var b
        init a = 1
        init b = 5
        while a != b do
            calculate a = a + 1
            write a
            if a = b then
                write a
            endif
        endwhile
    ";

    let program = parse(source).expect("parse failed");

    assert_eq!(program.vars.len(), 2);
    assert_eq!(program.stmts.len(), 3);

    let expected_dump = "\
AST Variables
AST id a
AST id b
AST Statements
AST init
AST id a
AST int literal 1
AST init
AST id b
AST int literal 5
AST while
LHS: AST id a
RHS: AST id b
while body
AST calculate
AST id a
AST plus
LHS: AST id a
RHS: AST int literal 1
AST write
AST id a
AST if
LHS: AST id a
RHS: AST id b
if body
AST write
AST id a
AST endif
AST endwhile

";
    assert_eq!(program.to_string(), expected_dump);
}

#[test]
fn test_simple_program_dump() {
    let program = parse("var a init a = 5 write a").expect("parse failed");

    assert_eq!(
        program.to_string(),
        "AST Variables\n\
         AST id a\n\
         AST Statements\n\
         AST init\n\
         AST id a\n\
         AST int literal 5\n\
         AST write\n\
         AST id a\n"
    );
}

#[test]
fn test_derivation_matches_ast_shape() {
    // Structural round trip: a derivation of the grammar maps onto the
    // exact node tree it describes.
    let program = parse(
        "var total var step \
         init total = 0 \
         init step = 1 \
         calculate total = total + step + 2 \
         write total",
    )
    .expect("parse failed");

    let names: Vec<&str> =
        program.vars.iter().map(|id| id.name.as_str()).collect();
    assert_eq!(names, vec!["total", "step"]);

    match &program.stmts[2] {
        Stmt::Calculate { expr, .. } => match expr {
            Expr::Plus { left, right, .. } => {
                assert!(matches!(
                    **right,
                    Expr::IntLiteral(IntLiteral { value: 2, .. })
                ));
                assert!(matches!(**left, Expr::Plus { .. }));
            }
            other => panic!("Expected plus node, got {:?}", other),
        },
        other => panic!("Expected calculate statement, got {:?}", other),
    }
}

#[test]
fn test_error_reports_location_of_offending_token() {
    let err = parse("var a\ninit a = b").unwrap_err();

    assert!(err.contains("line 2, column 10"), "got: {}", err);
}

#[test]
fn test_separate_parsers_are_independent() {
    // Each parse owns its symbol table; a name declared in one program is
    // free in the next.
    parse("var a").expect("first parse failed");
    parse("var a").expect("second parse failed");
}

#[test]
fn test_trace_reports_every_matched_token() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let matched: Rc<RefCell<Vec<String>>> = Rc::default();
    let seen = Rc::clone(&matched);

    let mut parser = Parser::new("var a init a = 5 write a")
        .expect("tokenize failed")
        .with_trace(Box::new(move |token| {
            seen.borrow_mut().push(token.to_string());
        }));
    parser.parse_program().expect("parse failed");

    assert_eq!(
        *matched.borrow(),
        vec![
            "'var'",
            "identifier 'a'",
            "'init'",
            "identifier 'a'",
            "'='",
            "int literal 5",
            "'write'",
            "identifier 'a'",
            "end of input",
        ]
    );
}

#[test]
fn test_id_nodes_carry_locations() {
    let program = parse("var a write a").expect("parse failed");

    assert_eq!(program.vars[0].location, SourceLocation::new(1, 5));
    match &program.stmts[0] {
        Stmt::Write { target } => {
            assert_eq!(
                *target,
                Id {
                    name: "a".to_string(),
                    location: SourceLocation::new(1, 13),
                }
            );
        }
        other => panic!("Expected write statement, got {:?}", other),
    }
}
