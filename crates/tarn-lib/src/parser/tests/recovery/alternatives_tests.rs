use crate::Script;
use crate::parser::ast::{FunctionBody, Statement};

fn statements(script: &Script) -> Vec<Statement> {
    let function = script.root().functions().next().unwrap();
    let Some(FunctionBody::Block(block)) = function.body() else {
        panic!("expected block body");
    };
    block.statements().collect()
}

#[test]
fn identifier_starts_an_assignment() {
    let script = Script::new("function f() { x = 1; }").unwrap();
    assert!(script.is_valid());
    let statements = statements(&script);
    assert!(matches!(statements.as_slice(), [Statement::Assignment(_)]));
}

#[test]
fn type_starts_a_var_decl() {
    let script = Script::new("function f() { int x; }").unwrap();
    assert!(script.is_valid());
    let statements = statements(&script);
    assert!(matches!(statements.as_slice(), [Statement::VarDecl(_)]));
}

#[test]
fn var_decl_with_missing_name_beats_deletion() {
    let script = Script::new("function f() { int = 1; }").unwrap();
    assert!(!script.is_valid());
    insta::assert_snapshot!(script.dump_diagnostics(), @"error at 1:20: missing variable name");
    insta::assert_snapshot!(script.dump_cst(), @r#"
    Root
      FunctionDef
        KwFunction "function"
        Ident "f"
        Signature
          ParenOpen "("
          ParamList
          ParenClose ")"
        BlockBody
          BraceOpen "{"
          VarDecl
            TypeName "int"
            Missing
              Ident ""
            Assign "="
            Expression
              Literal
                Int "1"
            Semicolon ";"
          BraceClose "}"
    "#);
}

#[test]
fn bare_initializer_re_enters_as_assignment() {
    // Neither alternative's first token matches; the search picks the
    // assignment because one inserted name gets further than two fixes.
    let script = Script::new("function f() { = 1; }").unwrap();
    assert!(!script.is_valid());
    insta::assert_snapshot!(script.dump_diagnostics(), @"error at 1:16: missing variable name");

    let statements = statements(&script);
    let [Statement::Assignment(assignment)] = statements.as_slice() else {
        panic!("expected a single assignment");
    };
    assert!(assignment.target().is_none());
    assert!(assignment.value().is_some());
}

#[test]
fn block_alternative_wins_on_missing_brace() {
    let script = Script::new("function foo() int x = 1; }").unwrap();
    let function = script.root().functions().next().unwrap();
    assert!(matches!(function.body(), Some(FunctionBody::Block(_))));
}

#[test]
fn external_alternative_wins_on_equals() {
    let script = Script::new("function foo() = ;").unwrap();
    let function = script.root().functions().next().unwrap();
    assert!(matches!(function.body(), Some(FunctionBody::External(_))));
}

#[test]
fn alternative_choice_reports_once() {
    // Re-entering the chosen alternative must not double-report the
    // anchoring mismatch.
    for source in [
        "function foo() int x = 1; }",
        "function f() { = 1; }",
        "function f() { int = 1; }",
    ] {
        let script = Script::new(source).unwrap();
        assert_eq!(script.diagnostics().len(), 1, "source: {source}");
    }
}
