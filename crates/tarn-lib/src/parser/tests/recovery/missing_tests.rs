use crate::Script;

#[test]
fn missing_opening_brace() {
    let script = Script::new("function foo() int x = 1; }").unwrap();
    assert!(!script.is_valid());
    insta::assert_snapshot!(script.dump_diagnostics(), @"error at 1:16: missing '{'");
    insta::assert_snapshot!(script.dump_cst(), @r#"
    Root
      FunctionDef
        KwFunction "function"
        Ident "foo"
        Signature
          ParenOpen "("
          ParamList
          ParenClose ")"
        BlockBody
          Missing
            BraceOpen ""
          VarDecl
            TypeName "int"
            Ident "x"
            Assign "="
            Expression
              Literal
                Int "1"
            Semicolon ";"
          BraceClose "}"
    "#);
}

#[test]
fn missing_semicolon() {
    let script = Script::new("function foo() { int x = 1 }").unwrap();
    assert!(!script.is_valid());
    insta::assert_snapshot!(script.dump_diagnostics(), @"error at 1:28: missing ';'");

    // The declaration is complete apart from the synthesized terminator.
    let function = script.root().functions().next().unwrap();
    let Some(crate::parser::ast::FunctionBody::Block(block)) = function.body() else {
        panic!("expected block body");
    };
    let statements: Vec<_> = block.statements().collect();
    assert_eq!(statements.len(), 1);
    let crate::parser::ast::Statement::VarDecl(decl) = &statements[0] else {
        panic!("expected var-decl");
    };
    assert_eq!(decl.name().unwrap().text(), "x");
    assert!(decl.initializer().is_some());
}

#[test]
fn missing_external_keyword() {
    let script = Script::new("function foo() = ;").unwrap();
    assert!(!script.is_valid());
    insta::assert_snapshot!(script.dump_diagnostics(), @"error at 1:18: missing 'external'");
    insta::assert_snapshot!(script.dump_cst(), @r#"
    Root
      FunctionDef
        KwFunction "function"
        Ident "foo"
        Signature
          ParenOpen "("
          ParamList
          ParenClose ")"
        ExternalBody
          Assign "="
          Missing
            KwExternal ""
          Semicolon ";"
    "#);
}

#[test]
fn missing_function_name() {
    let script = Script::new("function () { }").unwrap();
    assert!(!script.is_valid());
    insta::assert_snapshot!(script.dump_diagnostics(), @"error at 1:10: missing function name");

    let function = script.root().functions().next().unwrap();
    assert!(function.name().is_none());
    assert!(function.body().is_some());
}

#[test]
fn missing_close_brace_syncs_on_next_function() {
    let source = "\
function a() { int x = 1;
function b() { }
";
    let script = Script::new(source).unwrap();
    assert!(!script.is_valid());
    insta::assert_snapshot!(script.dump_diagnostics(), @"error at 2:1: missing '}'");
    assert_eq!(script.root().functions().count(), 2);
}

#[test]
fn missing_comma_between_parameters() {
    let script = Script::new("function f(int a int b) { }").unwrap();
    assert!(!script.is_valid());
    insta::assert_snapshot!(script.dump_diagnostics(), @"error at 1:18: missing ','");

    let function = script.root().functions().next().unwrap();
    assert_eq!(function.signature().unwrap().params().count(), 2);
}
