use crate::Script;
use crate::parser::ast::Statement;

#[test]
fn var_decl_without_initializer() {
    let script = Script::new("function f() { int x; }").unwrap();
    assert!(script.is_valid());
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
            Ident "x"
            Semicolon ";"
          BraceClose "}"
    "#);
}

#[test]
fn assignment_statement() {
    let script = Script::new("function f() { x = y; }").unwrap();
    assert!(script.is_valid());
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
          Assignment
            Ident "x"
            Assign "="
            Expression
              NameRef
                Ident "y"
            Semicolon ";"
          BraceClose "}"
    "#);
}

#[test]
fn statement_sequence_keeps_order() {
    let source = "\
function f() {
    int x = 1;
    x = x + 2;
    float y;
}
";
    let script = Script::new(source).unwrap();
    assert!(script.is_valid());

    let function = script.root().functions().next().unwrap();
    let Some(crate::parser::ast::FunctionBody::Block(block)) = function.body() else {
        panic!("expected block body");
    };
    let statements: Vec<_> = block.statements().collect();
    assert_eq!(statements.len(), 3);

    let Statement::VarDecl(first) = &statements[0] else {
        panic!("expected var-decl");
    };
    assert_eq!(first.name().unwrap().text(), "x");
    assert!(first.initializer().is_some());

    let Statement::Assignment(second) = &statements[1] else {
        panic!("expected assignment");
    };
    assert_eq!(second.target().unwrap().text(), "x");
    assert!(second.value().is_some());

    let Statement::VarDecl(third) = &statements[2] else {
        panic!("expected var-decl");
    };
    assert_eq!(third.type_token().unwrap().text(), "float");
    assert!(third.initializer().is_none());
}
