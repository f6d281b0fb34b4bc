use crate::Script;
use crate::parser::ast::{Operand, Statement};

fn first_initializer(script: &Script) -> crate::parser::ast::Expr {
    let function = script.root().functions().next().unwrap();
    let Some(crate::parser::ast::FunctionBody::Block(block)) = function.body() else {
        panic!("expected block body");
    };
    let Some(Statement::VarDecl(decl)) = block.statements().next() else {
        panic!("expected var-decl");
    };
    decl.initializer().unwrap()
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let script = Script::new("function f() { int x = 1 + 2 * 3; }").unwrap();
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
            Assign "="
            Expression
              Literal
                Int "1"
              BinaryRhs
                Plus "+"
                Expression
                  Literal
                    Int "2"
                  BinaryRhs
                    Star "*"
                    Expression
                      Literal
                        Int "3"
            Semicolon ";"
          BraceClose "}"
    "#);
}

#[test]
fn same_tier_operators_stay_flat() {
    let script = Script::new("function f() { int x = 1 - 2 - 3; }").unwrap();
    assert!(script.is_valid());

    let expr = first_initializer(&script);
    let tails: Vec<_> = expr.binary_rhs().collect();
    assert_eq!(tails.len(), 2);
    assert_eq!(tails[0].operator().unwrap().text(), "-");
    assert_eq!(tails[1].operator().unwrap().text(), "-");
    // Neither tail continues the chain; same-tier operators associate at one level.
    assert_eq!(tails[0].expression().unwrap().binary_rhs().count(), 0);
    assert_eq!(tails[1].expression().unwrap().binary_rhs().count(), 0);
}

#[test]
fn parenthesized_expression() {
    let script = Script::new("function f() { int x = (1 + 2) * 3; }").unwrap();
    assert!(script.is_valid());

    let expr = first_initializer(&script);
    let Some(Operand::Paren(inner)) = expr.operand() else {
        panic!("expected parenthesized operand");
    };
    assert_eq!(inner.binary_rhs().count(), 1);
    let tails: Vec<_> = expr.binary_rhs().collect();
    assert_eq!(tails.len(), 1);
    assert_eq!(tails[0].operator().unwrap().text(), "*");
}

#[test]
fn comparison_operators() {
    let script = Script::new("function f() { x = a < b === c; }").unwrap();
    assert!(script.is_valid());

    let function = script.root().functions().next().unwrap();
    let Some(crate::parser::ast::FunctionBody::Block(block)) = function.body() else {
        panic!("expected block body");
    };
    let Some(Statement::Assignment(assign)) = block.statements().next() else {
        panic!("expected assignment");
    };
    let expr = assign.value().unwrap();
    let tails: Vec<_> = expr.binary_rhs().collect();
    assert_eq!(tails.len(), 2);
    assert_eq!(tails[0].operator().unwrap().text(), "<");
    assert_eq!(tails[1].operator().unwrap().text(), "===");
}

#[test]
fn literal_kinds() {
    let script = Script::new("function f() { int x = 0xFF; float y = 1.5; }").unwrap();
    assert!(script.is_valid());

    let function = script.root().functions().next().unwrap();
    let Some(crate::parser::ast::FunctionBody::Block(block)) = function.body() else {
        panic!("expected block body");
    };
    let literals: Vec<String> = block
        .statements()
        .filter_map(|statement| match statement {
            Statement::VarDecl(decl) => decl.initializer(),
            Statement::Assignment(assign) => assign.value(),
        })
        .filter_map(|expr| match expr.operand() {
            Some(Operand::Literal(literal)) => {
                Some(literal.token().unwrap().text().to_string())
            }
            _ => None,
        })
        .collect();
    assert_eq!(literals, vec!["0xFF", "1.5"]);
}
