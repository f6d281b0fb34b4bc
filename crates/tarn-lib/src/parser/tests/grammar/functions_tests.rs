use crate::Script;
use crate::parser::ast::FunctionBody;

#[test]
fn well_formed_function() {
    let script = Script::new("function foo() returns int { int x = 1; }").unwrap();
    assert!(script.is_valid());
    insta::assert_snapshot!(script.dump_cst(), @r#"
    Root
      FunctionDef
        KwFunction "function"
        Ident "foo"
        Signature
          ParenOpen "("
          ParamList
          ParenClose ")"
          ReturnClause
            KwReturns "returns"
            TypeName "int"
        BlockBody
          BraceOpen "{"
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
fn public_external_function() {
    let script = Script::new("public function main() = external;").unwrap();
    assert!(script.is_valid());
    insta::assert_snapshot!(script.dump_cst(), @r#"
    Root
      FunctionDef
        KwPublic "public"
        KwFunction "function"
        Ident "main"
        Signature
          ParenOpen "("
          ParamList
          ParenClose ")"
        ExternalBody
          Assign "="
          KwExternal "external"
          Semicolon ";"
    "#);
}

#[test]
fn parameters_with_rest() {
    let script = Script::new("function sum(int a, int... rest) returns int { }").unwrap();
    assert!(script.is_valid());
    insta::assert_snapshot!(script.dump_cst(), @r#"
    Root
      FunctionDef
        KwFunction "function"
        Ident "sum"
        Signature
          ParenOpen "("
          ParamList
            Param
              TypeName "int"
              Ident "a"
            Comma ","
            Param
              TypeName "int"
              Ellipsis "..."
              Ident "rest"
          ParenClose ")"
          ReturnClause
            KwReturns "returns"
            TypeName "int"
        BlockBody
          BraceOpen "{"
          BraceClose "}"
    "#);
}

#[test]
fn typed_accessors() {
    let source = "\
public function first() returns int { int x = 1; }
function second() = external;
";
    let script = Script::new(source).unwrap();
    assert!(script.is_valid());

    let functions: Vec<_> = script.root().functions().collect();
    assert_eq!(functions.len(), 2);

    let first = &functions[0];
    assert!(first.is_public());
    assert_eq!(first.name().unwrap().text(), "first");
    let signature = first.signature().unwrap();
    assert_eq!(signature.params().count(), 0);
    assert_eq!(
        signature.return_clause().unwrap().type_token().unwrap().text(),
        "int"
    );
    assert!(matches!(first.body(), Some(FunctionBody::Block(_))));

    let second = &functions[1];
    assert!(!second.is_public());
    assert_eq!(second.name().unwrap().text(), "second");
    assert!(second.signature().unwrap().return_clause().is_none());
    assert!(matches!(second.body(), Some(FunctionBody::External(_))));
}

#[test]
fn param_accessors() {
    let script = Script::new("function f(string name, int... rest) { }").unwrap();
    assert!(script.is_valid());

    let function = script.root().functions().next().unwrap();
    let params: Vec<_> = function.signature().unwrap().params().collect();
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].type_token().unwrap().text(), "string");
    assert_eq!(params[0].name().unwrap().text(), "name");
    assert!(!params[0].is_rest());
    assert!(params[1].is_rest());
    assert_eq!(params[1].name().unwrap().text(), "rest");
}

#[test]
fn empty_input_is_valid() {
    let script = Script::new("").unwrap();
    assert!(script.is_valid());
    assert_eq!(script.root().functions().count(), 0);
    insta::assert_snapshot!(script.dump_cst(), @"Root");
}
