use indoc::indoc;

use crate::Script;

#[test]
fn leading_comment_attaches_to_root() {
    let input = indoc! {r#"
    // entry point
    function f() = external;
    "#};

    let script = Script::new(input).unwrap();
    assert!(script.is_valid());
    insta::assert_snapshot!(script.dump_cst_full(), @r#"
    Root
      LineComment "// entry point"
      Newline "\n"
      FunctionDef
        KwFunction "function"
        Whitespace " "
        Ident "f"
        Signature
          ParenOpen "("
          ParamList
          ParenClose ")"
        Whitespace " "
        ExternalBody
          Assign "="
          Whitespace " "
          KwExternal "external"
          Semicolon ";"
      Newline "\n"
    "#);
}

#[test]
fn comment_inside_block_stays_in_block() {
    let input = indoc! {r#"
    function f() {
        // todo
    }
    "#};

    let script = Script::new(input).unwrap();
    assert!(script.is_valid());
    insta::assert_snapshot!(script.dump_cst_full(), @r#"
    Root
      FunctionDef
        KwFunction "function"
        Whitespace " "
        Ident "f"
        Signature
          ParenOpen "("
          ParamList
          ParenClose ")"
        Whitespace " "
        BlockBody
          BraceOpen "{"
          Newline "\n"
          Whitespace "    "
          LineComment "// todo"
          Newline "\n"
          BraceClose "}"
      Newline "\n"
    "#);
}

#[test]
fn whitespace_is_preserved_between_tokens() {
    let input = "function  f( )  { }";
    let script = Script::new(input).unwrap();
    assert!(script.is_valid());
    insta::assert_snapshot!(script.dump_cst_full(), @r#"
    Root
      FunctionDef
        KwFunction "function"
        Whitespace "  "
        Ident "f"
        Signature
          ParenOpen "("
          Whitespace " "
          ParamList
          ParenClose ")"
        Whitespace "  "
        BlockBody
          BraceOpen "{"
          Whitespace " "
          BraceClose "}"
    "#);
}

#[test]
fn lossless_round_trip() {
    let inputs = [
        "function foo() returns int { int x = 1; }",
        "  // comment\nfunction f ( int a )\n{\n  a = a + 1;\n}\n",
        "public function main() = external;\n",
    ];
    for input in inputs {
        let script = Script::new(input).unwrap();
        assert_eq!(script.syntax().text().to_string(), input);
    }
}
