use crate::{Error, Script};
use crate::parser::SyntaxKind;

#[test]
fn never_panics_on_garbage() {
    let garbage_inputs = [
        "@#$%^&*()",
        "{{{{{{",
        "}}}}}}",
        "function function function",
        "public public public",
        ";;;;;;",
        "=== === ===",
        "",
        "   \n\t\r  ",
        "🦀🦀🦀",
        "( ) { } ; , ...",
        "returns returns",
        "int int int",
    ];

    for input in garbage_inputs {
        let script = Script::new(input).expect("garbage never hits the recursion limit");
        assert_eq!(script.syntax().text().to_string(), input, "{input:?}");
    }
}

#[test]
fn malformed_inputs_round_trip() {
    let inputs = [
        "function foo() int x = 1; }",
        "function foo ( , ) { }",
        "function foo() = ;",
        "function f() { int = 1; }",
        "function f() { x = 1 @ 2; }",
        "$$$ function f() { } ;;; function g() = external;",
    ];
    for input in inputs {
        let script = Script::new(input).unwrap();
        assert!(!script.is_valid());
        assert_eq!(script.syntax().text().to_string(), input, "{input:?}");
    }
}

#[test]
fn diagnostics_and_events_are_deterministic() {
    let source = "function foo() int x = 1; } function bar ( , ) { int = 2 }";
    let first = Script::new(source).unwrap();
    let second = Script::new(source).unwrap();
    assert_eq!(first.dump_cst_full(), second.dump_cst_full());
    assert_eq!(first.dump_diagnostics(), second.dump_diagnostics());
}

#[test]
fn every_function_gets_a_node_even_in_bad_input() {
    let source = "function a() { function b() = ; function c() int x; }";
    let script = Script::new(source).unwrap();
    assert!(!script.is_valid());
    assert_eq!(script.root().functions().count(), 3);
}

#[test]
fn required_positions_are_filled_not_dropped() {
    let script = Script::new("function () = ;").unwrap();
    assert!(!script.is_valid());

    let missing: Vec<_> = script
        .syntax()
        .descendants()
        .filter(|node| node.kind() == SyntaxKind::Missing)
        .collect();
    // Name and `external` keyword both synthesized.
    assert_eq!(missing.len(), 2);
}

#[test]
fn recursion_limit_is_fatal() {
    let mut source = String::from("function f() { x = ");
    for _ in 0..400 {
        source.push('(');
    }
    source.push('1');
    let result = Script::new(source);
    assert!(matches!(result, Err(Error::RecursionLimitExceeded)));
}

#[test]
fn shallow_nesting_is_fine() {
    let mut source = String::from("function f() { x = ");
    for _ in 0..40 {
        source.push('(');
    }
    source.push('1');
    for _ in 0..40 {
        source.push(')');
    }
    source.push_str("; }");
    let script = Script::new(source).unwrap();
    assert!(script.is_valid());
}
