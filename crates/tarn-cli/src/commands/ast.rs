use std::process::ExitCode;

use serde_json::{Value, json};
use tarn_lib::Script;
use tarn_lib::parser::cst::SyntaxElement;
use tarn_lib::parser::{SyntaxNode, dump_tree};

use super::load_source;
use crate::cli::AstArgs;

pub fn run(args: AstArgs) -> ExitCode {
    let (source, path) = match load_source(&args.source) {
        Ok(loaded) => loaded,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    let script = match Script::new(source) {
        Ok(script) => script,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        let tree = tree_to_json(&script.syntax(), args.trivia);
        println!(
            "{}",
            serde_json::to_string_pretty(&tree).expect("tree serializes")
        );
    } else {
        print!("{}", dump_tree(&script.syntax(), args.trivia));
    }

    if !script.is_valid() {
        let mut printer = script.diagnostics_printer();
        if let Some(path) = path.as_deref() {
            printer = printer.path(path);
        }
        eprintln!("{}", printer.render());
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Nodes become `{kind, children}`, tokens `{kind, text}`.
pub(crate) fn tree_to_json(node: &SyntaxNode, with_trivia: bool) -> Value {
    let children: Vec<Value> = node
        .children_with_tokens()
        .filter_map(|child| match child {
            SyntaxElement::Node(node) => Some(tree_to_json(&node, with_trivia)),
            SyntaxElement::Token(token) => {
                if !with_trivia && token.kind().is_trivia() {
                    return None;
                }
                Some(json!({
                    "kind": format!("{:?}", token.kind()),
                    "text": token.text(),
                }))
            }
        })
        .collect();
    json!({
        "kind": format!("{:?}", node.kind()),
        "children": children,
    })
}
