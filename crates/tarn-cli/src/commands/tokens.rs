use std::process::ExitCode;

use tarn_lib::parser::{lex, token_text};

use super::load_source;
use crate::cli::TokensArgs;

pub fn run(args: TokensArgs) -> ExitCode {
    let (source, _) = match load_source(&args.source) {
        Ok(loaded) => loaded,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };
    print!("{}", render_tokens(&source));
    ExitCode::SUCCESS
}

fn render_tokens(source: &str) -> String {
    let mut out = String::new();
    for token in lex(source) {
        let start = u32::from(token.span.start());
        let end = u32::from(token.span.end());
        out.push_str(&format!(
            "{:?}@{}..{} {:?}\n",
            token.kind,
            start,
            end,
            token_text(source, &token)
        ));
    }
    out
}
