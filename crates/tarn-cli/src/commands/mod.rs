pub mod ast;
pub mod check;
pub mod tokens;

use std::fs;

use crate::cli::SourceArgs;

/// Loads the source text from a file or the inline `-e` argument.
pub fn load_source(args: &SourceArgs) -> Result<(String, Option<String>), String> {
    match (&args.path, &args.text) {
        (Some(path), None) => {
            let text = fs::read_to_string(path)
                .map_err(|err| format!("cannot read {}: {err}", path.display()))?;
            Ok((text, Some(path.display().to_string())))
        }
        (None, Some(text)) => Ok((text.clone(), None)),
        (None, None) => Err("provide a file path or inline text with -e".to_string()),
        (Some(_), Some(_)) => unreachable!("clap rejects path together with -e"),
    }
}
