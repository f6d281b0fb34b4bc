use std::process::ExitCode;

use tarn_lib::Script;

use super::load_source;
use crate::cli::CheckArgs;

pub fn run(args: CheckArgs) -> ExitCode {
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

    if script.is_valid() {
        // Silent on success, like `cargo check`.
        return ExitCode::SUCCESS;
    }

    if args.json {
        let printer = script.diagnostics_printer();
        let views = printer.views();
        println!(
            "{}",
            serde_json::to_string_pretty(&views).expect("diagnostics serialize")
        );
    } else {
        let mut printer = script.diagnostics_printer().colored(args.color);
        if let Some(path) = path.as_deref() {
            printer = printer.path(path);
        }
        eprintln!("{}", printer.render());
    }
    ExitCode::FAILURE
}
