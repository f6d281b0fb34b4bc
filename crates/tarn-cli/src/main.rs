mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser as _;

use cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Command::Check(args) => commands::check::run(args),
        Command::Ast(args) => commands::ast::run(args),
        Command::Tokens(args) => commands::tokens::run(args),
    }
}
