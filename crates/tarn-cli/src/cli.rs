//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tarn",
    version,
    about = "Error-tolerant parser for the Tarn scripting language"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a script and report diagnostics. Silent on success.
    Check(CheckArgs),
    /// Print the concrete syntax tree.
    Ast(AstArgs),
    /// Print the token stream.
    Tokens(TokensArgs),
}

#[derive(Args)]
pub struct SourceArgs {
    /// Path to a .tarn file.
    pub path: Option<PathBuf>,

    /// Inline source text instead of a file.
    #[arg(short = 'e', long = "text", value_name = "TEXT", conflicts_with = "path")]
    pub text: Option<String>,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Render diagnostics with colors.
    #[arg(long)]
    pub color: bool,

    /// Emit diagnostics as JSON.
    #[arg(long, conflicts_with = "color")]
    pub json: bool,
}

#[derive(Args)]
pub struct AstArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Include whitespace and comments in the dump.
    #[arg(long)]
    pub trivia: bool,

    /// Emit the tree as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct TokensArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}
