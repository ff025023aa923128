//! sqlbase CLI
//!
//! Command-line tool that parses SqlBase SQL and prints the parse tree.

mod split;

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser as _, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use sqlbase_core::parser::DEFAULT_RECURSION_LIMIT;
use sqlbase_core::{Lexer, Parser, ParserOptions};

use split::split_statements;

/// Parse SqlBase SQL and print the resulting parse tree.
#[derive(clap::Parser)]
#[command(name = "sqlbase")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Maximum nesting depth before parsing fails.
    #[arg(long, env = "SQLBASE_RECURSION_LIMIT", default_value_t = DEFAULT_RECURSION_LIMIT)]
    recursion_limit: usize,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Debug)]
    format: Format,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one or more `;`-separated statements.
    Statement {
        /// Input file (stdin if not specified).
        file: Option<PathBuf>,
    },

    /// Parse a standalone expression.
    Expression {
        /// Input file (stdin if not specified).
        file: Option<PathBuf>,
    },

    /// Parse a standalone routine body (`RETURN ...` or `EXTERNAL ...`).
    RoutineBody {
        /// Input file (stdin if not specified).
        file: Option<PathBuf>,
    },

    /// Print the token stream.
    Tokens {
        /// Input file (stdin if not specified).
        file: Option<PathBuf>,

        /// Include whitespace and comments.
        #[arg(long)]
        trivia: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Rust debug rendering of the tree.
    Debug,
    /// Pretty-printed JSON.
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let options = ParserOptions::new().with_recursion_limit(cli.recursion_limit);
    debug!(recursion_limit = options.recursion_limit, "parser options");

    match cli.command {
        Commands::Statement { file } => {
            let sql = read_input(file.as_ref())?;
            let pieces = split_statements(&sql);
            info!("Parsing {} statement(s)...", pieces.len());
            for (index, tokens) in pieces.into_iter().enumerate() {
                let statement = Parser::from_tokens(tokens)
                    .with_options(options.clone())
                    .parse_statement()
                    .with_context(|| format!("statement {} failed to parse", index + 1))?;
                debug!(label = statement.statement.label(), "parsed statement");
                emit(&statement, cli.format)?;
            }
        }

        Commands::Expression { file } => {
            let sql = read_input(file.as_ref())?;
            let expression = Parser::new(&sql)
                .with_options(options)
                .parse_expression()
                .context("expression failed to parse")?;
            emit(&expression, cli.format)?;
        }

        Commands::RoutineBody { file } => {
            let sql = read_input(file.as_ref())?;
            let body = Parser::new(&sql)
                .with_options(options)
                .parse_routine_body()
                .context("routine body failed to parse")?;
            emit(&body, cli.format)?;
        }

        Commands::Tokens { file, trivia } => {
            let sql = read_input(file.as_ref())?;
            let mut lexer = Lexer::new(&sql);
            let tokens = if trivia {
                lexer.tokenize_with_trivia()
            } else {
                lexer.tokenize()
            };
            match cli.format {
                Format::Json => emit(&tokens, Format::Json)?,
                Format::Debug => {
                    for token in &tokens {
                        println!("{} {:?} {:?}", token.location, token.kind, token.text);
                    }
                }
            }
        }
    }

    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> anyhow::Result<String> {
    if let Some(path) = file {
        debug!(path = %path.display(), "reading input file");
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut sql = String::new();
    std::io::stdin()
        .read_to_string(&mut sql)
        .context("failed to read stdin")?;
    Ok(sql)
}

fn emit<T: Serialize + std::fmt::Debug>(value: &T, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Debug => println!("{value:#?}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
