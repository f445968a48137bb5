use std::process::ExitCode;

use clap::Parser;

use angulus::{arith, Cursor, Rendered, RuleName};

/// Parse a token sequence with the built-in arithmetic grammar.
#[derive(Parser)]
#[command(name = "angulus", version, about = "Left-corner precedence parser demo")]
struct Cli {
    /// Rule to parse the input as.
    #[arg(long, default_value = "block")]
    rule: String,

    /// Split every argument into one token per character.
    #[arg(long)]
    chars: bool,

    /// Print the full tree instead of the bracketed rendering.
    #[arg(long)]
    tree: bool,

    /// Input tokens.
    tokens: Vec<String>,
}

/// Logs go to stderr, and only when `RUST_LOG` is set,
/// e.g. `RUST_LOG=angulus=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let grammar = match arith::grammar() {
        Ok(g) => g,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let tokens: Vec<String> = if cli.chars {
        cli.tokens.iter().flat_map(|t| arith::chars(t)).collect()
    } else {
        cli.tokens
    };

    println!("input {:?}", tokens);
    let mut cursor = Cursor::new(tokens);
    let tree = grammar.parse_rule(&RuleName::from(cli.rule.as_str()), &mut cursor);
    match &tree {
        Some(t) if cli.tree => println!("tree {}", t),
        t => println!("tree {}", t.rendered()),
    }
    if cursor.has_next() {
        println!("leftovers {}", cursor);
    }
    if tree.is_some() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
