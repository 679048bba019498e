//! sqlmath Interactive REPL
//!
//! Evaluates builtin math calls such as `ROUND(1.298, 1)` or
//! `CONV('ff', 16, 10)` and prints the result with its type.
//!
//! Usage: sqlmath-repl [OPTIONS]
//!
//! Options:
//!   -c, --config <FILE>        TOML configuration file
//!   -i, --ignore-truncate      Accept partially numeric strings silently
//!   -j, --json                 Print results as JSON
//!   -e, --execute <EXPR>       Evaluate one expression and exit

use std::borrow::Cow;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sqlmath::cli::{self, Outcome};
use sqlmath::{registry, Datum, EngineConfig, EvalContext};

#[derive(Parser, Debug)]
#[command(name = "sqlmath-repl")]
#[command(about = "Interactive evaluator for MySQL math builtins", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Accept partially numeric strings without error or warning
    #[arg(short, long)]
    ignore_truncate: bool,

    /// Print results as JSON
    #[arg(short, long)]
    json: bool,

    /// Evaluate one expression and exit
    #[arg(short, long)]
    execute: Option<String>,
}

/// Tab completion over registered function names
struct MathHelper {
    completions: Vec<String>,
}

impl MathHelper {
    fn new() -> Self {
        let completions = registry()
            .names()
            .into_iter()
            .map(|name| format!("{}(", name))
            .collect();
        Self { completions }
    }
}

fn word_start(line: &str) -> usize {
    line.rfind(|c: char| c.is_whitespace() || c == '(' || c == ',')
        .map(|i| i + 1)
        .unwrap_or(0)
}

impl Completer for MathHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let start = word_start(&line[..pos]);
        let word = line[start..pos].to_uppercase();

        let matches: Vec<Pair> = self
            .completions
            .iter()
            .filter(|c| c.starts_with(&word))
            .map(|c| Pair {
                display: c.clone(),
                replacement: c.clone(),
            })
            .collect();

        Ok((start, matches))
    }
}

impl Hinter for MathHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }

        let word = line[word_start(line)..].to_uppercase();
        if word.is_empty() {
            return None;
        }

        self.completions
            .iter()
            .find(|c| c.starts_with(&word) && c.len() > word.len())
            .map(|c| c[word.len()..].to_string())
    }
}

impl Highlighter for MathHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(hint.truecolor(100, 100, 100).to_string())
    }
}

impl Validator for MathHelper {}

impl Helper for MathHelper {}

fn print_banner() {
    println!(
        "  {} {}",
        "sqlmath REPL".white().bold(),
        env!("CARGO_PKG_VERSION").dimmed()
    );
    println!(
        "  Type {} for help, {} to quit\n",
        ".help".yellow(),
        ".exit".yellow()
    );
}

fn print_help() {
    println!("\n{}", "Commands:".white().bold());
    println!("  {}        Show this help", ".help".yellow());
    println!("  {}        Exit the REPL", ".exit".yellow());
    println!("  {}   List builtin functions", ".functions".yellow());
    println!("  {}      Show evaluation settings", ".status".yellow());

    println!("\n{}", "Examples:".white().bold());
    println!("  {}", "ROUND(1.298, 1)".green());
    println!("  {}", "CONV('ff', 16, 10)".green());
    println!("  {}", "LOG(2, 65536)".green());
    println!("  {}", "RAND(20160101)".green());
    println!();
}

fn format_value(value: &Datum) -> String {
    match value {
        Datum::Null => "NULL".dimmed().to_string(),
        Datum::String(s) => format!("'{}'", s).green().to_string(),
        other => other.to_string().yellow().to_string(),
    }
}

fn print_outcome(outcome: &Outcome, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(outcome)?);
        return Ok(());
    }

    println!(
        "{} {}",
        format_value(&outcome.result),
        format!("({})", outcome.kind).dimmed()
    );
    if let Some(warning) = &outcome.warning {
        println!("{} {}", "Warning:".yellow().bold(), warning);
    }
    Ok(())
}

fn print_error(err: &sqlmath::MathError, json: bool) {
    if json {
        println!("{}", serde_json::json!({ "error": err }));
    } else {
        println!("{} {}", "Error:".red().bold(), err);
    }
}

fn load_config(args: &Args) -> anyhow::Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::from_env()?,
    };
    if args.ignore_truncate {
        config.ignore_truncate = true;
    }
    Ok(config)
}

fn run_repl(ctx: &EvalContext, json: bool) -> anyhow::Result<()> {
    print_banner();

    let mut rl = Editor::new()?;
    rl.set_helper(Some(MathHelper::new()));

    let history_file = std::env::var("HOME")
        .map(|h| PathBuf::from(h).join(".sqlmath_history"))
        .unwrap_or_else(|_| PathBuf::from(".sqlmath_history"));
    let _ = rl.load_history(&history_file);

    loop {
        match rl.readline(&format!("{} ", "sqlmath>".cyan())) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                if line.starts_with('.') {
                    match line {
                        ".exit" | ".quit" | ".q" => {
                            println!("{}", "Goodbye!".dimmed());
                            break;
                        }
                        ".help" | ".h" | ".?" => print_help(),
                        ".functions" => {
                            println!("  {}", registry().names().join(", ").cyan());
                        }
                        ".status" => {
                            println!(
                                "  {} {}",
                                "ignore_truncate:".dimmed(),
                                ctx.ignore_truncate()
                            );
                            let seed = ctx
                                .rand_seed()
                                .map(|s| s.to_string())
                                .unwrap_or_else(|| "(random)".to_string());
                            println!("  {} {}", "rand seed:".dimmed(), seed);
                        }
                        other => {
                            println!("  {} {}", "Unknown command:".red(), other);
                            println!("  Type {} for help", ".help".yellow());
                        }
                    }
                    continue;
                }

                match cli::evaluate(line, ctx) {
                    Ok(outcome) => print_outcome(&outcome, json)?,
                    Err(err) => print_error(&err, json),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "Type .exit to quit".dimmed());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".dimmed());
                break;
            }
            Err(err) => {
                println!("{} {:?}", "Error:".red(), err);
                break;
            }
        }
    }

    let _ = rl.save_history(&history_file);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sqlmath=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(&args)?;
    tracing::info!(
        "Evaluation settings: ignore_truncate={}, rand_seed={:?}",
        config.ignore_truncate,
        config.default_rand_seed
    );
    let ctx = config.context();

    if let Some(expr) = &args.execute {
        return match cli::evaluate(expr, &ctx) {
            Ok(outcome) => print_outcome(&outcome, args.json),
            Err(err) => {
                print_error(&err, args.json);
                std::process::exit(1);
            }
        };
    }

    run_repl(&ctx, args.json)
}
