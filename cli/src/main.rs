mod output;

use std::collections::BTreeMap;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use edutrack_config::ParserConfig;
use edutrack_parser::{Command as ParsedCommand, CommandParser, PREFIX_TABLE};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::output::{OutputFormat, format_document, format_line, prefix_table};

#[derive(Debug, Parser)]
#[command(name = "edutrack-parse")]
#[command(about = "Parse and check EduTrack command lines", version)]
struct Cli {
    /// YAML configuration file with field length limits.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log parser decisions to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse one or more command lines and print the result.
    Parse(ParseArgs),
    /// Check every command in a script file.
    Check(CheckArgs),
    /// Read command lines from stdin and print one result per line.
    Repl(ReplArgs),
    /// Print the argument prefix table.
    Prefixes(PrefixesArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Command lines, e.g. "add n/Amy p/12345".
    #[arg(required = true)]
    lines: Vec<String>,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Script with one command per line. Blank lines and `#` comments are
    /// skipped.
    file: PathBuf,
    /// Emit a structured report instead of text.
    #[arg(long)]
    format: Option<OutputFormat>,
    /// Number of worker threads (defaults to one per CPU).
    #[arg(long)]
    jobs: Option<usize>,
}

#[derive(Debug, Args)]
struct ReplArgs {
    /// Output format for each parsed line.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct PrefixesArgs {
    /// Emit the table as a structured document instead of text.
    #[arg(long)]
    format: Option<OutputFormat>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = load_parser(cli.config.as_deref()).and_then(|parser| match cli.command {
        Command::Parse(args) => run_parse(&parser, args),
        Command::Check(args) => run_check(&parser, args),
        Command::Repl(args) => run_repl(&parser, args),
        Command::Prefixes(args) => run_prefixes(args),
    });

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    // -v overrides RUST_LOG.
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_parser(config_path: Option<&Path>) -> Result<CommandParser, String> {
    let config = match config_path {
        Some(path) => ParserConfig::load(path)
            .map_err(|e| format!("Failed to load config '{}': {e}", path.display()))?,
        None => ParserConfig::default(),
    };
    info!(version = %config.version, "Loaded parser configuration");
    Ok(CommandParser::new(config.validators()))
}

// ---------------------------------------------------------------------------
// parse command
// ---------------------------------------------------------------------------

fn run_parse(parser: &CommandParser, args: ParseArgs) -> Result<(), String> {
    let commands = args
        .lines
        .iter()
        .map(|line| parser.parse_command(line).map_err(|e| e.to_string()))
        .collect::<Result<Vec<ParsedCommand>, String>>()?;

    let rendered = match commands.as_slice() {
        [single] => format_document(single, args.format)?,
        many => format_document(many, args.format)?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

// ---------------------------------------------------------------------------
// check command
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct CheckFailure {
    line: usize,
    message: String,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    checked: usize,
    /// Parsed commands per keyword.
    commands: BTreeMap<&'static str, usize>,
    failures: Vec<CheckFailure>,
}

/// Script lines worth parsing, with their one-based line numbers.
fn script_commands(script: &str) -> Vec<(usize, &str)> {
    script
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .collect()
}

fn check_script(parser: &CommandParser, script: &str) -> CheckReport {
    use rayon::prelude::*;

    let lines = script_commands(script);
    let outcomes: Vec<Result<&'static str, CheckFailure>> = lines
        .par_iter()
        .map(|&(line, text)| {
            parser
                .parse_command(text)
                .map(|command| command.keyword())
                .map_err(|err| CheckFailure {
                    line,
                    message: err.to_string(),
                })
        })
        .collect();

    let mut commands = BTreeMap::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(keyword) => *commands.entry(keyword).or_insert(0) += 1,
            Err(failure) => failures.push(failure),
        }
    }

    CheckReport {
        checked: lines.len(),
        commands,
        failures,
    }
}

fn run_check(parser: &CommandParser, args: CheckArgs) -> Result<(), String> {
    let script = fs::read_to_string(&args.file)
        .map_err(|err| format!("Failed to read '{}': {err}", args.file.display()))?;

    let report = match args.jobs {
        Some(jobs) => rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .map_err(|e| format!("Failed to create thread pool: {e}"))?
            .install(|| check_script(parser, &script)),
        None => check_script(parser, &script),
    };
    debug!(
        checked = report.checked,
        failed = report.failures.len(),
        "Checked command script"
    );

    match args.format {
        Some(format) => println!("{}", format_document(&report, format)?.trim_end()),
        None => {
            for failure in &report.failures {
                println!("line {}: {}", failure.line, failure.message);
            }
            if report.failures.is_empty() {
                println!("{} commands OK", report.checked);
                for (keyword, count) in &report.commands {
                    println!("  {keyword}: {count}");
                }
            }
        }
    }

    if report.failures.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "{} of {} commands failed",
            report.failures.len(),
            report.checked
        ))
    }
}

// ---------------------------------------------------------------------------
// repl command
// ---------------------------------------------------------------------------

fn run_repl(parser: &CommandParser, args: ReplArgs) -> Result<(), String> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.map_err(|err| format!("Failed to read stdin: {err}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = parser.parse_command(&line);
        let rendered = match &outcome {
            Ok(command) => format_line(command, args.format)?,
            Err(err) => format!("error: {err}"),
        };
        writeln!(stdout, "{rendered}").map_err(|err| format!("Failed to write stdout: {err}"))?;

        if matches!(outcome, Ok(ParsedCommand::Exit)) {
            break;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// prefixes command
// ---------------------------------------------------------------------------

fn run_prefixes(args: PrefixesArgs) -> Result<(), String> {
    match args.format {
        Some(format) => println!("{}", format_document(&PREFIX_TABLE[..], format)?.trim_end()),
        None => print!("{}", prefix_table(&PREFIX_TABLE)),
    }
    Ok(())
}
