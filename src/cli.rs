// Command-line front end: loads a text or log file, runs it through the
// delta + RLE pipeline and prints the report.
//
// `text` and `log` take the file directly; `interactive` asks for the mode
// and filename on stdin. Menu prompts go to stderr so stdout carries only
// the report (plain or JSON).

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};
use log::{info, warn};
use thiserror::Error;

use crate::engine::{self, Analysis, VerifyError};
use crate::io::{self as fileio, InputStats, SourceKind};
use crate::report;
use crate::stats::UNITS_PER_RUN;
use crate::transform::Projection;

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Delta + run-length encoding with compression-ratio reporting.
#[derive(Parser, Debug)]
#[command(
    name = "deltarle",
    version,
    about = "Delta + run-length encoding with compression-ratio reporting",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Quiet mode (suppress the report; exit status only).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Print the report as JSON.
    #[arg(long = "json", global = true)]
    json_output: bool,

    /// Run the inverse transforms and check they reproduce the input.
    #[arg(long, global = true)]
    verify: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Analyze a text file through its character codes.
    Text(TextArgs),
    /// Analyze a file of whitespace-separated integers.
    Log(LogArgs),
    /// Choose the mode and file from a menu on stdin.
    Interactive(InteractiveArgs),
    /// Print build/configuration details.
    Config,
}

#[derive(Args, Debug)]
struct TextArgs {
    /// Text file to analyze.
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Project Unicode code points instead of bytes (input must be UTF-8).
    #[arg(long)]
    unicode: bool,
}

#[derive(Args, Debug)]
struct LogArgs {
    /// Log file to analyze.
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,
}

#[derive(Args, Debug)]
struct InteractiveArgs {
    /// Project Unicode code points when text mode is chosen.
    #[arg(long)]
    unicode: bool,
}

// ---------------------------------------------------------------------------
// Resolved command + options (flattened from Cli)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Analyze { path: PathBuf, kind: SourceKind },
    Interactive { projection: Projection },
    Config,
}

struct Options {
    command: Command,
    quiet: bool,
    verbose: u8,
    json_output: bool,
    verify: bool,
}

fn projection_for(unicode: bool) -> Projection {
    if unicode {
        Projection::CodePoints
    } else {
        Projection::Bytes
    }
}

fn resolve_options(cli: Cli) -> Options {
    let command = match cli.command {
        Cmd::Text(args) => Command::Analyze {
            path: args.input,
            kind: SourceKind::Text(projection_for(args.unicode)),
        },
        Cmd::Log(args) => Command::Analyze {
            path: args.input,
            kind: SourceKind::Log,
        },
        Cmd::Interactive(args) => Command::Interactive {
            projection: projection_for(args.unicode),
        },
        Cmd::Config => Command::Config,
    };

    Options {
        command,
        quiet: cli.quiet,
        verbose: cli.verbose.min(2),
        json_output: cli.json_output,
        verify: cli.verify,
    }
}

#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args(args: &[String]) {
    let argv: Vec<String> = std::iter::once("deltarle".to_string())
        .chain(args.iter().cloned())
        .collect();
    if let Ok(cli) = Cli::try_parse_from(argv) {
        let _ = resolve_options(cli);
    }
}

// ---------------------------------------------------------------------------
// Config command
// ---------------------------------------------------------------------------

fn cmd_config() -> i32 {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!("deltarle version {version}");

    let file_io = cfg!(feature = "file-io") as u8;
    let json = cfg!(feature = "json") as u8;

    eprintln!("FILE_IO={file_io}");
    eprintln!("JSON={json}");
    eprintln!("SAMPLE_TYPE=i64");
    eprintln!("DELTA_OVERFLOW=wrapping");
    eprintln!("UNITS_PER_RUN={UNITS_PER_RUN}");

    0
}

// ---------------------------------------------------------------------------
// Interactive menu
// ---------------------------------------------------------------------------

const BANNER: &str = "\
===========================================================
       RUN-LENGTH ENCODING AND DELTA ENCODING
===========================================================
";

/// Failure to complete the menu interaction.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("invalid choice {0:?}, expected 1 or 2")]
    InvalidChoice(String),
    #[error("no filename given")]
    MissingFilename,
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Ask for a mode and a filename. Reads one line for each.
fn prompt_selection<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    projection: Projection,
) -> Result<(PathBuf, SourceKind), MenuError> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "1. Compress text file.")?;
    writeln!(out, "2. Compress file with numerical values.")?;
    writeln!(out)?;
    writeln!(out, "Enter choice:")?;
    out.flush()?;

    let choice = read_trimmed_line(reader)?;
    let kind = match choice.as_str() {
        "1" => SourceKind::Text(projection),
        "2" => SourceKind::Log,
        _ => return Err(MenuError::InvalidChoice(choice)),
    };

    writeln!(out, "Enter file:")?;
    out.flush()?;

    let filename = read_trimmed_line(reader)?;
    if filename.is_empty() {
        return Err(MenuError::MissingFilename);
    }

    Ok((PathBuf::from(filename), kind))
}

fn read_trimmed_line<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn cmd_interactive(opts: &Options, projection: Projection) -> i32 {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut prompts = io::stderr().lock();

    match prompt_selection(&mut reader, &mut prompts, projection) {
        Ok((path, kind)) => {
            drop(prompts);
            cmd_analyze(opts, &path, kind)
        }
        Err(e) => {
            eprintln!("deltarle: {e}");
            1
        }
    }
}

// ---------------------------------------------------------------------------
// Analyze command
// ---------------------------------------------------------------------------

fn cmd_analyze(opts: &Options, path: &Path, kind: SourceKind) -> i32 {
    let (input, stats, mut exit_code) = match fileio::load(path, kind) {
        Ok(loaded) => (loaded.input, Some(loaded.stats), 0),
        Err(e) => {
            eprintln!("deltarle: input file: {e}");
            warn!("continuing with empty input");
            (kind.empty_input(), None, 1)
        }
    };

    let analysis = engine::analyze(input);

    let verified = if opts.verify {
        let (ok, code) = verify_outcome(analysis.verify());
        if ok {
            info!("round-trip verified for {} samples", analysis.samples().len());
        } else {
            exit_code = code;
        }
        Some(ok)
    } else {
        None
    };

    if opts.verbose > 0 && !opts.quiet {
        let metrics = analysis.metrics();
        eprintln!(
            "deltarle: {}: samples: {}, runs: {}, ratio: {:.3}",
            path.display(),
            metrics.original_size,
            analysis.runs().len(),
            metrics.ratio()
        );
    }

    if opts.quiet {
        return exit_code;
    }

    let mut stdout = io::stdout().lock();
    let written = if opts.json_output {
        write_json(&mut stdout, path, kind, stats.as_ref(), &analysis, verified)
    } else {
        stdout.write_all(report::render_text(&analysis).as_bytes())
    };

    if let Err(e) = written.and_then(|()| stdout.flush()) {
        eprintln!("deltarle: write error: {e}");
        return 1;
    }

    exit_code
}

/// Exit status 2 on a failed round trip. `analyze` output always passes, so
/// this only fires if the transforms and their inverses disagree.
fn verify_outcome(result: Result<(), VerifyError>) -> (bool, i32) {
    match result {
        Ok(()) => (true, 0),
        Err(e) => {
            eprintln!("deltarle: verify failed: {e}");
            (false, 2)
        }
    }
}

fn kind_name(kind: SourceKind) -> &'static str {
    match kind {
        SourceKind::Text(_) => "text",
        SourceKind::Log => "log",
    }
}

fn write_json<W: Write>(
    out: &mut W,
    path: &Path,
    kind: SourceKind,
    stats: Option<&InputStats>,
    analysis: &Analysis,
    verified: Option<bool>,
) -> io::Result<()> {
    let mut json = report::to_json(analysis);
    json["mode"] = kind_name(kind).into();
    if let SourceKind::Text(projection) = kind {
        json["projection"] = projection.name().into();
    }
    json["file"] = path.display().to_string().into();
    json["loaded"] = stats.is_some().into();
    if let Some(stats) = stats {
        json["byte_size"] = stats.byte_size.into();
        if let Some(digest) = &stats.sha256 {
            json["sha256"] = fileio::to_hex(digest).into();
        }
        if let Some(token) = &stats.terminator {
            json["stopped_at"] = token.clone().into();
        }
    }
    if let Some(ok) = verified {
        json["verified"] = ok.into();
    }
    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn default_log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    let cli = Cli::parse();
    let opts = resolve_options(cli);

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_filter(opts.verbose)),
    )
    .format_timestamp(None)
    .format_target(false)
    .init();

    let exit_code = match &opts.command {
        Command::Analyze { path, kind } => cmd_analyze(&opts, path, *kind),
        Command::Interactive { projection } => cmd_interactive(&opts, *projection),
        Command::Config => cmd_config(),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
