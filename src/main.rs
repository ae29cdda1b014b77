use clap::{CommandFactory, Parser};
use square_crop::config::CropConfig;
use square_crop::imaging::RustBackend;
use square_crop::{batch, output};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const PROGRAM: &str = "square-crop";

fn version_string() -> &'static str {
    let on_tag = env!("SQUARE_CROP_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("SQUARE_CROP_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = PROGRAM)]
#[command(about = "Crop images to a centered 1:1 square")]
#[command(long_about = "\
Crop images to a centered 1:1 square

The shorter edge becomes the side of the square; the longer edge is trimmed
equally from both ends. When the trim is odd, the extra pixel comes off the
right (or bottom) edge.

Output naming:

  images/diego.webp            → images/diego_square.webp   (default)
  --replace images/diego.webp  → images/diego.webp          (overwritten)
  -o avatar.jpg me.png         → avatar.jpg                 (single input only)

Files that are missing or cannot be decoded are reported and skipped; the
rest of the batch is still processed.")]
#[command(version = version_string())]
struct Cli {
    /// Replace original files instead of creating new ones
    #[arg(long, conflicts_with = "output")]
    replace: bool,

    /// Write the cropped image to this path (only with a single input)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print diagnostics to stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Images to crop
    #[arg(value_name = "IMAGE")]
    paths: Vec<PathBuf>,
}

/// Route `tracing` diagnostics to stderr so stdout stays the human report.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// How a command-line token relates to the flags `cmd` defines.
#[derive(Debug, PartialEq, Eq)]
enum Token {
    /// A known flag; `true` when its value is the next token.
    Flag(bool),
    Path,
}

fn classify(cmd: &clap::Command, token: &str) -> Token {
    if let Some(long) = token.strip_prefix("--") {
        let (name, inline) = match long.split_once('=') {
            Some((name, _)) => (name, true),
            None => (long, false),
        };
        return match cmd.get_arguments().find(|a| a.get_long() == Some(name)) {
            Some(arg) => Token::Flag(arg.get_action().takes_values() && !inline),
            None => Token::Path,
        };
    }

    let Some(shorts) = token.strip_prefix('-').filter(|s| !s.is_empty()) else {
        return Token::Path;
    };
    for (i, c) in shorts.char_indices() {
        match cmd.get_arguments().find(|a| a.get_short() == Some(c)) {
            // `-oFILE` carries its value inline; `-o FILE` takes the next token
            Some(arg) if arg.get_action().takes_values() => {
                return Token::Flag(i + c.len_utf8() == shorts.len());
            }
            Some(_) => {}
            None => return Token::Path,
        }
    }
    Token::Flag(false)
}

/// First parsing phase: split argv into known flags and paths.
///
/// Every token that is not a flag `cmd` defines is a path, even one that
/// starts with `-`, so `-me.png` is cropped and `--typo` is reported as a
/// missing file instead of aborting the batch. Paths keep their order and
/// are handed to clap after `--`.
fn separate_paths(cmd: &clap::Command, args: Vec<OsString>) -> Vec<OsString> {
    let mut args = args.into_iter();
    let mut flags: Vec<OsString> = args.next().into_iter().collect();
    let mut paths = Vec::new();

    while let Some(arg) = args.next() {
        let token = match arg.to_str() {
            Some("--") => {
                paths.extend(args.by_ref());
                break;
            }
            Some(text) => classify(cmd, text),
            None => Token::Path,
        };
        match token {
            Token::Flag(takes_next) => {
                flags.push(arg);
                if takes_next {
                    flags.extend(args.next());
                }
            }
            Token::Path => paths.push(arg),
        }
    }

    flags.push(OsString::from("--"));
    flags.extend(paths);
    flags
}

fn main() -> ExitCode {
    let args: Vec<OsString> = std::env::args_os().collect();
    if args.len() < 2 {
        output::print_usage(PROGRAM);
        return ExitCode::FAILURE;
    }

    let mut cmd = Cli::command();
    cmd.build();
    let cli = match Cli::try_parse_from(separate_paths(&cmd, args)) {
        Ok(cli) => cli,
        // --help and --version are reported through the same error path
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    init_logging(cli.verbose);

    let config = match CropConfig::from_args(cli.paths, cli.replace, cli.output) {
        Ok(config) => config,
        Err(e) => {
            println!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    output::print_batch_header(config.paths().len());
    let backend = RustBackend::new();
    let report = batch::run_batch(&backend, &config, output::print_crop_event);
    output::print_batch_summary(&report);

    // Per-file failures are reported above; they never change the exit code
    ExitCode::SUCCESS
}
