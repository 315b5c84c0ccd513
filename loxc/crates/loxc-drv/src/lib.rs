//! loxc-drv - Driver for the loxc toolchain.
//!
//! The driver owns everything around the scanner: argument parsing,
//! reading the input file, logging, printing tokens and diagnostics, and
//! turning the outcome into an exit status.
//!
//! ```text
//! loxc tokenize <FILE>
//! ```
//!
//! prints one `KIND LEXEME LITERAL` line per token on stdout and one
//! `[line N] Error: message` line per lexical error on stderr.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use loxc_util::Handler;

pub mod config;
pub mod error;
pub mod status;

pub use config::Config;
pub use error::{DriverError, Result};
pub use status::Status;

/// loxc - tools for the Lox scripting language
#[derive(Parser, Debug)]
#[command(name = "loxc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tools for the Lox scripting language", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LOXC_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, global = true, env = "LOXC_NO_COLOR")]
    no_color: bool,

    /// Log filter directives (e.g. `loxc_lex=trace`)
    #[arg(long, global = true, env = "LOXC_LOG", value_name = "FILTER")]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a source file
    ///
    /// Tokens go to stdout, lexical errors to stderr. Exits with 65 when
    /// any lexical error was found.
    Tokenize(TokenizeCommand),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// Source file to scan
    file: PathBuf,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            verbose: cli.verbose,
            color: !cli.no_color,
            log_filter: cli.log.clone(),
        }
    }
}

/// State for one driver run.
pub struct Session {
    /// Settings for this run.
    pub config: Config,
    /// Collects every diagnostic reported during the run.
    pub diagnostics: Handler,
}

impl Session {
    /// Creates a session with an empty diagnostic handler.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            diagnostics: Handler::new(),
        }
    }

    /// Reads `path` and tokenizes its contents.
    pub fn tokenize_file(
        &self,
        path: &Path,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<Status> {
        info!(path = %path.display(), "tokenizing");
        let source = fs::read_to_string(path).map_err(|source| DriverError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.tokenize(&source, out, err)
    }

    /// Tokenizes `source`, writing tokens to `out` and lexical errors to
    /// `err`.
    ///
    /// All tokens are written even when lexical errors were found; the
    /// errors only change the returned status.
    pub fn tokenize(
        &self,
        source: &str,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<Status> {
        let scanned = loxc_lex::scan(source)?;

        for error in &scanned.errors {
            let diagnostic = error.to_diagnostic();
            writeln!(err, "{}", diagnostic)?;
            self.diagnostics.emit(diagnostic);
        }

        for token in &scanned.tokens {
            writeln!(out, "{}", token)?;
        }
        out.flush()?;

        debug!(
            tokens = scanned.tokens.len(),
            errors = self.diagnostics.error_count(),
            "tokenize finished"
        );

        Ok(self.status())
    }

    /// Returns the exit status implied by the diagnostics reported so far.
    pub fn status(&self) -> Status {
        if self.diagnostics.has_errors() {
            Status::LexicalError
        } else {
            Status::Success
        }
    }
}

/// Initializes the logging system.
///
/// Logs always go to stderr so stdout carries nothing but tokens.
pub fn init_logging(config: &Config) -> Result<()> {
    let directives = config.log_directives();
    let filter = EnvFilter::try_new(directives)
        .map_err(|e| DriverError::Logging(format!("invalid log filter '{}': {}", directives, e)))?;

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(config.color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| DriverError::Logging(format!("failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Entry point for the `loxc` binary.
///
/// Parses arguments, initializes logging and runs the selected command.
pub fn main() -> Result<Status> {
    let cli = Cli::parse();
    let config = Config::from(&cli);

    init_logging(&config)?;

    execute_command(cli.command, config)
}

fn execute_command(command: Commands, config: Config) -> Result<Status> {
    match command {
        Commands::Tokenize(args) => execute_tokenize(args, config),
    }
}

fn execute_tokenize(args: TokenizeCommand, config: Config) -> Result<Status> {
    let session = Session::new(config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stderr = io::stderr();
    let mut err = stderr.lock();

    session.tokenize_file(&args.file, &mut out, &mut err)
}
