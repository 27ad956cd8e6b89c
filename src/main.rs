// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use medtrans::app_config::{self, Config};
use medtrans::{Controller, get_language_name};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a PDF with the typewriter reveal (default command)
    Translate(TranslateArgs),

    /// List the PDF files in a directory or the probed download directory
    List {
        /// Directory to list
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long, default_value = "medtrans.json")]
        config_path: String,
    },

    /// Generate shell completions for medtrans
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// PDF to translate; a bare name is looked up in the download directory
    #[arg(value_name = "PDF")]
    pdf: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "medtrans.json")]
    config_path: String,

    /// Source language code (e.g., 'en')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'ko')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Sentences must be longer than this many characters
    #[arg(long, value_name = "N")]
    min_chars: Option<usize>,

    /// Reveal text without the typewriter delay
    #[arg(long)]
    instant: bool,
}

/// medtrans - medical PDF translation with a typewriter reveal
#[derive(Parser, Debug)]
#[command(name = "medtrans")]
#[command(args_conflicts_with_subcommands = true)]
#[command(version)]
#[command(about = "Translate medical PDFs sentence by sentence")]
#[command(long_about = "medtrans extracts the text of a PDF, translates it sentence by sentence and reveals
each source and translated sentence character by character.

EXAMPLES:
    medtrans report.pdf                          # Translate using default config
    medtrans                                     # First PDF in the download directory
    medtrans translate -t ja report.pdf          # Translate into Japanese
    medtrans translate --instant report.pdf      # No typewriter delay
    medtrans list ~/Downloads                    # List PDFs in a directory
    medtrans completions bash > medtrans.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in medtrans.json by default. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    translate: TranslateArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Info until the config says otherwise
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "medtrans", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::List { dir, config_path }) => run_list(dir, &config_path),
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => run_translate(cli.translate).await,
    }
}

fn load_config(config_path: &str, options: Option<&TranslateArgs>) -> Result<Config> {
    let mut config = Config::load_or_create(Path::new(config_path))?;

    // Override config with CLI options if provided
    if let Some(options) = options {
        if let Some(source_language) = &options.source_language {
            config.source_language = source_language.clone();
        }
        if let Some(target_language) = &options.target_language {
            config.target_language = target_language.clone();
        }
        if let Some(min_chars) = options.min_chars {
            config.segmentation.min_sentence_chars = min_chars;
        }
        if options.instant {
            config.presentation = config.presentation.instant();
        }
        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }
    }

    config.validate().context("Configuration validation failed")?;
    log::set_max_level(config.log_level.to_level_filter());

    Ok(config)
}

fn run_list(dir: Option<PathBuf>, config_path: &str) -> Result<()> {
    let config = load_config(config_path, None)?;
    let controller = Controller::with_config(config)?;

    let (dir, files) = controller.list_documents(dir.as_deref())?;
    if files.is_empty() {
        warn!("No PDF files in {:?}", dir);
        return Ok(());
    }

    println!("{}", dir.display());
    for name in files {
        println!("  {}", name);
    }
    Ok(())
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    let config = load_config(&options.config_path, Some(&options))?;
    info!(
        "Translating {} to {}",
        get_language_name(&config.source_language)?,
        get_language_name(&config.target_language)?
    );

    let controller = Controller::with_config(config)?;
    let pdf = controller.resolve_input(options.pdf.as_deref())?;

    let Some(report) = controller.run(&pdf).await? else {
        return Ok(());
    };

    info!(
        "{} sentences from {} pages in {:.1}s ({} failed translations, {} pages skipped)",
        report.sentences_presented,
        report.pages_total,
        report.elapsed.as_secs_f64(),
        report.failed_translations,
        report.pages_skipped
    );

    if !report.is_success() {
        error!("Run {} failed", report.run_id);
        std::process::exit(1);
    }

    Ok(())
}
