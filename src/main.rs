// ABOUTME: Main entry point for the slideas program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use slideas_reveal::{Config, DeckConverter, Outcome, WatchConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every stale deck in the source directory
    Convert(BatchArgs),

    /// Convert a single deck unconditionally
    File(FileArgs),

    /// Convert decks, then reconvert whenever a source changes
    Watch(BatchArgs),

    /// Download a remote file into the local cache
    Fetch(FetchArgs),
}

#[derive(Args)]
struct BatchArgs {
    /// Directory holding the Slideas decks
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Directory for converted decks
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Reveal.js theme to declare in the front matter
    #[arg(long)]
    theme: Option<String>,

    /// Reconvert even if the output is newer than the source
    #[arg(short, long)]
    force: bool,
}

#[derive(Args)]
struct FileArgs {
    /// Path to the Slideas deck
    #[arg(short, long)]
    input: PathBuf,

    /// Path to the converted output
    #[arg(short, long)]
    output: PathBuf,

    /// Reveal.js theme to declare in the front matter
    #[arg(long)]
    theme: Option<String>,
}

#[derive(Args)]
struct FetchArgs {
    /// Remote file to cache
    #[arg(short, long)]
    url: String,

    /// Directory to cache into
    #[arg(short, long)]
    dest: Option<PathBuf>,
}

impl BatchArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(source) = &self.source {
            config.source_dir = source.clone();
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the command ran but some documents failed.
fn run(cli: Cli) -> anyhow::Result<bool> {
    let mut config = Config::from_env();

    match cli.command {
        Some(Commands::Convert(args)) => {
            args.apply(&mut config);
            let converter = DeckConverter::from_config(&config).with_force(args.force);
            let report = converter.run()?;

            for (source, outcome) in &report.results {
                match outcome {
                    Outcome::Converted(output) => {
                        println!("Converted {} -> {}", source.display(), output.display())
                    }
                    Outcome::Skipped(_) => println!("Up to date: {}", source.display()),
                    Outcome::Failed(e) => eprintln!("Failed: {}", e),
                }
            }
            println!(
                "{} converted, {} skipped, {} failed",
                report.converted(),
                report.skipped(),
                report.failed()
            );
            Ok(!report.has_failures())
        }
        Some(Commands::File(args)) => {
            if let Some(theme) = args.theme {
                config.theme = theme;
            }
            slideas_reveal::convert_file(&args.input, &args.output, &config.convert_options())
                .with_context(|| format!("Failed to convert {}", args.input.display()))?;
            println!("Converted {} -> {}", args.input.display(), args.output.display());
            Ok(true)
        }
        Some(Commands::Watch(args)) => {
            args.apply(&mut config);
            let converter = DeckConverter::from_config(&config).with_force(args.force);
            slideas_reveal::watch_decks(WatchConfig {
                converter,
                debounce_ms: config.debounce_ms,
            })?;
            Ok(true)
        }
        Some(Commands::Fetch(args)) => {
            let dest = args.dest.unwrap_or(config.cache_dir);
            let local = slideas_reveal::cache_file(&args.url, &dest)?;
            println!("{}", local.display());
            Ok(true)
        }
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(true)
        }
    }
}
