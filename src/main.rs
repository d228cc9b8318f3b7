//! Lexisense CLI - dictionary word completion for prose and markup files
//!
//! # Usage
//!
//! ```bash
//! # Get completions at position
//! lexisense --words words.txt complete notes.md --line 10 --column 5 --kind markdown
//!
//! # Show the extracted context and the suppression verdict
//! lexisense --words words.txt context notes.md -l 10 -c 5 -k latex
//!
//! # Index statistics
//! lexisense --words words.txt stats
//!
//! # Create/open the per-user dictionary file
//! lexisense dict --edit
//!
//! # Rebuild the index whenever a dictionary file changes
//! lexisense --words words.txt watch
//! ```

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use lexisense::watch::Watcher;
use lexisense::{
    default_user_dict_path, ensure_user_dict, parse_context, rules, Config, DocumentKind, Engine,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lexisense")]
#[command(about = "Context-aware dictionary word completion engine")]
#[command(version)]
struct Cli {
    /// Path to the built-in word list
    #[arg(long, env = "LEXISENSE_WORDS")]
    words: Option<PathBuf>,

    /// Configuration file (.lexisense.yaml / .lexisense.json)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, short, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Get completions at position
    Complete {
        /// Path to the document
        file: PathBuf,

        /// Line number (1-based)
        #[arg(long, short)]
        line: u32,

        /// Column number (1-based)
        #[arg(long, short)]
        column: u32,

        /// Document kind (markdown, latex, html, javascript, typescript, python, c)
        #[arg(long, short)]
        kind: DocumentKind,

        /// Maximum completions to return (0 = unlimited)
        #[arg(long, default_value = "0")]
        max: usize,
    },

    /// Show the extracted context and the suppression verdict
    Context {
        /// Path to the document
        file: PathBuf,

        /// Line number (1-based)
        #[arg(long, short)]
        line: u32,

        /// Column number (1-based)
        #[arg(long, short)]
        column: u32,

        /// Document kind (markdown, latex, html, javascript, typescript, python, c)
        #[arg(long, short)]
        kind: DocumentKind,
    },

    /// Show word index statistics
    Stats,

    /// Create (if needed) and show the per-user dictionary file
    Dict {
        /// Open the dictionary in $EDITOR afterwards
        #[arg(long)]
        edit: bool,
    },

    /// Watch dictionary files and rebuild the index on change
    Watch,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => Config::discover(Path::new("."))?,
    };

    match cli.command {
        Commands::Complete {
            file,
            line,
            column,
            kind,
            max,
        } => {
            let engine = build_engine(&cli.words, config)?.with_max_completions(max);
            let source = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let result = engine.complete(&source, line, column, kind);

            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
                OutputFormat::Text => {
                    if result.items.is_empty() {
                        println!("No completions");
                    } else {
                        println!("Completions ({}):", result.items.len());
                        for item in &result.items {
                            println!("  {}", item.label);
                        }
                    }
                }
            }
        }

        Commands::Context {
            file,
            line,
            column,
            kind,
        } => {
            let source = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let ctx = parse_context(&source, line, column, kind);
            let suppressed = rules::should_suppress(&ctx);

            match cli.format {
                OutputFormat::Json => {
                    #[derive(serde::Serialize)]
                    struct ContextOutput<'a> {
                        kind: String,
                        line_before: &'a str,
                        word_before: &'a str,
                        first_letter: Option<char>,
                        suppressed: bool,
                    }

                    let output = ContextOutput {
                        kind: kind.to_string(),
                        line_before: &ctx.line_before,
                        word_before: &ctx.word_before,
                        first_letter: ctx.first_letter(),
                        suppressed,
                    };

                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Text => {
                    println!("Cursor context at {}:{} ({})", line, column, kind);
                    println!("  Line before:  {:?}", ctx.line_before);
                    println!("  Word before:  {:?}", ctx.word_before);
                    println!("  First letter: {:?}", ctx.first_letter());
                    println!("  Suppressed:   {}", suppressed);
                }
            }
        }

        Commands::Stats => {
            let engine = build_engine(&cli.words, config)?;
            let stats = engine.stats();

            match cli.format {
                OutputFormat::Json => {
                    #[derive(serde::Serialize)]
                    struct StatsOutput {
                        words: usize,
                        populated_buckets: usize,
                        user_sources: usize,
                    }

                    let output = StatsOutput {
                        words: stats.words,
                        populated_buckets: stats.populated_buckets,
                        user_sources: stats.user_sources,
                    };

                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Text => {
                    println!("Word index statistics:");
                    println!("  Words:             {}", stats.words);
                    println!("  Populated buckets: {}", stats.populated_buckets);
                    println!("  User sources:      {}", stats.user_sources);
                }
            }
        }

        Commands::Dict { edit } => {
            let path = default_user_dict_path();
            ensure_user_dict(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            println!("{}", path.display());

            if edit {
                let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
                std::process::Command::new(&editor)
                    .arg(&path)
                    .status()
                    .with_context(|| format!("Failed to launch {}", editor))?;
            }
        }

        Commands::Watch => {
            let words_path = cli
                .words
                .clone()
                .context("Built-in word list required (--words or LEXISENSE_WORDS)")?;
            let mut engine = Engine::new(&words_path, config.clone())?;

            let mut paths = vec![words_path];
            if config.use_external_user_dict_file {
                paths.extend(config.external_user_dict_files.iter().cloned());
            }
            paths.extend(config.companion_settings_files.iter().cloned());

            let watcher = Watcher::new(&paths)?;
            let stats = engine.stats();
            println!(
                "Watching {} dictionary files ({} words indexed), Ctrl-C to stop",
                watcher.watched_paths().len(),
                stats.words
            );

            while let Some(changed) = watcher.wait() {
                for path in &changed {
                    println!("Changed: {}", path.display());
                }
                engine.reload()?;
                println!("Rebuilt index: {} words", engine.stats().words);
            }
        }
    }

    Ok(())
}

/// The built-in word list is mandatory for every command that queries
/// the index
fn build_engine(words: &Option<PathBuf>, config: Config) -> Result<Engine> {
    let path = words
        .as_ref()
        .context("Built-in word list required (--words or LEXISENSE_WORDS)")?;
    Ok(Engine::new(path, config)?)
}
