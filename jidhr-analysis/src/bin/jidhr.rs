use std::fs;
use std::io::{self, BufRead, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jidhr_analysis::{Analyzer, AnalyzerConfig, IsriAnalyzer, StemFilter, Token};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "jidhr", about = "ISRI Arabic root extraction")]
struct Cli {
    /// Path to an analyzer config file (JSON); used by `analyze`
    #[arg(long, global = true, env = "JIDHR_CONFIG")]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Stem words given as arguments, or one per line on stdin
    Stem { words: Vec<String> },
    /// Tokenize and stem running text
    Analyze {
        /// Read text from a file instead of the argument or stdin
        #[arg(long)]
        file: Option<PathBuf>,
        text: Option<String>,
    },
}

#[derive(Debug, Serialize)]
struct StemRecord<'a> {
    word: &'a str,
    stem: String,
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stem { words } => {
            let words = if words.is_empty() {
                io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?
            } else {
                words
            };
            info!(count = words.len(), "stemming words");

            let tokens = words
                .iter()
                .enumerate()
                .map(|(position, word)| Token::new(word.as_str(), position));
            let records: Vec<StemRecord> = StemFilter::new()
                .filter(tokens)
                .into_iter()
                .map(|token| StemRecord {
                    word: words[token.position].trim(),
                    stem: token.text,
                })
                .collect();

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                for record in records {
                    println!("{}\t{}", record.word, record.stem);
                }
            }
        }
        Commands::Analyze { file, text } => {
            let text = match (file, text) {
                (Some(path), _) => fs::read_to_string(path)?,
                (None, Some(text)) => text,
                (None, None) => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            let config = match &cli.config {
                Some(path) => AnalyzerConfig::from_path(path)?,
                None => AnalyzerConfig::default(),
            };
            let analyzer = IsriAnalyzer::new(config);
            let tokens = analyzer.analyze(&text);
            info!(count = tokens.len(), "analyzed text");

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&tokens)?);
            } else {
                for token in tokens {
                    println!("{token}");
                }
            }
        }
    }

    Ok(())
}

fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn,jidhr=info,jidhr_analysis=info".into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
