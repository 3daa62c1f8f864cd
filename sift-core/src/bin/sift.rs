//! Command-line front end for the Sift engine.
//!
//! Every input file becomes one document named after its path. Lines are
//! joined with spaces and run through the reference analyzer, so CSV exports
//! and plain text both work.
//!
//! ## Usage
//!
//! ```bash
//! # Is the word in the vocabulary, and if not what was meant?
//! sift -f listings.csv spell rentl
//!
//! # Words starting with a prefix
//! sift -f a.csv -f b.csv complete ca --limit 20
//!
//! # Documents ranked by keyword occurrences
//! sift -f a.csv -f b.csv rank car rental --top 5
//!
//! # Documents containing every token
//! sift --skip-header -f a.csv -f b.csv search-all rental car
//! ```
//!
//! Set `RUST_LOG=debug` (or pass `-v`) to see ingestion details.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use env_logger::{Builder, Env};
use log::{info, warn, LevelFilter};

use sift_core::{DocId, Document, MatcherKind, SearchConfig, Sift};

#[derive(Parser)]
#[command(
    name = "sift",
    about = "Spelling, completion and occurrence search over text files",
    version
)]
struct Cli {
    /// Input file; repeat for several documents
    #[arg(short, long = "file", value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Drop the first line of every file (CSV header)
    #[arg(long)]
    skip_header: bool,

    /// Largest edit distance for spelling suggestions
    #[arg(long, value_name = "N")]
    max_distance: Option<usize>,

    /// Number of spelling suggestions
    #[arg(long, value_name = "N")]
    suggestions: Option<usize>,

    /// Use the failure-function matcher for ranking and frequency counts
    #[arg(long)]
    failure_function: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a word's spelling and suggest corrections
    Spell {
        /// Word to check
        word: String,
    },

    /// List vocabulary words starting with a prefix
    Complete {
        /// Prefix to complete
        prefix: String,

        /// Maximum number of words to print
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Count a word's occurrences in every document
    Freq {
        /// Word to count (substring match)
        word: String,
    },

    /// Rank documents by keyword occurrences
    Rank {
        /// Keywords to score
        #[arg(required = true)]
        keywords: Vec<String>,

        /// Number of documents to print
        #[arg(short, long, default_value_t = 10)]
        top: usize,
    },

    /// Find the documents containing a token
    Search {
        /// Token to look up (whole-token match)
        token: String,
    },

    /// Find the documents containing all tokens
    SearchAll {
        /// Tokens that must all be present
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Record searches and print the most frequent ones
    Track {
        /// Tokens to search, in order
        #[arg(required = true)]
        tokens: Vec<String>,

        /// Number of top searches to print
        #[arg(short, long, default_value_t = 5)]
        top: usize,
    },

    /// Print index statistics and the most common tokens
    Stats {
        /// Number of common tokens to print
        #[arg(short, long, default_value_t = 10)]
        top: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    match cli.verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        _ => {
            builder.filter_level(LevelFilter::Debug);
        }
    }
    builder
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn config_from(cli: &Cli) -> SearchConfig {
    let mut config = SearchConfig::default();
    if let Some(n) = cli.max_distance {
        config.max_edit_distance = n;
    }
    if let Some(n) = cli.suggestions {
        config.suggestion_limit = n;
    }
    if cli.failure_function {
        config.ranking_matcher = MatcherKind::FailureFunction;
    }
    config
}

fn run(cli: Cli) -> Result<()> {
    let mut engine = Sift::with_config(config_from(&cli));

    let start = Instant::now();
    let documents = cli
        .files
        .iter()
        .filter_map(|path| match load(path, cli.skip_header) {
            Ok(document) => Some(document),
            Err(e) => {
                warn!("skipping {}: {e:#}", path.display());
                None
            }
        })
        .collect::<Vec<_>>();
    let report = engine.add_batch(documents);
    info!(
        "loaded {} documents ({} rejected) in {}",
        report.added,
        report.failed,
        fmt_duration(start.elapsed())
    );
    anyhow::ensure!(!engine.is_empty(), "no readable input documents");

    let start = Instant::now();
    match cli.command {
        Command::Spell { word } => spell(&engine, &word),
        Command::Complete { prefix, limit } => complete(&engine, &prefix, limit),
        Command::Freq { word } => freq(&engine, &word),
        Command::Rank { keywords, top } => rank(&engine, &keywords, top),
        Command::Search { token } => search(&engine, &token),
        Command::SearchAll { tokens } => search_all(&engine, &tokens),
        Command::Track { tokens, top } => track(&mut engine, &tokens, top),
        Command::Stats { top } => stats(&engine, top),
    }
    println!("\nElapsed: {}", fmt_duration(start.elapsed()));
    Ok(())
}

fn load(path: &Path, skip_header: bool) -> Result<Document> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let lines = raw.lines().skip(usize::from(skip_header));
    let joined = lines.collect::<Vec<_>>().join(" ");
    Ok(Document::analyze(path.display().to_string(), &joined))
}

fn doc_name(engine: &Sift, doc_id: DocId) -> &str {
    engine.name(doc_id).unwrap_or("?")
}

fn spell(engine: &Sift, word: &str) {
    let check = engine.check_spelling(word);
    if check.word.is_empty() {
        println!("Nothing to check.");
    } else if check.found {
        println!("'{}' is spelled correctly.", check.word);
    } else if check.suggestions.is_empty() {
        println!("'{}' not found and no close matches.", check.word);
    } else {
        println!("'{}' not found. Did you mean:", check.word);
        for suggestion in &check.suggestions {
            println!("  {suggestion}");
        }
    }
}

fn complete(engine: &Sift, prefix: &str, limit: usize) {
    let completions = engine.complete_limited(prefix, limit);
    if completions.total == 0 {
        println!("No words start with '{prefix}'.");
        return;
    }
    for word in &completions.words {
        println!("  {word}");
    }
    if completions.remaining() > 0 {
        println!("  ... and {} more", completions.remaining());
    }
}

fn freq(engine: &Sift, word: &str) {
    let counts = engine.frequency(word);
    let total: usize = counts.iter().map(|&(_, n)| n).sum();
    for (doc_id, count) in counts.into_iter().filter(|&(_, n)| n > 0) {
        println!("{:>8}  {}", count, doc_name(engine, doc_id));
    }
    println!("Total occurrences of '{}': {total}", word.trim().to_lowercase());
}

fn rank(engine: &Sift, keywords: &[String], top: usize) {
    for (position, page) in engine.rank(keywords).iter().take(top).enumerate() {
        let breakdown = page
            .keyword_counts
            .iter()
            .map(|(k, n)| format!("{k}={n}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "{:>3}. {}  score={}  [{breakdown}]",
            position + 1,
            doc_name(engine, page.doc_id),
            page.score
        );
    }
}

fn search(engine: &Sift, token: &str) {
    let hits = engine.search(token);
    if hits.is_empty() {
        println!("'{}' does not occur as a token.", hits.token);
        return;
    }
    for &(doc_id, count) in &hits.per_document {
        println!("{:>8}  {}", count, doc_name(engine, doc_id));
    }
    println!("{} documents, {} occurrences", hits.per_document.len(), hits.total());
}

fn search_all(engine: &Sift, tokens: &[String]) {
    let docs = engine.search_all(tokens);
    if docs.is_empty() {
        println!("No document contains all of: {}", tokens.join(", "));
        return;
    }
    for doc_id in docs {
        println!("  {}", doc_name(engine, doc_id));
    }
}

fn track(engine: &mut Sift, tokens: &[String], top: usize) {
    for token in tokens {
        let occurrences = engine.track(token);
        println!("{token}: {occurrences} occurrences");
    }
    println!("\nTop searches:");
    for (token, count) in engine.top_searches(top) {
        println!("{count:>8}  {token}");
    }
}

fn stats(engine: &Sift, top: usize) {
    let stats = engine.stats();
    println!("{stats}");
    println!("{:.1} distinct tokens per document", stats.postings_per_document());
    println!("\nMost common tokens:");
    for (token, documents) in engine.most_common(top) {
        println!("{documents:>8}  {token}");
    }
}

fn fmt_duration(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs >= 1.0 {
        format!("{secs:.3} s")
    } else {
        format!("{:.3} ms", secs * 1000.0)
    }
}
