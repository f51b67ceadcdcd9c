use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgGroup, Args, Parser, Subcommand};
use serde::Serialize;

use crate::models::{DocumentTurn, RenderMode, RenderedDocument, SearchHit};
use crate::parsers::read_log_lines;
use crate::render::render;
use crate::render::timestamps::format_date;
use crate::search::{SearchQuery, search_paths};
use crate::utils::{format_path_with_tilde, output_file_name};

#[derive(Parser)]
#[command(name = "claude-transcript")]
#[command(version = "0.1.0")]
#[command(about = "Render Claude conversation logs to Markdown and search them", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a JSONL conversation log to Markdown
    Render(RenderArgs),
    /// Search rendered documents for keywords
    Search(SearchArgs),
    /// Show turn counts for a conversation log
    Stats {
        /// JSONL conversation log
        input: PathBuf,
    },
}

#[derive(Args)]
#[command(group(ArgGroup::new("destination").args(["output", "output_dir"])))]
pub struct RenderArgs {
    /// JSONL conversation log
    pub input: PathBuf,
    #[arg(long, value_enum, default_value_t = RenderMode::Full)]
    pub mode: RenderMode,
    /// Write the document to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Write into this directory, named by project and session date
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    /// Write both the full and the clean rendering
    #[arg(long, requires = "output_dir")]
    pub both: bool,
    /// Print the render summary as JSON
    #[arg(long, requires = "destination")]
    pub json: bool,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Keywords; every one must appear in a turn
    pub query: String,
    /// Rendered documents or directories containing them
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
    /// Turns of context to show around each match
    #[arg(short = 'C', long, default_value_t = 1)]
    pub context: usize,
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct RenderReport<'a> {
    path: Option<&'a Path>,
    #[serde(flatten)]
    document: &'a RenderedDocument,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Render(args)) => {
            render_command(args)?;
        }
        Some(Commands::Search(args)) => {
            search_command(args)?;
        }
        Some(Commands::Stats { input }) => {
            show_stats(input)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn render_command(args: &RenderArgs) -> Result<()> {
    let lines = read_log_lines(&args.input)?;
    let modes = if args.both { vec![RenderMode::Full, RenderMode::Clean] } else { vec![args.mode] };

    let mut written = Vec::new();
    for mode in modes {
        let document = render(&lines, mode);
        let path = match (&args.output, &args.output_dir) {
            (Some(path), _) => Some(path.clone()),
            (None, Some(dir)) => {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
                Some(dir.join(output_file_name(
                    &document.display_name,
                    document.session_start,
                    mode,
                )))
            }
            (None, None) => None,
        };

        match &path {
            Some(path) => fs::write(path, &document.text)
                .with_context(|| format!("Failed to write document: {}", path.display()))?,
            None => print!("{}", document.text),
        }
        written.push((path, document));
    }

    if args.json {
        let reports: Vec<RenderReport<'_>> = written
            .iter()
            .map(|(path, document)| RenderReport { path: path.as_deref(), document })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for (path, document) in &written {
        let summary = render_summary(document);
        match path {
            Some(path) => {
                println!("Wrote {}", format_path_with_tilde(path));
                println!("{}", summary);
            }
            // The document itself owns stdout
            None => eprintln!("{}", summary),
        }
    }

    Ok(())
}

fn render_summary(document: &RenderedDocument) -> String {
    let session = document
        .session_start
        .as_ref()
        .map(format_date)
        .unwrap_or_else(|| "unknown".to_string());
    format!(
        "  {} mode: {} turns ({} user, {} assistant), session {}",
        document.mode.label(),
        document.counts.total_turns,
        document.counts.user_turns,
        document.counts.assistant_turns,
        session
    )
}

fn search_command(args: &SearchArgs) -> Result<()> {
    let query = SearchQuery::new(&args.query, args.context);
    let hits = search_paths(&args.paths, &query)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    for hit in &hits {
        print_hit(hit);
    }
    eprintln!("{} matching turns", hits.len());

    Ok(())
}

fn print_hit(hit: &SearchHit) {
    let location =
        hit.path.as_deref().map(format_path_with_tilde).unwrap_or_else(|| "-".to_string());
    println!("{} (turn {}, {})", location, hit.turn.index + 1, hit.turn.speaker.label());

    for turn in &hit.before {
        print_turn(turn, "  | ");
    }
    print_turn(&hit.turn, "> ");
    for turn in &hit.after {
        print_turn(turn, "  | ");
    }
    println!();
}

fn print_turn(turn: &DocumentTurn, prefix: &str) {
    println!("{}[{}]", prefix, turn.speaker.label());
    for line in turn.body.lines() {
        println!("{}{}", prefix, line);
    }
}

fn show_stats(input: &Path) -> Result<()> {
    let lines = read_log_lines(input)?;
    let full = render(&lines, RenderMode::Full);
    let clean = render(&lines, RenderMode::Clean);

    println!("Conversation Statistics");
    println!("=======================");
    println!("Project: {}", full.display_name);
    match &full.session_start {
        Some(start) => println!("Session date: {}", format_date(start)),
        None => println!("Session date: unknown"),
    }
    println!("Skipped lines: {}", full.skipped_lines);
    println!();
    for document in [&full, &clean] {
        println!("{} mode:", document.mode.label());
        println!("  Total turns: {}", document.counts.total_turns);
        println!("  User turns: {}", document.counts.user_turns);
        println!("  Assistant turns: {}", document.counts.assistant_turns);
    }

    Ok(())
}
