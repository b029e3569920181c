mod cmd;
mod completions;
mod host;
mod logging;
mod prompt;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::engine::ArgValueCompleter;
use clap_complete::env::CompleteEnv;
use docpen_core::layout::LayoutChoice;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "docpen",
    version,
    about = "Insert TOC entries and layout blocks into Markdown docs"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// List the Markdown files offered as TOC link targets
    ListFiles(ListFilesArgs),

    /// Insert a TOC entry linking a Markdown file
    TocEntry(TocEntryArgs),

    /// Insert an expandable TOC parent node
    TocParent(CaretArgs),

    /// Insert a row or column block into a Markdown file
    Layout(LayoutArgs),
}

#[derive(Debug, Args)]
pub struct ListFilesArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Where the edit happens.
#[derive(Debug, Args)]
pub struct CaretArgs {
    /// File to edit (created if missing)
    #[arg(long)]
    pub file: PathBuf,

    /// Zero-based caret line
    #[arg(long)]
    pub line: usize,

    /// Zero-based caret column, in characters
    #[arg(long, default_value_t = 0)]
    pub column: usize,

    /// Never open interactive prompts
    #[arg(long)]
    pub batch: bool,
}

#[derive(Debug, Args)]
pub struct TocEntryArgs {
    #[command(flatten)]
    pub caret: CaretArgs,

    /// Add placeholders for displayname, uid and expanded
    #[arg(long)]
    pub with_options: bool,

    /// File name to link, skipping the file picker
    #[arg(long, add = ArgValueCompleter::new(completions::complete_targets))]
    pub target: Option<String>,

    /// Entry name, skipping the name prompt
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LayoutKind {
    TwoColumn,
    Column,
    ColumnSpan,
}

impl From<LayoutKind> for LayoutChoice {
    fn from(kind: LayoutKind) -> Self {
        match kind {
            LayoutKind::TwoColumn => LayoutChoice::TwoColumnRow,
            LayoutKind::Column => LayoutChoice::NewColumn,
            LayoutKind::ColumnSpan => LayoutChoice::NewColumnWithSpan,
        }
    }
}

#[derive(Debug, Args)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub caret: CaretArgs,

    /// Block to insert, skipping the picker
    #[arg(long, value_enum)]
    pub kind: Option<LayoutKind>,
}

fn main() {
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config, profile),
        Commands::ListFiles(args) => cmd::list_files::run(config, profile, args.json),
        Commands::TocEntry(args) => cmd::edit::toc_entry(config, profile, &args),
        Commands::TocParent(args) => cmd::edit::toc_parent(config, profile, &args),
        Commands::Layout(args) => cmd::edit::layout(config, profile, &args),
    }
}
