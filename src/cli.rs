use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Compact,
}

#[derive(Parser)]
#[command(name = "gh-issues")]
#[command(about = "Browse open GitHub issues and star repositories over GraphQL", version)]
#[command(after_help = "EXAMPLES:
    gh-issues issues facebook/react           Show the first page of open issues
    gh-issues issues facebook/react --pages 3 Follow pagination for three pages
    gh-issues star rust-lang/rust             Star or unstar a repository
    gh-issues shell                           Interactive session")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, compact)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress status messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show detailed error information and debug logs
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List open issues of a repository
    #[command(
        alias = "i",
        after_help = "EXAMPLES:
    gh-issues issues
    gh-issues issues the-road-to-learn-react/the-road-to-learn-react
    gh-issues issues https://github.com/facebook/react --all"
    )]
    Issues(IssuesArgs),
    /// Star the repository, or unstar it if already starred
    #[command(after_help = "EXAMPLES:
    gh-issues star facebook/react")]
    Star {
        /// Repository as owner/name (uses default_path if omitted)
        path: Option<String>,
    },
    /// Interactive session: search, page through issues, toggle the star
    #[command(after_help = "EXAMPLES:
    gh-issues shell
    gh-issues shell facebook/react")]
    Shell {
        /// Repository to load first (uses default_path if omitted)
        path: Option<String>,
    },
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    gh-issues completions bash > ~/.bash_completion.d/gh-issues
    gh-issues completions zsh > ~/.zfunc/_gh-issues")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    Init,
}

#[derive(Args, Clone)]
pub struct IssuesArgs {
    /// Repository as owner/name or GitHub URL (uses default_path if omitted)
    pub path: Option<String>,

    /// Number of pages to fetch, following endCursor
    #[arg(long, short, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,

    /// Fetch every page (may be slow for large repositories)
    #[arg(long, conflicts_with = "pages")]
    pub all: bool,
}
