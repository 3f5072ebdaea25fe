use std::io::{self, Write};
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::OutputFormat;
use crate::client::Transport;
use crate::config::Config;
use crate::controller::Controller;
use crate::error::Result;
use crate::output;
use crate::state::AppState;
use crate::view;

const HELP: &str = "Commands:
    path <owner/name>   Set the repository path
    search [owner/name] Fetch open issues for the path
    more                Load the next page of issues
    star                Star or unstar the repository
    show                Render the current state again
    help                Show this help
    quit                Leave the shell
Typing a bare owner/name sets the path and searches.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Path(String),
    Search(Option<String>),
    More,
    Star,
    Show,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<std::result::Result<Self, String>> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, Some(rest.trim()).filter(|rest| !rest.is_empty())),
            None => (line, None),
        };

        let command = match (word.to_lowercase().as_str(), rest) {
            ("path" | "p", Some(path)) => Ok(Self::Path(path.to_string())),
            ("path" | "p", None) => Err("usage: path <owner/name>".to_string()),
            ("search" | "s", path) => Ok(Self::Search(path.map(String::from))),
            ("more" | "m", None) => Ok(Self::More),
            ("star", None) => Ok(Self::Star),
            ("show" | "ls", None) => Ok(Self::Show),
            ("help" | "h" | "?", None) => Ok(Self::Help),
            ("quit" | "q" | "exit", None) => Ok(Self::Quit),
            _ if rest.is_none() && word.contains('/') => Ok(Self::Search(Some(word.to_string()))),
            _ => Err(format!("unknown command: {line} (type 'help')")),
        };
        Some(command)
    }
}

pub async fn run<T: Transport + 'static>(
    transport: Arc<T>,
    config: &Config,
    path: Option<String>,
) -> Result<()> {
    let format = output::format();
    let mut controller = Controller::new(
        transport,
        AppState::new(config.resolve_path(path.as_deref())),
    );

    if !output::is_quiet() {
        println!("{HELP}\n");
    }
    controller.submit();
    render(&controller, format);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;

    loop {
        tokio::select! {
            Some(applied) = controller.next_completion(), if controller.has_pending() => {
                if applied {
                    println!();
                    render(&controller, format);
                    prompt()?;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match ShellCommand::parse(&line) {
                    None => {}
                    Some(Err(message)) => eprintln!("{message}"),
                    Some(Ok(ShellCommand::Quit)) => break,
                    Some(Ok(command)) => execute(&mut controller, command, format),
                }
                prompt()?;
            }
        }
    }

    Ok(())
}

fn execute<T: Transport + 'static>(
    controller: &mut Controller<T>,
    command: ShellCommand,
    format: OutputFormat,
) {
    match command {
        ShellCommand::Path(path) => {
            controller.change_path(&path);
            output::print_message(&format!("Path set to {path}"));
        }
        ShellCommand::Search(path) => {
            if let Some(path) = path {
                controller.change_path(&path);
            }
            controller.submit();
            // An invalid path is reported without a round trip.
            if !controller.has_pending() {
                render(controller, format);
            }
        }
        ShellCommand::More => {
            if controller.is_searching() {
                output::print_message("Search still loading");
            } else if !controller.fetch_more() {
                output::print_message("No more issues to load");
            }
        }
        ShellCommand::Star => match controller.toggle_star() {
            Ok(action) => output::print_message(&format!("{}ring ...", action.label())),
            Err(e) => eprintln!("Error: {e}"),
        },
        ShellCommand::Show => render(controller, format),
        ShellCommand::Help => println!("{HELP}"),
        ShellCommand::Quit => {}
    }
}

fn render<T: Transport + 'static>(controller: &Controller<T>, format: OutputFormat) {
    println!("{}", view::render(controller.state(), format));
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}
