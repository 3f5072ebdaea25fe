use std::sync::Arc;

use serde_json::json;

use crate::cli::OutputFormat;
use crate::client::Transport;
use crate::commands::ensure_ok;
use crate::config::Config;
use crate::controller::Controller;
use crate::error::{IssuesError, Result};
use crate::output;
use crate::request::RepoPath;
use crate::state::AppState;

pub async fn toggle<T: Transport + 'static>(
    transport: Arc<T>,
    config: &Config,
    path: Option<String>,
) -> Result<()> {
    let path = config.resolve_path(path.as_deref());
    let repo_path = RepoPath::parse(&path)?;

    let mut controller = Controller::new(transport, AppState::new(path));
    let starred = star_repository(&mut controller).await?;

    match output::format() {
        OutputFormat::Json => println!(
            "{}",
            json!({ "repository": repo_path.to_string(), "viewerHasStarred": starred })
        ),
        OutputFormat::Table | OutputFormat::Compact => {
            let verb = if starred { "Starred" } else { "Unstarred" };
            output::print_message(&format!("{verb} {repo_path}"));
        }
    }

    Ok(())
}

/// Load the repository, flip its star and return the new `viewerHasStarred`.
pub(crate) async fn star_repository<T: Transport + 'static>(
    controller: &mut Controller<T>,
) -> Result<bool> {
    controller.submit();
    controller.settle().await;
    ensure_ok(controller.state())?;

    controller.toggle_star()?;
    controller.settle().await;
    ensure_ok(controller.state())?;

    controller
        .state()
        .repository()
        .map(|repository| repository.viewer_has_starred)
        .ok_or(IssuesError::NoRepository)
}
