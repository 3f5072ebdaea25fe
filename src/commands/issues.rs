use std::sync::Arc;

use crate::cli::IssuesArgs;
use crate::client::Transport;
use crate::commands::ensure_ok;
use crate::config::Config;
use crate::controller::Controller;
use crate::error::Result;
use crate::output;
use crate::request::RepoPath;
use crate::state::AppState;
use crate::view;

pub async fn list<T: Transport + 'static>(
    transport: Arc<T>,
    config: &Config,
    args: IssuesArgs,
) -> Result<()> {
    let path = config.resolve_path(args.path.as_deref());
    RepoPath::parse(&path)?;

    let limit = if args.all { None } else { Some(args.pages) };
    let mut controller = Controller::new(transport, AppState::new(path));
    let state = load_pages(&mut controller, limit).await?;

    println!("{}", view::render(state, output::format()));

    Ok(())
}

/// Load the first page and follow `endCursor` until `limit` pages are in,
/// or until the last page when `limit` is `None`.
pub(crate) async fn load_pages<T: Transport + 'static>(
    controller: &mut Controller<T>,
    limit: Option<u32>,
) -> Result<&AppState> {
    controller.submit();
    controller.settle().await;
    ensure_ok(controller.state())?;

    let mut fetched = 1;
    while limit.is_none_or(|limit| fetched < limit) {
        if !controller.fetch_more() {
            break;
        }
        controller.settle().await;
        ensure_ok(controller.state())?;
        fetched += 1;
    }

    Ok(controller.state())
}
