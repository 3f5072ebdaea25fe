//! Owns the application state and turns user intents into requests.
//!
//! Intents never block: each one spawns its request on the runtime and the
//! response comes back through a channel as a [`Completion`]. Completions are
//! folded in by [`Controller::next_completion`], which drops any that were
//! overtaken by a newer request of the same kind.

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::client::Transport;
use crate::error::{IssuesError, Result};
use crate::reducer;
use crate::request::{self, GraphQLRequest, RepoPath, StarAction};
use crate::responses::{GraphQLResponse, IssuesData, StarData};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Search,
    FetchMore,
    ToggleStar,
}

impl Intent {
    const ALL: [Intent; 3] = [Intent::Search, Intent::FetchMore, Intent::ToggleStar];
}

#[derive(Debug)]
enum Outcome {
    Issues {
        cursor: Option<String>,
        result: Result<GraphQLResponse<IssuesData>>,
    },
    Star {
        action: StarAction,
        result: Result<GraphQLResponse<StarData>>,
    },
}

#[derive(Debug)]
pub struct Completion {
    intent: Intent,
    load_id: u64,
    outcome: Outcome,
}

pub struct Controller<T> {
    transport: Arc<T>,
    state: AppState,
    /// Path of the last submitted search; pagination continues from it.
    loaded_path: Option<RepoPath>,
    /// Set from `submit` until its response is applied. The state still
    /// holds the previous repository meanwhile.
    searching: bool,
    next_load_id: u64,
    latest: HashMap<Intent, u64>,
    pending: usize,
    tx: UnboundedSender<Completion>,
    rx: UnboundedReceiver<Completion>,
}

impl<T: Transport + 'static> Controller<T> {
    pub fn new(transport: Arc<T>, state: AppState) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            transport,
            state,
            loaded_path: None,
            searching: false,
            next_load_id: 0,
            latest: HashMap::new(),
            pending: 0,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn has_pending(&self) -> bool {
        self.pending > 0
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn change_path(&mut self, path: &str) {
        self.state = reducer::change_path(&self.state, path);
    }

    /// Fetch the first page for the current path. Supersedes every request
    /// still in flight.
    pub fn submit(&mut self) {
        let path = match RepoPath::parse(&self.state.path) {
            Ok(path) => path,
            Err(e) => {
                self.state = reducer::resolve_failure(&self.state, &e);
                return;
            }
        };

        let load_id = self.issue_load_id(Intent::Search);
        for intent in Intent::ALL {
            self.latest.insert(intent, load_id);
        }

        info!(%path, load_id, "Fetching issues");
        let request = request::issues_query(&path, None);
        self.loaded_path = Some(path);
        self.searching = true;
        self.dispatch(Intent::Search, load_id, request, |result| Outcome::Issues {
            cursor: None,
            result,
        });
    }

    /// Request the page after the current `endCursor`. Returns `false` when
    /// there is nothing more to load or a search is still loading.
    pub fn fetch_more(&mut self) -> bool {
        if self.searching {
            debug!("fetch_more ignored, search in flight");
            return false;
        }
        let Some(path) = self.loaded_path.clone() else {
            debug!("fetch_more ignored, nothing loaded");
            return false;
        };
        let Some(page_info) = self.state.page_info().filter(|page_info| page_info.has_next_page)
        else {
            debug!("fetch_more ignored, no next page");
            return false;
        };
        let cursor = page_info.end_cursor.clone();

        let load_id = self.issue_load_id(Intent::FetchMore);
        info!(%path, load_id, cursor = ?cursor, "Fetching more issues");
        let request = request::issues_query(&path, cursor.as_deref());
        self.dispatch(Intent::FetchMore, load_id, request, move |result| {
            Outcome::Issues { cursor, result }
        });
        true
    }

    /// Star or unstar the loaded repository depending on its current
    /// `viewerHasStarred`.
    pub fn toggle_star(&mut self) -> Result<StarAction> {
        if self.searching {
            return Err(IssuesError::SearchInFlight);
        }
        let repository = self.state.repository().ok_or(IssuesError::NoRepository)?;
        let action = StarAction::for_viewer(repository.viewer_has_starred);
        let request = request::star_mutation(&repository.id, action);
        info!(repository = %repository.name, field = action.field(), "Toggling star");

        let load_id = self.issue_load_id(Intent::ToggleStar);
        self.dispatch(Intent::ToggleStar, load_id, request, move |result| {
            Outcome::Star { action, result }
        });
        Ok(action)
    }

    /// Wait for the next response and fold it into the state. Returns
    /// `None` when nothing is in flight, otherwise whether it was applied.
    pub async fn next_completion(&mut self) -> Option<bool> {
        if self.pending == 0 {
            return None;
        }
        let completion = self.rx.recv().await?;
        self.pending -= 1;
        Some(self.apply(completion))
    }

    /// Wait until every request in flight has completed.
    pub async fn settle(&mut self) {
        while self.next_completion().await.is_some() {}
    }

    fn issue_load_id(&mut self, intent: Intent) -> u64 {
        self.next_load_id += 1;
        self.latest.insert(intent, self.next_load_id);
        self.next_load_id
    }

    fn dispatch<D, F>(&mut self, intent: Intent, load_id: u64, request: GraphQLRequest, wrap: F)
    where
        D: DeserializeOwned + Send + 'static,
        F: FnOnce(Result<GraphQLResponse<D>>) -> Outcome + Send + 'static,
    {
        let transport = Arc::clone(&self.transport);
        let tx = self.tx.clone();
        self.pending += 1;

        tokio::spawn(async move {
            let result = match transport.execute(&request).await {
                Ok(body) => serde_json::from_value(body).map_err(IssuesError::from),
                Err(e) => Err(e),
            };
            let _ = tx.send(Completion {
                intent,
                load_id,
                outcome: wrap(result),
            });
        });
    }

    fn apply(&mut self, completion: Completion) -> bool {
        let Completion {
            intent,
            load_id,
            outcome,
        } = completion;

        let latest = self.latest.get(&intent).copied().unwrap_or(0);
        if load_id < latest {
            debug!(?intent, load_id, latest, "Discarding stale response");
            return false;
        }
        if intent == Intent::Search {
            self.searching = false;
        }

        self.state = match outcome {
            Outcome::Issues {
                cursor,
                result: Ok(response),
            } => reducer::resolve_issues_query(&self.state, response, cursor.as_deref()),
            Outcome::Star {
                action,
                result: Ok(response),
            } => reducer::resolve_star_mutation(&self.state, response, action),
            Outcome::Issues { result: Err(e), .. } | Outcome::Star { result: Err(e), .. } => {
                warn!(?intent, load_id, error = %e, "Request failed");
                reducer::resolve_failure(&self.state, &e)
            }
        };
        true
    }
}
