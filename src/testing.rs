//! Fixtures and an in-memory transport shared by the unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::client::Transport;
use crate::error::{IssuesError, Result};
use crate::request::{GraphQLRequest, StarAction};
use crate::responses::{GraphQLResponse, IssuesData, StarData};
use crate::state::{AppState, DEFAULT_PATH};

pub const REPOSITORY_ID: &str = "MDEwOlJlcG9zaXRvcnk5MzU1ODE0MA==";

pub fn issue_edge(id: &str) -> Value {
    json!({
        "node": {
            "id": id,
            "title": format!("Issue {id}"),
            "url": format!("https://github.com/{DEFAULT_PATH}/issues/{id}"),
            "reactions": {
                "edges": [
                    { "node": { "id": format!("{id}-r1"), "content": "HEART" } }
                ]
            }
        }
    })
}

pub fn issues_body(
    ids: &[&str],
    total_count: u32,
    end_cursor: Option<&str>,
    has_next_page: bool,
    viewer_has_starred: bool,
) -> Value {
    let edges: Vec<Value> = ids.iter().map(|id| issue_edge(id)).collect();
    json!({
        "data": {
            "organization": {
                "name": "The Road to learn React",
                "url": "https://github.com/the-road-to-learn-react",
                "repository": {
                    "id": REPOSITORY_ID,
                    "name": "the-road-to-learn-react",
                    "url": format!("https://github.com/{DEFAULT_PATH}"),
                    "viewerHasStarred": viewer_has_starred,
                    "issues": {
                        "edges": edges,
                        "totalCount": total_count,
                        "pageInfo": {
                            "endCursor": end_cursor,
                            "hasNextPage": has_next_page
                        }
                    }
                }
            }
        }
    })
}

pub fn star_body(action: StarAction, viewer_has_starred: bool) -> Value {
    let mut data = serde_json::Map::new();
    data.insert(
        action.field().to_string(),
        json!({ "starrable": { "viewerHasStarred": viewer_has_starred } }),
    );
    json!({ "data": data })
}

pub fn error_body(message: &str) -> Value {
    json!({
        "data": null,
        "errors": [ { "message": message } ]
    })
}

pub fn issues_response(body: Value) -> GraphQLResponse<IssuesData> {
    serde_json::from_value(body).unwrap()
}

pub fn star_response(body: Value) -> GraphQLResponse<StarData> {
    serde_json::from_value(body).unwrap()
}

/// State after a first page of `ids` was loaded.
pub fn loaded_state(ids: &[&str], end_cursor: Option<&str>, has_next_page: bool) -> AppState {
    let response = issues_response(issues_body(ids, 9, end_cursor, has_next_page, false));
    AppState {
        path: DEFAULT_PATH.to_string(),
        organization: response.data.and_then(|data| data.organization),
        errors: None,
    }
}

pub fn edge_ids(state: &AppState) -> Vec<String> {
    state
        .repository()
        .map(|repository| repository.issues.issues().map(|issue| issue.id.clone()).collect())
        .unwrap_or_default()
}

/// Replays queued bodies in order and records every request it was given.
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<VecDeque<Result<Value>>>,
    requests: Mutex<Vec<GraphQLRequest>>,
}

impl FakeTransport {
    pub fn with_responses(responses: Vec<Result<Value>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<GraphQLRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn execute(&self, request: &GraphQLRequest) -> Result<Value> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(IssuesError::ApiError {
                status: 500,
                message: "no canned response left".to_string(),
            }))
    }
}
