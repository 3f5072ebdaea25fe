use serde::{Deserialize, Serialize};

use super::{Edge, PageInfo, ReactionConnection};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub reactions: ReactionConnection,
}

/// One page of open issues, or the accumulated pages after `fetch_more`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct IssueConnection {
    pub edges: Vec<Edge<Issue>>,
    #[serde(rename = "totalCount")]
    pub total_count: u32,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
}

impl IssueConnection {
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.edges.iter().map(|edge| &edge.node)
    }
}
