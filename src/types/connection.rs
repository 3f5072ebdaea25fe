use serde::{Deserialize, Serialize};

/// A single `{ node }` entry of a GraphQL connection.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Edge<T> {
    pub node: T,
}

/// Pagination info for cursor-based pagination.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct PageInfo {
    #[serde(rename = "endCursor")]
    pub end_cursor: Option<String>,
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
}
