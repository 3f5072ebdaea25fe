//! GraphQL response envelopes and the `data` shapes of each operation.

use serde::{Deserialize, Serialize};

use crate::request::StarAction;
use crate::types::Organization;

/// The `{ data, errors }` envelope returned by the GraphQL endpoint.
#[derive(Deserialize, Debug, Clone)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

impl<T> GraphQLResponse<T> {
    /// Returns the error list only when it is non-empty.
    pub fn populated_errors(&self) -> Option<&[GraphQLError]> {
        self.errors.as_deref().filter(|errors| !errors.is_empty())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GraphQLError {
    pub message: String,
}

impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `data` of the issues query.
#[derive(Deserialize, Debug, Clone)]
pub struct IssuesData {
    pub organization: Option<Organization>,
}

/// `data` of a star mutation. Only the field matching the action is present.
#[derive(Deserialize, Debug, Clone)]
pub struct StarData {
    #[serde(rename = "addStar")]
    pub add_star: Option<StarPayload>,
    #[serde(rename = "removeStar")]
    pub remove_star: Option<StarPayload>,
}

impl StarData {
    pub fn payload(&self, action: StarAction) -> Option<&StarPayload> {
        match action {
            StarAction::Add => self.add_star.as_ref(),
            StarAction::Remove => self.remove_star.as_ref(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct StarPayload {
    pub starrable: Starrable,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Starrable {
    #[serde(rename = "viewerHasStarred")]
    pub viewer_has_starred: bool,
}
