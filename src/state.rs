use serde::Serialize;

use crate::responses::GraphQLError;
use crate::types::{Organization, PageInfo, Repository};

pub const DEFAULT_PATH: &str = "the-road-to-learn-react/the-road-to-learn-react";

/// Everything the view renders. Replaced wholesale by each reducer call.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AppState {
    pub path: String,
    pub organization: Option<Organization>,
    pub errors: Option<Vec<GraphQLError>>,
}

impl AppState {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            organization: None,
            errors: None,
        }
    }

    pub fn repository(&self) -> Option<&Repository> {
        self.organization
            .as_ref()
            .and_then(|organization| organization.repository.as_ref())
    }

    pub fn page_info(&self) -> Option<&PageInfo> {
        self.repository().map(|repository| &repository.issues.page_info)
    }

    pub fn has_next_page(&self) -> bool {
        self.page_info().is_some_and(|page_info| page_info.has_next_page)
    }

    /// Error messages joined by a space, if any are present.
    pub fn error_message(&self) -> Option<String> {
        let errors = self.errors.as_ref().filter(|errors| !errors.is_empty())?;
        Some(
            errors
                .iter()
                .map(|error| error.message.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}
