//! State transitions. Each function takes the previous state by reference and
//! returns a new one; nothing here performs I/O.

use tracing::warn;

use crate::error::IssuesError;
use crate::request::StarAction;
use crate::responses::{GraphQLError, GraphQLResponse, IssuesData, StarData};
use crate::state::AppState;

pub fn change_path(prev: &AppState, path: &str) -> AppState {
    AppState {
        path: path.to_string(),
        ..prev.clone()
    }
}

/// Fold an issues query response into the state.
///
/// Without a cursor the organization is replaced by the response's. With a
/// cursor the previously fetched edges are kept in front of the new ones;
/// duplicates returned by the API are kept as well.
pub fn resolve_issues_query(
    prev: &AppState,
    response: GraphQLResponse<IssuesData>,
    cursor: Option<&str>,
) -> AppState {
    let has_errors = response.populated_errors().is_some();
    let GraphQLResponse { data, errors } = response;

    if has_errors {
        // A failed continuation must not discard the pages already shown.
        let organization = match cursor {
            None => data.and_then(|data| data.organization),
            Some(_) => prev.organization.clone(),
        };
        return AppState {
            path: prev.path.clone(),
            organization,
            errors,
        };
    }

    let mut organization = data.and_then(|data| data.organization);

    if cursor.is_some() {
        if let Some(repository) = organization
            .as_mut()
            .and_then(|organization| organization.repository.as_mut())
        {
            let mut edges = prev
                .repository()
                .map(|previous| previous.issues.edges.clone())
                .unwrap_or_default();
            edges.append(&mut repository.issues.edges);
            repository.issues.edges = edges;
        }
    }

    AppState {
        path: prev.path.clone(),
        organization,
        errors,
    }
}

/// Write the mutation's `viewerHasStarred` into the loaded repository.
pub fn resolve_star_mutation(
    prev: &AppState,
    response: GraphQLResponse<StarData>,
    action: StarAction,
) -> AppState {
    if response.populated_errors().is_some() {
        return AppState {
            errors: response.errors,
            ..prev.clone()
        };
    }

    let Some(payload) = response.data.as_ref().and_then(|data| data.payload(action)) else {
        warn!(field = action.field(), "Star mutation response is missing its payload");
        return AppState {
            errors: Some(vec![GraphQLError::new(format!(
                "Response did not contain {}",
                action.field()
            ))]),
            ..prev.clone()
        };
    };

    let mut next = prev.clone();
    if let Some(repository) = next
        .organization
        .as_mut()
        .and_then(|organization| organization.repository.as_mut())
    {
        repository.viewer_has_starred = payload.starrable.viewer_has_starred;
    }
    next
}

/// Surface a transport or decode failure through the error display, keeping
/// whatever was loaded before.
pub fn resolve_failure(prev: &AppState, error: &IssuesError) -> AppState {
    AppState {
        errors: Some(vec![GraphQLError::new(error.to_string())]),
        ..prev.clone()
    }
}
