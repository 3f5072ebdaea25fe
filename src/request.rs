//! GraphQL documents and the request payloads built from them.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::json;
use url::Url;

use crate::error::{IssuesError, Result};

pub const ISSUES_QUERY: &str = r#"
query ($cursor: String, $organization: String!, $repository: String!) {
    organization(login: $organization) {
        name
        url
        repository(name: $repository) {
            id
            name
            url
            viewerHasStarred
            issues(first: 5, after: $cursor, states: [OPEN]) {
                edges {
                    node {
                        id
                        title
                        url
                        reactions(last: 3) {
                            edges {
                                node {
                                    id
                                    content
                                }
                            }
                        }
                    }
                }
                totalCount
                pageInfo {
                    endCursor
                    hasNextPage
                }
            }
        }
    }
}
"#;

pub const ADD_STAR_MUTATION: &str = r#"
mutation ($repositoryId: ID!) {
    addStar(input: { starrableId: $repositoryId }) {
        starrable {
            viewerHasStarred
        }
    }
}
"#;

pub const REMOVE_STAR_MUTATION: &str = r#"
mutation ($repositoryId: ID!) {
    removeStar(input: { starrableId: $repositoryId }) {
        starrable {
            viewerHasStarred
        }
    }
}
"#;

static PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^/\s]+)/([^/\s]+)$").expect("repository path pattern is valid")
});

/// Body of a GraphQL POST.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GraphQLRequest {
    pub query: &'static str,
    pub variables: serde_json::Value,
}

/// An `owner/name` pair identifying a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPath {
    pub organization: String,
    pub repository: String,
}

impl RepoPath {
    /// Parse `owner/name`, or a GitHub URL such as
    /// `https://github.com/owner/name/issues`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
            return Self::from_url(trimmed);
        }

        let captures = PATH_PATTERN
            .captures(trimmed)
            .ok_or_else(|| IssuesError::InvalidPath(input.to_string()))?;

        Ok(Self {
            organization: captures[1].to_string(),
            repository: captures[2].to_string(),
        })
    }

    fn from_url(input: &str) -> Result<Self> {
        let invalid = || IssuesError::InvalidPath(input.to_string());
        let url = Url::parse(input).map_err(|_| invalid())?;

        let mut segments = url
            .path_segments()
            .ok_or_else(invalid)?
            .filter(|segment| !segment.is_empty());

        let organization = segments.next().ok_or_else(invalid)?;
        let repository = segments.next().ok_or_else(invalid)?;
        let repository = repository.strip_suffix(".git").unwrap_or(repository);

        if repository.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            organization: organization.to_string(),
            repository: repository.to_string(),
        })
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.organization, self.repository)
    }
}

/// Which star mutation to send. Chosen from the repository's current
/// `viewerHasStarred`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarAction {
    Add,
    Remove,
}

impl StarAction {
    pub fn for_viewer(viewer_has_starred: bool) -> Self {
        if viewer_has_starred {
            StarAction::Remove
        } else {
            StarAction::Add
        }
    }

    pub fn document(self) -> &'static str {
        match self {
            StarAction::Add => ADD_STAR_MUTATION,
            StarAction::Remove => REMOVE_STAR_MUTATION,
        }
    }

    /// Name of the `data` field the mutation answers under.
    pub fn field(self) -> &'static str {
        match self {
            StarAction::Add => "addStar",
            StarAction::Remove => "removeStar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StarAction::Add => "Star",
            StarAction::Remove => "Unstar",
        }
    }
}

pub fn issues_query(path: &RepoPath, cursor: Option<&str>) -> GraphQLRequest {
    GraphQLRequest {
        query: ISSUES_QUERY,
        variables: json!({
            "organization": path.organization,
            "repository": path.repository,
            "cursor": cursor,
        }),
    }
}

pub fn star_mutation(repository_id: &str, action: StarAction) -> GraphQLRequest {
    GraphQLRequest {
        query: action.document(),
        variables: json!({ "repositoryId": repository_id }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issues_query_splits_path() {
        let path = RepoPath::parse("facebook/react").unwrap();
        let request = issues_query(&path, Some("Y3Vyc29yOjU="));

        assert_eq!(request.query, ISSUES_QUERY);
        assert_eq!(
            request.variables,
            json!({
                "organization": "facebook",
                "repository": "react",
                "cursor": "Y3Vyc29yOjU=",
            })
        );
    }

    #[test]
    fn test_first_page_sends_null_cursor() {
        let path = RepoPath::parse("facebook/react").unwrap();
        let request = issues_query(&path, None);
        assert_eq!(request.variables["cursor"], serde_json::Value::Null);
    }

    #[test]
    fn test_request_body_shape() {
        let path = RepoPath::parse("rust-lang/rust").unwrap();
        let body = serde_json::to_value(issues_query(&path, None)).unwrap();
        assert!(body["query"].as_str().unwrap().contains("issues(first: 5"));
        assert_eq!(body["variables"]["organization"], "rust-lang");
    }

    #[test]
    fn test_star_mutation_documents() {
        let add = star_mutation("MDEwOlJlcG9zaXRvcnk=", StarAction::Add);
        assert!(add.query.contains("addStar"));
        assert_eq!(add.variables, json!({ "repositoryId": "MDEwOlJlcG9zaXRvcnk=" }));

        let remove = star_mutation("MDEwOlJlcG9zaXRvcnk=", StarAction::Remove);
        assert!(remove.query.contains("removeStar"));
        assert!(!remove.query.contains("addStar"));
    }

    #[test]
    fn test_star_action_for_viewer() {
        assert_eq!(StarAction::for_viewer(false), StarAction::Add);
        assert_eq!(StarAction::for_viewer(true), StarAction::Remove);
        assert_eq!(StarAction::Add.field(), "addStar");
        assert_eq!(StarAction::Remove.field(), "removeStar");
    }

    #[test]
    fn test_parse_github_url() {
        let path = RepoPath::parse("https://github.com/tokio-rs/tokio/issues").unwrap();
        assert_eq!(path.to_string(), "tokio-rs/tokio");

        let path = RepoPath::parse("https://github.com/serde-rs/serde.git").unwrap();
        assert_eq!(path.repository, "serde");
    }

    #[test]
    fn test_parse_rejects_malformed_paths() {
        for input in ["", "react", "facebook/", "/react", "a/b/c", "face book/react"] {
            assert!(
                matches!(RepoPath::parse(input), Err(IssuesError::InvalidPath(_))),
                "{input:?} should be rejected"
            );
        }
        assert!(RepoPath::parse("https://github.com/facebook").is_err());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let path = RepoPath::parse("  facebook/react\n").unwrap();
        assert_eq!(path.organization, "facebook");
        assert_eq!(path.repository, "react");
    }
}
