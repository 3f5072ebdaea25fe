use serde::{Deserialize, Serialize};

use super::IssueConnection;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Repository {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "viewerHasStarred")]
    pub viewer_has_starred: bool,
    pub issues: IssueConnection,
}
