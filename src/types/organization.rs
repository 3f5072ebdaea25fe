use serde::{Deserialize, Serialize};

use super::Repository;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Organization {
    /// Display name; organizations without one report `null`.
    pub name: Option<String>,
    pub url: String,
    pub repository: Option<Repository>,
}
