mod connection;
mod issue;
mod organization;
mod reaction;
mod repository;

pub use connection::{Edge, PageInfo};
pub use issue::{Issue, IssueConnection};
pub use organization::Organization;
pub use reaction::ReactionConnection;
pub use repository::Repository;
