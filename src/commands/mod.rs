pub mod init;
pub mod issues;
pub mod shell;
pub mod star;

use crate::error::{IssuesError, Result};
use crate::state::AppState;

/// Turn errors left in the state into a command failure.
pub(crate) fn ensure_ok(state: &AppState) -> Result<()> {
    match &state.errors {
        Some(errors) if !errors.is_empty() => Err(IssuesError::Reported {
            messages: errors.iter().map(|error| error.message.clone()).collect(),
        }),
        _ => Ok(()),
    }
}
