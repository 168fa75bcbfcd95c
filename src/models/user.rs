//! Authenticated user, as returned by `users/me`.

use serde::{Deserialize, Serialize};

/// The account behind the credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User ID.
    pub id: u64,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub slug: Option<String>,
}

impl CurrentUser {
    /// Display name, or `unknown` when the server omits it.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unknown")
    }
}
