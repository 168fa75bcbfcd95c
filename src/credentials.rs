//! Site credentials.
//!
//! Read once at process start and handed to [`WpClient::new`](crate::WpClient::new).

use std::env;
use std::fmt;

use crate::error::{PressError, Result};

/// Environment variable holding the site base URL.
pub const SITE_URL_VAR: &str = "WP_SITE_URL";
/// Environment variable holding the account username.
pub const USERNAME_VAR: &str = "WP_USERNAME";
/// Environment variable holding the application password.
pub const APP_PASSWORD_VAR: &str = "WP_APP_PASSWORD";

/// Site URL, username and application password.
///
/// All three are guaranteed non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    site_url: String,
    username: String,
    app_password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("site_url", &self.site_url)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl Credentials {
    /// Create credentials from explicit values.
    ///
    /// # Errors
    ///
    /// Returns [`PressError::ConfigMissing`] naming every empty value.
    pub fn new(site_url: &str, username: &str, app_password: &str) -> Result<Self> {
        let missing: Vec<&'static str> = [
            (SITE_URL_VAR, site_url),
            (USERNAME_VAR, username),
            (APP_PASSWORD_VAR, app_password),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(PressError::ConfigMissing(missing));
        }

        Ok(Self {
            site_url: site_url.to_string(),
            username: username.to_string(),
            app_password: app_password.to_string(),
        })
    }

    /// Read credentials from the environment, loading `.env` first if present.
    ///
    /// Surrounding quote characters are stripped from each value.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read credentials through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| strip_quotes(&v).to_string())
                .unwrap_or_default()
        };

        Self::new(
            &read(SITE_URL_VAR),
            &read(USERNAME_VAR),
            &read(APP_PASSWORD_VAR),
        )
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn app_password(&self) -> &str {
        &self.app_password
    }
}

fn strip_quotes(value: &str) -> &str {
    value.trim_matches(|c: char| c == '"' || c == '\'')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_reads_all_three_values() {
        let creds = Credentials::from_lookup(lookup_from(&[
            ("WP_SITE_URL", "https://example.com"),
            ("WP_USERNAME", "editor"),
            ("WP_APP_PASSWORD", "abcd efgh ijkl"),
        ]))
        .unwrap();

        assert_eq!(creds.site_url(), "https://example.com");
        assert_eq!(creds.username(), "editor");
        assert_eq!(creds.app_password(), "abcd efgh ijkl");
    }

    #[test]
    fn test_strips_surrounding_quotes() {
        let creds = Credentials::from_lookup(lookup_from(&[
            ("WP_SITE_URL", "\"https://example.com\""),
            ("WP_USERNAME", "'editor'"),
            ("WP_APP_PASSWORD", "\"secret'"),
        ]))
        .unwrap();

        assert_eq!(creds.site_url(), "https://example.com");
        assert_eq!(creds.username(), "editor");
        assert_eq!(creds.app_password(), "secret");
    }

    #[test]
    fn test_reports_every_missing_variable() {
        let err = Credentials::from_lookup(lookup_from(&[("WP_USERNAME", "editor")]))
            .unwrap_err();

        match err {
            PressError::ConfigMissing(missing) => {
                assert_eq!(missing, vec!["WP_SITE_URL", "WP_APP_PASSWORD"]);
            }
            other => panic!("expected ConfigMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_quotes_only_counts_as_missing() {
        let err = Credentials::from_lookup(lookup_from(&[
            ("WP_SITE_URL", "https://example.com"),
            ("WP_USERNAME", "\"\""),
            ("WP_APP_PASSWORD", "secret"),
        ]))
        .unwrap_err();
        assert!(matches!(err, PressError::ConfigMissing(ref m) if m == &vec!["WP_USERNAME"]));
    }

    #[test]
    fn test_debug_hides_password() {
        let creds = Credentials::new("https://example.com", "editor", "hunter2").unwrap();
        let debug = format!("{creds:?}");
        assert!(debug.contains("editor"));
        assert!(!debug.contains("hunter2"));
    }
}
