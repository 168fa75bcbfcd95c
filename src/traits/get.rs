//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::WpClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// # Example
///
/// ```ignore
/// use presskit::{Credentials, Get, Post, WpClient};
///
/// let client = WpClient::new(&Credentials::from_env()?)?;
/// let post = Post::get(&client, 1234).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity.
    type Id;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the server does not answer 200 or the request fails.
    async fn get(client: &WpClient, id: Self::Id) -> Result<Self>;
}
