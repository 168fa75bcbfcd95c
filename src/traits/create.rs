//! Create trait for entities the CMS assigns an ID to.

use async_trait::async_trait;

use crate::client::WpClient;
use crate::error::Result;

/// Create a new entity and return the server's record of it.
///
/// The CMS answers 201 Created on success; implementations treat every
/// other status as a failure of their operation.
///
/// # Example
///
/// ```ignore
/// use presskit::{Create, Credentials, Media, MediaUpload, WpClient};
///
/// let client = WpClient::new(&Credentials::from_env()?)?;
/// let media = Media::create(&client, MediaUpload::new("hero.png")).await?;
/// println!("uploaded {} as {}", media.url, media.id);
/// ```
#[async_trait]
pub trait Create: Sized {
    /// What the caller supplies to create the entity.
    type Params: Send;

    /// Create the entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the request or it fails.
    async fn create(client: &WpClient, params: Self::Params) -> Result<Self>;
}
