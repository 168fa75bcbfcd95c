//! Update trait for modifying entities.

use async_trait::async_trait;

use crate::client::WpClient;
use crate::error::Result;

/// Update an existing entity.
///
/// # Example
///
/// ```ignore
/// use presskit::{Credentials, FeaturedImage, FeaturedMediaParams, Update, WpClient};
///
/// let client = WpClient::new(&Credentials::from_env()?)?;
/// let result = FeaturedImage::update(&client, 1234, FeaturedMediaParams { featured_media: 42 }).await?;
/// assert_eq!(result.featured_media, 42);
/// ```
#[async_trait]
pub trait Update: Sized {
    /// The ID type for this entity.
    type Id;

    /// Parameters for the update.
    type Params;

    /// Update the entity and return the updated version.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn update(client: &WpClient, id: Self::Id, params: Self::Params) -> Result<Self>;
}
