//! WordPress REST model types.

mod media;
mod metadata;
mod post;
mod rendered;
mod user;

pub use media::*;
pub use metadata::*;
pub use post::*;
pub use user::*;
