//! Trait definitions for CMS operations.
//!
//! Each model type implements the traits its endpoints support, keeping
//! status-code expectations and payload shapes in the implementations.

mod create;
mod get;
mod update;

pub use create::Create;
pub use get::Get;
pub use update::Update;
