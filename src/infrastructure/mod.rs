//! Infrastructure layer: remote content-tree access

pub mod error;
pub mod notion;
pub mod traits;

pub use error::{SourceError, SourceResult};
pub use notion::NotionClient;
