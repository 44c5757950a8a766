//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use crate::domain::entities::ChildrenPage;
use crate::infrastructure::error::SourceResult;

/// Read-only access to the remote content tree.
///
/// One call fetches one page of a node's direct children; the pagination
/// loop lives in the export service.
pub trait BlockSource: Send + Sync {
    /// List one page of direct children of `block_id`, resuming from
    /// `cursor` when given.
    fn children_page(&self, block_id: &str, cursor: Option<&str>) -> SourceResult<ChildrenPage>;
}
