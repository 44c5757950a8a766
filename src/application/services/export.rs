//! Page export service
//!
//! Orchestrates fetch + render across a page's nested structure and
//! persists the result. Two levels of nesting are rendered: a page's
//! direct children, and each child's direct children at one indentation
//! level. Deeper nesting in the source tree is dropped; this cap is a
//! deliberate design boundary.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::entities::{Block, Manifest};
use crate::domain::markdown::render_block;
use crate::infrastructure::traits::BlockSource;

/// Export service over a block source.
pub struct ExportService {
    source: Arc<dyn BlockSource>,
}

impl ExportService {
    /// Create a new export service.
    pub fn new(source: Arc<dyn BlockSource>) -> Self {
        Self { source }
    }

    /// Fetch the complete ordered list of a node's direct children,
    /// following the continuation cursor until the source reports no
    /// further pages. Results concatenate in received order.
    pub fn children(&self, block_id: &str) -> ApplicationResult<Vec<Block>> {
        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let page = self.source.children_page(block_id, cursor.as_deref())?;
            blocks.extend(page.results);
            if !page.has_more {
                break;
            }
            cursor = page.next_cursor;
        }
        debug!(block_id, count = blocks.len(), "fetched children");
        Ok(blocks)
    }

    /// Render a full page to Markdown: title heading, direct children at
    /// indent 0, and each child's direct children at indent 1. Child-page
    /// references are never descended into.
    pub fn render_page(&self, page_id: &str, title: &str) -> ApplicationResult<String> {
        let mut out = format!("# {title}\n\n");
        for block in self.children(page_id)? {
            out.push_str(&render_block(&block, 0));
            if block.has_children && !block.kind.is_child_page() {
                for child in self.children(&block.id)? {
                    out.push_str(&render_block(&child, 1));
                }
                out.push('\n');
            }
        }
        Ok(out)
    }

    /// Render a page and write it to `dest`, creating parent directories
    /// as needed. Prior content at `dest` is discarded; the written file
    /// ends with exactly one trailing newline.
    pub fn export_page(&self, page_id: &str, title: &str, dest: &Path) -> ApplicationResult<()> {
        let rendered = self.render_page(page_id, title)?;

        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    ApplicationError::io(format!("create directory {}", parent.display()), e)
                })?;
            }
        }

        let content = format!("{}\n", rendered.trim_end());
        fs::write(dest, content)
            .map_err(|e| ApplicationError::io(format!("write {}", dest.display()), e))?;

        info!(page_id, dest = %dest.display(), "exported page");
        Ok(())
    }

    /// Export every manifest entry, strictly sequentially in manifest
    /// order. The first failure aborts the remaining queue.
    pub fn export_manifest(&self, manifest: &Manifest) -> ApplicationResult<()> {
        for (page_id, page) in &manifest.pages {
            debug!(page_id, title = %page.title, "exporting");
            self.export_page(page_id, &page.title, &page.path)?;
        }
        Ok(())
    }
}
