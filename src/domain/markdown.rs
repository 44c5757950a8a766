//! Block-tree-to-Markdown translation
//!
//! Two pure functions: `render_rich_text` turns a sequence of styled runs
//! into inline Markdown, `render_block` turns one block into its Markdown
//! form at a given indentation level. Both are deterministic: identical
//! input always yields byte-identical output.

use crate::domain::entities::{Block, BlockKind, RichText};

/// Indentation prefix per nesting level.
const INDENT: &str = "  ";

/// Render a sequence of rich text runs as inline Markdown.
///
/// Runs concatenate with no separator; an empty slice yields an empty
/// string. Style wraps apply in a fixed order regardless of which flags are
/// set — code, bold, italic, strikethrough, then the link wrap — so any
/// flag combination renders deterministically.
pub fn render_rich_text(runs: &[RichText]) -> String {
    let mut out = String::new();
    for run in runs {
        out.push_str(&render_run(run));
    }
    out
}

fn render_run(run: &RichText) -> String {
    let mut text = run.plain_text.clone();
    if run.annotations.code {
        text = format!("`{text}`");
    }
    if run.annotations.bold {
        text = format!("**{text}**");
    }
    if run.annotations.italic {
        text = format!("*{text}*");
    }
    if run.annotations.strikethrough {
        text = format!("~~{text}~~");
    }
    if let Some(href) = &run.href {
        text = format!("[{text}]({href})");
    }
    text
}

/// Render one block as Markdown at the given indentation level.
///
/// Headings ignore indentation. A paragraph whose text trims to empty
/// collapses to a single newline (keeps blank-line spacing without
/// indentation noise); an unknown-type block whose text trims to empty
/// collapses to nothing. Code block content goes through the same inline
/// path as every other block.
pub fn render_block(block: &Block, indent: usize) -> String {
    let prefix = INDENT.repeat(indent);
    match &block.kind {
        BlockKind::Heading { level, text } => {
            format!(
                "{} {}\n",
                "#".repeat(*level as usize),
                render_rich_text(text)
            )
        }
        BlockKind::Paragraph { text } => {
            let text = render_rich_text(text);
            if text.trim().is_empty() {
                "\n".to_string()
            } else {
                format!("{prefix}{text}\n\n")
            }
        }
        BlockKind::BulletedItem { text } => {
            format!("{prefix}- {}\n", render_rich_text(text))
        }
        BlockKind::NumberedItem { text } => {
            // literal "1." for every item; Markdown renumbers sequential items
            format!("{prefix}1. {}\n", render_rich_text(text))
        }
        BlockKind::ToDo { text, checked } => {
            let box_mark = if *checked { 'x' } else { ' ' };
            format!("{prefix}- [{box_mark}] {}\n", render_rich_text(text))
        }
        BlockKind::Quote { text } => {
            format!("> {}\n\n", render_rich_text(text))
        }
        BlockKind::Code { text, language } => {
            format!("```{language}\n{}\n```\n\n", render_rich_text(text))
        }
        BlockKind::ChildPage { title } => {
            format!("- {title}\n")
        }
        BlockKind::Other { text } => match text {
            Some(runs) => {
                let text = render_rich_text(runs);
                if text.trim().is_empty() {
                    String::new()
                } else {
                    format!("{prefix}{text}\n\n")
                }
            }
            None => String::new(),
        },
    }
}
