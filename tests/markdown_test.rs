//! Tests for the block-to-Markdown renderer

use rstest::rstest;

use notemd::domain::entities::{Annotations, Block, BlockKind, RichText};
use notemd::domain::markdown::{render_block, render_rich_text};

fn run(text: &str) -> RichText {
    RichText {
        plain_text: text.to_string(),
        ..Default::default()
    }
}

fn block(kind: BlockKind) -> Block {
    Block {
        id: "b1".to_string(),
        has_children: false,
        kind,
    }
}

// ============================================================
// Inline-run rendering
// ============================================================

#[test]
fn given_run_without_annotations_or_href_then_rendering_is_identity() {
    assert_eq!(render_rich_text(&[run("plain text")]), "plain text");
}

#[test]
fn given_empty_run_sequence_then_rendering_is_empty() {
    assert_eq!(render_rich_text(&[]), "");
}

#[rstest]
#[case(Annotations { code: true, ..Default::default() }, "`hi`")]
#[case(Annotations { bold: true, ..Default::default() }, "**hi**")]
#[case(Annotations { italic: true, ..Default::default() }, "*hi*")]
#[case(Annotations { strikethrough: true, ..Default::default() }, "~~hi~~")]
fn given_single_annotation_then_wraps_with_its_marker(
    #[case] annotations: Annotations,
    #[case] expected: &str,
) {
    let styled = RichText {
        plain_text: "hi".to_string(),
        annotations,
        href: None,
    };
    assert_eq!(render_rich_text(&[styled]), expected);
}

#[test]
fn given_all_annotations_and_href_then_nesting_follows_fixed_order() {
    // code -> bold -> italic -> strikethrough -> link, derived mechanically:
    // `hi` -> **`hi`** -> ***`hi`*** -> ~~***`hi`***~~ -> [..](http://x)
    let styled = RichText {
        plain_text: "hi".to_string(),
        annotations: Annotations {
            bold: true,
            italic: true,
            strikethrough: true,
            code: true,
        },
        href: Some("http://x".to_string()),
    };
    assert_eq!(render_rich_text(&[styled]), "[~~***`hi`***~~](http://x)");
}

#[test]
fn given_href_without_annotations_then_wraps_plain_text_in_link() {
    let linked = RichText {
        plain_text: "docs".to_string(),
        annotations: Annotations::default(),
        href: Some("https://example.com".to_string()),
    };
    assert_eq!(render_rich_text(&[linked]), "[docs](https://example.com)");
}

#[test]
fn given_multiple_runs_then_concatenates_without_separator() {
    let bold = RichText {
        plain_text: "b".to_string(),
        annotations: Annotations {
            bold: true,
            ..Default::default()
        },
        href: None,
    };
    assert_eq!(render_rich_text(&[run("a"), bold, run("c")]), "a**b**c");
}

// ============================================================
// Block rendering
// ============================================================

#[rstest]
#[case(1, "# Title\n")]
#[case(2, "## Title\n")]
#[case(3, "### Title\n")]
fn given_heading_then_renders_level_hashes(#[case] level: u8, #[case] expected: &str) {
    let b = block(BlockKind::Heading {
        level,
        text: vec![run("Title")],
    });
    assert_eq!(render_block(&b, 0), expected);
}

#[test]
fn given_heading_at_nonzero_indent_then_indentation_is_ignored() {
    let b = block(BlockKind::Heading {
        level: 2,
        text: vec![run("Title")],
    });
    assert_eq!(render_block(&b, 3), "## Title\n");
}

#[test]
fn given_paragraph_with_text_then_renders_with_two_trailing_newlines() {
    let b = block(BlockKind::Paragraph {
        text: vec![run("hello")],
    });
    assert_eq!(render_block(&b, 0), "hello\n\n");
    assert_eq!(render_block(&b, 1), "  hello\n\n");
}

#[test]
fn given_whitespace_only_paragraph_then_renders_exactly_one_newline() {
    let b = block(BlockKind::Paragraph {
        text: vec![run("   \t ")],
    });
    // no indentation prefix, even at nonzero indent
    assert_eq!(render_block(&b, 0), "\n");
    assert_eq!(render_block(&b, 2), "\n");
}

#[test]
fn given_list_items_then_renders_markers_with_indentation() {
    let bullet = block(BlockKind::BulletedItem {
        text: vec![run("item")],
    });
    assert_eq!(render_block(&bullet, 0), "- item\n");
    assert_eq!(render_block(&bullet, 1), "  - item\n");

    // marker is always literally "1."; Markdown renumbers on its own
    let numbered = block(BlockKind::NumberedItem {
        text: vec![run("item")],
    });
    assert_eq!(render_block(&numbered, 0), "1. item\n");
    assert_eq!(render_block(&numbered, 1), "  1. item\n");
}

#[rstest]
#[case(false, "- [ ] task\n")]
#[case(true, "- [x] task\n")]
fn given_to_do_then_renders_checkbox_state(#[case] checked: bool, #[case] expected: &str) {
    let b = block(BlockKind::ToDo {
        text: vec![run("task")],
        checked,
    });
    assert_eq!(render_block(&b, 0), expected);
}

#[test]
fn given_quote_then_renders_marker_and_blank_line_without_indentation() {
    let b = block(BlockKind::Quote {
        text: vec![run("wisdom")],
    });
    assert_eq!(render_block(&b, 0), "> wisdom\n\n");
    assert_eq!(render_block(&b, 1), "> wisdom\n\n");
}

#[test]
fn given_code_block_then_renders_fence_tagged_with_language() {
    let b = block(BlockKind::Code {
        text: vec![run("let x = 1;")],
        language: "rust".to_string(),
    });
    assert_eq!(render_block(&b, 0), "```rust\nlet x = 1;\n```\n\n");
}

#[test]
fn given_code_block_with_empty_language_then_fence_is_untagged() {
    let b = block(BlockKind::Code {
        text: vec![run("x")],
        language: String::new(),
    });
    assert_eq!(render_block(&b, 0), "```\nx\n```\n\n");
}

#[test]
fn given_code_block_with_styled_runs_then_content_goes_through_inline_path() {
    // code content is rendered through the same inline-run path as other
    // blocks, so annotations still wrap
    let bold = RichText {
        plain_text: "x".to_string(),
        annotations: Annotations {
            bold: true,
            ..Default::default()
        },
        href: None,
    };
    let b = block(BlockKind::Code {
        text: vec![bold],
        language: "sh".to_string(),
    });
    assert_eq!(render_block(&b, 0), "```sh\n**x**\n```\n\n");
}

#[test]
fn given_child_page_then_renders_plain_title_without_inline_rendering() {
    let b = block(BlockKind::ChildPage {
        title: "Sub **page**".to_string(),
    });
    // title is plain text; markers inside it pass through untouched
    assert_eq!(render_block(&b, 0), "- Sub **page**\n");
}

#[test]
fn given_unknown_block_with_text_then_renders_like_paragraph() {
    let b = block(BlockKind::Other {
        text: Some(vec![run("callout text")]),
    });
    assert_eq!(render_block(&b, 0), "callout text\n\n");
    assert_eq!(render_block(&b, 1), "  callout text\n\n");
}

#[test]
fn given_unknown_block_with_whitespace_text_then_renders_nothing() {
    // unlike a paragraph, an empty fallback produces no newline
    let b = block(BlockKind::Other {
        text: Some(vec![run("   ")]),
    });
    assert_eq!(render_block(&b, 0), "");
}

#[test]
fn given_unknown_block_without_text_then_renders_nothing() {
    let b = block(BlockKind::Other { text: None });
    assert_eq!(render_block(&b, 0), "");
}
