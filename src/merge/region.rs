//! Locating `ItemGroup` blocks in an existing project manifest and splitting the
//! text around them into a frame.
//!
//! Blocks are found by token scanning, not by an XML parse: a block is the
//! shortest span from a `<ItemGroup` start tag to the next `</ItemGroup>`.
//! Nesting is not supported. Blocks whose top-level children are all
//! `ClCompile`/`ClInclude` items are *owned* and get regenerated; every other
//! block and all text between blocks is carried over untouched.

use super::frame::Frame;
use once_cell::sync::Lazy;
use regex::Regex;

pub const END_TOKEN: &str = "</ItemGroup>";
pub const ROOT_CLOSE_TOKEN: &str = "</Project>";
const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";
const OWNED_ITEMS: &[&str] = &["ClCompile", "ClInclude"];

static START_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<ItemGroup[\s/>]").expect("valid regex"));

static ELEMENT_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<(/?)([A-Za-z_][\w.:-]*)((?:[^>"']|"[^"]*"|'[^']*')*?)(/?)>"#)
        .expect("valid regex")
});

static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Holds only file items this tool generates.
    Owned,
    /// Anything else; round-tripped verbatim.
    Foreign,
}

/// One `ItemGroup` span. `start..end` covers the start token through the end token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralBlock {
    pub start: usize,
    pub end: usize,
    pub kind: BlockKind,
}

/// Scan `text` left to right for non-overlapping `ItemGroup` blocks.
///
/// Start tokens inside XML comments are ignored. A start token with no end
/// token after it stops the scan; the remainder is plain text.
pub fn find_blocks(text: &str) -> Vec<StructuralBlock> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(found) = START_TOKEN.find_at(text, cursor) {
        let start = found.start();

        if let Some(comment) = text[cursor..start].find(COMMENT_OPEN).map(|i| cursor + i) {
            match text[comment..].find(COMMENT_CLOSE) {
                Some(close) => {
                    cursor = comment + close + COMMENT_CLOSE.len();
                    continue;
                }
                None => break,
            }
        }

        let Some(tag_close) = text[start..].find('>') else {
            break;
        };
        let tag_end = start + tag_close + 1;

        // `<ItemGroup />` is a complete, empty group.
        if text[start..tag_end].ends_with("/>") {
            blocks.push(StructuralBlock { start, end: tag_end, kind: BlockKind::Foreign });
            cursor = tag_end;
            continue;
        }

        let Some(body_len) = text[tag_end..].find(END_TOKEN) else {
            tracing::debug!("Unterminated ItemGroup at byte {}; treating rest as text", start);
            break;
        };
        let body_end = tag_end + body_len;
        let end = body_end + END_TOKEN.len();
        let kind = if is_owned_body(&text[tag_end..body_end]) {
            BlockKind::Owned
        } else {
            BlockKind::Foreign
        };

        blocks.push(StructuralBlock { start, end, kind });
        cursor = end;
    }

    blocks
}

/// True when every top-level element of an `ItemGroup` body is a file item
/// this tool owns, and there is at least one.
fn is_owned_body(body: &str) -> bool {
    let body = COMMENT.replace_all(body, "");
    let mut depth = 0usize;
    let mut top_level = 0usize;

    for caps in ELEMENT_TAG.captures_iter(&body) {
        let closing = !caps[1].is_empty();
        let self_closing = !caps[4].is_empty();
        if closing {
            depth = depth.saturating_sub(1);
            continue;
        }
        if depth == 0 {
            if !OWNED_ITEMS.contains(&&caps[2]) {
                return false;
            }
            top_level += 1;
        }
        if !self_closing {
            depth += 1;
        }
    }

    top_level > 0
}

/// Split an existing manifest into the frame new blocks are inserted into.
///
/// - Header: text before the first owned block (or the first block when none
///   is owned), so foreign groups ahead of the file lists stay in place.
/// - Footer: from there on, foreign blocks and the text after them verbatim;
///   text after an owned block minus its leading whitespace.
/// - No blocks at all: split before the last `</Project>`, or use the whole
///   text as header and a bare `</Project>` footer when that is missing too.
pub fn extract_frame(text: &str) -> Frame {
    let blocks = find_blocks(text);

    let anchor = blocks
        .iter()
        .position(|b| b.kind == BlockKind::Owned)
        .or_else(|| (!blocks.is_empty()).then_some(0));

    let Some(anchor) = anchor else {
        return frame_without_blocks(text);
    };

    let header = &text[..blocks[anchor].start];
    let mut footer = String::new();
    let tail = &blocks[anchor..];

    for (idx, block) in tail.iter().enumerate() {
        let gap_end = tail.get(idx + 1).map_or(text.len(), |next| next.start);
        let gap = &text[block.end..gap_end];
        match block.kind {
            BlockKind::Foreign => {
                footer.push_str(&text[block.start..block.end]);
                footer.push_str(gap);
            }
            BlockKind::Owned => footer.push_str(gap.trim_start()),
        }
    }

    let owned = tail.iter().filter(|b| b.kind == BlockKind::Owned).count();
    tracing::debug!(
        "Found {} ItemGroup blocks ({} owned); header {} bytes, footer {} bytes",
        blocks.len(),
        owned,
        header.len(),
        footer.len()
    );

    Frame::new(header, footer)
}

fn frame_without_blocks(text: &str) -> Frame {
    match text.rfind(ROOT_CLOSE_TOKEN) {
        Some(pos) => Frame::new(&text[..pos], &text[pos..]),
        None => {
            tracing::debug!("No {} in existing manifest; appending one", ROOT_CLOSE_TOKEN);
            let newline = if text.contains("\r\n") { "\r\n" } else { "\n" };
            Frame::new(text, format!("{}{}", ROOT_CLOSE_TOKEN, newline))
        }
    }
}
