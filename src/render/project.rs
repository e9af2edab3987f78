//! Project manifest (`.vcxproj`) rendering.

use super::xml::escape_xml;
use crate::domain::{FileRole, RelPath};
use crate::merge::Frame;
use crate::plan::ProjectPlan;

/// Render the project manifest: include block, then compile block, inside `frame`.
/// Empty blocks are left out.
pub fn render_project(plan: &ProjectPlan, frame: &Frame) -> String {
    let mut blocks = Vec::new();
    if !plan.include.is_empty() {
        blocks.push(item_block(FileRole::Include, &plan.include, frame));
    }
    if !plan.compile.is_empty() {
        blocks.push(item_block(FileRole::Compile, &plan.compile, frame));
    }
    frame.assemble(&blocks)
}

/// One `ItemGroup` listing `files` under `role`, indented to match the frame.
fn item_block(role: FileRole, files: &[RelPath], frame: &Frame) -> String {
    let indent = frame.indent();
    let newline = frame.newline();
    let item_indent = if indent.is_empty() { "\t".to_string() } else { indent.repeat(2) };

    let mut out = String::from("<ItemGroup>");
    for file in files {
        out.push_str(newline);
        out.push_str(&item_indent);
        out.push_str(&format!("<{} Include=\"{}\" />", role.item_tag(), escape_xml(file.as_str())));
    }
    out.push_str(newline);
    out.push_str(indent);
    out.push_str("</ItemGroup>");
    out
}
