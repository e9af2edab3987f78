//! Text tree of the filter hierarchy, as an IDE would show it.

use crate::domain::SEPARATOR;
use crate::plan::ProjectPlan;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Default)]
struct FilterNode {
    children: BTreeMap<String, FilterNode>,
    files: BTreeSet<String>,
}

impl FilterNode {
    fn descend(&mut self, path: &str) -> &mut FilterNode {
        path.split(SEPARATOR)
            .fold(self, |node, part| node.children.entry(part.to_string()).or_default())
    }
}

/// Render `plan` as an indented tree rooted at `project_name`.
///
/// Filters come first at each level, then files when `include_files` is set.
pub fn render_filter_tree(project_name: &str, plan: &ProjectPlan, include_files: bool) -> String {
    let mut root = FilterNode::default();
    for filter in &plan.filters {
        root.descend(filter.as_str());
    }
    if include_files {
        for file in plan.include.iter().chain(plan.compile.iter()) {
            let node = match file.parent() {
                Some(parent) => root.descend(parent.as_str()),
                None => &mut root,
            };
            node.files.insert(file.file_name().to_string());
        }
    }

    let mut lines = vec![format!("{}/", project_name)];
    walk(&root, "", &mut lines);
    lines.join("\n")
}

fn walk(node: &FilterNode, prefix: &str, lines: &mut Vec<String>) {
    let total = node.children.len() + node.files.len();
    let entries = node
        .children
        .iter()
        .map(|(name, child)| (name, Some(child)))
        .chain(node.files.iter().map(|name| (name, None)));

    for (idx, (name, child)) in entries.enumerate() {
        let is_last = idx + 1 == total;
        let connector = if is_last { "└── " } else { "├── " };
        match child {
            Some(child) => {
                lines.push(format!("{}{}{}/", prefix, connector, name));
                let extension = if is_last { "    " } else { "│   " };
                walk(child, &format!("{}{}", prefix, extension), lines);
            }
            None => lines.push(format!("{}{}{}", prefix, connector, name)),
        }
    }
}
