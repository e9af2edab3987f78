//! Filter manifest (`.vcxproj.filters`) rendering.
//!
//! The filter manifest is always regenerated whole inside a fixed wrapper.

use super::xml::escape_xml;
use crate::domain::{FileRole, RelPath};
use crate::merge::Frame;
use crate::plan::ProjectPlan;

const FILTERS_HEADER: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
    "<Project ToolsVersion=\"4.0\" xmlns=\"http://schemas.microsoft.com/developer/msbuild/2003\">\n",
    "\n",
);
const FILTERS_FOOTER: &str = "</Project>\n";

/// Render the filter manifest: filter declarations, include items, compile items.
pub fn render_filters(plan: &ProjectPlan) -> String {
    let mut blocks = Vec::new();
    if !plan.filters.is_empty() {
        blocks.push(filter_declarations(&plan.filters));
    }
    if !plan.include.is_empty() {
        blocks.push(annotated_items(FileRole::Include, &plan.include));
    }
    if !plan.compile.is_empty() {
        blocks.push(annotated_items(FileRole::Compile, &plan.compile));
    }
    Frame::new(FILTERS_HEADER, FILTERS_FOOTER).assemble(&blocks)
}

fn filter_declarations(filters: &[RelPath]) -> String {
    let mut out = String::from("<ItemGroup>\n");
    for filter in filters {
        out.push_str(&format!("\t<Filter Include=\"{}\">\n", escape_xml(filter.as_str())));
        out.push_str("\t</Filter>\n");
    }
    out.push_str("</ItemGroup>");
    out
}

/// Items carrying their parent directory as filter; files at the root get none.
fn annotated_items(role: FileRole, files: &[RelPath]) -> String {
    let tag = role.item_tag();
    let mut out = String::from("<ItemGroup>\n");
    for file in files {
        let include = escape_xml(file.as_str());
        match file.parent() {
            Some(parent) => {
                out.push_str(&format!("\t<{} Include=\"{}\">\n", tag, include));
                out.push_str(&format!("\t\t<Filter>{}</Filter>\n", escape_xml(parent.as_str())));
                out.push_str(&format!("\t</{}>\n", tag));
            }
            None => out.push_str(&format!("\t<{} Include=\"{}\" />\n", tag, include)),
        }
    }
    out.push_str("</ItemGroup>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClassifiedFiles;

    fn plan_for(compile: &[&str], include: &[&str]) -> ProjectPlan {
        let mut files = ClassifiedFiles::default();
        for path in compile {
            files.compile.insert(RelPath::parse(path).expect("path"));
        }
        for path in include {
            files.include.insert(RelPath::parse(path).expect("path"));
        }
        ProjectPlan::from_classified(&files)
    }

    #[test]
    fn test_full_filter_manifest() {
        let text = render_filters(&plan_for(&["src/a.cpp"], &["src/include/b.h"]));
        let expected = concat!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
            "<Project ToolsVersion=\"4.0\" xmlns=\"http://schemas.microsoft.com/developer/msbuild/2003\">\n",
            "\n",
            "<ItemGroup>\n",
            "\t<Filter Include=\"src\">\n",
            "\t</Filter>\n",
            "\t<Filter Include=\"src\\include\">\n",
            "\t</Filter>\n",
            "</ItemGroup>\n",
            "\n",
            "<ItemGroup>\n",
            "\t<ClInclude Include=\"src\\include\\b.h\">\n",
            "\t\t<Filter>src\\include</Filter>\n",
            "\t</ClInclude>\n",
            "</ItemGroup>\n",
            "\n",
            "<ItemGroup>\n",
            "\t<ClCompile Include=\"src\\a.cpp\">\n",
            "\t\t<Filter>src</Filter>\n",
            "\t</ClCompile>\n",
            "</ItemGroup>\n",
            "\n",
            "</Project>\n",
        );
        similar_asserts::assert_eq!(text, expected);
    }

    #[test]
    fn test_root_files_have_no_filter_child() {
        let text = render_filters(&plan_for(&["main.cpp"], &[]));
        assert!(text.contains("\t<ClCompile Include=\"main.cpp\" />\n"));
        assert!(!text.contains("<Filter"));
    }

    #[test]
    fn test_empty_plan_is_bare_wrapper() {
        let text = render_filters(&ProjectPlan::default());
        assert_eq!(text, format!("{}{}", FILTERS_HEADER, FILTERS_FOOTER));
    }
}
