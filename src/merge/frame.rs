//! The header/footer pair generated blocks are spliced into.

use super::region::extract_frame;
use crate::render::escape_xml;
use crate::utils::read_manifest_text;
use std::path::PathBuf;

const MSBUILD_NAMESPACE: &str = "http://schemas.microsoft.com/developer/msbuild/2003";

/// Immutable text surrounding the generated `ItemGroup` blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    header: String,
    footer: String,
    indent: String,
    newline: &'static str,
}

impl Frame {
    /// Build a frame, picking up the line ending and the indentation the header
    /// leaves the first block at.
    pub fn new(header: impl Into<String>, footer: impl Into<String>) -> Self {
        let header = header.into();
        let footer = footer.into();
        let newline =
            if header.contains("\r\n") || footer.contains("\r\n") { "\r\n" } else { "\n" };
        let last_line = header.rsplit('\n').next().unwrap_or("");
        let indent = if last_line.chars().all(|c| c == ' ' || c == '\t') {
            last_line.to_string()
        } else {
            String::new()
        };
        Self { header, footer, indent, newline }
    }

    /// Fixed frame used for fresh generation.
    pub fn template(globals: &ProjectGlobals) -> Self {
        Self::new(template_header(globals), template_footer())
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }

    /// Indentation of the line the first block starts on.
    pub fn indent(&self) -> &str {
        &self.indent
    }

    pub fn newline(&self) -> &'static str {
        self.newline
    }

    /// Splice rendered blocks between header and footer.
    ///
    /// Each block is followed by a blank line and the frame indentation, so
    /// extracting a frame from the result gives back this frame. A footer that
    /// opens with a closing tag (normally `</Project>`) starts unindented.
    pub fn assemble(&self, blocks: &[String]) -> String {
        let separator = format!("{}{}{}", self.newline, self.newline, self.indent);
        let trailer = if self.footer.starts_with("</") {
            format!("{}{}", self.newline, self.newline)
        } else {
            separator.clone()
        };
        let mut out = String::with_capacity(
            self.header.len() + self.footer.len() + blocks.iter().map(String::len).sum::<usize>(),
        );
        out.push_str(&self.header);
        for (idx, block) in blocks.iter().enumerate() {
            if idx > 0 {
                out.push_str(&separator);
            }
            out.push_str(block);
        }
        if !blocks.is_empty() {
            out.push_str(&trailer);
        }
        out.push_str(&self.footer);
        out
    }
}

/// Values written into the template's `Globals` property group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectGlobals {
    pub name: String,
    pub guid: String,
}

impl ProjectGlobals {
    /// Without an explicit GUID the project name stands in for it.
    pub fn new(name: impl Into<String>, guid: Option<String>) -> Self {
        let name = name.into();
        let guid = guid.unwrap_or_else(|| name.clone());
        Self { name, guid }
    }
}

fn template_header(globals: &ProjectGlobals) -> String {
    format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
            "<Project DefaultTargets=\"Build\" ToolsVersion=\"4\" xmlns=\"{ns}\">\n",
            "\n",
            "<PropertyGroup Label=\"Globals\">\n",
            "\t<ProjectGuid>{guid}</ProjectGuid>\n",
            "\t<RootNamespace>{name}</RootNamespace>\n",
            "</PropertyGroup>\n",
            "\n",
        ),
        ns = MSBUILD_NAMESPACE,
        guid = escape_xml(&globals.guid),
        name = escape_xml(&globals.name),
    )
}

fn template_footer() -> String {
    "</Project>\n".to_string()
}

/// How the project manifest's frame is obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameSource {
    /// Fixed template.
    Fresh,
    /// Caller-supplied text replacing either template half.
    Custom { header: Option<String>, footer: Option<String> },
    /// Derived from an existing project manifest.
    Merge { existing: PathBuf },
}

/// Where the frame actually came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOrigin {
    Template,
    Custom,
    Merged { encoding: &'static str },
    /// Merge was requested but the existing manifest was unusable.
    MergeFallback { reason: String },
}

/// Resolve a [`FrameSource`] into a frame.
///
/// A merge source whose file cannot be read, or holds only whitespace (after
/// any byte order mark), falls back to the template. Text decoded from UTF-16
/// or a legacy code page is re-declared as UTF-8, the encoding it is written in. That is the normal path on a first run.
pub fn build_frame(source: &FrameSource, globals: &ProjectGlobals) -> (Frame, FrameOrigin) {
    match source {
        FrameSource::Fresh => (Frame::template(globals), FrameOrigin::Template),
        FrameSource::Custom { header, footer } => {
            let header = header.clone().unwrap_or_else(|| template_header(globals));
            let footer = footer.clone().unwrap_or_else(template_footer);
            (Frame::new(header, footer), FrameOrigin::Custom)
        }
        FrameSource::Merge { existing } => match read_manifest_text(existing) {
            Ok(decoded) if !is_blank(&decoded.text) => {
                let encoding = decoded.encoding;
                tracing::info!("Merging into existing manifest {} ({})", existing.display(), encoding);
                (extract_frame(&decoded.into_utf8_text()), FrameOrigin::Merged { encoding })
            }
            Ok(_) => {
                tracing::info!("Existing manifest {} is empty; using template", existing.display());
                let reason = "existing manifest is empty".to_string();
                (Frame::template(globals), FrameOrigin::MergeFallback { reason })
            }
            Err(err) => {
                tracing::info!(
                    "Cannot read existing manifest {} ({}); using template",
                    existing.display(),
                    err
                );
                (Frame::template(globals), FrameOrigin::MergeFallback { reason: err.to_string() })
            }
        },
    }
}

/// Only whitespace, possibly behind a byte order mark.
fn is_blank(text: &str) -> bool {
    text.trim_start_matches('\u{feff}').trim().is_empty()
}
