//! Frontmatter composition for synced documents

use crate::constants::SIDEBAR_POSITION;
use crate::package::{PackageKind, PackageName};
use regex::Regex;
use std::sync::OnceLock;

fn heading_regex() -> &'static Regex {
    static HEADING: OnceLock<Regex> = OnceLock::new();
    HEADING.get_or_init(|| Regex::new(r"(?m)^#[ \t]+(.+)$").expect("heading pattern is valid"))
}

/// Title from the first level-one heading (`# Title`), if any.
///
/// The space after `#` must be on the heading line itself, and trailing
/// whitespace (including a CR from CRLF files) is trimmed from the title.
/// Headings that are blank after trimming are skipped.
pub fn extract_title(content: &str) -> Option<String> {
    heading_regex()
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end())
        .find(|title| !title.is_empty())
        .map(str::to_string)
}

/// Title derived from a package name: `my-cool_lib` -> `My Cool Lib`
pub fn title_from_name(name: &str) -> String {
    name.split(['-', '_'])
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape a value for a double-quoted YAML scalar
pub fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Metadata block prepended to every synced README
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    pub sidebar_position: u32,
    pub title: String,
    pub description: String,
}

impl Frontmatter {
    /// Frontmatter for a package's README content
    pub fn for_package(content: &str, name: &PackageName, kind: PackageKind) -> Self {
        let display_name = name.display_name();
        let title = extract_title(content).unwrap_or_else(|| title_from_name(&display_name));
        Self {
            sidebar_position: SIDEBAR_POSITION,
            title,
            description: format!("Documentation for {} {} package", display_name, kind),
        }
    }

    /// Render as a `---` delimited block followed by a blank line
    pub fn render(&self) -> String {
        let mut yaml = String::from("---\n");
        yaml.push_str(&format!("sidebar_position: {}\n", self.sidebar_position));
        yaml.push_str(&format!("title: \"{}\"\n", escape_quoted(&self.title)));
        yaml.push_str(&format!("description: \"{}\"\n", escape_quoted(&self.description)));
        yaml.push_str("---\n\n");
        yaml
    }
}

/// README content with frontmatter prepended; the body is kept verbatim
pub fn compose_document(content: &str, name: &PackageName, kind: PackageKind) -> String {
    Frontmatter::for_package(content, name, kind).render() + content
}
