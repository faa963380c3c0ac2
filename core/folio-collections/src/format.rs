//! Entry file formats and their extension mapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A serialization format an entry file can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    Yml,
    Yaml,
    Toml,
    Json,
    /// Frontmatter with the flavour detected from the delimiter.
    Frontmatter,
    YamlFrontmatter,
    TomlFrontmatter,
    JsonFrontmatter,
}

/// Every format a collection may declare, in display order.
pub const SUPPORTED_FORMATS: [Format; 8] = [
    Format::Yml,
    Format::Yaml,
    Format::Toml,
    Format::Json,
    Format::Frontmatter,
    Format::JsonFrontmatter,
    Format::TomlFrontmatter,
    Format::YamlFrontmatter,
];

/// Formats that accept a custom `frontmatter_delimiter`.
pub const FRONTMATTER_FORMATS: [Format; 3] = [
    Format::YamlFrontmatter,
    Format::TomlFrontmatter,
    Format::JsonFrontmatter,
];

const EXTENSION_FORMATS: [(&str, Format); 7] = [
    ("yml", Format::Yaml),
    ("yaml", Format::Yaml),
    ("toml", Format::Toml),
    ("json", Format::Json),
    ("md", Format::Frontmatter),
    ("markdown", Format::Frontmatter),
    ("html", Format::Frontmatter),
];

impl Format {
    /// The name used in configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yml => "yml",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
            Self::Json => "json",
            Self::Frontmatter => "frontmatter",
            Self::YamlFrontmatter => "yaml-frontmatter",
            Self::TomlFrontmatter => "toml-frontmatter",
            Self::JsonFrontmatter => "json-frontmatter",
        }
    }

    /// File extension used for new entries in this format.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Yml | Self::Yaml => "yml",
            Self::Toml => "toml",
            Self::Json => "json",
            Self::Frontmatter
            | Self::YamlFrontmatter
            | Self::TomlFrontmatter
            | Self::JsonFrontmatter => "md",
        }
    }

    /// Infers a format from a file extension (without the leading dot).
    pub fn from_extension(extension: &str) -> Option<Self> {
        EXTENSION_FORMATS
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, format)| *format)
    }

    /// Whether a custom frontmatter delimiter may be used with this format.
    pub fn accepts_custom_delimiter(self) -> bool {
        FRONTMATTER_FORMATS.contains(&self)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SUPPORTED_FORMATS
            .iter()
            .copied()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Comma-separated list of supported format names, for error messages.
pub(crate) fn supported_list() -> String {
    SUPPORTED_FORMATS
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_list_is_comma_joined() {
        assert_eq!(
            supported_list(),
            "yml,yaml,toml,json,frontmatter,json-frontmatter,toml-frontmatter,yaml-frontmatter"
        );
    }

    #[test]
    fn from_str_matches_as_str() {
        for format in SUPPORTED_FORMATS {
            assert_eq!(format.as_str().parse::<Format>(), Ok(format));
        }
    }
}
