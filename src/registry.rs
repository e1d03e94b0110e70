use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::Path;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transform::is_shortname_byte;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Registry::new: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Registry::from_file: failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Registry::new: duplicate shortname or alias {0:?}")]
    Duplicate(String),
    #[error("Registry::new: invalid shortname {0:?}")]
    InvalidShortname(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emoji {
    pub shortname: String,
    pub glyph: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBlock {
    pub name: String,
    #[serde(rename = "emoji", default)]
    pub emoji: Vec<Emoji>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryMetadata {
    pub name: String,
    pub description: Option<String>,
}

/// Registry files are TOML
/// The registry block carries the set's name and an optional description
/// Each [[category]] block holds a name and its [[category.emoji]] entries
/// Each emoji entry maps a shortname to a glyph, with optional aliases
/// and keywords
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryFile {
    pub registry: RegistryMetadata,
    #[serde(rename = "category", default)]
    pub categories: Vec<CategoryBlock>,
}

const BUILTIN: &str = include_str!("../res/emoji.toml");

lazy_static! {
    static ref BUILTIN_REGISTRY: Registry =
        Registry::new(BUILTIN).expect("builtin emoji registry is malformed");
}

fn is_valid_shortname(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_shortname_byte)
}

/// Validated emoji set with shortname, alias and glyph indexes.
#[derive(Debug)]
pub struct Registry {
    file: RegistryFile,
    by_shortname: HashMap<String, (usize, usize)>,
    by_glyph: HashMap<String, (usize, usize)>,
    glyphs_by_len: Vec<String>,
}

impl Registry {
    pub fn new(data: impl AsRef<str>) -> Result<Self, RegistryError> {
        let file: RegistryFile = toml::from_str(data.as_ref())?;
        Self::from_parts(file)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let data = read_to_string(path)?;
        Self::new(data)
    }

    /// Process-wide registry parsed once from the embedded set. Every call
    /// returns the same instance.
    pub fn builtin() -> &'static Registry {
        &BUILTIN_REGISTRY
    }

    fn from_parts(file: RegistryFile) -> Result<Self, RegistryError> {
        let mut by_shortname = HashMap::new();
        let mut by_glyph: HashMap<String, (usize, usize)> = HashMap::new();

        for (ci, category) in file.categories.iter().enumerate() {
            for (ei, emoji) in category.emoji.iter().enumerate() {
                if !is_valid_shortname(&emoji.shortname) {
                    return Err(RegistryError::InvalidShortname(emoji.shortname.clone()));
                }
                if by_shortname
                    .insert(emoji.shortname.clone(), (ci, ei))
                    .is_some()
                {
                    return Err(RegistryError::Duplicate(emoji.shortname.clone()));
                }

                for alias in &emoji.aliases {
                    if !is_valid_shortname(alias) {
                        return Err(RegistryError::InvalidShortname(alias.clone()));
                    }
                    if by_shortname.insert(alias.clone(), (ci, ei)).is_some() {
                        return Err(RegistryError::Duplicate(alias.clone()));
                    }
                }

                by_glyph.entry(emoji.glyph.clone()).or_insert((ci, ei));
            }
        }

        let mut glyphs_by_len: Vec<String> = by_glyph.keys().cloned().collect();
        glyphs_by_len.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

        Ok(Self {
            file,
            by_shortname,
            by_glyph,
            glyphs_by_len,
        })
    }

    pub fn name(&self) -> &str {
        &self.file.registry.name
    }

    pub fn description(&self) -> Option<&str> {
        self.file.registry.description.as_deref()
    }

    pub fn categories(&self) -> &[CategoryBlock] {
        &self.file.categories
    }

    pub fn len(&self) -> usize {
        self.file.categories.iter().map(|c| c.emoji.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve a shortname or one of its aliases.
    pub fn lookup(&self, shortname: &str) -> Option<&Emoji> {
        let &(ci, ei) = self.by_shortname.get(shortname)?;
        Some(&self.file.categories[ci].emoji[ei])
    }

    /// Resolve a glyph back to its emoji entry.
    pub fn lookup_glyph(&self, glyph: &str) -> Option<&Emoji> {
        let &(ci, ei) = self.by_glyph.get(glyph)?;
        Some(&self.file.categories[ci].emoji[ei])
    }

    /// Remove every known glyph from the text. Longer glyphs go first so
    /// joined sequences are removed as a whole, not piecewise.
    pub(crate) fn strip_glyphs(&self, text: &str) -> String {
        let mut out = text.to_owned();
        for glyph in &self.glyphs_by_len {
            if out.contains(glyph.as_str()) {
                out = out.replace(glyph.as_str(), "");
            }
        }
        out
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn registry_empty_string() {
        assert!(Registry::new("").is_err());
    }

    #[test]
    fn registry_no_categories() {
        let document = r#"
            [registry]
            name = "test"
        "#;

        let result = Registry::new(document).unwrap();

        assert_eq!("test", result.name());
        assert_eq!(None, result.description());
        assert!(result.is_empty());
    }

    #[test]
    fn registry_description() {
        let document = r#"
            [registry]
            name = "test"
            description = "testing"
        "#;

        let result = Registry::new(document).unwrap();

        assert_eq!(Some("testing"), result.description());
    }

    #[test]
    fn registry_lookup_and_alias() {
        let document = r#"
            [registry]
            name = "test"

            [[category]]
            name = "people"

            [[category.emoji]]
            shortname = "smile"
            glyph = "😄"
            aliases = ["smiley"]
            keywords = ["happy"]
        "#;

        let result = Registry::new(document).unwrap();

        assert_eq!(1, result.len());
        assert_eq!(1, result.categories().len());
        assert_eq!("people", result.categories()[0].name);
        assert_eq!("😄", result.lookup("smile").unwrap().glyph);
        assert_eq!("smile", result.lookup("smiley").unwrap().shortname);
        assert_eq!("smile", result.lookup_glyph("😄").unwrap().shortname);
        assert_eq!(None, result.lookup("frown"));
    }

    #[test]
    fn registry_duplicate_shortname() {
        let document = r#"
            [registry]
            name = "test"

            [[category]]
            name = "a"

            [[category.emoji]]
            shortname = "smile"
            glyph = "😄"

            [[category]]
            name = "b"

            [[category.emoji]]
            shortname = "smile"
            glyph = "😁"
        "#;

        assert!(matches!(
            Registry::new(document),
            Err(RegistryError::Duplicate(name)) if name == "smile"
        ));
    }

    #[test]
    fn registry_alias_collides_with_shortname() {
        let document = r#"
            [registry]
            name = "test"

            [[category]]
            name = "a"

            [[category.emoji]]
            shortname = "smile"
            glyph = "😄"

            [[category.emoji]]
            shortname = "grin"
            glyph = "😁"
            aliases = ["smile"]
        "#;

        assert!(matches!(
            Registry::new(document),
            Err(RegistryError::Duplicate(name)) if name == "smile"
        ));
    }

    #[test]
    fn registry_invalid_shortname() {
        let document = r#"
            [registry]
            name = "test"

            [[category]]
            name = "a"

            [[category.emoji]]
            shortname = "Not Valid"
            glyph = "😄"
        "#;

        assert!(matches!(
            Registry::new(document),
            Err(RegistryError::InvalidShortname(name)) if name == "Not Valid"
        ));
    }

    #[test]
    fn builtin_is_shared_and_populated() {
        let first = Registry::builtin();
        let second = Registry::builtin();

        assert!(std::ptr::eq(first, second));
        assert!(!first.is_empty());
        assert_eq!("builtin", first.name());
        assert_eq!("👍", first.lookup("thumbsup").unwrap().glyph);
        assert_eq!("thumbsup", first.lookup("+1").unwrap().shortname);
    }
}
