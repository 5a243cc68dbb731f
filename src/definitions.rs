//! Word definitions shown after a win
//!
//! Lookups are best effort. The session only asks for one (a
//! [`DefinitionRequest`] effect); the host fetches it whenever it likes and hands
//! the text back, and the session drops answers that belong to an older game.

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::Path;

/// A lookup the host should perform for the current game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionRequest {
    pub word: Word,
    /// Game generation the answer belongs to
    pub generation: u64,
}

/// Short definition text plus where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub text: String,
    pub source: String,
}

/// Anything that can look up a short definition
///
/// Failures of any kind are reported as `None`.
pub trait DefinitionSource {
    fn fetch(&self, word: &Word) -> Option<Definition>;
}

/// Source that never knows anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDefinitions;

impl DefinitionSource for NoDefinitions {
    fn fetch(&self, _word: &Word) -> Option<Definition> {
        None
    }
}

/// Definitions read from a tab-separated `WORD<TAB>text` file
#[derive(Debug, Clone, Default)]
pub struct DefinitionFile {
    label: String,
    entries: FxHashMap<Word, String>,
}

impl DefinitionFile {
    /// Load a definition file; malformed lines are skipped
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let label = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
        Ok(Self::parse(&content, label))
    }

    /// Parse definition lines
    #[must_use]
    pub fn parse(content: &str, label: impl Into<String>) -> Self {
        let entries = content
            .lines()
            .filter_map(|line| {
                let (word, text) = line.split_once('\t')?;
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                Word::new(word).ok().map(|word| (word, text.to_string()))
            })
            .collect();
        Self {
            label: label.into(),
            entries,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DefinitionSource for DefinitionFile {
    fn fetch(&self, word: &Word) -> Option<Definition> {
        self.entries.get(word).map(|text| Definition {
            text: text.clone(),
            source: self.label.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_skips_malformed_lines() {
        let defs = DefinitionFile::parse(
            "crane\tA large wading bird.\nno tab here\nxx\tbad word\nslate\t  \n",
            "test",
        );
        assert_eq!(defs.len(), 1);

        let found = defs.fetch(&Word::new("CRANE").unwrap()).unwrap();
        assert_eq!(found.text, "A large wading bird.");
        assert_eq!(found.source, "test");
        assert!(defs.fetch(&Word::new("slate").unwrap()).is_none());
    }

    #[test]
    fn load_uses_file_name_as_source() {
        let mut file = tempfile::Builder::new().suffix(".tsv").tempfile().unwrap();
        writeln!(file, "apple\tA round fruit.").unwrap();

        let defs = DefinitionFile::load(file.path()).unwrap();
        let found = defs.fetch(&Word::new("apple").unwrap()).unwrap();
        assert!(found.source.ends_with(".tsv"));
    }

    #[test]
    fn no_definitions_is_always_empty() {
        assert!(NoDefinitions.fetch(&Word::new("crane").unwrap()).is_none());
    }
}
