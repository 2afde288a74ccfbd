//! Exclusion list: identifier prefixes read from a plain text file,
//! one prefix per line.
use super::FilterError;
use std::borrow::Cow;
use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;

/// How identifiers are compared with prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    CaseSensitive,
    AsciiCaseInsensitive,
}

impl Default for CaseMode {
    fn default() -> Self {
        CaseMode::CaseSensitive
    }
}

impl std::fmt::Display for CaseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CaseMode::CaseSensitive => write!(f, "case-sensitive"),
            CaseMode::AsciiCaseInsensitive => write!(f, "ascii-case-insensitive"),
        }
    }
}

impl CaseMode {
    fn fold<'a>(&self, xs: &'a [u8]) -> Cow<'a, [u8]> {
        match self {
            CaseMode::CaseSensitive => Cow::Borrowed(xs),
            CaseMode::AsciiCaseInsensitive => Cow::Owned(xs.to_ascii_lowercase()),
        }
    }
}

/// Ordered, immutable list of non-empty prefixes.
/// An identifier is excluded when one of the prefixes is a prefix of it,
/// including the case where the two are equal.
#[derive(Debug, Clone, Default)]
pub struct ExclusionList {
    prefixes: Vec<String>,
    mode: CaseMode,
    // (length in bytes, folded prefixes of that length), sorted by length.
    index: Vec<(usize, HashSet<Vec<u8>>)>,
}

impl ExclusionList {
    /// Trim each line and drop the blank ones.
    pub fn new<I, S>(lines: I, mode: CaseMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let prefixes: Vec<String> = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        let index = Self::build_index(&prefixes, mode);
        Self {
            prefixes,
            mode,
            index,
        }
    }
    /// Load a list from a file. An empty file gives an empty list,
    /// which excludes nothing. A missing or unreadable file is an error.
    pub fn from_file<P: AsRef<Path>>(file: P, mode: CaseMode) -> Result<Self, FilterError> {
        let file = file.as_ref();
        let lines =
            std::fs::read_to_string(file).map_err(|why| FilterError::not_found(file, why))?;
        Ok(Self::new(lines.lines(), mode))
    }
    fn build_index(prefixes: &[String], mode: CaseMode) -> Vec<(usize, HashSet<Vec<u8>>)> {
        let by_length: HashMap<usize, HashSet<Vec<u8>>> =
            prefixes
                .iter()
                .fold(HashMap::new(), |mut map, prefix| {
                    let prefix = mode.fold(prefix.as_bytes()).into_owned();
                    map.entry(prefix.len()).or_default().insert(prefix);
                    map
                });
        let mut index: Vec<_> = by_length.into_iter().collect();
        index.sort_by_key(|&(len, _)| len);
        index
    }
    /// Whether some prefix matches `id`.
    pub fn is_excluded(&self, id: &str) -> bool {
        let id = self.mode.fold(id.as_bytes());
        self.index
            .iter()
            .take_while(|&&(len, _)| len <= id.len())
            .any(|(len, prefixes)| prefixes.contains(&id[..*len]))
    }
    /// The first prefix, in list order, matching `id`.
    /// This is a linear scan; use `is_excluded` for classification.
    pub fn first_match(&self, id: &str) -> Option<&str> {
        let id = self.mode.fold(id.as_bytes());
        self.prefixes
            .iter()
            .find(|prefix| id.starts_with(&self.mode.fold(prefix.as_bytes())))
            .map(|prefix| prefix.as_str())
    }
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
    pub fn mode(&self) -> CaseMode {
        self.mode
    }
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}
