//! Page scanning
//!
//! Extracts candidate offer codes from scraped page text. A code is 7-8
//! characters of `[A-Z0-9]` immediately preceded by the marker (default `#`)
//! and ending at a word boundary. Shorter runs, longer runs, lowercase runs
//! and unmarked runs are left alone, so free text around the listings does
//! not leak into the result.

use crate::recon::codes::CodeSet;
use crate::recon::error::ReconError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Marker preceding codes on the listings page
pub const DEFAULT_MARKER: char = '#';

static PAGE_CODE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"#([A-Z0-9]{7,8})\b").unwrap());

/// Compiled extraction pattern for one marker character
#[derive(Debug, Clone)]
pub struct TokenPattern {
    marker: char,
    regex: Regex,
}

impl TokenPattern {
    /// Pattern with the default `#` marker
    pub fn new() -> Self {
        Self {
            marker: DEFAULT_MARKER,
            regex: PAGE_CODE_REGEX.clone(),
        }
    }

    /// Pattern with a custom marker.
    ///
    /// Alphanumeric and whitespace markers are rejected: the marker must be
    /// distinguishable from the code characters it delimits.
    pub fn with_marker(marker: char) -> Result<Self, ReconError> {
        if marker.is_alphanumeric() || marker.is_whitespace() {
            return Err(ReconError::InvalidMarker(marker));
        }
        if marker == DEFAULT_MARKER {
            return Ok(Self::new());
        }
        let pattern = format!(r"{}([A-Z0-9]{{7,8}})\b", regex::escape(&marker.to_string()));
        let regex = Regex::new(&pattern).expect("escaped marker forms a valid pattern");
        Ok(Self { marker, regex })
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    /// Extract the set of codes present in `text`.
    ///
    /// Duplicates collapse and source order is discarded.
    pub fn scan(&self, text: &str) -> CodeSet {
        self.regex
            .captures_iter(text)
            .map(|caps| caps[1].to_owned())
            .collect()
    }

    /// Read `path` (UTF-8) and scan its full contents.
    pub fn scan_path(&self, path: &Path) -> Result<CodeSet, ReconError> {
        let text = fs::read_to_string(path).map_err(|e| ReconError::io(path, &e))?;
        Ok(self.scan(&text))
    }
}

impl Default for TokenPattern {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan `text` with the default `#` marker.
pub fn scan_text(text: &str) -> CodeSet {
    TokenPattern::new().scan(text)
}

/// Read and scan a file with the default `#` marker.
pub fn scan_path(path: &Path) -> Result<CodeSet, ReconError> {
    TokenPattern::new().scan_path(path)
}
