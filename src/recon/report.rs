//! Reconciliation and reporting
//!
//! Pure set algebra over the reference and page code sets, plus the text
//! rendering the audit prints. Given the same two sets the result is always
//! identical.

use crate::recon::codes::CodeSet;
use serde::Serialize;
use std::fmt;

/// Three-way comparison of a reference code list against a scanned page.
///
/// `common`, `page_only` and `reference_only` partition the union of the two
/// input sets; the totals record the input sizes the derived sets came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    pub reference_total: usize,
    pub page_total: usize,
    /// In the reference list and on the page
    pub common: CodeSet,
    /// On the page only - offers that are not ours
    pub page_only: CodeSet,
    /// In the reference list only - offers missing from the page
    pub reference_only: CodeSet,
}

impl Reconciliation {
    /// Compare `reference` against `page`.
    pub fn compute(reference: &CodeSet, page: &CodeSet) -> Self {
        let common = page
            .iter()
            .filter(|code| reference.contains(code))
            .map(str::to_owned)
            .collect();
        let page_only = page
            .iter()
            .filter(|code| !reference.contains(code))
            .map(str::to_owned)
            .collect();
        let reference_only = reference
            .iter()
            .filter(|code| !page.contains(code))
            .map(str::to_owned)
            .collect();
        Self {
            reference_total: reference.len(),
            page_total: page.len(),
            common,
            page_only,
            reference_only,
        }
    }

    /// Plain-text rendering of the report.
    ///
    /// Page-side codes keep the marker they carried on the page;
    /// reference-side codes are shown bare, as they appear in the code list.
    pub fn text(&self, marker: char) -> TextReport<'_> {
        TextReport {
            reconciliation: self,
            marker,
        }
    }
}

/// Displayable text report over a [`Reconciliation`]
pub struct TextReport<'a> {
    reconciliation: &'a Reconciliation,
    marker: char,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recon = self.reconciliation;
        writeln!(f, "Codes in reference: {}", recon.reference_total)?;
        writeln!(f, "Codes on page: {}", recon.page_total)?;
        writeln!(f)?;
        writeln!(
            f,
            "On page but not in reference ({}):",
            recon.page_only.len()
        )?;
        for code in recon.page_only.iter() {
            writeln!(f, "  {}{}", self.marker, code)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "In reference but not on page ({}):",
            recon.reference_only.len()
        )?;
        for code in recon.reference_only.iter() {
            writeln!(f, "  {}", code)?;
        }
        writeln!(f)?;
        writeln!(f, "Common codes ({}):", recon.common.len())?;
        for code in recon.common.iter() {
            writeln!(f, "  {}", code)?;
        }
        Ok(())
    }
}
