//! End-to-end reconciliation runs
//!
//! [`ReconRequest`] carries everything one run needs - the page path, an
//! optional codes file and the marker - and [`run`] wires the loader, the
//! scanner and the reconciliation together. The binary builds a request from
//! its arguments and prints whatever comes back.

use crate::recon::codes::CodeSet;
use crate::recon::error::ReconError;
use crate::recon::report::Reconciliation;
use crate::recon::scanner::{TokenPattern, DEFAULT_MARKER};
use std::path::PathBuf;

/// Inputs for one reconciliation run
#[derive(Debug, Clone)]
pub struct ReconRequest {
    /// Page file to scan
    pub page: PathBuf,
    /// Reference codes file; `None` uses the embedded default list
    pub codes: Option<PathBuf>,
    /// Marker preceding codes on the page
    pub marker: char,
}

impl ReconRequest {
    /// Request a scan of `page` with the defaults: embedded reference list
    /// and `#` marker.
    pub fn new(page: impl Into<PathBuf>) -> Self {
        Self {
            page: page.into(),
            codes: None,
            marker: DEFAULT_MARKER,
        }
    }
}

/// Execute one reconciliation run.
pub fn run(request: &ReconRequest) -> Result<Reconciliation, ReconError> {
    let reference = match &request.codes {
        Some(path) => CodeSet::from_path(path)?,
        None => CodeSet::default_reference(),
    };
    let pattern = TokenPattern::with_marker(request.marker)?;
    let page = pattern.scan_path(&request.page)?;
    Ok(Reconciliation::compute(&reference, &page))
}
