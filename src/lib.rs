//! # coderecon
//!
//! Reconciles a known list of offer codes against a scraped listings page.
//!
//! The library is a small pipeline: load a reference code set, scan the page
//! text for marker-prefixed codes, and compute the three-way comparison
//! (common, page-only, reference-only). The `coderecon` binary is a thin CLI
//! over [`recon::pipeline::run`].

pub mod recon;
