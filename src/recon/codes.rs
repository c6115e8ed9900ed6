//! Reference code loading
//!
//! This module provides [`CodeSet`] - an ordered, de-duplicated collection of
//! offer codes. Codes come from a whitespace-separated block: either the
//! embedded default list or a file the caller points at. Tokens are trusted
//! to be well-formed; the loader does not validate their shape.

use crate::recon::error::ReconError;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// The code list the tool ships with: offers known on the seller side when
/// the page audit was set up.
const DEFAULT_REFERENCE: &str = "
2YA3DEX5
3ES8VBV2
4AYJKQVM
4C35NHZK
4U2T34PP
54AW2SJ5
5NNFXYF9
5SZ6GXDN
6P4CRTY7
7RHR3DFU
8D6QP85C
8EDXGW8P
8SAA8LZL
9ECKJGR9
A93UGTGQ
AYP2WFE5
BF3QPQ6X
BKBEFQEC
C5LEMJZU
DGGXFMYT
EKNNXRQ6
EX9NMMT3
F7CS6RL2
FWWJ55FU
H9YDYX2E
HRCXUQDG
JDKF8E4F
JMUNCZK6
JX9FLZGH
LBXNLCDY
MH8BLY45
NJK8YWLZ
P76BXQUZ
QRSHGTXS
RNYNWV6C
RZWXFBGZ
SFY76AND
SLGAGY4D
SNNEJGAQ
UB6RDEJ4
UWYHR6TH
WEL7HT43
";

/// Ordered set of offer codes
///
/// Backed by a `BTreeSet` so iteration is always sorted; duplicates collapse
/// on construction and the set is never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CodeSet {
    codes: BTreeSet<String>,
}

impl CodeSet {
    /// Parse a whitespace-separated block of codes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use coderecon::recon::codes::CodeSet;
    ///
    /// let codes = CodeSet::from_block("AAAAAAAA\nBBBBBBBB AAAAAAAA");
    /// assert_eq!(codes.len(), 2);
    /// ```
    pub fn from_block(block: &str) -> Self {
        Self {
            codes: block.split_whitespace().map(str::to_owned).collect(),
        }
    }

    /// Load a code block from a file.
    pub fn from_path(path: &Path) -> Result<Self, ReconError> {
        let block = fs::read_to_string(path).map_err(|e| ReconError::io(path, &e))?;
        Ok(Self::from_block(&block))
    }

    /// The embedded default reference list.
    pub fn default_reference() -> Self {
        Self::from_block(DEFAULT_REFERENCE)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Iterate codes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}

impl FromIterator<String> for CodeSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}
