//! Test utilities for dashfmt.
//!
//! Revenue fixtures, config fixtures, a scratch directory and assertion
//! macros shared by unit and integration tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dashfmt::test_utils::*;
//!
//! let revenue = sample_revenue();
//! let dir = TestDir::new();
//! dir.create_file("revenue.json", &revenue_json(&revenue));
//! ```

use std::fs;
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use crate::core::models::RevenueSample;

// =============================================================================
// Test Data Factories
// =============================================================================

/// Twelve months of dashboard revenue, peaking at 4800 in December.
#[must_use]
pub fn sample_revenue() -> Vec<RevenueSample> {
    [
        ("Jan", 2000),
        ("Feb", 1800),
        ("Mar", 2200),
        ("Apr", 2500),
        ("May", 2300),
        ("Jun", 3200),
        ("Jul", 3500),
        ("Aug", 3700),
        ("Sep", 2500),
        ("Oct", 2800),
        ("Nov", 3000),
        ("Dec", 4800),
    ]
    .into_iter()
    .map(|(month, amount)| RevenueSample::new(month, amount))
    .collect()
}

/// Revenue samples named `P1`, `P2`, ... with the given amounts.
#[must_use]
pub fn make_test_revenue(amounts: &[i64]) -> Vec<RevenueSample> {
    amounts
        .iter()
        .enumerate()
        .map(|(i, &amount)| RevenueSample::new(format!("P{}", i + 1), amount))
        .collect()
}

/// Serialize samples as the JSON the `axis` command reads.
///
/// # Panics
///
/// Panics if serialization fails.
#[must_use]
pub fn revenue_json(samples: &[RevenueSample]) -> String {
    serde_json::to_string(samples).expect("Failed to serialize revenue")
}

/// A config file exercising every section.
#[must_use]
pub fn make_test_config_toml() -> String {
    r#"[general]
log_level = "info"

[display]
locale = "en-GB"

[output]
format = "human"
color = false
pretty = true
"#
    .to_string()
}

// =============================================================================
// Temporary Directory
// =============================================================================

/// An isolated temporary directory, removed on drop.
///
/// ```rust,ignore
/// let dir = TestDir::new();
/// dir.create_file("config.toml", "[display]\nlocale = \"de-DE\"");
/// assert!(dir.file_path("config.toml").exists());
/// ```
pub struct TestDir {
    inner: tempfile::TempDir,
}

impl TestDir {
    /// # Panics
    ///
    /// Panics if the system temp dir is unusable.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: tempfile::tempdir().expect("temp dir"),
        }
    }

    /// Path to the directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Write `content` to `name` (parents included) and return its path.
    ///
    /// # Panics
    ///
    /// Panics on any I/O failure.
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.file_path(name);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parents");
        }

        fs::File::create(&path)
            .and_then(|mut file| file.write_all(content.as_bytes()))
            .expect("write test file");
        path
    }

    /// Full path to a file in the directory.
    #[must_use]
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.inner.path().join(name)
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Assertion Macros
// =============================================================================

/// Assert `haystack.contains(needle)`, printing both on failure.
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        let haystack = $haystack;
        let needle = $needle;
        assert!(
            haystack.contains(needle),
            "{:?} not found in:\n{}",
            needle,
            haystack
        );
    };
}

/// Assert the text parses as JSON.
#[macro_export]
macro_rules! assert_json_valid {
    ($json:expr) => {
        let json = $json;
        if let Err(e) = serde_json::from_str::<serde_json::Value>(json) {
            panic!("invalid JSON ({}):\n{}", e, json);
        }
    };
}
