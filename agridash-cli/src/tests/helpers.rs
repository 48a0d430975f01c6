//! Test helpers for writing prediction and catalogue fixtures.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Write raw bytes to a UTF-8 path, failing the test on error.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture");
}

/// Create a temporary directory and return it with its UTF-8 root.
pub(super) fn temp_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Prediction favouring rice over maize, chickpea, and lentil.
pub(super) const RICE_PREDICTION: &[u8] = br#"{
    "labels": ["rice", "maize", "chickpea", "lentil"],
    "probabilities": [0.92, 0.05, 0.02, 0.01]
}"#;

/// Catalogue describing only maize.
pub(super) const MAIZE_ONLY_CATALOG: &[u8] = br#"{
    "version": 1,
    "crops": {
        "maize": {
            "soil": "Loamy sand to clay loam",
            "season": "Kharif, Rabi, Spring",
            "cycle": "90-110 days",
            "notes": "Needs good sunlight and moderate rainfall."
        }
    }
}"#;
