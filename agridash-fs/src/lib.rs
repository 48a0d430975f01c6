//! Capability-scoped file access for catalogue and prediction inputs.
//!
//! Every read goes through `cap-std` directory handles addressed with
//! `camino` UTF-8 paths.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io::{self, Read};

/// Open a file for reading using ambient authority.
///
/// # Errors
/// Returns the underlying I/O error when the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read a whole UTF-8 text file into memory.
///
/// # Errors
/// Returns the underlying I/O error when the file cannot be opened, read, or
/// holds invalid UTF-8.
pub fn read_utf8_to_string(path: &Utf8Path) -> io::Result<String> {
    let mut contents = String::new();
    open_utf8_file(path)?.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Open the directory containing `path` and return it with the file name.
///
/// Paths without a parent resolve against the current directory.
///
/// # Errors
/// Fails when `path` has no file name or the parent cannot be opened.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Report whether `path` is a regular file.
///
/// # Errors
/// Returns the I/O error when the parent directory cannot be opened or the
/// path does not exist.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "tests should fail fast when fixtures break"
    )]

    use super::*;
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn workspace() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp path");
        (dir, root)
    }

    #[rstest]
    fn reads_text_files(workspace: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = workspace;
        let path = root.join("crops.json");
        std::fs::write(&path, "{\"version\": 1}").expect("write fixture");

        let contents = read_utf8_to_string(&path).expect("read fixture");
        assert_eq!(contents, "{\"version\": 1}");
    }

    #[rstest]
    fn reports_missing_and_present_files(workspace: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = workspace;
        let path = root.join("prediction.json");
        let err = file_is_file(&path).expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);

        std::fs::write(&path, "{}").expect("write fixture");
        assert!(file_is_file(&path).expect("query present file"));
    }

    #[rstest]
    fn directories_are_not_files(workspace: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = workspace;
        let nested = root.join("nested");
        std::fs::create_dir(&nested).expect("create dir");
        assert!(!file_is_file(&nested).expect("query directory"));
    }

    #[rstest]
    fn open_missing_file_fails(workspace: (TempDir, Utf8PathBuf)) {
        let (_guard, root) = workspace;
        let err = open_utf8_file(&root.join("absent.json")).expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
