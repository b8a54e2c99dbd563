use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary folder holding the given `(filename, content)` pairs.
///
/// The folder is removed when the returned `TempDir` is dropped, so keep it
/// in scope for as long as the files are needed.
pub fn submission_folder(files: &[(&str, &str)]) -> std::io::Result<TempDir> {
    let tmp = TempDir::new()?;
    for (name, content) in files {
        fs::write(tmp.path().join(name), content)?;
    }
    Ok(tmp)
}

/// Path to a not-yet-existing file inside `dir`.
pub fn scratch_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}
