use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::error::BoxResult;

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let contents = fs::read_to_string(path.as_ref())?;
    Ok(contents)
}

/// Write a string to a file, creating parent directories as needed
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        create_directory(parent)?;
    }

    fs::write(path.as_ref(), contents)?;
    Ok(())
}

/// List all files in a directory recursively
pub fn list_files<P: AsRef<Path>>(dir: P) -> BoxResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    if !dir.as_ref().is_dir() {
        return Ok(files);
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            files.append(&mut list_files(&path)?);
        } else {
            files.push(path);
        }
    }

    Ok(files)
}

/// List all files with the given extension in a directory recursively
pub fn list_files_with_ext<P: AsRef<Path>>(dir: P, ext: &str) -> BoxResult<Vec<PathBuf>> {
    let files = list_files(dir)?;

    Ok(files
        .into_iter()
        .filter(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .map_or(false, |e| e.eq_ignore_ascii_case(ext))
        })
        .collect())
}
