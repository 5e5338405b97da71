//! Whole-file replacement for the stores

use crate::error::GameError;
use std::fs;
use std::path::{Path, PathBuf};

/// Replace the contents of `path` with `contents`
///
/// Writes a sibling temporary file and renames it over the target, so readers
/// see either the old file or the new one.
///
/// # Errors
///
/// Returns [`GameError::Io`] naming the path that failed.
pub(crate) fn replace_file(path: &Path, contents: &[u8]) -> Result<(), GameError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GameError::io(parent, e))?;
    }

    let tmp = temp_path(path);
    fs::write(&tmp, contents).map_err(|e| GameError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        GameError::io(path, e)
    })
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_is_sibling() {
        assert_eq!(
            temp_path(Path::new("data/words.json")),
            PathBuf::from("data/words.json.tmp")
        );
        assert_eq!(
            temp_path(Path::new("highscore.txt")),
            PathBuf::from("highscore.txt.tmp")
        );
    }
}
