//! High score file
//!
//! A plain text file holding a single integer.

use crate::error::GameError;
use crate::persist::replace_file;
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

/// Read the stored high score, or 0 if none was saved yet
///
/// # Errors
///
/// Returns [`GameError::CorruptHighScore`] if the file does not hold a
/// non-negative integer, or [`GameError::Io`] if it cannot be read.
pub fn load_high_score<P: AsRef<Path>>(path: P) -> Result<u32, GameError> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(GameError::io(path, e)),
    };

    let parsed = content.trim().parse::<u32>();
    parsed.map_err(|_| GameError::CorruptHighScore {
        path: path.to_path_buf(),
        content,
    })
}

/// Overwrite the stored high score
///
/// # Errors
///
/// Returns [`GameError::Io`] if the file cannot be written.
pub fn save_high_score<P: AsRef<Path>>(path: P, value: u32) -> Result<(), GameError> {
    let path = path.as_ref();
    replace_file(path, value.to_string().as_bytes())?;
    info!(path = %path.display(), value, "saved high score");
    Ok(())
}
