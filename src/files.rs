//! Zip archive tidying.
//!
//! [`archive_zip_files`] moves every `.zip` file in a directory into a `zip`
//! subdirectory. With `dry_run` set it only reports what it would do.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{EngineError, EngineResult};

/// Name of the subdirectory archives are moved into.
pub const ARCHIVE_DIR_NAME: &str = "zip";

/// A planned or completed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMove {
    /// Where the file was.
    pub from: PathBuf,
    /// Where the file goes.
    pub to: PathBuf,
}

/// Moves the `.zip` files directly inside `dir` into `dir/zip`.
///
/// Only regular files are moved and the extension match ignores case.
/// Returns the moves in file-name order; in dry-run mode nothing on disk
/// changes, including the creation of the `zip` directory.
pub fn archive_zip_files(dir: &Path, dry_run: bool) -> EngineResult<Vec<FileMove>> {
    let archive_dir = dir.join(ARCHIVE_DIR_NAME);
    let moves = plan_moves(dir, &archive_dir)?;

    if dry_run {
        info!(dir = %archive_dir.display(), "[DRY-RUN] would create archive directory");
        for planned in &moves {
            info!(
                from = %planned.from.display(),
                to = %planned.to.display(),
                "[DRY-RUN] would move"
            );
        }
        return Ok(moves);
    }

    fs::create_dir_all(&archive_dir)
        .map_err(|e| EngineError::io(format!("creating {}", archive_dir.display()), e))?;

    for planned in &moves {
        fs::rename(&planned.from, &planned.to).map_err(|e| {
            EngineError::io(format!("moving {}", planned.from.display()), e)
        })?;
        info!(from = %planned.from.display(), to = %planned.to.display(), "Moved archive");
    }

    Ok(moves)
}

fn plan_moves(dir: &Path, archive_dir: &Path) -> EngineResult<Vec<FileMove>> {
    let entries =
        fs::read_dir(dir).map_err(|e| EngineError::io(format!("listing {}", dir.display()), e))?;

    let mut moves = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| EngineError::io(format!("listing {}", dir.display()), e))?;
        let path = entry.path();

        let is_zip = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));
        if !is_zip || !path.is_file() {
            continue;
        }

        if let Some(name) = path.file_name() {
            moves.push(FileMove {
                to: archive_dir.join(name),
                from: path.clone(),
            });
        }
    }

    moves.sort_by(|a, b| a.from.cmp(&b.from));
    Ok(moves)
}
