use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::list::TaskList;
use crate::parse::{parse_list, serialize_list};

/// Default task file name, relative to the working directory
pub const DEFAULT_FILE: &str = "tasks.txt";

/// Error type for task-file I/O
#[derive(Debug, thiserror::Error)]
pub enum ListIoError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },
}

/// Load the task list from `path`. A missing file is not an error: the
/// session starts with an empty list and the file is created on first save.
pub fn load_list(path: &Path) -> Result<TaskList, ListIoError> {
    if !path.exists() {
        return Ok(TaskList::new());
    }
    let content = fs::read_to_string(path).map_err(|e| ListIoError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(parse_list(&content))
}

/// Save the task list to `path`, replacing the whole file.
pub fn save_list(path: &Path, list: &TaskList) -> Result<(), ListIoError> {
    let content = serialize_list(list);
    atomic_write(path, content.as_bytes()).map_err(|e| ListIoError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write `content` to `path` atomically using a temp file + rename,
/// so an interrupted save leaves the previous file intact.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
