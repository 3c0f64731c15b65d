// Append-only JSONL persistence.
//
// Responsibilities
// - Create the parent directory once, at construction.
// - Write exactly one newline-terminated line per append, never touching earlier bytes.
// - Read the raw lines back for recovery.
// - Start a fresh line when the file may end mid-line (a torn tail found at
//   recovery, or a write that failed part way).
//
// The persister is not synchronised itself; the store keeps it behind its own lock.

use serde::Serialize;
use std::io::{ErrorKind, SeekFrom};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs::{self, File, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write record: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug)]
pub struct JsonlPersister {
    path: PathBuf,
    file: Option<File>,
    needs_newline: bool,
}

impl JsonlPersister {
    pub async fn create(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        Ok(Self {
            path,
            file: None,
            needs_newline: false,
        })
    }

    /// Appends `line` as one JSON object followed by `\n`.
    ///
    /// The handle is opened lazily and dropped after any failure, so the next
    /// append retries from a fresh open.
    pub async fn append<T: Serialize>(&mut self, line: &T) -> Result<(), PersistError> {
        let mut serialized = serde_json::to_string(line)?;
        serialized.push('\n');
        let result = self.write_line(serialized.as_bytes()).await;
        if result.is_err() {
            self.file = None;
            self.needs_newline = true;
        }
        result.map_err(PersistError::from)
    }

    async fn write_line(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        let file = match self.file.take() {
            Some(file) => file,
            None => {
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)
                    .await?
            }
        };
        let file = self.file.insert(file);
        if self.needs_newline && ends_mid_line(&self.path).await? {
            file.write_all(b"\n").await?;
        }
        file.write_all(bytes).await?;
        file.flush().await?;
        self.needs_newline = false;
        Ok(())
    }

    /// Returns every line of the log in file order, `None` if the file does not exist.
    /// Bytes that are not valid UTF-8 are replaced so that a torn multi-byte
    /// character only spoils its own line.
    pub async fn read_lines(&mut self) -> std::io::Result<Option<Vec<String>>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error),
        };
        let mut lines: Vec<String> = bytes
            .split(|byte| *byte == b'\n')
            .map(|line| String::from_utf8_lossy(line).into_owned())
            .collect();
        if bytes.ends_with(b"\n") {
            lines.pop();
        }
        self.needs_newline = !bytes.is_empty() && !bytes.ends_with(b"\n");
        Ok(Some(lines))
    }
}

/// True when `path` holds bytes and the last one is not a line terminator.
async fn ends_mid_line(path: &Path) -> std::io::Result<bool> {
    let mut file = match File::open(path).await {
        Ok(file) => file,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(false),
        Err(error) => return Err(error),
    };
    if file.metadata().await?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1)).await?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last).await?;
    Ok(last[0] != b'\n')
}
