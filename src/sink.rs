use std::path::Path;

use tokio::fs::OpenOptions;
use tokio::io::{self, AsyncWriteExt};
use tracing::{debug, info};

use crate::error::Result;

/// Where the finished report goes.
#[derive(Debug, Clone)]
pub enum Sink<'a> {
    Stdout,
    /// Append to a file, creating it if needed.
    File(&'a Path),
}

impl<'a> Sink<'a> {
    pub fn from_path(path: Option<&'a Path>) -> Self {
        match path {
            Some(path) => Sink::File(path),
            None => Sink::Stdout,
        }
    }

    pub async fn write(&self, entry: &str) -> Result<()> {
        match self {
            Sink::Stdout => {
                let mut stdout = io::stdout();
                stdout.write_all(entry.as_bytes()).await?;
                stdout.flush().await?;
            }
            Sink::File(path) => append_to_file(path, entry).await?,
        }
        Ok(())
    }
}

/// Append `entry` and a blank line to `path`. The file is never truncated.
pub async fn append_to_file(path: &Path, entry: &str) -> Result<()> {
    debug!("Appending report to {}", path.display());
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;

    file.write_all(entry.as_bytes()).await?;
    file.write_all(b"\n").await?;
    file.flush().await?;

    info!("Saved report to '{}'", path.display());
    Ok(())
}
