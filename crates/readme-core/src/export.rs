//! Writing assembled readmes to disk.

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::{Error, Result};

/// Write `contents` to `path`, replacing any existing file.
///
/// The file is created, written through a buffer and flushed. It is closed
/// when this returns, on success and on failure alike.
///
/// Returns the number of bytes written.
pub async fn write_markdown(path: &Path, contents: &[u8]) -> Result<usize> {
    let file = File::create(path)
        .await
        .map_err(|e| Error::write(e, path))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(contents)
        .await
        .map_err(|e| Error::write(e, path))?;
    writer.flush().await.map_err(|e| Error::write(e, path))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote markdown file");
    Ok(contents.len())
}
