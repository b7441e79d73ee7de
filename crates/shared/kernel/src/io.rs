//! Stream persistence.
//!
//! The source stream is taken by value, so it is dropped (closed) together with the
//! destination file on every exit path. A failed copy leaves whatever was written so
//! far on disk; cleaning it up is the caller's call.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

#[droidkit_derive::droidkit_error]
pub enum PersistError {
    #[error("Stream persistence failure{}: {source}", format_context(.context))]
    Io { source: io::Error, context: Option<Cow<'static, str>> },
}

/// Copies every byte of `reader` into a newly created (or truncated) file at `path`.
///
/// Returns the number of bytes written.
///
/// # Errors
/// Returns [`PersistError::Io`] if the destination cannot be created or written, or the
/// source cannot be read.
pub fn stream_to_file<R>(reader: R, path: impl AsRef<Path>) -> Result<u64, PersistError>
where
    R: Read,
{
    let path = path.as_ref();
    let file = File::create(path)
        .context(format!("Failed to create destination: {}", path.display()))?;
    let copied = stream_into_file(reader, file)
        .context(format!("Failed to persist stream to: {}", path.display()))?;

    debug!(path = %path.display(), bytes = copied, "Persisted stream");
    Ok(copied)
}

/// Copies every byte of `reader` into an already opened `file`, then closes both.
///
/// # Errors
/// Returns [`PersistError::Io`] on any read, write, or flush failure.
pub fn stream_into_file<R>(mut reader: R, file: File) -> Result<u64, PersistError>
where
    R: Read,
{
    let mut writer = BufWriter::new(file);
    let copied = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    Ok(copied)
}

/// Async twin of [`stream_to_file`] for callers already running on a Tokio runtime.
///
/// # Errors
/// Same failure modes as [`stream_to_file`].
pub async fn stream_to_file_async<R>(
    mut reader: R,
    path: impl AsRef<Path>,
) -> Result<u64, PersistError>
where
    R: tokio::io::AsyncRead + Unpin,
{
    use tokio::io::AsyncWriteExt;

    let path = path.as_ref();
    let file = tokio::fs::File::create(path)
        .await
        .context(format!("Failed to create destination: {}", path.display()))?;

    let mut writer = tokio::io::BufWriter::new(file);
    let copied = tokio::io::copy(&mut reader, &mut writer)
        .await
        .context(format!("Failed to persist stream to: {}", path.display()))?;
    writer.flush().await.context("Failed to flush destination")?;
    writer.shutdown().await.context("Failed to close destination")?;

    debug!(path = %path.display(), bytes = copied, "Persisted stream");
    Ok(copied)
}
