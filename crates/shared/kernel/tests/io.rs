use droidkit_kernel::io::{PersistError, stream_into_file, stream_to_file, stream_to_file_async};
use std::fs::{self, File};
use std::io::Cursor;
use tempfile::tempdir;

fn sample_payload() -> Vec<u8> {
    (0..=255u8).cycle().take(64 * 1024 + 17).collect()
}

#[test]
fn roundtrip_is_byte_identical() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("classes.dex");
    let payload = sample_payload();

    let copied = stream_to_file(Cursor::new(payload.clone()), &path)?;

    assert_eq!(copied, payload.len() as u64);
    assert_eq!(fs::read(&path)?, payload);
    Ok(())
}

#[test]
fn empty_stream_creates_empty_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("empty.bin");

    assert_eq!(stream_to_file(std::io::empty(), &path)?, 0);
    assert_eq!(fs::metadata(&path)?.len(), 0);
    Ok(())
}

#[test]
fn copies_into_an_open_file_handle() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("handle.bin");
    let file = File::create(&path)?;

    stream_into_file(&b"handle"[..], file)?;
    assert_eq!(fs::read(&path)?, b"handle");
    Ok(())
}

#[test]
fn source_file_can_be_copied() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let source = dir.path().join("source.apk");
    let target = dir.path().join("target.apk");
    fs::write(&source, sample_payload())?;

    stream_to_file(File::open(&source)?, &target)?;
    assert_eq!(fs::read(&source)?, fs::read(&target)?);
    Ok(())
}

#[test]
fn directory_destination_is_an_io_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let err = stream_to_file(&b"x"[..], dir.path()).unwrap_err();
    assert!(matches!(err, PersistError::Io { .. }));
    Ok(())
}

#[tokio::test]
async fn async_roundtrip_is_byte_identical() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("async.bin");
    let payload = sample_payload();

    let copied = stream_to_file_async(&payload[..], &path).await?;

    assert_eq!(copied, payload.len() as u64);
    assert_eq!(tokio::fs::read(&path).await?, payload);
    Ok(())
}
