use anyhow::{Context, Result};
use droidkit::kernel::io::stream_to_file;
use std::fs::File;
use std::io;
use std::path::Path;

/// Streams `source` (or stdin for `-`) into `destination` and prints the byte count.
///
/// # Errors
/// Returns an error if the source cannot be opened or the copy fails.
pub fn copy(source: &Path, destination: &Path) -> Result<()> {
    let bytes = if source == Path::new("-") {
        stream_to_file(io::stdin().lock(), destination)?
    } else {
        let reader = File::open(source)
            .with_context(|| format!("Failed to open source {}", source.display()))?;
        stream_to_file(reader, destination)?
    };

    println!("{bytes}");
    Ok(())
}
