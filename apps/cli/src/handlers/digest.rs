use anyhow::{Context, Result, bail};
use droidkit::kernel::digest::{DigestAlgorithm, hash_bytes, hash_string};
use std::fs;
use std::path::Path;

/// Prints the uppercase hex digest of `input`, or of the file at `file` when given.
///
/// # Errors
/// Returns an error for an unknown algorithm or an unreadable file.
pub fn hash(algorithm: &str, input: Option<&str>, file: Option<&Path>) -> Result<()> {
    let hex = match (input, file) {
        (_, Some(path)) => {
            let algorithm = DigestAlgorithm::resolve(algorithm)?;
            let data =
                fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
            hash_bytes(algorithm, &data)
        },
        (Some(text), None) => hash_string(algorithm, text)?,
        (None, None) => bail!("Nothing to hash; pass text or --file"),
    };

    println!("{hex}");
    Ok(())
}
