//! Message digests rendered as uppercase hexadecimal.

use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use std::borrow::Cow;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

#[droidkit_derive::droidkit_error]
pub enum DigestError {
    #[error("Unsupported digest algorithm{}: {message}", format_context(.context))]
    UnsupportedAlgorithm { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Digest algorithms resolvable by their standard names.
///
/// Parsing is case-insensitive and accepts the usual aliases (`SHA1`, `SHA`, `SHA256`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum DigestAlgorithm {
    #[strum(to_string = "MD5")]
    Md5,
    #[strum(to_string = "SHA-1", serialize = "SHA1", serialize = "SHA")]
    Sha1,
    #[strum(to_string = "SHA-224", serialize = "SHA224")]
    Sha224,
    #[strum(to_string = "SHA-256", serialize = "SHA256")]
    Sha256,
    #[strum(to_string = "SHA-384", serialize = "SHA384")]
    Sha384,
    #[strum(to_string = "SHA-512", serialize = "SHA512")]
    Sha512,
    #[strum(to_string = "SHA-512/224", serialize = "SHA512/224")]
    Sha512_224,
    #[strum(to_string = "SHA-512/256", serialize = "SHA512/256")]
    Sha512_256,
}

impl DigestAlgorithm {
    /// Resolves an algorithm by name.
    ///
    /// # Errors
    /// Returns [`DigestError::UnsupportedAlgorithm`] for unknown names.
    pub fn resolve(name: &str) -> Result<Self, DigestError> {
        Self::from_str(name).map_err(|_| DigestError::UnsupportedAlgorithm {
            message: format!("{name} MessageDigest not available").into(),
            context: None,
        })
    }

    /// Digest length in bytes.
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha224 | Self::Sha512_224 => 28,
            Self::Sha256 | Self::Sha512_256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Computes the raw digest of `data`.
    #[must_use]
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Md5 => md5::compute(data).0.to_vec(),
            Self::Sha1 => Sha1::digest(data).to_vec(),
            Self::Sha224 => Sha224::digest(data).to_vec(),
            Self::Sha256 => Sha256::digest(data).to_vec(),
            Self::Sha384 => Sha384::digest(data).to_vec(),
            Self::Sha512 => Sha512::digest(data).to_vec(),
            Self::Sha512_224 => Sha512_224::digest(data).to_vec(),
            Self::Sha512_256 => Sha512_256::digest(data).to_vec(),
        }
    }
}

/// Hashes raw bytes and renders the digest as uppercase hex.
#[must_use]
pub fn hash_bytes(algorithm: DigestAlgorithm, data: &[u8]) -> String {
    hex::encode_upper(algorithm.digest(data))
}

/// Hashes the UTF-8 bytes of `input` with the named algorithm.
///
/// The result has two uppercase hex characters per digest byte, high nibble first.
///
/// # Errors
/// Returns [`DigestError::UnsupportedAlgorithm`] when `algorithm` is not a known digest.
pub fn hash_string(algorithm: &str, input: &str) -> Result<String, DigestError> {
    let algorithm = DigestAlgorithm::resolve(algorithm)?;
    Ok(hash_bytes(algorithm, input.as_bytes()))
}
