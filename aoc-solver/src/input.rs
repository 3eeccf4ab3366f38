//! Input loader: gzip-compressed puzzle inputs

use crate::error::LoadError;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Decompressed text of one puzzle input file
///
/// Created once per run by [`load_input`] and borrowed by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    text: String,
}

impl RawInput {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<String> for RawInput {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl AsRef<str> for RawInput {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Read and decompress the gzip file at `path`
///
/// # Errors
/// * `LoadError::NotFound` - nothing exists at `path`
/// * `LoadError::Decode` - the bytes are not gzip, or the payload is not UTF-8
/// * `LoadError::Io` - any other read failure
pub fn load_input(path: &Path) -> Result<RawInput, LoadError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut text = String::new();
    GzDecoder::new(file)
        .read_to_string(&mut text)
        .map_err(|source| classify_read_error(path, source))?;

    debug!(path = %path.display(), bytes = text.len(), "decompressed input");
    Ok(RawInput::from(text))
}

/// Corrupt gzip streams and non-UTF-8 payloads surface as `InvalidInput`,
/// `InvalidData` or a truncated stream from the decoder.
fn classify_read_error(path: &Path, source: io::Error) -> LoadError {
    match source.kind() {
        io::ErrorKind::InvalidInput | io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => {
            LoadError::Decode {
                path: path.to_path_buf(),
                source,
            }
        }
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    }
}
