use crate::error::BazaarError;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fallback served when a requested image is missing.
pub const DEFAULT_IMAGE_NAME: &str = "default.jpg";

const IMAGE_EXTENSION: &str = ".jpg";

/// Content-addressed image storage rooted at a single directory.
///
/// Uploaded bytes are stored under `<root>/<sha256-hex>.jpg`, so re-uploading
/// the same image is idempotent.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    /// Opens the store, creating the root directory if missing.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, BazaarError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Rejects names that do not end in `.jpg` or that could escape the root.
    pub fn validate_name(name: &str) -> Result<(), BazaarError> {
        if !name.ends_with(IMAGE_EXTENSION) {
            return Err(BazaarError::BadImageName(format!(
                "image name must end with {IMAGE_EXTENSION}: {name}"
            )));
        }
        if name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(BazaarError::BadImageName(format!(
                "image name must be a bare file name: {name}"
            )));
        }
        Ok(())
    }

    /// Writes the bytes under their content address and returns the file name.
    pub async fn save(&self, bytes: &[u8]) -> Result<String, BazaarError> {
        let name = content_address(bytes);
        let path = self.root.join(&name);
        tokio::fs::write(&path, bytes).await?;
        Ok(name)
    }

    /// Reads an image by name, falling back to `default.jpg` when missing.
    pub async fn read(&self, name: &str) -> Result<Vec<u8>, BazaarError> {
        Self::validate_name(name)?;

        let path = self.root.join(name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(image = %path.display(), "image not found, trying default");
                let fallback = self.root.join(DEFAULT_IMAGE_NAME);
                match tokio::fs::read(&fallback).await {
                    Ok(bytes) => Ok(bytes),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                        Err(BazaarError::ImageNotFound(name.to_string()))
                    }
                    Err(e) => Err(e.into()),
                }
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// SHA-256 hex digest of the bytes plus the `.jpg` extension.
fn content_address(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}{IMAGE_EXTENSION}", hasher.finalize())
}
