//! In-memory sink and stager for tests and previews.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::render::{ArtifactBundle, ArtifactKind};

use super::{check_segment, ArtifactLocation, ArtifactSink, ImageStager};

type ArtifactMap = HashMap<(String, ArtifactKind), Vec<u8>>;
type ImageMap = HashMap<(String, String), Vec<u8>>;

/// Keeps artifacts and staged images in memory.
///
/// A sink created with [`MemorySink::failing`] rejects one artifact kind,
/// which makes it possible to observe that a failed commit stores nothing.
#[derive(Debug, Default)]
pub struct MemorySink {
    artifacts: Mutex<ArtifactMap>,
    images: Mutex<ImageMap>,
    fail_on: Option<ArtifactKind>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink whose storage fails for `kind`.
    pub fn failing(kind: ArtifactKind) -> Self {
        Self {
            fail_on: Some(kind),
            ..Self::default()
        }
    }

    /// Stored artifact as text.
    pub fn get(&self, article_id: &str, kind: ArtifactKind) -> Option<String> {
        let artifacts = self.artifacts().ok()?;
        artifacts
            .get(&(article_id.to_string(), kind))
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Stored image bytes.
    pub fn image(&self, article_id: &str, filename: &str) -> Option<Vec<u8>> {
        let images = self.images().ok()?;
        images
            .get(&(article_id.to_string(), filename.to_string()))
            .cloned()
    }

    /// Number of stored artifacts.
    pub fn len(&self) -> usize {
        self.artifacts().map(|a| a.len()).unwrap_or(0)
    }

    /// Check if no artifact is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn artifacts(&self) -> Result<MutexGuard<'_, ArtifactMap>> {
        self.artifacts
            .lock()
            .map_err(|_| Error::Storage("memory sink lock poisoned".to_string()))
    }

    fn images(&self) -> Result<MutexGuard<'_, ImageMap>> {
        self.images
            .lock()
            .map_err(|_| Error::Storage("memory stager lock poisoned".to_string()))
    }

    fn check_available(&self, kind: ArtifactKind) -> Result<()> {
        if self.fail_on == Some(kind) {
            return Err(Error::Storage(format!(
                "storage unavailable for {}",
                kind.relative_path()
            )));
        }
        Ok(())
    }

    fn location(article_id: &str, kind: ArtifactKind) -> ArtifactLocation {
        ArtifactLocation::new(kind, format!("memory://{}/{}", article_id, kind.relative_path()))
    }
}

impl ArtifactSink for MemorySink {
    fn put(&self, article_id: &str, kind: ArtifactKind, bytes: &[u8]) -> Result<ArtifactLocation> {
        check_segment("article id", article_id)?;
        self.check_available(kind)?;
        self.artifacts()?
            .insert((article_id.to_string(), kind), bytes.to_vec());
        Ok(Self::location(article_id, kind))
    }

    fn commit(&self, article_id: &str, bundle: &ArtifactBundle) -> Result<Vec<ArtifactLocation>> {
        check_segment("article id", article_id)?;
        for kind in ArtifactKind::ALL {
            self.check_available(kind)?;
        }

        let mut artifacts = self.artifacts()?;
        let mut locations = Vec::with_capacity(ArtifactKind::ALL.len());
        for (kind, content) in bundle.artifacts() {
            artifacts.insert((article_id.to_string(), kind), content.as_bytes().to_vec());
            locations.push(Self::location(article_id, kind));
        }
        Ok(locations)
    }

    fn name(&self) -> &str {
        "memory"
    }
}

impl ImageStager for MemorySink {
    fn stage(&self, article_id: &str, filename: &str, bytes: &[u8]) -> Result<String> {
        check_segment("article id", article_id)?;
        check_segment("file name", filename)?;

        let mut images = self.images()?;
        let key = (article_id.to_string(), filename.to_string());
        if images.contains_key(&key) {
            return Err(Error::AlreadyExists(filename.to_string()));
        }
        images.insert(key, bytes.to_vec());
        Ok(format!("images/{}", filename))
    }
}
