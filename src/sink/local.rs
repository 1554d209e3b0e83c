//! Local filesystem sink and image stager.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::render::{ArtifactBundle, ArtifactKind};

use super::{check_segment, ArtifactLocation, ArtifactSink, ImageStager};

const STAGING_DIR: &str = ".staging";
const BACKUP_DIR: &str = ".old";

/// Writes artifacts to `<root>/<article_id>/`.
#[derive(Debug, Clone)]
pub struct LocalSink {
    root: PathBuf,
    base_url: Option<String>,
}

impl LocalSink {
    /// Create a sink rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            base_url: None,
        }
    }

    /// Report locations as `<base_url>/<article_id>/<path>` instead of
    /// filesystem paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into().trim_end_matches('/').to_string());
        self
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of one article.
    pub fn article_dir(&self, article_id: &str) -> PathBuf {
        self.root.join(article_id)
    }

    fn location(&self, article_id: &str, kind: ArtifactKind) -> ArtifactLocation {
        let location = match &self.base_url {
            Some(base) => format!("{}/{}/{}", base, article_id, kind.relative_path()),
            None => self
                .article_dir(article_id)
                .join(kind.relative_path())
                .display()
                .to_string(),
        };
        ArtifactLocation::new(kind, location)
    }

    fn write_staging(&self, staging: &Path, bundle: &ArtifactBundle) -> io::Result<()> {
        for (kind, content) in bundle.artifacts() {
            let path = staging.join(kind.relative_path());
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Move staged artifacts into place, parking replaced files under the
    /// staging backup directory. On failure every moved artifact is undone.
    fn promote(&self, staging: &Path, target: &Path) -> io::Result<()> {
        let backup = staging.join(BACKUP_DIR);
        let mut promoted = Vec::with_capacity(ArtifactKind::ALL.len());

        for kind in ArtifactKind::ALL {
            let relative = kind.relative_path();
            let swapped = swap_in(
                &staging.join(relative),
                &target.join(relative),
                &backup.join(relative),
            );
            match swapped {
                Ok(had_old) => promoted.push((kind, had_old)),
                Err(e) => {
                    for (kind, had_old) in promoted.into_iter().rev() {
                        let relative = kind.relative_path();
                        let dest = target.join(relative);
                        let _ = fs::remove_file(&dest);
                        if had_old {
                            if let Err(restore) = fs::rename(backup.join(relative), &dest) {
                                log::warn!("Failed to restore {}: {}", dest.display(), restore);
                            }
                        }
                    }
                    return Err(e);
                }
            }
        }
        Ok(())
    }
}

impl ArtifactSink for LocalSink {
    fn put(&self, article_id: &str, kind: ArtifactKind, bytes: &[u8]) -> Result<ArtifactLocation> {
        check_segment("article id", article_id)?;
        let path = self.article_dir(article_id).join(kind.relative_path());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        write_atomic(&path, bytes)?;
        log::debug!("Wrote {}", path.display());
        Ok(self.location(article_id, kind))
    }

    /// Write every artifact into a staging directory, then move them into
    /// place. If any step fails, the previous artifacts are put back and
    /// new ones removed.
    fn commit(&self, article_id: &str, bundle: &ArtifactBundle) -> Result<Vec<ArtifactLocation>> {
        check_segment("article id", article_id)?;
        let target = self.article_dir(article_id);
        let staging = target.join(STAGING_DIR);

        if staging.exists() {
            fs::remove_dir_all(&staging)?;
        }
        if let Err(e) = self.write_staging(&staging, bundle) {
            let _ = fs::remove_dir_all(&staging);
            return Err(Error::Storage(format!(
                "failed to stage artifacts for '{}': {}",
                article_id, e
            )));
        }

        let promoted = self.promote(&staging, &target);
        let _ = fs::remove_dir_all(&staging);
        promoted?;

        log::debug!(
            "Committed {} artifacts to {}",
            ArtifactKind::ALL.len(),
            target.display()
        );
        Ok(ArtifactKind::ALL
            .into_iter()
            .map(|kind| self.location(article_id, kind))
            .collect())
    }

    fn name(&self) -> &str {
        "local"
    }
}

/// Stores images under `<root>/<article_id>/images/`.
#[derive(Debug, Clone)]
pub struct LocalImageStager {
    root: PathBuf,
}

impl LocalImageStager {
    /// Create a stager rooted at `root` (usually the same root as the sink).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the images of one article.
    pub fn image_dir(&self, article_id: &str) -> PathBuf {
        self.root.join(article_id).join("images")
    }
}

impl ImageStager for LocalImageStager {
    fn stage(&self, article_id: &str, filename: &str, bytes: &[u8]) -> Result<String> {
        check_segment("article id", article_id)?;
        check_segment("file name", filename)?;

        let dir = self.image_dir(article_id);
        fs::create_dir_all(&dir)?;
        let path = dir.join(filename);

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(Error::AlreadyExists(filename.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        if let Err(e) = file.write_all(bytes) {
            drop(file);
            let _ = fs::remove_file(&path);
            return Err(e.into());
        }

        log::debug!("Staged image {}", path.display());
        Ok(format!("images/{}", filename))
    }
}

/// Rename `new` to `dest`, first moving an existing `dest` to `backup`.
/// Returns whether there was a file to back up.
fn swap_in(new: &Path, dest: &Path, backup: &Path) -> io::Result<bool> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    let had_old = dest.is_file();
    if had_old {
        if let Some(parent) = backup.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::rename(dest, backup)?;
    }
    if let Err(e) = fs::rename(new, dest) {
        if had_old {
            let _ = fs::rename(backup, dest);
        }
        return Err(e);
    }
    Ok(had_old)
}

/// Write to a temporary sibling, then rename over the final path.
fn write_atomic(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    let temp_path = PathBuf::from(temp);

    fs::write(&temp_path, content)?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}
