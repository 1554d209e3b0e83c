//! Artifact sinks and image stagers.
//!
//! The compiler never touches storage. A finished [`ArtifactBundle`] is
//! handed to an [`ArtifactSink`], which commits the three artifacts together;
//! uploaded images go through an [`ImageStager`] before compilation, and the
//! reference it returns is written into `image.data`.
//!
//! # Example
//!
//! ```no_run
//! use scrolly::sink::{ArtifactSink, LocalSink};
//! use scrolly::{CompileOptions, RenderOptions};
//!
//! fn main() -> scrolly::Result<()> {
//!     let article = scrolly::parse_file("article.json")?;
//!     let bundle = scrolly::render::render_article(
//!         &article,
//!         &CompileOptions::default(),
//!         &RenderOptions::default(),
//!     )?;
//!
//!     let sink = LocalSink::new("output");
//!     for location in sink.commit(&article.id, &bundle)? {
//!         println!("{}", location.location);
//!     }
//!     Ok(())
//! }
//! ```

mod local;
mod memory;

pub use local::{LocalImageStager, LocalSink};
pub use memory::MemorySink;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::render::{ArtifactBundle, ArtifactKind};

/// Where a committed artifact ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactLocation {
    /// Artifact kind
    pub kind: ArtifactKind,
    /// Resolvable path or URL
    pub location: String,
}

impl ArtifactLocation {
    /// Create a location.
    pub fn new(kind: ArtifactKind, location: impl Into<String>) -> Self {
        Self {
            kind,
            location: location.into(),
        }
    }
}

/// Persists generated artifacts.
pub trait ArtifactSink: Send + Sync {
    /// Store a single artifact and return where it can be found.
    fn put(&self, article_id: &str, kind: ArtifactKind, bytes: &[u8]) -> Result<ArtifactLocation>;

    /// Store every artifact of a bundle.
    ///
    /// Either all artifacts become visible or none does. The default
    /// implementation puts them one by one and suits sinks without a
    /// staging area.
    fn commit(&self, article_id: &str, bundle: &ArtifactBundle) -> Result<Vec<ArtifactLocation>> {
        check_segment("article id", article_id)?;
        bundle
            .artifacts()
            .map(|(kind, content)| self.put(article_id, kind, content.as_bytes()))
            .collect()
    }

    /// Get the sink name (for logging/debugging).
    fn name(&self) -> &str;
}

/// Stores uploaded images next to an article.
pub trait ImageStager: Send + Sync {
    /// Store `bytes` under `filename` and return the reference to put in
    /// `image.data`.
    ///
    /// Fails with [`Error::AlreadyExists`] when the article already has an
    /// image with that name.
    fn stage(&self, article_id: &str, filename: &str, bytes: &[u8]) -> Result<String>;
}

/// Reject names that would escape their directory.
pub(crate) fn check_segment(what: &str, name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0'])
        || name.starts_with(".staging");
    if invalid {
        return Err(Error::Storage(format!("invalid {}: '{}'", what, name)));
    }
    Ok(())
}
