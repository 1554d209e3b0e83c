//! Rendered artifacts with statistics.

use serde::{Deserialize, Serialize};

/// Kind of a generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// HTML skeleton
    Html,
    /// Layout stylesheet
    Stylesheet,
    /// Scroll-linked animation program
    AnimationProgram,
}

impl ArtifactKind {
    /// Every artifact kind, in commit order.
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Html,
        ArtifactKind::Stylesheet,
        ArtifactKind::AnimationProgram,
    ];

    /// Path of the artifact relative to the article root.
    pub fn relative_path(&self) -> &'static str {
        match self {
            ArtifactKind::Html => "index.html",
            ArtifactKind::Stylesheet => "css/styles.css",
            ArtifactKind::AnimationProgram => "js/animation.js",
        }
    }

    /// MIME type of the artifact.
    pub fn content_type(&self) -> &'static str {
        match self {
            ArtifactKind::Html => "text/html",
            ArtifactKind::Stylesheet => "text/css",
            ArtifactKind::AnimationProgram => "text/javascript",
        }
    }
}

/// The three artifacts of one article, built together in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactBundle {
    /// Article the artifacts belong to
    pub article_id: String,

    /// HTML skeleton
    pub html: String,

    /// Layout stylesheet
    pub stylesheet: String,

    /// Animation program
    pub animation_program: String,

    /// Compilation statistics
    pub stats: CompileStats,
}

impl ArtifactBundle {
    /// Content of one artifact.
    pub fn get(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Html => &self.html,
            ArtifactKind::Stylesheet => &self.stylesheet,
            ArtifactKind::AnimationProgram => &self.animation_program,
        }
    }

    /// Iterate over `(kind, content)` pairs in commit order.
    pub fn artifacts(&self) -> impl Iterator<Item = (ArtifactKind, &str)> {
        ArtifactKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Total size of the artifacts in bytes.
    pub fn total_len(&self) -> usize {
        self.artifacts().map(|(_, content)| content.len()).sum()
    }
}

/// Statistics collected while compiling an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileStats {
    /// Number of pages
    pub page_count: u32,

    /// Number of pinned pages
    pub pinned_page_count: u32,

    /// Number of frames
    pub frame_count: u32,

    /// Number of text components
    pub text_count: u32,

    /// Number of image components
    pub image_count: u32,

    /// Number of scroll triggers emitted
    pub trigger_count: u32,
}

impl CompileStats {
    /// Total number of components.
    pub fn component_count(&self) -> u32 {
        self.text_count + self.image_count
    }
}
