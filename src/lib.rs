//! # scrolly
//!
//! Compiler from declarative scrollytelling articles to a static web page.
//!
//! An article is a list of pages; each page has a layout template and a
//! sequence of frames, and each frame places text or image components into
//! the template's slots. The compiler turns that description into:
//!
//! - an HTML skeleton with one section per page and one wrapper per slot,
//! - a layout stylesheet,
//! - a GSAP/ScrollTrigger program that pins every page while its
//!   components animate in and out as the reader scrolls.
//!
//! ## Quick Start
//!
//! ```no_run
//! use scrolly::sink::LocalSink;
//! use scrolly::Scrolly;
//!
//! fn main() -> scrolly::Result<()> {
//!     let result = Scrolly::new()
//!         .with_step_percent(100)
//!         .parse("article.json")?;
//!
//!     println!("{}", result.animation_program()?);
//!     result.commit(&LocalSink::new("output"))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Slot grouping**: components are sequenced per slot across frames
//! - **Scroll timing**: every slot finishes together at the end of the pin
//! - **Animation behaviors**: fade, zoom, fly-in (left/right/bottom), overlap
//! - **Atomic output**: all artifacts are built in memory and committed together
//! - **Parallel processing**: uses Rayon for multi-page articles

pub mod compile;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod sink;

// Re-export commonly used types
pub use compile::{
    compile_article, compile_page, ArticlePlan, Behavior, CompileOptions, DurationMode, PagePlan,
    TriggerBinding,
};
pub use error::{Error, Result};
pub use model::{
    Animation, Article, Component, ComponentType, Frame, Image, Layout, LayoutTemplate, Page,
    Position,
};
pub use parser::{ArticleParser, IdConvention, ParseOptions};
pub use render::{ArtifactBundle, ArtifactKind, CompileStats, JsonFormat, RenderOptions};
pub use sink::{ArtifactLocation, ArtifactSink, ImageStager};

use std::io::Read;
use std::path::Path;

/// Parse and validate an article from a JSON string.
///
/// # Example
///
/// ```
/// let article = scrolly::parse_str(r#"{"articleId": "a1", "title": "T", "pages": []}"#).unwrap();
/// assert_eq!(article.id, "a1");
/// ```
pub fn parse_str(json: &str) -> Result<Article> {
    ArticleParser::from_json(json)?.parse()
}

/// Parse and validate an article from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Article> {
    ArticleParser::from_bytes(data)?.parse()
}

/// Parse and validate an article from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Article> {
    ArticleParser::from_bytes_with_options(data, options)?.parse()
}

/// Parse and validate an article file.
///
/// # Example
///
/// ```no_run
/// use scrolly::parse_file;
///
/// let article = parse_file("article.json").unwrap();
/// println!("Pages: {}", article.page_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Article> {
    ArticleParser::open(path)?.parse()
}

/// Parse and validate an article file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Article> {
    ArticleParser::open_with_options(path, options)?.parse()
}

/// Parse and validate an article from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Article> {
    ArticleParser::from_reader(reader)?.parse()
}

/// Parse a JSON article and build all artifacts with default options.
///
/// # Example
///
/// ```no_run
/// let json = std::fs::read_to_string("article.json").unwrap();
/// let bundle = scrolly::compile_str(&json).unwrap();
/// std::fs::write("animation.js", &bundle.animation_program).unwrap();
/// ```
pub fn compile_str(json: &str) -> Result<ArtifactBundle> {
    let article = parse_str(json)?;
    render::render_article(&article, &CompileOptions::default(), &RenderOptions::default())
}

/// Parse an article file and build all artifacts with default options.
pub fn compile_file<P: AsRef<Path>>(path: P) -> Result<ArtifactBundle> {
    let article = parse_file(path)?;
    render::render_article(&article, &CompileOptions::default(), &RenderOptions::default())
}

/// Read an article file asynchronously and build all artifacts.
///
/// Only reading is asynchronous; compilation itself is CPU-bound.
#[cfg(feature = "async")]
pub async fn compile_file_async<P: AsRef<Path>>(path: P) -> Result<ArtifactBundle> {
    let data = tokio::fs::read(path.as_ref()).await?;
    let article = parse_bytes(&data)?;
    render::render_article(&article, &CompileOptions::default(), &RenderOptions::default())
}

/// Builder for parsing, compiling, and rendering articles.
///
/// # Example
///
/// ```no_run
/// use scrolly::{DurationMode, Scrolly};
///
/// let css = Scrolly::new()
///     .strict_ids()
///     .with_pin_step_percent(50)
///     .with_duration_mode(DurationMode::FromAnimation)
///     .with_image_base("https://cdn.example.com/images")
///     .parse("article.json")?
///     .stylesheet()?;
/// # Ok::<(), scrolly::Error>(())
/// ```
pub struct Scrolly {
    parse_options: ParseOptions,
    compile_options: CompileOptions,
    render_options: RenderOptions,
}

impl Scrolly {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            compile_options: CompileOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Reject component ids that do not follow `<pageId>-<frameId>-<localId>`.
    pub fn strict_ids(mut self) -> Self {
        self.parse_options = self.parse_options.strict_ids();
        self
    }

    /// Set the default scroll step in percent of the viewport height.
    pub fn with_step_percent(mut self, percent: u32) -> Self {
        self.compile_options = self.compile_options.with_step_percent(percent);
        self
    }

    /// Set the pin step in percent of the viewport height.
    pub fn with_pin_step_percent(mut self, percent: u32) -> Self {
        self.compile_options = self.compile_options.with_pin_step_percent(percent);
        self
    }

    /// Set the scroll container class. The HTML wrapper, its CSS rules and
    /// the trigger `scroller` all follow it.
    pub fn with_scroller(mut self, class: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_scroller_class(class);
        self
    }

    /// Scroll the document instead of a container.
    pub fn without_scroller(mut self) -> Self {
        self.render_options = self.render_options.without_scroller();
        self
    }

    /// Set where segment durations come from.
    pub fn with_duration_mode(mut self, mode: DurationMode) -> Self {
        self.compile_options = self.compile_options.with_duration_mode(mode);
        self
    }

    /// Log every trigger callback to the browser console.
    pub fn with_trace_callbacks(mut self) -> Self {
        self.compile_options = self.compile_options.with_trace_callbacks(true);
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.compile_options = self.compile_options.sequential();
        self
    }

    /// Set the title used for untitled articles.
    pub fn with_title_fallback(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_title_fallback(title);
        self
    }

    /// Set the directory or URL images are served from.
    pub fn with_image_base(mut self, base: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_image_base(base);
        self
    }

    /// Serve library scripts through a CDN mirror.
    pub fn with_cdn_mirror(mut self, mirror: &str) -> Self {
        self.render_options = self.render_options.with_cdn_mirror(mirror);
        self
    }

    /// Parse an article file.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<ScrollyResult> {
        let parser = ArticleParser::open_with_options(path, self.parse_options.clone())?;
        self.finish(parser)
    }

    /// Parse an article from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<ScrollyResult> {
        let parser = ArticleParser::from_bytes_with_options(data, self.parse_options.clone())?;
        self.finish(parser)
    }

    /// Parse an article from a JSON string.
    pub fn parse_str(self, json: &str) -> Result<ScrollyResult> {
        self.parse_bytes(json.as_bytes())
    }

    /// Validate an article built in code.
    pub fn load(self, article: Article) -> Result<ScrollyResult> {
        let parser = ArticleParser::from_article(article, self.parse_options.clone());
        self.finish(parser)
    }

    fn finish(self, parser: ArticleParser) -> Result<ScrollyResult> {
        let article = parser.parse()?;
        Ok(ScrollyResult {
            article,
            compile_options: self.compile_options,
            render_options: self.render_options,
        })
    }
}

impl Default for Scrolly {
    fn default() -> Self {
        Self::new()
    }
}

/// A validated article together with the options to compile it with.
pub struct ScrollyResult {
    /// The parsed article
    pub article: Article,
    compile_options: CompileOptions,
    render_options: RenderOptions,
}

impl ScrollyResult {
    /// Compile the scroll plan.
    pub fn plan(&self) -> Result<ArticlePlan> {
        compile_article(&self.article, &self.compile_options)
    }

    /// Render the layout stylesheet.
    pub fn stylesheet(&self) -> Result<String> {
        render::to_stylesheet(&self.article, &self.render_options)
    }

    /// Render the animation program.
    pub fn animation_program(&self) -> Result<String> {
        render::to_animation_program(&self.article, &self.compile_options, &self.render_options)
    }

    /// Render the HTML skeleton.
    pub fn html(&self) -> Result<String> {
        render::to_html(&self.article, &self.render_options)
    }

    /// Build all three artifacts.
    pub fn bundle(&self) -> Result<ArtifactBundle> {
        render::render_article(&self.article, &self.compile_options, &self.render_options)
    }

    /// Build all artifacts and commit them to `sink`.
    ///
    /// Nothing reaches the sink if any stage fails.
    pub fn commit(&self, sink: &dyn ArtifactSink) -> Result<Vec<ArtifactLocation>> {
        let bundle = self.bundle()?;
        log::debug!("Committing article '{}' to {} sink", self.article.id, sink.name());
        sink.commit(&self.article.id, &bundle)
    }

    /// Convert the article back to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.article, format)
    }

    /// Convert the compiled plan to JSON.
    pub fn plan_json(&self, format: JsonFormat) -> Result<String> {
        render::plan_to_json(&self.plan()?, format)
    }

    /// Get the article.
    pub fn article(&self) -> &Article {
        &self.article
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    const ARTICLE: &str = r#"{
        "articleId": "a1",
        "title": "",
        "pages": [{
            "id": "001",
            "pinnable": true,
            "layout": {"template": "single"},
            "frames": [{"id": "1", "components": [
                {"id": "001-1-1", "type": "text", "position": "center",
                 "animation": "fade", "contentHtml": "<p>Hi</p>"}
            ]}]
        }]
    }"#;

    #[test]
    fn test_scrolly_builder() {
        let scrolly = Scrolly::new()
            .strict_ids()
            .with_pin_step_percent(50)
            .without_scroller()
            .sequential()
            .with_title_fallback("Untitled");

        assert_eq!(scrolly.parse_options.id_convention, IdConvention::Enforce);
        assert_eq!(scrolly.compile_options.pin_step_percent, Some(50));
        assert!(scrolly.render_options.scroller_class.is_none());
        assert!(!scrolly.compile_options.parallel);
        assert_eq!(scrolly.render_options.title_fallback, "Untitled");
    }

    #[test]
    fn test_parse_str_and_compile() {
        let article = parse_str(ARTICLE).unwrap();
        assert_eq!(article.component_count(), 1);

        let bundle = compile_str(ARTICLE).unwrap();
        assert!(bundle.html.contains("<title>My Animated Website</title>"));
        assert!(bundle.stylesheet.contains(".page-001-center-component"));
        assert!(bundle.animation_program.contains("ScrollTrigger.create("));
    }

    #[test]
    fn test_parse_bytes_invalid_json() {
        assert!(parse_bytes(b"not json").is_err());
        assert!(Scrolly::new().parse_bytes(b"{").is_err());
    }

    #[test]
    fn test_result_commit() {
        let result = Scrolly::new().parse_str(ARTICLE).unwrap();
        let sink = MemorySink::new();
        let locations = result.commit(&sink).unwrap();
        assert_eq!(locations.len(), 3);
        assert_eq!(
            sink.get("a1", ArtifactKind::Stylesheet).unwrap(),
            result.stylesheet().unwrap()
        );
    }

    #[test]
    fn test_result_commit_unknown_transition() {
        let json = ARTICLE.replace("\"animation\": \"fade\"", "\"animation\": \"spin\"");
        let result = Scrolly::new().parse_str(&json).unwrap();
        let sink = MemorySink::new();
        assert!(result.commit(&sink).is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_plan_json() {
        let result = Scrolly::new().parse_str(ARTICLE).unwrap();
        let json = result.plan_json(JsonFormat::Compact).unwrap();
        assert!(json.contains("\"article_id\":\"a1\""));
    }
}
