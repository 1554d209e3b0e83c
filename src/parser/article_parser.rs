//! Article payload parser.

use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::model::Article;

use super::options::ParseOptions;
use super::validate::validate_article;

/// Parser for JSON article payloads.
///
/// Deserialization errors and schema violations are reported before any
/// compilation starts.
pub struct ArticleParser {
    article: Article,
    options: ParseOptions,
}

impl ArticleParser {
    /// Open a JSON payload file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a JSON payload file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let data = std::fs::read(path.as_ref())?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Parse a payload from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a payload from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let article: Article = serde_json::from_slice(data)?;
        Ok(Self { article, options })
    }

    /// Parse a payload from a string.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_bytes_with_options(json.as_bytes(), ParseOptions::default())
    }

    /// Parse a payload from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a payload from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Wrap an article that was built in code.
    pub fn from_article(article: Article, options: ParseOptions) -> Self {
        Self { article, options }
    }

    /// Validate the payload and return the article with membership stamped
    /// on every component.
    pub fn parse(self) -> Result<Article> {
        let mut article = self.article;
        validate_article(&article, &self.options)?;
        article.stamp_membership();

        log::debug!(
            "Parsed article '{}': {} pages, {} components",
            article.id,
            article.page_count(),
            article.component_count()
        );

        Ok(article)
    }
}
