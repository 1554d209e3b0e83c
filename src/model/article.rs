//! Article-level types.

use super::{Component, Page};
use serde::{Deserialize, Serialize};

/// A scrollytelling article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Article id
    #[serde(rename = "articleId")]
    pub id: String,

    /// Article title
    #[serde(default)]
    pub title: String,

    /// Pages in reading order
    pub pages: Vec<Page>,
}

impl Article {
    /// Create a new empty article.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            pages: Vec::new(),
        }
    }

    /// Add a page to the article.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Check if the article has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate over every component of the article.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.pages.iter().flat_map(|page| page.components())
    }

    /// Total number of components in the article.
    pub fn component_count(&self) -> usize {
        self.pages.iter().map(|page| page.component_count()).sum()
    }

    /// Re-derive the page/frame membership carried on every component.
    ///
    /// The parser calls this once; call it again after building an article
    /// by hand.
    pub fn stamp_membership(&mut self) {
        for (page_index, page) in self.pages.iter_mut().enumerate() {
            for (frame_index, frame) in page.frames.iter_mut().enumerate() {
                for component in frame.components.iter_mut() {
                    component.page_id = page.id.clone();
                    component.page_index = page_index;
                    component.frame_id = frame.id.clone();
                    component.frame_index = frame_index;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Frame, Layout, Position};

    #[test]
    fn test_article_new() {
        let article = Article::new("a1", "Title");
        assert!(article.is_empty());
        assert_eq!(article.component_count(), 0);
    }

    #[test]
    fn test_stamp_membership() {
        let mut article = Article::new("a1", "Title");
        let mut page = Page::new("001", true, Layout::left_right());
        page.add_frame(Frame::new("1").with_component(Component::text(
            "001-1-1",
            Position::Left,
            "fade",
            "a",
        )));
        page.add_frame(Frame::new("2").with_component(Component::text(
            "001-2-1",
            Position::Left,
            "fade",
            "b",
        )));
        article.add_page(page);
        article.stamp_membership();

        let comps: Vec<_> = article.components().collect();
        assert_eq!(comps[0].frame_index, 0);
        assert_eq!(comps[1].frame_index, 1);
        assert_eq!(comps[1].frame_id, "2");
        assert_eq!(comps[1].page_id, "001");
    }
}
