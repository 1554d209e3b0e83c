//! Schema checks that serde alone cannot express.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::{Article, Component, ComponentType, Layout, Page};

use super::{IdConvention, ParseOptions};

fn css_length_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(0|\d+(\.\d+)?(%|px|vh|vw|em|rem))$").unwrap())
}

fn identifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_-]*$").unwrap())
}

/// Check that a slot size is a plain CSS length (`50%`, `320px`, `40vh`, ...).
pub fn is_css_length(value: &str) -> bool {
    css_length_regex().is_match(value.trim())
}

/// Check that an id can be embedded in DOM ids, CSS selectors and paths.
pub fn is_dom_identifier(value: &str) -> bool {
    identifier_regex().is_match(value)
}

/// Validate a freshly deserialized article.
pub(crate) fn validate_article(article: &Article, options: &ParseOptions) -> Result<()> {
    if !is_dom_identifier(&article.id) {
        return Err(Error::schema(
            "articleId",
            format!("'{}' is not a valid identifier", article.id),
        ));
    }
    if options.require_pages && article.pages.is_empty() {
        return Err(Error::schema("pages", "article has no pages"));
    }

    let mut page_ids = HashSet::new();
    let mut component_ids = HashSet::new();

    for (page_index, page) in article.pages.iter().enumerate() {
        let path = format!("pages[{}]", page_index);
        validate_page(page, &path)?;
        if !page_ids.insert(page.id.as_str()) {
            return Err(Error::schema(
                format!("{}.id", path),
                format!("duplicate page id '{}'", page.id),
            ));
        }

        for (frame_index, frame) in page.frames.iter().enumerate() {
            let frame_path = format!("{}.frames[{}]", path, frame_index);
            if !is_dom_identifier(&frame.id) {
                return Err(Error::schema(
                    format!("{}.id", frame_path),
                    format!("'{}' is not a valid identifier", frame.id),
                ));
            }

            for (comp_index, component) in frame.components.iter().enumerate() {
                let comp_path = format!("{}.components[{}]", frame_path, comp_index);
                validate_component(component, &comp_path)?;
                if !component_ids.insert(component.id.as_str()) {
                    return Err(Error::schema(
                        format!("{}.id", comp_path),
                        format!("duplicate component id '{}'", component.id),
                    ));
                }
                check_id_convention(component, page, &comp_path, options.id_convention)?;
            }
        }
    }

    Ok(())
}

fn validate_page(page: &Page, path: &str) -> Result<()> {
    if !is_dom_identifier(&page.id) {
        return Err(Error::schema(
            format!("{}.id", path),
            format!("'{}' is not a valid identifier", page.id),
        ));
    }
    if page.step_percent == Some(0) {
        return Err(Error::schema(
            format!("{}.stepPercent", path),
            "step must be greater than zero",
        ));
    }
    validate_layout(&page.layout, &format!("{}.layout", path))
}

fn validate_layout(layout: &Layout, path: &str) -> Result<()> {
    let overrides = [
        ("heightTop", &layout.height_top),
        ("widthLeft", &layout.width_left),
        ("heightBottom", &layout.height_bottom),
        ("widthRight", &layout.width_right),
    ];
    for (name, value) in overrides {
        if let Some(value) = value {
            if !is_css_length(value) {
                return Err(Error::schema(
                    format!("{}.{}", path, name),
                    format!("'{}' is not a CSS length", value),
                ));
            }
        }
    }
    Ok(())
}

fn validate_component(component: &Component, path: &str) -> Result<()> {
    if !is_dom_identifier(&component.id) {
        return Err(Error::schema(
            format!("{}.id", path),
            format!("'{}' is not a valid identifier", component.id),
        ));
    }
    if component.animation.transition.trim().is_empty() {
        return Err(Error::schema(
            format!("{}.animation.transition", path),
            "transition must be non-empty",
        ));
    }

    match component.kind {
        ComponentType::Text => {
            if component.content_html.is_none() {
                return Err(Error::schema(
                    path,
                    "text component requires contentHtml",
                ));
            }
            if component.image.is_some() {
                return Err(Error::schema(
                    path,
                    "text component must not carry an image",
                ));
            }
        }
        ComponentType::Image => {
            let has_data = component
                .image
                .as_ref()
                .and_then(|img| img.data.as_deref())
                .map(|data| !data.trim().is_empty())
                .unwrap_or(false);
            if !has_data {
                return Err(Error::schema(
                    format!("{}.image.data", path),
                    "image component requires image data",
                ));
            }
            if component.content_html.is_some() {
                return Err(Error::schema(
                    path,
                    "image component must not carry contentHtml",
                ));
            }
        }
    }

    Ok(())
}

fn check_id_convention(
    component: &Component,
    page: &Page,
    path: &str,
    check: IdConvention,
) -> Result<()> {
    if check == IdConvention::Ignore {
        return Ok(());
    }

    let mut segments = component.id.split('-');
    let follows = segments.next() == Some(page.id.as_str()) && segments.count() >= 2;
    if follows {
        return Ok(());
    }

    match check {
        IdConvention::Enforce => Err(Error::schema(
            format!("{}.id", path),
            format!(
                "'{}' does not follow <pageId>-<frameId>-<localId> for page '{}'",
                component.id, page.id
            ),
        )),
        _ => {
            log::warn!(
                "Component id '{}' does not follow <pageId>-<frameId>-<localId> for page '{}'",
                component.id,
                page.id
            );
            Ok(())
        }
    }
}
