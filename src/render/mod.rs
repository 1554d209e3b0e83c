//! Rendering of compiled articles into HTML, CSS, and JavaScript artifacts.

mod css;
mod html;
mod json;
mod options;
mod result;
mod script;

pub use css::{page_css, to_stylesheet};
pub use html::{page_html, to_html};
pub use json::{plan_to_json, to_json, JsonFormat};
pub use options::{
    RenderOptions, BASE_STYLESHEET, BOOTSTRAP_SCRIPT, DEFAULT_LIBRARY_SCRIPTS, DEFAULT_TITLE,
};
pub use result::{ArtifactBundle, ArtifactKind, CompileStats};
pub use script::{program_from_plan, to_animation_program};

use crate::compile::{compile_article, ArticlePlan, CompileOptions};
use crate::error::Result;
use crate::model::Article;

/// Compile an article and build all three artifacts in memory.
///
/// Nothing is returned unless every stage succeeds.
pub fn render_article(
    article: &Article,
    compile_options: &CompileOptions,
    options: &RenderOptions,
) -> Result<ArtifactBundle> {
    let plan = compile_article(article, compile_options)?;
    render_plan(article, &plan, options)
}

/// Build the artifacts of an article whose plan is already compiled.
pub fn render_plan(
    article: &Article,
    plan: &ArticlePlan,
    options: &RenderOptions,
) -> Result<ArtifactBundle> {
    let stylesheet = to_stylesheet(article, options)?;
    let html = to_html(article, options)?;
    let animation_program = program_from_plan(plan, options);
    let stats = collect_stats(article, plan);

    log::debug!(
        "Rendered article '{}': {} triggers, {} bytes of CSS, {} bytes of JS",
        article.id,
        stats.trigger_count,
        stylesheet.len(),
        animation_program.len()
    );

    Ok(ArtifactBundle {
        article_id: article.id.clone(),
        html,
        stylesheet,
        animation_program,
        stats,
    })
}

fn collect_stats(article: &Article, plan: &ArticlePlan) -> CompileStats {
    let mut stats = CompileStats {
        page_count: article.pages.len() as u32,
        pinned_page_count: plan.pin_count() as u32,
        trigger_count: plan.trigger_count() as u32,
        ..CompileStats::default()
    };
    for page in &article.pages {
        stats.frame_count += page.frames.len() as u32;
    }
    for component in article.components() {
        if component.is_image() {
            stats.image_count += 1;
        } else {
            stats.text_count += 1;
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Component, Frame, Image, Layout, Page, Position};

    fn article(transition: &str) -> Article {
        let mut page = Page::new("001", true, Layout::left_right());
        page.add_frame(
            Frame::new("1")
                .with_component(Component::text("001-1-1", Position::Left, "fade", "<p>a</p>"))
                .with_component(Component::image(
                    "001-1-2",
                    Position::Right,
                    transition,
                    Image::new("a.png"),
                )),
        );
        let mut article = Article::new("a1", "Story");
        article.add_page(page);
        article.add_page(Page::new("002", false, Layout::single()));
        article.stamp_membership();
        article
    }

    #[test]
    fn test_render_article() {
        let bundle =
            render_article(&article("zoom"), &CompileOptions::default(), &RenderOptions::default())
                .unwrap();
        assert_eq!(bundle.article_id, "a1");
        assert!(bundle.html.contains("<section id=\"page-002\">"));
        assert!(bundle.stylesheet.contains("#page-001-left {"));
        assert!(bundle.animation_program.contains("#comp-001-1-2"));
        assert_eq!(
            bundle.stats,
            CompileStats {
                page_count: 2,
                pinned_page_count: 1,
                frame_count: 1,
                text_count: 1,
                image_count: 1,
                trigger_count: 2,
            }
        );
    }

    #[test]
    fn test_render_fails_on_unknown_transition() {
        let result =
            render_article(&article("spin"), &CompileOptions::default(), &RenderOptions::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = render_article(&article("fade"), &CompileOptions::default(), &RenderOptions::default())
            .unwrap();
        let b = render_article(&article("fade"), &CompileOptions::default(), &RenderOptions::default())
            .unwrap();
        assert_eq!(a, b);
    }
}
