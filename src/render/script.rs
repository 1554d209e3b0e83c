//! Animation program: bootstrap followed by every page's triggers and pin.

use crate::compile::{compile_article, ArticlePlan, CompileOptions};
use crate::error::Result;
use crate::model::Article;

use super::options::RenderOptions;

/// Compile an article and render its animation program.
pub fn to_animation_program(
    article: &Article,
    compile_options: &CompileOptions,
    options: &RenderOptions,
) -> Result<String> {
    let plan = compile_article(article, compile_options)?;
    Ok(program_from_plan(&plan, options))
}

/// Render the animation program of an already compiled plan.
///
/// Triggers bind to the scroll container of `options`, the same one the
/// HTML and stylesheet are rendered with.
pub fn program_from_plan(plan: &ArticlePlan, options: &RenderOptions) -> String {
    let scroller = options.scroller_selector();
    let mut output = String::new();
    output.push_str(options.bootstrap_script.trim_end());
    output.push_str("\n\n");
    output.push_str(&plan.script(scroller.as_deref()));
    output
}
