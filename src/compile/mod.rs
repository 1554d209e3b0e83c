//! Scroll-animation compiler.
//!
//! Turns pages into [`PagePlan`]s: components are grouped by slot, every
//! component gets a scroll window and an animation behavior, and pinnable
//! pages get a pin spanning their longest slot.

pub mod animation;
pub mod grouping;
mod options;
pub mod pin;
mod plan;
pub mod timing;
pub mod trigger;

pub use animation::{AnimationScript, Behavior, Phase};
pub use grouping::{group, ComponentGroups, GroupEntry, SlotSummary};
pub use options::{CompileOptions, DurationMode, DEFAULT_STEP_PERCENT, SEGMENT_SECONDS};
pub use pin::PinBinding;
pub use plan::{ArticlePlan, PagePlan};
pub use timing::{end_length, Timing};
pub use trigger::TriggerBinding;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::{Article, Component, Page};

/// Resolve the animation script of a component.
///
/// Fails with [`Error::UnknownTransition`] for names outside the behavior set.
pub fn resolve_script(
    component: &Component,
    initially_visible: bool,
    options: &CompileOptions,
) -> Result<AnimationScript> {
    let behavior = Behavior::from_name(&component.animation.transition).ok_or_else(|| {
        Error::UnknownTransition {
            component_id: component.id.clone(),
            name: component.animation.transition.clone(),
        }
    })?;

    let duration = component.animation.duration;
    if options.duration_mode == DurationMode::Fixed && duration != 0 && duration != 330 {
        log::debug!(
            "Component {}: duration {}ms ignored, segments last {}s",
            component.id,
            duration,
            SEGMENT_SECONDS
        );
    }

    Ok(AnimationScript::builder(behavior)
        .initial_visibility(initially_visible)
        .segment_seconds(options.segment_seconds(duration))
        .build())
}

/// Compile the page at `page_index` in its article.
///
/// Only components of the first frame of the first page start visible.
pub fn compile_page(page: &Page, page_index: usize, options: &CompileOptions) -> Result<PagePlan> {
    let groups = group(page)?;
    let biggest = groups.biggest_group_size();
    let step_percent = options.page_step(page.step_percent);
    let pin_step_percent = options.page_pin_step(page.step_percent);

    let mut bindings = Vec::with_capacity(groups.component_count());
    for (_, entries) in groups.iter() {
        for (index, entry) in entries.iter().enumerate() {
            let component = entry.component;
            let visible = page_index == 0 && entry.frame_index == 0;
            let script = resolve_script(component, visible, options)?;
            if !page.pinnable {
                continue;
            }
            bindings.push(TriggerBinding {
                component_id: component.id.clone(),
                page_id: page.id.clone(),
                frame_id: page
                    .frames
                    .get(entry.frame_index)
                    .map(|f| f.id.clone())
                    .unwrap_or_default(),
                timing: Timing::for_slot(index, entries.len(), biggest),
                script,
            });
        }
    }

    let pin = (page.pinnable && biggest > 0)
        .then(|| PinBinding::new(page.id.clone(), biggest, pin_step_percent));

    log::debug!(
        "Compiled page '{}': {} slots, {} triggers, pin {}",
        page.id,
        groups.len(),
        bindings.len(),
        pin.as_ref().map_or(0, PinBinding::distance)
    );

    Ok(PagePlan {
        page_id: page.id.clone(),
        pinnable: page.pinnable,
        biggest_group_size: biggest,
        step_percent,
        pin_step_percent,
        slots: groups.summary(),
        bindings,
        pin,
    })
}

/// Compile every page of an article.
///
/// Pages compile in parallel when [`CompileOptions::parallel`] is set; the
/// result and the reported error are the same as in sequential mode.
pub fn compile_article(article: &Article, options: &CompileOptions) -> Result<ArticlePlan> {
    let results: Vec<Result<PagePlan>> = if options.parallel && article.pages.len() > 1 {
        article
            .pages
            .par_iter()
            .enumerate()
            .map(|(index, page)| compile_page(page, index, options))
            .collect()
    } else {
        article
            .pages
            .iter()
            .enumerate()
            .map(|(index, page)| compile_page(page, index, options))
            .collect()
    };

    let pages = results.into_iter().collect::<Result<Vec<_>>>()?;

    Ok(ArticlePlan {
        article_id: article.id.clone(),
        trace_callbacks: options.trace_callbacks,
        pages,
    })
}
