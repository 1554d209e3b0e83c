//! Compiled plans: everything needed to emit a page's animation program.

use serde::Serialize;

use super::grouping::SlotSummary;
use super::pin::PinBinding;
use super::trigger::TriggerBinding;

/// Compiled form of one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagePlan {
    /// Page id
    pub page_id: String,
    /// Whether the page is pinned and animated
    pub pinnable: bool,
    /// Length of the longest slot sequence
    pub biggest_group_size: usize,
    /// Effective trigger step, in percent
    pub step_percent: u32,
    /// Effective pin step, in percent
    pub pin_step_percent: u32,
    /// Slot sequences in canonical slot order
    pub slots: Vec<SlotSummary>,
    /// One trigger per component, slot by slot
    pub bindings: Vec<TriggerBinding>,
    /// Page pin, absent for static or empty pages
    pub pin: Option<PinBinding>,
}

impl PagePlan {
    /// Number of trigger bindings.
    pub fn trigger_count(&self) -> usize {
        self.bindings.len()
    }

    /// Binding of a single component.
    pub fn binding(&self, component_id: &str) -> Option<&TriggerBinding> {
        self.bindings.iter().find(|b| b.component_id == component_id)
    }

    /// Render the page's triggers followed by its pin.
    pub fn script(&self, scroller: Option<&str>, trace: bool) -> String {
        let mut output = String::new();
        for binding in &self.bindings {
            output.push_str(&binding.render(self.step_percent, scroller, trace));
            output.push('\n');
        }
        if let Some(pin) = &self.pin {
            output.push_str(&pin.render(scroller));
            output.push('\n');
        }
        output
    }
}

/// Compiled form of a whole article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticlePlan {
    /// Article id
    pub article_id: String,
    /// Whether callbacks log to the console
    pub trace_callbacks: bool,
    /// Pages in document order
    pub pages: Vec<PagePlan>,
}

impl ArticlePlan {
    /// Plan of a single page.
    pub fn page(&self, page_id: &str) -> Option<&PagePlan> {
        self.pages.iter().find(|p| p.page_id == page_id)
    }

    /// Binding of a single component, searching every page.
    pub fn binding(&self, component_id: &str) -> Option<&TriggerBinding> {
        self.pages.iter().find_map(|p| p.binding(component_id))
    }

    /// Total number of trigger bindings.
    pub fn trigger_count(&self) -> usize {
        self.pages.iter().map(PagePlan::trigger_count).sum()
    }

    /// Number of pinned pages.
    pub fn pin_count(&self) -> usize {
        self.pages.iter().filter(|p| p.pin.is_some()).count()
    }

    /// Render every page's triggers and pin, in page order.
    ///
    /// `scroller` is the selector of the scroll container, or `None` to bind
    /// to the document.
    pub fn script(&self, scroller: Option<&str>) -> String {
        self.pages
            .iter()
            .map(|page| page.script(scroller, self.trace_callbacks))
            .collect()
    }
}
