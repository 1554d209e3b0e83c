//! Scroll timing of components within a pinned page.

use serde::Serialize;

/// Scroll window of one component, in steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timing {
    /// Steps scrolled before the component enters
    pub start_length: usize,
    /// Steps the component stays before it exits
    pub end_length: usize,
}

impl Timing {
    /// Timing of the component at `index` in a slot of length `slot_len`,
    /// on a page whose longest slot has `biggest` components.
    pub fn for_slot(index: usize, slot_len: usize, biggest: usize) -> Self {
        Self {
            start_length: index,
            end_length: end_length(index, slot_len, biggest),
        }
    }

    /// Scroll offset where the component enters, in percent.
    pub fn start_offset(&self, step_percent: u32) -> u64 {
        self.start_length as u64 * u64::from(step_percent)
    }

    /// Scroll distance the component stays, in percent.
    pub fn hold_distance(&self, step_percent: u32) -> u64 {
        self.end_length as u64 * u64::from(step_percent)
    }
}

/// Hold length of the component at `index` in its slot.
///
/// Every component but the last holds for one step. The last one holds
/// until the longest slot on the page finishes, so all slots end together.
pub fn end_length(index: usize, slot_len: usize, biggest: usize) -> usize {
    let is_last = index + 1 == slot_len;
    if !is_last || slot_len == biggest {
        return 1;
    }
    biggest.saturating_sub(index).max(1)
}
