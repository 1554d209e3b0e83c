//! Position grouping: a page's story per slot.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{Component, Page, Position};

/// One component placed in a slot, with the frame it came from.
#[derive(Debug, Clone, Copy)]
pub struct GroupEntry<'a> {
    /// The component
    pub component: &'a Component,
    /// Index of the frame the component belongs to
    pub frame_index: usize,
}

/// Components of one page, partitioned by slot.
///
/// Each slot sequence is in ascending frame order, and in insertion order
/// within a frame. Slots iterate in canonical order (left, right, top,
/// bottom, center).
#[derive(Debug, Clone, Default)]
pub struct ComponentGroups<'a> {
    groups: BTreeMap<Position, Vec<GroupEntry<'a>>>,
}

impl<'a> ComponentGroups<'a> {
    /// Create an empty grouping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component to its slot.
    pub fn add(&mut self, component: &'a Component, frame_index: usize) {
        self.groups
            .entry(component.position)
            .or_default()
            .push(GroupEntry {
                component,
                frame_index,
            });
    }

    /// Sequence of a single slot.
    pub fn get(&self, position: Position) -> Option<&[GroupEntry<'a>]> {
        self.groups.get(&position).map(Vec::as_slice)
    }

    /// Iterate over occupied slots and their sequences.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &[GroupEntry<'a>])> {
        self.groups
            .iter()
            .map(|(position, entries)| (*position, entries.as_slice()))
    }

    /// Occupied slots in canonical order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.groups.keys().copied()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of grouped components.
    pub fn component_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Length of the longest slot sequence, 0 when there are no groups.
    pub fn biggest_group_size(&self) -> usize {
        self.groups.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Compact, owned summary of the grouping.
    pub fn summary(&self) -> Vec<SlotSummary> {
        self.iter()
            .map(|(position, entries)| SlotSummary {
                position,
                component_ids: entries
                    .iter()
                    .map(|entry| entry.component.id.clone())
                    .collect(),
            })
            .collect()
    }
}

/// Owned view of one slot sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotSummary {
    /// Slot
    pub position: Position,
    /// Component ids in sequence order
    pub component_ids: Vec<String>,
}

/// Partition a page's components into slot sequences.
///
/// Fails with [`Error::InvalidPosition`] when a component sits in a slot
/// the page template does not provide.
pub fn group(page: &Page) -> Result<ComponentGroups<'_>> {
    let mut groups = ComponentGroups::new();

    for (frame_index, frame) in page.frames.iter().enumerate() {
        for component in &frame.components {
            if !page.layout.template.accepts(component.position) {
                return Err(Error::InvalidPosition {
                    component_id: component.id.clone(),
                    position: component.position.to_string(),
                    template: page.layout.template.to_string(),
                });
            }
            groups.add(component, frame_index);
        }
    }

    Ok(groups)
}
