//! Page-level types.

use super::{Component, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A page of the article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page id
    pub id: String,

    /// Render with the pinning/animation machinery
    pub pinnable: bool,

    /// Layout template and slot sizes
    pub layout: Layout,

    /// Scroll steps, in order
    pub frames: Vec<Frame>,

    /// Scroll distance of one step in percent of the viewport height
    #[serde(rename = "stepPercent", default, skip_serializing_if = "Option::is_none")]
    pub step_percent: Option<u32>,
}

impl Page {
    /// Create a new page without frames.
    pub fn new(id: impl Into<String>, pinnable: bool, layout: Layout) -> Self {
        Self {
            id: id.into(),
            pinnable,
            layout,
            frames: Vec::new(),
            step_percent: None,
        }
    }

    /// Add a frame to the page.
    pub fn add_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Override the scroll step for this page.
    pub fn with_step_percent(mut self, percent: u32) -> Self {
        self.step_percent = Some(percent);
        self
    }

    /// Iterate over every component of the page in frame order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.frames.iter().flat_map(|frame| frame.components.iter())
    }

    /// Total number of components on the page.
    pub fn component_count(&self) -> usize {
        self.frames.iter().map(|frame| frame.components.len()).sum()
    }

    /// Check if the page has no components at all.
    pub fn is_empty(&self) -> bool {
        self.component_count() == 0
    }

    /// DOM id of the page section.
    pub fn dom_id(&self) -> String {
        format!("page-{}", self.id)
    }
}

/// A scroll step: the components that are co-visible at one point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    /// Frame id
    pub id: String,

    /// Components, in insertion order
    pub components: Vec<Component>,
}

impl Frame {
    /// Create an empty frame.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            components: Vec::new(),
        }
    }

    /// Add a component to the frame.
    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Builder-style variant of [`Frame::add_component`].
    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }
}

/// Page layout: template plus optional slot-size overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    /// Layout template
    pub template: LayoutTemplate,

    /// Height of the top slot (top-bottom)
    #[serde(rename = "heightTop", default)]
    pub height_top: Option<String>,

    /// Width of the left slot (left-right)
    #[serde(rename = "widthLeft", default)]
    pub width_left: Option<String>,

    /// Height of the bottom slot (top-bottom)
    #[serde(rename = "heightBottom", default)]
    pub height_bottom: Option<String>,

    /// Width of the right slot (left-right)
    #[serde(rename = "widthRight", default)]
    pub width_right: Option<String>,
}

impl Layout {
    /// Create a layout with default slot sizes.
    pub fn new(template: LayoutTemplate) -> Self {
        Self {
            template,
            height_top: None,
            width_left: None,
            height_bottom: None,
            width_right: None,
        }
    }

    /// Shorthand for a `left-right` layout.
    pub fn left_right() -> Self {
        Self::new(LayoutTemplate::LeftRight)
    }

    /// Shorthand for a `top-bottom` layout.
    pub fn top_bottom() -> Self {
        Self::new(LayoutTemplate::TopBottom)
    }

    /// Shorthand for a `single` layout.
    pub fn single() -> Self {
        Self::new(LayoutTemplate::Single)
    }

    /// Width of the left slot, defaulting to an even split.
    pub fn left_width(&self) -> &str {
        self.width_left.as_deref().unwrap_or("50%")
    }

    /// Width of the right slot, defaulting to an even split.
    pub fn right_width(&self) -> &str {
        self.width_right.as_deref().unwrap_or("50%")
    }

    /// Height of the top slot, defaulting to 20%.
    pub fn top_height(&self) -> &str {
        self.height_top.as_deref().unwrap_or("20%")
    }

    /// Height of the bottom slot, defaulting to 80%.
    pub fn bottom_height(&self) -> &str {
        self.height_bottom.as_deref().unwrap_or("80%")
    }
}

/// Layout template of a page.
///
/// Unrecognized template names are kept verbatim; they carry no layout
/// opinion (no CSS, no slot restriction).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LayoutTemplate {
    /// Two columns: left and right
    LeftRight,
    /// Two rows: top and bottom
    TopBottom,
    /// One centered slot
    Single,
    /// Anything else
    Other(String),
}

impl LayoutTemplate {
    /// Wire name of the template.
    pub fn as_str(&self) -> &str {
        match self {
            LayoutTemplate::LeftRight => "left-right",
            LayoutTemplate::TopBottom => "top-bottom",
            LayoutTemplate::Single => "single",
            LayoutTemplate::Other(name) => name,
        }
    }

    /// Slots this template provides, or `None` for unknown templates.
    pub fn slots(&self) -> Option<&'static [Position]> {
        match self {
            LayoutTemplate::LeftRight => Some(&[Position::Left, Position::Right]),
            LayoutTemplate::TopBottom => Some(&[Position::Top, Position::Bottom]),
            LayoutTemplate::Single => Some(&[Position::Center]),
            LayoutTemplate::Other(_) => None,
        }
    }

    /// Whether a component may occupy `position` under this template.
    pub fn accepts(&self, position: Position) -> bool {
        self.slots()
            .map(|slots| slots.contains(&position))
            .unwrap_or(true)
    }
}

impl From<String> for LayoutTemplate {
    fn from(name: String) -> Self {
        match name.as_str() {
            "left-right" => LayoutTemplate::LeftRight,
            "top-bottom" => LayoutTemplate::TopBottom,
            "single" => LayoutTemplate::Single,
            _ => LayoutTemplate::Other(name),
        }
    }
}

impl From<LayoutTemplate> for String {
    fn from(template: LayoutTemplate) -> Self {
        template.as_str().to_string()
    }
}

impl fmt::Display for LayoutTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
