//! Component-level types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A positioned piece of content inside a frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    /// Component id, conventionally `<pageId>-<frameId>-<localId>`
    pub id: String,

    /// Content type
    #[serde(rename = "type")]
    pub kind: ComponentType,

    /// Layout slot the component occupies
    pub position: Position,

    /// Animation intent
    pub animation: Animation,

    /// Markup for text components (trusted, pre-sanitized)
    #[serde(rename = "contentHtml", default, skip_serializing_if = "Option::is_none")]
    pub content_html: Option<String>,

    /// Image reference for image components
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,

    /// Id of the owning page (stamped by the parser)
    #[serde(skip)]
    pub page_id: String,

    /// Index of the owning page within the article (stamped by the parser)
    #[serde(skip)]
    pub page_index: usize,

    /// Id of the owning frame (stamped by the parser)
    #[serde(skip)]
    pub frame_id: String,

    /// Index of the owning frame within its page (stamped by the parser)
    #[serde(skip)]
    pub frame_index: usize,
}

impl Component {
    /// Create a text component.
    pub fn text(
        id: impl Into<String>,
        position: Position,
        transition: impl Into<String>,
        html: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: ComponentType::Text,
            position,
            animation: Animation::new(transition),
            content_html: Some(html.into()),
            image: None,
            page_id: String::new(),
            page_index: 0,
            frame_id: String::new(),
            frame_index: 0,
        }
    }

    /// Create an image component.
    pub fn image(
        id: impl Into<String>,
        position: Position,
        transition: impl Into<String>,
        image: Image,
    ) -> Self {
        Self {
            id: id.into(),
            kind: ComponentType::Image,
            position,
            animation: Animation::new(transition),
            content_html: None,
            image: Some(image),
            page_id: String::new(),
            page_index: 0,
            frame_id: String::new(),
            frame_index: 0,
        }
    }

    /// Check if this is an image component.
    pub fn is_image(&self) -> bool {
        self.kind == ComponentType::Image
    }

    /// Check if this is a text component.
    pub fn is_text(&self) -> bool {
        self.kind == ComponentType::Text
    }

    /// Whether the image should be shown fullscreen. False for text.
    pub fn is_fullscreen_image(&self) -> bool {
        self.image
            .as_ref()
            .map(|img| img.is_display_fullscreen)
            .unwrap_or(false)
    }

    /// DOM id used for this component in the generated markup.
    pub fn dom_id(&self) -> String {
        format!("comp-{}", self.id)
    }
}

/// Component content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    /// Rich text markup
    Text,
    /// An image with optional caption
    Image,
}

impl ComponentType {
    /// Wire name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Text => "text",
            ComponentType::Image => "image",
        }
    }
}

/// Named layout slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Left column (left-right)
    Left,
    /// Right column (left-right)
    Right,
    /// Upper row (top-bottom)
    Top,
    /// Lower row (top-bottom)
    Bottom,
    /// The only slot (single)
    Center,
}

impl Position {
    /// All positions in canonical emission order.
    pub const ALL: [Position; 5] = [
        Position::Left,
        Position::Right,
        Position::Top,
        Position::Bottom,
        Position::Center,
    ];

    /// Wire name of the position.
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Left => "left",
            Position::Right => "right",
            Position::Top => "top",
            Position::Bottom => "bottom",
            Position::Center => "center",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image payload of an image component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Image {
    /// Staged image reference (file name, relative path, or URL)
    #[serde(default)]
    pub data: Option<String>,

    /// Optional caption
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Display the image edge to edge
    #[serde(rename = "isDisplayFullscreen", default)]
    pub is_display_fullscreen: bool,
}

impl Image {
    /// Create an image reference.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            caption: None,
            is_display_fullscreen: false,
        }
    }

    /// Set the caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Mark the image as fullscreen.
    pub fn fullscreen(mut self) -> Self {
        self.is_display_fullscreen = true;
        self
    }
}

/// Animation intent of a component.
///
/// Older payloads send only the transition name as a string; both forms are
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AnimationWire")]
pub struct Animation {
    /// Behavior name (e.g. `fade`, `fly-in-left`)
    pub transition: String,

    /// Requested duration in milliseconds
    pub duration: u32,

    /// Pin the element during animation
    pub pin: bool,

    /// Legacy pinned section id
    #[serde(rename = "pinnedSectionId", skip_serializing_if = "Option::is_none")]
    pub pinned_section_id: Option<String>,
}

impl Animation {
    /// Create an animation with just a transition name.
    pub fn new(transition: impl Into<String>) -> Self {
        Self {
            transition: transition.into(),
            duration: 0,
            pin: false,
            pinned_section_id: None,
        }
    }

    /// Set the requested duration in milliseconds.
    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration = duration_ms;
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnimationWire {
    Name(String),
    Full {
        transition: String,
        #[serde(default)]
        duration: u32,
        #[serde(default)]
        pin: bool,
        #[serde(rename = "pinnedSectionId", default)]
        pinned_section_id: Option<String>,
    },
}

impl From<AnimationWire> for Animation {
    fn from(wire: AnimationWire) -> Self {
        match wire {
            AnimationWire::Name(transition) => Animation::new(transition),
            AnimationWire::Full {
                transition,
                duration,
                pin,
                pinned_section_id,
            } => Animation {
                transition,
                duration,
                pin,
                pinned_section_id,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_accepts_both_forms() {
        let short: Animation = serde_json::from_str("\"fade\"").unwrap();
        assert_eq!(short.transition, "fade");
        assert_eq!(short.duration, 0);

        let full: Animation = serde_json::from_str(
            r#"{"transition":"zoom","duration":300,"pin":true,"pinnedSectionId":"s-1"}"#,
        )
        .unwrap();
        assert_eq!(full.transition, "zoom");
        assert_eq!(full.duration, 300);
        assert!(full.pin);
        assert_eq!(full.pinned_section_id.as_deref(), Some("s-1"));
    }

    #[test]
    fn test_component_wire_names() {
        let json = r#"{
            "id": "001-1-2",
            "type": "image",
            "position": "bottom",
            "animation": "zoom",
            "image": {"data": "a.png", "caption": "A", "isDisplayFullscreen": true}
        }"#;
        let comp: Component = serde_json::from_str(json).unwrap();
        assert!(comp.is_image());
        assert_eq!(comp.position, Position::Bottom);
        assert!(comp.is_fullscreen_image());
        assert_eq!(comp.dom_id(), "comp-001-1-2");
    }

    #[test]
    fn test_unknown_position_is_rejected() {
        let json = r#"{"id":"a-b-c","type":"text","position":"middle","animation":"fade"}"#;
        assert!(serde_json::from_str::<Component>(json).is_err());
    }

    #[test]
    fn test_position_names() {
        let names: Vec<&str> = Position::ALL.iter().map(Position::as_str).collect();
        assert_eq!(names, vec!["left", "right", "top", "bottom", "center"]);
        for position in Position::ALL {
            let wire = serde_json::to_string(&position).unwrap();
            assert_eq!(wire, format!("\"{}\"", position));
        }
    }
}
