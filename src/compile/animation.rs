//! Animation behaviors and the GSAP fragments they emit.

use std::fmt;

use serde::Serialize;

use super::options::SEGMENT_SECONDS;

/// Supported animation behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Behavior {
    /// Opacity 0 → 1
    Fade,
    /// Scale 0 → 1
    Zoom,
    /// Slide in from the left while fading in
    FlyInLeft,
    /// Slide in from the right while fading in
    FlyInRight,
    /// Slide up from below while fading in
    FlyInBottom,
    /// Fade in and stay; only hidden again when scrolling back past it
    Overlap,
}

impl Behavior {
    /// Every behavior, in menu order.
    pub const ALL: [Behavior; 6] = [
        Behavior::Fade,
        Behavior::Zoom,
        Behavior::FlyInLeft,
        Behavior::FlyInRight,
        Behavior::FlyInBottom,
        Behavior::Overlap,
    ];

    /// Resolve a transition name. Names match exactly.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fade" => Some(Behavior::Fade),
            "zoom" => Some(Behavior::Zoom),
            "fly-in-left" => Some(Behavior::FlyInLeft),
            "fly-in-right" => Some(Behavior::FlyInRight),
            "fly-in-bottom" => Some(Behavior::FlyInBottom),
            "overlap" => Some(Behavior::Overlap),
            _ => None,
        }
    }

    /// Transition name of the behavior.
    pub fn name(&self) -> &'static str {
        match self {
            Behavior::Fade => "fade",
            Behavior::Zoom => "zoom",
            Behavior::FlyInLeft => "fly-in-left",
            Behavior::FlyInRight => "fly-in-right",
            Behavior::FlyInBottom => "fly-in-bottom",
            Behavior::Overlap => "overlap",
        }
    }

    /// Names of every supported transition.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Behavior::name).collect()
    }

    /// GSAP properties for the visible and hidden states.
    fn states(&self) -> (&'static str, &'static str) {
        match self {
            Behavior::Fade | Behavior::Overlap => ("opacity: 1", "opacity: 0"),
            Behavior::Zoom => ("scale: 1", "scale: 0"),
            Behavior::FlyInLeft => ("opacity: 1, x: 0", "opacity: 0, x: -500"),
            Behavior::FlyInRight => ("opacity: 1, x: 0", "opacity: 0, x: 500"),
            Behavior::FlyInBottom => ("opacity: 1, y: 0", "opacity: 0, y: 500"),
        }
    }

    /// Extra properties carried by the enter/exit tweens.
    fn stacking(&self) -> (&'static str, &'static str) {
        match self {
            Behavior::Fade | Behavior::Overlap => (", zIndex: 1000", ", zIndex: 0"),
            _ => ("", ""),
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trigger callback a fragment is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Initial state, set once on load
    Init,
    /// Scrolling forward into the window
    Enter,
    /// Scrolling forward out of the window
    Exit,
    /// Scrolling backward into the window
    EnterBack,
    /// Scrolling backward out of the window
    ExitBack,
}

/// A behavior bound to an initial visibility and segment duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimationScript {
    /// Behavior
    pub behavior: Behavior,
    /// Whether the element is visible before any scrolling
    pub initially_visible: bool,
    /// Duration of each tween, in seconds
    pub segment_seconds: f64,
}

impl AnimationScript {
    /// Start building a script for `behavior`.
    pub fn builder(behavior: Behavior) -> AnimationScriptBuilder {
        AnimationScriptBuilder {
            behavior,
            initially_visible: true,
            segment_seconds: SEGMENT_SECONDS,
        }
    }

    /// Render the fragment for `phase`, targeting the element `#dom_id`.
    ///
    /// Returns an empty string when the behavior does nothing in that phase.
    pub fn render(&self, dom_id: &str, phase: Phase) -> String {
        let (shown, hidden) = self.behavior.states();
        let (raise, lower) = self.behavior.stacking();
        let secs = self.segment_seconds;

        match (self.behavior, phase) {
            (_, Phase::Init) => {
                let state = if self.initially_visible { shown } else { hidden };
                format!("gsap.set(\"#{}\", {{{}}});", dom_id, state)
            }
            (_, Phase::Enter) | (_, Phase::EnterBack) => {
                format!(
                    "gsap.to(\"#{}\", {{{}, duration: {}{}}});",
                    dom_id, shown, secs, raise
                )
            }
            (Behavior::Overlap, Phase::Exit) => String::new(),
            (_, Phase::Exit) | (_, Phase::ExitBack) => {
                format!(
                    "gsap.to(\"#{}\", {{{}, duration: {}{}}});",
                    dom_id, hidden, secs, lower
                )
            }
        }
    }
}

/// Builder for [`AnimationScript`].
#[derive(Debug, Clone, Copy)]
pub struct AnimationScriptBuilder {
    behavior: Behavior,
    initially_visible: bool,
    segment_seconds: f64,
}

impl AnimationScriptBuilder {
    /// Set whether the element starts visible.
    pub fn initial_visibility(mut self, visible: bool) -> Self {
        self.initially_visible = visible;
        self
    }

    /// Set the tween duration in seconds.
    pub fn segment_seconds(mut self, seconds: f64) -> Self {
        self.segment_seconds = seconds;
        self
    }

    /// Finish the script.
    pub fn build(self) -> AnimationScript {
        AnimationScript {
            behavior: self.behavior,
            initially_visible: self.initially_visible,
            segment_seconds: self.segment_seconds,
        }
    }
}
