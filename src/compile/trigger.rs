//! Trigger compiler: binds a component's animation to its scroll window.

use serde::Serialize;

use super::animation::{AnimationScript, Phase};
use super::timing::Timing;

/// One scroll-trigger declaration for one component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriggerBinding {
    /// Component id
    pub component_id: String,
    /// Page the trigger is anchored to
    pub page_id: String,
    /// Frame the component belongs to
    pub frame_id: String,
    /// Scroll window within the pinned page
    pub timing: Timing,
    /// Animation played inside the window
    pub script: AnimationScript,
}

impl TriggerBinding {
    /// DOM id of the animated element.
    pub fn dom_id(&self) -> String {
        format!("comp-{}", self.component_id)
    }

    /// Render the binding as a GSAP timeline with a ScrollTrigger.
    ///
    /// `step_percent` is the scroll distance of one step; `scroller` is the
    /// selector of the scroll container, or `None` for the document.
    pub fn render(&self, step_percent: u32, scroller: Option<&str>, trace: bool) -> String {
        let dom_id = self.dom_id();
        let mut output = String::new();

        output.push_str(&self.script.render(&dom_id, Phase::Init));
        output.push('\n');
        output.push_str("gsap.timeline({\n");
        output.push_str("  scrollTrigger: {\n");
        output.push_str(&format!("    trigger: \"#page-{}\",\n", self.page_id));
        output.push_str(&format!(
            "    start: () => \"top+={}% top\",\n",
            self.timing.start_offset(step_percent)
        ));
        output.push_str(&format!(
            "    end: () => \"+={}%\",\n",
            self.timing.hold_distance(step_percent)
        ));
        output.push_str("    scrub: true,\n");
        if let Some(scroller) = scroller {
            output.push_str(&format!("    scroller: \"{}\",\n", scroller));
        }

        let callbacks = [
            ("onEnter", "Entering", Phase::Enter),
            ("onLeave", "Leaving", Phase::Exit),
            ("onEnterBack", "Entering back", Phase::EnterBack),
            ("onLeaveBack", "Leaving back", Phase::ExitBack),
        ];
        for (name, label, phase) in callbacks {
            let mut body = Vec::new();
            if trace {
                body.push(format!(
                    "console.log(\"{} {}-{}\");",
                    label, self.page_id, self.frame_id
                ));
            }
            let fragment = self.script.render(&dom_id, phase);
            if !fragment.is_empty() {
                body.push(fragment);
            }
            render_callback(&mut output, name, &body);
        }

        output.push_str("    toggleActions: \"play none reverse none\",\n");
        output.push_str("    invalidateOnRefresh: true,\n");
        output.push_str("  }\n");
        output.push_str("});\n");
        output
    }
}

fn render_callback(output: &mut String, name: &str, body: &[String]) {
    if body.is_empty() {
        output.push_str(&format!("    {}: () => {{}},\n", name));
        return;
    }
    output.push_str(&format!("    {}: () => {{\n", name));
    for line in body {
        output.push_str("      ");
        output.push_str(line);
        output.push('\n');
    }
    output.push_str("    },\n");
}
