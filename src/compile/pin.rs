//! Pin emitter: keeps a page fixed while its components animate.

use serde::Serialize;

/// Pin declaration for one pinnable page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PinBinding {
    /// Page to pin
    pub page_id: String,
    /// Number of steps the page stays pinned (the biggest group size)
    pub steps: usize,
    /// Scroll distance of one pinned step, in percent
    pub step_percent: u32,
}

impl PinBinding {
    /// Create a pin for `steps` steps of `step_percent` each.
    pub fn new(page_id: impl Into<String>, steps: usize, step_percent: u32) -> Self {
        Self {
            page_id: page_id.into(),
            steps,
            step_percent,
        }
    }

    /// Total pinned scroll distance, in percent.
    pub fn distance(&self) -> u64 {
        self.steps as u64 * u64::from(self.step_percent)
    }

    /// Render the `ScrollTrigger.create` call.
    pub fn render(&self, scroller: Option<&str>) -> String {
        let mut output = String::new();
        output.push_str("ScrollTrigger.create({\n");
        output.push_str(&format!("  trigger: \"#page-{}\",\n", self.page_id));
        output.push_str("  start: \"top top\",\n");
        output.push_str(&format!("  end: () => \"+={}%\",\n", self.distance()));
        output.push_str("  pin: true,\n");
        output.push_str("  pinSpacing: true,\n");
        output.push_str("  scrub: true,\n");
        if let Some(scroller) = scroller {
            output.push_str(&format!("  scroller: \"{}\",\n", scroller));
        }
        output.push_str("});\n");
        output
    }
}
