//! Compilation options.

/// Default scroll distance of one step, in percent of the viewport height.
pub const DEFAULT_STEP_PERCENT: u32 = 100;

/// Fixed duration of one animation segment, in seconds.
pub const SEGMENT_SECONDS: f64 = 0.33;

/// Options controlling how pages are compiled into scroll triggers.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Scroll distance of one step, in percent of the viewport height.
    /// Pages may override it with `stepPercent`.
    pub step_percent: u32,

    /// Scroll distance reserved per step by the page pin. `None` uses the
    /// page's effective step, so the pin spans exactly the trigger windows.
    pub pin_step_percent: Option<u32>,

    /// Where animation segment durations come from
    pub duration_mode: DurationMode,

    /// Emit `console.log` tracing in every trigger callback
    pub trace_callbacks: bool,

    /// Compile pages in parallel
    pub parallel: bool,
}

impl CompileOptions {
    /// Create new compile options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default scroll step.
    pub fn with_step_percent(mut self, percent: u32) -> Self {
        self.step_percent = percent.max(1);
        self
    }

    /// Set the pin step explicitly (e.g. 50 for a pin that releases halfway).
    pub fn with_pin_step_percent(mut self, percent: u32) -> Self {
        self.pin_step_percent = Some(percent.max(1));
        self
    }

    /// Set the duration mode.
    pub fn with_duration_mode(mut self, mode: DurationMode) -> Self {
        self.duration_mode = mode;
        self
    }

    /// Enable or disable callback tracing.
    pub fn with_trace_callbacks(mut self, trace: bool) -> Self {
        self.trace_callbacks = trace;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Effective step for a page, honouring its override.
    pub fn page_step(&self, page_override: Option<u32>) -> u32 {
        page_override.unwrap_or(self.step_percent)
    }

    /// Effective pin step for a page.
    pub fn page_pin_step(&self, page_override: Option<u32>) -> u32 {
        self.pin_step_percent
            .unwrap_or_else(|| self.page_step(page_override))
    }

    /// Segment duration in seconds for a requested duration in milliseconds.
    pub fn segment_seconds(&self, requested_ms: u32) -> f64 {
        match self.duration_mode {
            DurationMode::Fixed => SEGMENT_SECONDS,
            DurationMode::FromAnimation if requested_ms > 0 => f64::from(requested_ms) / 1000.0,
            DurationMode::FromAnimation => SEGMENT_SECONDS,
        }
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            step_percent: DEFAULT_STEP_PERCENT,
            pin_step_percent: None,
            duration_mode: DurationMode::Fixed,
            trace_callbacks: false,
            parallel: true,
        }
    }
}

/// Source of animation segment durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationMode {
    /// Every segment lasts 0.33 s; `Animation.duration` is not used
    #[default]
    Fixed,
    /// Use `Animation.duration` (ms) when it is positive
    FromAnimation,
}
