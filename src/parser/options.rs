//! Parsing options and configuration.

/// Options for parsing article payloads.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// How to treat component ids that do not follow `<pageId>-<frameId>-<localId>`
    pub id_convention: IdConvention,

    /// Reject articles without pages
    pub require_pages: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id convention check.
    pub fn with_id_convention(mut self, check: IdConvention) -> Self {
        self.id_convention = check;
        self
    }

    /// Fail on component ids that do not start with their page id.
    pub fn strict_ids(mut self) -> Self {
        self.id_convention = IdConvention::Enforce;
        self
    }

    /// Reject articles without pages.
    pub fn with_require_pages(mut self, require: bool) -> Self {
        self.require_pages = require;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            id_convention: IdConvention::Warn,
            require_pages: false,
        }
    }
}

/// Handling of the dash-delimited component id convention.
///
/// Membership is carried explicitly on each component, so the convention is
/// no longer load-bearing; it is still checked to catch editor bugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdConvention {
    /// Do not check
    Ignore,
    /// Log a warning on mismatch
    #[default]
    Warn,
    /// Fail with a schema error on mismatch
    Enforce,
}
