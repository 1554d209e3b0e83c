//! Rendering options and configuration.

/// Static stylesheet every article starts from.
pub const BASE_STYLESHEET: &str = include_str!("templates/styles.css");

/// Script that registers the ScrollTrigger plugin.
pub const BOOTSTRAP_SCRIPT: &str = include_str!("templates/bootstrap.js");

/// Title used when the article has none.
pub const DEFAULT_TITLE: &str = "My Animated Website";

/// Animation libraries loaded by the generated page.
pub const DEFAULT_LIBRARY_SCRIPTS: [&str; 2] = [
    "https://cdnjs.cloudflare.com/ajax/libs/gsap/3.12.5/gsap.min.js",
    "https://cdnjs.cloudflare.com/ajax/libs/gsap/3.12.5/ScrollTrigger.min.js",
];

/// Options for rendering the HTML, stylesheet, and animation program.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Title used when the article title is empty
    pub title_fallback: String,

    /// Directory images are referenced from, relative to the page
    pub image_base: String,

    /// Library scripts included before the animation program
    pub library_scripts: Vec<String>,

    /// Path of the stylesheet, relative to the page
    pub stylesheet_href: String,

    /// Path of the animation program, relative to the page
    pub script_href: String,

    /// Class of the scroll container wrapping every section. `None` lets the
    /// document scroll; triggers then bind to the document too.
    pub scroller_class: Option<String>,

    /// Static stylesheet prepended to the page rules
    pub base_stylesheet: String,

    /// Static script prepended to the triggers
    pub bootstrap_script: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback title.
    pub fn with_title_fallback(mut self, title: impl Into<String>) -> Self {
        self.title_fallback = title.into();
        self
    }

    /// Set the image base directory (or URL).
    pub fn with_image_base(mut self, base: impl Into<String>) -> Self {
        self.image_base = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Replace the library scripts.
    pub fn with_library_scripts<I, S>(mut self, scripts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.library_scripts = scripts.into_iter().map(Into::into).collect();
        self
    }

    /// Serve library scripts through a CDN mirror.
    ///
    /// `https://cdnjs.cloudflare.com/x.js` becomes
    /// `<mirror>/cdnjs.cloudflare.com/x.js`.
    pub fn with_cdn_mirror(mut self, mirror: &str) -> Self {
        let mirror = mirror.trim_end_matches('/');
        self.library_scripts = self
            .library_scripts
            .iter()
            .map(|url| match url.strip_prefix("https://") {
                Some(rest) => format!("{}/{}", mirror, rest),
                None => url.clone(),
            })
            .collect();
        self
    }

    /// Set the scroll container class (a class name, without the dot).
    pub fn with_scroller_class(mut self, class: impl Into<String>) -> Self {
        self.scroller_class = Some(class.into().trim_start_matches('.').to_string());
        self
    }

    /// Drop the scroll container and scroll the document itself.
    pub fn without_scroller(mut self) -> Self {
        self.scroller_class = None;
        self
    }

    /// Selector the scroll triggers bind to, if there is a container.
    pub fn scroller_selector(&self) -> Option<String> {
        self.scroller_class.as_ref().map(|class| format!(".{}", class))
    }

    /// Replace the base stylesheet.
    pub fn with_base_stylesheet(mut self, css: impl Into<String>) -> Self {
        self.base_stylesheet = css.into();
        self
    }

    /// Replace the bootstrap script.
    pub fn with_bootstrap_script(mut self, js: impl Into<String>) -> Self {
        self.bootstrap_script = js.into();
        self
    }

    /// Resolve the `src` of an image reference.
    ///
    /// URLs and paths are used as-is; bare file names live under the
    /// image base.
    pub fn image_src(&self, data: &str) -> String {
        if data.contains('/') || self.image_base.is_empty() {
            data.to_string()
        } else {
            format!("{}/{}", self.image_base, data)
        }
    }

    /// Title for an article, falling back when it is blank.
    pub fn title_for<'a>(&'a self, title: &'a str) -> &'a str {
        if title.trim().is_empty() {
            &self.title_fallback
        } else {
            title
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title_fallback: DEFAULT_TITLE.to_string(),
            image_base: "images".to_string(),
            library_scripts: DEFAULT_LIBRARY_SCRIPTS.iter().map(|s| s.to_string()).collect(),
            stylesheet_href: "css/styles.css".to_string(),
            script_href: "js/animation.js".to_string(),
            scroller_class: Some("scroller".to_string()),
            base_stylesheet: BASE_STYLESHEET.to_string(),
            bootstrap_script: BOOTSTRAP_SCRIPT.to_string(),
        }
    }
}
