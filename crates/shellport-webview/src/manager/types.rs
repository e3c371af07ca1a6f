/// Configuration for creating a new web view.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial HTML content.
    pub html: Option<String>,
    pub transparent: bool,
    /// Always on in debug builds.
    pub devtools: bool,
    pub user_agent: Option<String>,
    pub clipboard: bool,
    pub autoplay: bool,
    /// Whether the view takes keyboard focus when created.
    pub focused: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            html: None,
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: Some(concat!("shellport/", env!("CARGO_PKG_VERSION")).to_string()),
            clipboard: true,
            autoplay: true,
            focused: false,
        }
    }
}

impl WebViewConfig {
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }

    /// The buffer view: blank page, focused.
    pub fn buffer() -> Self {
        Self {
            focused: true,
            ..Self::with_html("<html><body></body></html>")
        }
    }

    /// The minibuffer view: blank page.
    pub fn minibuffer() -> Self {
        Self::with_html("<html><body></body></html>")
    }
}
