//! Runtime configuration.

/// How a component is hosted.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Display name, used in log lines.
    pub name: &'static str,

    /// Upper bound on render passes while settling one event. Effects that
    /// keep writing state hit this instead of looping forever.
    pub max_settle_passes: usize,

    /// Quit when Escape is pressed with nothing focused.
    pub quit_on_escape: bool,

    /// Size used for layout and hit testing before the terminal reports one.
    pub viewport: (u16, u16),
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            name: "App",
            max_settle_passes: 16,
            quit_on_escape: true,
            viewport: (80, 24),
        }
    }
}

impl RuntimeConfig {
    /// Create a new config with the given name.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    /// Set the render pass limit (at least one pass always runs).
    pub fn max_settle_passes(mut self, passes: usize) -> Self {
        self.max_settle_passes = passes.max(1);
        self
    }

    /// Keep running when Escape is pressed with nothing focused.
    pub fn keep_on_escape(mut self) -> Self {
        self.quit_on_escape = false;
        self
    }

    pub fn viewport(mut self, width: u16, height: u16) -> Self {
        self.viewport = (width, height);
        self
    }
}
