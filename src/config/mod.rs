//! Runtime settings for the interactive shell

pub const DEFAULT_TITLE: &str = "Welcome to Goa University Management System";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub title: String,
    pub color: bool,
    pub verbose: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            color: true,
            verbose: false,
        }
    }
}

impl ShellConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank titles fall back to the default banner
    pub fn with_title(mut self, title: Option<String>) -> Self {
        if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
            self.title = title;
        }
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Applies the color setting process-wide
    pub fn apply_color(&self) {
        if self.color {
            colored::control::unset_override();
        } else {
            colored::control::set_override(false);
        }
    }
}
