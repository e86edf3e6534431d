use console::style;

/// Styled status lines.
///
/// Status goes to stderr so stdout carries only the rendered result,
/// which keeps `--format json` output pipeable.
pub struct Output {
    enabled: bool,
}

impl Output {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Output that suppresses everything except errors
    pub fn quiet() -> Self {
        Self { enabled: false }
    }

    pub fn success(&self, message: &str) {
        if self.enabled {
            eprintln!("{} {}", style("✓").green(), message);
        }
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn warning(&self, message: &str) {
        if self.enabled {
            eprintln!("{} {}", style("⚠").yellow(), message);
        }
    }

    pub fn info(&self, message: &str) {
        if self.enabled {
            eprintln!("{} {}", style("ℹ").blue(), message);
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
