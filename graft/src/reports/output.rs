//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render an added item (e.g., new file).
    fn added_item(&mut self, text: &str);

    /// Render a diagnostic on the error stream.
    fn diagnostic(&mut self, text: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Emit generated content exactly as given.
    fn raw(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
///
/// In quiet mode only raw content is printed; errors surface separately.
pub struct TerminalOutput {
    quiet: bool,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn quiet(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print a status line unless quiet.
    fn status(&self, line: std::fmt::Arguments<'_>) {
        if !self.quiet {
            println!("{}", line);
        }
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        self.status(format_args!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.status(format_args!("{}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.status(format_args!("  - {}", text));
    }

    fn added_item(&mut self, text: &str) {
        self.status(format_args!("  + {}", text));
    }

    fn diagnostic(&mut self, text: &str) {
        if !self.quiet {
            eprintln!("{}", text);
        }
    }

    fn divider(&mut self, label: &str) {
        self.status(format_args!("── {} ──", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.status(format_args!("{}", text));
    }

    fn raw(&mut self, text: &str) {
        print!("{}", text);
    }

    fn newline(&mut self) {
        self.status(format_args!(""));
    }
}

/// Output that records every call, for report tests.
#[cfg(test)]
#[derive(Default)]
pub struct Recorder {
    pub stdout: String,
    pub stderr: String,
}

#[cfg(test)]
impl Output for Recorder {
    fn section(&mut self, name: &str) {
        self.stdout.push_str(&format!("{}:\n", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.stdout.push_str(&format!("{}: {}\n", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.stdout.push_str(&format!("  - {}\n", text));
    }

    fn added_item(&mut self, text: &str) {
        self.stdout.push_str(&format!("  + {}\n", text));
    }

    fn diagnostic(&mut self, text: &str) {
        self.stderr.push_str(&format!("{}\n", text));
    }

    fn divider(&mut self, label: &str) {
        self.stdout.push_str(&format!("── {} ──\n", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.stdout.push_str(&format!("{}\n", text));
    }

    fn raw(&mut self, text: &str) {
        self.stdout.push_str(text);
    }

    fn newline(&mut self) {
        self.stdout.push('\n');
    }
}
