//! Output trait for rendering reports.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render it.
pub trait Output {
    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render a warning or error message.
    fn warning(&mut self, msg: &str);

    /// Render a line of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render text exactly as given, without adding a newline.
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
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn raw(&mut self, text: &str) {
        print!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Output that records everything into a string, for tests.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub stdout: String,
    pub stderr: String,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn key_value(&mut self, key: &str, value: &str) {
        self.stdout.push_str(&format!("{}: {}\n", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.stdout.push_str(&format!("  - {}\n", text));
    }

    fn warning(&mut self, msg: &str) {
        self.stderr.push_str(msg);
        self.stderr.push('\n');
    }

    fn preformatted(&mut self, text: &str) {
        self.stdout.push_str(text);
        self.stdout.push('\n');
    }

    fn raw(&mut self, text: &str) {
        self.stdout.push_str(text);
    }

    fn newline(&mut self) {
        self.stdout.push('\n');
    }
}
