//! Append-only text buffer for generated code.

use super::Indent;

/// Text buffer that tracks the current nesting depth.
///
/// Whole lines go through [`push_line`](Self::push_line). A line built from
/// several pieces starts with [`begin_line`](Self::begin_line), is extended
/// with [`push_raw`](Self::push_raw) and closed by
/// [`end_line`](Self::end_line). Blank lines never carry indentation.
///
/// ```
/// use graft_codegen::builder::CodeBuilder;
///
/// let mut out = CodeBuilder::cpp();
/// out.push_line("struct Point {").push_indent();
/// out.begin_line().push_raw("double").push_raw(" X;").end_line();
/// out.push_dedent().push_line("};");
///
/// assert_eq!(out.build(), "struct Point {\n    double X;\n};\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent: Indent,
    depth: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            depth: 0,
            buffer: String::new(),
        }
    }

    /// Builder with four-space indentation.
    pub fn cpp() -> Self {
        Self::new(Indent::CPP)
    }

    pub fn push_line(&mut self, line: &str) -> &mut Self {
        self.begin_line().push_raw(line).end_line()
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.end_line()
    }

    /// Append text to the current line as-is.
    pub fn push_raw(&mut self, text: &str) -> &mut Self {
        self.buffer.push_str(text);
        self
    }

    /// Start a line at the current depth.
    pub fn begin_line(&mut self) -> &mut Self {
        self.indent.write_to(self.depth, &mut self.buffer);
        self
    }

    pub fn end_line(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Leave one nesting level; stays at zero when already there.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::cpp()
    }
}
