//! Indentation unit for generated code.

/// Number of spaces one nesting level adds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    width: usize,
}

impl Indent {
    /// Four spaces, the style of generated C++ headers.
    pub const CPP: Self = Self::spaces(4);

    pub const fn spaces(width: usize) -> Self {
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Append the whitespace for `depth` levels to `out`.
    pub(crate) fn write_to(&self, depth: usize, out: &mut String) {
        out.extend(std::iter::repeat_n(' ', self.width * depth));
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CPP
    }
}
