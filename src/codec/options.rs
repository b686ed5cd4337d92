//! Writer settings shared by the JSON helpers and the converter factory.

/// Output settings for the JSON helpers and dynamic converters.
///
/// Kept `Copy` so converters can hold their own snapshot.
///
/// ```rust
/// use kinded::codec::CodecOptions;
///
/// let opts = CodecOptions::default().pretty(true).indent(4);
/// assert!(opts.is_pretty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    pretty: bool,
    indent: usize,
    trailing_newline: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 2,
            trailing_newline: false,
        }
    }
}

impl CodecOptions {
    /// Enables or disables pretty-printed output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Spaces per nesting level when pretty-printing.
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Appends `\n` to every written document.
    pub fn trailing_newline(mut self, enabled: bool) -> Self {
        self.trailing_newline = enabled;
        self
    }

    /// Whether output is pretty-printed.
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    /// Configured indent width.
    pub fn indent_width(&self) -> usize {
        self.indent
    }

    /// Whether a trailing newline is written.
    pub fn has_trailing_newline(&self) -> bool {
        self.trailing_newline
    }
}
