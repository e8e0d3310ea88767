use crate::error::{CliError, Result};
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};

/// Styling applied to labels and values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Cyan labels, yellow values.
    #[default]
    Colored,
    Plain,
}

impl Palette {
    fn label(&self, text: &str) -> String {
        match self {
            Palette::Colored => text.cyan().to_string(),
            Palette::Plain => text.to_string(),
        }
    }

    fn value(&self, text: &str) -> String {
        match self {
            Palette::Colored => text.yellow().to_string(),
            Palette::Plain => text.to_string(),
        }
    }
}

/// Renders an alternating label/value sequence into newline-separated lines.
///
/// Items are consumed two at a time. A label that renders as the empty string
/// emits a blank line and consumes only its own slot, so pairing resumes at the
/// very next item. The final newline is stripped.
///
/// Returns [`CliError::FormatError`] if the sequence ends with a label that has
/// no value.
pub fn render(items: &[&dyn Display], palette: Palette) -> Result<String> {
    let mut out = String::new();
    let mut i = 0;
    while i < items.len() {
        let label = items[i].to_string();
        if label.is_empty() {
            out.push('\n');
            i += 1;
            continue;
        }
        let value = items.get(i + 1).ok_or_else(|| {
            CliError::FormatError(format!("Label '{}' has no value", label))
        })?;
        out.push_str(&palette.label(&label));
        out.push_str(&palette.value(&value.to_string()));
        out.push('\n');
        i += 2;
    }
    if out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

/// Writes key/value blocks to any `Write` destination.
pub struct KvpWriter<W: Write> {
    writer: W,
    palette: Palette,
}

impl<W: Write> KvpWriter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_palette(writer, Palette::default())
    }

    pub fn with_palette(writer: W, palette: Palette) -> Self {
        Self { writer, palette }
    }

    /// Renders `items` and writes them followed by a single newline.
    pub fn write(&mut self, items: &[&dyn Display]) -> Result<()> {
        let text = render(items, self.palette)?;
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Prints `items` to stdout.
pub fn kvp_print(items: &[&dyn Display], palette: Palette) -> Result<()> {
    let stdout = io::stdout();
    KvpWriter::with_palette(stdout.lock(), palette).write(items)
}
