//! Bounded plain-text rendering of pages.
//!
//! Lines are accumulated one at a time and the ceilings are checked before
//! each append, so the output stops at the first line that would exceed
//! either limit.

use std::ops::ControlFlow;

use crate::block::Block;
use crate::error::StoryError;
use crate::page::PageDocument;

/// Output ceilings for [`render_page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderLimits {
    /// Emit the title and a blank line before the story.
    pub include_title: bool,
    /// Maximum number of story lines. The title is not counted.
    pub max_lines: usize,
    /// Maximum number of characters, title and line separators included.
    pub max_chars: usize,
}

impl RenderLimits {
    /// Default line ceiling for synopses.
    pub const SYNOPSIS_MAX_LINES: usize = 8;
    /// Default character ceiling for synopses.
    pub const SYNOPSIS_MAX_CHARS: usize = 500;

    /// No ceilings.
    pub fn full(include_title: bool) -> Self {
        Self {
            include_title,
            max_lines: usize::MAX,
            max_chars: usize::MAX,
        }
    }

    /// Short summary: title plus the first few lines.
    pub fn synopsis() -> Self {
        Self {
            include_title: true,
            max_lines: Self::SYNOPSIS_MAX_LINES,
            max_chars: Self::SYNOPSIS_MAX_CHARS,
        }
    }
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self::full(true)
    }
}

/// Text accumulated so far with its line and character counts.
#[derive(Default)]
struct Accumulator {
    text: String,
    lines: usize,
    chars: usize,
}

impl Accumulator {
    fn push_title(&mut self, title: &str) {
        self.text.push_str(title);
        self.text.push_str("\n\n");
        self.chars += title.chars().count() + 2;
    }

    /// Append one line, or break if it would exceed a limit.
    fn push_line(&mut self, line: &str, limits: &RenderLimits) -> ControlFlow<()> {
        if line.trim().is_empty() {
            return ControlFlow::Continue(());
        }

        let width = line.chars().count();
        let next_chars = self.chars.saturating_add(width).saturating_add(1);
        if self.lines >= limits.max_lines || next_chars > limits.max_chars {
            return ControlFlow::Break(());
        }

        self.text.push_str(line);
        self.text.push('\n');
        self.lines += 1;
        self.chars = next_chars;
        ControlFlow::Continue(())
    }

    fn finish(mut self) -> String {
        self.text.truncate(self.text.trim_end().len());
        self.text
    }
}

/// Render a page as plain text within `limits`.
///
/// Blocks appear in story order. Whitespace-only lines are dropped, and the
/// result carries no trailing whitespace.
pub fn render_page(page: &PageDocument, limits: &RenderLimits) -> String {
    let mut acc = Accumulator::default();
    if limits.include_title && !page.title.is_empty() {
        acc.push_title(&page.title);
    }

    'story: for rendered in page.story.iter().filter_map(Block::render) {
        for line in rendered.split('\n') {
            if acc.push_line(line, limits).is_break() {
                break 'story;
            }
        }
    }

    acc.finish()
}

/// Parse raw page JSON and render it.
///
/// # Errors
///
/// Returns [`StoryError::MalformedInput`] if the text is not a JSON object.
pub fn render_page_json(raw: &str, limits: &RenderLimits) -> Result<String, StoryError> {
    PageDocument::parse(raw).map(|page| render_page(&page, limits))
}
