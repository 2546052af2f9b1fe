//! styled text and block layout for the terminal pages
use {
    crate::theme::palette::ColorRole,
    unicode_width::{UnicodeWidthChar, UnicodeWidthStr},
};

/// a run of text drawn in one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// the text
    pub text: String,
    /// the foreground color
    pub fg: Option<ColorRole>,
    /// the background color
    pub bg: Option<ColorRole>,
    /// draw in bold
    pub bold: bool,
}

impl Span {
    /// unstyled text
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: None,
            bg: None,
            bold: false,
        }
    }

    /// text in a theme color
    pub fn colored(text: impl Into<String>, role: ColorRole) -> Self {
        Self {
            fg: Some(role),
            ..Self::plain(text)
        }
    }

    /// make the span bold
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// the display width of the span
    pub fn width(&self) -> usize {
        self.text.width()
    }
}

/// a line made of spans
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    /// the spans, left to right
    pub spans: Vec<Span>,
}

impl Line {
    /// an empty line
    pub fn blank() -> Self {
        Self::default()
    }

    /// a line with a single span
    pub fn from_span(span: Span) -> Self {
        Self { spans: vec![span] }
    }

    /// a line of text in one color
    pub fn colored(text: impl Into<String>, role: ColorRole) -> Self {
        Self::from_span(Span::colored(text, role))
    }

    /// append a span
    pub fn push(&mut self, span: Span) -> &mut Self {
        self.spans.push(span);
        self
    }

    /// append a span, builder style
    pub fn with(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    /// the display width of the line
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// the line without any styling
    pub fn plain(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// pad the line with spaces up to `width`
    pub fn pad_to(mut self, width: usize) -> Self {
        let current = self.width();

        if current < width {
            self.spans.push(Span::plain(" ".repeat(width - current)));
        }

        self
    }
}

/// a stack of lines
pub type Block = Vec<Line>;

/// cut `text` down to `width` columns, ending in an ellipsis if anything was cut
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;

    for c in text.chars() {
        let w = c.width().unwrap_or(0);

        if used + w > width - 1 {
            break;
        }

        out.push(c);
        used += w;
    }

    out.push('…');
    out
}

/// word wrap `text` to `width` columns
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width.max(1))
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// word wrap `text` and keep at most `max_lines` lines, the last one ellipsized if cut
pub fn clamp(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap(text, width);

    if lines.len() > max_lines {
        lines.truncate(max_lines);

        if let Some(last) = lines.last_mut() {
            *last = truncate(&format!("{} …", last), width);
            if !last.ends_with('…') {
                last.push('…');
            }
        }
    }

    lines
}

/// put blocks next to each other, each padded to `col_width` and separated by `gap` spaces
pub fn hjoin(blocks: &[Block], col_width: usize, gap: usize) -> Block {
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let mut out = Vec::with_capacity(height);

    for row in 0..height {
        let mut line = Line::blank();

        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                line.push(Span::plain(" ".repeat(gap)));
            }

            let cell = block.get(row).cloned().unwrap_or_default();
            line.spans.extend(cell.pad_to(col_width).spans);
        }

        out.push(line);
    }

    out
}

/// lay `blocks` out in rows of `columns` blocks that share `width` columns
pub fn grid(blocks: Vec<Block>, columns: usize, width: usize, gap: usize) -> Block {
    let columns = columns.max(1);
    let col_width = cell_width(columns, width, gap);
    let mut out = Vec::new();

    for (i, row) in blocks.chunks(columns).enumerate() {
        if i > 0 {
            out.push(Line::blank());
        }

        out.extend(hjoin(row, col_width, gap));
    }

    out
}

/// put `right` next to `left`, padding `left` to `left_width`
pub fn beside(left: Block, left_width: usize, right: Block, gap: usize) -> Block {
    let height = left.len().max(right.len());
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    let mut out = Vec::with_capacity(height);

    for _ in 0..height {
        let mut line = left.next().unwrap_or_default().pad_to(left_width + gap);
        line.spans.extend(right.next().unwrap_or_default().spans);
        out.push(line);
    }

    out
}

/// how wide each cell of a grid is
pub fn cell_width(columns: usize, width: usize, gap: usize) -> usize {
    let columns = columns.max(1);
    width.saturating_sub(gap * (columns - 1)) / columns
}
