use crate::style::RunStyle;
use crate::units::Mm;

/// A single piece of text positioned on a page. Offsets are in millimetres
/// from the top-left corner of the page; the output sink converts to the
/// PDF coordinate space when rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: Mm,
    pub y: Mm,
    pub style: RunStyle,
}

/// One output page: an ordered sequence of positioned text runs. Pages are
/// created lazily by the formatter whenever the cursor would overflow the
/// maximum printable offset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub runs: Vec<TextRun>,
}

impl Page {
    pub fn new() -> Page {
        Page::default()
    }

    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }
}
