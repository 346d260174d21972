use super::render::Frame;

/// Window of rows currently shown on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    top: usize,
    rows: usize,
}

impl Viewport {
    pub fn new(rows: usize) -> Self {
        Self {
            top: 0,
            rows: rows.max(1),
        }
    }

    pub fn top(&self) -> usize {
        self.top
    }

    pub fn scroll_down(&mut self, by: usize, frame: &Frame) {
        self.top = self.top.saturating_add(by);
        self.clamp(frame);
    }

    pub fn scroll_up(&mut self, by: usize) {
        self.top = self.top.saturating_sub(by);
    }

    pub fn scroll_to_top(&mut self) {
        self.top = 0;
    }

    /// Keeps the window inside the document after it shrinks or grows.
    pub fn clamp(&mut self, frame: &Frame) {
        let max_top = frame.len().saturating_sub(self.rows);
        self.top = self.top.min(max_top);
    }

    pub fn contains(&self, row: usize) -> bool {
        row >= self.top && row < self.top + self.rows
    }

    /// Visibility of the anchor, or `None` when no anchor is mounted.
    pub fn anchor_visibility(&self, frame: &Frame) -> Option<bool> {
        frame.anchor_row.map(|row| self.contains(row))
    }

    pub fn window<'f>(&self, frame: &'f Frame) -> &'f [String] {
        let start = self.top.min(frame.len());
        let end = (self.top + self.rows).min(frame.len());
        &frame.lines[start..end]
    }
}
