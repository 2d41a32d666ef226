//! Plain-text surface for terminals.
//!
//! Tiles render as fixed-width cells laid out `columns` per row:
//!
//! ```text
//! Time: 0:07
//! [ 0] [ 1] < C> [ 3]
//! [ 4]      [ 6] [ 7]
//! ```
//!
//! - `[ n]`: face down, `n` is the index to type
//! - `< X>`: face up, `X` is the symbol glyph
//! - blank: cleared

use std::io::{self, Write};

use crate::core::{TileIndex, TileVisual};

use super::DisplaySurface;

/// Board model plus queued messages, rendered on demand.
#[derive(Clone, Debug)]
pub struct TerminalSurface {
    columns: usize,
    visuals: Vec<TileVisual>,
    timer_text: String,
    messages: Vec<String>,
    prompt_pending: bool,
}

impl TerminalSurface {
    /// Create a surface for `tile_count` tiles laid out `columns` wide.
    pub fn new(tile_count: usize, columns: usize) -> Self {
        Self {
            columns: columns.max(1),
            visuals: vec![TileVisual::FaceDown; tile_count],
            timer_text: String::new(),
            messages: Vec::new(),
            prompt_pending: false,
        }
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.visuals.len()
    }

    /// Resize the board, e.g. after a new game with a different pair count.
    /// Every tile comes back face down.
    pub fn resize(&mut self, tile_count: usize) {
        self.visuals = vec![TileVisual::FaceDown; tile_count];
    }

    /// Whether a new game has been offered and not yet rendered.
    #[must_use]
    pub fn prompt_pending(&self) -> bool {
        self.prompt_pending
    }

    /// Width of the index column, so every cell is the same size.
    fn cell_width(&self) -> usize {
        self.visuals.len().saturating_sub(1).to_string().len().max(2)
    }

    fn cell(&self, index: usize, visual: TileVisual) -> String {
        let width = self.cell_width();
        match visual {
            TileVisual::FaceDown => format!("[{:>width$}]", index, width = width),
            TileVisual::FaceUp(symbol) => format!("<{:>width$}>", symbol.glyph(), width = width),
            TileVisual::Cleared => " ".repeat(width + 2),
        }
    }

    /// The board as text, one line per row, without trailing whitespace.
    #[must_use]
    pub fn board_text(&self) -> String {
        let mut lines = Vec::new();
        for (row, chunk) in self.visuals.chunks(self.columns).enumerate() {
            let line = chunk
                .iter()
                .enumerate()
                .map(|(col, visual)| self.cell(row * self.columns + col, *visual))
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    /// Write timer, board, queued messages and any pending prompt.
    ///
    /// Messages and the prompt are shown once.
    pub fn render(&mut self, out: &mut impl Write) -> io::Result<()> {
        if !self.timer_text.is_empty() {
            writeln!(out, "Time: {}", self.timer_text)?;
        }
        writeln!(out, "{}", self.board_text())?;
        for message in self.messages.drain(..) {
            writeln!(out, "{}", message)?;
        }
        if self.prompt_pending {
            writeln!(out, "Type 'n' to play again or 'q' to quit.")?;
            self.prompt_pending = false;
        }
        out.flush()
    }
}

impl DisplaySurface for TerminalSurface {
    fn set_tile_visual(&mut self, index: TileIndex, visual: TileVisual) {
        if let Some(slot) = self.visuals.get_mut(index.raw()) {
            *slot = visual;
        }
    }

    fn set_timer_text(&mut self, text: &str) {
        self.timer_text = text.to_string();
    }

    fn announce(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn prompt_new_game(&mut self) {
        self.prompt_pending = true;
    }
}
