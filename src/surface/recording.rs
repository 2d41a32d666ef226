//! Surface that records every command.

use crate::core::{TileIndex, TileVisual};

use super::{DisplaySurface, SurfaceCommand};

/// Records commands and keeps the latest state per tile.
///
/// ## Behavior
///
/// - `commands()`: every command, in order
/// - `visual(i)`: last visual set for tile `i` (FaceDown if never set)
/// - `timer_text()`: last timer text
/// - `announcements()`: every announced message
/// - `prompts()`: how many times a new game was offered
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
    visuals: Vec<TileVisual>,
    timer_text: String,
    prompts: usize,
}

impl RecordingSurface {
    /// Create a recorder for a board of `tile_count` tiles.
    pub fn new(tile_count: usize) -> Self {
        Self {
            visuals: vec![TileVisual::FaceDown; tile_count],
            ..Self::default()
        }
    }

    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Last visual set for `index`.
    #[must_use]
    pub fn visual(&self, index: TileIndex) -> TileVisual {
        self.visuals.get(index.raw()).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn visuals(&self) -> &[TileVisual] {
        &self.visuals
    }

    #[must_use]
    pub fn timer_text(&self) -> &str {
        &self.timer_text
    }

    #[must_use]
    pub fn announcements(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                SurfaceCommand::Announce(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn last_announcement(&self) -> Option<&str> {
        self.announcements().last().copied()
    }

    #[must_use]
    pub fn prompts(&self) -> usize {
        self.prompts
    }

    /// Forget recorded commands, keeping the current board state.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl DisplaySurface for RecordingSurface {
    fn set_tile_visual(&mut self, index: TileIndex, visual: TileVisual) {
        if index.raw() >= self.visuals.len() {
            self.visuals.resize(index.raw() + 1, TileVisual::FaceDown);
        }
        self.visuals[index.raw()] = visual;
        self.commands.push(SurfaceCommand::SetTileVisual(index, visual));
    }

    fn set_timer_text(&mut self, text: &str) {
        self.timer_text = text.to_string();
        self.commands.push(SurfaceCommand::SetTimerText(text.to_string()));
    }

    fn announce(&mut self, message: &str) {
        self.commands.push(SurfaceCommand::Announce(message.to_string()));
    }

    fn prompt_new_game(&mut self) {
        self.prompts += 1;
        self.commands.push(SurfaceCommand::PromptNewGame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;

    #[test]
    fn test_new_recorder() {
        let surface = RecordingSurface::new(4);
        assert!(surface.commands().is_empty());
        assert_eq!(surface.visuals().len(), 4);
        assert!(surface.visuals().iter().all(|v| *v == TileVisual::FaceDown));
        assert_eq!(surface.timer_text(), "");
        assert_eq!(surface.prompts(), 0);
    }

    #[test]
    fn test_tracks_latest_visual() {
        let mut surface = RecordingSurface::new(4);
        let tile = TileIndex::new(2);

        surface.set_tile_visual(tile, TileVisual::FaceUp(Symbol::new(1)));
        surface.set_tile_visual(tile, TileVisual::Cleared);

        assert_eq!(surface.visual(tile), TileVisual::Cleared);
        assert_eq!(surface.commands().len(), 2);
    }

    #[test]
    fn test_grows_for_unknown_tiles() {
        let mut surface = RecordingSurface::default();
        surface.set_tile_visual(TileIndex::new(3), TileVisual::Cleared);
        assert_eq!(surface.visuals().len(), 4);
        assert_eq!(surface.visual(TileIndex::new(0)), TileVisual::FaceDown);
        assert_eq!(surface.visual(TileIndex::new(9)), TileVisual::FaceDown);
    }

    #[test]
    fn test_announcements_and_prompts() {
        let mut surface = RecordingSurface::new(2);
        surface.announce("Not a match. Try again.");
        surface.set_timer_text("0:01");
        surface.announce("Match found!");
        surface.prompt_new_game();

        assert_eq!(surface.announcements(), vec!["Not a match. Try again.", "Match found!"]);
        assert_eq!(surface.last_announcement(), Some("Match found!"));
        assert_eq!(surface.timer_text(), "0:01");
        assert_eq!(surface.prompts(), 1);

        surface.clear_commands();
        assert!(surface.commands().is_empty());
        assert_eq!(surface.timer_text(), "0:01");
    }
}
