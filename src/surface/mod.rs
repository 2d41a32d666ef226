//! Display surfaces.
//!
//! The coordinator never draws anything itself. It issues commands to a
//! `DisplaySurface`, and whatever front end is attached (a terminal, a web
//! page, a native window, a test recorder) decides how to show them.
//!
//! Two surfaces ship with the crate:
//!
//! - [`RecordingSurface`]: records every command; used by tests and by
//!   embedders that poll state instead of reacting to callbacks
//! - [`TerminalSurface`]: keeps a board model and renders it as text

mod recording;
mod terminal;

pub use recording::RecordingSurface;
pub use terminal::TerminalSurface;

use serde::{Deserialize, Serialize};

use crate::core::{TileIndex, TileVisual};

/// A single command issued to a surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceCommand {
    SetTileVisual(TileIndex, TileVisual),
    SetTimerText(String),
    Announce(String),
    PromptNewGame,
}

/// Output side of the game: everything the coordinator shows the user.
///
/// Implementations must not call back into the coordinator.
pub trait DisplaySurface {
    /// Show tile `index` in the given state.
    fn set_tile_visual(&mut self, index: TileIndex, visual: TileVisual);

    /// Replace the timer text. An empty string clears it.
    fn set_timer_text(&mut self, text: &str);

    /// Show a round-outcome or game-complete message.
    fn announce(&mut self, message: &str);

    /// Offer the user a new game.
    fn prompt_new_game(&mut self);

    /// Apply a recorded command.
    fn apply(&mut self, command: &SurfaceCommand) {
        match command {
            SurfaceCommand::SetTileVisual(index, visual) => self.set_tile_visual(*index, *visual),
            SurfaceCommand::SetTimerText(text) => self.set_timer_text(text),
            SurfaceCommand::Announce(message) => self.announce(message),
            SurfaceCommand::PromptNewGame => self.prompt_new_game(),
        }
    }
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for &mut S {
    fn set_tile_visual(&mut self, index: TileIndex, visual: TileVisual) {
        (**self).set_tile_visual(index, visual);
    }

    fn set_timer_text(&mut self, text: &str) {
        (**self).set_timer_text(text);
    }

    fn announce(&mut self, message: &str) {
        (**self).announce(message);
    }

    fn prompt_new_game(&mut self) {
        (**self).prompt_new_game();
    }
}
