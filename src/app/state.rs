use bevy::prelude::*;

/// Run lifecycle. Entering `Playing` rebuilds the scene and resets the score;
/// `GameOver` is terminal until the restart key re-enters `Playing`.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    #[default]
    Playing,
    GameOver,
}
