use bevy::prelude::*;

use crate::app::state::AppState;
use crate::components::{Platform, Player};
use crate::config::GameConfig;

/// Ends the run once the player has fallen more than the configured margin
/// below the lowest platform. The `OnEnter(GameOver)` edge plays the
/// failure sound, so it fires exactly once per run.
pub fn detect_fall(
    cfg: Res<GameConfig>,
    player: Query<&Transform, With<Player>>,
    platforms: Query<&Transform, With<Platform>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Ok(player) = player.single() else {
        return;
    };
    let Some(lowest) = lowest_platform_y(platforms.iter().map(|t| t.translation.y)) else {
        return;
    };
    if player.translation.y < lowest - cfg.fail.drop_margin {
        info!(target: "fail", "player fell below the lowest platform, ending run");
        next_state.set(AppState::GameOver);
    }
}

/// Minimum y over all platforms; ties keep the first one encountered.
pub fn lowest_platform_y(ys: impl IntoIterator<Item = f32>) -> Option<f32> {
    ys.into_iter().reduce(|a, b| if b < a { b } else { a })
}
