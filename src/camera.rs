use bevy::prelude::*;

use crate::components::{GameCamera, Player};
use crate::config::GameConfig;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

pub fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, GameCamera));
}

pub fn reset_camera(mut cams: Query<&mut Transform, With<GameCamera>>) {
    for mut tf in &mut cams {
        tf.translation.x = 0.0;
        tf.translation.y = 0.0;
    }
}

/// Tracks the player vertically every frame; horizontally only once the
/// player leaves the dead-zone. With the default dead-zone (1.5x the view
/// width) the camera never pans sideways.
pub fn follow_player(
    cfg: Res<GameConfig>,
    player: Query<&Transform, (With<Player>, Without<GameCamera>)>,
    mut cams: Query<&mut Transform, With<GameCamera>>,
) {
    let Ok(player) = player.single() else {
        return;
    };
    let Ok(mut cam) = cams.single_mut() else {
        return;
    };
    cam.translation.y = player.translation.y;
    let half_zone = cfg.window.width * cfg.camera.deadzone_factor * 0.5;
    cam.translation.x = deadzone_follow(cam.translation.x, player.translation.x, half_zone);
}

/// Moves `cam_x` just enough to keep the target inside the dead-zone.
pub fn deadzone_follow(cam_x: f32, target_x: f32, half_zone: f32) -> f32 {
    let delta = target_x - cam_x;
    if delta > half_zone {
        target_x - half_zone
    } else if delta < -half_zone {
        target_x + half_zone
    } else {
        cam_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_inside_zone_leaves_camera_still() {
        assert_eq!(deadzone_follow(0.0, 100.0, 360.0), 0.0);
        assert_eq!(deadzone_follow(50.0, -300.0, 360.0), 50.0);
    }

    #[test]
    fn camera_clamps_to_zone_edge() {
        assert_eq!(deadzone_follow(0.0, 500.0, 360.0), 140.0);
        assert_eq!(deadzone_follow(0.0, -500.0, 360.0), -140.0);
    }
}
