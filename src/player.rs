use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use crate::assets::GameAssets;
use crate::audio::{PlaySfx, Sfx};
use crate::components::{HalfExtents, Player, PlayerPose};
use crate::config::GameConfig;
use crate::physics::TouchingDown;

/// Per-frame motion pass: bounce on landing, pose switching, and mid-air
/// steering. Steering is deliberately inert while grounded, and the pose
/// names are inverted on purpose (`Jump` when launching, `Stand` while
/// falling) to match the sprite art.
pub fn player_motion(
    cfg: Res<GameConfig>,
    keys: Res<ButtonInput<KeyCode>>,
    touching: Res<TouchingDown>,
    mut q: Query<(&mut Velocity, &mut PlayerPose), With<Player>>,
    mut sfx: EventWriter<PlaySfx>,
) {
    let Ok((mut vel, mut pose)) = q.single_mut() else {
        return;
    };
    let grounded = touching.0;

    if grounded {
        vel.linvel.y = cfg.player.jump_impulse;
        pose.set_if_neq(PlayerPose::Jump);
        sfx.write(PlaySfx(Sfx::Jump));
    } else if vel.linvel.y < 0.0 && *pose != PlayerPose::Stand {
        *pose = PlayerPose::Stand;
    }

    let left = keys.pressed(KeyCode::ArrowLeft);
    let right = keys.pressed(KeyCode::ArrowRight);
    if left && !grounded {
        vel.linvel.x = -cfg.player.run_speed;
    } else if right && !grounded {
        vel.linvel.x = cfg.player.run_speed;
    } else {
        vel.linvel.x = 0.0;
    }
}

/// Teleports the player to the opposite edge once it fully leaves the view.
pub fn wrap_player(
    cfg: Res<GameConfig>,
    mut q: Query<(&mut Transform, &HalfExtents), With<Player>>,
) {
    let Ok((mut tf, half)) = q.single_mut() else {
        return;
    };
    tf.translation.x = wrap_x(tf.translation.x, half.x, cfg.window.width);
}

/// Wrap-around on a view of `view_width` centered on x = 0. At most one
/// teleport per call.
pub fn wrap_x(x: f32, half_sprite: f32, view_width: f32) -> f32 {
    let edge = view_width * 0.5 + half_sprite;
    if x < -edge {
        edge
    } else if x > edge {
        -edge
    } else {
        x
    }
}

/// Swaps the bunny texture whenever the pose changes.
pub fn sync_player_pose_sprite(
    assets: Res<GameAssets>,
    mut q: Query<(&PlayerPose, &mut Sprite), (With<Player>, Changed<PlayerPose>)>,
) {
    for (pose, mut sprite) in &mut q {
        sprite.image = match pose {
            PlayerPose::Stand => assets.bunny_stand.clone(),
            PlayerPose::Jump => assets.bunny_jump.clone(),
        };
    }
}
