use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use crate::assets::GameAssets;
use crate::components::{
    Carrot, GameCamera, HalfExtents, Platform, Player, PlayerPose, RunScoped, ScoreText,
};
use crate::config::GameConfig;
use crate::physics::TouchingDown;
use crate::score::{score_text, Score};

const Z_PLATFORM: f32 = 0.0;
const Z_CARROT: f32 = 0.5;
const Z_PLAYER: f32 = 1.0;

/// Builds a fresh run: score reset, player at the view center, the fixed
/// platform ladder, and the HUD label.
pub fn spawn_run(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    assets: Res<GameAssets>,
    mut score: ResMut<Score>,
    mut touching: ResMut<TouchingDown>,
) {
    score.0 = 0;
    touching.0 = false;

    let player_half = cfg.player.half_size.as_vec2();
    commands.spawn((
        Player,
        RunScoped,
        PlayerPose::Stand,
        Sprite {
            image: assets.bunny_stand.clone(),
            custom_size: Some(player_half * 2.0),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, Z_PLAYER),
        RigidBody::Dynamic,
        Collider::cuboid(player_half.x, player_half.y),
        Velocity::zero(),
        LockedAxes::ROTATION_LOCKED,
        Ccd::enabled(),
        ActiveEvents::COLLISION_EVENTS,
        ActiveHooks::FILTER_CONTACT_PAIRS,
        HalfExtents(player_half),
    ));

    let mut rng = rand::thread_rng();
    let half_h = cfg.window.height * 0.5;
    for i in 0..cfg.platforms.count {
        let x = rng.gen_range(cfg.platforms.x_range.min..cfg.platforms.x_range.max);
        let y = half_h - cfg.platforms.spacing * i as f32;
        commands.spawn(platform_bundle(&cfg, &assets, Vec2::new(x, y)));
    }

    commands.spawn((
        ScoreText,
        RunScoped,
        Text::new(score_text(0)),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::BLACK),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            justify_self: JustifySelf::Center,
            ..default()
        },
    ));
}

pub fn platform_bundle(cfg: &GameConfig, assets: &GameAssets, pos: Vec2) -> impl Bundle {
    let half = cfg.platforms.half_size.as_vec2();
    (
        Platform,
        RunScoped,
        Sprite {
            image: assets.platform.clone(),
            custom_size: Some(half * 2.0),
            ..default()
        },
        Transform::from_translation(pos.extend(Z_PLATFORM)),
        RigidBody::Fixed,
        Collider::cuboid(half.x, half.y),
        ActiveHooks::FILTER_CONTACT_PAIRS,
        HalfExtents(half),
    )
}

pub fn carrot_bundle(cfg: &GameConfig, assets: &GameAssets, pos: Vec2) -> impl Bundle {
    let half = cfg.carrot.half_size.as_vec2();
    (
        Carrot,
        RunScoped,
        Sprite {
            image: assets.carrot.clone(),
            custom_size: Some(half * 2.0),
            ..default()
        },
        Transform::from_translation(pos.extend(Z_CARROT)),
        Visibility::Visible,
        Collider::cuboid(half.x, half.y),
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
        HalfExtents(half),
    )
}

/// Static backdrop parented to the camera so it never scrolls out of view.
pub fn spawn_background(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    assets: Res<GameAssets>,
    cams: Query<Entity, With<GameCamera>>,
) {
    let Ok(cam) = cams.single() else {
        return;
    };
    commands.entity(cam).with_children(|p| {
        p.spawn((
            Sprite {
                image: assets.background.clone(),
                custom_size: Some(Vec2::new(cfg.window.width, cfg.window.height)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, -10.0),
        ));
    });
}

pub fn despawn_run(mut commands: Commands, q: Query<Entity, With<RunScoped>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
