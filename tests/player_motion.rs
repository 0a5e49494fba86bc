use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use carrot_bounce::audio::{PlaySfx, Sfx};
use carrot_bounce::components::{HalfExtents, Player, PlayerPose};
use carrot_bounce::config::GameConfig;
use carrot_bounce::physics::TouchingDown;
use carrot_bounce::player::{player_motion, wrap_player};

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(GameConfig::default());
    app.insert_resource(TouchingDown(false));
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.add_event::<PlaySfx>();
    app.add_systems(Update, (player_motion, wrap_player).chain());
    app
}

fn queued_sfx(app: &App) -> Vec<PlaySfx> {
    let events = app.world().resource::<Events<PlaySfx>>();
    events.get_cursor().read(events).copied().collect()
}

fn spawn_player(app: &mut App, pose: PlayerPose, velocity: Vec2) -> Entity {
    let half = GameConfig::default().player.half_size.as_vec2();
    app.world_mut()
        .spawn((
            Player,
            pose,
            Transform::default(),
            Velocity::linear(velocity),
            HalfExtents(half),
        ))
        .id()
}

#[test]
fn touching_down_bounces_and_switches_to_jump_pose() {
    let mut app = test_app();
    app.insert_resource(TouchingDown(true));
    let player = spawn_player(&mut app, PlayerPose::Stand, Vec2::new(0.0, -120.0));

    app.update();

    let vel = app.world().get::<Velocity>(player).unwrap();
    assert_eq!(vel.linvel.y, 300.0);
    assert_eq!(
        *app.world().get::<PlayerPose>(player).unwrap(),
        PlayerPose::Jump
    );
}

#[test]
fn bounce_writes_the_jump_sound() {
    let mut app = test_app();
    app.insert_resource(TouchingDown(true));
    spawn_player(&mut app, PlayerPose::Stand, Vec2::new(0.0, -120.0));

    app.update();

    assert_eq!(queued_sfx(&app), vec![PlaySfx(Sfx::Jump)]);
}

#[test]
fn no_jump_sound_while_airborne() {
    let mut app = test_app();
    spawn_player(&mut app, PlayerPose::Jump, Vec2::new(0.0, -50.0));

    app.update();

    assert!(queued_sfx(&app).is_empty());
}

#[test]
fn falling_flips_pose_back_to_stand() {
    let mut app = test_app();
    let player = spawn_player(&mut app, PlayerPose::Jump, Vec2::new(0.0, -50.0));

    app.update();

    assert_eq!(
        *app.world().get::<PlayerPose>(player).unwrap(),
        PlayerPose::Stand
    );
}

#[test]
fn rising_player_keeps_jump_pose() {
    let mut app = test_app();
    let player = spawn_player(&mut app, PlayerPose::Jump, Vec2::new(0.0, 150.0));

    app.update();

    assert_eq!(
        *app.world().get::<PlayerPose>(player).unwrap(),
        PlayerPose::Jump
    );
}

#[test]
fn airborne_steering_sets_horizontal_velocity() {
    let mut app = test_app();
    let player = spawn_player(&mut app, PlayerPose::Jump, Vec2::ZERO);
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowLeft);

    app.update();

    assert_eq!(app.world().get::<Velocity>(player).unwrap().linvel.x, -200.0);
}

#[test]
fn steering_is_ignored_while_grounded() {
    let mut app = test_app();
    app.insert_resource(TouchingDown(true));
    let player = spawn_player(&mut app, PlayerPose::Stand, Vec2::new(150.0, 0.0));
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowRight);

    app.update();

    assert_eq!(app.world().get::<Velocity>(player).unwrap().linvel.x, 0.0);
}

#[test]
fn no_input_stops_horizontal_motion() {
    let mut app = test_app();
    let player = spawn_player(&mut app, PlayerPose::Jump, Vec2::new(-200.0, 0.0));

    app.update();

    assert_eq!(app.world().get::<Velocity>(player).unwrap().linvel.x, 0.0);
}

#[test]
fn leaving_the_view_wraps_to_the_opposite_edge() {
    let mut app = test_app();
    let cfg = GameConfig::default();
    let edge = cfg.window.width * 0.5 + cfg.player.half_size.x;
    let player = spawn_player(&mut app, PlayerPose::Jump, Vec2::ZERO);
    app.world_mut()
        .get_mut::<Transform>(player)
        .unwrap()
        .translation
        .x = -(edge + 5.0);

    app.update();

    let x = app.world().get::<Transform>(player).unwrap().translation.x;
    assert_eq!(x, edge);

    // Still in bounds: a second frame must not teleport again.
    app.update();
    assert_eq!(
        app.world().get::<Transform>(player).unwrap().translation.x,
        edge
    );
}
