use bevy::prelude::*;

use carrot_bounce::app::game_over::play_game_over_sound;
use carrot_bounce::app::state::AppState;
use carrot_bounce::audio::{PlaySfx, Sfx};
use carrot_bounce::components::{Platform, Player};
use carrot_bounce::config::GameConfig;
use carrot_bounce::fail::detect_fall;

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, bevy::state::app::StatesPlugin));
    app.init_state::<AppState>();
    app.insert_resource(GameConfig::default());
    app.add_event::<PlaySfx>();
    app.add_systems(Update, detect_fall.run_if(in_state(AppState::Playing)));
    app.add_systems(OnEnter(AppState::GameOver), play_game_over_sound);
    app
}

fn spawn_ladder(app: &mut App, ys: &[f32]) {
    for &y in ys {
        app.world_mut().spawn((Platform, Transform::from_xyz(0.0, y, 0.0)));
    }
}

fn state(app: &App) -> AppState {
    *app.world().resource::<State<AppState>>().get()
}

#[test]
fn falling_past_the_lowest_platform_ends_the_run() {
    let mut app = test_app();
    spawn_ladder(&mut app, &[0.0, -150.0, -300.0, -450.0, -600.0]);
    app.world_mut()
        .spawn((Player, Transform::from_xyz(0.0, -900.0, 0.0)));

    // Frame 1 queues the transition, frame 2 applies it.
    app.update();
    app.update();

    assert_eq!(state(&app), AppState::GameOver);
}

#[test]
fn player_within_margin_keeps_playing() {
    let mut app = test_app();
    spawn_ladder(&mut app, &[0.0, -150.0, -300.0, -450.0, -600.0]);
    // Exactly at the margin: the condition is strictly below it.
    app.world_mut()
        .spawn((Player, Transform::from_xyz(0.0, -800.0, 0.0)));

    app.update();
    app.update();

    assert_eq!(state(&app), AppState::Playing);
}

#[test]
fn margin_is_measured_from_the_lowest_platform() {
    let mut app = test_app();
    // Lowest is -600 even though it is listed first.
    spawn_ladder(&mut app, &[-600.0, 0.0, -150.0]);
    app.world_mut()
        .spawn((Player, Transform::from_xyz(0.0, -790.0, 0.0)));

    app.update();
    app.update();

    assert_eq!(state(&app), AppState::Playing);
}

#[test]
fn fail_transition_is_terminal_for_the_run() {
    let mut app = test_app();
    spawn_ladder(&mut app, &[0.0]);
    app.world_mut()
        .spawn((Player, Transform::from_xyz(0.0, -500.0, 0.0)));

    app.update();
    app.update();
    assert_eq!(state(&app), AppState::GameOver);

    // Further frames stay in GameOver; the detector is gated off.
    app.update();
    assert_eq!(state(&app), AppState::GameOver);
}

#[test]
fn game_over_sound_plays_exactly_once() {
    let mut app = test_app();
    spawn_ladder(&mut app, &[0.0]);
    app.world_mut()
        .spawn((Player, Transform::from_xyz(0.0, -500.0, 0.0)));

    let mut cursor = app.world().resource::<Events<PlaySfx>>().get_cursor();
    let mut heard: Vec<PlaySfx> = Vec::new();
    for _ in 0..4 {
        app.update();
        let events = app.world().resource::<Events<PlaySfx>>();
        heard.extend(cursor.read(events).copied());
    }

    assert_eq!(heard, vec![PlaySfx(Sfx::GameOver)]);
    assert_eq!(state(&app), AppState::GameOver);
}
