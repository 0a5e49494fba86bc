use bevy::prelude::*;

use super::state::AppState;
use crate::audio::{PlaySfx, Sfx};

pub struct GameOverPlugin;

impl Plugin for GameOverPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(AppState::GameOver),
            (spawn_game_over_ui, play_game_over_sound),
        )
            .add_systems(
                Update,
                handle_restart_input.run_if(in_state(AppState::GameOver)),
            )
            .add_systems(OnExit(AppState::GameOver), despawn_game_over_ui);
    }
}

#[derive(Component)]
struct GameOverUiRoot;

/// State edges run once per transition, so the failure sound cannot repeat
/// within a run.
pub fn play_game_over_sound(mut sfx: EventWriter<PlaySfx>) {
    sfx.write(PlaySfx(Sfx::GameOver));
}

fn spawn_game_over_ui(mut commands: Commands) {
    let root = commands
        .spawn((
            GameOverUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
        ))
        .id();

    commands.entity(root).with_children(|p| {
        p.spawn((
            Text::new("Game Over"),
            TextFont {
                font_size: 48.0,
                ..default()
            },
            TextColor(Color::BLACK),
        ));
        p.spawn((
            Text::new("Press Space to Play Again!"),
            TextFont {
                font_size: 30.0,
                ..default()
            },
            TextColor(Color::BLACK),
        ));
    });
}

fn handle_restart_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if keys.just_pressed(KeyCode::Space) {
        info!(target: "game_over", "restart requested");
        next_state.set(AppState::Playing);
    }
}

fn despawn_game_over_ui(mut commands: Commands, q_root: Query<Entity, With<GameOverUiRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}
