use bevy::prelude::*;

use crate::app::game_over::GameOverPlugin;
use crate::app::state::AppState;
use crate::assets::{self, GameAssetsPlugin};
use crate::audio::SfxPlugin;
use crate::camera::{self, CameraPlugin};
use crate::collect::handle_carrot_collection;
use crate::fail::detect_fall;
use crate::physics::{self, PhysicsSetupPlugin};
use crate::player::{player_motion, sync_player_pose_sprite, wrap_player};
use crate::recycle::recycle_platforms;
use crate::score::{update_score_text, Score};
use crate::spawn::{self, despawn_run, spawn_run};

/// Per-frame gameplay passes, in the fixed order the scene update runs them:
/// recycle off-screen platforms, move the player, check the fail condition,
/// then drain collection events.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameplaySet {
    Recycle,
    Motion,
    Fail,
    Collect,
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_resource::<Score>()
            .insert_resource(ClearColor(Color::srgb(0.80, 0.89, 0.97)))
            .add_plugins((
                CameraPlugin,
                GameAssetsPlugin,
                PhysicsSetupPlugin,
                SfxPlugin,
                GameOverPlugin,
            ))
            .configure_sets(
                Update,
                (
                    GameplaySet::Recycle,
                    GameplaySet::Motion,
                    GameplaySet::Fail,
                    GameplaySet::Collect,
                )
                    .chain()
                    .run_if(in_state(AppState::Playing)),
            )
            .add_systems(
                Startup,
                spawn::spawn_background
                    .after(camera::setup_camera)
                    .after(assets::load_assets),
            )
            .add_systems(
                OnEnter(AppState::Playing),
                (spawn_run, physics::reset_grounding, camera::reset_camera),
            )
            .add_systems(OnExit(AppState::Playing), despawn_run)
            .add_systems(Update, recycle_platforms.in_set(GameplaySet::Recycle))
            .add_systems(
                Update,
                (
                    physics::update_grounded,
                    player_motion,
                    wrap_player,
                    camera::follow_player,
                    sync_player_pose_sprite,
                )
                    .chain()
                    .in_set(GameplaySet::Motion),
            )
            .add_systems(Update, detect_fall.in_set(GameplaySet::Fail))
            .add_systems(
                Update,
                (handle_carrot_collection, update_score_text)
                    .chain()
                    .in_set(GameplaySet::Collect),
            );
    }
}
