use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_rapier2d::pipeline::{BevyPhysicsHooks, PairFilterContextView};
use bevy_rapier2d::prelude::*;
use bevy_rapier2d::rapier::prelude::SolverFlags;
use std::collections::HashSet;

use crate::components::{HalfExtents, Platform, Player};
use crate::config::GameConfig;

/// How far the player's feet may already be below a platform top while a
/// landing contact is still accepted. Absorbs one physics step of overlap.
const LANDING_GRACE: f32 = 12.0;

/// The "grounded" signal: true while the player's body rests on a platform.
#[derive(Resource, Default)]
pub struct TouchingDown(pub bool);

/// Platform entities currently in contact with the player.
#[derive(Resource, Default)]
pub(crate) struct GroundContacts(HashSet<Entity>);

pub struct PhysicsSetupPlugin;

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TouchingDown>()
            .init_resource::<GroundContacts>()
            .add_plugins(RapierPhysicsPlugin::<OneWayPlatformHook>::default())
            .add_systems(Startup, configure_gravity);
    }
}

fn configure_gravity(mut q_cfg: Query<&mut RapierConfiguration>, game_cfg: Res<GameConfig>) {
    // RapierConfiguration lives on the physics context entity.
    if let Ok(mut cfg) = q_cfg.single_mut() {
        cfg.gravity = Vect::new(0.0, -game_cfg.player.gravity);
    }
}

/// Contact filter making platforms one-way: the player only ever collides
/// with a platform top while falling onto it, never from below or the sides.
#[derive(SystemParam)]
pub struct OneWayPlatformHook<'w, 's> {
    player: Query<
        'w,
        's,
        (&'static Transform, &'static Velocity, &'static HalfExtents),
        With<Player>,
    >,
    platforms: Query<'w, 's, (&'static Transform, &'static HalfExtents), With<Platform>>,
}

impl BevyPhysicsHooks for OneWayPlatformHook<'_, '_> {
    fn filter_contact_pair(&self, context: PairFilterContextView) -> Option<SolverFlags> {
        let (a, b) = (context.collider1(), context.collider2());
        let (player_entity, other) = if self.player.contains(a) {
            (a, b)
        } else if self.player.contains(b) {
            (b, a)
        } else {
            return Some(SolverFlags::COMPUTE_IMPULSES);
        };
        let (Ok((p_tf, p_vel, p_half)), Ok((s_tf, s_half))) =
            (self.player.get(player_entity), self.platforms.get(other))
        else {
            return Some(SolverFlags::COMPUTE_IMPULSES);
        };
        let feet = p_tf.translation.y - p_half.y;
        let top = s_tf.translation.y + s_half.y;
        if one_way_contact_allowed(feet, p_vel.linvel.y, top) {
            Some(SolverFlags::COMPUTE_IMPULSES)
        } else {
            None
        }
    }
}

/// A player/platform contact counts only when the player is not moving
/// upward and its feet are at (or barely below) the platform top.
pub fn one_way_contact_allowed(player_feet: f32, player_vy: f32, platform_top: f32) -> bool {
    player_vy <= 0.0 && player_feet >= platform_top - LANDING_GRACE
}

/// Derives [`TouchingDown`] from rapier's contact start/stop events.
pub fn update_grounded(
    mut contacts: ResMut<GroundContacts>,
    mut touching: ResMut<TouchingDown>,
    mut collisions: EventReader<CollisionEvent>,
    player: Query<Entity, With<Player>>,
    platforms: Query<(), With<Platform>>,
) {
    let Ok(player) = player.single() else {
        return;
    };
    for ev in collisions.read() {
        let (started, a, b) = match ev {
            CollisionEvent::Started(a, b, _) => (true, *a, *b),
            CollisionEvent::Stopped(a, b, _) => (false, *a, *b),
        };
        let other = if a == player {
            b
        } else if b == player {
            a
        } else {
            continue;
        };
        if platforms.get(other).is_err() {
            continue;
        }
        if started {
            contacts.0.insert(other);
        } else {
            contacts.0.remove(&other);
        }
    }
    touching.0 = !contacts.0.is_empty();
}

/// Clears grounding state when a fresh run starts.
pub fn reset_grounding(
    mut contacts: ResMut<GroundContacts>,
    mut touching: ResMut<TouchingDown>,
) {
    contacts.0.clear();
    touching.0 = false;
}
