use bevy::prelude::*;
use bevy_rapier2d::prelude::{ColliderDisabled, CollisionEvent};

use crate::audio::{PlaySfx, Sfx};
use crate::components::{Carrot, Player};
use crate::score::Score;

/// Drains the overlap events between the player and active carrots: hides
/// the carrot, disables its collision body (returning it to the pool), and
/// bumps the score. Already-hidden carrots are skipped so a stale event can
/// never double-count.
pub fn handle_carrot_collection(
    mut commands: Commands,
    mut collisions: EventReader<CollisionEvent>,
    player: Query<(), With<Player>>,
    mut carrots: Query<&mut Visibility, With<Carrot>>,
    mut score: ResMut<Score>,
    mut sfx: EventWriter<PlaySfx>,
) {
    for ev in collisions.read() {
        let CollisionEvent::Started(a, b, _) = ev else {
            continue;
        };
        let (carrot, other) = if carrots.contains(*a) {
            (*a, *b)
        } else if carrots.contains(*b) {
            (*b, *a)
        } else {
            continue;
        };
        if player.get(other).is_err() {
            continue;
        }
        let Ok(mut vis) = carrots.get_mut(carrot) else {
            continue;
        };
        if *vis == Visibility::Hidden {
            continue;
        }
        *vis = Visibility::Hidden;
        commands.entity(carrot).insert(ColliderDisabled);
        score.0 += 1;
        sfx.write(PlaySfx(Sfx::Crunch));
    }
}
