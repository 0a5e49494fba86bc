use bevy::prelude::*;
use bevy_rapier2d::prelude::ColliderDisabled;
use rand::Rng;

use crate::assets::GameAssets;
use crate::components::{Carrot, GameCamera, Platform};
use crate::config::GameConfig;
use crate::spawn::carrot_bundle;

/// The infinite-terrain pass. Any platform that has scrolled far enough
/// below the visible top edge is teleported above it at a random offset,
/// and one carrot is activated on top of it. Collected carrots are pooled
/// and reused before new ones are allocated.
pub fn recycle_platforms(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    assets: Res<GameAssets>,
    cams: Query<&Transform, (With<GameCamera>, Without<Platform>, Without<Carrot>)>,
    mut platforms: Query<&mut Transform, (With<Platform>, Without<Carrot>)>,
    mut pool: Query<
        (Entity, &mut Transform, &mut Visibility),
        (With<Carrot>, With<ColliderDisabled>, Without<Platform>),
    >,
) {
    let Ok(cam) = cams.single() else {
        return;
    };
    let cam_top = cam.translation.y + cfg.window.height * 0.5;
    let carrot_height = cfg.carrot.half_size.y * 2.0;
    let mut rng = rand::thread_rng();
    let mut free: Vec<_> = pool.iter_mut().collect();

    for mut platform in &mut platforms {
        if platform.translation.y > cam_top - cfg.platforms.recycle_threshold {
            continue;
        }
        let offset = rng.gen_range(
            cfg.platforms.recycle_offset.min..=cfg.platforms.recycle_offset.max,
        );
        platform.translation.y = cam_top + offset;

        // One fresh carrot resting on top of the recycled platform.
        let pos = Vec2::new(
            platform.translation.x,
            platform.translation.y + carrot_height,
        );
        if let Some((entity, mut tf, mut vis)) = free.pop() {
            tf.translation.x = pos.x;
            tf.translation.y = pos.y;
            *vis = Visibility::Visible;
            commands.entity(entity).remove::<ColliderDisabled>();
        } else {
            commands.spawn(carrot_bundle(&cfg, &assets, pos));
        }
    }
}
