use bevy::prelude::*;

/// The bunny. Exactly one exists while a run is active.
#[derive(Component)]
pub struct Player;

/// One of the fixed platform slots. Repositioned by the recycler, never despawned mid-run.
#[derive(Component)]
pub struct Platform;

/// A pooled collectible. Collection hides it; recycling reactivates it.
#[derive(Component)]
pub struct Carrot;

/// Marker for the single gameplay camera.
#[derive(Component)]
pub struct GameCamera;

/// Everything spawned for one run; despawned wholesale when the run ends.
#[derive(Component)]
pub struct RunScoped;

/// HUD label showing the collected count.
#[derive(Component)]
pub struct ScoreText;

/// Which bunny texture is displayed. The naming follows the sprite art:
/// `Jump` while grounded/launching, `Stand` while falling. Intentional,
/// do not "fix".
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerPose {
    Stand,
    Jump,
}

/// Half extents of the entity's sprite and collider.
#[derive(Component, Debug, Clone, Copy, Deref)]
pub struct HalfExtents(pub Vec2);
