use bevy::prelude::*;

/// Texture handles for the run entities. `Default` (dangling handles) is
/// good enough for headless tests; sprites carry an explicit `custom_size`
/// so layout never depends on the image data.
#[derive(Resource, Default, Clone)]
pub struct GameAssets {
    pub bunny_stand: Handle<Image>,
    pub bunny_jump: Handle<Image>,
    pub platform: Handle<Image>,
    pub carrot: Handle<Image>,
    pub background: Handle<Image>,
}

pub struct GameAssetsPlugin;

impl Plugin for GameAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_assets);
    }
}

pub fn load_assets(mut commands: Commands, server: Res<AssetServer>) {
    commands.insert_resource(GameAssets {
        bunny_stand: server.load("sprites/bunny_stand.png"),
        bunny_jump: server.load("sprites/bunny_jump.png"),
        platform: server.load("sprites/ground_cake.png"),
        carrot: server.load("sprites/carrot_cake.png"),
        background: server.load("sprites/sprinkle_sky.png"),
    });
}
