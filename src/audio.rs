use bevy::prelude::*;

/// Fire-and-forget sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sfx {
    Jump,
    Crunch,
    GameOver,
}

/// Queued by gameplay systems, drained once per frame by [`play_queued_sfx`].
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySfx(pub Sfx);

#[derive(Resource, Clone)]
pub struct SfxAssets {
    pub jump: Handle<AudioSource>,
    pub crunch: Handle<AudioSource>,
    pub game_over: Handle<AudioSource>,
}

pub struct SfxPlugin;

impl Plugin for SfxPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlaySfx>()
            .add_systems(Startup, load_sfx)
            .add_systems(Update, play_queued_sfx);
    }
}

fn load_sfx(mut commands: Commands, server: Res<AssetServer>) {
    commands.insert_resource(SfxAssets {
        jump: server.load("sfx/phase_jump.ogg"),
        crunch: server.load("sfx/carrot_crunch.ogg"),
        game_over: server.load("sfx/high_down.ogg"),
    });
}

fn play_queued_sfx(
    mut commands: Commands,
    sfx: Option<Res<SfxAssets>>,
    mut events: EventReader<PlaySfx>,
) {
    let Some(sfx) = sfx else {
        events.clear();
        return;
    };
    for PlaySfx(kind) in events.read() {
        let handle = match kind {
            Sfx::Jump => sfx.jump.clone(),
            Sfx::Crunch => sfx.crunch.clone(),
            Sfx::GameOver => sfx.game_over.clone(),
        };
        commands.spawn((AudioPlayer::new(handle), PlaybackSettings::DESPAWN));
    }
}
