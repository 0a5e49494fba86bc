use bevy::prelude::*;
use clap::Parser;

use carrot_bounce::config::GameConfig;
use carrot_bounce::GamePlugin;

#[derive(Parser, Debug)]
#[command(name = "carrot_bounce", about = "Endless bunny jumper")]
struct Cli {
    /// Path to the RON game configuration.
    #[arg(long, default_value = "assets/config/game.ron")]
    config: String,
}

fn main() {
    let cli = Cli::parse();
    // Fall back to built-in defaults if the config is missing or malformed.
    let (cfg, load_err) = GameConfig::load_or_default(&cli.config);
    if let Some(err) = &load_err {
        eprintln!("config '{}': {err}; using defaults", cli.config);
    }

    App::new()
        .insert_resource(cfg.clone())
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: cfg.window.title.clone(),
                    resolution: (cfg.window.width, cfg.window.height).into(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins(GamePlugin)
        .run();
}
