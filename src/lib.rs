pub mod app;
pub mod assets;
pub mod audio;
pub mod camera;
pub mod collect;
pub mod components;
pub mod config;
pub mod fail;
pub mod physics;
pub mod player;
pub mod recycle;
pub mod score;
pub mod spawn;

// Curated re-exports
pub use app::game::GamePlugin;
pub use app::state::AppState;
pub use components::{Carrot, GameCamera, HalfExtents, Platform, Player, PlayerPose};
pub use config::GameConfig;
pub use score::Score;
