use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 640.0,
            title: "Carrot Bounce".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}

/// Half extents of a rendered sprite, also used for its collider.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct HalfSize {
    pub x: f32,
    pub y: f32,
}
impl HalfSize {
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Upward velocity applied on every landing.
    pub jump_impulse: f32,
    /// Horizontal speed while steering mid-air.
    pub run_speed: f32,
    /// Downward acceleration, world units / s^2.
    pub gravity: f32,
    pub half_size: HalfSize,
}
impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            jump_impulse: 300.0,
            run_speed: 200.0,
            gravity: 200.0,
            half_size: HalfSize { x: 32.0, y: 45.0 },
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlatformConfig {
    /// Fixed number of platform slots; recycling never changes it.
    pub count: usize,
    /// Vertical distance between the initial platform rows.
    pub spacing: f32,
    /// Horizontal band platforms are placed in.
    pub x_range: SpawnRange<f32>,
    /// A platform this far below the visible top edge is recycled.
    pub recycle_threshold: f32,
    /// Recycled platforms reappear this far above the visible top edge.
    pub recycle_offset: SpawnRange<f32>,
    pub half_size: HalfSize,
}
impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            count: 5,
            spacing: 150.0,
            x_range: SpawnRange {
                min: -160.0,
                max: 160.0,
            },
            recycle_threshold: 700.0,
            recycle_offset: SpawnRange {
                min: 50.0,
                max: 100.0,
            },
            half_size: HalfSize { x: 95.0, y: 20.0 },
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CarrotConfig {
    pub half_size: HalfSize,
}
impl Default for CarrotConfig {
    fn default() -> Self {
        Self {
            half_size: HalfSize { x: 19.0, y: 27.0 },
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FailConfig {
    /// The run ends once the player is this far below the lowest platform.
    pub drop_margin: f32,
}
impl Default for FailConfig {
    fn default() -> Self {
        Self { drop_margin: 200.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Horizontal dead-zone width as a multiple of the view width.
    /// Above 1.0 the camera never pans sideways.
    pub deadzone_factor: f32,
}
impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            deadzone_factor: 1.5,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub player: PlayerConfig,
    pub platforms: PlatformConfig,
    pub carrot: CarrotConfig,
    pub fail: FailConfig,
    pub camera: CameraConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}
