use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    #[serde(default = "default_log_fps")]
    pub log_fps: bool,

    #[serde(default)]
    pub camera: CameraConfig,

    #[serde(default)]
    pub click: ClickConfig,
}

/// Free-fly camera tunables, the fields the original exposed in its
/// inspector panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "default_move_speed")]
    pub move_speed: f32,

    #[serde(default = "default_sprint_multiplier")]
    pub sprint_multiplier: f32,

    /// Exponential decay rate applied to velocity when no movement key
    /// is held.
    #[serde(default = "default_damping")]
    pub damping: f32,

    /// Degrees of rotation per pixel of pointer motion.
    #[serde(default = "default_mouse_sensitivity")]
    pub mouse_sensitivity: f32,

    /// Pitch clamp, degrees above/below the horizon.
    #[serde(default = "default_pitch_clamp_deg")]
    pub pitch_clamp_deg: f32,
}

/// Click-to-open configuration: which collider is the clickable target
/// and which URL it opens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickConfig {
    #[serde(default = "default_click_target")]
    pub target: String,

    #[serde(default = "default_click_url")]
    pub url: String,
}

fn default_title() -> String {
    "Vitrine".to_string()
}
fn default_width() -> u32 {
    1280
}
fn default_height() -> u32 {
    720
}
fn default_log_fps() -> bool {
    true
}

fn default_move_speed() -> f32 {
    8.0
}
fn default_sprint_multiplier() -> f32 {
    2.0
}
fn default_damping() -> f32 {
    5.0
}
fn default_mouse_sensitivity() -> f32 {
    0.12
}
fn default_pitch_clamp_deg() -> f32 {
    85.0
}

fn default_click_target() -> String {
    "placard".to_string()
}
fn default_click_url() -> String {
    "https://www.example.com".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            log_fps: default_log_fps(),
            camera: CameraConfig::default(),
            click: ClickConfig::default(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            move_speed: default_move_speed(),
            sprint_multiplier: default_sprint_multiplier(),
            damping: default_damping(),
            mouse_sensitivity: default_mouse_sensitivity(),
            pitch_clamp_deg: default_pitch_clamp_deg(),
        }
    }
}

impl Default for ClickConfig {
    fn default() -> Self {
        Self {
            target: default_click_target(),
            url: default_click_url(),
        }
    }
}

impl EngineConfig {
    /// Missing file falls back to defaults; a malformed file is an error.
    pub fn load_or_default(path: &str) -> EngineResult<Self> {
        match fs::read_to_string(path) {
            Ok(s) => {
                let cfg: EngineConfig = toml::from_str(&s)
                    .map_err(|e| EngineError::Config(format!("parse {}: {}", path, e)))?;
                Ok(cfg)
            }
            Err(_) => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = EngineConfig::load_or_default("/nonexistent/vitrine.toml").unwrap();
        assert_eq!(cfg.camera.move_speed, 8.0);
        assert_eq!(cfg.click.url, "https://www.example.com");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let cfg: EngineConfig = toml::from_str(
            r#"
            title = "demo"

            [camera]
            move_speed = 3.5

            [click]
            url = "https://docs.rs"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.title, "demo");
        assert_eq!(cfg.camera.move_speed, 3.5);
        assert_eq!(cfg.camera.sprint_multiplier, 2.0);
        assert_eq!(cfg.click.url, "https://docs.rs");
        assert_eq!(cfg.click.target, "placard");
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = std::env::temp_dir().join("vitrine_cfg_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[camera\nmove_speed = ").unwrap();

        let err = EngineConfig::load_or_default(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }
}
