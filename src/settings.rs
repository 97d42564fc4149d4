use crate::options::{CameraFace, MediaAction, MediaQuality};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Shortest video duration a caller may request, in milliseconds
pub const MIN_VIDEO_DURATION_MS: u32 = 1000;

/// Smallest video file-size bound a caller may request, in bytes
pub const MIN_VIDEO_FILE_SIZE: u64 = 1_048_576;

/// Deployment defaults applied to every capture configuration built from them
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct CaptureSettings {
    #[serde(default)]
    pub capture: CaptureDefaults,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct CaptureDefaults {
    /// Default media action (video, photo, unspecified)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_action: Option<MediaAction>,

    /// Default quality tier (auto, lowest, low, medium, high, highest)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_quality: Option<MediaQuality>,

    /// Default camera (front, rear)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_face: Option<CameraFace>,

    /// Maximum video duration in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_duration_ms: Option<u32>,

    /// Maximum video file size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_file_size: Option<u64>,
}

impl CaptureDefaults {
    pub fn video_duration(&self) -> Option<Duration> {
        self.video_duration_ms
            .map(|ms| Duration::from_millis(u64::from(ms)))
    }
}

impl CaptureSettings {
    /// Load settings from a specific file path. A missing file is not an error.
    ///
    /// Environment variables use the `CAPTUREKIT_` prefix and `__` between
    /// nesting levels, e.g. `CAPTUREKIT_CAPTURE__MEDIA_QUALITY=high`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy();
        debug!("Loading capture settings from: {}", path_str);

        let settings = Config::builder()
            .add_source(File::with_name(&path_str).required(false))
            .add_source(
                Environment::with_prefix("CAPTUREKIT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: CaptureSettings = settings.try_deserialize()?;

        info!("Capture settings loaded successfully");
        debug!("Final capture settings: {:#?}", settings);

        Ok(settings)
    }

    /// Check the loaded defaults against the caller contract for bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(duration) = self.capture.video_duration_ms {
            if duration < MIN_VIDEO_DURATION_MS {
                return Err(ConfigError::Message(format!(
                    "capture.video_duration_ms must be at least {} ms, got {}",
                    MIN_VIDEO_DURATION_MS, duration
                )));
            }
        }

        if let Some(size) = self.capture.video_file_size {
            if size < MIN_VIDEO_FILE_SIZE {
                return Err(ConfigError::Message(format!(
                    "capture.video_file_size must be at least {} bytes, got {}",
                    MIN_VIDEO_FILE_SIZE, size
                )));
            }
        }

        Ok(())
    }

    /// Render the settings as a TOML document
    pub fn to_toml_string(&self) -> crate::error::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = CaptureSettings::load_from_file(dir.path().join("absent.toml")).unwrap();

        assert_eq!(settings.capture.media_action, None);
        assert_eq!(settings.capture.video_file_size, None);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("capturekit.toml");
        fs::write(
            &path,
            r#"[capture]
media_action = "video"
media_quality = "highest"
video_duration_ms = 15000
video_file_size = 5242880
"#,
        )
        .unwrap();

        let settings = CaptureSettings::load_from_file(&path).unwrap();

        assert_eq!(settings.capture.media_action, Some(MediaAction::Video));
        assert_eq!(settings.capture.media_quality, Some(MediaQuality::Highest));
        assert_eq!(settings.capture.video_duration(), Some(Duration::from_secs(15)));
        assert_eq!(settings.capture.video_file_size, Some(5_242_880));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_unknown_option_name_fails_to_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("capturekit.toml");
        fs::write(&path, "[capture]\nmedia_action = \"timelapse\"\n").unwrap();

        assert!(CaptureSettings::load_from_file(&path).is_err());
    }

    // Only this test sets camera_face from the environment
    #[test]
    fn test_environment_variable_override() {
        let dir = TempDir::new().unwrap();
        env::set_var("CAPTUREKIT_CAPTURE__CAMERA_FACE", "rear");

        let settings = CaptureSettings::load_from_file(dir.path().join("absent.toml"));

        env::remove_var("CAPTUREKIT_CAPTURE__CAMERA_FACE");

        assert_eq!(settings.unwrap().capture.camera_face, Some(CameraFace::Rear));
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = CaptureSettings {
            capture: CaptureDefaults {
                video_duration_ms: Some(999),
                ..Default::default()
            },
        };

        // Below the one-second floor
        assert!(settings.validate().is_err());

        settings.capture.video_duration_ms = Some(MIN_VIDEO_DURATION_MS);
        assert!(settings.validate().is_ok());

        settings.capture.video_file_size = Some(MIN_VIDEO_FILE_SIZE - 1);
        assert!(settings.validate().is_err());

        settings.capture.video_file_size = Some(MIN_VIDEO_FILE_SIZE);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_toml_rendering_reloads() {
        let settings = CaptureSettings {
            capture: CaptureDefaults {
                media_action: Some(MediaAction::Photo),
                media_quality: Some(MediaQuality::Medium),
                ..Default::default()
            },
        };

        let rendered = settings.to_toml_string().unwrap();
        assert!(rendered.contains("media_action = \"photo\""));
        assert!(!rendered.contains("camera_face"));

        let parsed: CaptureSettings = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, settings);
    }
}
