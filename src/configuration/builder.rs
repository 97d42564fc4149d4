use super::record::CaptureConfiguration;
use crate::error::{CaptureError, Result};
use crate::options::{CameraFace, MediaAction, MediaQuality};
use crate::settings::CaptureSettings;
use tracing::{debug, warn};

/// Builder for [`CaptureConfiguration`].
///
/// Setters store values as given. The only check happens in [`build`]:
/// the request code must be non-negative.
///
/// [`build`]: CaptureConfigurationBuilder::build
pub struct CaptureConfigurationBuilder<'h, H: ?Sized> {
    host: &'h H,
    request_code: i32,
    media_action: Option<MediaAction>,
    media_quality: Option<MediaQuality>,
    camera_face: Option<CameraFace>,
    video_duration_ms: Option<u32>,
    video_file_size: Option<u64>,
}

impl<'h, H: ?Sized> CaptureConfigurationBuilder<'h, H> {
    pub fn new(host: &'h H, request_code: i32) -> Self {
        Self {
            host,
            request_code,
            media_action: None,
            media_quality: None,
            camera_face: None,
            video_duration_ms: None,
            video_file_size: None,
        }
    }

    /// Apply loaded settings. Options the settings leave unset keep their
    /// current value; setters called afterwards win.
    pub fn with_settings(mut self, settings: &CaptureSettings) -> Self {
        let defaults = &settings.capture;
        if let Some(action) = defaults.media_action {
            self.media_action = Some(action);
        }
        if let Some(quality) = defaults.media_quality {
            self.media_quality = Some(quality);
        }
        if let Some(face) = defaults.camera_face {
            self.camera_face = Some(face);
        }
        if let Some(ms) = defaults.video_duration_ms {
            self.video_duration_ms = Some(ms);
        }
        if let Some(bytes) = defaults.video_file_size {
            self.video_file_size = Some(bytes);
        }
        self
    }

    pub fn media_action(mut self, media_action: MediaAction) -> Self {
        self.media_action = Some(media_action);
        self
    }

    pub fn media_quality(mut self, media_quality: MediaQuality) -> Self {
        self.media_quality = Some(media_quality);
        self
    }

    pub fn camera_face(mut self, camera_face: CameraFace) -> Self {
        self.camera_face = Some(camera_face);
        self
    }

    /// Maximum recording length in milliseconds; callers should pass at least 1000
    pub fn video_duration_ms(mut self, milliseconds: u32) -> Self {
        self.video_duration_ms = Some(milliseconds);
        self
    }

    /// Maximum file size in bytes; callers should pass at least 1 MiB
    pub fn video_file_size(mut self, bytes: u64) -> Self {
        self.video_file_size = Some(bytes);
        self
    }

    pub fn build(self) -> Result<CaptureConfiguration<'h, H>> {
        if self.request_code < 0 {
            warn!(
                "Rejecting capture configuration with request code {}",
                self.request_code
            );
            return Err(CaptureError::invalid_argument(
                "Wrong request code value. Please set the value > 0.",
            ));
        }

        let configuration = CaptureConfiguration {
            host: self.host,
            request_code: self.request_code,
            media_action: self.media_action,
            media_quality: self.media_quality,
            camera_face: self.camera_face,
            video_duration_ms: self.video_duration_ms,
            video_file_size: self.video_file_size,
        };

        debug!("Built capture configuration: {:?}", configuration);
        Ok(configuration)
    }
}
