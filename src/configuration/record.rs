use crate::options::{CameraFace, MediaAction, MediaQuality};
use crate::settings::{MIN_VIDEO_DURATION_MS, MIN_VIDEO_FILE_SIZE};
use std::fmt;
use std::time::Duration;

/// Immutable capture configuration, bound to the screen that requested it.
///
/// The host is borrowed, never owned: a configuration cannot outlive the
/// screen it was built for. Unset options read back as `None`; consumers
/// decide what an unset option means for them.
pub struct CaptureConfiguration<'h, H: ?Sized> {
    pub(super) host: &'h H,
    pub(super) request_code: i32,
    pub(super) media_action: Option<MediaAction>,
    pub(super) media_quality: Option<MediaQuality>,
    pub(super) camera_face: Option<CameraFace>,
    pub(super) video_duration_ms: Option<u32>,
    pub(super) video_file_size: Option<u64>,
}

impl<'h, H: ?Sized> CaptureConfiguration<'h, H> {
    /// Screen the capture result is delivered back to
    pub fn host(&self) -> &'h H {
        self.host
    }

    /// Correlation token, always non-negative
    pub fn request_code(&self) -> i32 {
        self.request_code
    }

    pub fn media_action(&self) -> Option<MediaAction> {
        self.media_action
    }

    pub fn media_quality(&self) -> Option<MediaQuality> {
        self.media_quality
    }

    pub fn camera_face(&self) -> Option<CameraFace> {
        self.camera_face
    }

    /// Upper bound on recording length, in milliseconds
    pub fn video_duration_ms(&self) -> Option<u32> {
        self.video_duration_ms
    }

    pub fn video_duration(&self) -> Option<Duration> {
        self.video_duration_ms
            .map(|ms| Duration::from_millis(u64::from(ms)))
    }

    /// Upper bound on the recorded file, in bytes
    pub fn video_file_size(&self) -> Option<u64> {
        self.video_file_size
    }

    /// Bounds that are set below what the capture pipeline supports.
    ///
    /// Building never rejects these; callers that want strictness check the
    /// returned list themselves.
    pub fn contract_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        if let Some(duration) = self.video_duration_ms {
            if duration < MIN_VIDEO_DURATION_MS {
                violations.push(format!(
                    "video duration {} ms is below the {} ms minimum",
                    duration, MIN_VIDEO_DURATION_MS
                ));
            }
        }

        if let Some(size) = self.video_file_size {
            if size < MIN_VIDEO_FILE_SIZE {
                violations.push(format!(
                    "video file size {} bytes is below the {} byte minimum",
                    size, MIN_VIDEO_FILE_SIZE
                ));
            }
        }

        violations
    }
}

impl<'h, H: ?Sized> Clone for CaptureConfiguration<'h, H> {
    fn clone(&self) -> Self {
        Self {
            host: self.host,
            request_code: self.request_code,
            media_action: self.media_action,
            media_quality: self.media_quality,
            camera_face: self.camera_face,
            video_duration_ms: self.video_duration_ms,
            video_file_size: self.video_file_size,
        }
    }
}

impl<'h, H: ?Sized> fmt::Debug for CaptureConfiguration<'h, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureConfiguration")
            .field("request_code", &self.request_code)
            .field("media_action", &self.media_action)
            .field("media_quality", &self.media_quality)
            .field("camera_face", &self.camera_face)
            .field("video_duration_ms", &self.video_duration_ms)
            .field("video_file_size", &self.video_file_size)
            .finish_non_exhaustive()
    }
}
