pub mod arguments;
pub mod configuration;
pub mod error;
pub mod options;
pub mod settings;

pub use arguments::{keys, ArgumentValue, CaptureArguments, CaptureResult};
pub use configuration::{CaptureConfiguration, CaptureConfigurationBuilder};
pub use error::{CaptureError, Result};
pub use options::{
    CameraFace, CodedOption, DeviceOrientation, DisplayRotation, MediaAction, MediaQuality,
    SensorPosition, UNSET_CODE,
};
pub use settings::{CaptureDefaults, CaptureSettings, MIN_VIDEO_DURATION_MS, MIN_VIDEO_FILE_SIZE};
