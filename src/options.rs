//! Closed value sets for capture options.
//!
//! Every option carries the integer code that downstream consumers read from
//! the transfer payload. Those codes are a published contract and must not
//! change.

use crate::error::{CaptureError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire value used for any option that was never set.
pub const UNSET_CODE: i32 = -1;

/// Common surface of the option enums: a stable code and a stable name.
pub trait CodedOption: Copy + Sized + 'static {
    /// Human readable name of the option family, used in error messages
    const KIND: &'static str;
    /// Every variant, in declaration order
    const ALL: &'static [Self];

    fn code(&self) -> i32;
    fn name(&self) -> &'static str;

    fn from_code(code: i32) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.code() == code)
            .ok_or_else(|| {
                CaptureError::invalid_argument(format!("Unknown {} code: {}", Self::KIND, code))
            })
    }

    fn from_name(name: &str) -> Result<Self> {
        let wanted = name.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.name() == wanted)
            .ok_or_else(|| {
                CaptureError::invalid_argument(format!("Unknown {}: '{}'", Self::KIND, name))
            })
    }
}

/// Resolve an optional code where [`UNSET_CODE`] means "not set".
///
/// A variant that owns -1 itself (`SensorPosition::Unspecified`) wins over
/// the sentinel, so such an enum never decodes to `None`.
pub fn decode_optional<T: CodedOption>(code: i32) -> Result<Option<T>> {
    match T::from_code(code) {
        Ok(option) => Ok(Some(option)),
        Err(_) if code == UNSET_CODE => Ok(None),
        Err(e) => Err(e),
    }
}

/// Code for an optional value, [`UNSET_CODE`] when absent.
pub fn encode_optional<T: CodedOption>(option: Option<T>) -> i32 {
    option.map(|o| o.code()).unwrap_or(UNSET_CODE)
}

macro_rules! coded_option_impls {
    ($ty:ty) => {
        impl TryFrom<i32> for $ty {
            type Error = CaptureError;

            fn try_from(code: i32) -> Result<Self> {
                <$ty as CodedOption>::from_code(code)
            }
        }

        impl From<$ty> for i32 {
            fn from(option: $ty) -> i32 {
                option.code()
            }
        }

        impl FromStr for $ty {
            type Err = CaptureError;

            fn from_str(s: &str) -> Result<Self> {
                <$ty as CodedOption>::from_name(s)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

/// Coarse resolution/bitrate preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaQuality {
    /// Let the camera pipeline pick
    Auto,
    Lowest,
    Low,
    Medium,
    High,
    Highest,
}

impl MediaQuality {
    /// Position on the quality ladder, lowest first. `Auto` is off the ladder.
    pub fn tier(&self) -> Option<u8> {
        match self {
            MediaQuality::Auto => None,
            MediaQuality::Lowest => Some(0),
            MediaQuality::Low => Some(1),
            MediaQuality::Medium => Some(2),
            MediaQuality::High => Some(3),
            MediaQuality::Highest => Some(4),
        }
    }
}

impl CodedOption for MediaQuality {
    const KIND: &'static str = "media quality";
    const ALL: &'static [Self] = &[
        MediaQuality::Auto,
        MediaQuality::Lowest,
        MediaQuality::Low,
        MediaQuality::Medium,
        MediaQuality::High,
        MediaQuality::Highest,
    ];

    fn code(&self) -> i32 {
        match self {
            MediaQuality::Auto => 10,
            MediaQuality::Low => 11,
            MediaQuality::Medium => 12,
            MediaQuality::High => 13,
            MediaQuality::Highest => 14,
            MediaQuality::Lowest => 15,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            MediaQuality::Auto => "auto",
            MediaQuality::Lowest => "lowest",
            MediaQuality::Low => "low",
            MediaQuality::Medium => "medium",
            MediaQuality::High => "high",
            MediaQuality::Highest => "highest",
        }
    }
}

coded_option_impls!(MediaQuality);

/// What the capture is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaAction {
    Video,
    Photo,
    /// Caller lets the user choose between photo and video
    Unspecified,
}

impl CodedOption for MediaAction {
    const KIND: &'static str = "media action";
    const ALL: &'static [Self] = &[
        MediaAction::Video,
        MediaAction::Photo,
        MediaAction::Unspecified,
    ];

    fn code(&self) -> i32 {
        match self {
            MediaAction::Video => 100,
            MediaAction::Photo => 101,
            MediaAction::Unspecified => 102,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            MediaAction::Video => "video",
            MediaAction::Photo => "photo",
            MediaAction::Unspecified => "unspecified",
        }
    }
}

coded_option_impls!(MediaAction);

/// Physical sensor selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraFace {
    Front,
    Rear,
}

impl CodedOption for CameraFace {
    const KIND: &'static str = "camera face";
    const ALL: &'static [Self] = &[CameraFace::Front, CameraFace::Rear];

    fn code(&self) -> i32 {
        match self {
            CameraFace::Front => 0x6,
            CameraFace::Rear => 0x7,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            CameraFace::Front => "front",
            CameraFace::Rear => "rear",
        }
    }
}

coded_option_impls!(CameraFace);

/// Mounting angle of the image sensor relative to the device's natural orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorPosition {
    Left,
    Up,
    Right,
    UpSideDown,
    Unspecified,
}

impl SensorPosition {
    /// Mounting angle in degrees, `None` when unspecified
    pub fn degrees(&self) -> Option<u16> {
        match self {
            SensorPosition::Left => Some(0),
            SensorPosition::Up => Some(90),
            SensorPosition::Right => Some(180),
            SensorPosition::UpSideDown => Some(270),
            SensorPosition::Unspecified => None,
        }
    }
}

impl CodedOption for SensorPosition {
    const KIND: &'static str = "sensor position";
    const ALL: &'static [Self] = &[
        SensorPosition::Left,
        SensorPosition::Up,
        SensorPosition::Right,
        SensorPosition::UpSideDown,
        SensorPosition::Unspecified,
    ];

    fn code(&self) -> i32 {
        match self {
            SensorPosition::Left => 0,
            SensorPosition::Up => 90,
            SensorPosition::Right => 180,
            SensorPosition::UpSideDown => 270,
            SensorPosition::Unspecified => -1,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            SensorPosition::Left => "left",
            SensorPosition::Up => "up",
            SensorPosition::Right => "right",
            SensorPosition::UpSideDown => "up_side_down",
            SensorPosition::Unspecified => "unspecified",
        }
    }
}

coded_option_impls!(SensorPosition);

/// Rotation of the display from its natural orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayRotation {
    #[serde(rename = "rotation_0")]
    Rotation0,
    #[serde(rename = "rotation_90")]
    Rotation90,
    #[serde(rename = "rotation_180")]
    Rotation180,
    #[serde(rename = "rotation_270")]
    Rotation270,
}

impl DisplayRotation {
    /// Get rotation angle in degrees
    pub fn degrees(&self) -> u16 {
        match self {
            DisplayRotation::Rotation0 => 0,
            DisplayRotation::Rotation90 => 90,
            DisplayRotation::Rotation180 => 180,
            DisplayRotation::Rotation270 => 270,
        }
    }

    /// Accepts any multiple of 90, including negative and > 360 angles.
    pub fn from_degrees(degrees: i32) -> Result<Self> {
        if degrees % 90 != 0 {
            return Err(CaptureError::invalid_argument(format!(
                "Display rotation must be a multiple of 90 degrees, got {}",
                degrees
            )));
        }

        match degrees.rem_euclid(360) {
            0 => Ok(DisplayRotation::Rotation0),
            90 => Ok(DisplayRotation::Rotation90),
            180 => Ok(DisplayRotation::Rotation180),
            _ => Ok(DisplayRotation::Rotation270),
        }
    }
}

impl CodedOption for DisplayRotation {
    const KIND: &'static str = "display rotation";
    const ALL: &'static [Self] = &[
        DisplayRotation::Rotation0,
        DisplayRotation::Rotation90,
        DisplayRotation::Rotation180,
        DisplayRotation::Rotation270,
    ];

    fn code(&self) -> i32 {
        i32::from(self.degrees())
    }

    fn name(&self) -> &'static str {
        match self {
            DisplayRotation::Rotation0 => "rotation_0",
            DisplayRotation::Rotation90 => "rotation_90",
            DisplayRotation::Rotation180 => "rotation_180",
            DisplayRotation::Rotation270 => "rotation_270",
        }
    }
}

coded_option_impls!(DisplayRotation);

/// Natural orientation of the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceOrientation {
    Portrait,
    Landscape,
}

impl CodedOption for DeviceOrientation {
    const KIND: &'static str = "device orientation";
    const ALL: &'static [Self] = &[DeviceOrientation::Portrait, DeviceOrientation::Landscape];

    fn code(&self) -> i32 {
        match self {
            DeviceOrientation::Portrait => 0x111,
            DeviceOrientation::Landscape => 0x222,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            DeviceOrientation::Portrait => "portrait",
            DeviceOrientation::Landscape => "landscape",
        }
    }
}

coded_option_impls!(DeviceOrientation);
