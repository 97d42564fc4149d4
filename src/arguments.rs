//! String-keyed payload used to hand a capture configuration to the capture
//! screen, and to hand the capture result back to the requesting screen.
//!
//! Keys and integer codes are shared with consumers outside this crate and
//! must stay byte-for-byte stable.

use crate::configuration::{CaptureConfiguration, CaptureConfigurationBuilder};
use crate::error::{CaptureError, Result};
use crate::options::{decode_optional, encode_optional, MediaAction, UNSET_CODE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Payload keys
pub mod keys {
    pub const REQUEST_CODE: &str = "io.memfis19.annca.request_code";
    pub const MEDIA_ACTION: &str = "io.memfis19.annca.media_action";
    pub const MEDIA_QUALITY: &str = "io.memfis19.annca.camera_media_quality";
    pub const VIDEO_DURATION: &str = "io.memfis19.annca.video_duration";
    pub const VIDEO_FILE_SIZE: &str = "io.memfis19.annca.camera_video_file_size";
    pub const FILE_PATH: &str = "io.memfis19.annca.camera_video_file_path";
}

/// A single typed payload entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ArgumentValue {
    Int(i32),
    Long(i64),
    Text(String),
}

impl ArgumentValue {
    fn type_name(&self) -> &'static str {
        match self {
            ArgumentValue::Int(_) => "int",
            ArgumentValue::Long(_) => "long",
            ArgumentValue::Text(_) => "text",
        }
    }
}

/// Ordered key/value payload crossing a screen-navigation boundary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaptureArguments {
    values: BTreeMap<String, ArgumentValue>,
}

impl CaptureArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_int<K: Into<String>>(&mut self, key: K, value: i32) -> &mut Self {
        self.values.insert(key.into(), ArgumentValue::Int(value));
        self
    }

    pub fn put_long<K: Into<String>>(&mut self, key: K, value: i64) -> &mut Self {
        self.values.insert(key.into(), ArgumentValue::Long(value));
        self
    }

    pub fn put_text<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> &mut Self {
        self.values.insert(key.into(), ArgumentValue::Text(value.into()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&ArgumentValue> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Integer value for `key`, or `default` when absent or of another type
    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        match self.values.get(key) {
            Some(ArgumentValue::Int(value)) => *value,
            _ => default,
        }
    }

    /// Long value for `key`; integer entries are widened
    pub fn get_long(&self, key: &str, default: i64) -> i64 {
        match self.values.get(key) {
            Some(ArgumentValue::Long(value)) => *value,
            Some(ArgumentValue::Int(value)) => i64::from(*value),
            _ => default,
        }
    }

    pub fn get_text(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(ArgumentValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Strictly typed integer lookup: absent is `None`, a wrong type is an error
    fn int_entry(&self, key: &str) -> Result<Option<i32>> {
        match self.values.get(key) {
            None => Ok(None),
            Some(ArgumentValue::Int(value)) => Ok(Some(*value)),
            Some(other) => Err(wrong_type(key, "int", other)),
        }
    }

    fn long_entry(&self, key: &str) -> Result<Option<i64>> {
        match self.values.get(key) {
            None => Ok(None),
            Some(ArgumentValue::Long(value)) => Ok(Some(*value)),
            Some(ArgumentValue::Int(value)) => Ok(Some(i64::from(*value))),
            Some(other) => Err(wrong_type(key, "long", other)),
        }
    }
}

fn wrong_type(key: &str, expected: &str, found: &ArgumentValue) -> CaptureError {
    CaptureError::invalid_argument(format!(
        "Argument '{}' must be {}, found {}",
        key,
        expected,
        found.type_name()
    ))
}

/// Unset bounds travel as -1; any other negative value is malformed
fn non_negative_or_unset(key: &str, value: Option<i64>) -> Result<Option<i64>> {
    match value {
        None => Ok(None),
        Some(v) if v == i64::from(UNSET_CODE) => Ok(None),
        Some(v) if v < 0 => Err(CaptureError::invalid_argument(format!(
            "Argument '{}' must be non-negative, got {}",
            key, v
        ))),
        Some(v) => Ok(Some(v)),
    }
}

fn request_code_from(args: &CaptureArguments) -> Result<i32> {
    args.int_entry(keys::REQUEST_CODE)?.ok_or_else(|| {
        CaptureError::invalid_argument(format!("Missing argument '{}'", keys::REQUEST_CODE))
    })
}

impl<'h, H: ?Sized> CaptureConfiguration<'h, H> {
    /// Flatten into a payload; unset options are written as -1.
    ///
    /// The duration travels as an int and the file size as a long. A bound
    /// that does not fit its wire type is an invalid argument.
    pub fn to_arguments(&self) -> Result<CaptureArguments> {
        let duration_ms = match self.video_duration_ms() {
            Some(ms) => i32::try_from(ms).map_err(|_| {
                CaptureError::invalid_argument(format!(
                    "Video duration {} ms exceeds the payload limit of {} ms",
                    ms,
                    i32::MAX
                ))
            })?,
            None => UNSET_CODE,
        };
        let file_size = match self.video_file_size() {
            Some(size) => i64::try_from(size).map_err(|_| {
                CaptureError::invalid_argument(format!(
                    "Video file size {} bytes exceeds the payload limit of {} bytes",
                    size,
                    i64::MAX
                ))
            })?,
            None => i64::from(UNSET_CODE),
        };

        let mut args = CaptureArguments::new();
        args.put_int(keys::REQUEST_CODE, self.request_code())
            .put_int(keys::MEDIA_ACTION, encode_optional(self.media_action()))
            .put_int(keys::MEDIA_QUALITY, encode_optional(self.media_quality()))
            .put_int(keys::VIDEO_DURATION, duration_ms)
            .put_long(keys::VIDEO_FILE_SIZE, file_size);
        Ok(args)
    }

    /// Rebuild a configuration on the receiving side of a navigation.
    ///
    /// The request code is mandatory and goes through the same check as
    /// [`CaptureConfigurationBuilder::build`]. Unknown option codes fail.
    pub fn from_arguments(host: &'h H, args: &CaptureArguments) -> Result<Self> {
        let mut builder = CaptureConfigurationBuilder::new(host, request_code_from(args)?);

        if let Some(code) = args.int_entry(keys::MEDIA_ACTION)? {
            if let Some(action) = decode_optional(code)? {
                builder = builder.media_action(action);
            }
        }

        if let Some(code) = args.int_entry(keys::MEDIA_QUALITY)? {
            if let Some(quality) = decode_optional(code)? {
                builder = builder.media_quality(quality);
            }
        }

        let duration = args.int_entry(keys::VIDEO_DURATION)?.map(i64::from);
        if let Some(ms) = non_negative_or_unset(keys::VIDEO_DURATION, duration)? {
            builder = builder.video_duration_ms(ms as u32);
        }

        let file_size = args.long_entry(keys::VIDEO_FILE_SIZE)?;
        if let Some(bytes) = non_negative_or_unset(keys::VIDEO_FILE_SIZE, file_size)? {
            builder = builder.video_file_size(bytes as u64);
        }

        debug!("Decoded capture configuration from {} arguments", args.len());
        builder.build()
    }
}

/// What the capture screen delivers back to the requesting screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureResult {
    pub request_code: i32,
    pub media_action: Option<MediaAction>,
    pub file_path: PathBuf,
}

impl CaptureResult {
    /// Result for a capture started from `configuration`
    pub fn for_configuration<H: ?Sized, P: AsRef<Path>>(
        configuration: &CaptureConfiguration<'_, H>,
        file_path: P,
    ) -> Self {
        Self {
            request_code: configuration.request_code(),
            media_action: configuration.media_action(),
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Whether this result answers the request described by `configuration`
    pub fn matches<H: ?Sized>(&self, configuration: &CaptureConfiguration<'_, H>) -> bool {
        self.request_code == configuration.request_code()
    }

    pub fn to_arguments(&self) -> CaptureArguments {
        let mut args = CaptureArguments::new();
        args.put_int(keys::REQUEST_CODE, self.request_code)
            .put_int(keys::MEDIA_ACTION, encode_optional(self.media_action))
            .put_text(keys::FILE_PATH, self.file_path.to_string_lossy());
        args
    }

    pub fn from_arguments(args: &CaptureArguments) -> Result<Self> {
        let request_code = request_code_from(args)?;
        if request_code < 0 {
            return Err(CaptureError::invalid_argument(format!(
                "Result request code must be non-negative, got {}",
                request_code
            )));
        }

        let media_action = match args.int_entry(keys::MEDIA_ACTION)? {
            Some(code) => decode_optional(code)?,
            None => None,
        };

        let file_path = match args.get(keys::FILE_PATH) {
            Some(ArgumentValue::Text(path)) => PathBuf::from(path),
            Some(other) => return Err(wrong_type(keys::FILE_PATH, "text", other)),
            None => {
                return Err(CaptureError::invalid_argument(format!(
                    "Missing argument '{}'",
                    keys::FILE_PATH
                )))
            }
        };

        Ok(Self {
            request_code,
            media_action,
            file_path,
        })
    }
}
