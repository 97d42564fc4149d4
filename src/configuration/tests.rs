use super::*;
use crate::error::CaptureError;
use crate::options::{CameraFace, MediaAction, MediaQuality};
use crate::settings::{CaptureDefaults, CaptureSettings};
use std::time::Duration;

/// Stand-in for the screen that launches a capture
#[derive(Debug, PartialEq)]
struct TestScreen {
    name: &'static str,
}

fn create_test_screen() -> TestScreen {
    TestScreen { name: "gallery" }
}

#[test]
fn test_build_with_defaults_leaves_options_unset() {
    let screen = create_test_screen();
    let config = CaptureConfigurationBuilder::new(&screen, 0).build().unwrap();

    assert_eq!(config.request_code(), 0);
    assert_eq!(config.media_action(), None);
    assert_eq!(config.media_quality(), None);
    assert_eq!(config.camera_face(), None);
    assert_eq!(config.video_duration(), None);
    assert_eq!(config.video_file_size(), None);
    assert_eq!(config.host().name, "gallery");
}

#[test]
fn test_negative_request_code_rejected() {
    let screen = create_test_screen();
    let result = CaptureConfigurationBuilder::new(&screen, -1).build();

    match result {
        Err(CaptureError::InvalidArgument { message }) => {
            assert!(message.contains("Wrong request code value"));
        }
        other => panic!("Expected invalid argument error, got {:?}", other),
    }
}

#[test]
fn test_negative_request_code_rejected_even_with_options() {
    let screen = create_test_screen();
    let result = CaptureConfigurationBuilder::new(&screen, i32::MIN)
        .media_action(MediaAction::Photo)
        .media_quality(MediaQuality::High)
        .build();

    assert!(result.unwrap_err().is_invalid_argument());
}

#[test]
fn test_media_action_round_trip() {
    let screen = create_test_screen();

    for action in [MediaAction::Video, MediaAction::Photo, MediaAction::Unspecified] {
        let config = CaptureConfigurationBuilder::new(&screen, 7)
            .media_action(action)
            .build()
            .unwrap();
        assert_eq!(config.media_action(), Some(action));
    }
}

#[test]
fn test_video_duration_bounds() {
    let screen = create_test_screen();

    let config = CaptureConfigurationBuilder::new(&screen, 1)
        .video_duration_ms(1000)
        .build()
        .unwrap();
    assert_eq!(config.video_duration(), Some(Duration::from_millis(1000)));
    assert!(config.contract_violations().is_empty());

    // Below the minimum is a caller error, reported but not rejected
    let config = CaptureConfigurationBuilder::new(&screen, 1)
        .video_duration_ms(999)
        .build()
        .unwrap();
    assert_eq!(config.video_duration(), Some(Duration::from_millis(999)));
    assert_eq!(config.contract_violations().len(), 1);
}

#[test]
fn test_video_file_size_bounds() {
    let screen = create_test_screen();

    let config = CaptureConfigurationBuilder::new(&screen, 1)
        .video_file_size(1_048_576)
        .build()
        .unwrap();
    assert_eq!(config.video_file_size(), Some(1_048_576));
    assert!(config.contract_violations().is_empty());

    let config = CaptureConfigurationBuilder::new(&screen, 1)
        .video_file_size(1024)
        .video_duration_ms(10)
        .build()
        .unwrap();
    let violations = config.contract_violations();
    assert_eq!(violations.len(), 2);
    assert!(violations[1].contains("file size"));
}

#[test]
fn test_builder_pattern_chaining() {
    let screen = create_test_screen();
    let config = CaptureConfigurationBuilder::new(&screen, 42)
        .media_action(MediaAction::Video)
        .media_quality(MediaQuality::Lowest)
        .camera_face(CameraFace::Front)
        .build()
        .unwrap();

    assert_eq!(config.request_code(), 42);
    assert_eq!(config.media_action(), Some(MediaAction::Video));
    assert_eq!(config.media_quality(), Some(MediaQuality::Lowest));
    assert_eq!(config.camera_face(), Some(CameraFace::Front));
}

#[test]
fn test_later_setter_overrides_earlier() {
    let screen = create_test_screen();
    let config = CaptureConfigurationBuilder::new(&screen, 3)
        .media_quality(MediaQuality::Low)
        .media_quality(MediaQuality::Auto)
        .build()
        .unwrap();

    assert_eq!(config.media_quality(), Some(MediaQuality::Auto));
}

#[test]
fn test_settings_seed_builder() {
    let screen = create_test_screen();
    let settings = CaptureSettings {
        capture: CaptureDefaults {
            media_action: Some(MediaAction::Video),
            media_quality: Some(MediaQuality::Medium),
            camera_face: Some(CameraFace::Rear),
            video_duration_ms: Some(30_000),
            video_file_size: Some(10 * 1_048_576),
        },
    };

    let config = CaptureConfigurationBuilder::new(&screen, 5)
        .with_settings(&settings)
        .media_quality(MediaQuality::Highest)
        .build()
        .unwrap();

    assert_eq!(config.media_action(), Some(MediaAction::Video));
    assert_eq!(config.media_quality(), Some(MediaQuality::Highest));
    assert_eq!(config.camera_face(), Some(CameraFace::Rear));
    assert_eq!(config.video_duration(), Some(Duration::from_secs(30)));
    assert_eq!(config.video_file_size(), Some(10 * 1_048_576));
}

#[test]
fn test_empty_settings_keep_explicit_values() {
    let screen = create_test_screen();
    let config = CaptureConfigurationBuilder::new(&screen, 1)
        .media_action(MediaAction::Photo)
        .camera_face(CameraFace::Front)
        .video_duration_ms(5_000)
        .with_settings(&CaptureSettings::default())
        .build()
        .unwrap();

    assert_eq!(config.media_action(), Some(MediaAction::Photo));
    assert_eq!(config.camera_face(), Some(CameraFace::Front));
    assert_eq!(config.video_duration_ms(), Some(5_000));
}

#[test]
fn test_partial_settings_only_replace_what_they_set() {
    let screen = create_test_screen();
    let settings = CaptureSettings {
        capture: CaptureDefaults {
            media_quality: Some(MediaQuality::Low),
            ..Default::default()
        },
    };

    let config = CaptureConfigurationBuilder::new(&screen, 1)
        .media_action(MediaAction::Video)
        .media_quality(MediaQuality::High)
        .with_settings(&settings)
        .build()
        .unwrap();

    assert_eq!(config.media_action(), Some(MediaAction::Video));
    assert_eq!(config.media_quality(), Some(MediaQuality::Low));
}

#[test]
fn test_unsized_host() {
    let host: &str = "settings-screen";
    let config = CaptureConfigurationBuilder::new(host, 9).build().unwrap();

    assert_eq!(config.host(), "settings-screen");
    assert!(format!("{:?}", config).contains("request_code: 9"));
}

#[test]
fn test_configuration_readable_across_threads() {
    let screen = create_test_screen();
    let config = CaptureConfigurationBuilder::new(&screen, 11)
        .media_action(MediaAction::Photo)
        .build()
        .unwrap();

    let shared = &config;
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || (shared.request_code(), shared.media_action())))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), (11, Some(MediaAction::Photo)));
        }
    });
}
