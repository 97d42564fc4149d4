use anyhow::{Context, Result};
use capturekit::{
    CameraFace, CaptureConfigurationBuilder, CaptureSettings, MediaAction, MediaQuality,
};
use clap::{Parser, ValueEnum};
use tracing::{error, info, warn};

/// Host name the CLI registers as when building configurations
const CLI_HOST: &str = "capturekit-cli";

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "capturekit")]
#[command(about = "Build and validate camera capture configurations")]
#[command(version)]
#[command(long_about = "Builds a capture configuration from layered settings and command line \
overrides, validates it, and prints the string-keyed payload a capture screen consumes.")]
struct Args {
    /// Path to settings file
    #[arg(short, long, default_value = "capturekit.toml", help = "Path to TOML settings file")]
    config: String,

    /// Enable debug logging (most verbose)
    #[arg(short, long, help = "Enable debug level logging")]
    debug: bool,

    /// Enable verbose logging (info level)
    #[arg(short, long, help = "Enable verbose info level logging")]
    verbose: bool,

    /// Enable quiet mode (errors only)
    #[arg(short, long, help = "Enable quiet mode - only log errors")]
    quiet: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Validate settings and exit
    #[arg(long, help = "Validate settings file and exit without building a configuration")]
    validate_config: bool,

    /// Print effective settings and exit
    #[arg(long, help = "Print effective settings in TOML format and exit")]
    print_config: bool,

    /// Correlation token echoed back with the capture result
    #[arg(short, long, allow_negative_numbers = true, required_unless_present_any = ["validate_config", "print_config"])]
    request_code: Option<i32>,

    /// Media action: video, photo or unspecified
    #[arg(long, value_name = "ACTION")]
    action: Option<MediaAction>,

    /// Media quality: auto, lowest, low, medium, high or highest
    #[arg(long, value_name = "QUALITY")]
    quality: Option<MediaQuality>,

    /// Camera face: front or rear
    #[arg(long, value_name = "FACE")]
    face: Option<CameraFace>,

    /// Maximum video duration in milliseconds
    #[arg(long, value_name = "MS")]
    duration_ms: Option<u32>,

    /// Maximum video file size in bytes
    #[arg(long, value_name = "BYTES")]
    file_size: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args)?;

    info!("Starting capturekit v{}", env!("CARGO_PKG_VERSION"));
    info!("Settings file: {}", args.config);

    let settings = CaptureSettings::load_from_file(&args.config).map_err(|e| {
        error!("Failed to load settings: {}", e);
        e
    })?;

    if args.print_config {
        println!("{}", settings.to_toml_string()?);
        return Ok(());
    }

    if args.validate_config {
        match settings.validate() {
            Ok(()) => {
                info!("Settings validation successful");
                println!("✓ Settings are valid");
                return Ok(());
            }
            Err(e) => {
                error!("Settings validation failed: {}", e);
                eprintln!("✗ Settings validation failed: {}", e);
                std::process::exit(1);
            }
        }
    }

    settings.validate().context("Invalid capture settings")?;

    let request_code = args
        .request_code
        .context("--request-code is required to build a configuration")?;

    let mut builder =
        CaptureConfigurationBuilder::new(CLI_HOST, request_code).with_settings(&settings);
    if let Some(action) = args.action {
        builder = builder.media_action(action);
    }
    if let Some(quality) = args.quality {
        builder = builder.media_quality(quality);
    }
    if let Some(face) = args.face {
        builder = builder.camera_face(face);
    }
    if let Some(duration_ms) = args.duration_ms {
        builder = builder.video_duration_ms(duration_ms);
    }
    if let Some(file_size) = args.file_size {
        builder = builder.video_file_size(file_size);
    }

    let configuration = match builder.build() {
        Ok(configuration) => configuration,
        Err(e) => {
            error!("Failed to build capture configuration: {}", e);
            eprintln!("✗ {}", e);
            std::process::exit(2);
        }
    };

    for violation in configuration.contract_violations() {
        warn!("Capture configuration outside supported range: {}", violation);
    }

    println!("{}", configuration.to_arguments()?.to_json()?);
    Ok(())
}

fn init_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let log_level = if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else if args.quiet {
        "error"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("capturekit={}", log_level)));

    // stdout carries the payload, so logs go to stderr
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    match args.log_format {
        LogFormat::Json => subscriber.json().try_init(),
        LogFormat::Text => subscriber.compact().with_target(false).try_init(),
    }
    .map_err(anyhow::Error::msg)
}
