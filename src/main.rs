// SPDX-License-Identifier: GPL-3.0-only

use camera_capture::app::{AppModel, CaptureOptions};
use camera_capture::i18n;
use camera_capture::session::enumeration;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "camera-capture")]
#[command(about = "Camera capture component for the COSMIC desktop")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Disable video recording (photo only)
    #[arg(long)]
    no_video: bool,

    /// Maximum recording length in seconds
    #[arg(long, default_value_t = camera_capture::constants::capture::DEFAULT_MAX_VIDEO_DURATION_SECS)]
    max_duration: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// List available cameras
    List,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG controls verbosity, e.g. RUST_LOG=camera_capture=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::List) => list_cameras(),
        None => run_gui(cli),
    }
}

fn list_cameras() -> Result<(), Box<dyn std::error::Error>> {
    let cameras = enumeration::enumerate_cameras()?;
    if cameras.is_empty() {
        println!("No cameras found");
        return Ok(());
    }
    for camera in cameras {
        let target = camera.target.as_deref().unwrap_or("-");
        println!("{} [{}] serial={}", camera.name, camera.facing, target);
    }
    Ok(())
}

fn run_gui(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();
    i18n::init(&requested_languages);

    let options = CaptureOptions {
        on_media: Some(std::sync::Arc::new(|path, bytes| {
            println!("{} ({} bytes)", path.display(), bytes.len());
        })),
        video_allowed: !cli.no_video,
        max_video_duration_secs: cli.max_duration,
        exit_on_dismiss: true,
        ..CaptureOptions::default()
    };

    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(360.0)
            .min_height(480.0),
    );
    cosmic::app::run::<AppModel>(settings, options)?;
    Ok(())
}
