// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, ValueEnum};
use viewfinder::app::{AppFlags, AppModel};
use viewfinder::config::{Config, ConfigOverrides, LayeredConfig};
use viewfinder::{CaptureMode, i18n};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Photo,
    Video,
}

impl From<ModeArg> for CaptureMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Photo => CaptureMode::Photo,
            ModeArg::Video => CaptureMode::Video,
        }
    }
}

#[derive(Parser)]
#[command(name = "viewfinder")]
#[command(about = "Camera capture view for the COSMIC desktop")]
#[command(version = env!("GIT_VERSION"))]
struct Cli {
    /// Capture mode to start in
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Number of simulated camera devices
    #[arg(short, long)]
    cameras: Option<usize>,

    /// Disable single tap to focus
    #[arg(long)]
    no_tap_to_focus: bool,

    /// Disable double tap to expose
    #[arg(long)]
    no_tap_to_expose: bool,

    /// Disable two-finger double tap to reset focus and exposure
    #[arg(long)]
    no_tap_to_reset: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            capture_mode: self.mode.map(CaptureMode::from),
            simulated_cameras: self.cameras,
            no_tap_to_focus: self.no_tap_to_focus,
            no_tap_to_expose: self.no_tap_to_expose,
            no_tap_to_reset: self.no_tap_to_reset,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=viewfinder=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let overrides = cli.overrides();

    if cli.print_config {
        let (_, stored) = Config::load(<AppModel as cosmic::Application>::APP_ID);
        let config = LayeredConfig::new(stored, overrides);
        println!("{}", config.effective().to_json()?);
        return Ok(());
    }

    run_gui(AppFlags { overrides })
}

fn run_gui(flags: AppFlags) -> Result<(), Box<dyn std::error::Error>> {
    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(360.0)
            .min_height(240.0),
    );

    cosmic::app::run::<AppModel>(settings, flags)?;

    Ok(())
}
