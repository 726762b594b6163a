use clap::Parser;
use geoinvite::config::Settings;
use geoinvite::core::GeoInviter;
use geoinvite::models::Coordinate;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "geoinvite")]
#[command(about = "Invite customers within a radius of the office")]
struct Cli {
    /// Customer file (newline-delimited JSON)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Reference latitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    latitude: Option<f64>,

    /// Reference longitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    longitude: Option<f64>,

    /// Invitation radius in kilometers
    #[arg(long, allow_hyphen_values = true)]
    radius: Option<f64>,

    /// Settings file overriding config/default.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,
}

fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| if cli.verbose { "debug".into() } else { "info".into() });
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let settings = settings.unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    // CLI flags override settings
    let file = cli
        .file
        .unwrap_or_else(|| PathBuf::from(&settings.customers.file));
    let reference = Coordinate::new(
        cli.latitude.unwrap_or(settings.reference.latitude),
        cli.longitude.unwrap_or(settings.reference.longitude),
    );
    let radius_km = cli.radius.unwrap_or(settings.invite.radius_km);

    info!(
        "Inviting customers from {} within {} km of ({}, {})",
        file.display(),
        radius_km,
        reference.latitude,
        reference.longitude
    );

    let mut inviter = GeoInviter::new(file, reference);
    match inviter.invite(radius_km) {
        Ok(invited) => {
            info!("{} customers invited", invited.len());
        }
        Err(e) => {
            error!("Invitation run failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
